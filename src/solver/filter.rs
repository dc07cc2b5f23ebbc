//! Candidate filtering
//!
//! Narrows a candidate set to the words still consistent with a guess and
//! its observed pattern. Each candidate is matched directly against the
//! pattern instead of being re-scored.

use super::CandidateSet;
use crate::core::{LetterOutcome, Pattern, Word};

/// Check whether `word` could be the answer given `guess` scored `pattern`
///
/// Positional rules:
/// - `Correct`: the word has the guessed letter at that position
/// - `Misplaced`: the word has a different letter there, but contains the guessed letter
/// - `Absent`: the word has a different letter there
///
/// Letter-count rule, for every distinct guessed letter: `required` is the
/// number of its Correct/Misplaced marks. If the letter has an Absent mark the
/// word must hold exactly `required` copies of it (gray means "no more than
/// those already confirmed", not "none"), otherwise at least `required`.
///
/// # Examples
/// ```
/// use wordle_coach::core::{Pattern, Word};
/// use wordle_coach::solver::matches;
///
/// let guess = Word::new("slate").unwrap();
/// let pattern = Pattern::parse("--G-G").unwrap();
///
/// assert!(matches(&Word::new("crane").unwrap(), &guess, pattern));
/// assert!(!matches(&Word::new("roate").unwrap(), &guess, pattern));
/// ```
#[must_use]
pub fn matches(word: &Word, guess: &Word, pattern: Pattern) -> bool {
    let letters = word.chars();
    let guessed = guess.chars();

    for (i, &outcome) in pattern.outcomes().iter().enumerate() {
        let consistent = match outcome {
            LetterOutcome::Correct => letters[i] == guessed[i],
            LetterOutcome::Misplaced => letters[i] != guessed[i] && word.has_letter(guessed[i]),
            LetterOutcome::Absent => letters[i] != guessed[i],
        };
        if !consistent {
            return false;
        }
    }

    for (i, &letter) in guessed.iter().enumerate() {
        // Each distinct letter once
        if guessed[..i].contains(&letter) {
            continue;
        }

        let mut required = 0;
        let mut has_absent = false;
        for (&other, outcome) in guessed.iter().zip(pattern.outcomes()) {
            if other == letter {
                if outcome.is_present() {
                    required += 1;
                } else {
                    has_absent = true;
                }
            }
        }

        let actual = word.count_of(letter);
        if (has_absent && actual != required) || actual < required {
            return false;
        }
    }

    true
}

/// Keep only the candidates consistent with `guess` scoring `pattern`
///
/// The result is always a subset of `candidates`.
#[must_use]
pub fn filter_candidates(
    candidates: &CandidateSet,
    guess: &Word,
    pattern: Pattern,
) -> CandidateSet {
    candidates
        .iter()
        .filter(|word| matches(word, guess, pattern))
        .cloned()
        .collect()
}

/// Size of [`filter_candidates`] without building the set
#[must_use]
pub fn count_matches(candidates: &CandidateSet, guess: &Word, pattern: Pattern) -> usize {
    candidates
        .iter()
        .filter(|word| matches(word, guess, pattern))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> CandidateSet {
        words.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    const SAMPLE: &[&str] = &[
        "crane", "slate", "roate", "raise", "adieu", "audio", "house", "mouse", "phone", "stone",
        "llama", "alley", "speed", "erase", "geese", "creep", "eerie", "robot", "floor", "abbey",
    ];

    #[test]
    fn crane_is_the_only_sample_word_left_after_slate() {
        let candidates = set(&["crane", "slate", "roate", "raise", "adieu"]);
        let guess = word("slate");
        let pattern = Pattern::calculate(&guess, &word("crane"));

        let remaining = filter_candidates(&candidates, &guess, pattern);
        assert_eq!(remaining, set(&["crane"]));
    }

    #[test]
    fn gray_letter_rules_it_out_everywhere() {
        // SPEED vs CREEP: S and D gray, P yellow, both E's green
        let guess = word("speed");
        let pattern = Pattern::calculate(&guess, &word("creep"));

        assert!(matches(&word("creep"), &guess, pattern));
        assert!(!matches(&word("dreep"), &guess, pattern));
        // No gray P, so a second P is still possible
        assert!(matches(&word("preep"), &guess, pattern));
    }

    #[test]
    fn repeated_letter_marks_require_each_copy() {
        // ALLEY vs LLAMA: one L green and one yellow, so at least two L's
        let guess = word("alley");
        let pattern = Pattern::calculate(&guess, &word("llama"));

        assert!(matches(&word("llama"), &guess, pattern));
        assert!(!matches(&word("qlaqq"), &guess, pattern));
        assert!(!matches(&word("alley"), &guess, pattern));
    }

    #[test]
    fn absent_position_rejects_same_letter_there() {
        // First A yellow, last A gray. A word whose only A sits in the gray slot
        // passes the count rule but would have scored that slot green.
        let guess = word("alpha");
        let pattern = Pattern::parse("Y----").unwrap();

        assert!(!matches(&word("qqqqa"), &guess, pattern));
        assert!(matches(&word("qaqqq"), &guess, pattern));
    }

    #[test]
    fn yellow_duplicates_require_both_copies() {
        // Both E's yellow with no gray E: the word needs at least two E's
        let guess = word("speed");
        let pattern = Pattern::calculate(&guess, &word("erase"));

        assert!(matches(&word("erase"), &guess, pattern));
        assert!(!matches(&word("estro"), &guess, pattern));
    }

    #[test]
    fn filtered_words_rescore_to_the_observed_pattern() {
        let candidates = set(SAMPLE);
        for guess in SAMPLE.iter().map(|w| word(w)) {
            for target in &candidates {
                let pattern = Pattern::calculate(&guess, target);
                let remaining = filter_candidates(&candidates, &guess, pattern);

                assert!(remaining.contains(target), "{target} dropped by {guess}");
                assert!(remaining.len() <= candidates.len());
                for survivor in &remaining {
                    assert_eq!(
                        Pattern::calculate(&guess, survivor),
                        pattern,
                        "{survivor} survived {guess} {pattern}"
                    );
                }
            }
        }
    }

    #[test]
    fn count_matches_agrees_with_filter() {
        let candidates = set(SAMPLE);
        let guess = word("raise");
        let pattern = Pattern::calculate(&guess, &word("erase"));

        assert_eq!(
            count_matches(&candidates, &guess, pattern),
            filter_candidates(&candidates, &guess, pattern).len()
        );
    }

    #[test]
    fn filter_empty_set() {
        let candidates = CandidateSet::new();
        let remaining = filter_candidates(&candidates, &word("crane"), Pattern::PERFECT);
        assert!(remaining.is_empty());
    }
}
