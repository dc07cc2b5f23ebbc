//! Expected-remaining guess optimization
//!
//! One-ply exhaustive search: every word of the guess vocabulary is scored by
//! the number of candidates expected to survive it, and the lowest score wins.

use super::{CandidateSet, count_matches};
use crate::core::{Pattern, Word};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Candidate sets this small are guessed directly
///
/// With one or two words left, guessing one of them finishes within one more
/// guess either way.
pub const DIRECT_GUESS_THRESHOLD: usize = 2;

/// Expected number of candidates left after guessing `guess`
///
/// Candidates are grouped by the pattern `guess` would score against each of
/// them. A group of `k` out of `n` candidates contributes `k / n` times the
/// size of the candidate set filtered by that group's pattern.
///
/// # Examples
/// ```
/// use wordle_coach::core::Word;
/// use wordle_coach::solver::{CandidateSet, score_guess};
///
/// let candidates: CandidateSet = ["crane", "crate", "grate"]
///     .iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// // CRANE scores a different pattern against each candidate
/// let score = score_guess(&Word::new("crane").unwrap(), &candidates);
/// assert!((score - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn score_guess(guess: &Word, candidates: &CandidateSet) -> f64 {
    if candidates.is_empty() {
        return 0.0;
    }

    let total = candidates.len() as f64;

    group_by_pattern(guess, candidates)
        .into_iter()
        .map(|(pattern, count)| {
            let remaining = count_matches(candidates, guess, pattern);
            (count as f64 / total) * remaining as f64
        })
        .sum()
}

/// Group candidates by the pattern they produce with the guess
#[must_use]
pub fn group_by_pattern(guess: &Word, candidates: &CandidateSet) -> FxHashMap<Pattern, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let pattern = Pattern::calculate(guess, candidate);
        *counts.entry(pattern).or_insert(0) += 1;
    }

    counts
}

/// Select the guess with the lowest expected remaining candidates
///
/// Returns the word and its score, or `None` if the guess pool is empty.
/// Ties go to the word that comes first in `guess_pool`.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &CandidateSet,
) -> Option<(&'a Word, f64)> {
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, guess)| (index, score_guess(guess, candidates)))
        .min_by(|(i1, s1), (i2, s2)| s1.total_cmp(s2).then(i1.cmp(i2)))
        .map(|(index, score)| (&guess_pool[index], score))
}

/// Pick the next guess for the given candidate set
///
/// With at most two candidates the first (alphabetical) one is returned;
/// otherwise the whole guess pool is scored with [`select_best_guess`].
/// Returns `None` when there are no candidates.
#[must_use]
pub fn optimal_guess(candidates: &CandidateSet, guess_pool: &[Word]) -> Option<Word> {
    if candidates.len() <= DIRECT_GUESS_THRESHOLD {
        return candidates.first().cloned();
    }

    select_best_guess(guess_pool, candidates).map(|(word, _)| word.clone())
}
