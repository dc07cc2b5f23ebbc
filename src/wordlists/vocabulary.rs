//! Target and guess vocabularies

use super::loader::words_from_slice;
use super::{GUESSES, TARGETS};
use crate::core::Word;
use crate::solver::CandidateSet;
use rustc_hash::FxHashSet;

/// The two word lists a game is played with
///
/// `targets` are the words that can be the hidden answer; `guesses` are the
/// words accepted as legal guesses (typically a superset). Both keep their
/// load order with duplicates removed; guess order is the optimizer's
/// tie-break order.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    targets: Vec<Word>,
    guesses: Vec<Word>,
    target_lookup: FxHashSet<Word>,
    guess_lookup: FxHashSet<Word>,
}

impl Vocabulary {
    /// Build a vocabulary from the two lists
    #[must_use]
    pub fn new(targets: Vec<Word>, guesses: Vec<Word>) -> Self {
        let (targets, target_lookup) = dedup(targets);
        let (guesses, guess_lookup) = dedup(guesses);

        Self {
            targets,
            guesses,
            target_lookup,
            guess_lookup,
        }
    }

    /// The word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(TARGETS), words_from_slice(GUESSES))
    }

    /// Words eligible to be the answer
    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    /// Words accepted as guesses
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    #[must_use]
    pub fn is_target(&self, word: &Word) -> bool {
        self.target_lookup.contains(word)
    }

    #[must_use]
    pub fn is_guess(&self, word: &Word) -> bool {
        self.guess_lookup.contains(word)
    }

    /// Every target word, the candidate set of a fresh game
    #[must_use]
    pub fn all_targets(&self) -> CandidateSet {
        self.targets.iter().cloned().collect()
    }
}

fn dedup(words: Vec<Word>) -> (Vec<Word>, FxHashSet<Word>) {
    let mut seen = FxHashSet::default();
    let unique = words
        .into_iter()
        .filter(|word| seen.insert(word.clone()))
        .collect();
    (unique, seen)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        words_from_slice(list)
    }

    #[test]
    fn duplicates_are_dropped_keeping_first_position() {
        let vocab = Vocabulary::new(
            words(&["slate", "crane", "slate"]),
            words(&["crane", "adieu", "CRANE", "slate"]),
        );

        let targets: Vec<&str> = vocab.targets().iter().map(Word::text).collect();
        let guesses: Vec<&str> = vocab.guesses().iter().map(Word::text).collect();
        assert_eq!(targets, ["SLATE", "CRANE"]);
        assert_eq!(guesses, ["CRANE", "ADIEU", "SLATE"]);
    }

    #[test]
    fn membership_checks_each_list() {
        let vocab = Vocabulary::new(words(&["crane"]), words(&["crane", "adieu"]));
        let adieu = Word::new("adieu").unwrap();

        assert!(vocab.is_guess(&adieu));
        assert!(!vocab.is_target(&adieu));
        assert!(vocab.is_target(&Word::new("crane").unwrap()));
    }

    #[test]
    fn all_targets_is_sorted_set() {
        let vocab = Vocabulary::new(words(&["slate", "crane"]), Vec::new());
        let all: Vec<String> = vocab.all_targets().iter().map(Word::to_string).collect();
        assert_eq!(all, ["CRANE", "SLATE"]);
    }

    #[test]
    fn embedded_targets_are_guessable() {
        let vocab = Vocabulary::embedded();
        assert!(!vocab.targets().is_empty());
        assert!(vocab.targets().iter().all(|w| vocab.is_guess(w)));
    }
}
