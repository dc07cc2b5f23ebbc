//! Undoable game history entries

use crate::core::{Pattern, Word};
use crate::solver::CandidateSet;
use std::sync::Arc;

/// Snapshot of the game right after one guess
///
/// Checkpoint 0 is the start of the game and carries no guess. For every
/// later checkpoint, `before` is the same set as the previous checkpoint's
/// `after`; the sets are shared rather than copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkpoint {
    index: usize,
    guess: Option<(Word, Pattern)>,
    before: Arc<CandidateSet>,
    after: Arc<CandidateSet>,
}

impl Checkpoint {
    pub(crate) fn initial(candidates: CandidateSet) -> Self {
        let candidates = Arc::new(candidates);
        Self {
            index: 0,
            guess: None,
            before: Arc::clone(&candidates),
            after: candidates,
        }
    }

    pub(crate) fn following(
        previous: &Self,
        word: Word,
        pattern: Pattern,
        after: CandidateSet,
    ) -> Self {
        Self {
            index: previous.index + 1,
            guess: Some((word, pattern)),
            before: Arc::clone(&previous.after),
            after: Arc::new(after),
        }
    }

    /// Guess number this checkpoint follows (0 = initial state)
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// The guessed word, `None` for the initial checkpoint
    #[must_use]
    pub fn word(&self) -> Option<&Word> {
        self.guess.as_ref().map(|(word, _)| word)
    }

    /// The observed pattern, `None` for the initial checkpoint
    #[must_use]
    pub fn pattern(&self) -> Option<Pattern> {
        self.guess.as_ref().map(|&(_, pattern)| pattern)
    }

    /// Candidates before the guess
    #[must_use]
    pub fn before(&self) -> &CandidateSet {
        &self.before
    }

    /// Candidates after the guess
    #[must_use]
    pub fn after(&self) -> &CandidateSet {
        &self.after
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(list: &[&str]) -> CandidateSet {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    #[test]
    fn initial_checkpoint_has_no_guess() {
        let start = Checkpoint::initial(set(&["crane", "slate"]));
        assert_eq!(start.index(), 0);
        assert!(start.word().is_none());
        assert!(start.pattern().is_none());
        assert_eq!(start.before(), start.after());
    }

    #[test]
    fn following_checkpoint_chains_candidate_sets() {
        let start = Checkpoint::initial(set(&["crane", "slate"]));
        let guess = Word::new("slate").unwrap();
        let pattern = Pattern::calculate(&guess, &Word::new("crane").unwrap());

        let next = Checkpoint::following(&start, guess.clone(), pattern, set(&["crane"]));
        assert_eq!(next.index(), 1);
        assert_eq!(next.word(), Some(&guess));
        assert_eq!(next.pattern(), Some(pattern));
        assert_eq!(next.before(), start.after());
        assert_eq!(next.after().len(), 1);
    }
}
