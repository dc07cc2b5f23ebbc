//! Word lists for the puzzle
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod embedded;
pub mod loader;
mod vocabulary;

pub use embedded::{GUESSES, GUESSES_COUNT, TARGETS, TARGETS_COUNT};
pub use vocabulary::Vocabulary;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn guesses_count_matches_const() {
        assert_eq!(GUESSES.len(), GUESSES_COUNT);
    }

    #[test]
    fn lists_hold_valid_words() {
        for &word in TARGETS.iter().chain(GUESSES) {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' is not uppercase"
            );
        }
    }

    #[test]
    fn targets_subset_of_guesses() {
        let guess_set: std::collections::HashSet<_> = GUESSES.iter().collect();

        for answer in TARGETS {
            assert!(
                guess_set.contains(answer),
                "Target '{answer}' not in guess list"
            );
        }
    }
}
