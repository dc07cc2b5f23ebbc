//! Core domain types for the puzzle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod pattern;
mod word;

pub use pattern::{LetterOutcome, Pattern};
pub use word::{LetterCounts, WORD_LENGTH, Word, WordError};
