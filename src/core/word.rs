//! Puzzle word representation
//!
//! A Word stores a 5-letter uppercase word along with its letter bytes for pattern calculation.

use std::fmt;

/// Number of letters in every puzzle word
pub const WORD_LENGTH: usize = 5;

/// A 5-letter puzzle word, normalized to uppercase
///
/// Ordering is alphabetical, which is what candidate sets iterate in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word {
    text: String,
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly 5 letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string
    ///
    /// Surrounding whitespace is ignored and letters are normalized to uppercase.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_coach::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: impl AsRef<str>) -> Result<Self, WordError> {
        let text = text.as_ref().trim().to_ascii_uppercase();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_LENGTH] = text
            .as_bytes()
            .try_into()
            .map_err(|_| WordError::InvalidLength(text.len()))?;

        if !chars.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { text, chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }

    /// Count the occurrences of a letter
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&ch| ch == letter).count()
    }

    /// Per-letter occurrence counts of the word
    #[inline]
    #[must_use]
    pub fn letter_counts(&self) -> LetterCounts {
        LetterCounts::of(self)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Multiset of the letters A-Z
///
/// Used as the pool of not-yet-consumed target letters during pattern
/// calculation, so the word itself is never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterCounts([u8; 26]);

impl LetterCounts {
    /// Count every letter of `word`
    #[must_use]
    pub fn of(word: &Word) -> Self {
        let mut counts = Self::default();
        for &ch in word.chars() {
            counts.0[Self::slot(ch)] += 1;
        }
        counts
    }

    /// Remaining count of `letter`
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> u8 {
        self.0[Self::slot(letter)]
    }

    /// Consume one occurrence of `letter`
    ///
    /// Returns `false` (and leaves the pool untouched) if none remain.
    #[inline]
    pub const fn take(&mut self, letter: u8) -> bool {
        let slot = Self::slot(letter);
        if self.0[slot] == 0 {
            return false;
        }
        self.0[slot] -= 1;
        true
    }

    #[inline]
    const fn slot(letter: u8) -> usize {
        (letter - b'A') as usize
    }
}
