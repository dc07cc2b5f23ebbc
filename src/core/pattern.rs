//! Puzzle feedback pattern calculation and representation
//!
//! A pattern holds one [`LetterOutcome`] per guess position:
//! - `Correct` (green): letter in the right position
//! - `Misplaced` (yellow): letter in the word, wrong position
//! - `Absent` (gray): no further occurrences of the letter in the word

use super::word::{LetterCounts, WORD_LENGTH, Word};
use std::fmt;

/// Feedback for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterOutcome {
    Correct,
    Misplaced,
    Absent,
}

impl LetterOutcome {
    /// Emoji tile for this outcome
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Misplaced => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// `true` for outcomes that confirm an occurrence of the letter
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::Correct | Self::Misplaced)
    }
}

/// Feedback pattern for a guess
///
/// Ordered per guess position; hashable so candidates can be grouped by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern([LetterOutcome; WORD_LENGTH]);

impl Pattern {
    /// All greens (perfect match)
    pub const PERFECT: Self = Self([LetterOutcome::Correct; WORD_LENGTH]);

    /// Create a pattern from its per-position outcomes
    #[inline]
    #[must_use]
    pub const fn new(outcomes: [LetterOutcome; WORD_LENGTH]) -> Self {
        Self(outcomes)
    }

    /// Per-position outcomes
    #[inline]
    #[must_use]
    pub const fn outcomes(&self) -> &[LetterOutcome; WORD_LENGTH] {
        &self.0
    }

    /// Outcome at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn outcome_at(&self, position: usize) -> LetterOutcome {
        self.0[position]
    }

    /// Check if this is a perfect match (all greens)
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Calculate the pattern when `guess` is guessed and `target` is the answer
    ///
    /// This implements the puzzle's exact feedback rules, including proper
    /// handling of duplicate letters.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches (greens) and consume them from the
    ///    target's remaining letter pool
    /// 2. Second pass: mark present-but-wrong-position (yellows) while the pool
    ///    still holds the letter, everything else is gray
    ///
    /// # Examples
    /// ```
    /// use wordle_coach::core::{LetterOutcome::*, Pattern, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let target = Word::new("erase").unwrap();
    ///
    /// let pattern = Pattern::calculate(&guess, &target);
    /// assert_eq!(pattern.outcomes(), &[Misplaced, Absent, Misplaced, Misplaced, Absent]);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterOutcome::Absent; WORD_LENGTH];
        let mut remaining = LetterCounts::of(target);

        for (i, (&g, &t)) in guess.chars().iter().zip(target.chars()).enumerate() {
            if g == t {
                result[i] = LetterOutcome::Correct;
                remaining.take(g);
            }
        }

        for (i, &g) in guess.chars().iter().enumerate() {
            if result[i] != LetterOutcome::Correct && remaining.take(g) {
                result[i] = LetterOutcome::Misplaced;
            }
        }

        Self(result)
    }

    /// Count the number of green feedback squares
    #[must_use]
    pub fn count_greens(self) -> usize {
        self.0
            .iter()
            .filter(|&&o| o == LetterOutcome::Correct)
            .count()
    }

    /// Count the number of yellow feedback squares
    #[must_use]
    pub fn count_yellows(self) -> usize {
        self.0
            .iter()
            .filter(|&&o| o == LetterOutcome::Misplaced)
            .count()
    }

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for green
    /// - 'Y'/'y'/🟨 for yellow
    /// - '-'/'_'/⬜ for gray
    ///
    /// # Examples
    /// ```
    /// use wordle_coach::core::Pattern;
    ///
    /// let p1 = Pattern::parse("GY-GY").unwrap();
    /// let p2 = Pattern::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(p1, p2);
    /// ```
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let mut result = [LetterOutcome::Absent; WORD_LENGTH];
        let mut chars = s.trim().chars();

        for slot in &mut result {
            *slot = match chars.next()? {
                'G' | 'g' | '🟩' => LetterOutcome::Correct,
                'Y' | 'y' | '🟨' => LetterOutcome::Misplaced,
                '-' | '_' | '⬜' => LetterOutcome::Absent,
                _ => return None,
            };
        }

        if chars.next().is_some() {
            return None;
        }

        Some(Self(result))
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_coach::core::Pattern;
    ///
    /// let p = Pattern::parse("GY-GY").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|o| o.emoji()).collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in self.0 {
            let ch = match outcome {
                LetterOutcome::Correct => 'G',
                LetterOutcome::Misplaced => 'Y',
                LetterOutcome::Absent => '-',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid pattern string: {s}"))
    }
}
