//! Formatting utilities for terminal output

use crate::core::{LetterOutcome, Pattern, Word};
use colored::{ColoredString, Colorize};

/// One-line summary of a scored guess
///
/// # Examples
/// ```
/// use wordle_coach::core::{Pattern, Word};
/// use wordle_coach::output::formatters::format_guess_result;
///
/// let word = Word::new("slate").unwrap();
/// let pattern = Pattern::parse("--G-G").unwrap();
/// assert_eq!(
///     format_guess_result(1, &word, pattern, 3),
///     "Guess 1: SLATE ⬜⬜🟩⬜🟩 - 3 words remaining"
/// );
/// ```
#[must_use]
pub fn format_guess_result(
    guess_number: usize,
    word: &Word,
    pattern: Pattern,
    remaining: usize,
) -> String {
    let noun = if remaining == 1 { "word" } else { "words" };
    format!(
        "Guess {guess_number}: {word} {} - {remaining} {noun} remaining",
        pattern.to_emoji()
    )
}

/// A letter on a colored background matching its outcome
#[must_use]
pub fn colored_tile(letter: char, outcome: LetterOutcome) -> ColoredString {
    let tile = format!(" {letter} ").black().bold();
    match outcome {
        LetterOutcome::Correct => tile.on_green(),
        LetterOutcome::Misplaced => tile.on_yellow(),
        LetterOutcome::Absent => tile.on_bright_black(),
    }
}

/// A guessed word as a row of colored tiles
#[must_use]
pub fn colored_word(word: &Word, pattern: Pattern) -> String {
    word.text()
        .chars()
        .zip(pattern.outcomes())
        .map(|(letter, &outcome)| colored_tile(letter, outcome).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { (value / max).clamp(0.0, 1.0) } else { 0.0 };
    // Within [0, width] after the clamp
    let filled = ((ratio * width as f64).round() as usize).min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Candidate words as wrapped lines of `per_line` entries
#[must_use]
pub fn format_word_grid<'a>(
    words: impl IntoIterator<Item = &'a Word>,
    per_line: usize,
) -> Vec<String> {
    let words: Vec<&str> = words.into_iter().map(Word::text).collect();
    words
        .chunks(per_line.max(1))
        .map(|chunk| chunk.join(" "))
        .collect()
}
