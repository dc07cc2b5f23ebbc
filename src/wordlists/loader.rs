//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines and entries that are not 5 ASCII letters are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_coach::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/targets.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse newline-separated words, skipping invalid entries
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_coach::wordlists::loader::words_from_slice;
/// use wordle_coach::wordlists::TARGETS;
///
/// let words = words_from_slice(TARGETS);
/// assert_eq!(words.len(), TARGETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["crane", "slate", "irate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["crane", "toolong", "abc", "slate"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_lines_skips_blanks_and_junk() {
        let words = words_from_lines("crane\n\n  slate  \nsl@te\nab\r\nadieu\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "ADIEU"]);
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        assert!(load_from_file("definitely/not/here.txt").is_err());
    }

    #[test]
    fn load_from_embedded_targets() {
        use crate::wordlists::TARGETS;

        let words = words_from_slice(TARGETS);
        assert_eq!(words.len(), TARGETS.len());
    }
}
