//! Guess analysis command
//!
//! Reports how well a single guess splits a candidate set.

use crate::core::Word;
use crate::session::{SessionError, ValidationError};
use crate::solver::{CandidateSet, group_by_pattern, score_guess};
use crate::wordlists::Vocabulary;

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub word: Word,
    pub total_candidates: usize,
    pub pattern_groups: usize,
    pub largest_group: usize,
    pub expected_remaining: f64,
}

/// Analyze `word` as a guess against `candidates`
///
/// # Errors
///
/// Returns a `ValidationError` if the word is malformed or not in the guess
/// vocabulary.
pub fn analyze_guess(
    word: &str,
    vocabulary: &Vocabulary,
    candidates: &CandidateSet,
) -> Result<AnalysisResult, SessionError> {
    let word = Word::new(word)?;
    if !vocabulary.is_guess(&word) {
        return Err(ValidationError::NotInGuessVocabulary(word).into());
    }

    let groups = group_by_pattern(&word, candidates);

    Ok(AnalysisResult {
        total_candidates: candidates.len(),
        pattern_groups: groups.len(),
        largest_group: groups.values().copied().max().unwrap_or(0),
        expected_remaining: score_guess(&word, candidates),
        word,
    })
}
