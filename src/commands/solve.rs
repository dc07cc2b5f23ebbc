//! Word solving command
//!
//! Lets the optimizer play a full game against a chosen target and records
//! every step.

use crate::core::{Pattern, Word};
use crate::session::{GameSession, GuessSource, SessionError};
use crate::solver::score_guess;
use rand::Rng;

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Word,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub pattern: Pattern,
    pub candidates_before: usize,
    pub candidates_after: usize,
    /// Expected candidates left, for guesses chosen by scoring
    pub expected_remaining: Option<f64>,
}

/// Play a whole game against `target` with optimizer guesses
///
/// `opening` replaces the optimizer's first guess when given; the opening
/// search over the full vocabulary is the slowest step of a game, so callers
/// solving many words compute it once.
///
/// # Errors
///
/// Returns an error if the target is malformed or not a target-vocabulary word.
pub fn solve_word<R: Rng>(
    session: &mut GameSession<R>,
    target: &str,
    opening: Option<&Word>,
) -> Result<SolveResult, SessionError> {
    let target = session.reset(Some(target))?.clone();
    let mut guesses = Vec::new();

    while !session.state().is_terminal() {
        let guess = match opening {
            Some(word) if session.guess_number() == 0 => word.clone(),
            _ => session.suggest()?,
        };

        let candidates = session.current_candidates();
        let expected_remaining = (candidates.len() > 2).then(|| score_guess(&guess, candidates));

        let outcome = session.guess(guess.text(), GuessSource::Solver)?;
        guesses.push(GuessStep {
            word: outcome.word,
            pattern: outcome.pattern,
            candidates_before: outcome.candidates_before,
            candidates_after: outcome.candidates_after,
            expected_remaining,
        });
    }

    Ok(SolveResult {
        success: guesses.last().is_some_and(|step| step.pattern.is_perfect()),
        guesses,
        target,
    })
}
