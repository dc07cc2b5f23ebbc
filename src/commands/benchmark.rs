//! Benchmark command
//!
//! Plays the optimizer against many targets and collects statistics.

use super::solve::solve_word;
use crate::core::Word;
use crate::session::{GameSession, SessionError};
use crate::solver::optimal_guess;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed_words: Vec<Word>,
    pub opening: Option<Word>,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Games won, keyed by guesses used
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Solve the first `limit` target words (all of them when `None`)
///
/// The opening guess is computed once and reused for every game. Averages
/// count solved games only.
///
/// # Errors
///
/// Returns an error if a target cannot be started.
#[instrument(skip(session))]
pub fn run_benchmark<R: Rng>(
    session: &mut GameSession<R>,
    limit: Option<usize>,
    show_progress: bool,
) -> Result<BenchmarkResult, SessionError> {
    let targets: Vec<Word> = session
        .vocabulary()
        .targets()
        .iter()
        .take(limit.unwrap_or(usize::MAX))
        .cloned()
        .collect();

    let start = Instant::now();
    let opening = optimal_guess(
        &session.vocabulary().all_targets(),
        session.vocabulary().guesses(),
    );
    info!(opening = ?opening.as_ref().map(Word::text), "Opening computed");

    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let mut distribution = BTreeMap::new();
    let mut failed_words = Vec::new();
    let mut total_guesses = 0;

    for (idx, target) in targets.iter().enumerate() {
        let result = solve_word(session, target.text(), opening.as_ref())?;

        if result.success {
            total_guesses += result.guesses.len();
            *distribution.entry(result.guesses.len()).or_insert(0) += 1;
        } else {
            failed_words.push(result.target);
        }

        if idx % 10 == 0 {
            let solved = idx + 1 - failed_words.len();
            if solved > 0 {
                pb.set_message(format!("Avg: {:.2}", total_guesses as f64 / solved as f64));
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let total_words = targets.len();
    let solved = total_words - failed_words.len();
    info!(total_words, solved, ?duration, "Benchmark finished");

    Ok(BenchmarkResult {
        total_words,
        solved,
        failed_words,
        opening,
        average_guesses: if solved == 0 {
            0.0
        } else {
            total_guesses as f64 / solved as f64
        },
        min_guesses: distribution.keys().next().copied().unwrap_or(0),
        max_guesses: distribution.keys().next_back().copied().unwrap_or(0),
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
