//! Display functions for command results and session state

use super::formatters::{colored_word, create_progress_bar, format_guess_result, format_word_grid};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::session::{Checkpoint, GameState, GameStatus, GuessOutcome};
use crate::solver::CandidateSet;
use colored::Colorize;

/// Candidates listed in full up to this many
const CANDIDATE_LIST_LIMIT: usize = 60;

/// Print the line for an accepted guess
pub fn print_guess_outcome(outcome: &GuessOutcome) {
    println!(
        "{}",
        format_guess_result(
            outcome.guess_number,
            &outcome.word,
            outcome.pattern,
            outcome.candidates_after
        )
    );

    match outcome.state {
        GameState::Won => println!(
            "{}",
            format!("🎉 Solved in {} guesses!", outcome.guess_number)
                .green()
                .bold()
        ),
        GameState::Lost => println!("{}", "❌ Out of guesses".red().bold()),
        GameState::NotStarted | GameState::InProgress => {}
    }
}

/// Print the session summary
pub fn print_status(status: &GameStatus) {
    println!("\n{}", "─".repeat(40).cyan());
    println!("Guess:       {}/{}", status.guess_number, status.max_guesses);
    println!("Candidates:  {}", status.candidates_count);
    println!("State:       {}", state_label(status.state));
    match &status.target {
        Some(target) => println!("Answer:      {}", target.text().bright_yellow().bold()),
        None => println!("Answer:      {}", "hidden".bright_black()),
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print every guess made, as colored tiles
pub fn print_history(history: &[Checkpoint]) {
    if history.is_empty() {
        println!("No guesses yet.");
        return;
    }

    for checkpoint in history {
        if let (Some(word), Some(pattern)) = (checkpoint.word(), checkpoint.pattern()) {
            println!(
                "  {}. {}  {} → {}",
                checkpoint.index().to_string().bright_black(),
                colored_word(word, pattern),
                checkpoint.before().len(),
                checkpoint.after().len()
            );
        }
    }
}

/// Print a candidate set, truncated when large
pub fn print_candidates(candidates: &CandidateSet) {
    println!("{} candidates:", candidates.len().to_string().bright_cyan());
    for line in format_word_grid(candidates.iter().take(CANDIDATE_LIST_LIMIT), 10) {
        println!("  {line}");
    }
    if candidates.len() > CANDIDATE_LIST_LIMIT {
        println!("  … and {} more", candidates.len() - CANDIDATE_LIST_LIMIT);
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.text().bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\n{}",
            format_guess_result(i + 1, &step.word, step.pattern, step.candidates_after)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if let Some(expected) = step.expected_remaining {
                println!("  Expected:   {expected:.1} candidates");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let total = result.total_candidates as f64;
    let bar = create_progress_bar(total - result.expected_remaining, total, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Eliminated:  [{}] {}",
        bar.green(),
        format!("{:.1} expected", total - result.expected_remaining).bright_yellow()
    );
    println!("   Patterns:    {}", result.pattern_groups);
    println!("   Worst case:  {} candidates", result.largest_group);
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    if let Some(opening) = &result.opening {
        println!("   Opening guess:    {}", opening.text().bright_white().bold());
    }
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}/{}",
        result.solved.to_string().green(),
        result.total_words
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        result.min_guesses.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_guesses.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&guess_count, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.failed_words.is_empty() {
        println!("\n❌ {}", "Failed:".red().bold());
        for line in format_word_grid(&result.failed_words, 10) {
            println!("   {line}");
        }
    }
}

const fn state_label(state: GameState) -> &'static str {
    match state {
        GameState::NotStarted => "not started",
        GameState::InProgress => "in progress",
        GameState::Won => "won",
        GameState::Lost => "lost",
    }
}
