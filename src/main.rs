//! Wordle Coach - CLI
//!
//! Play the five-letter word puzzle with a coach that tracks the remaining
//! answers and suggests the guess leaving the fewest expected candidates.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_coach::{
    commands::{analyze_guess, run_benchmark, run_simple, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    session::GameSession,
    wordlists::{GUESSES, TARGETS, Vocabulary, loader::load_from_file, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_coach",
    about = "Play Wordle with a coach that suggests the guess leaving the fewest expected answers",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list to use instead of the built-in one (one word per line)
    #[arg(long, global = true)]
    targets: Option<PathBuf>,

    /// Guess list to use instead of the built-in one (one word per line)
    #[arg(long, global = true)]
    guesses: Option<PathBuf>,

    /// Seed for reproducible random answers
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter when RUST_LOG is unset (e.g. "info", "wordle_coach=debug")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Log file for the TUI (text modes log to stderr)
    #[arg(long, global = true, default_value = "wordle_coach.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Text menu mode without the TUI
    Simple,

    /// Let the computer solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and expected remaining per guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print the best opening guess for the loaded word lists
    Suggest,

    /// Analyze how well a word splits the full answer list
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Benchmark the computer player over the first N answers
    Benchmark {
        /// Number of answers to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Where log output goes
enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

fn init_logging(level: &str, target: LogTarget) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    // try_init: a second subscriber is not an error worth aborting for
    let _ = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .try_init()
        }
    };
    Ok(())
}

/// Built-in lists unless overridden by `--targets` / `--guesses`
///
/// Answers are always accepted as guesses.
fn load_vocabulary(targets: Option<&Path>, guesses: Option<&Path>) -> Result<Vocabulary> {
    let load = |path: Option<&Path>, embedded: &[&str], kind: &str| -> Result<Vec<Word>> {
        match path {
            Some(path) => load_from_file(path)
                .with_context(|| format!("Failed to load {kind} from {}", path.display())),
            None => Ok(words_from_slice(embedded)),
        }
    };

    let targets = load(targets, TARGETS, "targets")?;
    let mut guesses = load(guesses, GUESSES, "guesses")?;
    guesses.extend(targets.iter().cloned());

    info!(
        targets = targets.len(),
        guesses = guesses.len(),
        "Vocabulary loaded"
    );
    Ok(Vocabulary::new(targets, guesses))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let log_target = match command {
        Commands::Play => LogTarget::File(&cli.log_file),
        _ => LogTarget::Stderr,
    };
    init_logging(&cli.log_level, log_target)?;

    let vocabulary = load_vocabulary(cli.targets.as_deref(), cli.guesses.as_deref())?;
    let mut session = match cli.seed {
        Some(seed) => GameSession::with_seed(vocabulary, seed),
        None => GameSession::new(vocabulary),
    }
    .context("Failed to start a game session")?;

    match command {
        Commands::Play => run_play_command(session),
        Commands::Simple => run_simple(&mut session),
        Commands::Solve { word, verbose } => {
            let result = solve_word(&mut session, &word, None)?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Suggest => run_suggest_command(&session),
        Commands::Analyze { word } => {
            let candidates = session.vocabulary().all_targets();
            let result = analyze_guess(&word, session.vocabulary(), &candidates)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!("Running benchmark on {count} words...");
            let result = run_benchmark(&mut session, Some(count), true)?;
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

fn run_suggest_command(session: &GameSession) -> Result<()> {
    let candidates = session.vocabulary().all_targets();
    println!("Searching {} guesses...", session.vocabulary().guesses().len());

    let best = wordle_coach::solver::optimal_guess(&candidates, session.vocabulary().guesses())
        .context("No candidates to suggest for")?;
    let result = analyze_guess(best.text(), session.vocabulary(), &candidates)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_play_command(session: GameSession) -> Result<()> {
    use wordle_coach::interactive::{App, run_tui};

    let app = App::new(session)?;
    run_tui(app)
}
