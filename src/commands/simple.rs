//! Simple interactive CLI mode
//!
//! Numbered text menu over a [`GameSession`], without the TUI.

use super::analyze::analyze_guess;
use crate::output::{
    print_analysis_result, print_candidates, print_guess_outcome, print_history, print_status,
};
use crate::session::{GameSession, GameState, GuessSource, SessionError};
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::io::{self, Write};

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Guess,
    Suggest,
    ComputerGuess,
    ToggleAnswer,
    NewGame,
    Status,
    Candidates,
    History,
    Undo,
    Quit,
}

impl MenuChoice {
    const ALL: [(Self, &'static str); 10] = [
        (Self::Guess, "Make a guess"),
        (Self::Suggest, "Show suggested guess"),
        (Self::ComputerGuess, "Let the computer guess"),
        (Self::ToggleAnswer, "Show/hide the answer"),
        (Self::NewGame, "New game"),
        (Self::Status, "Game status"),
        (Self::Candidates, "Candidates at a checkpoint"),
        (Self::History, "Guess history"),
        (Self::Undo, "Undo to a checkpoint"),
        (Self::Quit, "Quit"),
    ];

    /// Parse a menu number (1-10) or a shortcut word
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        if let Ok(n) = input.parse::<usize>() {
            return n
                .checked_sub(1)
                .and_then(|i| Self::ALL.get(i))
                .map(|(choice, _)| *choice);
        }

        Some(match input.as_str() {
            "guess" | "g" => Self::Guess,
            "hint" | "suggest" | "h" => Self::Suggest,
            "auto" | "computer" | "c" => Self::ComputerGuess,
            "answer" | "a" => Self::ToggleAnswer,
            "new" | "n" => Self::NewGame,
            "status" | "s" => Self::Status,
            "candidates" | "list" | "l" => Self::Candidates,
            "history" => Self::History,
            "undo" | "u" => Self::Undo,
            "quit" | "q" | "exit" => Self::Quit,
            _ => return None,
        })
    }
}

/// Run the simple interactive CLI mode
///
/// Starts a random game immediately; recoverable mistakes such as unknown
/// words or out-of-range checkpoints are reported and the menu continues.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(session: &mut GameSession<R>) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle Coach - Text Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    session.reset(None)?;
    println!(
        "New game started: {} possible answers, {} guesses allowed.",
        session.current_candidates().len(),
        session.max_guesses()
    );

    loop {
        print_menu();
        let Some(choice) = MenuChoice::parse(&get_user_input("Choice")?) else {
            println!("{}", "Unknown choice".red());
            continue;
        };

        if choice == MenuChoice::Quit {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        }

        if let Err(err) = handle_choice(session, choice) {
            match err.downcast_ref::<SessionError>() {
                Some(session_err) => println!("{} {session_err}", "✗".red().bold()),
                None => return Err(err),
            }
        }
    }
}

fn handle_choice<R: Rng>(session: &mut GameSession<R>, choice: MenuChoice) -> Result<()> {
    match choice {
        MenuChoice::Guess => {
            let word = get_user_input("Your guess")?;
            let outcome = session.guess(&word, GuessSource::User)?;
            print_guess_outcome(&outcome);
        }
        MenuChoice::Suggest => {
            let suggestion = session.suggest()?;
            println!("💡 Suggested guess: {}", suggestion.text().bright_white().bold());
            let analysis =
                analyze_guess(suggestion.text(), session.vocabulary(), session.current_candidates())?;
            print_analysis_result(&analysis);
        }
        MenuChoice::ComputerGuess => {
            let outcome = session.play_suggestion()?;
            print_guess_outcome(&outcome);
        }
        MenuChoice::ToggleAnswer => {
            let visible = session.toggle_answer_visibility();
            println!("Answer is now {}", if visible { "visible" } else { "hidden" });
            print_status(&session.status());
        }
        MenuChoice::NewGame => {
            let target = get_user_input("Target word (blank for random)")?;
            let target = (!target.is_empty()).then_some(target.as_str());
            session.reset(target)?;
            println!("\n🔄 New game started!");
            print_status(&session.status());
        }
        MenuChoice::Status => print_status(&session.status()),
        MenuChoice::Candidates => {
            let Some(index) = read_checkpoint_index(session.guess_number())? else {
                return Ok(());
            };
            match session.candidates_at(index) {
                Some(candidates) => print_candidates(candidates),
                None => println!("No checkpoint {index}"),
            }
        }
        MenuChoice::History => print_history(session.history()),
        MenuChoice::Undo => {
            let Some(index) = read_checkpoint_index(session.guess_number().saturating_sub(1))?
            else {
                return Ok(());
            };
            session.undo_to(index)?;
            println!("↩ Back to guess {}", session.guess_number());
            if session.state() == GameState::InProgress {
                print_history(session.history());
            }
        }
        MenuChoice::Quit => {}
    }
    Ok(())
}

fn print_menu() {
    println!("\n{}", "─".repeat(40).cyan());
    for (i, (_, label)) in MenuChoice::ALL.iter().enumerate() {
        println!("  {:>2}. {label}", i + 1);
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Ask for a checkpoint number, `default` when left blank
fn read_checkpoint_index(default: usize) -> Result<Option<usize>> {
    let input = get_user_input(&format!("Checkpoint [{default}]"))?;
    if input.is_empty() {
        return Ok(Some(default));
    }
    let index = input.parse().ok();
    if index.is_none() {
        println!("{} '{input}' is not a checkpoint number", "✗".red().bold());
    }
    Ok(index)
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;
    anyhow::ensure!(read > 0, "Input closed");

    Ok(input.trim().to_string())
}
