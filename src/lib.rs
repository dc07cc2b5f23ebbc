//! Wordle Coach
//!
//! Plays the five-letter word puzzle and coaches the player: every guess is
//! scored, the remaining candidate answers are tracked, the guess that leaves
//! the fewest expected candidates is suggested, and any earlier point of the
//! game can be returned to.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_coach::session::{GameSession, GuessSource};
//! use wordle_coach::wordlists::Vocabulary;
//!
//! let mut session = GameSession::new(Vocabulary::embedded()).unwrap();
//! session.reset(Some("crane")).unwrap();
//!
//! let outcome = session.guess("slate", GuessSource::User).unwrap();
//! println!("{} {}", outcome.word, outcome.pattern.to_emoji());
//!
//! let hint = session.suggest().unwrap();
//! println!("Try {hint}");
//! ```

// Core domain types
pub mod core;

// Filtering and guess optimization
pub mod solver;

// Game state and history
pub mod session;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
