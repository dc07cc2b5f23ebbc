//! Game sessions
//!
//! A session owns one game at a time: the hidden target, the guess counter and
//! a truncatable history of checkpoints.

mod checkpoint;
mod error;
mod game;

pub use checkpoint::Checkpoint;
pub use error::{InitializationError, SessionError, StateError, ValidationError};
pub use game::{GameSession, GameState, GameStatus, GuessOutcome, GuessSource, MAX_GUESSES};
