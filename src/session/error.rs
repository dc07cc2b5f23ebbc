//! Session error types
//!
//! Every failing session operation leaves the session exactly as it was.

use super::GameState;
use crate::core::{Word, WordError};
use std::fmt;

/// Any failure reported by a [`GameSession`](super::GameSession)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The caller supplied a word the session cannot accept
    Validation(ValidationError),
    /// The operation is not allowed in the session's current state
    State(StateError),
    /// The session cannot be set up
    Initialization(InitializationError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidWord(WordError),
    NotInGuessVocabulary(Word),
    NotInTargetVocabulary(Word),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    NotStarted,
    GameOver(GameState),
    CheckpointOutOfRange { index: usize, len: usize },
    NoCandidates,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitializationError {
    EmptyTargetVocabulary,
    EmptyGuessVocabulary,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e) => write!(f, "{e}"),
            Self::State(e) => write!(f, "{e}"),
            Self::Initialization(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWord(e) => write!(f, "{e}"),
            Self::NotInGuessVocabulary(word) => {
                write!(f, "'{word}' is not in the acceptable words list")
            }
            Self::NotInTargetVocabulary(word) => {
                write!(f, "'{word}' is not in the potential answers list")
            }
        }
    }
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "No game in progress, start a new game first"),
            Self::GameOver(GameState::Won) => write!(f, "The game is already won"),
            Self::GameOver(_) => write!(f, "Maximum number of guesses reached"),
            Self::CheckpointOutOfRange { index, len } => {
                write!(f, "Invalid guess number {index} (valid: 0..{len})")
            }
            Self::NoCandidates => write!(f, "No possible words remaining"),
        }
    }
}

impl fmt::Display for InitializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyTargetVocabulary => write!(f, "Target vocabulary is empty"),
            Self::EmptyGuessVocabulary => write!(f, "Guess vocabulary is empty"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::State(e) => Some(e),
            Self::Initialization(e) => Some(e),
        }
    }
}

impl std::error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidWord(e) => Some(e),
            _ => None,
        }
    }
}

impl std::error::Error for StateError {}

impl std::error::Error for InitializationError {}

impl From<ValidationError> for SessionError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<StateError> for SessionError {
    fn from(e: StateError) -> Self {
        Self::State(e)
    }
}

impl From<InitializationError> for SessionError {
    fn from(e: InitializationError) -> Self {
        Self::Initialization(e)
    }
}

impl From<WordError> for SessionError {
    fn from(e: WordError) -> Self {
        Self::Validation(ValidationError::InvalidWord(e))
    }
}
