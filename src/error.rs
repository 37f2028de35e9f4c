//! Error types for the Kalaha agent crate

use thiserror::Error;

/// Main error type for the Kalaha agent crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no legal moves available: search invoked on a finished game")]
    NoLegalMoves,

    #[error("slot {slot} is out of range (must be 1-6)")]
    InvalidSlot { slot: usize },

    #[error("invalid slot '{input}' (expected a number 1-6)")]
    UnparsableSlot { input: String },

    #[error("illegal move: slot {slot} is empty or the game is over")]
    IllegalMove { slot: usize },

    #[error("game already over")]
    GameOver,

    #[error("invalid board encoding '{input}': {reason}")]
    InvalidBoardEncoding { input: String, reason: String },

    #[error("invalid player '{input}' (expected 1 or 2)")]
    InvalidPlayer { input: String },

    #[error("protocol error after '{command}': {message}")]
    Protocol { command: String, message: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O error with the operation that produced it.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
