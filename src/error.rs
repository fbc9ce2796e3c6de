//! Error types shared across the crate

use std::path::PathBuf;

use thiserror::Error;

use crate::core::WordError;

/// Convenience alias used throughout the library
pub type Result<T, E = WordleError> = std::result::Result<T, E>;

/// Everything that can go wrong while loading data or running a solve
///
/// Running out of rounds is not listed here: that is a normal
/// [`SolveStatus::Exhausted`](crate::solver::SolveStatus::Exhausted) outcome.
#[derive(Debug, Error)]
pub enum WordleError {
    #[error("invalid word '{word}': {source}")]
    InvalidWord {
        word: String,
        #[source]
        source: WordError,
    },

    #[error("length mismatch: expected {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("{path}:{line}: {reason}")]
    Format {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "inconsistent feedback in round {round}: '{guess}' -> {feedback} leaves no candidates"
    )]
    InconsistentState {
        round: usize,
        guess: String,
        feedback: String,
    },

    #[error("no permissible guesses to choose from")]
    EmptyGuessPool,

    #[error("target index {index} out of range ({count} challenge words)")]
    TargetIndex { index: usize, count: usize },

    #[error("'{0}' is not in the word list")]
    UnknownWord(String),

    #[error("'{0}' is not a challenge word")]
    NotAChallenge(String),

    #[error("opening table rejected: {0}")]
    OpeningTable(String),

    #[error("opening table JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("aborted by user")]
    Aborted,
}

impl WordleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
