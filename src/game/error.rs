//! Error types for loading game documents

use crate::core::Letter;
use thiserror::Error;

/// Errors raised while reading or checking a game document
#[derive(Error, Debug)]
pub enum GameError {
    /// The document could not be read
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid game JSON
    #[error("invalid game json: {0}")]
    Json(#[from] serde_json::Error),

    /// An answer lists an empty or blank alternate spelling
    #[error("empty alias for answer '{label}' under letter {letter}")]
    EmptyAlias { letter: Letter, label: String },

    /// An answer has an empty or blank label
    #[error("empty answer label under letter {0}")]
    EmptyLabel(Letter),
}

/// Result type alias using [`GameError`]
pub type Result<T> = std::result::Result<T, GameError>;
