//! Error types for the polylex command line.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for polylex operations.
pub type Result<T> = std::result::Result<T, PolylexError>;

/// Main error type for the polylex binary.
#[derive(Error, Debug)]
pub enum PolylexError {
    /// The language could not be selected
    #[error(transparent)]
    Lex(#[from] polylex_core::Error),

    /// A source file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
