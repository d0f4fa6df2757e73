//! Error types for polylex-core.

use thiserror::Error;

/// Result type for polylex-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised before tokenization starts.
///
/// Tokenization itself never fails; irregular input is absorbed into tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested language identification matches no symbol table
    #[error("Unsupported file type: {0}")]
    UnsupportedVariant(String),
}
