//! Error types for sheetwire-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sheetwire-core
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed A1 notation (cell reference, range, or column letters)
    #[error("Invalid A1 notation: {0}")]
    InvalidNotation(String),

    /// Color string matched none of the named/hex/rgb forms (strict parsing only)
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Unknown alignment keyword
    #[error("Invalid alignment: {0}")]
    InvalidAlignment(String),

    /// A sheet qualifier (or the default sheet) could not be resolved to an id
    #[error("Unresolved sheet: {0}")]
    UnresolvedSheet(String),
}
