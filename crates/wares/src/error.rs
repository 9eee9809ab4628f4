//! Error types for the wares catalog.

use thiserror::Error;

/// Top-level error type for the wares catalog.
#[derive(Error, Debug)]
pub enum WaresError {
    /// An unrecognized color name
    #[error("Unknown color: {0}")]
    UnknownColor(String),

    /// An unrecognized size name
    #[error("Unknown size: {0}")]
    UnknownSize(String),

    /// A malformed or unsupported filtering criterion
    #[error("Criterion error: {0}")]
    Criterion(String),
}

/// Result type alias using WaresError.
pub type Result<T> = std::result::Result<T, WaresError>;
