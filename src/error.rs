//! Error types for the verity host.

use verity_search::SearchError;

/// Top-level error type for the verity host.
#[derive(Debug, thiserror::Error)]
pub enum VerityError {
    /// Configuration file or override error.
    #[error("config error: {0}")]
    Config(String),

    /// Query-pair input could not be decoded.
    #[error("input error: {0}")]
    Input(String),

    /// Evidence retrieval error.
    #[error(transparent)]
    Search(#[from] SearchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, VerityError>;
