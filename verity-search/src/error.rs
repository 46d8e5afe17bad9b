//! Error types for the verity-search crate.
//!
//! Per-query failures (timeouts, transport errors, non-2xx statuses,
//! malformed payloads) are captured in their query's slot and never abort
//! a batch. Only [`SearchError::Config`] and [`SearchError::Pairing`]
//! surface from the batch entry points.

/// Errors that can occur while retrieving evidence snippets.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SearchError {
    /// A single search request exceeded the per-request timeout.
    #[error("search timed out: {0}")]
    Timeout(String),

    /// The request could not be sent or its body could not be read
    /// (connection refused, DNS failure, reset).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The backend answered with a non-2xx status.
    #[error("backend returned status {status} for query '{query}'")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Query that produced the status.
        query: String,
    },

    /// The backend answered 2xx but the body was not a search payload.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),

    /// The flat result list no longer lines up with the query pairs.
    #[error("pairing invariant violated: {0}")]
    Pairing(String),

    /// The blocking entry points could not start an async runtime.
    #[error("runtime error: {0}")]
    Runtime(String),
}

impl SearchError {
    /// Whether this error is a per-query request failure, rendered as the
    /// "Search failed" snippet rather than propagated.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Timeout(_) | Self::Http(_) | Self::Status { .. } | Self::Parse(_)
        )
    }
}

/// Convenience type alias for verity-search results.
pub type Result<T> = std::result::Result<T, SearchError>;
