//! Shared HTTP client for SearXNG requests.
//!
//! One [`reqwest::Client`] is built per batch and shared by every request
//! in it, so all queries reuse the same connection pool.

use std::time::Duration;

use crate::config::SearchConfig;
use crate::error::SearchError;

/// User-Agent sent when the config does not set one.
pub const DEFAULT_USER_AGENT: &str = concat!("verity-search/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for SearXNG JSON requests.
///
/// The client has:
/// - Per-request timeout from config
/// - Custom User-Agent if configured, else [`DEFAULT_USER_AGENT`]
/// - gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Map a send/read failure to the matching transport error.
pub(crate) fn classify(err: &reqwest::Error, context: &str) -> SearchError {
    if err.is_timeout() {
        SearchError::Timeout(format!("{context}: {err}"))
    } else {
        SearchError::Http(format!("{context}: {err}"))
    }
}
