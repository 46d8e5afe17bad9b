//! Search configuration with sensible defaults.
//!
//! [`SearchConfig`] is fixed per client instance: every query in a batch is
//! sent with the same locale, category filter, safe-search level and
//! timeout. The defaults match a stock local SearXNG install.

use serde::{Deserialize, Serialize};
use tokio::sync::Semaphore;
use url::Url;

use crate::error::SearchError;

/// Default SearXNG base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Configuration for a [`crate::SearchClient`].
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// SearXNG base URL. A trailing `/` is ignored.
    pub base_url: String,
    /// Number of result records considered per query (`k`). Each query's
    /// snippet group is capped at `k / 2`.
    pub snippet_count: usize,
    /// Language code sent as `lang`.
    pub language: String,
    /// Region code. Kept for callers that pair it with `language`;
    /// SearXNG does not take it.
    pub region: String,
    /// Result category filter sent as `categories`.
    pub categories: String,
    /// SearXNG safe-search level: 0 (off), 1 (moderate), 2 (strict).
    pub safe_search: u8,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
    /// Timeout for the connectivity precheck in seconds.
    pub probe_timeout_seconds: u64,
    /// Maximum number of requests in flight at once. `None` issues every
    /// query of a batch at the same time.
    pub max_concurrent_requests: Option<usize>,
    /// Custom User-Agent string. Defaults to `verity-search/<version>`.
    pub user_agent: Option<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            snippet_count: 10,
            language: "en".to_owned(),
            region: "us".to_owned(),
            categories: "general".to_owned(),
            safe_search: 0,
            timeout_seconds: 10,
            probe_timeout_seconds: 5,
            max_concurrent_requests: None,
            user_agent: None,
        }
    }
}

impl SearchConfig {
    /// Config pointing at `base_url` with every other field defaulted.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Maximum snippets kept per query: `⌊k/2⌋`.
    pub fn group_cap(&self) -> usize {
        self.snippet_count / 2
    }

    /// Validates this configuration, returning an error if any field is invalid.
    ///
    /// Checks:
    /// - `base_url` must parse as an `http` or `https` URL
    /// - `snippet_count` must be at least 2 so the group cap is non-zero
    /// - `timeout_seconds` and `probe_timeout_seconds` must be greater than 0
    /// - `safe_search` must be 0, 1 or 2
    /// - `max_concurrent_requests`, when set, must be between 1 and
    ///   [`Semaphore::MAX_PERMITS`]
    /// - `language` and `categories` must not be empty
    pub fn validate(&self) -> Result<(), SearchError> {
        let parsed = Url::parse(self.base_url())
            .map_err(|e| SearchError::Config(format!("invalid base_url '{}': {e}", self.base_url)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SearchError::Config(format!(
                "base_url must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
        if self.snippet_count < 2 {
            return Err(SearchError::Config(
                "snippet_count must be at least 2".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(SearchError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.probe_timeout_seconds == 0 {
            return Err(SearchError::Config(
                "probe_timeout_seconds must be greater than 0".into(),
            ));
        }
        if self.safe_search > 2 {
            return Err(SearchError::Config(
                "safe_search must be 0, 1 or 2".into(),
            ));
        }
        if self.max_concurrent_requests == Some(0) {
            return Err(SearchError::Config(
                "max_concurrent_requests must be greater than 0 when set".into(),
            ));
        }
        if let Some(cap) = self
            .max_concurrent_requests
            .filter(|&cap| cap > Semaphore::MAX_PERMITS)
        {
            return Err(SearchError::Config(format!(
                "max_concurrent_requests {cap} exceeds the limit of {}",
                Semaphore::MAX_PERMITS
            )));
        }
        if self.language.trim().is_empty() {
            return Err(SearchError::Config("language must not be empty".into()));
        }
        if self.categories.trim().is_empty() {
            return Err(SearchError::Config("categories must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_sensible_values() {
        let config = SearchConfig::default();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.snippet_count, 10);
        assert_eq!(config.language, "en");
        assert_eq!(config.region, "us");
        assert_eq!(config.categories, "general");
        assert_eq!(config.safe_search, 0);
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.probe_timeout_seconds, 5);
        assert!(config.max_concurrent_requests.is_none());
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn valid_config_passes_validation() {
        assert!(SearchConfig::default().validate().is_ok());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = SearchConfig::with_base_url("http://searx.local:8888//");
        assert_eq!(config.base_url(), "http://searx.local:8888");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn group_cap_is_half_of_snippet_count() {
        let mut config = SearchConfig::default();
        assert_eq!(config.group_cap(), 5);
        config.snippet_count = 7;
        assert_eq!(config.group_cap(), 3);
        config.snippet_count = 2;
        assert_eq!(config.group_cap(), 1);
    }

    #[test]
    fn unparsable_base_url_rejected() {
        let config = SearchConfig::with_base_url("not a url");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn non_http_scheme_rejected() {
        let config = SearchConfig::with_base_url("ftp://localhost:8080");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("http"));
    }

    #[test]
    fn snippet_count_below_two_rejected() {
        for k in [0, 1] {
            let config = SearchConfig {
                snippet_count: k,
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("snippet_count"));
        }
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = SearchConfig {
            timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_seconds"));
    }

    #[test]
    fn zero_probe_timeout_rejected() {
        let config = SearchConfig {
            probe_timeout_seconds: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("probe_timeout_seconds"));
    }

    #[test]
    fn safe_search_above_two_rejected() {
        let config = SearchConfig {
            safe_search: 3,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("safe_search"));
    }

    #[test]
    fn zero_concurrency_cap_rejected() {
        let config = SearchConfig {
            max_concurrent_requests: Some(0),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_concurrent_requests"));
    }

    #[test]
    fn oversized_concurrency_cap_rejected() {
        let config = SearchConfig {
            max_concurrent_requests: Some(usize::MAX),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, SearchError::Config(_)));
        assert!(err.to_string().contains("exceeds"));

        let at_limit = SearchConfig {
            max_concurrent_requests: Some(Semaphore::MAX_PERMITS),
            ..Default::default()
        };
        assert!(at_limit.validate().is_ok());
    }

    #[test]
    fn empty_language_rejected() {
        let config = SearchConfig {
            language: "  ".into(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("language"));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SearchConfig =
            serde_json::from_str(r#"{"base_url": "http://10.0.0.2:8888", "snippet_count": 6}"#)
                .expect("deserialize");
        assert_eq!(config.base_url, "http://10.0.0.2:8888");
        assert_eq!(config.group_cap(), 3);
        assert_eq!(config.language, "en");
        assert_eq!(config.timeout_seconds, 10);
    }
}
