//! SearXNG JSON API backend.
//!
//! Sends `GET <base_url>/search?q=..&format=json&lang=..&categories=..&safesearch=..`
//! and decodes the `results` array. The connectivity precheck hits the
//! lightweight `GET <base_url>/config` endpoint.

use std::time::Duration;

use crate::backend::SearchBackend;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::http;
use crate::types::SearchResponse;

/// SearXNG backend bound to one HTTP session.
///
/// Each instance owns one [`reqwest::Client`]; dropping the backend releases
/// its pooled connections. [`crate::SearchClient`] builds one per batch.
#[derive(Debug, Clone)]
pub struct SearxngBackend {
    client: reqwest::Client,
    config: SearchConfig,
}

impl SearxngBackend {
    /// Open a session against the configured SearXNG instance.
    ///
    /// No request is sent; see [`SearxngBackend::probe`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        Ok(Self {
            client: http::build_client(config)?,
            config: config.clone(),
        })
    }

    /// Full URL of the search endpoint.
    pub fn search_url(&self) -> String {
        format!("{}/search", self.config.base_url())
    }

    /// Full URL of the status endpoint used by the precheck.
    pub fn probe_url(&self) -> String {
        format!("{}/config", self.config.base_url())
    }

    /// Query string parameters for one search, in the order they are sent.
    pub fn query_params(&self, query: &str) -> Vec<(&'static str, String)> {
        vec![
            ("q", query.to_owned()),
            ("format", "json".to_owned()),
            ("lang", self.config.language.clone()),
            ("categories", self.config.categories.clone()),
            ("safesearch", self.config.safe_search.to_string()),
        ]
    }

    /// Check that SearXNG answers on its status endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Timeout`] or [`SearchError::Http`] if the
    /// instance is unreachable or answers with a non-2xx status.
    pub async fn probe(&self) -> Result<(), SearchError> {
        let url = self.probe_url();
        let response = self
            .client
            .get(&url)
            .timeout(Duration::from_secs(self.config.probe_timeout_seconds))
            .send()
            .await
            .map_err(|e| http::classify(&e, "SearXNG probe failed"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Http(format!(
                "SearXNG probe at {url} returned status {}",
                status.as_u16()
            )));
        }
        Ok(())
    }
}

impl SearchBackend for SearxngBackend {
    async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        tracing::trace!(query, "SearXNG search");

        let response = self
            .client
            .get(self.search_url())
            .query(&self.query_params(query))
            .send()
            .await
            .map_err(|e| http::classify(&e, "SearXNG request failed"))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
                query: query.to_owned(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| http::classify(&e, "SearXNG response read failed"))?;

        tracing::trace!(bytes = body.len(), "SearXNG response received");

        parse_searxng_json(&body)
    }

    fn name(&self) -> &'static str {
        "searxng"
    }
}

/// Decode a SearXNG JSON body.
///
/// Extracted as a separate function for testability with canned payloads.
pub(crate) fn parse_searxng_json(body: &[u8]) -> Result<SearchResponse, SearchError> {
    serde_json::from_slice(body)
        .map_err(|e| SearchError::Parse(format!("SearXNG returned a malformed payload: {e}")))
}
