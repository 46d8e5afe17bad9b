//! Collaborator-facing client: query pairs in, snippet groups out.

use crate::backend::SearchBackend;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::orchestrator::{self, executor};
use crate::searxng::SearxngBackend;
use crate::types::{PairedSnippetGroups, QueryPair, SearchRecord, SnippetGroup};

/// Outcome of the SearXNG connectivity precheck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectReport {
    /// Base URL that was probed.
    pub base_url: String,
    /// Whether the status endpoint answered 2xx.
    pub reachable: bool,
    /// Failure description when unreachable.
    pub warning: Option<String>,
}

/// Search-aggregation client for a SearXNG instance.
///
/// Configuration is fixed at construction. Each batch opens its own HTTP
/// session, shared by all of that batch's requests and dropped when the
/// batch returns.
#[derive(Debug, Clone)]
pub struct SearchClient {
    config: SearchConfig,
    connect_report: Option<ConnectReport>,
}

impl SearchClient {
    /// Build a client without touching the network.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;
        Ok(Self {
            config,
            connect_report: None,
        })
    }

    /// Build a client and run the connectivity precheck.
    ///
    /// An unreachable instance is logged as a warning and recorded in
    /// [`SearchClient::connect_report`]; the client is still returned and
    /// its queries will degrade to "Search failed".
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if `config` is invalid.
    pub async fn connect(config: SearchConfig) -> Result<Self, SearchError> {
        let mut client = Self::new(config)?;
        let report = client.probe().await;
        if report.reachable {
            tracing::info!(base_url = %report.base_url, "SearXNG connection successful");
        } else {
            tracing::warn!(
                base_url = %report.base_url,
                warning = report.warning.as_deref().unwrap_or_default(),
                "cannot connect to SearXNG; searches will fail until it is running"
            );
        }
        client.connect_report = Some(report);
        Ok(client)
    }

    /// Probe the SearXNG status endpoint.
    pub async fn probe(&self) -> ConnectReport {
        let base_url = self.config.base_url().to_owned();
        let outcome = match SearxngBackend::new(&self.config) {
            Ok(backend) => backend.probe().await,
            Err(err) => Err(err),
        };
        match outcome {
            Ok(()) => ConnectReport {
                base_url,
                reachable: true,
                warning: None,
            },
            Err(err) => ConnectReport {
                base_url,
                reachable: false,
                warning: Some(err.to_string()),
            },
        }
    }

    /// Result of the precheck run by [`SearchClient::connect`], if any.
    pub fn connect_report(&self) -> Option<&ConnectReport> {
        self.connect_report.as_ref()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search every query of every pair concurrently and return one merged
    /// snippet group per pair.
    ///
    /// Absent pairs are searched as `("None", "None")`. A failing query
    /// yields a "Search failed" snippet in its own slot and leaves the rest
    /// of the batch untouched.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the HTTP session cannot be opened,
    /// or [`SearchError::Pairing`] on a positional invariant violation.
    pub async fn run(&self, pairs: &[Option<QueryPair>]) -> Result<PairedSnippetGroups, SearchError> {
        let session = SearxngBackend::new(&self.config)?;
        orchestrator::run_pairs(&session, pairs, &self.config).await
    }

    /// Blocking form of [`SearchClient::run`] for synchronous callers.
    ///
    /// # Errors
    ///
    /// Same as [`SearchClient::run`], plus [`SearchError::Runtime`] if
    /// called from inside an async runtime or if a runtime cannot be
    /// started.
    pub fn run_blocking(&self, pairs: &[Option<QueryPair>]) -> Result<PairedSnippetGroups, SearchError> {
        block_on(self.run(pairs))
    }

    /// Search one query and return its normalized snippet group.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the HTTP session cannot be opened.
    /// Request failures become the "Search failed" snippet.
    pub async fn search_one(&self, query: &str) -> Result<SnippetGroup, SearchError> {
        let session = SearxngBackend::new(&self.config)?;
        Ok(orchestrator::search_one(&session, query, &self.config).await)
    }

    /// Search one query and return its raw records, unnormalized and uncapped.
    ///
    /// # Errors
    ///
    /// Returns the request's [`SearchError`] unchanged.
    pub async fn search_records(&self, query: &str) -> Result<Vec<SearchRecord>, SearchError> {
        let session = SearxngBackend::new(&self.config)?;
        tracing::debug!(backend = session.name(), "single query search");
        let response = executor::execute_one(&session, query, &self.config).await?;
        Ok(response.results)
    }

    /// Blocking form of [`SearchClient::search_records`].
    ///
    /// # Errors
    ///
    /// Same as [`SearchClient::search_records`], plus [`SearchError::Runtime`]
    /// under the same conditions as [`SearchClient::run_blocking`].
    pub fn search_records_blocking(&self, query: &str) -> Result<Vec<SearchRecord>, SearchError> {
        block_on(self.search_records(query))
    }
}

fn block_on<T>(
    future: impl std::future::Future<Output = Result<T, SearchError>>,
) -> Result<T, SearchError> {
    // Nesting a runtime inside another panics; report it instead.
    if tokio::runtime::Handle::try_current().is_ok() {
        return Err(SearchError::Runtime(
            "blocking call made from inside an async runtime; use the async method".into(),
        ));
    }
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SearchError::Runtime(format!("failed to start runtime: {e}")))?;
    runtime.block_on(future)
}
