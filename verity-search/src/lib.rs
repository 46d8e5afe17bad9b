//! # verity-search
//!
//! Evidence retrieval for fact verification, backed by a self-hosted
//! SearXNG instance.
//!
//! A caller hands over a list of query pairs and gets back one snippet group
//! per pair. Every query is searched concurrently; each response is reduced
//! to a short list of `{content, source}` snippets; the two groups of a pair
//! are concatenated in order.
//!
//! ## Design
//!
//! - One transport primitive, [`SearchBackend::search`], under both the batch
//!   and single-query paths
//! - Barrier-joined fan-out with positional output slots, optionally
//!   capped by a semaphore
//! - Failure isolation: a timeout, refused connection or non-2xx status
//!   only turns its own query into a "Search failed" snippet
//! - Explicit configuration: nothing is read from the environment here
//!
//! ## Snippet budget
//!
//! With `snippet_count = k`, at most `k` records per query are considered
//! and at most `k / 2` snippets kept, so a merged pair holds at most `k`.

pub mod backend;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod orchestrator;
pub mod searxng;
pub mod types;

pub use backend::SearchBackend;
pub use client::{ConnectReport, SearchClient};
pub use config::SearchConfig;
pub use error::{Result, SearchError};
pub use searxng::SearxngBackend;
pub use types::{PairedSnippetGroups, QueryPair, SearchRecord, SearchResponse, Snippet, SnippetGroup};

/// Run a batch of query pairs against the SearXNG instance in `config`.
///
/// Convenience wrapper around [`SearchClient::run`].
///
/// # Errors
///
/// Returns [`SearchError::Config`] if `config` is invalid. Per-query
/// failures are reported inside the returned groups, not here.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> verity_search::Result<()> {
/// use verity_search::{QueryPair, SearchConfig};
///
/// let pairs = vec![Some(QueryPair::new("capital of France", "France capital city"))];
/// let groups = verity_search::run(&pairs, SearchConfig::default()).await?;
/// for snippet in &groups[0] {
///     println!("{} ({})", snippet.content, snippet.source);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn run(pairs: &[Option<QueryPair>], config: SearchConfig) -> Result<PairedSnippetGroups> {
    SearchClient::new(config)?.run(pairs).await
}
