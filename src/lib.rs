//! Verity: search-backed evidence retrieval for fact verification.
//!
//! A fact-checking pipeline hands this crate a list of query pairs (two
//! phrasings per claim) and receives one snippet group per pair, gathered
//! from a self-hosted SearXNG instance by [`verity_search`].
//!
//! This crate is the host around that client:
//! - **config**: TOML configuration with environment overrides
//! - **input**: query-pair JSON decoding and snippet-group encoding
//! - the `verity` binary: command-line access to `run`, single-query
//!   search and the connectivity probe

pub mod config;
pub mod error;
pub mod input;

pub use config::{LoggingConfig, VerityConfig};
pub use error::{Result, VerityError};
pub use verity_search::{PairedSnippetGroups, QueryPair, SearchClient, Snippet};

/// Connect to the configured SearXNG instance and retrieve evidence for
/// `pairs`.
///
/// An unreachable instance is only a warning; the affected queries come
/// back as "Search failed" snippets.
///
/// # Errors
///
/// Returns [`VerityError::Search`] if the search configuration is invalid
/// or the batch breaks its pairing invariant.
pub async fn retrieve_evidence(
    config: &VerityConfig,
    pairs: &[Option<QueryPair>],
) -> Result<PairedSnippetGroups> {
    let client = SearchClient::connect(config.search.clone()).await?;
    let groups = client.run(pairs).await?;
    let fallbacks = groups.iter().flatten().filter(|s| s.is_fallback()).count();
    tracing::info!(pairs = pairs.len(), fallbacks, "evidence retrieved");
    Ok(groups)
}
