//! Batch pipeline: flatten query pairs, fan out, normalize, re-pair.
//!
//! ```text
//! [Option<QueryPair>] ─flatten─▶ [query; 2n] ─execute─▶ [QueryOutcome; 2n]
//!     ─normalize─▶ [SnippetGroup; 2n] ─reassemble─▶ [SnippetGroup; n]
//! ```
//!
//! Index `2i` and `2i + 1` of every flat list belong to input pair `i`.
//! Each stage preserves length and order so the last one is pure index
//! arithmetic.

pub mod executor;
pub mod flatten;
pub mod normalize;
pub mod pairing;

use crate::backend::SearchBackend;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{PairedSnippetGroups, QueryPair, SnippetGroup};

/// Run a batch of query pairs against `backend`.
///
/// Returns one merged snippet group per entry of `pairs`, in order. Absent
/// entries are searched as the `("None", "None")` sentinel pair.
///
/// # Errors
///
/// Returns [`SearchError::Pairing`] only if a stage breaks the positional
/// contract. Per-query failures never surface here; they become
/// "Search failed" snippets in their own slot.
pub async fn run_pairs<B: SearchBackend>(
    backend: &B,
    pairs: &[Option<QueryPair>],
    config: &SearchConfig,
) -> Result<PairedSnippetGroups, SearchError> {
    let queries = flatten::flatten_pairs(pairs);
    tracing::debug!(
        backend = backend.name(),
        pairs = pairs.len(),
        queries = queries.len(),
        "running search batch"
    );

    let outcomes = executor::execute_all(backend, &queries, config).await;
    if outcomes.len() != queries.len() {
        return Err(SearchError::Pairing(format!(
            "executor returned {} results for {} queries",
            outcomes.len(),
            queries.len()
        )));
    }

    let failed = outcomes.iter().filter(|o| o.is_err()).count();
    if failed > 0 {
        tracing::warn!(failed, total = outcomes.len(), "some queries failed");
    }

    let groups: Vec<SnippetGroup> = outcomes
        .iter()
        .map(|outcome| normalize::normalize_outcome(outcome, config.snippet_count))
        .collect();

    pairing::reassemble(groups, pairs.len())
}

/// Search a single query and normalize its response.
///
/// Failures are folded into the "Search failed" snippet, as in a batch.
pub async fn search_one<B: SearchBackend>(
    backend: &B,
    query: &str,
    config: &SearchConfig,
) -> SnippetGroup {
    let outcome = executor::execute_one(backend, query, config).await;
    normalize::normalize_outcome(&outcome, config.snippet_count)
}
