//! Concurrent search executor: one request per query, barrier join.
//!
//! Every query is issued at once (or through a semaphore when
//! `max_concurrent_requests` is set) and the batch waits for all of them
//! with [`futures::future::join_all`]. Each future owns one output slot,
//! so results come back in query order regardless of completion order.

use std::time::Duration;

use tokio::sync::Semaphore;

use crate::backend::SearchBackend;
use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::QueryOutcome;

/// Run every query against `backend` and collect one outcome per query.
///
/// A failed, slow or rejected query only affects its own slot. The returned
/// vector always has `queries.len()` entries.
pub async fn execute_all<B: SearchBackend>(
    backend: &B,
    queries: &[String],
    config: &SearchConfig,
) -> Vec<QueryOutcome> {
    // Unvalidated configs can carry a cap above what a semaphore holds.
    let limiter = config
        .max_concurrent_requests
        .map(|cap| Semaphore::new(cap.min(Semaphore::MAX_PERMITS)));

    let futures: Vec<_> = queries
        .iter()
        .enumerate()
        .map(|(index, query)| {
            let limiter = limiter.as_ref();
            async move {
                // The semaphore is never closed, so acquire cannot fail.
                let _permit = match limiter {
                    Some(semaphore) => semaphore.acquire().await.ok(),
                    None => None,
                };
                let outcome = execute_one(backend, query, config).await;
                match &outcome {
                    Ok(response) => {
                        tracing::debug!(index, count = response.results.len(), "query returned results");
                    }
                    Err(err) => {
                        tracing::warn!(index, error = %err, "query failed");
                    }
                }
                outcome
            }
        })
        .collect();

    futures::future::join_all(futures).await
}

/// Run one query, bounded by the per-request timeout.
pub async fn execute_one<B: SearchBackend>(
    backend: &B,
    query: &str,
    config: &SearchConfig,
) -> QueryOutcome {
    let limit = Duration::from_secs(config.timeout_seconds);
    match tokio::time::timeout(limit, backend.search(query)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(SearchError::Timeout(format!(
            "query exceeded {}s limit",
            config.timeout_seconds
        ))),
    }
}
