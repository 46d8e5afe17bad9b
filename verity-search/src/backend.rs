//! Trait definition for the search transport.
//!
//! Every path through the crate, batch or single query, is built on the
//! one primitive [`SearchBackend::search`]: send one query, get back the
//! decoded payload or a captured failure.

use crate::error::SearchError;
use crate::types::SearchResponse;

/// A search backend that answers one query at a time.
///
/// Implementors handle their own request construction, status checking and
/// payload decoding. Batch fan-out, normalization and pairing live in
/// [`crate::orchestrator`] and work with any implementation.
///
/// All implementations must be `Send + Sync` so one handle can be shared
/// by every in-flight query of a batch.
pub trait SearchBackend: Send + Sync {
    /// Run a single query and return the decoded response.
    ///
    /// # Errors
    ///
    /// Returns a transport-class [`SearchError`] (`Timeout`, `Http`,
    /// `Status` or `Parse`) when the request fails. Callers capture it in
    /// the query's slot instead of aborting the batch.
    fn search(
        &self,
        query: &str,
    ) -> impl std::future::Future<Output = Result<SearchResponse, SearchError>> + Send;

    /// Short backend name for logs.
    fn name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SearchRecord;

    /// A canned backend for testing trait bounds and async execution.
    struct MockBackend {
        records: Vec<SearchRecord>,
        fail: bool,
    }

    impl SearchBackend for MockBackend {
        async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
            if self.fail {
                return Err(SearchError::Status {
                    status: 503,
                    query: query.to_owned(),
                });
            }
            Ok(SearchResponse {
                results: self.records.clone(),
            })
        }

        fn name(&self) -> &'static str {
            "mock"
        }
    }

    #[test]
    fn mock_backend_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MockBackend>();
    }

    #[tokio::test]
    async fn mock_backend_returns_records() {
        let backend = MockBackend {
            records: vec![SearchRecord {
                title: Some("Test".into()),
                url: Some("https://test.com".into()),
                content: Some("A test result".into()),
                engine: None,
            }],
            fail: false,
        };

        let response = backend.search("test").await.expect("should succeed");
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].title.as_deref(), Some("Test"));
    }

    #[tokio::test]
    async fn mock_backend_propagates_errors() {
        let backend = MockBackend {
            records: vec![],
            fail: true,
        };

        let err = backend.search("q").await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("503"));
    }
}
