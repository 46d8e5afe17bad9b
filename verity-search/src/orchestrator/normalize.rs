//! Result normalizer: raw outcome to a bounded, non-empty snippet group.
//!
//! Records are taken in backend order, never re-ranked. At most `k` records
//! are considered and at most `k / 2` snippets are kept, so two merged
//! groups stay within one `k` budget.

use crate::types::{NONE_PLACEHOLDER, QueryOutcome, SearchRecord, SearchResponse, Snippet, SnippetGroup};

/// Normalize one executor slot.
///
/// A captured failure becomes the single "Search failed" snippet.
pub fn normalize_outcome(outcome: &QueryOutcome, snippet_count: usize) -> SnippetGroup {
    match outcome {
        Ok(response) => normalize_response(response, snippet_count),
        Err(_) => vec![Snippet::search_failed()],
    }
}

/// Normalize a successful response.
///
/// Returns `[Snippet::no_result()]` when no record yields usable content.
pub fn normalize_response(response: &SearchResponse, snippet_count: usize) -> SnippetGroup {
    let mut snippets: SnippetGroup = response
        .results
        .iter()
        .take(snippet_count)
        .filter_map(record_to_snippet)
        .collect();

    snippets.truncate(snippet_count / 2);

    if snippets.is_empty() {
        return vec![Snippet::no_result()];
    }
    snippets
}

/// Convert one record, or `None` if it has no usable text.
///
/// Text comes from `content`, or from `title` when `content` is absent.
/// An empty `content` is not replaced by the title.
pub fn record_to_snippet(record: &SearchRecord) -> Option<Snippet> {
    let raw = record.content.as_deref().or(record.title.as_deref())?;
    let content = clean_content(raw);
    if content.is_empty() {
        return None;
    }

    let source = record
        .url
        .as_deref()
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(NONE_PLACEHOLDER);

    Some(Snippet::new(content, source))
}

/// Replace each line break with a space and trim surrounding whitespace.
pub fn clean_content(raw: &str) -> String {
    raw.replace(['\n', '\r'], " ").trim().to_owned()
}
