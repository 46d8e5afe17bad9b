//! Core types: query pairs, backend payloads and normalized snippets.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::SearchError;

/// Placeholder used for absent queries and missing sources.
pub const NONE_PLACEHOLDER: &str = "None";

/// Snippet text when a query produced no usable records.
pub const NO_RESULT_CONTENT: &str = "No good Search Result was found";

/// Snippet text when the request for a query failed.
pub const SEARCH_FAILED_CONTENT: &str = "Search failed";

/// Two related queries whose snippets are merged into one group.
///
/// Serialized as a two-element array: `["first query", "second query"]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct QueryPair {
    /// Query whose snippets come first in the merged group.
    pub first: String,
    /// Query whose snippets follow.
    pub second: String,
}

impl QueryPair {
    /// Build a pair from two query strings.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// The `("None", "None")` pair substituted for an absent entry.
    pub fn sentinel() -> Self {
        Self::new(NONE_PLACEHOLDER, NONE_PLACEHOLDER)
    }
}

impl From<(String, String)> for QueryPair {
    fn from((first, second): (String, String)) -> Self {
        Self { first, second }
    }
}

impl From<QueryPair> for (String, String) {
    fn from(pair: QueryPair) -> Self {
        (pair.first, pair.second)
    }
}

/// A normalized unit of retrieved evidence.
///
/// `content` is non-empty, trimmed and free of line breaks. `source` is a
/// URL or the literal `"None"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Evidence text.
    pub content: String,
    /// Where the text came from.
    pub source: String,
}

impl Snippet {
    /// Build a snippet from already-normalized parts.
    pub fn new(content: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            source: source.into(),
        }
    }

    /// Placeholder for a query that returned nothing usable.
    pub fn no_result() -> Self {
        Self::new(NO_RESULT_CONTENT, NONE_PLACEHOLDER)
    }

    /// Placeholder for a query whose request failed.
    pub fn search_failed() -> Self {
        Self::new(SEARCH_FAILED_CONTENT, NONE_PLACEHOLDER)
    }

    /// Whether this is one of the two placeholder snippets.
    pub fn is_fallback(&self) -> bool {
        self.source == NONE_PLACEHOLDER
            && (self.content == NO_RESULT_CONTENT || self.content == SEARCH_FAILED_CONTENT)
    }
}

/// Bounded, non-empty snippets for one query.
pub type SnippetGroup = Vec<Snippet>;

/// One merged snippet group per input query pair, in input order.
pub type PairedSnippetGroups = Vec<SnippetGroup>;

/// One record of a SearXNG `results` array. Every field is optional;
/// unknown fields are ignored and a field of the wrong JSON type reads as
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRecord {
    /// Page title.
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: Option<String>,
    /// Result URL.
    #[serde(default, deserialize_with = "lenient_string")]
    pub url: Option<String>,
    /// Text excerpt.
    #[serde(default, deserialize_with = "lenient_string")]
    pub content: Option<String>,
    /// Upstream engine that produced the record.
    #[serde(default, deserialize_with = "lenient_string")]
    pub engine: Option<String>,
}

/// Decoded SearXNG JSON response.
///
/// A missing or `null` `results` decodes as empty. Entries that are not
/// objects are skipped so one odd record cannot discard its siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Result records in backend order.
    #[serde(default, deserialize_with = "lenient_records")]
    pub results: Vec<SearchRecord>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_owned))
}

fn lenient_records<'de, D>(deserializer: D) -> Result<Vec<SearchRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Vec<serde_json::Value>> = Option::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .filter(serde_json::Value::is_object)
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect())
}

/// Per-query slot produced by the executor: a payload or the captured failure.
pub type QueryOutcome = Result<SearchResponse, SearchError>;
