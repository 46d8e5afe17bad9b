//! Query-pair input decoding and snippet-group output encoding.
//!
//! Input is a JSON array whose entries are two-string arrays or `null`:
//!
//! ```json
//! [["capital of France", "France capital city"], null]
//! ```

use verity_search::{PairedSnippetGroups, QueryPair};

use crate::error::{Result, VerityError};

/// Decode a JSON list of optional query pairs.
///
/// # Errors
///
/// Returns [`VerityError::Input`] if the text is not an array of
/// two-string arrays and nulls.
pub fn parse_query_pairs(json: &str) -> Result<Vec<Option<QueryPair>>> {
    serde_json::from_str(json).map_err(|e| {
        VerityError::Input(format!(
            "expected a JSON array of [query, query] pairs or null: {e}"
        ))
    })
}

/// Encode snippet groups as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`VerityError::Input`] if serialization fails.
pub fn render_groups(groups: &PairedSnippetGroups) -> Result<String> {
    serde_json::to_string_pretty(groups)
        .map_err(|e| VerityError::Input(format!("failed to encode snippet groups: {e}")))
}
