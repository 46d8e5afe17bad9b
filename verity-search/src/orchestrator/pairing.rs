//! Pair reassembler: flat snippet groups back into query-pair order.

use crate::error::SearchError;
use crate::types::{PairedSnippetGroups, SnippetGroup};

/// Merge flat groups `2i` and `2i + 1` into output entry `i`.
///
/// The first query's snippets come first. Purely positional; no content
/// matching is done.
///
/// # Errors
///
/// Returns [`SearchError::Pairing`] if `groups.len() != 2 * pair_count`.
pub fn reassemble(
    groups: Vec<SnippetGroup>,
    pair_count: usize,
) -> Result<PairedSnippetGroups, SearchError> {
    let expected = pair_count * 2;
    if groups.len() != expected {
        return Err(SearchError::Pairing(format!(
            "expected {expected} snippet groups for {pair_count} pairs, got {}",
            groups.len()
        )));
    }

    let mut paired = Vec::with_capacity(pair_count);
    let mut flat = groups.into_iter();
    while let (Some(mut first), Some(second)) = (flat.next(), flat.next()) {
        first.extend(second);
        paired.push(first);
    }
    Ok(paired)
}
