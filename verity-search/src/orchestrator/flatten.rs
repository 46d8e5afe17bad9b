//! Query flattener: pairs in, one ordered query list out.

use crate::types::QueryPair;

/// Flatten query pairs into `[p0.first, p0.second, p1.first, ...]`.
///
/// Absent entries are replaced by [`QueryPair::sentinel`], so the output is
/// always exactly twice as long as the input.
pub fn flatten_pairs(pairs: &[Option<QueryPair>]) -> Vec<String> {
    let mut queries = Vec::with_capacity(pairs.len() * 2);
    for pair in pairs {
        let pair = pair.clone().unwrap_or_else(QueryPair::sentinel);
        queries.push(pair.first);
        queries.push(pair.second);
    }
    queries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattens_in_input_order() {
        let pairs = vec![
            Some(QueryPair::new("q1a", "q1b")),
            Some(QueryPair::new("q2a", "q2b")),
        ];
        assert_eq!(flatten_pairs(&pairs), vec!["q1a", "q1b", "q2a", "q2b"]);
    }

    #[test]
    fn absent_pair_becomes_sentinel() {
        let pairs = vec![Some(QueryPair::new("a", "b")), None];
        assert_eq!(flatten_pairs(&pairs), vec!["a", "b", "None", "None"]);
    }

    #[test]
    fn empty_input_flattens_to_empty() {
        assert!(flatten_pairs(&[]).is_empty());
    }

    #[test]
    fn output_is_twice_input_length() {
        let pairs: Vec<Option<QueryPair>> = (0..7)
            .map(|i| (i % 3 != 0).then(|| QueryPair::new(format!("a{i}"), format!("b{i}"))))
            .collect();
        let flat = flatten_pairs(&pairs);
        assert_eq!(flat.len(), 14);
        for (i, pair) in pairs.iter().enumerate() {
            let expected = pair.clone().unwrap_or_else(QueryPair::sentinel);
            assert_eq!(flat[2 * i], expected.first);
            assert_eq!(flat[2 * i + 1], expected.second);
        }
    }

    #[test]
    fn empty_strings_are_kept_as_is() {
        let pairs = vec![Some(QueryPair::new("", "b"))];
        assert_eq!(flatten_pairs(&pairs), vec!["", "b"]);
    }
}
