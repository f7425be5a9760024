//! Grapheme cluster scanning

use super::first_segment;
use crate::rules::{GraphemeRules, GraphemeState};

/// Split the first extended grapheme cluster off a byte buffer
///
/// Invalid UTF-8 bytes become single-byte clusters of their own unless a
/// rule attaches them (they classify as U+FFFD).
pub fn first_grapheme_cluster(
    input: &[u8],
    state: Option<GraphemeState>,
) -> (&[u8], &[u8], GraphemeState) {
    let (cluster, rest, _, state) = first_segment::<GraphemeRules, _>(input, state);
    (cluster, rest, state)
}

/// Split the first extended grapheme cluster off a string
///
/// ```
/// use blitz_segment::first_grapheme_cluster_in_str;
///
/// let (cluster, rest, state) = first_grapheme_cluster_in_str("e\u{301}x", None);
/// assert_eq!(cluster, "e\u{301}");
/// assert_eq!(rest, "x");
///
/// let (cluster, rest, _) = first_grapheme_cluster_in_str(rest, Some(state));
/// assert_eq!((cluster, rest), ("x", ""));
/// ```
pub fn first_grapheme_cluster_in_str(
    input: &str,
    state: Option<GraphemeState>,
) -> (&str, &str, GraphemeState) {
    let (cluster, rest, _, state) = first_segment::<GraphemeRules, _>(input, state);
    (cluster, rest, state)
}

/// Number of extended grapheme clusters in `text`
pub fn grapheme_cluster_count(text: &str) -> usize {
    let mut rest = text;
    let mut state = None;
    let mut count = 0;
    while !rest.is_empty() {
        let (_, next, next_state) = first_grapheme_cluster_in_str(rest, state);
        rest = next;
        state = Some(next_state);
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clusters(text: &str) -> Vec<&str> {
        let mut rest = text;
        let mut state = None;
        let mut found = Vec::new();
        while !rest.is_empty() {
            let (cluster, next, next_state) = first_grapheme_cluster_in_str(rest, state);
            found.push(cluster);
            rest = next;
            state = Some(next_state);
        }
        found
    }

    #[test]
    fn test_count_clusters() {
        assert_eq!(grapheme_cluster_count(""), 0);
        assert_eq!(grapheme_cluster_count("m\u{00F6}p"), 3);
        assert_eq!(grapheme_cluster_count("\r\n"), 1);
        assert_eq!(grapheme_cluster_count("\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}"), 1);
        assert_eq!(grapheme_cluster_count("\u{1F1F3}\u{1F1F1}\u{1F1E7}\u{1F1EA}"), 2);
    }

    #[test]
    fn test_combining_sequences() {
        assert_eq!(clusters("mo\u{0308}p"), vec!["m", "o\u{0308}", "p"]);
        assert_eq!(clusters("\u{1100}\u{1161}\u{11A8}a"), vec!["\u{1100}\u{1161}\u{11A8}", "a"]);
    }

    #[test]
    fn test_bytes_match_str() {
        let text = "a\u{0301}\u{1F469}\u{200D}\u{1F4BB}\r\nz";
        let (cluster, rest, state) = first_grapheme_cluster(text.as_bytes(), None);
        let (expected, expected_rest, expected_state) = first_grapheme_cluster_in_str(text, None);
        assert_eq!(cluster, expected.as_bytes());
        assert_eq!(rest, expected_rest.as_bytes());
        assert_eq!(state, expected_state);
    }

    #[test]
    fn test_invalid_bytes_make_progress() {
        let bytes: &[u8] = &[b'a', 0xFF, 0xFE, b'b'];
        let (first, rest, state) = first_grapheme_cluster(bytes, None);
        assert_eq!(first, b"a");
        let (second, rest, state) = first_grapheme_cluster(rest, Some(state));
        assert_eq!(second, &[0xFF_u8][..]);
        let (third, rest, _) = first_grapheme_cluster(rest, Some(state));
        assert_eq!(third, &[0xFE_u8][..]);
        assert_eq!(rest, b"b");
    }
}
