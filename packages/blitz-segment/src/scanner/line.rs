//! Line break opportunity scanning

use super::first_segment;
use crate::rules::{BreakClass, LineRules, LineState};

/// Split the text up to the next line break opportunity off a byte buffer
///
/// The flag reports whether the break after the segment is mandatory. The
/// end of the input always counts as a mandatory break.
pub fn first_line_segment(
    input: &[u8],
    state: Option<LineState>,
) -> (&[u8], &[u8], bool, LineState) {
    let (segment, rest, action, state) = first_segment::<LineRules, _>(input, state);
    (segment, rest, action == BreakClass::Mandatory, state)
}

/// Split the text up to the next line break opportunity off a string
///
/// ```
/// use blitz_segment::first_line_segment_in_str;
///
/// let (segment, rest, must_break, _) = first_line_segment_in_str("First line.\nSecond", None);
/// assert_eq!(segment, "First ");
/// assert_eq!(rest, "line.\nSecond");
/// assert!(!must_break);
/// ```
pub fn first_line_segment_in_str(
    input: &str,
    state: Option<LineState>,
) -> (&str, &str, bool, LineState) {
    let (segment, rest, action, state) = first_segment::<LineRules, _>(input, state);
    (segment, rest, action == BreakClass::Mandatory, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mandatory_and_optional_breaks() {
        let mut rest = "First line.\nSecond line.";
        let mut state = None;
        let mut found = Vec::new();
        while !rest.is_empty() {
            let (segment, next, must_break, next_state) = first_line_segment_in_str(rest, state);
            found.push((segment, must_break));
            rest = next;
            state = Some(next_state);
        }
        assert_eq!(
            found,
            vec![
                ("First ", false),
                ("line.\n", true),
                ("Second ", false),
                ("line.", true),
            ]
        );
    }

    #[test]
    fn test_empty_input_is_not_a_break() {
        let (segment, rest, must_break, state) = first_line_segment(b"", None);
        assert!(segment.is_empty() && rest.is_empty());
        assert!(!must_break);
        assert_eq!(state, LineState::default());
    }
}
