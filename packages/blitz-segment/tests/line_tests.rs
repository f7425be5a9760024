use blitz_segment::{first_line_segment, first_line_segment_in_str, LineSegments};
use pretty_assertions::assert_eq;

/// Helper function to collect line segments and their mandatory flags
fn scan_lines(text: &str) -> Vec<(&str, bool)> {
    let mut rest = text;
    let mut state = None;
    let mut segments = Vec::new();
    while !rest.is_empty() {
        let (segment, next, must_break, next_state) = first_line_segment_in_str(rest, state);
        segments.push((segment, must_break));
        rest = next;
        state = Some(next_state);
    }
    segments
}

/// Helper function to collect only the segment texts
fn segments(text: &str) -> Vec<&str> {
    scan_lines(text).into_iter().map(|(segment, _)| segment).collect()
}

#[cfg(test)]
mod line_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_optional_and_mandatory_breaks() {
        assert_eq!(
            scan_lines("First line.\nSecond line."),
            vec![
                ("First ", false),
                ("line.\n", true),
                ("Second ", false),
                ("line.", true),
            ]
        );
    }

    #[test]
    fn test_crlf_is_one_mandatory_break() {
        assert_eq!(scan_lines("x\r\ny"), vec![("x\r\n", true), ("y", true)]);
    }

    #[test]
    fn test_spaces_stay_before_the_break() {
        assert_eq!(segments("a  b"), vec!["a  ", "b"]);
    }

    #[test]
    fn test_break_after_hyphen() {
        assert_eq!(segments("well-known"), vec!["well-", "known"]);
    }

    #[test]
    fn test_ideographs_break_between_each_other() {
        assert_eq!(segments("\u{4E2D}\u{6587}"), vec!["\u{4E2D}", "\u{6587}"]);
    }

    #[test]
    fn test_glue_and_zero_width_space() {
        assert_eq!(segments("a\u{00A0}b"), vec!["a\u{00A0}b"]);
        assert_eq!(segments("a\u{200B}b"), vec!["a\u{200B}", "b"]);
    }

    #[test]
    fn test_numeric_expressions_hold_together() {
        assert_eq!(segments("$1,000.50 ok"), vec!["$1,000.50 ", "ok"]);
    }

    #[test]
    fn test_leading_separator_stays_with_digits() {
        assert_eq!(segments(".5"), vec![".5"]);
        assert_eq!(segments("(.5)"), vec!["(.5)"]);
        assert_eq!(segments("a.5"), vec!["a.5"]);
        assert_eq!(segments("x,1"), vec!["x,1"]);
        let cursor: Vec<&str> = LineSegments::new("costs .5 or (.25)").collect();
        // LB13 keeps the separator after the space as well
        assert_eq!(cursor, vec!["costs .5 ", "or ", "(.25)"]);
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(segments("(a) b"), vec!["(a) ", "b"]);
    }

    #[test]
    fn test_curly_quotations() {
        assert_eq!(
            segments("say \u{201C}hi\u{201D} now"),
            vec!["say ", "\u{201C}hi\u{201D} ", "now"]
        );
    }

    #[test]
    fn test_bytes_match_str() {
        let text = "one two\nthree";
        let mut rest = text.as_bytes();
        let mut state = None;
        let mut found = Vec::new();
        while !rest.is_empty() {
            let (segment, next, must_break, next_state) = first_line_segment(rest, state);
            found.push((std::str::from_utf8(segment).unwrap(), must_break));
            rest = next;
            state = Some(next_state);
        }
        assert_eq!(found, scan_lines(text));
    }

    #[test]
    fn test_cursor_matches_scanner() {
        let text = "The quick brown fox\njumps over (the) lazy dog.";
        let mut lines = LineSegments::new(text);
        let mut found = Vec::new();
        while lines.advance() {
            found.push((lines.as_str(), lines.must_break()));
        }
        assert_eq!(found, scan_lines(text));
    }
}
