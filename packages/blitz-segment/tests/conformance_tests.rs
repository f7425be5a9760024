use blitz_segment::{
    first_grapheme_cluster_in_str, first_line_segment_in_str, first_sentence_in_str,
    first_word_in_str, Graphemes, LineSegments, LineState, Sentences, Words,
};
use pretty_assertions::assert_eq;

const GRAPHEME_TESTS: &str = include_str!("data/GraphemeBreakTest.txt");
const WORD_TESTS: &str = include_str!("data/WordBreakTest.txt");
const SENTENCE_TESTS: &str = include_str!("data/SentenceBreakTest.txt");
const LINE_TESTS: &str = include_str!("data/LineBreakTest.txt");

/// One line of a break test file: the text and its expected segments
struct BreakCase {
    line: usize,
    text: String,
    segments: Vec<String>,
}

/// Helper function to parse a break test file
///
/// Each line alternates `÷`/`×` markers with hex code points; everything after
/// `#` is a comment.
fn parse(data: &str) -> Vec<BreakCase> {
    let mut cases = Vec::new();
    for (index, line) in data.lines().enumerate() {
        let line_no = index + 1;
        let body = line.split('#').next().unwrap_or_default().trim();
        if body.is_empty() {
            continue;
        }

        let mut text = String::new();
        let mut segments = Vec::new();
        let mut current = String::new();
        for token in body.split_whitespace() {
            match token {
                "÷" => {
                    if !current.is_empty() {
                        segments.push(std::mem::take(&mut current));
                    }
                }
                "×" => {}
                hex => {
                    let cp = u32::from_str_radix(hex, 16)
                        .ok()
                        .and_then(char::from_u32)
                        .unwrap_or_else(|| panic!("bad code point {hex:?} on line {line_no}"));
                    text.push(cp);
                    current.push(cp);
                }
            }
        }
        assert!(current.is_empty(), "line {line_no} must end with ÷");

        cases.push(BreakCase {
            line: line_no,
            text,
            segments,
        });
    }
    cases
}

/// Helper function to split with a resumable string scanner
fn scan<'a, S: Copy>(
    text: &'a str,
    mut first: impl FnMut(&'a str, Option<S>) -> (&'a str, &'a str, S),
) -> Vec<String> {
    let mut rest = text;
    let mut state = None;
    let mut found = Vec::new();
    while !rest.is_empty() {
        let (segment, next, next_state) = first(rest, state);
        found.push(segment.to_string());
        rest = next;
        state = Some(next_state);
    }
    found
}

fn owned<'a>(segments: impl Iterator<Item = &'a str>) -> Vec<String> {
    segments.map(str::to_string).collect()
}

#[cfg(test)]
mod conformance_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_data_files_parse() {
        for data in [GRAPHEME_TESTS, WORD_TESTS, SENTENCE_TESTS, LINE_TESTS] {
            let cases = parse(data);
            assert!(!cases.is_empty());
            for case in cases {
                assert_eq!(case.segments.concat(), case.text, "line {}", case.line);
            }
        }
    }

    #[test]
    fn test_grapheme_break_cases() {
        for case in parse(GRAPHEME_TESTS) {
            let found = scan(&case.text, first_grapheme_cluster_in_str);
            assert_eq!(found, case.segments, "line {}", case.line);
            assert_eq!(
                owned(Graphemes::new(&case.text)),
                case.segments,
                "cursor, line {}",
                case.line
            );
        }
    }

    #[test]
    fn test_word_break_cases() {
        for case in parse(WORD_TESTS) {
            let found = scan(&case.text, first_word_in_str);
            assert_eq!(found, case.segments, "line {}", case.line);
            assert_eq!(
                owned(Words::new(&case.text)),
                case.segments,
                "cursor, line {}",
                case.line
            );
        }
    }

    #[test]
    fn test_sentence_break_cases() {
        for case in parse(SENTENCE_TESTS) {
            let found = scan(&case.text, first_sentence_in_str);
            assert_eq!(found, case.segments, "line {}", case.line);
            assert_eq!(
                owned(Sentences::new(&case.text)),
                case.segments,
                "cursor, line {}",
                case.line
            );
        }
    }

    #[test]
    fn test_line_break_cases() {
        for case in parse(LINE_TESTS) {
            let found = scan(&case.text, |rest, state: Option<LineState>| {
                let (segment, next, _, state) = first_line_segment_in_str(rest, state);
                (segment, next, state)
            });
            assert_eq!(found, case.segments, "line {}", case.line);
            assert_eq!(
                owned(LineSegments::new(&case.text)),
                case.segments,
                "cursor, line {}",
                case.line
            );
        }
    }
}
