use blitz_segment::{
    step, step_str, string_width, string_width_with, BreakClass, Graphemes, LineSegments,
    Sentences, StepState, WidthConfig, Words,
};
use pretty_assertions::assert_eq;

/// Helper function to walk a string with `step_str`, collecting each cluster
/// with its end offset
fn walk(text: &str) -> Vec<(&str, usize, blitz_segment::Boundaries)> {
    let mut rest = text;
    let mut state: Option<StepState> = None;
    let mut found = Vec::new();
    while !rest.is_empty() {
        let (cluster, next, boundaries, next_state) = step_str(rest, state);
        found.push((cluster, text.len() - next.len(), boundaries));
        rest = next;
        state = Some(next_state);
    }
    found
}

/// Helper function to collect the end offsets of a cursor's segments
fn segment_ends<'a>(segments: impl Iterator<Item = &'a str>) -> Vec<usize> {
    segments
        .scan(0, |end, segment| {
            *end += segment.len();
            Some(*end)
        })
        .collect()
}

fn width_cases() -> Vec<(&'static str, usize)> {
    vec![
        ("", 0),
        ("\u{0008}", 0),
        ("\u{0000}", 0),
        ("\n", 0),
        ("\r", 0),
        ("\u{0300}", 0),
        ("\u{200D}", 0),
        ("a", 1),
        ("\u{1B05}", 1),
        ("\u{2985}", 1),
        ("\u{1F100}", 1),
        ("\u{FF61}", 1),
        ("\u{FE6A}", 2),
        ("\u{FF01}", 2),
        ("\u{1F60A}", 2),
        ("\u{1F1E6}", 2),
        ("\u{061C}a", 1),
        ("\u{061C}\u{FE6A}", 2),
        ("\n\u{200D}", 0),
        ("\u{1F1E9}\u{1F1EA}", 2),
        ("\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467}\u{200D}\u{1F466}", 2),
        ("\u{1112}\u{116F}\u{11B6}", 2),
        ("\u{D6EF}", 2),
        ("\u{79F0}\u{8C13}", 4),
        ("\u{0E1C}\u{0E39}\u{0E49}", 1),
        ("\u{0623}\u{0643}\u{062A}\u{0648}\u{0628}\u{0631}", 6),
        ("\u{263A}\u{FE0F}", 2),
        ("\u{231B}", 2),
        ("\u{231B}\u{FE0E}", 1),
        ("\u{3164}", 0),
        ("\u{FFA0}", 0),
        ("\u{115F}", 0),
        ("\u{0903}", 0),
        ("a\u{3164}b", 2),
    ]
}

#[cfg(test)]
mod width_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_string_width_cases() {
        for (text, expected) in width_cases() {
            assert_eq!(string_width(text), expected, "width of {text:?}");
        }
    }

    #[test]
    fn test_cursor_widths_sum_to_string_width() {
        for (text, expected) in width_cases() {
            let mut graphemes = Graphemes::new(text);
            let mut total = 0;
            while graphemes.advance() {
                total += graphemes.width();
            }
            assert_eq!(total, expected, "cursor width of {text:?}");
        }
    }

    #[test]
    fn test_step_widths_sum_to_string_width() {
        for (text, expected) in width_cases() {
            let total: usize = walk(text).iter().map(|(_, _, b)| b.width()).sum();
            assert_eq!(total, expected, "step width of {text:?}");

            let mut rest = text.as_bytes();
            let mut state = None;
            let mut total = 0;
            while !rest.is_empty() {
                let (_, next, boundaries, next_state) = step(rest, state);
                total += boundaries.width();
                rest = next;
                state = Some(next_state);
            }
            assert_eq!(total, expected, "byte step width of {text:?}");
        }
    }

    #[test]
    fn test_ambiguous_width_configuration() {
        let wide = WidthConfig::new(2).unwrap();
        // Greek small alpha and a box drawing line are East Asian Ambiguous
        assert_eq!(string_width("\u{03B1}\u{2500}"), 2);
        assert_eq!(string_width_with("\u{03B1}\u{2500}", &wide), 4);
        assert_eq!(string_width_with("ab", &wide), 2);
    }
}

#[cfg(test)]
mod step_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TEXT: &str = "Hello, world! How are you? Fine.\nNext line (really) ok.";

    #[test]
    fn test_step_clusters_match_graphemes() {
        let text = "e\u{0301}\u{1F469}\u{200D}\u{1F4BB} \u{1F1E9}\u{1F1EA}\r\nx";
        let clusters: Vec<&str> = walk(text).into_iter().map(|(c, _, _)| c).collect();
        let expected: Vec<&str> = Graphemes::new(text).collect();
        assert_eq!(clusters, expected);
    }

    #[test]
    fn test_word_boundaries_match_word_cursor() {
        let steps: Vec<usize> = walk(TEXT)
            .into_iter()
            .filter(|(_, _, b)| b.is_word_boundary())
            .map(|(_, end, _)| end)
            .collect();
        assert_eq!(steps, segment_ends(Words::new(TEXT)));
    }

    #[test]
    fn test_sentence_boundaries_match_sentence_cursor() {
        let steps: Vec<usize> = walk(TEXT)
            .into_iter()
            .filter(|(_, _, b)| b.is_sentence_boundary())
            .map(|(_, end, _)| end)
            .collect();
        assert_eq!(steps, segment_ends(Sentences::new(TEXT)));
    }

    #[test]
    fn test_line_breaks_match_line_cursor() {
        let steps: Vec<(usize, bool)> = walk(TEXT)
            .into_iter()
            .filter(|(_, _, b)| b.line_break() != BreakClass::Prohibited)
            .map(|(_, end, b)| (end, b.line_break() == BreakClass::Mandatory))
            .collect();

        let mut lines = LineSegments::new(TEXT);
        let mut expected = Vec::new();
        while lines.advance() {
            expected.push((lines.positions().1, lines.must_break()));
        }
        assert_eq!(steps, expected);
    }

    #[test]
    fn test_last_cluster_reports_every_boundary() {
        let (_, _, last) = *walk("ab").last().unwrap();
        assert_eq!(last.line_break(), BreakClass::Mandatory);
        assert!(last.is_word_boundary());
        assert!(last.is_sentence_boundary());
    }
}
