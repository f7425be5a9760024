use blitz_segment::{
    first_grapheme_cluster, first_grapheme_cluster_in_str, first_line_segment_in_str,
    first_sentence_in_str, first_word, first_word_in_str, GraphemeState, Graphemes, LineSegments,
    LineState, SegmentError, Sentences, SentenceState, WidthConfig, WordState, Words,
};
use pretty_assertions::assert_eq;
use unicode_segmentation::UnicodeSegmentation;

const SAMPLES: &[&str] = &[
    "",
    "a",
    "Hello, world!",
    "The quick (\"brown\") fox can't jump 32.3 feet, right?",
    "First line.\nSecond line.\r\nThird line.",
    "e\u{0301}t\u{00E9} \u{4E2D}\u{6587} \u{30AB}\u{30BF}\u{30AB}\u{30CA}",
    "\u{1F468}\u{200D}\u{1F469}\u{200D}\u{1F467} \u{1F1E9}\u{1F1EA}\u{1F1FA}",
    "This is \u{1F3F3}\u{FE0F}\u{200D}\u{1F308}, a test string \u{30C4} for grapheme cluster testing. \u{1F3CB}\u{1F3FD}\u{200D}\u{2640}\u{FE0F}\u{1F642}\u{1F642}",
    "\u{1100}\u{1161}\u{11A8}\u{AC00}\u{11A8} a\u{00A0}b\u{200B}c",
    "$1,000.50 \u{201C}quoted\u{201D} (paren) well-known",
];

/// Helper function to split with a resumable string scanner
fn scan<'a, S: Copy>(
    text: &'a str,
    mut first: impl FnMut(&'a str, Option<S>) -> (&'a str, &'a str, S),
) -> Vec<&'a str> {
    let mut rest = text;
    let mut state = None;
    let mut found = Vec::new();
    while !rest.is_empty() {
        let (segment, next, next_state) = first(rest, state);
        assert!(!segment.is_empty(), "no progress in {text:?}");
        found.push(segment);
        rest = next;
        state = Some(next_state);
    }
    found
}

fn scan_lines(text: &str) -> Vec<&str> {
    scan(text, |rest, state: Option<LineState>| {
        let (segment, next, _, state) = first_line_segment_in_str(rest, state);
        (segment, next, state)
    })
}

#[cfg(test)]
mod equivalence_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_segments_partition_the_text() {
        for text in SAMPLES {
            assert_eq!(scan(text, first_grapheme_cluster_in_str).concat(), *text);
            assert_eq!(scan(text, first_word_in_str).concat(), *text);
            assert_eq!(scan(text, first_sentence_in_str).concat(), *text);
            assert_eq!(scan_lines(text).concat(), *text);
        }
    }

    #[test]
    fn test_eager_matches_incremental() {
        for text in SAMPLES {
            assert_eq!(
                Graphemes::new(text).collect::<Vec<_>>(),
                scan(text, first_grapheme_cluster_in_str)
            );
            assert_eq!(
                Words::new(text).collect::<Vec<_>>(),
                scan(text, first_word_in_str)
            );
            assert_eq!(
                Sentences::new(text).collect::<Vec<_>>(),
                scan(text, first_sentence_in_str)
            );
            assert_eq!(LineSegments::new(text).collect::<Vec<_>>(), scan_lines(text));
        }
    }

    #[test]
    fn test_bytes_match_str() {
        for text in SAMPLES {
            let mut rest = text.as_bytes();
            let mut state = None;
            let mut clusters = Vec::new();
            while !rest.is_empty() {
                let (cluster, next, next_state) = first_grapheme_cluster(rest, state);
                clusters.push(std::str::from_utf8(cluster).unwrap());
                rest = next;
                state = Some(next_state);
            }
            assert_eq!(clusters, scan(text, first_grapheme_cluster_in_str));

            let mut rest = text.as_bytes();
            let mut state = None;
            let mut words = Vec::new();
            while !rest.is_empty() {
                let (word, next, next_state) = first_word(rest, state);
                words.push(std::str::from_utf8(word).unwrap());
                rest = next;
                state = Some(next_state);
            }
            assert_eq!(words, scan(text, first_word_in_str));
        }
    }

    #[test]
    fn test_exhausted_cursor_stays_exhausted() {
        let mut words = Words::new("two words");
        assert_eq!(words.by_ref().count(), 3);
        assert_eq!(words.next(), None);
        assert!(!words.advance());
        assert_eq!(words.positions(), (9, 9));
    }

    #[test]
    fn test_raw_states_carry_between_calls() {
        for text in SAMPLES {
            let mut rest = *text;
            let mut raw = -1;
            let mut found = Vec::new();
            while !rest.is_empty() {
                let state = WordState::from_raw(raw).unwrap();
                let (word, next, next_state) = first_word_in_str(rest, state);
                found.push(word);
                rest = next;
                raw = next_state.to_raw();
            }
            assert_eq!(found, scan(text, first_word_in_str));
        }
    }
}

#[cfg(test)]
mod reference_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_graphemes_agree_with_unicode_segmentation() {
        for text in SAMPLES {
            let expected: Vec<&str> = text.graphemes(true).collect();
            assert_eq!(Graphemes::new(text).collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn test_words_agree_on_plain_text() {
        for text in [
            "Hello, world!",
            "The quick (\"brown\") fox can't jump 32.3 feet, right?",
            "e.g. 3,000 items  for snake_case",
        ] {
            let expected: Vec<&str> = text.split_word_bounds().collect();
            assert_eq!(Words::new(text).collect::<Vec<_>>(), expected);
        }
    }

    #[test]
    fn test_sentences_agree_on_plain_text() {
        for text in [
            "Mr. Smith went home. He left! Did he? Yes.",
            "This is sentence 1.0. And this is sentence two.",
        ] {
            let expected: Vec<&str> = text.split_sentence_bounds().collect();
            assert_eq!(Sentences::new(text).collect::<Vec<_>>(), expected);
        }
    }
}

#[cfg(test)]
mod state_and_config_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_negative_raw_state_means_fresh_start() {
        assert_eq!(GraphemeState::from_raw(-1), Ok(None));
        assert_eq!(WordState::from_raw(-1), Ok(None));
        assert_eq!(SentenceState::from_raw(-7), Ok(None));
        assert_eq!(LineState::from_raw(-1), Ok(None));
    }

    #[test]
    fn test_default_states_encode_to_zero() {
        assert_eq!(GraphemeState::default().to_raw(), 0);
        assert_eq!(WordState::default().to_raw(), 0);
        assert_eq!(SentenceState::default().to_raw(), 0);
        assert_eq!(LineState::default().to_raw(), 0);
        assert_eq!(LineState::from_raw(0), Ok(Some(LineState::default())));
    }

    #[test]
    fn test_foreign_raw_states_are_rejected() {
        assert_eq!(
            GraphemeState::from_raw(0x1FF),
            Err(SegmentError::InvalidState {
                family: "grapheme",
                raw: 0x1FF
            })
        );
        assert!(GraphemeState::from_raw(200).is_err());
        assert!(WordState::from_raw(0x300).is_err());
        assert!(LineState::from_raw(1 << 16).is_err());
    }

    #[test]
    fn test_error_messages() {
        let _ = env_logger::builder().is_test(true).try_init();
        let error = GraphemeState::from_raw(0x1FF).unwrap_err();
        assert_eq!(error.to_string(), "Invalid grapheme scanner state: 0x1ff");
        assert_eq!(
            SegmentError::InvalidAmbiguousWidth(3).to_string(),
            "Invalid ambiguous width: 3 (expected 1 or 2)"
        );
    }

    #[test]
    fn test_width_config_from_json() {
        let config: WidthConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, WidthConfig::default());

        let config: WidthConfig = serde_json::from_str(r#"{"ambiguous_width": 2}"#).unwrap();
        assert_eq!(config, WidthConfig::new(2).unwrap());

        assert!(serde_json::from_str::<WidthConfig>(r#"{"ambiguous_width": 0}"#).is_err());
        assert_eq!(WidthConfig::new(0), Err(SegmentError::InvalidAmbiguousWidth(0)));
    }
}
