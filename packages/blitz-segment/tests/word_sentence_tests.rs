use blitz_segment::{first_sentence_in_str, first_word, first_word_in_str, Sentences, Words};
use pretty_assertions::assert_eq;

/// Helper function to collect words with the resumable scanner
fn scan_words(text: &str) -> Vec<&str> {
    let mut rest = text;
    let mut state = None;
    let mut words = Vec::new();
    while !rest.is_empty() {
        let (word, next, next_state) = first_word_in_str(rest, state);
        words.push(word);
        rest = next;
        state = Some(next_state);
    }
    words
}

/// Helper function to collect sentences with the resumable scanner
fn scan_sentences(text: &str) -> Vec<&str> {
    let mut rest = text;
    let mut state = None;
    let mut sentences = Vec::new();
    while !rest.is_empty() {
        let (sentence, next, next_state) = first_sentence_in_str(rest, state);
        sentences.push(sentence);
        rest = next;
        state = Some(next_state);
    }
    sentences
}

#[cfg(test)]
mod word_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_words_and_punctuation() {
        assert_eq!(
            scan_words("Hello, world!"),
            vec!["Hello", ",", " ", "world", "!"]
        );
    }

    #[test]
    fn test_contractions_and_numbers() {
        assert_eq!(
            scan_words("can't pay 1,000.50 now"),
            vec!["can't", " ", "pay", " ", "1,000.50", " ", "now"]
        );
    }

    #[test]
    fn test_trailing_separator_is_its_own_word() {
        assert_eq!(scan_words("end."), vec!["end", "."]);
        assert_eq!(scan_words("42,"), vec!["42", ","]);
    }

    #[test]
    fn test_connector_punctuation_joins() {
        assert_eq!(scan_words("snake_case x"), vec!["snake_case", " ", "x"]);
    }

    #[test]
    fn test_whitespace_run_stays_together() {
        assert_eq!(scan_words("a \t b"), vec!["a", " ", "\t", " ", "b"]);
        assert_eq!(scan_words("a   b"), vec!["a", "   ", "b"]);
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(scan_words("a\r\n\nb"), vec!["a", "\r\n", "\n", "b"]);
    }

    #[test]
    fn test_emoji_sequences() {
        // Woman technologist, then a flag pair and a lone indicator
        assert_eq!(
            scan_words("\u{1F469}\u{200D}\u{1F4BB}\u{1F1E9}\u{1F1EA}\u{1F1FA}"),
            vec!["\u{1F469}\u{200D}\u{1F4BB}", "\u{1F1E9}\u{1F1EA}", "\u{1F1FA}"]
        );
    }

    #[test]
    fn test_katakana_run() {
        assert_eq!(
            scan_words("\u{30AB}\u{30BF}\u{30AB}\u{30CA} a"),
            vec!["\u{30AB}\u{30BF}\u{30AB}\u{30CA}", " ", "a"]
        );
    }

    #[test]
    fn test_cursor_matches_scanner() {
        let text = "The quick (\"brown\") fox can't jump 32.3 feet, right?";
        let words: Vec<&str> = Words::new(text).collect();
        assert_eq!(words, scan_words(text));
        assert_eq!(words.concat(), text);
    }

    #[test]
    fn test_bytes_match_str() {
        let text = "e.g. 3.14";
        let mut rest = text.as_bytes();
        let mut state = None;
        let mut words = Vec::new();
        while !rest.is_empty() {
            let (word, next, next_state) = first_word(rest, state);
            words.push(std::str::from_utf8(word).unwrap());
            rest = next;
            state = Some(next_state);
        }
        assert_eq!(words, vec!["e.g", ".", " ", "3.14"]);
        assert_eq!(words, scan_words(text));
    }
}

#[cfg(test)]
mod sentence_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_terminators() {
        assert_eq!(
            scan_sentences("Mr. Smith went home. He left! Did he? Yes."),
            vec!["Mr. ", "Smith went home. ", "He left! ", "Did he? ", "Yes."]
        );
    }

    #[test]
    fn test_lowercase_continuation() {
        assert_eq!(scan_sentences("etc. and more. Then"), vec!["etc. and more. ", "Then"]);
    }

    #[test]
    fn test_paragraph_separators_end_sentences() {
        assert_eq!(
            scan_sentences("no stop\nnext line"),
            vec!["no stop\n", "next line"]
        );
        assert_eq!(scan_sentences("one\r\ntwo"), vec!["one\r\n", "two"]);
    }

    #[test]
    fn test_closing_punctuation_and_spaces_attach() {
        assert_eq!(
            scan_sentences("(Done.)  Next one."),
            vec!["(Done.)  ", "Next one."]
        );
    }

    #[test]
    fn test_cursor_matches_scanner() {
        let text = "This is sentence 1.0. And this is sentence two.";
        let sentences: Vec<&str> = Sentences::new(text).collect();
        assert_eq!(sentences, vec!["This is sentence 1.0. ", "And this is sentence two."]);
        assert_eq!(sentences, scan_sentences(text));
    }
}
