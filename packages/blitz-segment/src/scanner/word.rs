//! Word boundary scanning

use super::first_segment;
use crate::rules::{WordRules, WordState};

/// Split the first word-boundary segment off a byte buffer
///
/// Segments are the spans between word boundaries, so spaces and
/// punctuation come back as segments of their own.
pub fn first_word(input: &[u8], state: Option<WordState>) -> (&[u8], &[u8], WordState) {
    let (word, rest, _, state) = first_segment::<WordRules, _>(input, state);
    (word, rest, state)
}

/// Split the first word-boundary segment off a string
pub fn first_word_in_str(input: &str, state: Option<WordState>) -> (&str, &str, WordState) {
    let (word, rest, _, state) = first_segment::<WordRules, _>(input, state);
    (word, rest, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words_and_punctuation() {
        let mut rest = "Hello, world!";
        let mut state = None;
        let mut words = Vec::new();
        while !rest.is_empty() {
            let (word, next, next_state) = first_word_in_str(rest, state);
            words.push(word);
            rest = next;
            state = Some(next_state);
        }
        assert_eq!(words, vec!["Hello", ",", " ", "world", "!"]);
    }

    #[test]
    fn test_contraction_is_one_word() {
        let (word, rest, _) = first_word_in_str("can't stop", None);
        assert_eq!((word, rest), ("can't", " stop"));
    }

    #[test]
    fn test_bytes_match_str() {
        let text = "3.14 apples";
        let (word, rest, state) = first_word(text.as_bytes(), None);
        let (expected, expected_rest, expected_state) = first_word_in_str(text, None);
        assert_eq!(word, expected.as_bytes());
        assert_eq!(rest, expected_rest.as_bytes());
        assert_eq!(state, expected_state);
        assert_eq!(expected, "3.14");
    }
}
