//! Sentence boundary scanning

use super::first_segment;
use crate::rules::{SentenceRules, SentenceState};

/// Split the first sentence off a byte buffer
///
/// Trailing spaces and paragraph separators stay with the sentence they
/// follow.
pub fn first_sentence(
    input: &[u8],
    state: Option<SentenceState>,
) -> (&[u8], &[u8], SentenceState) {
    let (sentence, rest, _, state) = first_segment::<SentenceRules, _>(input, state);
    (sentence, rest, state)
}

/// Split the first sentence off a string
pub fn first_sentence_in_str(
    input: &str,
    state: Option<SentenceState>,
) -> (&str, &str, SentenceState) {
    let (sentence, rest, _, state) = first_segment::<SentenceRules, _>(input, state);
    (sentence, rest, state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sentences() {
        let text = "This is sentence 1.0. And this is sentence two.";
        let (first, rest, state) = first_sentence_in_str(text, None);
        assert_eq!(first, "This is sentence 1.0. ");
        let (second, rest, _) = first_sentence_in_str(rest, Some(state));
        assert_eq!(second, "And this is sentence two.");
        assert!(rest.is_empty());
    }

    #[test]
    fn test_bytes_match_str() {
        let text = "Wait?! Yes.";
        let (sentence, rest, state) = first_sentence(text.as_bytes(), None);
        let (expected, expected_rest, expected_state) = first_sentence_in_str(text, None);
        assert_eq!(sentence, expected.as_bytes());
        assert_eq!(rest, expected_rest.as_bytes());
        assert_eq!(state, expected_state);
        assert_eq!(expected, "Wait?! ");
    }
}
