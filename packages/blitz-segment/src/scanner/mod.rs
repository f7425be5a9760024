//! Resumable segment scanners
//!
//! Each call splits the first segment off the remaining input and returns the
//! state to hand to the next call. Passing `None` starts from scratch. Feeding
//! the returned rest and state back in, call after call, yields the same
//! segments as scanning the whole text eagerly, for every family and for both
//! `&str` and `&[u8]` input.
//!
//! The end of the input is always treated as the end of text: the final
//! segment ends with a mandatory boundary and the returned state is reset.

pub mod grapheme;
pub mod line;
pub mod sentence;
pub mod word;

use crate::input::TextInput;
use crate::rules::{BreakClass, Segmentation};

pub use grapheme::{first_grapheme_cluster, first_grapheme_cluster_in_str, grapheme_cluster_count};
pub use line::{first_line_segment, first_line_segment_in_str};
pub use sentence::{first_sentence, first_sentence_in_str};
pub use word::{first_word, first_word_in_str};

/// Split the first segment of family `R` off `input`
///
/// Returns the segment, the rest, the decision at the end of the segment and
/// the state to resume from. Empty input yields an empty segment with no
/// decision and the initial state.
pub(crate) fn first_segment<R, T>(input: T, state: Option<R::State>) -> (T, T, BreakClass, R::State)
where
    R: Segmentation,
    T: TextInput,
{
    let Some((first, mut length)) = input.decode_first() else {
        return (input, input, BreakClass::Prohibited, R::State::default());
    };

    // Cold start: the first code point still moves the machine (sot is never
    // a boundary, so its decision is dropped).
    let mut state = match state {
        Some(state) => state,
        None => R::transition(R::State::default(), first, input.tail(length)).0,
    };

    loop {
        let (segment, rest) = input.split_at(length);
        let Some((cp, width)) = rest.decode_first() else {
            return (segment, rest, BreakClass::Mandatory, R::State::default());
        };

        let (next, action) = R::transition(state, cp, rest.tail(width));
        state = next;
        if action.is_break() {
            return (segment, rest, action, state);
        }
        length += width;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{GraphemeRules, LineRules};

    #[test]
    fn test_empty_input() {
        let (segment, rest, action, state) = first_segment::<GraphemeRules, _>("", None);
        assert_eq!((segment, rest), ("", ""));
        assert_eq!(action, BreakClass::Prohibited);
        assert_eq!(state, Default::default());
    }

    #[test]
    fn test_final_segment_resets_state() {
        let (segment, rest, action, state) = first_segment::<LineRules, _>("end", None);
        assert_eq!((segment, rest), ("end", ""));
        assert_eq!(action, BreakClass::Mandatory);
        assert_eq!(state, Default::default());
    }

    #[test]
    fn test_resume_across_calls() {
        let mut rest = "ab cd";
        let mut state = None;
        let mut segments = Vec::new();
        while !rest.is_empty() {
            let (segment, next, _, next_state) = first_segment::<LineRules, _>(rest, state);
            segments.push(segment);
            rest = next;
            state = Some(next_state);
        }
        assert_eq!(segments, vec!["ab ", "cd"]);
    }
}
