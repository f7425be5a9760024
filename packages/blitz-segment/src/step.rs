//! Combined single-pass segmentation
//!
//! [`step`] advances by one grapheme cluster while feeding every code point
//! to the word, sentence and line machines as well, so a caller laying out
//! text needs only one pass to learn all boundaries and the cluster's width.
//! Boundaries that other families place inside a grapheme cluster are not
//! reported.

use crate::config::WidthConfig;
use crate::input::TextInput;
use crate::rules::{
    BreakClass, GraphemeRules, GraphemeState, LineRules, LineState, Segmentation, SentenceRules,
    SentenceState, WordRules, WordState,
};
use crate::width::width_of;

/// Carried state of all four machines
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StepState {
    pub grapheme: GraphemeState,
    pub word: WordState,
    pub sentence: SentenceState,
    pub line: LineState,
}

impl StepState {
    fn advance<T: TextInput>(self, cp: char, after: T) -> (Self, Decisions) {
        let (grapheme, grapheme_action) = GraphemeRules::transition(self.grapheme, cp, after);
        let (word, word_action) = WordRules::transition(self.word, cp, after);
        let (sentence, sentence_action) = SentenceRules::transition(self.sentence, cp, after);
        let (line, line_action) = LineRules::transition(self.line, cp, after);
        (
            Self {
                grapheme,
                word,
                sentence,
                line,
            },
            Decisions {
                grapheme: grapheme_action,
                word: word_action,
                sentence: sentence_action,
                line: line_action,
            },
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct Decisions {
    grapheme: BreakClass,
    word: BreakClass,
    sentence: BreakClass,
    line: BreakClass,
}

/// Boundaries after a cluster returned by [`step`], plus its width
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Boundaries {
    line: BreakClass,
    word: bool,
    sentence: bool,
    width: usize,
}

impl Boundaries {
    fn end_of_text(width: usize) -> Self {
        Self {
            line: BreakClass::Mandatory,
            word: true,
            sentence: true,
            width,
        }
    }

    /// Line break opportunity after the cluster
    #[inline]
    pub fn line_break(&self) -> BreakClass {
        self.line
    }

    #[inline]
    pub fn is_word_boundary(&self) -> bool {
        self.word
    }

    #[inline]
    pub fn is_sentence_boundary(&self) -> bool {
        self.sentence
    }

    /// Monospace width of the cluster
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
}

fn step_input<T: TextInput>(
    input: T,
    state: Option<StepState>,
    config: &WidthConfig,
) -> (T, T, Boundaries, StepState) {
    let Some((first, mut length)) = input.decode_first() else {
        return (input, input, Boundaries::default(), StepState::default());
    };

    let mut state = match state {
        Some(state) => state,
        None => StepState::default().advance(first, input.tail(length)).0,
    };

    loop {
        let (cluster, rest) = input.split_at(length);
        let Some((cp, size)) = rest.decode_first() else {
            let width = cluster_width_of(cluster, config);
            return (cluster, rest, Boundaries::end_of_text(width), StepState::default());
        };

        let (next, decisions) = state.advance(cp, rest.tail(size));
        state = next;
        if decisions.grapheme.is_break() {
            let boundaries = Boundaries {
                line: decisions.line,
                word: decisions.word.is_break(),
                sentence: decisions.sentence.is_break(),
                width: cluster_width_of(cluster, config),
            };
            return (cluster, rest, boundaries, state);
        }
        length += size;
    }
}

fn cluster_width_of<T: TextInput>(cluster: T, config: &WidthConfig) -> usize {
    let mut rest = cluster;
    width_of(
        std::iter::from_fn(|| {
            let (cp, size) = rest.decode_first()?;
            rest = rest.tail(size);
            Some(cp)
        }),
        config,
    )
}

/// Split the first grapheme cluster off a byte buffer and report every
/// boundary after it
pub fn step(input: &[u8], state: Option<StepState>) -> (&[u8], &[u8], Boundaries, StepState) {
    step_input(input, state, &WidthConfig::default())
}

/// Split the first grapheme cluster off a string and report every boundary
/// after it
///
/// ```
/// use blitz_segment::{step_str, BreakClass};
///
/// let (cluster, rest, boundaries, _) = step_str("a b", None);
/// assert_eq!((cluster, rest), ("a", " b"));
/// assert!(boundaries.is_word_boundary());
/// assert_eq!(boundaries.line_break(), BreakClass::Prohibited);
/// assert_eq!(boundaries.width(), 1);
/// ```
pub fn step_str(input: &str, state: Option<StepState>) -> (&str, &str, Boundaries, StepState) {
    step_input(input, state, &WidthConfig::default())
}

/// [`step`] with an explicit width configuration
pub fn step_with<'a>(
    input: &'a [u8],
    state: Option<StepState>,
    config: &WidthConfig,
) -> (&'a [u8], &'a [u8], Boundaries, StepState) {
    step_input(input, state, config)
}

/// [`step_str`] with an explicit width configuration
pub fn step_str_with<'a>(
    input: &'a str,
    state: Option<StepState>,
    config: &WidthConfig,
) -> (&'a str, &'a str, Boundaries, StepState) {
    step_input(input, state, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_steps(text: &str) -> Vec<(&str, Boundaries)> {
        let mut rest = text;
        let mut state = None;
        let mut found = Vec::new();
        while !rest.is_empty() {
            let (cluster, next, boundaries, next_state) = step_str(rest, state);
            found.push((cluster, boundaries));
            rest = next;
            state = Some(next_state);
        }
        found
    }

    #[test]
    fn test_line_break_after_space() {
        let steps = all_steps("ab cd");
        let clusters: Vec<&str> = steps.iter().map(|(c, _)| *c).collect();
        assert_eq!(clusters, vec!["a", "b", " ", "c", "d"]);
        assert_eq!(steps[1].1.line_break(), BreakClass::Prohibited);
        assert_eq!(steps[2].1.line_break(), BreakClass::Allowed);
        assert!(steps[1].1.is_word_boundary());
        assert!(!steps[0].1.is_word_boundary());
        assert_eq!(steps[4].1.line_break(), BreakClass::Mandatory);
    }

    #[test]
    fn test_sentence_boundary_and_widths() {
        let steps = all_steps("Hi. \u{4E2D}");
        let widths: Vec<usize> = steps.iter().map(|(_, b)| b.width()).collect();
        assert_eq!(widths, vec![1, 1, 1, 1, 2]);
        assert!(steps[3].1.is_sentence_boundary());
        assert!(!steps[2].1.is_sentence_boundary());
        assert!(steps[4].1.is_sentence_boundary());
    }

    #[test]
    fn test_boundaries_inside_clusters_are_hidden() {
        // CR LF is one cluster; the mandatory line break comes after it
        let steps = all_steps("a\r\nb");
        assert_eq!(steps[1].0, "\r\n");
        assert_eq!(steps[1].1.line_break(), BreakClass::Mandatory);
        assert_eq!(steps[1].1.width(), 0);
    }

    #[test]
    fn test_empty_input() {
        let (cluster, rest, boundaries, state) = step(b"", None);
        assert!(cluster.is_empty() && rest.is_empty());
        assert_eq!(boundaries, Boundaries::default());
        assert_eq!(state, StepState::default());
    }

    #[test]
    fn test_wide_ambiguous_config() {
        let config = WidthConfig::new(2).unwrap();
        let (_, _, boundaries, _) = step_str_with("\u{00A1}", None, &config);
        assert_eq!(boundaries.width(), 2);
    }
}
