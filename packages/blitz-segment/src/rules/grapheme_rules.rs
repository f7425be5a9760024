//! Extended grapheme cluster rules (UAX #29, GB3 to GB13)

use once_cell::sync::Lazy;

use super::{invalid_state, state_from_raw, BreakClass, RuleTable, Segmentation};
use crate::error::SegmentResult;
use crate::input::TextInput;
use crate::properties::{grapheme_category, GraphemeCategory as C};

dense_enum! {
    pub(crate) enum State {
        Any,
        CR,
        ControlLF,
        L,
        LVV,
        LVTT,
        Prepend,
        ExtendedPictographic,
        ExtendedPictographicZWJ,
        RIOdd,
        RIEven,
    }
}

use BreakClass::{Mandatory, Prohibited};

/// Priority for entering a state from the wildcard, outranked by every rule
const ENTER: u16 = 9990;

static RULES: Lazy<RuleTable<State, C>> = Lazy::new(|| {
    RuleTable::new(
        "grapheme",
        &[
            // GB5
            (State::Any, C::CR, State::CR, Mandatory, 50),
            (State::Any, C::LF, State::ControlLF, Mandatory, 50),
            (State::Any, C::Control, State::ControlLF, Mandatory, 50),
            // GB4
            (State::CR, C::Any, State::Any, Mandatory, 40),
            (State::ControlLF, C::Any, State::Any, Mandatory, 40),
            // GB3
            (State::CR, C::LF, State::ControlLF, Prohibited, 30),
            // GB6
            (State::Any, C::L, State::L, Mandatory, ENTER),
            (State::L, C::L, State::L, Prohibited, 60),
            (State::L, C::V, State::LVV, Prohibited, 60),
            (State::L, C::LV, State::LVV, Prohibited, 60),
            (State::L, C::LVT, State::LVTT, Prohibited, 60),
            // GB7
            (State::Any, C::LV, State::LVV, Mandatory, ENTER),
            (State::Any, C::V, State::LVV, Mandatory, ENTER),
            (State::LVV, C::V, State::LVV, Prohibited, 70),
            (State::LVV, C::T, State::LVTT, Prohibited, 70),
            // GB8
            (State::Any, C::LVT, State::LVTT, Mandatory, ENTER),
            (State::Any, C::T, State::LVTT, Mandatory, ENTER),
            (State::LVTT, C::T, State::LVTT, Prohibited, 80),
            // GB9
            (State::Any, C::Extend, State::Any, Prohibited, 90),
            (State::Any, C::ZWJ, State::Any, Prohibited, 90),
            // GB9a
            (State::Any, C::SpacingMark, State::Any, Prohibited, 91),
            // GB9b
            (State::Any, C::Prepend, State::Prepend, Mandatory, ENTER),
            (State::Prepend, C::Any, State::Any, Prohibited, 92),
            // GB11
            (
                State::Any,
                C::ExtendedPictographic,
                State::ExtendedPictographic,
                Mandatory,
                ENTER,
            ),
            (
                State::ExtendedPictographic,
                C::Extend,
                State::ExtendedPictographic,
                Prohibited,
                110,
            ),
            (
                State::ExtendedPictographic,
                C::ZWJ,
                State::ExtendedPictographicZWJ,
                Prohibited,
                110,
            ),
            (
                State::ExtendedPictographicZWJ,
                C::ExtendedPictographic,
                State::ExtendedPictographic,
                Prohibited,
                110,
            ),
            // GB12, GB13
            (State::Any, C::RegionalIndicator, State::RIOdd, Mandatory, ENTER),
            (State::RIOdd, C::RegionalIndicator, State::RIEven, Prohibited, 120),
            (State::RIEven, C::RegionalIndicator, State::RIOdd, Mandatory, 120),
        ],
        // GB999
        Mandatory,
    )
});

/// Grapheme cluster segmentation
#[derive(Debug, Clone, Copy)]
pub struct GraphemeRules;

/// Opaque carried state of the grapheme scanner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct GraphemeState(pub(crate) State);

impl GraphemeState {
    /// Encode as a plain integer for storage between calls
    pub fn to_raw(self) -> i32 {
        self.0 as i32
    }

    /// Decode a value produced by [`GraphemeState::to_raw`]
    ///
    /// Negative values decode to `None`, the "no state yet" marker.
    pub fn from_raw(raw: i32) -> SegmentResult<Option<Self>> {
        if raw > 0xFF {
            return Err(invalid_state(GraphemeRules::NAME, raw));
        }
        Ok(state_from_raw(GraphemeRules::NAME, raw)?.map(GraphemeState))
    }
}

impl Segmentation for GraphemeRules {
    type State = GraphemeState;

    const NAME: &'static str = "grapheme";

    #[inline]
    fn transition<T: TextInput>(
        state: GraphemeState,
        cp: char,
        _after: T,
    ) -> (GraphemeState, BreakClass) {
        let t = RULES.resolve(state.0, grapheme_category(cp));
        (GraphemeState(t.to), t.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::Dense;

    fn run(text: &str) -> Vec<BreakClass> {
        let mut state = GraphemeState::default();
        text.chars()
            .map(|cp| {
                let (next, action) = GraphemeRules::transition(state, cp, "");
                state = next;
                action
            })
            .collect()
    }

    #[test]
    fn test_every_pair_resolves() {
        crate::rules::assert_total(&*RULES, State::ALL, C::ALL);
    }

    #[test]
    fn test_crlf_is_one_cluster() {
        assert_eq!(
            run("a\r\nb"),
            vec![Mandatory, Mandatory, Prohibited, Mandatory]
        );
    }

    #[test]
    fn test_hangul_syllable_sequences() {
        // L V T jamo compose into one cluster
        assert_eq!(
            run("\u{1100}\u{1161}\u{11A8}"),
            vec![Mandatory, Prohibited, Prohibited]
        );
        // LV followed by L starts a new cluster
        assert_eq!(run("\u{AC00}\u{1100}"), vec![Mandatory, Mandatory]);
    }

    #[test]
    fn test_prepend_attaches_forward() {
        assert_eq!(run("\u{0600}a"), vec![Mandatory, Prohibited]);
        assert_eq!(run("\u{0600}\r"), vec![Mandatory, Mandatory]);
    }

    #[test]
    fn test_emoji_zwj_sequence() {
        // woman, ZWJ, laptop
        assert_eq!(
            run("\u{1F469}\u{200D}\u{1F4BB}"),
            vec![Mandatory, Prohibited, Prohibited]
        );
        // ZWJ after a letter does not glue the following pictograph
        assert_eq!(
            run("a\u{200D}\u{1F4BB}"),
            vec![Mandatory, Prohibited, Mandatory]
        );
    }

    #[test]
    fn test_regional_indicator_pairs() {
        assert_eq!(
            run("\u{1F1F3}\u{1F1F1}\u{1F1E7}"),
            vec![Mandatory, Prohibited, Mandatory]
        );
    }

    #[test]
    fn test_raw_round_trip_and_rejection() {
        let state = GraphemeState(State::RIOdd);
        assert_eq!(GraphemeState::from_raw(state.to_raw()), Ok(Some(state)));
        assert_eq!(GraphemeState::from_raw(-1), Ok(None));
        assert!(GraphemeState::from_raw(State::COUNT as i32).is_err());
        assert!(GraphemeState::from_raw(0x100).is_err());
    }
}
