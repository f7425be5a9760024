//! Word boundary rules (UAX #29, WB3 to WB16)
//!
//! WB4 (ignore Extend, Format and ZWJ) and WB3c (ZWJ × pictograph) are
//! handled ahead of the table, since they keep the previous state alive. The
//! rules that look past the next letter (WB6, WB7b, WB12) run after it.

use once_cell::sync::Lazy;

use super::{invalid_state, state_from_raw, BreakClass, RuleTable, Segmentation};
use crate::error::SegmentResult;
use crate::input::TextInput;
use crate::properties::{word_category, WordCategory as C};

dense_enum! {
    pub(crate) enum State {
        Any,
        CR,
        LF,
        Newline,
        WSegSpace,
        HebrewLetter,
        ALetter,
        /// Letter, then a mid-word separator with a letter ahead
        WB7,
        /// Hebrew letter, then a double quote with a Hebrew letter ahead
        WB7c,
        Numeric,
        /// Number, then a mid-number separator with a digit ahead
        WB11,
        Katakana,
        ExtendNumLet,
        OddRI,
        EvenRI,
    }
}

use BreakClass::{Mandatory, Prohibited};

const ENTER: u16 = 9990;

static RULES: Lazy<RuleTable<State, C>> = Lazy::new(|| {
    RuleTable::new(
        "word",
        &[
            // WB3b
            (State::Any, C::Newline, State::Newline, Mandatory, 32),
            (State::Any, C::CR, State::CR, Mandatory, 32),
            (State::Any, C::LF, State::LF, Mandatory, 32),
            // WB3a
            (State::Newline, C::Any, State::Any, Mandatory, 31),
            (State::CR, C::Any, State::Any, Mandatory, 31),
            (State::LF, C::Any, State::Any, Mandatory, 31),
            // WB3
            (State::CR, C::LF, State::LF, Prohibited, 30),
            // WB3d
            (State::Any, C::WSegSpace, State::WSegSpace, Mandatory, ENTER),
            (State::WSegSpace, C::WSegSpace, State::WSegSpace, Prohibited, 34),
            // WB5
            (State::Any, C::ALetter, State::ALetter, Mandatory, ENTER),
            (State::Any, C::HebrewLetter, State::HebrewLetter, Mandatory, ENTER),
            (State::ALetter, C::ALetter, State::ALetter, Prohibited, 50),
            (State::ALetter, C::HebrewLetter, State::HebrewLetter, Prohibited, 50),
            (State::HebrewLetter, C::ALetter, State::ALetter, Prohibited, 50),
            (State::HebrewLetter, C::HebrewLetter, State::HebrewLetter, Prohibited, 50),
            // WB7
            (State::WB7, C::ALetter, State::ALetter, Prohibited, 70),
            (State::WB7, C::HebrewLetter, State::HebrewLetter, Prohibited, 70),
            // WB7a
            (State::HebrewLetter, C::SingleQuote, State::Any, Prohibited, 71),
            // WB7c
            (State::WB7c, C::HebrewLetter, State::HebrewLetter, Prohibited, 73),
            // WB8
            (State::Any, C::Numeric, State::Numeric, Mandatory, ENTER),
            (State::Numeric, C::Numeric, State::Numeric, Prohibited, 80),
            // WB9
            (State::ALetter, C::Numeric, State::Numeric, Prohibited, 90),
            (State::HebrewLetter, C::Numeric, State::Numeric, Prohibited, 90),
            // WB10
            (State::Numeric, C::ALetter, State::ALetter, Prohibited, 100),
            (State::Numeric, C::HebrewLetter, State::HebrewLetter, Prohibited, 100),
            // WB11
            (State::WB11, C::Numeric, State::Numeric, Prohibited, 110),
            // WB13
            (State::Any, C::Katakana, State::Katakana, Mandatory, ENTER),
            (State::Katakana, C::Katakana, State::Katakana, Prohibited, 130),
            // WB13a
            (State::Any, C::ExtendNumLet, State::ExtendNumLet, Mandatory, ENTER),
            (State::ALetter, C::ExtendNumLet, State::ExtendNumLet, Prohibited, 131),
            (State::HebrewLetter, C::ExtendNumLet, State::ExtendNumLet, Prohibited, 131),
            (State::Numeric, C::ExtendNumLet, State::ExtendNumLet, Prohibited, 131),
            (State::Katakana, C::ExtendNumLet, State::ExtendNumLet, Prohibited, 131),
            (State::ExtendNumLet, C::ExtendNumLet, State::ExtendNumLet, Prohibited, 131),
            // WB13b
            (State::ExtendNumLet, C::ALetter, State::ALetter, Prohibited, 132),
            (State::ExtendNumLet, C::HebrewLetter, State::HebrewLetter, Prohibited, 132),
            (State::ExtendNumLet, C::Numeric, State::Numeric, Prohibited, 132),
            (State::ExtendNumLet, C::Katakana, State::Katakana, Prohibited, 132),
            // WB15, WB16
            (State::Any, C::RegionalIndicator, State::OddRI, Mandatory, ENTER),
            (State::OddRI, C::RegionalIndicator, State::EvenRI, Prohibited, 150),
            (State::EvenRI, C::RegionalIndicator, State::OddRI, Mandatory, 150),
        ],
        // WB999
        Mandatory,
    )
});

/// Bit marking "the previous code point was a ZWJ" in raw states
const ZWJ_BIT: i32 = 1 << 8;

/// Word boundary segmentation
#[derive(Debug, Clone, Copy)]
pub struct WordRules;

/// Opaque carried state of the word scanner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct WordState {
    state: State,
    after_zwj: bool,
}

impl WordState {
    fn new(state: State) -> Self {
        Self {
            state,
            after_zwj: false,
        }
    }

    fn joined(state: State) -> Self {
        Self {
            state,
            after_zwj: true,
        }
    }

    /// Encode as a plain integer for storage between calls
    pub fn to_raw(self) -> i32 {
        let zwj = if self.after_zwj { ZWJ_BIT } else { 0 };
        self.state as i32 | zwj
    }

    /// Decode a value produced by [`WordState::to_raw`]
    pub fn from_raw(raw: i32) -> SegmentResult<Option<Self>> {
        if raw >= 0 && raw & !(0xFF | ZWJ_BIT) != 0 {
            return Err(invalid_state(WordRules::NAME, raw));
        }
        Ok(state_from_raw(WordRules::NAME, raw)?.map(|state| Self {
            state,
            after_zwj: raw & ZWJ_BIT != 0,
        }))
    }
}

#[inline]
fn is_newline(state: State) -> bool {
    matches!(state, State::CR | State::LF | State::Newline)
}

#[inline]
fn is_ignorable(category: C) -> bool {
    matches!(category, C::Extend | C::Format | C::ZWJ)
}

#[inline]
fn is_letter(category: C) -> bool {
    matches!(category, C::ALetter | C::HebrewLetter)
}

/// Category of the next code point that WB4 does not absorb
fn next_significant<T: TextInput>(mut rest: T) -> Option<C> {
    while let Some((cp, len)) = rest.decode_first() {
        let category = word_category(cp);
        if !is_ignorable(category) {
            return Some(category);
        }
        rest = rest.tail(len);
    }
    None
}

impl Segmentation for WordRules {
    type State = WordState;

    const NAME: &'static str = "word";

    fn transition<T: TextInput>(current: WordState, cp: char, after: T) -> (WordState, BreakClass) {
        let category = word_category(cp);
        let state = current.state;

        // WB3c
        if current.after_zwj && category == C::ExtendedPictographic {
            return (WordState::new(State::Any), Prohibited);
        }

        // WB4, which WB3a and WB3d still override
        match category {
            C::ZWJ if is_newline(state) => return (WordState::joined(State::Any), Mandatory),
            C::ZWJ if state == State::WSegSpace => {
                return (WordState::joined(State::Any), Prohibited)
            }
            C::ZWJ => return (WordState::joined(state), Prohibited),
            C::Extend | C::Format if is_newline(state) => {
                return (WordState::new(State::Any), Mandatory)
            }
            C::Extend | C::Format if state == State::WSegSpace => {
                return (WordState::new(State::Any), Prohibited)
            }
            C::Extend | C::Format => return (WordState::new(state), Prohibited),
            _ => {}
        }

        let t = RULES.resolve(state, category);
        let (mut next, mut action) = (t.to, t.action);

        if action.is_break() {
            match (state, category) {
                // WB6
                (
                    State::ALetter | State::HebrewLetter,
                    C::MidLetter | C::MidNumLet | C::SingleQuote,
                ) if next_significant(after).is_some_and(is_letter) => {
                    next = State::WB7;
                    action = Prohibited;
                }
                // WB7b
                (State::HebrewLetter, C::DoubleQuote)
                    if next_significant(after) == Some(C::HebrewLetter) =>
                {
                    next = State::WB7c;
                    action = Prohibited;
                }
                // WB12
                (State::Numeric, C::MidNum | C::MidNumLet | C::SingleQuote)
                    if next_significant(after) == Some(C::Numeric) =>
                {
                    next = State::WB11;
                    action = Prohibited;
                }
                _ => {}
            }
        } else if state == State::HebrewLetter
            && category == C::SingleQuote
            && next_significant(after).is_some_and(is_letter)
        {
            // WB6 outranks WB7a: keep the word open for WB7
            next = State::WB7;
        }

        (WordState::new(next), action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundaries(text: &str) -> Vec<usize> {
        let mut state = WordState::default();
        let mut found = Vec::new();
        for (index, cp) in text.char_indices() {
            let after = &text[index + cp.len_utf8()..];
            let (next, action) = WordRules::transition(state, cp, after);
            state = next;
            if index > 0 && action.is_break() {
                found.push(index);
            }
        }
        found
    }

    #[test]
    fn test_every_pair_resolves() {
        crate::rules::assert_total(&*RULES, State::ALL, C::ALL);
    }

    #[test]
    fn test_words_and_punctuation() {
        // Hello|,| |world|!
        assert_eq!(boundaries("Hello, world!"), vec![5, 6, 7, 12]);
    }

    #[test]
    fn test_mid_letter_needs_letter_on_both_sides() {
        assert_eq!(boundaries("can't"), Vec::<usize>::new());
        assert_eq!(boundaries("can'"), vec![3]);
        assert_eq!(boundaries("a.b"), Vec::<usize>::new());
    }

    #[test]
    fn test_numbers_with_separators() {
        assert_eq!(boundaries("3.14"), Vec::<usize>::new());
        assert_eq!(boundaries("1,000,000"), Vec::<usize>::new());
        assert_eq!(boundaries("3."), vec![1]);
        assert_eq!(boundaries("a1b2"), Vec::<usize>::new());
    }

    #[test]
    fn test_extend_is_transparent() {
        // e + combining acute, then apostrophe and a letter
        assert_eq!(boundaries("e\u{301}'s"), Vec::<usize>::new());
        // Extend after a newline does not attach
        assert_eq!(boundaries("\n\u{301}"), vec![1]);
    }

    #[test]
    fn test_horizontal_whitespace_runs() {
        assert_eq!(boundaries("a   b"), vec![1, 4]);
    }

    #[test]
    fn test_crlf_and_zwj_emoji() {
        assert_eq!(boundaries("a\r\nb"), vec![1, 3]);
        // ZWJ sequence of two pictographs stays together
        assert_eq!(boundaries("\u{1F469}\u{200D}\u{1F4BB}"), Vec::<usize>::new());
    }

    #[test]
    fn test_regional_indicator_pairs() {
        let flags = "\u{1F1E6}\u{1F1E8}\u{1F1E9}";
        assert_eq!(boundaries(flags), vec![8]);
    }

    #[test]
    fn test_raw_state_flags() {
        let state = WordState::joined(State::ALetter);
        assert_eq!(WordState::from_raw(state.to_raw()), Ok(Some(state)));
        assert!(WordState::from_raw(0x200).is_err());
        assert!(WordState::from_raw(0xFF).is_err());
    }
}
