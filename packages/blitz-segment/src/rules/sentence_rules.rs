//! Sentence boundary rules (UAX #29, SB3 to SB11)

use once_cell::sync::Lazy;

use super::{invalid_state, state_from_raw, BreakClass, RuleTable, Segmentation};
use crate::error::SegmentResult;
use crate::input::TextInput;
use crate::properties::{sentence_category, SentenceCategory as C};

dense_enum! {
    pub(crate) enum State {
        Any,
        CR,
        ParaSep,
        ATerm,
        Upper,
        Lower,
        /// Upper or Lower, then ATerm
        SB7,
        /// ATerm Close*
        SB8Close,
        /// ATerm Close* Sp*
        SB8Sp,
        STerm,
        /// STerm Close*
        SB8aClose,
        /// STerm Close* Sp*
        SB8aSp,
    }
}

use BreakClass::{Mandatory, Prohibited};

const ENTER: u16 = 9990;

/// States that end in ATerm or STerm followed by optional Close and Sp
const TERMINATED: [State; 7] = [
    State::ATerm,
    State::SB7,
    State::SB8Close,
    State::SB8Sp,
    State::STerm,
    State::SB8aClose,
    State::SB8aSp,
];

fn rules() -> Vec<super::Rule<State, C>> {
    let mut rules = vec![
        // SB3
        (State::CR, C::LF, State::ParaSep, Prohibited, 30),
        // SB4
        (State::Any, C::Sep, State::ParaSep, Prohibited, ENTER),
        (State::Any, C::CR, State::CR, Prohibited, ENTER),
        (State::Any, C::LF, State::ParaSep, Prohibited, ENTER),
        (State::ParaSep, C::Any, State::Any, Mandatory, 40),
        (State::CR, C::Any, State::Any, Mandatory, 40),
        // SB6
        (State::ATerm, C::Numeric, State::Any, Prohibited, 60),
        (State::SB7, C::Numeric, State::Any, Prohibited, 60),
        // SB7
        (State::Any, C::Upper, State::Upper, Prohibited, ENTER),
        (State::Any, C::Lower, State::Lower, Prohibited, ENTER),
        (State::Upper, C::ATerm, State::SB7, Prohibited, 70),
        (State::Lower, C::ATerm, State::SB7, Prohibited, 70),
        (State::SB7, C::Upper, State::Upper, Prohibited, 70),
        // SB8a entries for ATerm and STerm themselves
        (State::Any, C::ATerm, State::ATerm, Prohibited, ENTER),
        (State::Any, C::STerm, State::STerm, Prohibited, ENTER),
        // SB9
        (State::ATerm, C::Close, State::SB8Close, Prohibited, 90),
        (State::SB7, C::Close, State::SB8Close, Prohibited, 90),
        (State::SB8Close, C::Close, State::SB8Close, Prohibited, 90),
        (State::ATerm, C::Sp, State::SB8Sp, Prohibited, 90),
        (State::SB7, C::Sp, State::SB8Sp, Prohibited, 90),
        (State::SB8Close, C::Sp, State::SB8Sp, Prohibited, 90),
        (State::STerm, C::Close, State::SB8aClose, Prohibited, 90),
        (State::SB8aClose, C::Close, State::SB8aClose, Prohibited, 90),
        (State::STerm, C::Sp, State::SB8aSp, Prohibited, 90),
        (State::SB8aClose, C::Sp, State::SB8aSp, Prohibited, 90),
        // SB10
        (State::SB8Sp, C::Sp, State::SB8Sp, Prohibited, 100),
        (State::SB8aSp, C::Sp, State::SB8aSp, Prohibited, 100),
    ];

    for from in TERMINATED {
        // SB9 and SB10: no break before a paragraph separator
        rules.push((from, C::Sep, State::ParaSep, Prohibited, 90));
        rules.push((from, C::LF, State::ParaSep, Prohibited, 90));
        rules.push((from, C::CR, State::CR, Prohibited, 90));
        // SB8a
        rules.push((from, C::SContinue, State::Any, Prohibited, 81));
        rules.push((from, C::ATerm, State::ATerm, Prohibited, 81));
        rules.push((from, C::STerm, State::STerm, Prohibited, 81));
        // SB11
        rules.push((from, C::Any, State::Any, Mandatory, 110));
    }

    rules
}

static RULES: Lazy<RuleTable<State, C>> = Lazy::new(|| {
    // SB998 as the catch-all
    RuleTable::new("sentence", &rules(), Prohibited)
});

/// Sentence boundary segmentation
#[derive(Debug, Clone, Copy)]
pub struct SentenceRules;

/// Opaque carried state of the sentence scanner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SentenceState(pub(crate) State);

impl SentenceState {
    /// Encode as a plain integer for storage between calls
    pub fn to_raw(self) -> i32 {
        self.0 as i32
    }

    /// Decode a value produced by [`SentenceState::to_raw`]
    pub fn from_raw(raw: i32) -> SegmentResult<Option<Self>> {
        if raw > 0xFF {
            return Err(invalid_state(SentenceRules::NAME, raw));
        }
        Ok(state_from_raw(SentenceRules::NAME, raw)?.map(SentenceState))
    }
}

/// SB8: ATerm Close* Sp* × ( ¬(OLetter | Upper | Lower | ParaSep | SATerm) )* Lower
fn lowercase_follows<T: TextInput>(category: C, mut rest: T) -> bool {
    let mut category = category;
    loop {
        match category {
            C::Lower => return true,
            C::OLetter | C::Upper | C::Sep | C::CR | C::LF | C::ATerm | C::STerm => return false,
            _ => {}
        }
        let Some((cp, len)) = rest.decode_first() else {
            return false;
        };
        category = sentence_category(cp);
        rest = rest.tail(len);
    }
}

impl Segmentation for SentenceRules {
    type State = SentenceState;

    const NAME: &'static str = "sentence";

    fn transition<T: TextInput>(
        current: SentenceState,
        cp: char,
        after: T,
    ) -> (SentenceState, BreakClass) {
        let category = sentence_category(cp);
        let state = current.0;

        // SB5, which SB4 still overrides
        if matches!(category, C::Extend | C::Format) {
            return match state {
                State::ParaSep | State::CR => (SentenceState(State::Any), Mandatory),
                _ => (SentenceState(state), Prohibited),
            };
        }

        let t = RULES.resolve(state, category);

        if t.action.is_break()
            && matches!(
                state,
                State::ATerm | State::SB7 | State::SB8Close | State::SB8Sp
            )
            && lowercase_follows(category, after)
        {
            return (SentenceState(State::Lower), Prohibited);
        }

        (SentenceState(t.to), t.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn boundaries(text: &str) -> Vec<usize> {
        let mut state = SentenceState::default();
        let mut found = Vec::new();
        for (index, cp) in text.char_indices() {
            let after = &text[index + cp.len_utf8()..];
            let (next, action) = SentenceRules::transition(state, cp, after);
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
    fn test_two_sentences() {
        let text = "This is sentence 1.0. And this is sentence two.";
        assert_eq!(boundaries(text), vec![22]);
    }

    #[test]
    fn test_question_and_exclamation() {
        assert_eq!(boundaries("Really? Yes! Ok."), vec![8, 13]);
    }

    #[test]
    fn test_abbreviation_followed_by_lowercase() {
        assert_eq!(boundaries("etc. and more"), Vec::<usize>::new());
        assert_eq!(boundaries("He said \"no.\" then left."), Vec::<usize>::new());
    }

    #[test]
    fn test_initials_do_not_break() {
        assert_eq!(boundaries("U.S. Army"), vec![5]);
        assert_eq!(boundaries("U.S.A"), Vec::<usize>::new());
    }

    #[test]
    fn test_paragraph_separators() {
        assert_eq!(boundaries("one\r\ntwo"), vec![5]);
        assert_eq!(boundaries("Stop.\r\nGo."), vec![7]);
        assert_eq!(boundaries("a\u{2029}b"), vec![4]);
    }

    #[test]
    fn test_closing_punctuation_stays_with_sentence() {
        assert_eq!(boundaries("(Done.) Next"), vec![8]);
    }

    #[test]
    fn test_raw_round_trip() {
        let state = SentenceState(State::SB8aSp);
        assert_eq!(SentenceState::from_raw(state.to_raw()), Ok(Some(state)));
        assert!(SentenceState::from_raw(0x7F).is_err());
    }
}
