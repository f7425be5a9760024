//! UAX #14 line breaking rules (LB4 to LB31)
//!
//! The pair table carries the classic pair rules plus the regular
//! expression rules that only need one code point of history (LB14 to LB17,
//! LB21a, LB25). Around the lookup:
//! - LB9 and LB10 attach combining marks before the table is consulted,
//! - LB8a, LB30 and LB30b read flags carried from the previous code point,
//! - LB12a, LB15a, LB15b and the OP/HY prefixes of LB25 are applied
//!   afterwards, the last two with lookahead past the current code point.
//!
//! Rule priorities are the rule number times ten, so an override can tell
//! whether an earlier rule already decided the position.

use bitflags::bitflags;
use once_cell::sync::Lazy;

use super::{invalid_state, state_from_raw, BreakClass, Rule, RuleTable, Segmentation};
use crate::error::SegmentResult;
use crate::input::TextInput;
use crate::properties::{line_property, LineClass as C, LineProperty};

dense_enum! {
    pub(crate) enum State {
        Any,
        BK,
        CR,
        LF,
        NL,
        SP,
        ZW,
        WJ,
        GL,
        BA,
        HY,
        CL,
        CP,
        EX,
        IN,
        NS,
        OP,
        QU,
        IS,
        NU,
        PO,
        PR,
        SY,
        AL,
        HL,
        ID,
        EB,
        EM,
        H2,
        H3,
        JL,
        JV,
        JT,
        B2,
        BB,
        CB,
        RIOdd,
        RIEven,
        /// ZW SP*
        ZWSP,
        /// OP SP*
        OPSP,
        /// Initial quotation mark in an opening context
        QUPi,
        /// QUPi SP*
        QUPiSP,
        /// (CL | CP) SP*
        CLCPSP,
        /// B2 SP*
        B2SP,
        /// HL (HY | BA)
        HLHYBA,
        /// NU (NU | SY | IS)* SY
        NUSY,
        /// NU (NU | SY | IS)* IS
        NUIS,
        /// NU (NU | SY | IS)* CL
        NUCL,
        /// NU (NU | SY | IS)* CP
        NUCP,
    }
}

use BreakClass::{Allowed, Mandatory, Prohibited};
use State as S;

bitflags! {
    /// Facts about the previous code point that the pair table cannot hold
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    struct Carry: u8 {
        /// Previous code point was a ZWJ (LB8a)
        const ZWJ = 1 << 0;
        /// Previous code point closed a non-East-Asian parenthesis (LB30)
        const NARROW_CP = 1 << 1;
        /// Previous code point is an unassigned pictograph (LB30b)
        const UNASSIGNED_PICTOGRAPHIC = 1 << 2;
    }
}

/// Decision of LB31, also used when entering a state from the wildcard
const LB31: u16 = 310;

fn rules() -> Vec<Rule<S, C>> {
    let mut rules: Vec<Rule<S, C>> = vec![
        // LB4
        (S::BK, C::Any, S::Any, Mandatory, 40),
        // LB5
        (S::CR, C::LF, S::LF, Prohibited, 50),
        (S::CR, C::Any, S::Any, Mandatory, 50),
        (S::LF, C::Any, S::Any, Mandatory, 50),
        (S::NL, C::Any, S::Any, Mandatory, 50),
        // LB6
        (S::Any, C::BK, S::BK, Prohibited, 60),
        (S::Any, C::CR, S::CR, Prohibited, 60),
        (S::Any, C::LF, S::LF, Prohibited, 60),
        (S::Any, C::NL, S::NL, Prohibited, 60),
        // LB7
        (S::Any, C::SP, S::SP, Prohibited, 70),
        (S::Any, C::ZW, S::ZW, Prohibited, 70),
        // LB8
        (S::ZW, C::SP, S::ZWSP, Prohibited, 80),
        (S::ZWSP, C::SP, S::ZWSP, Prohibited, 80),
        (S::ZW, C::Any, S::Any, Allowed, 80),
        (S::ZWSP, C::Any, S::Any, Allowed, 80),
        // LB11
        (S::Any, C::WJ, S::WJ, Prohibited, 110),
        (S::WJ, C::Any, S::Any, Prohibited, 110),
        // LB12
        (S::GL, C::Any, S::Any, Prohibited, 120),
        // LB13
        (S::Any, C::CL, S::CL, Prohibited, 130),
        (S::Any, C::CP, S::CP, Prohibited, 130),
        (S::Any, C::EX, S::EX, Prohibited, 130),
        (S::Any, C::IS, S::IS, Prohibited, 130),
        (S::Any, C::SY, S::SY, Prohibited, 130),
        // LB14
        (S::OP, C::SP, S::OPSP, Prohibited, 140),
        (S::OPSP, C::SP, S::OPSP, Prohibited, 140),
        (S::OP, C::Any, S::Any, Prohibited, 140),
        (S::OPSP, C::Any, S::Any, Prohibited, 140),
        // LB15a
        (S::QUPi, C::SP, S::QUPiSP, Prohibited, 151),
        (S::QUPiSP, C::SP, S::QUPiSP, Prohibited, 151),
        (S::QUPi, C::Any, S::Any, Prohibited, 151),
        (S::QUPiSP, C::Any, S::Any, Prohibited, 151),
        // LB16
        (S::CL, C::SP, S::CLCPSP, Prohibited, 160),
        (S::CP, C::SP, S::CLCPSP, Prohibited, 160),
        (S::NUCL, C::SP, S::CLCPSP, Prohibited, 160),
        (S::NUCP, C::SP, S::CLCPSP, Prohibited, 160),
        (S::CLCPSP, C::SP, S::CLCPSP, Prohibited, 160),
        (S::CL, C::NS, S::NS, Prohibited, 160),
        (S::CP, C::NS, S::NS, Prohibited, 160),
        (S::NUCL, C::NS, S::NS, Prohibited, 160),
        (S::NUCP, C::NS, S::NS, Prohibited, 160),
        (S::CLCPSP, C::NS, S::NS, Prohibited, 160),
        // LB17
        (S::B2, C::SP, S::B2SP, Prohibited, 170),
        (S::B2SP, C::SP, S::B2SP, Prohibited, 170),
        (S::B2, C::B2, S::B2, Prohibited, 170),
        (S::B2SP, C::B2, S::B2, Prohibited, 170),
        // LB18
        (S::SP, C::Any, S::Any, Allowed, 180),
        (S::CLCPSP, C::Any, S::Any, Allowed, 180),
        (S::B2SP, C::Any, S::Any, Allowed, 180),
        // LB19
        (S::Any, C::QU, S::QU, Prohibited, 190),
        (S::QU, C::Any, S::Any, Prohibited, 190),
        // LB20
        (S::Any, C::CB, S::CB, Allowed, 200),
        (S::CB, C::Any, S::Any, Allowed, 200),
        // LB21
        (S::Any, C::BA, S::BA, Prohibited, 210),
        (S::Any, C::HY, S::HY, Prohibited, 210),
        (S::Any, C::NS, S::NS, Prohibited, 210),
        (S::BB, C::Any, S::Any, Prohibited, 210),
        // LB21a
        (S::HL, C::HY, S::HLHYBA, Prohibited, 211),
        (S::HL, C::BA, S::HLHYBA, Prohibited, 211),
        (S::HLHYBA, C::Any, S::Any, Prohibited, 211),
        // LB21b
        (S::SY, C::HL, S::HL, Prohibited, 212),
        (S::NUSY, C::HL, S::HL, Prohibited, 212),
        // LB22
        (S::Any, C::IN, S::IN, Prohibited, 220),
        // LB23
        (S::AL, C::NU, S::NU, Prohibited, 230),
        (S::HL, C::NU, S::NU, Prohibited, 230),
        (S::NU, C::AL, S::AL, Prohibited, 230),
        (S::NU, C::HL, S::HL, Prohibited, 230),
        // LB23a
        (S::PR, C::ID, S::ID, Prohibited, 231),
        (S::PR, C::EB, S::EB, Prohibited, 231),
        (S::PR, C::EM, S::EM, Prohibited, 231),
        (S::ID, C::PO, S::PO, Prohibited, 231),
        (S::EB, C::PO, S::PO, Prohibited, 231),
        (S::EM, C::PO, S::PO, Prohibited, 231),
        // LB24
        (S::PR, C::AL, S::AL, Prohibited, 240),
        (S::PR, C::HL, S::HL, Prohibited, 240),
        (S::PO, C::AL, S::AL, Prohibited, 240),
        (S::PO, C::HL, S::HL, Prohibited, 240),
        (S::AL, C::PR, S::PR, Prohibited, 240),
        (S::AL, C::PO, S::PO, Prohibited, 240),
        (S::HL, C::PR, S::PR, Prohibited, 240),
        (S::HL, C::PO, S::PO, Prohibited, 240),
        // LB25
        (S::PR, C::NU, S::NU, Prohibited, 250),
        (S::PO, C::NU, S::NU, Prohibited, 250),
        (S::OP, C::NU, S::NU, Prohibited, 250),
        (S::HY, C::NU, S::NU, Prohibited, 250),
        (S::IS, C::NU, S::NU, Prohibited, 250),
        (S::NUCL, C::PO, S::PO, Prohibited, 250),
        (S::NUCL, C::PR, S::PR, Prohibited, 250),
        (S::NUCP, C::PO, S::PO, Prohibited, 250),
        (S::NUCP, C::PR, S::PR, Prohibited, 250),
        // LB28
        (S::AL, C::AL, S::AL, Prohibited, 280),
        (S::AL, C::HL, S::HL, Prohibited, 280),
        (S::HL, C::AL, S::AL, Prohibited, 280),
        (S::HL, C::HL, S::HL, Prohibited, 280),
        // LB29
        (S::IS, C::AL, S::AL, Prohibited, 290),
        (S::IS, C::HL, S::HL, Prohibited, 290),
        (S::NUIS, C::AL, S::AL, Prohibited, 290),
        (S::NUIS, C::HL, S::HL, Prohibited, 290),
        // LB30a
        (S::RIOdd, C::RI, S::RIEven, Prohibited, 301),
        (S::RIEven, C::RI, S::RIOdd, Allowed, 301),
        // LB30b
        (S::EB, C::EM, S::EM, Prohibited, 302),
        // LB31 when entering a state
        (S::Any, C::GL, S::GL, Allowed, LB31),
        (S::Any, C::RI, S::RIOdd, Allowed, LB31),
    ];

    // LB25: NU (NU | SY | IS)* (CL | CP)? × (PO | PR)
    for from in [S::NU, S::NUSY, S::NUIS] {
        rules.extend([
            (from, C::NU, S::NU, Prohibited, 250),
            (from, C::SY, S::NUSY, Prohibited, 250),
            (from, C::IS, S::NUIS, Prohibited, 250),
            (from, C::CL, S::NUCL, Prohibited, 250),
            (from, C::CP, S::NUCP, Prohibited, 250),
            (from, C::PO, S::PO, Prohibited, 250),
            (from, C::PR, S::PR, Prohibited, 250),
        ]);
    }

    // LB26
    rules.extend([
        (S::JL, C::JL, S::JL, Prohibited, 260),
        (S::JL, C::JV, S::JV, Prohibited, 260),
        (S::JL, C::H2, S::H2, Prohibited, 260),
        (S::JL, C::H3, S::H3, Prohibited, 260),
        (S::JV, C::JV, S::JV, Prohibited, 260),
        (S::JV, C::JT, S::JT, Prohibited, 260),
        (S::H2, C::JV, S::JV, Prohibited, 260),
        (S::H2, C::JT, S::JT, Prohibited, 260),
        (S::JT, C::JT, S::JT, Prohibited, 260),
        (S::H3, C::JT, S::JT, Prohibited, 260),
    ]);

    // LB27
    for (class, state) in [
        (C::JL, S::JL),
        (C::JV, S::JV),
        (C::JT, S::JT),
        (C::H2, S::H2),
        (C::H3, S::H3),
    ] {
        rules.push((state, C::PO, S::PO, Prohibited, 270));
        rules.push((S::PR, class, state, Prohibited, 270));
    }

    // LB31 when entering a state
    for (class, state) in [
        (C::AL, S::AL),
        (C::HL, S::HL),
        (C::ID, S::ID),
        (C::EB, S::EB),
        (C::EM, S::EM),
        (C::NU, S::NU),
        (C::PO, S::PO),
        (C::PR, S::PR),
        (C::OP, S::OP),
        (C::B2, S::B2),
        (C::BB, S::BB),
        (C::JL, S::JL),
        (C::JV, S::JV),
        (C::JT, S::JT),
        (C::H2, S::H2),
        (C::H3, S::H3),
    ] {
        rules.push((S::Any, class, state, Allowed, LB31));
    }

    rules
}

static RULES: Lazy<RuleTable<S, C>> = Lazy::new(|| RuleTable::new("line", &rules(), Allowed));

/// Line break opportunity segmentation
#[derive(Debug, Clone, Copy)]
pub struct LineRules;

/// Opaque carried state of the line scanner
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LineState {
    state: State,
    carry: Carry,
}

impl LineState {
    /// Encode as a plain integer for storage between calls
    pub fn to_raw(self) -> i32 {
        self.state as i32 | i32::from(self.carry.bits()) << 8
    }

    /// Decode a value produced by [`LineState::to_raw`]
    pub fn from_raw(raw: i32) -> SegmentResult<Option<Self>> {
        if raw >= 0 && raw >> 16 != 0 {
            return Err(invalid_state(LineRules::NAME, raw));
        }
        let Some(state) = state_from_raw(LineRules::NAME, raw)? else {
            return Ok(None);
        };
        let carry = Carry::from_bits((raw >> 8) as u8)
            .ok_or_else(|| invalid_state(LineRules::NAME, raw))?;
        Ok(Some(Self { state, carry }))
    }
}

/// LB15a: contexts in which an initial quotation mark opens a quotation
fn opens_quotation(state: S) -> bool {
    matches!(
        state,
        S::Any
            | S::BK
            | S::CR
            | S::LF
            | S::NL
            | S::OP
            | S::OPSP
            | S::QU
            | S::QUPi
            | S::QUPiSP
            | S::GL
            | S::SP
            | S::ZW
            | S::ZWSP
            | S::CLCPSP
            | S::B2SP
    )
}

/// States whose last code point is SP, BA or HY (the LB12a exceptions)
fn ends_in_space_or_hyphen(state: S) -> bool {
    matches!(
        state,
        S::SP
            | S::ZWSP
            | S::OPSP
            | S::QUPiSP
            | S::CLCPSP
            | S::B2SP
            | S::BA
            | S::HY
            | S::HLHYBA
    )
}

/// Class of the next code point that LB9 does not absorb
fn next_class<T: TextInput>(rest: T) -> Option<C> {
    split_class(rest).map(|(class, _)| class)
}

/// The next class LB9 does not absorb, and the input after it
fn split_class<T: TextInput>(mut rest: T) -> Option<(C, T)> {
    while let Some((cp, len)) = rest.decode_first() {
        rest = rest.tail(len);
        let class = line_property(cp).class();
        if !matches!(class, C::CM | C::ZWJ) {
            return Some((class, rest));
        }
    }
    None
}

/// LB25: whether a number follows an opening punctuation or hyphen, with an
/// optional infix separator after an opening punctuation
fn number_follows<T: TextInput>(class: C, after: T) -> bool {
    match split_class(after) {
        Some((C::NU, _)) => true,
        Some((C::IS, rest)) if class == C::OP => next_class(rest) == Some(C::NU),
        _ => false,
    }
}

/// LB15b: what may follow a final quotation mark that closes a quotation
fn closes_quotation<T: TextInput>(after: T) -> bool {
    match next_class(after) {
        None => true,
        Some(class) => matches!(
            class,
            C::SP
                | C::GL
                | C::WJ
                | C::CL
                | C::QU
                | C::CP
                | C::EX
                | C::IS
                | C::SY
                | C::BK
                | C::CR
                | C::LF
                | C::NL
                | C::ZW
        ),
    }
}

/// LB9 and LB10: attach a combining mark or ZWJ to what precedes it
fn attach_combining(current: LineState, class: C) -> (S, Carry, BreakClass) {
    let joiner = if class == C::ZWJ {
        Carry::ZWJ
    } else {
        Carry::empty()
    };

    let (state, action) = match current.state {
        S::BK | S::CR | S::LF | S::NL => (S::AL, Mandatory),
        S::ZW | S::ZWSP => (S::AL, Allowed),
        S::OPSP | S::QUPiSP => (S::AL, Prohibited),
        S::SP | S::CLCPSP | S::B2SP | S::Any => (S::AL, Allowed),
        base => {
            let carry = current.carry.difference(Carry::ZWJ).union(joiner);
            return (base, carry, Prohibited);
        }
    };
    (state, joiner, action)
}

fn resolve_pair<T: TextInput>(
    current: LineState,
    property: LineProperty,
    after: T,
) -> (S, Carry, BreakClass) {
    let class = property.class();
    let state = current.state;
    let t = RULES.resolve(state, class);
    let (mut next, mut action) = (t.to, t.action);

    // LB12a
    if class == C::GL && t.priority > 121 && !ends_in_space_or_hyphen(state) {
        action = Prohibited;
    }

    if class == C::QU {
        // LB15a
        if property.is_initial_quote() && opens_quotation(state) {
            next = S::QUPi;
        }
        // LB15b
        if property.is_final_quote() && t.priority > 152 && closes_quotation(after) {
            action = Prohibited;
        }
    }

    // LB25: (PR | PO) × (OP | HY) NU and (PR | PO) × OP IS NU
    if matches!(state, S::PR | S::PO)
        && matches!(class, C::OP | C::HY)
        && t.priority > 250
        && number_follows(class, after)
    {
        action = Prohibited;
    }

    // Nothing up to LB30b decided this position
    if t.priority >= LB31 {
        // LB30
        if matches!(state, S::AL | S::HL | S::NU)
            && class == C::OP
            && !property.is_east_asian_wide()
        {
            action = Prohibited;
        }
        if current.carry.contains(Carry::NARROW_CP) && matches!(class, C::AL | C::HL | C::NU) {
            action = Prohibited;
        }
        // LB30b
        if current.carry.contains(Carry::UNASSIGNED_PICTOGRAPHIC) && class == C::EM {
            action = Prohibited;
        }
    }

    let mut carry = Carry::empty();
    if matches!(next, S::CP | S::NUCP) && !property.is_east_asian_wide() {
        carry |= Carry::NARROW_CP;
    }
    if property.is_unassigned_pictographic() {
        carry |= Carry::UNASSIGNED_PICTOGRAPHIC;
    }

    (next, carry, action)
}

impl Segmentation for LineRules {
    type State = LineState;

    const NAME: &'static str = "line";

    fn transition<T: TextInput>(current: LineState, cp: char, after: T) -> (LineState, BreakClass) {
        let property = line_property(cp);

        let (state, carry, action) = match property.class() {
            class @ (C::CM | C::ZWJ) => attach_combining(current, class),
            _ => resolve_pair(current, property, after),
        };

        // LB8a
        let action = if current.carry.contains(Carry::ZWJ) {
            Prohibited
        } else {
            action
        };

        (LineState { state, carry }, action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breaks(text: &str) -> Vec<(usize, BreakClass)> {
        let mut state = LineState::default();
        let mut found = Vec::new();
        for (index, cp) in text.char_indices() {
            let after = &text[index + cp.len_utf8()..];
            let (next, action) = LineRules::transition(state, cp, after);
            state = next;
            if index > 0 && action.is_break() {
                found.push((index, action));
            }
        }
        found
    }

    #[test]
    fn test_every_pair_resolves() {
        crate::rules::assert_total(&*RULES, S::ALL, C::ALL);
    }

    #[test]
    fn test_spaces_and_newlines() {
        assert_eq!(
            breaks("First line.\nSecond line."),
            vec![(6, Allowed), (12, Mandatory), (19, Allowed)]
        );
        assert_eq!(breaks("a\r\nb"), vec![(3, Mandatory)]);
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(breaks("(a)b"), vec![]);
        assert_eq!(breaks("a(b"), vec![]);
        // Ideographs may break before an opening parenthesis
        assert_eq!(breaks("\u{4E00}("), vec![(3, Allowed)]);
    }

    #[test]
    fn test_hyphen_and_numbers() {
        assert_eq!(breaks("a-b"), vec![(2, Allowed)]);
        assert_eq!(breaks("$(12)"), vec![]);
        assert_eq!(breaks("12.5%"), vec![]);
    }

    #[test]
    fn test_infix_separator_before_digits() {
        assert_eq!(breaks(".5"), vec![]);
        assert_eq!(breaks("(.5)"), vec![]);
        assert_eq!(breaks("a.5"), vec![]);
        assert_eq!(breaks("x,1"), vec![]);
        assert_eq!(breaks("$(.5)"), vec![]);
        // Without a digit after it the separator still allows a break
        assert_eq!(breaks("a.b c"), vec![(4, Allowed)]);
    }

    #[test]
    fn test_glue_and_zero_width_space() {
        assert_eq!(breaks("a\u{00A0}b"), vec![]);
        assert_eq!(breaks("a \u{00A0}b"), vec![(2, Allowed)]);
        assert_eq!(breaks("a\u{200B}b"), vec![(4, Allowed)]);
    }

    #[test]
    fn test_combining_marks_and_joiners() {
        assert_eq!(breaks("ab\u{0301}c"), vec![]);
        assert_eq!(breaks("a\u{200D}\u{4E00}"), vec![]);
        // A mark after a space behaves like a letter
        assert_eq!(breaks("a \u{0301}"), vec![(2, Allowed)]);
    }

    #[test]
    fn test_quotation_marks() {
        // A final quote at the end of text stays with the space before it
        assert_eq!(breaks("a \u{00BB}"), vec![]);
        assert_eq!(breaks("a \u{00BB}b"), vec![(2, Allowed)]);
        // An opening quote keeps its following spaces and word
        assert_eq!(breaks("\u{00AB} a"), vec![]);
        assert_eq!(breaks("x \u{00AB} a"), vec![(2, Allowed)]);
    }

    #[test]
    fn test_emoji_modifiers_and_flags() {
        assert_eq!(breaks("\u{1F476}\u{1F3FB}"), vec![]);
        assert_eq!(
            breaks("\u{1F1F3}\u{1F1F1}\u{1F1E7}"),
            vec![(8, Allowed)]
        );
    }

    #[test]
    fn test_raw_state_carries_flags() {
        let state = LineState {
            state: S::NUCP,
            carry: Carry::NARROW_CP | Carry::ZWJ,
        };
        assert_eq!(LineState::from_raw(state.to_raw()), Ok(Some(state)));
        assert_eq!(LineState::from_raw(-1), Ok(None));
        assert!(LineState::from_raw(0x0800).is_err());
        assert!(LineState::from_raw(0x10000).is_err());
    }
}
