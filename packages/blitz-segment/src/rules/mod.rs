//! Boundary rule tables and tiered transition resolution
//!
//! Every family is a state machine over (state, category) pairs. The pairs a
//! family cares about live in a dense `RuleTable`, where each cell holds a
//! `Transition`: the next state, the boundary decision for the position
//! before the incoming code point, and the priority of the UAX rule that
//! produced it. Lower priority numbers correspond to earlier rules and win.
//!
//! Resolution is tiered:
//! 1. an exact (state, category) entry wins outright;
//! 2. otherwise the (state, Any) and (Any, category) entries are combined:
//!    the next state always comes from the (Any, category) entry, while the
//!    decision comes from whichever of the two has the lower priority, with
//!    ties going to (Any, category). A lone entry is used as is;
//! 3. otherwise the machine returns to its wildcard state and applies the
//!    table's catch-all decision.
//!
//! Contextual rules that a pair table cannot express (lookahead, parity and
//! carried flags) are applied by each family around the table lookup.

pub mod grapheme_rules;
pub mod line_rules;
pub mod sentence_rules;
pub mod word_rules;

use std::fmt::Debug;
use std::marker::PhantomData;

use crate::error::{SegmentError, SegmentResult};
use crate::input::TextInput;

pub use grapheme_rules::{GraphemeRules, GraphemeState};
pub use line_rules::{LineRules, LineState};
pub use sentence_rules::{SentenceRules, SentenceState};
pub use word_rules::{WordRules, WordState};

/// Priority of catch-all decisions; larger than any table entry
pub(crate) const CATCH_ALL_PRIORITY: u16 = u16::MAX;

/// Enumeration with a dense index, used for both axes of a rule table
pub trait Dense: Copy + Eq + Debug + 'static {
    /// Number of variants
    const COUNT: usize;
    /// The wildcard variant
    const ANY: Self;

    fn index(self) -> usize;

    fn from_index(index: usize) -> Option<Self>;
}

/// Boundary decision at a position between two code points
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BreakClass {
    /// Breaking is prohibited
    #[default]
    Prohibited = 0,
    /// Breaking is allowed
    Allowed = 1,
    /// Breaking is required (mandatory)
    Mandatory = 2,
}

impl BreakClass {
    /// Whether this decision separates two segments
    #[inline]
    pub const fn is_break(self) -> bool {
        !matches!(self, BreakClass::Prohibited)
    }
}

/// Outcome of resolving one (state, category) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Transition<S> {
    pub(crate) to: S,
    pub(crate) action: BreakClass,
    pub(crate) priority: u16,
}

/// One table entry: `(from, category, to, action, priority)`
pub(crate) type Rule<S, C> = (S, C, S, BreakClass, u16);

/// Dense transition table indexed by `[state][category]`
pub(crate) struct RuleTable<S, C> {
    cells: Box<[Option<Transition<S>>]>,
    catch_all: BreakClass,
    _category: PhantomData<C>,
}

impl<S: Dense, C: Dense> RuleTable<S, C> {
    /// Build a table from its entries
    ///
    /// Each (state, category) key may appear only once.
    pub(crate) fn new(name: &str, rules: &[Rule<S, C>], catch_all: BreakClass) -> Self {
        let mut cells = vec![None; S::COUNT * C::COUNT].into_boxed_slice();

        for &(from, category, to, action, priority) in rules {
            let cell = &mut cells[from.index() * C::COUNT + category.index()];
            debug_assert!(
                cell.is_none(),
                "{name}: duplicate rule for ({from:?}, {category:?})"
            );
            *cell = Some(Transition {
                to,
                action,
                priority,
            });
        }

        log::debug!(
            "Built {} rule table: {} entries over {}x{} cells, catch-all {:?}",
            name,
            rules.len(),
            S::COUNT,
            C::COUNT,
            catch_all
        );

        Self {
            cells,
            catch_all,
            _category: PhantomData,
        }
    }

    #[inline]
    fn entry(&self, state: S, category: C) -> Option<Transition<S>> {
        self.cells
            .get(state.index() * C::COUNT + category.index())
            .copied()
            .flatten()
    }

    /// Resolve a pair through the three fallback tiers
    pub(crate) fn resolve(&self, state: S, category: C) -> Transition<S> {
        if let Some(exact) = self.entry(state, category) {
            return exact;
        }

        let any_category = self.entry(state, C::ANY);
        let any_state = self.entry(S::ANY, category);

        match (any_category, any_state) {
            (Some(left), Some(right)) => Transition {
                to: right.to,
                action: if left.priority < right.priority {
                    left.action
                } else {
                    right.action
                },
                priority: left.priority.min(right.priority),
            },
            (Some(left), None) => left,
            (None, Some(right)) => right,
            (None, None) => Transition {
                to: S::ANY,
                action: self.catch_all,
                priority: CATCH_ALL_PRIORITY,
            },
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A segmentation family: its carried state and its transition function
///
/// `transition` receives the state left by the previous code point, the
/// incoming code point, and the input that follows it (for lookahead). It
/// returns the next state and the decision for the position before `cp`.
pub trait Segmentation: sealed::Sealed {
    type State: Copy + Default + Eq + Debug;

    /// Family name used in diagnostics
    const NAME: &'static str;

    fn transition<T: TextInput>(
        state: Self::State,
        cp: char,
        after: T,
    ) -> (Self::State, BreakClass);
}

impl sealed::Sealed for GraphemeRules {}
impl sealed::Sealed for WordRules {}
impl sealed::Sealed for SentenceRules {}
impl sealed::Sealed for LineRules {}

/// Error for a raw state integer a family cannot decode, logged once here
pub(crate) fn invalid_state(family: &'static str, raw: i32) -> SegmentError {
    log::warn!("Rejected raw {} state {:#x}", family, raw);
    SegmentError::InvalidState { family, raw }
}

/// Decode the low byte of a raw state integer into a dense state
///
/// Negative values mean "no state yet". The bits above the low byte are left
/// for the family to interpret.
pub(crate) fn state_from_raw<S: Dense>(
    family: &'static str,
    raw: i32,
) -> SegmentResult<Option<S>> {
    if raw < 0 {
        return Ok(None);
    }
    S::from_index((raw & 0xFF) as usize)
        .map(Some)
        .ok_or_else(|| invalid_state(family, raw))
}

/// Resolve every (state, category) pair of a table, checking that each lands
/// on a real state and that the catch-all always resets to the wildcard
#[cfg(test)]
pub(crate) fn assert_total<S: Dense, C: Dense>(
    table: &RuleTable<S, C>,
    states: &[S],
    categories: &[C],
) {
    assert_eq!(states.len(), S::COUNT);
    assert_eq!(categories.len(), C::COUNT);
    for &state in states {
        for &category in categories {
            let t = table.resolve(state, category);
            assert_eq!(
                S::from_index(t.to.index()),
                Some(t.to),
                "({state:?}, {category:?})"
            );
            if t.priority == CATCH_ALL_PRIORITY {
                assert_eq!(t.to, S::ANY, "({state:?}, {category:?})");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    dense_enum! {
        enum TestState {
            Any,
            Open,
            Closed,
        }
    }

    dense_enum! {
        enum TestCategory {
            Any,
            Letter,
            Digit,
            Space,
        }
    }

    fn table() -> RuleTable<TestState, TestCategory> {
        use BreakClass::*;
        RuleTable::new(
            "test",
            &[
                (TestState::Open, TestCategory::Letter, TestState::Open, Prohibited, 10),
                (TestState::Open, TestCategory::Any, TestState::Any, Prohibited, 20),
                (TestState::Any, TestCategory::Digit, TestState::Closed, Mandatory, 30),
                (TestState::Any, TestCategory::Space, TestState::Closed, Allowed, 15),
                (TestState::Closed, TestCategory::Any, TestState::Any, Allowed, 15),
            ],
            Mandatory,
        )
    }

    #[test]
    fn test_exact_entry_wins() {
        let t = table().resolve(TestState::Open, TestCategory::Letter);
        assert_eq!(t.to, TestState::Open);
        assert_eq!(t.action, BreakClass::Prohibited);
        assert_eq!(t.priority, 10);
    }

    #[test]
    fn test_mixed_entries_take_lower_priority_decision() {
        // (Open, Any) at 20 beats (Any, Digit) at 30, but the state still
        // comes from the (Any, Digit) entry.
        let t = table().resolve(TestState::Open, TestCategory::Digit);
        assert_eq!(t.to, TestState::Closed);
        assert_eq!(t.action, BreakClass::Prohibited);
        assert_eq!(t.priority, 20);

        let t = table().resolve(TestState::Open, TestCategory::Space);
        assert_eq!(t.to, TestState::Closed);
        assert_eq!(t.action, BreakClass::Allowed);
        assert_eq!(t.priority, 15);
    }

    #[test]
    fn test_mixed_tie_goes_to_any_state_entry() {
        let rules = RuleTable::new(
            "tie",
            &[
                (TestState::Open, TestCategory::Any, TestState::Any, BreakClass::Prohibited, 15),
                (TestState::Any, TestCategory::Digit, TestState::Closed, BreakClass::Allowed, 15),
            ],
            BreakClass::Mandatory,
        );
        let t = rules.resolve(TestState::Open, TestCategory::Digit);
        assert_eq!(t.action, BreakClass::Allowed);
        assert_eq!(t.to, TestState::Closed);
    }

    #[test]
    fn test_single_wildcard_entry_used_as_is() {
        let t = table().resolve(TestState::Closed, TestCategory::Letter);
        assert_eq!(t.to, TestState::Any);
        assert_eq!(t.action, BreakClass::Allowed);

        let t = table().resolve(TestState::Any, TestCategory::Digit);
        assert_eq!(t.to, TestState::Closed);
        assert_eq!(t.action, BreakClass::Mandatory);
    }

    #[test]
    fn test_catch_all_resets_state() {
        let t = table().resolve(TestState::Any, TestCategory::Letter);
        assert_eq!(t.to, TestState::Any);
        assert_eq!(t.action, BreakClass::Mandatory);
        assert_eq!(t.priority, CATCH_ALL_PRIORITY);
    }

    #[test]
    fn test_every_pair_resolves() {
        assert_total(&table(), TestState::ALL, TestCategory::ALL);
    }

    #[test]
    fn test_invalid_state_carries_family_and_value() {
        assert_eq!(
            invalid_state("test", 0x1234),
            SegmentError::InvalidState {
                family: "test",
                raw: 0x1234
            }
        );
    }

    #[test]
    fn test_state_from_raw_bounds() {
        assert_eq!(state_from_raw::<TestState>("test", -1), Ok(None));
        assert_eq!(
            state_from_raw::<TestState>("test", 2),
            Ok(Some(TestState::Closed))
        );
        assert_eq!(
            state_from_raw::<TestState>("test", 3),
            Err(SegmentError::InvalidState {
                family: "test",
                raw: 3
            })
        );
    }
}
