//! Error types for rule-set validation.

use saju_base::{Branch, Element, Stem};
use saju_calendar::Position;
use thiserror::Error;

use crate::rules::GroupKind;

/// Reasons a [`RuleSet`](crate::RuleSet) is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RuleSetError {
    #[error("rule set name is empty")]
    EmptyName,
    #[error("stem {0} is paired with itself in a {1} rule")]
    StemSelfPair(Stem, &'static str),
    #[error("branch {0} is paired with itself in a branch clash rule")]
    BranchSelfPair(Branch),
    #[error("{kind} group for {element} repeats a member branch")]
    RepeatedMember { kind: GroupKind, element: Element },
    #[error("{kind} rules define {element} more than once")]
    DuplicateGroup { kind: GroupKind, element: Element },
    #[error("negative {row} weight {value} at {position}")]
    NegativeWeight {
        row: &'static str,
        position: Position,
        value: i32,
    },
    #[error("negative {name}: {value}")]
    NegativeAmount { name: &'static str, value: i32 },
    #[error("{name} {value} exceeds the maximum of {max}")]
    AmountTooLarge {
        name: &'static str,
        value: i32,
        max: i32,
    },
    #[error("{table} table has {len} entries, the maximum is {max}")]
    TableTooLong {
        table: &'static str,
        len: usize,
        max: usize,
    },
    #[error("unknown rule preset: {0}")]
    UnknownPreset(String),
}
