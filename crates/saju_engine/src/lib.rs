//! Weighted five-element interaction scoring for Four-Pillars charts.
//!
//! This crate provides:
//! - Versioned [`RuleSet`] tables with `classic` and `weighted` presets
//! - The seven-stage scoring pipeline ([`InteractionEngine`])
//! - Self-strength bands and per-position ten-god classification
//!
//! Evaluation is pure: the same chart and rule set always produce the same
//! [`Evaluation`], including the order of logged events.

pub mod engine;
pub mod error;
pub mod event;
pub mod presets;
pub mod rules;
pub mod scores;
pub mod stage;
pub mod strength;
pub mod ten_gods;

pub use engine::{Evaluation, InteractionEngine};
pub use error::RuleSetError;
pub use event::{BattleOutcome, InteractionEvent, InteractionLog, Row};
pub use rules::{
    ALL_PRESETS, BattleBonus, BranchClashRule, BranchGroupRule, ElementDelta, GroupBonus,
    GroupKind, MAX_AMOUNT, MAX_TABLE_LEN, PositionWeights, RulePreset, RuleSet, StageBonuses,
    StemClashRule, StemCombinationRule,
};
pub use scores::ElementScores;
pub use stage::{PIPELINE, Stage};
pub use strength::{EXTREME_THRESHOLD, StrengthBand};
pub use ten_gods::{ChartTenGods, PositionTenGods};
