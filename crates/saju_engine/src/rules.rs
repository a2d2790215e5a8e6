//! Rule tables and stage bonuses driving the interaction engine.
//!
//! A [`RuleSet`] is plain data: position weights, the clash, combination and
//! group tables, and the bonuses each stage applies. Presets live in
//! [`crate::presets`]; custom sets are usually loaded from TOML.

use std::collections::HashSet;
use std::str::FromStr;

use saju_base::{Branch, Element, Stem};
use saju_calendar::{ALL_POSITIONS, Position};
use serde::{Deserialize, Serialize};

use crate::error::RuleSetError;
use crate::presets;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Per-position weights, indexed by `Position::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionWeights {
    pub stem: [i32; 4],
    pub branch: [i32; 4],
}

impl PositionWeights {
    /// The same weight at every position of both rows.
    pub const fn uniform(weight: i32) -> Self {
        Self {
            stem: [weight; 4],
            branch: [weight; 4],
        }
    }

    pub const fn stem_at(&self, position: Position) -> i32 {
        self.stem[position.index() as usize]
    }

    pub const fn branch_at(&self, position: Position) -> i32 {
        self.branch[position.index() as usize]
    }
}

// ---------------------------------------------------------------------------
// Rule tables
// ---------------------------------------------------------------------------

/// A stem pair that clashes with the Day Stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemClashRule {
    pub stems: [Stem; 2],
    pub penalty: i32,
}

impl StemClashRule {
    /// Unordered match.
    pub fn matches(&self, a: Stem, b: Stem) -> bool {
        (self.stems[0] == a && self.stems[1] == b) || (self.stems[0] == b && self.stems[1] == a)
    }
}

/// A signed adjustment to one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementDelta {
    pub element: Element,
    pub amount: i32,
}

impl ElementDelta {
    pub const fn new(element: Element, amount: i32) -> Self {
        Self { element, amount }
    }
}

impl std::fmt::Display for ElementDelta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:+}", self.element, self.amount)
    }
}

/// Two stems that transform when both are present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StemCombinationRule {
    pub stems: [Stem; 2],
    pub deltas: Vec<ElementDelta>,
}

/// Two opposing branches; the stronger element takes the bonus from the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchClashRule {
    pub branches: [Branch; 2],
    pub bonus: i32,
}

/// Which family a branch group belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Triad,
    Directional,
}

impl GroupKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Triad => "Triad",
            Self::Directional => "Directional",
        }
    }
}

impl std::fmt::Display for GroupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Three branches that together strengthen one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchGroupRule {
    pub element: Element,
    pub members: [Branch; 3],
}

// ---------------------------------------------------------------------------
// Bonuses
// ---------------------------------------------------------------------------

/// Bonus for a complete (3 of 3) or partial (2 of 3) branch group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupBonus {
    pub full: i32,
    pub partial: i32,
}

impl GroupBonus {
    /// Bonus for `present` distinct members, None below two.
    pub const fn for_count(&self, present: usize) -> Option<i32> {
        match present {
            3 => Some(self.full),
            2 => Some(self.partial),
            _ => None,
        }
    }
}

/// Amounts moved by the dominance battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleBonus {
    pub dominance: i32,
    pub upset: i32,
    /// Taken from the draining (rank-1) element.
    pub drain_loss: i32,
    /// Given to the fed (rank-2) element.
    pub drain_gain: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageBonuses {
    pub triad: GroupBonus,
    pub directional: GroupBonus,
    pub duplicate: i32,
    pub battle: BattleBonus,
}

// ---------------------------------------------------------------------------
// RuleSet
// ---------------------------------------------------------------------------

/// Largest weight, penalty, bonus or delta magnitude a rule set may carry.
pub const MAX_AMOUNT: i32 = 10_000;

/// Longest rule table (and longest delta list on one combination).
pub const MAX_TABLE_LEN: usize = 64;

/// Complete, versioned input to the interaction engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    pub name: String,
    pub version: u32,
    pub weights: PositionWeights,
    pub stem_clashes: Vec<StemClashRule>,
    pub stem_combinations: Vec<StemCombinationRule>,
    pub branch_clashes: Vec<BranchClashRule>,
    pub triads: Vec<BranchGroupRule>,
    pub directionals: Vec<BranchGroupRule>,
    pub bonuses: StageBonuses,
}

impl RuleSet {
    pub fn preset(preset: RulePreset) -> Self {
        match preset {
            RulePreset::Classic => presets::classic(),
            RulePreset::Weighted => presets::weighted(),
        }
    }

    /// Group rules and bonus for one family.
    pub fn groups(&self, kind: GroupKind) -> (&[BranchGroupRule], GroupBonus) {
        match kind {
            GroupKind::Triad => (&self.triads, self.bonuses.triad),
            GroupKind::Directional => (&self.directionals, self.bonuses.directional),
        }
    }

    /// Check the tables for structural mistakes.
    pub fn validate(&self) -> Result<(), RuleSetError> {
        if self.name.trim().is_empty() {
            return Err(RuleSetError::EmptyName);
        }

        for pos in ALL_POSITIONS {
            for (row, value) in [
                ("stem", self.weights.stem_at(pos)),
                ("branch", self.weights.branch_at(pos)),
            ] {
                if value < 0 {
                    return Err(RuleSetError::NegativeWeight {
                        row,
                        position: pos,
                        value,
                    });
                }
                if value > MAX_AMOUNT {
                    return Err(RuleSetError::AmountTooLarge {
                        name: if row == "stem" { "stem weight" } else { "branch weight" },
                        value,
                        max: MAX_AMOUNT,
                    });
                }
            }
        }

        for (table, len) in [
            ("stem clash", self.stem_clashes.len()),
            ("stem combination", self.stem_combinations.len()),
            ("branch clash", self.branch_clashes.len()),
            ("triad", self.triads.len()),
            ("directional", self.directionals.len()),
        ] {
            too_long(table, len)?;
        }

        for rule in &self.stem_clashes {
            if rule.stems[0] == rule.stems[1] {
                return Err(RuleSetError::StemSelfPair(rule.stems[0], "stem clash"));
            }
            bounded("stem clash penalty", rule.penalty)?;
        }
        for rule in &self.stem_combinations {
            if rule.stems[0] == rule.stems[1] {
                return Err(RuleSetError::StemSelfPair(rule.stems[0], "stem combination"));
            }
            too_long("combination delta", rule.deltas.len())?;
            for delta in &rule.deltas {
                if delta.amount.unsigned_abs() > MAX_AMOUNT.unsigned_abs() {
                    return Err(RuleSetError::AmountTooLarge {
                        name: "combination delta",
                        value: delta.amount,
                        max: MAX_AMOUNT,
                    });
                }
            }
        }
        for rule in &self.branch_clashes {
            if rule.branches[0] == rule.branches[1] {
                return Err(RuleSetError::BranchSelfPair(rule.branches[0]));
            }
            bounded("branch clash bonus", rule.bonus)?;
        }

        for kind in [GroupKind::Triad, GroupKind::Directional] {
            let (rules, _) = self.groups(kind);
            let mut seen = HashSet::new();
            for rule in rules {
                let [a, b, c] = rule.members;
                if a == b || b == c || a == c {
                    return Err(RuleSetError::RepeatedMember {
                        kind,
                        element: rule.element,
                    });
                }
                if !seen.insert(rule.element) {
                    return Err(RuleSetError::DuplicateGroup {
                        kind,
                        element: rule.element,
                    });
                }
            }
        }

        let b = &self.bonuses;
        bounded("triad full bonus", b.triad.full)?;
        bounded("triad partial bonus", b.triad.partial)?;
        bounded("directional full bonus", b.directional.full)?;
        bounded("directional partial bonus", b.directional.partial)?;
        bounded("duplicate bonus", b.duplicate)?;
        bounded("dominance bonus", b.battle.dominance)?;
        bounded("upset bonus", b.battle.upset)?;
        bounded("drain loss", b.battle.drain_loss)?;
        bounded("drain gain", b.battle.drain_gain)?;
        Ok(())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::preset(RulePreset::default())
    }
}

/// `0..=MAX_AMOUNT`.
fn bounded(name: &'static str, value: i32) -> Result<(), RuleSetError> {
    if value < 0 {
        Err(RuleSetError::NegativeAmount { name, value })
    } else if value > MAX_AMOUNT {
        Err(RuleSetError::AmountTooLarge {
            name,
            value,
            max: MAX_AMOUNT,
        })
    } else {
        Ok(())
    }
}

fn too_long(table: &'static str, len: usize) -> Result<(), RuleSetError> {
    if len > MAX_TABLE_LEN {
        Err(RuleSetError::TableTooLong {
            table,
            len,
            max: MAX_TABLE_LEN,
        })
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Presets
// ---------------------------------------------------------------------------

/// Built-in rule sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulePreset {
    /// Uniform weights, v1.
    Classic,
    /// Day Stem and Month Branch emphasised, v2.
    #[default]
    Weighted,
}

pub const ALL_PRESETS: [RulePreset; 2] = [RulePreset::Classic, RulePreset::Weighted];

impl RulePreset {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Weighted => "weighted",
        }
    }

    pub const fn version(self) -> u32 {
        match self {
            Self::Classic => 1,
            Self::Weighted => 2,
        }
    }
}

impl std::fmt::Display for RulePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RulePreset {
    type Err = RuleSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_PRESETS
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RuleSetError::UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        for p in ALL_PRESETS {
            let rules = RuleSet::preset(p);
            assert_eq!(rules.name, p.name());
            assert_eq!(rules.version, p.version());
            rules.validate().unwrap();
        }
    }

    #[test]
    fn default_is_weighted() {
        assert_eq!(RuleSet::default().name, "weighted");
    }

    #[test]
    fn preset_from_str() {
        assert_eq!("Classic".parse::<RulePreset>().unwrap(), RulePreset::Classic);
        assert_eq!(
            "modern".parse::<RulePreset>(),
            Err(RuleSetError::UnknownPreset("modern".into()))
        );
    }

    #[test]
    fn clash_match_is_unordered() {
        let rule = StemClashRule {
            stems: [Stem::Gap, Stem::Gyeong],
            penalty: 10,
        };
        assert!(rule.matches(Stem::Gyeong, Stem::Gap));
        assert!(!rule.matches(Stem::Gap, Stem::Sin));
    }

    #[test]
    fn group_bonus_counts() {
        let b = GroupBonus { full: 12, partial: 4 };
        assert_eq!(b.for_count(3), Some(12));
        assert_eq!(b.for_count(2), Some(4));
        assert_eq!(b.for_count(1), None);
        assert_eq!(b.for_count(0), None);
    }

    #[test]
    fn rejects_empty_name() {
        let mut rules = RuleSet::default();
        rules.name = "  ".into();
        assert_eq!(rules.validate(), Err(RuleSetError::EmptyName));
    }

    #[test]
    fn rejects_self_pair() {
        let mut rules = RuleSet::default();
        rules.branch_clashes[0].branches = [Branch::Ja, Branch::Ja];
        assert_eq!(rules.validate(), Err(RuleSetError::BranchSelfPair(Branch::Ja)));

        let mut rules = RuleSet::default();
        rules.stem_combinations[0].stems = [Stem::Gap, Stem::Gap];
        assert_eq!(
            rules.validate(),
            Err(RuleSetError::StemSelfPair(Stem::Gap, "stem combination"))
        );
    }

    #[test]
    fn rejects_repeated_member() {
        let mut rules = RuleSet::default();
        rules.triads[0].members = [Branch::Sin, Branch::Ja, Branch::Sin];
        assert!(matches!(
            rules.validate(),
            Err(RuleSetError::RepeatedMember {
                kind: GroupKind::Triad,
                ..
            })
        ));
    }

    #[test]
    fn rejects_duplicate_group_element() {
        let mut rules = RuleSet::default();
        rules.directionals[1].element = rules.directionals[0].element;
        assert!(matches!(
            rules.validate(),
            Err(RuleSetError::DuplicateGroup {
                kind: GroupKind::Directional,
                ..
            })
        ));
    }

    #[test]
    fn rejects_negative_values() {
        let mut rules = RuleSet::default();
        rules.weights.branch[3] = -1;
        assert_eq!(
            rules.validate(),
            Err(RuleSetError::NegativeWeight {
                row: "branch",
                position: Position::Hour,
                value: -1
            })
        );

        let mut rules = RuleSet::default();
        rules.bonuses.battle.upset = -2;
        assert_eq!(
            rules.validate(),
            Err(RuleSetError::NegativeAmount {
                name: "upset bonus",
                value: -2
            })
        );
    }

    #[test]
    fn rejects_oversized_values() {
        let mut rules = RuleSet::default();
        rules.weights.stem = [i32::MAX / 2; 4];
        assert_eq!(
            rules.validate(),
            Err(RuleSetError::AmountTooLarge {
                name: "stem weight",
                value: i32::MAX / 2,
                max: MAX_AMOUNT
            })
        );

        let mut rules = RuleSet::default();
        rules.bonuses.duplicate = MAX_AMOUNT + 1;
        assert!(matches!(
            rules.validate(),
            Err(RuleSetError::AmountTooLarge {
                name: "duplicate bonus",
                ..
            })
        ));

        let mut rules = RuleSet::default();
        rules.stem_combinations[0].deltas[0].amount = i32::MIN;
        assert!(matches!(
            rules.validate(),
            Err(RuleSetError::AmountTooLarge {
                name: "combination delta",
                ..
            })
        ));

        let mut rules = RuleSet::default();
        rules.weights = PositionWeights::uniform(MAX_AMOUNT);
        rules.validate().unwrap();
    }

    #[test]
    fn rejects_oversized_tables() {
        let mut rules = RuleSet::default();
        let rule = rules.branch_clashes[0];
        rules.branch_clashes = vec![rule; MAX_TABLE_LEN + 1];
        assert_eq!(
            rules.validate(),
            Err(RuleSetError::TableTooLong {
                table: "branch clash",
                len: MAX_TABLE_LEN + 1,
                max: MAX_TABLE_LEN
            })
        );
    }

    #[test]
    fn toml_round_trip() {
        let rules = RuleSet::preset(RulePreset::Classic);
        let text = toml::to_string(&rules).unwrap();
        let back: RuleSet = toml::from_str(&text).unwrap();
        assert_eq!(back, rules);
    }
}
