//! Built-in rule sets.
//!
//! Both presets share the clash, combination and group tables; they differ
//! in position weights and stage bonuses.
//!
//! | preset   | ver | stem weights  | branch weights | triad | dir.  | dup | battle (dom/up/drain) |
//! |----------|-----|---------------|----------------|-------|-------|-----|-----------------------|
//! | classic  | 1   | 10 10 10 10   | 10 10 10 10    | 12/4  | 10/3  | 5   | 5 / 5 / 3→5           |
//! | weighted | 2   | 10 10 25 10   | 10 20 15 10    | 15/5  | 12/4  | 5   | 10 / 10 / 5→10        |

use saju_base::{Branch, Element, Stem};

use crate::rules::{
    BattleBonus, BranchClashRule, BranchGroupRule, ElementDelta, GroupBonus, PositionWeights,
    RulePreset, RuleSet, StageBonuses, StemClashRule, StemCombinationRule,
};

/// Uniform weights, lighter bonuses.
pub fn classic() -> RuleSet {
    RuleSet {
        name: RulePreset::Classic.name().to_string(),
        version: RulePreset::Classic.version(),
        weights: PositionWeights::uniform(10),
        stem_clashes: stem_clashes(),
        stem_combinations: stem_combinations(),
        branch_clashes: branch_clashes(),
        triads: triads(),
        directionals: directionals(),
        bonuses: StageBonuses {
            triad: GroupBonus { full: 12, partial: 4 },
            directional: GroupBonus { full: 10, partial: 3 },
            duplicate: 5,
            battle: BattleBonus {
                dominance: 5,
                upset: 5,
                drain_loss: 3,
                drain_gain: 5,
            },
        },
    }
}

/// Day Stem and Month Branch carry the most weight.
pub fn weighted() -> RuleSet {
    RuleSet {
        name: RulePreset::Weighted.name().to_string(),
        version: RulePreset::Weighted.version(),
        weights: PositionWeights {
            stem: [10, 10, 25, 10],
            branch: [10, 20, 15, 10],
        },
        stem_clashes: stem_clashes(),
        stem_combinations: stem_combinations(),
        branch_clashes: branch_clashes(),
        triads: triads(),
        directionals: directionals(),
        bonuses: StageBonuses {
            triad: GroupBonus { full: 15, partial: 5 },
            directional: GroupBonus { full: 12, partial: 4 },
            duplicate: 5,
            battle: BattleBonus {
                dominance: 10,
                upset: 10,
                drain_loss: 5,
                drain_gain: 10,
            },
        },
    }
}

// ---------------------------------------------------------------------------
// Shared tables
// ---------------------------------------------------------------------------

fn stem_clashes() -> Vec<StemClashRule> {
    use Stem::*;
    [
        (Gap, Gyeong, 10),
        (Eul, Sin, 10),
        (Byeong, Im, 10),
        (Jeong, Gye, 10),
        (Mu, Gap, 5),
        (Gi, Eul, 5),
    ]
    .into_iter()
    .map(|(a, b, penalty)| StemClashRule {
        stems: [a, b],
        penalty,
    })
    .collect()
}

fn stem_combinations() -> Vec<StemCombinationRule> {
    use Element::*;
    use Stem::*;
    let rule = |a, b, deltas: &[(Element, i32)]| StemCombinationRule {
        stems: [a, b],
        deltas: deltas.iter().map(|&(e, amt)| ElementDelta::new(e, amt)).collect(),
    };
    vec![
        rule(Gap, Gi, &[(Earth, 10), (Wood, -5)]),
        rule(Eul, Gyeong, &[(Metal, 10), (Wood, -5)]),
        rule(Byeong, Sin, &[(Water, 10), (Fire, -5), (Metal, -5)]),
        rule(Jeong, Im, &[(Wood, 10), (Fire, -5), (Water, -5)]),
        rule(Mu, Gye, &[(Fire, 10), (Earth, -5), (Water, -5)]),
    ]
}

fn branch_clashes() -> Vec<BranchClashRule> {
    use Branch::*;
    [(Ja, O, 10), (Myo, Yu, 10), (In, Sin, 8)]
        .into_iter()
        .map(|(a, b, bonus)| BranchClashRule {
            branches: [a, b],
            bonus,
        })
        .collect()
}

fn triads() -> Vec<BranchGroupRule> {
    use Branch::*;
    vec![
        group(Element::Water, [Sin, Ja, Jin]),
        group(Element::Fire, [In, O, Sul]),
        group(Element::Wood, [Hae, Myo, Mi]),
        group(Element::Metal, [Sa, Yu, Chuk]),
        group(Element::Earth, [Chuk, Jin, Sul]),
    ]
}

fn directionals() -> Vec<BranchGroupRule> {
    use Branch::*;
    vec![
        group(Element::Wood, [In, Myo, Jin]),
        group(Element::Fire, [Sa, O, Mi]),
        group(Element::Metal, [Sin, Yu, Sul]),
        group(Element::Water, [Hae, Ja, Chuk]),
        group(Element::Earth, [Jin, Mi, Sul]),
    ]
}

const fn group(element: Element, members: [Branch; 3]) -> BranchGroupRule {
    BranchGroupRule { element, members }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_share_tables() {
        let c = classic();
        let w = weighted();
        assert_eq!(c.stem_clashes, w.stem_clashes);
        assert_eq!(c.stem_combinations, w.stem_combinations);
        assert_eq!(c.triads, w.triads);
        assert_ne!(c.weights, w.weights);
    }

    #[test]
    fn day_stem_weighs_most_in_weighted() {
        let w = weighted().weights;
        assert!(w.stem.iter().all(|&x| x <= w.stem[2]));
        assert!(w.branch.iter().all(|&x| x < w.stem[2]));
    }

    #[test]
    fn table_sizes() {
        let c = classic();
        assert_eq!(c.stem_clashes.len(), 6);
        assert_eq!(c.stem_combinations.len(), 5);
        assert_eq!(c.branch_clashes.len(), 3);
        assert_eq!(c.triads.len(), 5);
        assert_eq!(c.directionals.len(), 5);
    }
}
