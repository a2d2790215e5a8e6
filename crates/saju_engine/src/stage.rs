//! The seven scoring stages.
//!
//! Each stage reads the chart and rule set through a [`StageContext`] and
//! mutates one [`Accumulator`]. Stages run strictly in [`PIPELINE`] order
//! and never reset earlier results.

use saju_base::{Element, ElementMap};
use saju_calendar::{Chart, Position};
use serde::Serialize;

use crate::event::{BattleOutcome, InteractionEvent, InteractionLog, Row};
use crate::rules::{GroupKind, RuleSet};
use crate::scores::ElementScores;

/// One step of the scoring cascade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Stage {
    Base,
    StemClash,
    StemCombination,
    BranchClash,
    BranchGroups,
    DuplicateAdjacency,
    DominanceBattle,
}

/// All stages in execution order.
pub const PIPELINE: [Stage; 7] = [
    Stage::Base,
    Stage::StemClash,
    Stage::StemCombination,
    Stage::BranchClash,
    Stage::BranchGroups,
    Stage::DuplicateAdjacency,
    Stage::DominanceBattle,
];

impl Stage {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::StemClash => "StemClash",
            Self::StemCombination => "StemCombination",
            Self::BranchClash => "BranchClash",
            Self::BranchGroups => "BranchGroups",
            Self::DuplicateAdjacency => "DuplicateAdjacency",
            Self::DominanceBattle => "DominanceBattle",
        }
    }

    pub(crate) fn apply(self, ctx: &StageContext<'_>, acc: &mut Accumulator) {
        match self {
            Self::Base => base(ctx, acc),
            Self::StemClash => stem_clash(ctx, acc),
            Self::StemCombination => stem_combination(ctx, acc),
            Self::BranchClash => branch_clash(ctx, acc),
            Self::BranchGroups => branch_groups(ctx, acc),
            Self::DuplicateAdjacency => duplicate_adjacency(ctx, acc),
            Self::DominanceBattle => dominance_battle(ctx, acc),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Context and accumulator
// ---------------------------------------------------------------------------

pub(crate) struct StageContext<'a> {
    pub map: &'a ElementMap,
    pub rules: &'a RuleSet,
    pub chart: &'a Chart,
    pub day_element: Element,
}

impl StageContext<'_> {
    /// `amount` toward self-strength: positive for friendly elements.
    fn signed(&self, element: Element, amount: i32) -> i32 {
        if self.map.is_friendly(self.day_element, element) {
            amount
        } else {
            -amount
        }
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct Accumulator {
    pub scores: ElementScores,
    pub branch_scores: ElementScores,
    pub self_strength: i32,
    pub log: InteractionLog,
}

impl Accumulator {
    /// Add to an element and move self-strength by the friendly test.
    fn credit(&mut self, ctx: &StageContext<'_>, element: Element, amount: i32) {
        self.scores.add(element, amount);
        self.self_strength += ctx.signed(element, amount);
    }

    fn record(&mut self, stage: Stage, event: InteractionEvent) {
        tracing::debug!(stage = stage.name(), %event, "rule fired");
        self.log.push(event);
    }
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

fn base(ctx: &StageContext<'_>, acc: &mut Accumulator) {
    let weights = &ctx.rules.weights;
    for (pos, pillar) in ctx.chart.present() {
        let stem_weight = weights.stem_at(pos);
        acc.credit(ctx, ctx.map.stem_element(pillar.stem), stem_weight);

        let branch_weight = weights.branch_at(pos);
        let element = ctx.map.branch_element(pillar.branch);
        acc.credit(ctx, element, branch_weight);
        acc.branch_scores.add(element, branch_weight);
    }
}

fn stem_clash(ctx: &StageContext<'_>, acc: &mut Accumulator) {
    let day_stem = ctx.chart.day_stem();
    for (pos, stem) in ctx.chart.stems() {
        if pos == Position::Day {
            continue;
        }
        for rule in &ctx.rules.stem_clashes {
            if !rule.matches(stem, day_stem) {
                continue;
            }
            acc.scores.add(ctx.day_element, -rule.penalty);
            acc.self_strength -= rule.penalty;
            acc.record(
                Stage::StemClash,
                InteractionEvent::StemClash {
                    position: pos,
                    stem,
                    day_stem,
                    penalty: rule.penalty,
                },
            );
        }
    }
}

fn stem_combination(ctx: &StageContext<'_>, acc: &mut Accumulator) {
    for rule in &ctx.rules.stem_combinations {
        let [a, b] = rule.stems;
        if !(ctx.chart.contains_stem(a) && ctx.chart.contains_stem(b)) {
            continue;
        }
        for delta in &rule.deltas {
            acc.credit(ctx, delta.element, delta.amount);
        }
        acc.record(
            Stage::StemCombination,
            InteractionEvent::StemCombination {
                stems: rule.stems,
                deltas: rule.deltas.clone(),
            },
        );
    }
}

fn branch_clash(ctx: &StageContext<'_>, acc: &mut Accumulator) {
    for rule in &ctx.rules.branch_clashes {
        let [a, b] = rule.branches;
        if !(ctx.chart.contains_branch(a) && ctx.chart.contains_branch(b)) {
            continue;
        }
        let first = ctx.map.branch_element(a);
        let second = ctx.map.branch_element(b);
        let (sa, sb) = (acc.branch_scores.get(first), acc.branch_scores.get(second));
        // Only a strictly stronger second element overturns table order.
        let (winner, loser) = if sb > sa { (second, first) } else { (first, second) };
        acc.credit(ctx, winner, rule.bonus);
        acc.credit(ctx, loser, -rule.bonus);
        acc.record(
            Stage::BranchClash,
            InteractionEvent::BranchClash {
                branches: rule.branches,
                winner,
                loser,
                bonus: rule.bonus,
                tie_break: sa == sb,
            },
        );
    }
}

fn branch_groups(ctx: &StageContext<'_>, acc: &mut Accumulator) {
    for kind in [GroupKind::Triad, GroupKind::Directional] {
        let (rules, bonus) = ctx.rules.groups(kind);
        for rule in rules {
            let present = rule
                .members
                .iter()
                .filter(|&&b| ctx.chart.contains_branch(b))
                .count();
            let Some(amount) = bonus.for_count(present) else {
                continue;
            };
            acc.credit(ctx, rule.element, amount);
            acc.record(
                Stage::BranchGroups,
                InteractionEvent::BranchGroup {
                    group: kind,
                    element: rule.element,
                    present: present as u8,
                    bonus: amount,
                },
            );
        }
    }
}

const ADJACENT: [(Position, Position); 3] = [
    (Position::Year, Position::Month),
    (Position::Month, Position::Day),
    (Position::Day, Position::Hour),
];

fn duplicate_adjacency(ctx: &StageContext<'_>, acc: &mut Accumulator) {
    let bonus = ctx.rules.bonuses.duplicate;
    for row in [Row::Stem, Row::Branch] {
        for (left, right) in ADJACENT {
            let element = match row {
                Row::Stem => match (ctx.chart.stem_at(left), ctx.chart.stem_at(right)) {
                    (Some(a), Some(b)) if a == b => ctx.map.stem_element(a),
                    _ => continue,
                },
                Row::Branch => match (ctx.chart.branch_at(left), ctx.chart.branch_at(right)) {
                    (Some(a), Some(b)) if a == b => ctx.map.branch_element(a),
                    _ => continue,
                },
            };
            acc.credit(ctx, element, bonus);
            acc.record(
                Stage::DuplicateAdjacency,
                InteractionEvent::DuplicateAdjacency {
                    row,
                    left,
                    right,
                    element,
                    bonus,
                },
            );
        }
    }
}

fn dominance_battle(ctx: &StageContext<'_>, acc: &mut Accumulator) {
    let battle = ctx.rules.bonuses.battle;
    let ranked = acc.scores.ranked();
    let (first, second) = (ranked[0], ranked[1]);

    let outcome = if ctx.map.dominates(first) == second {
        acc.scores.add(first, battle.dominance);
        acc.scores.add(second, -battle.dominance);
        BattleOutcome::Dominance
    } else if ctx.map.dominates(second) == first {
        acc.scores.add(second, battle.upset);
        acc.scores.add(first, -battle.upset);
        if second == ctx.day_element {
            acc.self_strength += battle.upset;
        } else if first == ctx.day_element {
            acc.self_strength -= battle.upset;
        }
        BattleOutcome::Upset
    } else if ctx.map.generates(first) == second {
        acc.scores.add(first, -battle.drain_loss);
        acc.scores.add(second, battle.drain_gain);
        BattleOutcome::Drain
    } else {
        BattleOutcome::NoRelation
    };

    acc.record(
        Stage::DominanceBattle,
        InteractionEvent::Battle {
            outcome,
            first,
            second,
        },
    );
}
