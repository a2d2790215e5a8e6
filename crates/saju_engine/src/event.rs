//! Structured interaction events and the append-only log.

use saju_base::{Branch, Element, Stem};
use saju_calendar::Position;
use serde::Serialize;

use crate::rules::{ElementDelta, GroupKind};

/// Stem row or branch row of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Row {
    Stem,
    Branch,
}

impl Row {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stem => "stem",
            Self::Branch => "branch",
        }
    }
}

/// Result of the final dominance battle between the top two elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BattleOutcome {
    /// Rank-1 controls rank-2.
    Dominance,
    /// Rank-2 controls rank-1.
    Upset,
    /// Rank-1 feeds rank-2.
    Drain,
    NoRelation,
}

impl BattleOutcome {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dominance => "Dominance",
            Self::Upset => "Upset",
            Self::Drain => "Drain",
            Self::NoRelation => "NoRelation",
        }
    }
}

/// One rule firing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InteractionEvent {
    StemClash {
        position: Position,
        stem: Stem,
        day_stem: Stem,
        penalty: i32,
    },
    StemCombination {
        stems: [Stem; 2],
        deltas: Vec<ElementDelta>,
    },
    BranchClash {
        branches: [Branch; 2],
        winner: Element,
        loser: Element,
        bonus: i32,
        /// The sub-scores were equal and table order decided.
        tie_break: bool,
    },
    BranchGroup {
        group: GroupKind,
        element: Element,
        present: u8,
        bonus: i32,
    },
    DuplicateAdjacency {
        row: Row,
        left: Position,
        right: Position,
        element: Element,
        bonus: i32,
    },
    Battle {
        outcome: BattleOutcome,
        first: Element,
        second: Element,
    },
}

impl std::fmt::Display for InteractionEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::StemClash {
                position,
                stem,
                day_stem,
                penalty,
            } => write!(f, "Stem clash: {position} {stem} vs Day {day_stem}, -{penalty}"),
            Self::StemCombination { stems, deltas } => {
                write!(f, "Stem combination: {}{}", stems[0], stems[1])?;
                for (i, d) in deltas.iter().enumerate() {
                    f.write_str(if i == 0 { " → " } else { ", " })?;
                    write!(f, "{d}")?;
                }
                Ok(())
            }
            Self::BranchClash {
                branches,
                winner,
                loser,
                bonus,
                tie_break,
            } => {
                write!(
                    f,
                    "Branch clash: {}{} {winner} over {loser}, ±{bonus}",
                    branches[0], branches[1]
                )?;
                if *tie_break {
                    f.write_str(" (tie-break)")?;
                }
                Ok(())
            }
            Self::BranchGroup {
                group,
                element,
                present,
                bonus,
            } => write!(f, "{group} {element}: {present} of 3 present, +{bonus}"),
            Self::DuplicateAdjacency {
                row,
                left,
                right,
                element,
                bonus,
            } => write!(
                f,
                "Duplicate {} {left}-{right}: {element} +{bonus}",
                row.name()
            ),
            Self::Battle {
                outcome,
                first,
                second,
            } => write!(f, "Battle: {} ({first} vs {second})", outcome.name()),
        }
    }
}

/// Ordered record of every rule that fired during one evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct InteractionLog {
    events: Vec<InteractionEvent>,
}

impl InteractionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: InteractionEvent) {
        self.events.push(event);
    }

    pub fn events(&self) -> &[InteractionEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, InteractionEvent> {
        self.events.iter()
    }

    /// Human-readable lines in firing order.
    pub fn lines(&self) -> Vec<String> {
        self.events.iter().map(ToString::to_string).collect()
    }

    /// The battle result, if the last stage ran.
    pub fn battle(&self) -> Option<(BattleOutcome, Element, Element)> {
        self.events.iter().find_map(|e| match e {
            InteractionEvent::Battle {
                outcome,
                first,
                second,
            } => Some((*outcome, *first, *second)),
            _ => None,
        })
    }
}

impl<'a> IntoIterator for &'a InteractionLog {
    type Item = &'a InteractionEvent;
    type IntoIter = std::slice::Iter<'a, InteractionEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lines() {
        let clash = InteractionEvent::StemClash {
            position: Position::Hour,
            stem: Stem::Im,
            day_stem: Stem::Byeong,
            penalty: 10,
        };
        assert_eq!(clash.to_string(), "Stem clash: Hour 壬 vs Day 丙, -10");

        let combo = InteractionEvent::StemCombination {
            stems: [Stem::Gap, Stem::Gi],
            deltas: vec![
                ElementDelta::new(Element::Earth, 10),
                ElementDelta::new(Element::Wood, -5),
            ],
        };
        assert_eq!(combo.to_string(), "Stem combination: 甲己 → Earth +10, Wood -5");

        let bc = InteractionEvent::BranchClash {
            branches: [Branch::Ja, Branch::O],
            winner: Element::Water,
            loser: Element::Fire,
            bonus: 10,
            tie_break: true,
        };
        assert_eq!(bc.to_string(), "Branch clash: 子午 Water over Fire, ±10 (tie-break)");

        let dup = InteractionEvent::DuplicateAdjacency {
            row: Row::Stem,
            left: Position::Year,
            right: Position::Month,
            element: Element::Metal,
            bonus: 5,
        };
        assert_eq!(dup.to_string(), "Duplicate stem Year-Month: Metal +5");
    }

    #[test]
    fn log_finds_battle() {
        let mut log = InteractionLog::new();
        assert!(log.battle().is_none());
        log.push(InteractionEvent::Battle {
            outcome: BattleOutcome::Drain,
            first: Element::Water,
            second: Element::Wood,
        });
        assert_eq!(
            log.battle(),
            Some((BattleOutcome::Drain, Element::Water, Element::Wood))
        );
        assert_eq!(log.lines(), vec!["Battle: Drain (Water vs Wood)".to_string()]);
    }
}
