//! Interaction engine: runs the stage pipeline over one chart.

use saju_base::{Element, ElementMap, TenGodGroups};
use saju_calendar::Chart;
use serde::Serialize;

use crate::event::InteractionLog;
use crate::rules::RuleSet;
use crate::scores::ElementScores;
use crate::stage::{Accumulator, PIPELINE, Stage, StageContext};
use crate::strength::StrengthBand;

/// Result of scoring one chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub scores: ElementScores,
    /// Branch-only contributions from the Base stage.
    pub branch_scores: ElementScores,
    pub self_strength: i32,
    pub day_element: Element,
    /// Last stage that ran.
    pub stage: Stage,
    pub log: InteractionLog,
}

impl Evaluation {
    pub const fn band(&self) -> StrengthBand {
        StrengthBand::classify(self.self_strength)
    }

    /// Scores summed into the five relation groups.
    pub fn ten_god_groups(&self, map: &ElementMap) -> TenGodGroups {
        TenGodGroups::from_scores(map, self.day_element, self.scores.as_array())
    }
}

/// Scores charts against one rule set.
///
/// The rule set is assumed valid; call [`RuleSet::validate`] when loading it.
#[derive(Debug, Clone, Copy)]
pub struct InteractionEngine<'a> {
    map: &'a ElementMap,
    rules: &'a RuleSet,
}

impl<'a> InteractionEngine<'a> {
    pub const fn new(map: &'a ElementMap, rules: &'a RuleSet) -> Self {
        Self { map, rules }
    }

    /// Engine over the standard element map.
    pub fn with_rules(rules: &'a RuleSet) -> Self {
        Self::new(ElementMap::standard(), rules)
    }

    pub const fn rules(&self) -> &'a RuleSet {
        self.rules
    }

    pub const fn map(&self) -> &'a ElementMap {
        self.map
    }

    /// Run every stage.
    pub fn evaluate(&self, chart: &Chart) -> Evaluation {
        self.evaluate_through(chart, Stage::DominanceBattle)
    }

    /// Run the pipeline up to and including `last`.
    pub fn evaluate_through(&self, chart: &Chart, last: Stage) -> Evaluation {
        let _span = tracing::debug_span!(
            "evaluate",
            chart = %chart,
            rules = %self.rules.name,
            version = self.rules.version,
        )
        .entered();

        let day_element = self.map.stem_element(chart.day_stem());
        let ctx = StageContext {
            map: self.map,
            rules: self.rules,
            chart,
            day_element,
        };
        let mut acc = Accumulator::default();
        for stage in PIPELINE.into_iter().take_while(|&s| s <= last) {
            stage.apply(&ctx, &mut acc);
            tracing::trace!(
                stage = stage.name(),
                scores = %acc.scores,
                self_strength = acc.self_strength,
                "stage done"
            );
        }

        Evaluation {
            scores: acc.scores,
            branch_scores: acc.branch_scores,
            self_strength: acc.self_strength,
            day_element,
            stage: last,
            log: acc.log,
        }
    }
}
