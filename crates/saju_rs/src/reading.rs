//! Presentation-ready reading for one consultation.

use saju_base::{ALL_RELATIONS, Element, ElementMap, Relation};
use saju_calendar::Chart;
use saju_engine::{ChartTenGods, ElementScores, Evaluation, RuleSet};
use serde::Serialize;

use crate::intake::Gender;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarLabels {
    pub year: String,
    pub month: String,
    pub day: String,
    /// "--" when the birth time is unknown.
    pub hour: String,
}

impl PillarLabels {
    pub fn from_chart(chart: &Chart) -> Self {
        let [year, month, day, hour] = chart.labels();
        Self {
            year,
            month,
            day,
            hour,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElementTotals {
    pub wood: i32,
    pub fire: i32,
    pub earth: i32,
    pub metal: i32,
    pub water: i32,
}

impl From<&ElementScores> for ElementTotals {
    fn from(s: &ElementScores) -> Self {
        Self {
            wood: s.get(Element::Wood),
            fire: s.get(Element::Fire),
            earth: s.get(Element::Earth),
            metal: s.get(Element::Metal),
            water: s.get(Element::Water),
        }
    }
}

/// Score totals and character counts for one relation group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupSummary {
    pub group: &'static str,
    pub relation: &'static str,
    pub element: Element,
    pub score: i32,
    pub characters: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleSetInfo {
    pub name: String,
    pub version: u32,
}

/// A complete reading, ready for rendering or export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reading {
    pub nickname: String,
    pub gender: Gender,
    pub pillars: PillarLabels,
    pub day_element: Element,
    pub scores: ElementTotals,
    pub self_strength: i32,
    pub band: &'static str,
    pub band_hangul: &'static str,
    pub events: Vec<String>,
    pub ten_god_groups: Vec<GroupSummary>,
    pub rule_set: RuleSetInfo,
}

impl Reading {
    pub fn build(
        nickname: &str,
        gender: Gender,
        chart: &Chart,
        evaluation: &Evaluation,
        rules: &RuleSet,
        map: &ElementMap,
    ) -> Self {
        let groups = evaluation.ten_god_groups(map);
        let counts = ChartTenGods::classify(map, chart).group_counts();
        let ten_god_groups = ALL_RELATIONS
            .into_iter()
            .map(|r: Relation| GroupSummary {
                group: r.group_name(),
                relation: r.english_name(),
                element: map.element_for(evaluation.day_element, r),
                score: groups.get(r),
                characters: counts[r.index() as usize],
            })
            .collect();
        let band = evaluation.band();

        Self {
            nickname: nickname.to_string(),
            gender,
            pillars: PillarLabels::from_chart(chart),
            day_element: evaluation.day_element,
            scores: ElementTotals::from(&evaluation.scores),
            self_strength: evaluation.self_strength,
            band: band.label(),
            band_hangul: band.hangul(),
            events: evaluation.log.lines(),
            ten_god_groups,
            rule_set: RuleSetInfo {
                name: rules.name.clone(),
                version: rules.version,
            },
        }
    }

    /// Plain-text rendering.
    pub fn to_text(&self) -> String {
        let p = &self.pillars;
        let s = &self.scores;
        let mut out = format!(
            "{} ({})\n\
             Pillars: {} {} {} {}\n\
             Day element: {}\n\
             Scores: Wood={} Fire={} Earth={} Metal={} Water={}\n\
             Self-strength: {} ({} / {})\n",
            self.nickname,
            self.gender,
            p.year,
            p.month,
            p.day,
            p.hour,
            self.day_element,
            s.wood,
            s.fire,
            s.earth,
            s.metal,
            s.water,
            self.self_strength,
            self.band,
            self.band_hangul,
        );
        out.push_str("Groups:\n");
        for g in &self.ten_god_groups {
            out.push_str(&format!(
                "  {:<9} {:<9} {:<5} score {:>4}, {} chars\n",
                g.group,
                g.relation,
                g.element.name(),
                g.score,
                g.characters
            ));
        }
        out.push_str("Events:\n");
        for e in &self.events {
            out.push_str("  ");
            out.push_str(e);
            out.push('\n');
        }
        out.push_str(&format!(
            "Rules: {} v{}\n",
            self.rule_set.name, self.rule_set.version
        ));
        out
    }
}
