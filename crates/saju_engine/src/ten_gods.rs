//! Per-position ten-god classification of a chart.

use saju_base::{ALL_RELATIONS, ElementMap, Relation, TenGod, branch_ten_god, stem_ten_god};
use saju_calendar::{ALL_POSITIONS, Chart, Position};
use serde::Serialize;

/// Categories for the two characters at one position.
///
/// `stem` is None at the Day position (the reference itself) and both are
/// None for an unknown hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct PositionTenGods {
    pub stem: Option<TenGod>,
    pub branch: Option<TenGod>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChartTenGods {
    positions: [PositionTenGods; 4],
}

impl ChartTenGods {
    pub fn classify(map: &ElementMap, chart: &Chart) -> Self {
        let day_stem = chart.day_stem();
        let mut positions = [PositionTenGods::default(); 4];
        for (pos, pillar) in chart.present() {
            let slot = &mut positions[pos.index() as usize];
            if pos != Position::Day {
                slot.stem = Some(stem_ten_god(map, day_stem, pillar.stem));
            }
            slot.branch = Some(branch_ten_god(map, day_stem, pillar.branch));
        }
        Self { positions }
    }

    pub const fn at(&self, position: Position) -> PositionTenGods {
        self.positions[position.index() as usize]
    }

    /// Every classified character in reading order, stems before branches.
    pub fn iter(&self) -> impl Iterator<Item = (Position, TenGod)> + '_ {
        ALL_POSITIONS.into_iter().flat_map(move |pos| {
            let p = self.at(pos);
            p.stem.into_iter().chain(p.branch).map(move |g| (pos, g))
        })
    }

    /// Number of classified characters per relation group, indexed by
    /// `Relation::index()`.
    pub fn group_counts(&self) -> [u8; 5] {
        let mut counts = [0; 5];
        for (_, g) in self.iter() {
            counts[g.relation().index() as usize] += 1;
        }
        counts
    }

    pub fn count(&self, relation: Relation) -> u8 {
        self.group_counts()[relation.index() as usize]
    }

    /// The group with the most characters; ties keep relation order.
    pub fn most_common(&self) -> Relation {
        let counts = self.group_counts();
        let mut best = ALL_RELATIONS[0];
        for r in ALL_RELATIONS {
            if counts[r.index() as usize] > counts[best.index() as usize] {
                best = r;
            }
        }
        best
    }
}
