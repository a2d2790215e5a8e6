//! Pillars, chart positions and the four-pillar chart.

use saju_base::{Branch, Stem};
use serde::{Deserialize, Serialize};

/// Label used for the unknown hour pillar.
pub const UNKNOWN_PILLAR_LABEL: &str = "--";

/// A (stem, branch) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: Stem,
    pub branch: Branch,
}

impl Pillar {
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Romanized label, e.g. "Gyeong-O".
    pub fn name(&self) -> String {
        format!("{}-{}", self.stem.name(), self.branch.name())
    }

    /// Hangul label, e.g. "경오".
    pub fn hangul(&self) -> String {
        format!("{}{}", self.stem.hangul(), self.branch.hangul())
    }

    /// Next pillar in the 60-cycle.
    pub const fn next(self) -> Self {
        Self::new(
            Stem::from_cycle(self.stem.index() as i64 + 1),
            Branch::from_cycle(self.branch.index() as i64 + 1),
        )
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.stem.hanja(), self.branch.hanja())
    }
}

/// The four chart positions, in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Year,
    Month,
    Day,
    Hour,
}

/// All 4 positions in reading order (index 0 = Year).
pub const ALL_POSITIONS: [Position; 4] = [
    Position::Year,
    Position::Month,
    Position::Day,
    Position::Hour,
];

impl Position {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Year => "Year",
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }

    pub const fn index(self) -> u8 {
        match self {
            Self::Year => 0,
            Self::Month => 1,
            Self::Day => 2,
            Self::Hour => 3,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A four-pillar chart. Read-only once constructed.
///
/// The hour pillar is None when the birth time is unknown. Absent positions
/// are skipped by every iterator on this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Chart {
    year: Pillar,
    month: Pillar,
    day: Pillar,
    hour: Option<Pillar>,
}

impl Chart {
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Option<Pillar>) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    pub const fn year(&self) -> Pillar {
        self.year
    }

    pub const fn month(&self) -> Pillar {
        self.month
    }

    pub const fn day(&self) -> Pillar {
        self.day
    }

    pub const fn hour(&self) -> Option<Pillar> {
        self.hour
    }

    /// The Day Stem, reference point for all relational scoring.
    pub const fn day_stem(&self) -> Stem {
        self.day.stem
    }

    pub const fn has_hour(&self) -> bool {
        self.hour.is_some()
    }

    pub const fn pillar(&self, position: Position) -> Option<Pillar> {
        match position {
            Position::Year => Some(self.year),
            Position::Month => Some(self.month),
            Position::Day => Some(self.day),
            Position::Hour => self.hour,
        }
    }

    /// All four slots in reading order.
    pub const fn pillars(&self) -> [Option<Pillar>; 4] {
        [Some(self.year), Some(self.month), Some(self.day), self.hour]
    }

    pub fn stem_at(&self, position: Position) -> Option<Stem> {
        self.pillar(position).map(|p| p.stem)
    }

    pub fn branch_at(&self, position: Position) -> Option<Branch> {
        self.pillar(position).map(|p| p.branch)
    }

    /// Present (position, pillar) pairs in reading order.
    pub fn present(&self) -> impl Iterator<Item = (Position, Pillar)> + '_ {
        ALL_POSITIONS
            .into_iter()
            .filter_map(|pos| self.pillar(pos).map(|p| (pos, p)))
    }

    /// Present stems in reading order.
    pub fn stems(&self) -> impl Iterator<Item = (Position, Stem)> + '_ {
        self.present().map(|(pos, p)| (pos, p.stem))
    }

    /// Present branches in reading order.
    pub fn branches(&self) -> impl Iterator<Item = (Position, Branch)> + '_ {
        self.present().map(|(pos, p)| (pos, p.branch))
    }

    pub fn contains_stem(&self, stem: Stem) -> bool {
        self.stems().any(|(_, s)| s == stem)
    }

    pub fn contains_branch(&self, branch: Branch) -> bool {
        self.branches().any(|(_, b)| b == branch)
    }

    /// Per-position labels, with [`UNKNOWN_PILLAR_LABEL`] for an absent hour.
    pub fn labels(&self) -> [String; 4] {
        self.pillars().map(|slot| match slot {
            Some(p) => p.to_string(),
            None => UNKNOWN_PILLAR_LABEL.to_string(),
        })
    }
}

impl std::fmt::Display for Chart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [y, m, d, h] = self.labels();
        write!(f, "{y} {m} {d} {h}")
    }
}
