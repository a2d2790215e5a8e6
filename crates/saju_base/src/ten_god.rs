//! Ten-god (sipseong) classification against the Day Stem.
//!
//! The relation of a character's element to the Day Element picks one of
//! five pairs; matching polarity picks the first of the pair:
//!
//! | Relation  | same polarity | opposite polarity |
//! |-----------|---------------|-------------------|
//! | Same      | Bigyeon 比肩  | Geopjae 劫財      |
//! | Output    | Siksin 食神   | Sanggwan 傷官     |
//! | Wealth    | Pyeonjae 偏財 | Jeongjae 正財     |
//! | Authority | Pyeongwan 偏官| Jeonggwan 正官    |
//! | Resource  | Pyeonin 偏印  | Jeongin 正印      |
//!
//! Branches are classified with their functional polarity.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::element_map::{ALL_RELATIONS, ElementMap, Relation};
use crate::stem::Stem;

/// The ten relational categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TenGod {
    Bigyeon,
    Geopjae,
    Siksin,
    Sanggwan,
    Pyeonjae,
    Jeongjae,
    Pyeongwan,
    Jeonggwan,
    Pyeonin,
    Jeongin,
}

/// All 10 ten-gods, pairs adjacent.
pub const ALL_TEN_GODS: [TenGod; 10] = [
    TenGod::Bigyeon,
    TenGod::Geopjae,
    TenGod::Siksin,
    TenGod::Sanggwan,
    TenGod::Pyeonjae,
    TenGod::Jeongjae,
    TenGod::Pyeongwan,
    TenGod::Jeonggwan,
    TenGod::Pyeonin,
    TenGod::Jeongin,
];

impl TenGod {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bigyeon => "Bigyeon",
            Self::Geopjae => "Geopjae",
            Self::Siksin => "Siksin",
            Self::Sanggwan => "Sanggwan",
            Self::Pyeonjae => "Pyeonjae",
            Self::Jeongjae => "Jeongjae",
            Self::Pyeongwan => "Pyeongwan",
            Self::Jeonggwan => "Jeonggwan",
            Self::Pyeonin => "Pyeonin",
            Self::Jeongin => "Jeongin",
        }
    }

    pub const fn hanja(self) -> &'static str {
        match self {
            Self::Bigyeon => "比肩",
            Self::Geopjae => "劫財",
            Self::Siksin => "食神",
            Self::Sanggwan => "傷官",
            Self::Pyeonjae => "偏財",
            Self::Jeongjae => "正財",
            Self::Pyeongwan => "偏官",
            Self::Jeonggwan => "正官",
            Self::Pyeonin => "偏印",
            Self::Jeongin => "正印",
        }
    }

    /// 0-based index into ALL_TEN_GODS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Bigyeon => 0,
            Self::Geopjae => 1,
            Self::Siksin => 2,
            Self::Sanggwan => 3,
            Self::Pyeonjae => 4,
            Self::Jeongjae => 5,
            Self::Pyeongwan => 6,
            Self::Jeonggwan => 7,
            Self::Pyeonin => 8,
            Self::Jeongin => 9,
        }
    }

    /// The five-group relation this category belongs to.
    pub const fn relation(self) -> Relation {
        ALL_RELATIONS[(self.index() / 2) as usize]
    }

    /// True for the same-polarity member of each pair.
    pub const fn is_same_polarity(self) -> bool {
        self.index() % 2 == 0
    }

    const fn from_parts(relation: Relation, same_polarity: bool) -> Self {
        let base = relation.index() * 2;
        ALL_TEN_GODS[(base + if same_polarity { 0 } else { 1 }) as usize]
    }
}

impl std::fmt::Display for TenGod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify an (element, polarity) against the Day Stem.
pub fn ten_god(map: &ElementMap, day_stem: Stem, element: Element, polarity: Polarity) -> TenGod {
    let day = map.stem(day_stem);
    let relation = map.relation(day.element, element);
    TenGod::from_parts(relation, day.polarity == polarity)
}

/// Classify a stem against the Day Stem.
pub fn stem_ten_god(map: &ElementMap, day_stem: Stem, stem: Stem) -> TenGod {
    let attr = map.stem(stem);
    ten_god(map, day_stem, attr.element, attr.polarity)
}

/// Classify a branch against the Day Stem using functional polarity.
pub fn branch_ten_god(map: &ElementMap, day_stem: Stem, branch: Branch) -> TenGod {
    let attr = map.branch(branch);
    ten_god(map, day_stem, attr.element, attr.functional_polarity)
}

/// Per-group totals, indexed by `Relation::index()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TenGodGroups {
    pub totals: [i32; 5],
}

impl TenGodGroups {
    /// Sum element scores into five groups relative to the Day Element.
    ///
    /// `scores` is indexed by `Element::index()`.
    pub fn from_scores(map: &ElementMap, day_element: Element, scores: &[i32; 5]) -> Self {
        let mut totals = [0; 5];
        for relation in ALL_RELATIONS {
            let e = map.element_for(day_element, relation);
            totals[relation.index() as usize] = scores[e.index() as usize];
        }
        Self { totals }
    }

    pub fn get(&self, relation: Relation) -> i32 {
        self.totals[relation.index() as usize]
    }

    /// Friendly groups minus unfriendly groups.
    pub fn balance(&self) -> i32 {
        ALL_RELATIONS
            .iter()
            .map(|&r| if r.is_friendly() { self.get(r) } else { -self.get(r) })
            .sum()
    }
}
