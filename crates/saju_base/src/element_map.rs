//! Element, polarity and cycle tables for stems and branches.
//!
//! One immutable [`ElementMap`] holds every lookup the engine needs:
//! - stem → (element, polarity)
//! - branch → (element, nominal polarity, functional polarity)
//! - Saeng (generation) cycle: Wood → Fire → Earth → Metal → Water → Wood
//! - Geuk (domination) cycle: Wood → Earth → Water → Fire → Metal → Wood
//!
//! Branch functional polarity is literal data. 子, 巳, 午 and 亥 carry a
//! functional polarity opposite to their cycle parity; it is used only for
//! ten-god classification.

use serde::Serialize;

use crate::branch::Branch;
use crate::element::{Element, Polarity};
use crate::stem::Stem;

/// Element and polarity of a heavenly stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StemAttributes {
    pub element: Element,
    pub polarity: Polarity,
}

/// Element and both polarities of an earthly branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BranchAttributes {
    pub element: Element,
    /// Polarity by cycle parity (子 yang, 丑 yin, ...).
    pub polarity: Polarity,
    /// Polarity used for relational classification.
    pub functional_polarity: Polarity,
}

/// How an element relates to the Day Element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Relation {
    /// Same element (bigeop).
    Same,
    /// Generated by the Day Element (siksang).
    Output,
    /// Dominated by the Day Element (jaeseong).
    Wealth,
    /// Dominates the Day Element (gwanseong).
    Authority,
    /// Generates the Day Element (inseong).
    Resource,
}

/// All 5 relations in group order.
pub const ALL_RELATIONS: [Relation; 5] = [
    Relation::Same,
    Relation::Output,
    Relation::Wealth,
    Relation::Authority,
    Relation::Resource,
];

impl Relation {
    /// 0-based index into ALL_RELATIONS.
    pub const fn index(self) -> u8 {
        match self {
            Self::Same => 0,
            Self::Output => 1,
            Self::Wealth => 2,
            Self::Authority => 3,
            Self::Resource => 4,
        }
    }

    /// Friendly relations strengthen the Day Element.
    pub const fn is_friendly(self) -> bool {
        matches!(self, Self::Same | Self::Resource)
    }

    /// Romanized name of the ten-god group.
    pub const fn group_name(self) -> &'static str {
        match self {
            Self::Same => "Bigeop",
            Self::Output => "Siksang",
            Self::Wealth => "Jaeseong",
            Self::Authority => "Gwanseong",
            Self::Resource => "Inseong",
        }
    }

    /// English name of the ten-god group.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Same => "Companion",
            Self::Output => "Output",
            Self::Wealth => "Wealth",
            Self::Authority => "Authority",
            Self::Resource => "Resource",
        }
    }
}

/// Immutable lookup tables shared by every component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementMap {
    stems: [StemAttributes; 10],
    branches: [BranchAttributes; 12],
    /// `saeng[e]` is the element generated by `e`.
    saeng: [Element; 5],
    /// `geuk[e]` is the element dominated by `e`.
    geuk: [Element; 5],
    /// `saeng_inv[e]` generates `e`.
    saeng_inv: [Element; 5],
    /// `geuk_inv[e]` dominates `e`.
    geuk_inv: [Element; 5],
}

const fn stem_attr(element: Element, polarity: Polarity) -> StemAttributes {
    StemAttributes { element, polarity }
}

const fn branch_attr(
    element: Element,
    polarity: Polarity,
    functional_polarity: Polarity,
) -> BranchAttributes {
    BranchAttributes {
        element,
        polarity,
        functional_polarity,
    }
}

/// The standard element tables.
pub static STANDARD_ELEMENT_MAP: ElementMap = ElementMap::STANDARD;

impl ElementMap {
    pub const STANDARD: ElementMap = {
        use Element::*;
        use Polarity::*;
        ElementMap {
            stems: [
                stem_attr(Wood, Yang),  // 甲
                stem_attr(Wood, Yin),   // 乙
                stem_attr(Fire, Yang),  // 丙
                stem_attr(Fire, Yin),   // 丁
                stem_attr(Earth, Yang), // 戊
                stem_attr(Earth, Yin),  // 己
                stem_attr(Metal, Yang), // 庚
                stem_attr(Metal, Yin),  // 辛
                stem_attr(Water, Yang), // 壬
                stem_attr(Water, Yin),  // 癸
            ],
            branches: [
                branch_attr(Water, Yang, Yin),  // 子
                branch_attr(Earth, Yin, Yin),   // 丑
                branch_attr(Wood, Yang, Yang),  // 寅
                branch_attr(Wood, Yin, Yin),    // 卯
                branch_attr(Earth, Yang, Yang), // 辰
                branch_attr(Fire, Yin, Yang),   // 巳
                branch_attr(Fire, Yang, Yin),   // 午
                branch_attr(Earth, Yin, Yin),   // 未
                branch_attr(Metal, Yang, Yang), // 申
                branch_attr(Metal, Yin, Yin),   // 酉
                branch_attr(Earth, Yang, Yang), // 戌
                branch_attr(Water, Yin, Yang),  // 亥
            ],
            saeng: [Fire, Earth, Metal, Water, Wood],
            geuk: [Earth, Metal, Water, Wood, Fire],
            saeng_inv: [Water, Wood, Fire, Earth, Metal],
            geuk_inv: [Metal, Water, Wood, Fire, Earth],
        }
    };

    /// The process-wide standard map.
    pub fn standard() -> &'static ElementMap {
        &STANDARD_ELEMENT_MAP
    }

    pub const fn stem(&self, stem: Stem) -> StemAttributes {
        self.stems[stem.index() as usize]
    }

    pub const fn branch(&self, branch: Branch) -> BranchAttributes {
        self.branches[branch.index() as usize]
    }

    pub const fn stem_element(&self, stem: Stem) -> Element {
        self.stem(stem).element
    }

    pub const fn branch_element(&self, branch: Branch) -> Element {
        self.branch(branch).element
    }

    /// Element generated by `element` (Saeng).
    pub const fn generates(&self, element: Element) -> Element {
        self.saeng[element.index() as usize]
    }

    /// Element dominated by `element` (Geuk).
    pub const fn dominates(&self, element: Element) -> Element {
        self.geuk[element.index() as usize]
    }

    /// Element that generates `element`.
    pub const fn generated_by(&self, element: Element) -> Element {
        self.saeng_inv[element.index() as usize]
    }

    /// Element that dominates `element`.
    pub const fn dominated_by(&self, element: Element) -> Element {
        self.geuk_inv[element.index() as usize]
    }

    /// Relation of `other` to the Day Element `day`.
    ///
    /// The two cycles are complementary 5-cycles, so every ordered pair of
    /// elements falls into exactly one relation.
    pub fn relation(&self, day: Element, other: Element) -> Relation {
        if other == day {
            Relation::Same
        } else if self.generates(day) == other {
            Relation::Output
        } else if self.dominates(day) == other {
            Relation::Wealth
        } else if self.dominates(other) == day {
            Relation::Authority
        } else {
            Relation::Resource
        }
    }

    /// True when `other` is the Day Element or generates it.
    pub fn is_friendly(&self, day: Element, other: Element) -> bool {
        self.relation(day, other).is_friendly()
    }

    /// Element whose relation to `day` is `relation`.
    pub fn element_for(&self, day: Element, relation: Relation) -> Element {
        match relation {
            Relation::Same => day,
            Relation::Output => self.generates(day),
            Relation::Wealth => self.dominates(day),
            Relation::Authority => self.dominated_by(day),
            Relation::Resource => self.generated_by(day),
        }
    }
}

impl Default for ElementMap {
    fn default() -> Self {
        Self::STANDARD
    }
}
