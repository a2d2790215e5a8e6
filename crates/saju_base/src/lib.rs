//! Symbol and element tables for Four-Pillars (saju) charts.
//!
//! This crate provides:
//! - The 10 heavenly stems and 12 earthly branches
//! - The five elements, polarity, and the Saeng/Geuk cycles
//! - Ten-god classification against a Day Stem
//!
//! Everything here is static data plus lookups; no calendar arithmetic.

pub mod branch;
pub mod element;
pub mod element_map;
pub mod error;
pub mod stem;
pub mod ten_god;

pub use branch::{ALL_BRANCHES, Branch};
pub use element::{ALL_ELEMENTS, Element, Polarity};
pub use element_map::{
    ALL_RELATIONS, BranchAttributes, ElementMap, Relation, STANDARD_ELEMENT_MAP, StemAttributes,
};
pub use error::SymbolError;
pub use stem::{ALL_STEMS, Stem};
pub use ten_god::{
    ALL_TEN_GODS, TenGod, TenGodGroups, branch_ten_god, stem_ten_god, ten_god,
};
