//! Convenience facade over the saju crates.
//!
//! Takes a consultation intake (nickname, gender, birth date and time,
//! concern), validates it, derives the Four Pillars, scores them and returns
//! a serializable [`Reading`].
//!
//! # Quick start
//!
//! ```rust,ignore
//! use saju_rs::*;
//!
//! let input = BirthInput {
//!     nickname: "길동이".into(),
//!     gender: Gender::Male,
//!     birth_date: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
//!     birth_time: BirthTime::Known { hour: 10, minute: 30 },
//!     concern: "이직".into(),
//!     contact: None,
//! };
//! let reading = read(&input, &RuleSet::default()).unwrap();
//! println!("{}", reading.to_text());
//! ```

pub mod convenience;
pub mod error;
pub mod intake;
pub mod reading;

pub use convenience::{
    SymbolKind, branch_category, chart, evaluate, read, read_with_config, stem_category,
    symbol_category,
};
pub use error::{IntakeError, SajuError};
pub use intake::{BirthInput, Gender, MIN_BIRTH_YEAR};
pub use reading::{ElementTotals, GroupSummary, PillarLabels, Reading, RuleSetInfo};

// Re-export the types callers need so they don't depend on the inner crates.
pub use chrono::NaiveDate;
pub use saju_base::{Branch, Element, Stem, SymbolError, TenGod};
pub use saju_calendar::{BirthMoment, BirthTime, CalendarError, Chart, Pillar};
pub use saju_config::{ConfigError, RuleSource, load_rules, resolve_rules};
pub use saju_engine::{Evaluation, RulePreset, RuleSet, StrengthBand};
