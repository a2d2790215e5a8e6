//! Sexagenary calendar arithmetic for Four-Pillars charts.
//!
//! This crate provides:
//! - The 60-pair stem/branch cycle indexer with fixed year and day epochs
//! - Year/Month/Day/Hour pillar derivation from a birth date and hour
//! - The read-only [`Chart`] value consumed by the scoring engine

pub mod cycle;
pub mod derive;
pub mod error;
pub mod moment;
pub mod pillar;

pub use cycle::{
    ALL_SEXAGENARY, CYCLE_LENGTH, DAY_EPOCH_OFFSET, YEAR_EPOCH, cycle_position, pillar_at,
    sexagenary_cycle, sexagenary_index,
};
pub use derive::{
    SOLAR_MONTH_START_DAY, day_pillar, days_since_epoch, derive_chart, hour_pillar, hour_slot,
    month_pillar, solar_month, year_pillar,
};
pub use error::CalendarError;
pub use moment::{BirthMoment, BirthTime};
pub use pillar::{ALL_POSITIONS, Chart, Pillar, Position, UNKNOWN_PILLAR_LABEL};
