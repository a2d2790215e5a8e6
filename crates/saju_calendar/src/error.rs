//! Error types for calendar and pillar derivation.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from chart derivation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Day pillars are only defined from 1900-01-01 onwards.
    #[error("date {date} is before the 1900-01-01 day-cycle epoch")]
    BeforeEpoch { date: NaiveDate },
    #[error("hour {0} is outside 0-23")]
    InvalidHour(u32),
    #[error("minute {0} is outside 0-59")]
    InvalidMinute(u32),
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}
