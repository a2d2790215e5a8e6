//! Intake and facade error types.

use saju_calendar::CalendarError;
use saju_config::ConfigError;
use thiserror::Error;

/// Rejected intake fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IntakeError {
    #[error("nickname is empty")]
    EmptyNickname,
    #[error("concern is empty")]
    EmptyConcern,
    #[error("birth year {year} is before {minimum}")]
    YearBeforeMinimum { year: i32, minimum: i32 },
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Top-level error for the facade.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SajuError {
    #[error("invalid input: {0}")]
    Intake(#[from] IntakeError),
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
