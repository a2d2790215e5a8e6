//! Birth date/time input to chart derivation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// Birth time of day, or unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BirthTime {
    Known { hour: u32, minute: u32 },
    Unknown,
}

impl BirthTime {
    pub const fn hour(&self) -> Option<u32> {
        match self {
            Self::Known { hour, .. } => Some(*hour),
            Self::Unknown => None,
        }
    }

    pub const fn is_known(&self) -> bool {
        matches!(self, Self::Known { .. })
    }
}

impl std::fmt::Display for BirthTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Known { hour, minute } => write!(f, "{hour:02}:{minute:02}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// A validated birth date and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BirthMoment {
    date: NaiveDate,
    time: BirthTime,
}

impl BirthMoment {
    /// Build a moment, rejecting out-of-range hours and minutes.
    pub fn new(date: NaiveDate, time: BirthTime) -> Result<Self, CalendarError> {
        if let BirthTime::Known { hour, minute } = time {
            if hour > 23 {
                return Err(CalendarError::InvalidHour(hour));
            }
            if minute > 59 {
                return Err(CalendarError::InvalidMinute(minute));
            }
        }
        Ok(Self { date, time })
    }

    /// Build a moment from calendar fields.
    pub fn from_ymd(year: i32, month: u32, day: u32, time: BirthTime) -> Result<Self, CalendarError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(CalendarError::InvalidDate { year, month, day })?;
        Self::new(date, time)
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub const fn time(&self) -> BirthTime {
        self.time
    }
}

impl std::fmt::Display for BirthMoment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_bad_hour() {
        let err = BirthMoment::from_ymd(1990, 5, 15, BirthTime::Known { hour: 24, minute: 0 });
        assert_eq!(err, Err(CalendarError::InvalidHour(24)));
    }

    #[test]
    fn rejects_bad_minute() {
        let err = BirthMoment::from_ymd(1990, 5, 15, BirthTime::Known { hour: 10, minute: 60 });
        assert_eq!(err, Err(CalendarError::InvalidMinute(60)));
    }

    #[test]
    fn rejects_bad_date() {
        let err = BirthMoment::from_ymd(1990, 2, 30, BirthTime::Unknown);
        assert!(matches!(err, Err(CalendarError::InvalidDate { month: 2, day: 30, .. })));
    }

    #[test]
    fn known_and_unknown_time() {
        let known = BirthTime::Known { hour: 23, minute: 15 };
        assert!(known.is_known());
        assert_eq!(known.hour(), Some(23));
        assert!(!BirthTime::Unknown.is_known());
        assert_eq!(BirthTime::Unknown.hour(), None);
    }

    #[test]
    fn display() {
        let m = BirthMoment::from_ymd(1990, 5, 15, BirthTime::Known { hour: 9, minute: 5 }).unwrap();
        assert_eq!(m.to_string(), "1990-05-15 09:05");
        let m = BirthMoment::from_ymd(1990, 5, 15, BirthTime::Unknown).unwrap();
        assert_eq!(m.to_string(), "1990-05-15 unknown");
    }
}
