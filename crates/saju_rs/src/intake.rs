//! Consultation intake: the fields a client submits.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use saju_calendar::{BirthMoment, BirthTime};
use serde::{Deserialize, Serialize};

use crate::error::IntakeError;

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1950;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }

    pub const fn hangul(self) -> &'static str {
        match self {
            Self::Female => "여성",
            Self::Male => "남성",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "여성" => Ok(Self::Female),
            "남성" => Ok(Self::Male),
            other => match other.to_ascii_lowercase().as_str() {
                "female" | "f" => Ok(Self::Female),
                "male" | "m" => Ok(Self::Male),
                _ => Err(format!("unknown gender: {other}")),
            },
        }
    }
}

/// A submitted consultation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub nickname: String,
    pub gender: Gender,
    pub birth_date: NaiveDate,
    pub birth_time: BirthTime,
    pub concern: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl BirthInput {
    /// Check the free-text fields and the birth moment.
    ///
    /// Field errors take precedence over calendar errors, in form order.
    pub fn validate(&self) -> Result<BirthMoment, IntakeError> {
        if self.nickname.trim().is_empty() {
            return Err(IntakeError::EmptyNickname);
        }
        let year = self.birth_date.year();
        if year < MIN_BIRTH_YEAR {
            return Err(IntakeError::YearBeforeMinimum {
                year,
                minimum: MIN_BIRTH_YEAR,
            });
        }
        let moment = BirthMoment::new(self.birth_date, self.birth_time)?;
        if self.concern.trim().is_empty() {
            return Err(IntakeError::EmptyConcern);
        }
        Ok(moment)
    }

    pub fn nickname(&self) -> &str {
        self.nickname.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_calendar::CalendarError;

    fn input() -> BirthInput {
        BirthInput {
            nickname: "길동이".into(),
            gender: Gender::Male,
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            birth_time: BirthTime::Known { hour: 10, minute: 30 },
            concern: "이직을 고민 중입니다.".into(),
            contact: None,
        }
    }

    #[test]
    fn valid_input() {
        let m = input().validate().unwrap();
        assert_eq!(m.time(), BirthTime::Known { hour: 10, minute: 30 });
    }

    #[test]
    fn blank_fields_rejected() {
        let mut i = input();
        i.nickname = "   ".into();
        assert_eq!(i.validate(), Err(IntakeError::EmptyNickname));

        let mut i = input();
        i.concern = "\n\t".into();
        assert_eq!(i.validate(), Err(IntakeError::EmptyConcern));
    }

    #[test]
    fn year_floor() {
        let mut i = input();
        i.birth_date = NaiveDate::from_ymd_opt(1949, 12, 31).unwrap();
        assert_eq!(
            i.validate(),
            Err(IntakeError::YearBeforeMinimum {
                year: 1949,
                minimum: 1950
            })
        );
        i.birth_date = NaiveDate::from_ymd_opt(1950, 1, 1).unwrap();
        assert!(i.validate().is_ok());
    }

    #[test]
    fn bad_time_rejected() {
        let mut i = input();
        i.birth_time = BirthTime::Known { hour: 25, minute: 0 };
        assert_eq!(
            i.validate(),
            Err(IntakeError::Calendar(CalendarError::InvalidHour(25)))
        );
    }

    #[test]
    fn gender_parsing() {
        assert_eq!("여성".parse::<Gender>(), Ok(Gender::Female));
        assert_eq!("MALE".parse::<Gender>(), Ok(Gender::Male));
        assert!("other".parse::<Gender>().is_err());
        assert_eq!(Gender::Female.hangul(), "여성");
    }
}
