//! Year, Month, Day and Hour pillar derivation.
//!
//! All four derivations are fixed offset arithmetic over the sexagenary
//! cycle:
//! - Year: (year − 1984) mod 60.
//! - Month: solar month approximated by "day-of-month < 6 belongs to the
//!   previous month"; 寅 (Tiger) is the first solar month (February). Stem
//!   from the year stem: start = (year_stem mod 5) × 2 + 2.
//! - Day: (10 + days since 1900-01-01) mod 60.
//! - Hour: 12 two-hour slots from 23:00; stem from the day stem:
//!   start = (day_stem mod 5) × 2.
//!
//! The month boundary is an approximation of the solar terms and can be off
//! by a few days near the start of each month.

use chrono::{Datelike, NaiveDate};
use saju_base::Branch;

use crate::cycle::{
    CYCLE_LENGTH, DAY_EPOCH_DAYS_FROM_CE, DAY_EPOCH_OFFSET, YEAR_EPOCH, sexagenary_index,
};
use crate::error::CalendarError;
use crate::moment::BirthMoment;
use crate::pillar::{Chart, Pillar};

/// Days before this day-of-month belong to the previous solar month.
pub const SOLAR_MONTH_START_DAY: u32 = 6;

/// Calendar month of the first solar month (寅).
const FIRST_SOLAR_MONTH: i64 = 2;

/// Year pillar for a CE year.
pub const fn year_pillar(year: i32) -> Pillar {
    let offset = (year as i64 - YEAR_EPOCH as i64).rem_euclid(CYCLE_LENGTH);
    sexagenary_index(offset, offset)
}

/// Calendar month (1-12) after the day-of-month boundary shift.
pub fn solar_month(date: NaiveDate) -> u32 {
    let month = date.month();
    if date.day() < SOLAR_MONTH_START_DAY {
        if month == 1 { 12 } else { month - 1 }
    } else {
        month
    }
}

/// Offset of a date's solar month from the 寅 month (0..12).
pub fn month_offset(date: NaiveDate) -> i64 {
    (solar_month(date) as i64 - FIRST_SOLAR_MONTH).rem_euclid(12)
}

/// Month pillar, stem derived from the year stem.
pub fn month_pillar(year_pillar: Pillar, date: NaiveDate) -> Pillar {
    let offset = month_offset(date);
    let start_stem = (year_pillar.stem.index() as i64 % 5) * 2 + 2;
    sexagenary_index(start_stem + offset, Branch::In.index() as i64 + offset)
}

/// Whole days from 1900-01-01 to `date`.
pub fn days_since_epoch(date: NaiveDate) -> Result<i64, CalendarError> {
    let days = date.num_days_from_ce() as i64 - DAY_EPOCH_DAYS_FROM_CE as i64;
    if days < 0 {
        return Err(CalendarError::BeforeEpoch { date });
    }
    Ok(days)
}

/// Day pillar for a date on or after 1900-01-01.
pub fn day_pillar(date: NaiveDate) -> Result<Pillar, CalendarError> {
    let offset = (DAY_EPOCH_OFFSET + days_since_epoch(date)?).rem_euclid(CYCLE_LENGTH);
    Ok(sexagenary_index(offset, offset))
}

/// Two-hour slot index (0 = 子, 23:00–00:59).
pub fn hour_slot(hour: u32) -> Result<u8, CalendarError> {
    if hour > 23 {
        return Err(CalendarError::InvalidHour(hour));
    }
    Ok((((hour + 1) / 2) % 12) as u8)
}

/// Hour pillar, stem derived from the day stem.
pub fn hour_pillar(day_pillar: Pillar, hour: u32) -> Result<Pillar, CalendarError> {
    let slot = hour_slot(hour)? as i64;
    let start_stem = (day_pillar.stem.index() as i64 % 5) * 2;
    Ok(sexagenary_index(start_stem + slot, slot))
}

/// Derive the full chart. An unknown birth time leaves the hour pillar absent.
pub fn derive_chart(moment: &BirthMoment) -> Result<Chart, CalendarError> {
    let date = moment.date();
    let year = year_pillar(date.year());
    let month = month_pillar(year, date);
    let day = day_pillar(date)?;
    let hour = match moment.time().hour() {
        Some(h) => Some(hour_pillar(day, h)?),
        None => None,
    };
    let chart = Chart::new(year, month, day, hour);
    tracing::trace!(%moment, %chart, "derived chart");
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use saju_base::Stem;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_year_is_gap_ja() {
        assert_eq!(year_pillar(1984), Pillar::new(Stem::Gap, Branch::Ja));
    }

    #[test]
    fn year_before_epoch() {
        // 1983: offset 59 → 癸亥
        assert_eq!(year_pillar(1983), Pillar::new(Stem::Gye, Branch::Hae));
    }

    #[test]
    fn year_2024_is_gap_jin() {
        assert_eq!(year_pillar(2024), Pillar::new(Stem::Gap, Branch::Jin));
    }

    #[test]
    fn day_epoch_is_gap_sul() {
        assert_eq!(day_pillar(date(1900, 1, 1)).unwrap(), Pillar::new(Stem::Gap, Branch::Sul));
    }

    #[test]
    fn day_before_epoch_rejected() {
        let d = date(1899, 12, 31);
        assert_eq!(day_pillar(d), Err(CalendarError::BeforeEpoch { date: d }));
    }

    #[test]
    fn solar_month_boundary() {
        assert_eq!(solar_month(date(1990, 5, 5)), 4);
        assert_eq!(solar_month(date(1990, 5, 6)), 5);
        assert_eq!(solar_month(date(1990, 1, 3)), 12);
    }

    #[test]
    fn tiger_month_for_gap_year() {
        // 甲 year: first solar month is 丙寅
        let y = year_pillar(1984);
        assert_eq!(month_pillar(y, date(1984, 2, 10)), Pillar::new(Stem::Byeong, Branch::In));
        // and the last (January) is 丁丑
        assert_eq!(month_pillar(y, date(1984, 1, 20)), Pillar::new(Stem::Jeong, Branch::Chuk));
    }

    #[test]
    fn early_day_rolls_back_a_month() {
        // 1990 (庚): 05-05 is still the 辰 month → 庚辰
        let y = year_pillar(1990);
        assert_eq!(month_pillar(y, date(1990, 5, 5)), Pillar::new(Stem::Gyeong, Branch::Jin));
        // 01-03 rolls back to December → 戊子
        assert_eq!(month_pillar(y, date(1990, 1, 3)), Pillar::new(Stem::Mu, Branch::Ja));
    }

    #[test]
    fn hour_slots() {
        assert_eq!(hour_slot(23).unwrap(), 0);
        assert_eq!(hour_slot(0).unwrap(), 0);
        assert_eq!(hour_slot(1).unwrap(), 1);
        assert_eq!(hour_slot(2).unwrap(), 1);
        assert_eq!(hour_slot(22).unwrap(), 11);
        assert_eq!(hour_slot(24), Err(CalendarError::InvalidHour(24)));
    }

    #[test]
    fn hour_stem_from_day_stem() {
        let gap_day = Pillar::new(Stem::Gap, Branch::Ja);
        assert_eq!(hour_pillar(gap_day, 0).unwrap(), Pillar::new(Stem::Gap, Branch::Ja));
        let eul_day = Pillar::new(Stem::Eul, Branch::Chuk);
        assert_eq!(hour_pillar(eul_day, 23).unwrap(), Pillar::new(Stem::Byeong, Branch::Ja));
        // 己 shares the 甲 group
        let gi_day = Pillar::new(Stem::Gi, Branch::Sa);
        assert_eq!(hour_pillar(gi_day, 12).unwrap(), Pillar::new(Stem::Gyeong, Branch::O));
    }
}
