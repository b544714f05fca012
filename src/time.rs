use crate::error::{Error, Result};
use chrono::{NaiveDate, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::ops::Add;

pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Minutes elapsed since the Unix epoch. Negative values reach before it.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Serialize, Deserialize, PartialOrd)]
pub struct Minutes(pub i64);

impl std::fmt::Display for Minutes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<i64> for Minutes {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        Minutes(self.0 + rhs)
    }
}

/// Absolute minute count for the given civil fields, evaluated in UTC.
///
/// Out-of-range components normalize arithmetically instead of erroring:
/// month 13 rolls into January of the next year, day 0 into the last day of
/// the previous month, hour 24 into the next day. `InvalidDate` only fires
/// when the normalized date leaves the supported year range.
pub fn civil_minutes(year: i32, month: i32, day: i32, hour: i32, minute: i32) -> Result<Minutes> {
    let invalid = || Error::InvalidDate { year, month, day };

    // fold the month into the year so the calendar sees 1..=12
    let months = i64::from(year) * 12 + i64::from(month) - 1;
    let folded_year = i32::try_from(months.div_euclid(12)).map_err(|_| invalid())?;
    let folded_month = months.rem_euclid(12) as u32 + 1;

    let date = NaiveDate::from_ymd_opt(folded_year, folded_month, 1)
        .ok_or_else(invalid)?
        .checked_add_signed(TimeDelta::days(i64::from(day) - 1))
        .ok_or_else(invalid)?;

    // a UTC day start is always a whole number of minutes
    let day_start = date.and_time(NaiveTime::MIN).and_utc().timestamp() / 60;
    Ok(Minutes(day_start + i64::from(hour) * 60 + i64::from(minute)))
}
