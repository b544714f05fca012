use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::time;
use serde::{Deserialize, Serialize};

/// Field count of an accepted data line: year, month, day, departure time,
/// airtime. Lines with any other count are skipped, not rejected.
pub const RECORD_FIELDS: usize = 5;

/// The departure time field arrives quote-wrapped, one character each side.
const DEPTIME_WRAP: usize = 1;
/// The airtime field carries a three-character unit suffix, as in `090min`.
const AIRTIME_SUFFIX: usize = 3;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub airtime: u32,
}

impl FlightRecord {
    /// Parse one data line.
    ///
    /// `None` means the line does not split into exactly [`RECORD_FIELDS`]
    /// comma-separated fields and is to be dropped silently. A line of the
    /// right shape whose content does not parse is an error.
    pub fn from_line(line: &str) -> Option<Result<FlightRecord>> {
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != RECORD_FIELDS {
            return None;
        }
        Some(Self::from_fields(&fields))
    }

    fn from_fields(fields: &[&str]) -> Result<FlightRecord> {
        let deptime = strip_fixed(fields[3], DEPTIME_WRAP, DEPTIME_WRAP)
            .ok_or_else(|| parse_error("departure time", fields[3]))?;
        let hour_digits = deptime.get(..2).ok_or_else(|| parse_error("hour", deptime))?;
        let minute_digits = deptime.get(2..).ok_or_else(|| parse_error("minute", deptime))?;
        let airtime_digits = strip_fixed(fields[4], 0, AIRTIME_SUFFIX)
            .ok_or_else(|| parse_error("airtime", fields[4]))?;

        Ok(FlightRecord {
            year: parse_field("year", fields[0])?,
            month: parse_field("month", fields[1])?,
            day: parse_field("day", fields[2])?,
            hour: parse_field("hour", hour_digits)?,
            minute: parse_field("minute", minute_digits)?,
            airtime: parse_field("airtime", airtime_digits)?,
        })
    }

    /// The flown span: departure through departure plus airtime.
    pub fn interval(&self) -> Result<Interval> {
        let start = time::civil_minutes(self.year, self.month, self.day, self.hour, self.minute)?;
        Ok(Interval::new(start, start + i64::from(self.airtime)))
    }
}

/// Slice off exactly `lead` leading and `trail` trailing bytes. `None` when
/// the field is too short or a cut lands inside a multi-byte character.
fn strip_fixed(field: &str, lead: usize, trail: usize) -> Option<&str> {
    let end = field.len().checked_sub(trail)?;
    if end < lead {
        return None;
    }
    field.get(lead..end)
}

fn parse_field<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T> {
    value.parse().map_err(|_| parse_error(field, value))
}

fn parse_error(field: &'static str, value: &str) -> Error {
    Error::Parse {
        field,
        value: value.to_string(),
    }
}
