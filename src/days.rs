use crate::error::Result;
use crate::interval::Interval;
use crate::time::{self, MINUTES_PER_DAY};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// First month of the generated range.
pub const RANGE_START: YearMonth = YearMonth { year: 2007, month: 7 };
/// Last month of the generated range, inclusive.
pub const RANGE_END: YearMonth = YearMonth { year: 2017, month: 6 };
/// Day of month every generated interval covers.
pub const SAMPLE_DAY: i32 = 7;

#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Serialize, Deserialize, PartialOrd)]
pub struct YearMonth {
    pub year: i32,
    pub month: i32,
}

/// The months from `from` through `to` inclusive, in chronological order.
pub fn months(from: YearMonth, to: YearMonth) -> impl Iterator<Item = YearMonth> {
    std::iter::successors(Some(from), |ym| {
        Some(match ym.month {
            12 => YearMonth {
                year: ym.year.checked_add(1)?,
                month: 1,
            },
            m => YearMonth {
                year: ym.year,
                month: m + 1,
            },
        })
    })
    .take_while(move |ym| *ym <= to)
}

/// Write one whole-day interval per month of the fixed range to `out`, in
/// generation order, then the interval count to `diag`. Month-on-month the
/// sample day only moves forward, so the output is already sorted.
pub fn run(mut out: impl Write, mut diag: impl Write) -> Result<()> {
    let mut count = 0usize;
    for ym in months(RANGE_START, RANGE_END) {
        let start = time::civil_minutes(ym.year, ym.month, SAMPLE_DAY, 0, 0)?;
        writeln!(out, "{}", Interval::new(start, start + MINUTES_PER_DAY))?;
        count += 1;
    }
    writeln!(diag, "{count}")?;
    Ok(())
}
