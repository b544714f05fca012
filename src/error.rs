use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Bad invocation, reported before any input is touched.
    #[error("usage: {0}")]
    Usage(String),

    /// An accepted record held content that does not parse as a number.
    /// Always fatal to the whole run.
    #[error("unparseable {field} field: {value:?}")]
    Parse { field: &'static str, value: String },

    /// Calendar fields normalized to a point outside the representable
    /// timeline.
    #[error("invalid date: year {year}, month {month}, day {day}")]
    InvalidDate { year: i32, month: i32, day: i32 },

    /// An input file could not be read.
    #[error("cannot read {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },

    #[error(transparent)]
    Io(#[from] io::Error),
}
