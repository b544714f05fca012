//! Data preparation for temporal-join experiments over airline on-time data.
//!
//! Two batch tools share this library: `extract-flight-data` turns raw flight
//! record files into a sorted stream of `"start end"` minute intervals, and
//! `select-flight-days` generates a fixed ten-year sequence of whole-day
//! intervals in the same format. Both count minutes since the Unix epoch,
//! evaluated in UTC.

pub mod cli;
pub mod days;
pub mod error;
pub mod extract;
pub mod interval;
pub mod record;
pub mod time;

pub use error::{Error, Result};
pub use interval::Interval;
pub use time::Minutes;
