use crate::time::Minutes;
use serde::{Deserialize, Serialize};

/// A span of absolute minutes. The derived ordering compares `start` first
/// and breaks ties on `end`, which is exactly the emission sort key.
#[derive(Debug, Clone, Copy, Ord, Eq, PartialEq, Serialize, Deserialize, PartialOrd)]
pub struct Interval {
    pub start: Minutes,
    pub end: Minutes,
}

impl Interval {
    pub fn new(start: Minutes, end: Minutes) -> Interval {
        Interval { start, end }
    }

    pub fn duration(&self) -> i64 {
        self.end.0 - self.start.0
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.start, self.end)
    }
}
