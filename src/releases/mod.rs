pub mod filter;
pub mod version;

use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredRelease {
    pub tag: String,
    pub date: NaiveDate,
}

impl fmt::Display for FilteredRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.tag, self.date.format("%Y-%m-%d"))
    }
}
