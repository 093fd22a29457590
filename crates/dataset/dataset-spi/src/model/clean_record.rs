//! Validated record ready for aggregation.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A fully derived row. Every field is present by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanRecord {
    /// First day of the reported month
    pub date: NaiveDate,
    /// Four-digit year, e.g. "2020"
    pub year: String,
    /// Two-digit month, e.g. "03"
    pub month: String,
    /// Region name with underscores replaced by spaces
    pub governorate: String,
    pub cases: f64,
}

impl CleanRecord {
    /// Build a record for the month containing `date`.
    ///
    /// The date is normalized to the first of its month and the `year` /
    /// `month` strings are derived from it.
    pub fn new(date: NaiveDate, governorate: impl Into<String>, cases: f64) -> Self {
        let date = date.with_day(1).unwrap_or(date);
        Self {
            year: format!("{:04}", date.year()),
            month: format!("{:02}", date.month()),
            date,
            governorate: governorate.into(),
            cases,
        }
    }

    /// Calendar month number, 1 through 12.
    pub fn month_number(&self) -> u32 {
        self.date.month()
    }
}
