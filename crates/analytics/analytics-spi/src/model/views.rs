//! Aggregate views over a filtered table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::CalendarMonth;

/// Total cases for one month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DateTotal {
    pub date: NaiveDate,
    pub cases: f64,
}

/// Total cases for one governorate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionTotal {
    pub governorate: String,
    pub cases: f64,
}

/// Mean cases for one calendar month across years and governorates.
///
/// `mean` is `None` when no row falls in that month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyMean {
    pub month: CalendarMonth,
    pub mean: Option<f64>,
}

/// A by-date total paired with its regression coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionPoint {
    pub date: NaiveDate,
    pub ordinal: i64,
    pub cases: f64,
}
