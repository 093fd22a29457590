//! Integer encodings of calendar dates used as regression coordinates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// How a date becomes the regression x coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrdinalScale {
    /// Months since year 0: `year * 12 + month - 1`. Consecutive months are
    /// exactly one unit apart.
    #[default]
    MonthIndex,
    /// Proleptic Gregorian day count with 0001-01-01 as day 1. Month steps
    /// vary between 28 and 31 units.
    ProlepticDay,
}

impl OrdinalScale {
    pub fn ordinal(self, date: NaiveDate) -> i64 {
        match self {
            OrdinalScale::MonthIndex => i64::from(date.year()) * 12 + i64::from(date.month0()),
            OrdinalScale::ProlepticDay => i64::from(date.num_days_from_ce()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OrdinalScale::MonthIndex => "month index",
            OrdinalScale::ProlepticDay => "proleptic day",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_index_steps_by_one() {
        let scale = OrdinalScale::MonthIndex;
        assert_eq!(scale.ordinal(date(2020, 2, 1)) - scale.ordinal(date(2020, 1, 1)), 1);
        assert_eq!(scale.ordinal(date(2021, 1, 1)) - scale.ordinal(date(2020, 12, 1)), 1);
    }

    #[test]
    fn test_proleptic_day_matches_day_count() {
        let scale = OrdinalScale::ProlepticDay;
        assert_eq!(scale.ordinal(date(1, 1, 1)), 1);
        assert_eq!(scale.ordinal(date(2020, 1, 1)), 737_425);
        assert_eq!(scale.ordinal(date(2020, 3, 1)) - scale.ordinal(date(2020, 2, 1)), 29);
    }

    #[test]
    fn test_default_is_month_index() {
        assert_eq!(OrdinalScale::default(), OrdinalScale::MonthIndex);
    }
}
