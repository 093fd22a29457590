//! Dataset Service Provider Interface
//!
//! Defines the record types, errors and source contract for public-health
//! case-count datasets.
//!
//! - [`RawRecord`]: one reported observation as it appears in the source file
//! - [`CleanRecord`]: a validated, fully derived row ready for aggregation
//! - [`CleanTable`]: the cleaned dataset, in source order
//! - [`Selection`]: the user's year / governorate filter
//! - [`RecordSource`]: trait for anything that can supply raw records

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::RecordSource;
pub use error::{DatasetError, Result};
pub use model::{
    CleanRecord, CleanTable, ColumnMapping, RawRecord, Selection, SourceFingerprint,
};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(year: i32, month: u32, governorate: &str, cases: f64) -> CleanRecord {
        CleanRecord::new(
            NaiveDate::from_ymd_opt(year, month, 1).unwrap(),
            governorate,
            cases,
        )
    }

    #[test]
    fn test_clean_record_derives_year_and_month_strings() {
        let r = record(2020, 3, "Mount Lebanon", 4.0);
        assert_eq!(r.year, "2020");
        assert_eq!(r.month, "03");
        assert_eq!(r.governorate, "Mount Lebanon");
        assert_eq!(r.cases, 4.0);
    }

    #[test]
    fn test_table_lists_sorted_distinct_options() {
        let table = CleanTable::new(vec![
            record(2021, 1, "South", 1.0),
            record(2020, 1, "Beirut", 1.0),
            record(2021, 2, "Beirut", 1.0),
        ]);
        assert_eq!(table.years(), vec!["2020", "2021"]);
        assert_eq!(table.governorates(), vec!["Beirut", "South"]);
    }

    #[test]
    fn test_selection_all_matches_every_record() {
        let table = CleanTable::new(vec![
            record(2020, 1, "Beirut", 1.0),
            record(2021, 6, "North", 2.0),
        ]);
        let selection = Selection::all(&table);
        assert!(table.iter().all(|r| selection.matches(r)));
    }

    #[test]
    fn test_default_columns() {
        let columns = ColumnMapping::default();
        assert_eq!(columns.area, "refArea");
        assert_eq!(columns.period, "refPeriod");
        assert_eq!(columns.cases, "Number of cases");
    }
}
