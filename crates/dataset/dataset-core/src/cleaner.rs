//! Derivation of clean records from raw ones.
//!
//! A raw record survives only if every derived field can be produced:
//!
//! - governorate: last path segment after `/resource/` in `ref_area`,
//!   underscores replaced by spaces
//! - year: first four-digit run in `ref_period`
//! - month: the two digits right before a `-YYYY` token in `ref_period`
//! - date: first day of that year and month
//! - cases: non-null
//!
//! Nothing is imputed. Dropped rows are only visible in debug logs and in
//! lower totals.

use chrono::NaiveDate;
use regex::Regex;
use tracing::{debug, info};

use dataset_spi::{CleanRecord, CleanTable, DatasetError, RawRecord, Result};

const AREA_PATTERN: &str = r"/resource/([^/]+)$";
const YEAR_PATTERN: &str = r"([0-9]{4})";
const MONTH_PATTERN: &str = r"([0-9]{2})-[0-9]{4}";

/// Why a raw record was excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReason {
    MissingCases,
    UnmatchedArea,
    MissingYear,
    MissingMonth,
    InvalidDate,
}

impl DropReason {
    pub fn describe(self) -> &'static str {
        match self {
            DropReason::MissingCases => "case count is null",
            DropReason::UnmatchedArea => "area is not a resource URL",
            DropReason::MissingYear => "period has no four-digit year",
            DropReason::MissingMonth => "period has no MM-YYYY token",
            DropReason::InvalidDate => "year/month is not a calendar month",
        }
    }
}

/// Compiled extraction patterns.
#[derive(Debug, Clone)]
pub struct RecordCleaner {
    area: Regex,
    year: Regex,
    month: Regex,
}

impl RecordCleaner {
    pub fn new() -> Result<Self> {
        let compile =
            |pattern: &str| Regex::new(pattern).map_err(|e| DatasetError::InvalidPattern(e.to_string()));
        Ok(Self {
            area: compile(AREA_PATTERN)?,
            year: compile(YEAR_PATTERN)?,
            month: compile(MONTH_PATTERN)?,
        })
    }

    /// Region name encoded in a resource URL.
    pub fn governorate(&self, ref_area: &str) -> Option<String> {
        self.area
            .captures(ref_area)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().replace('_', " "))
    }

    /// First four-digit run.
    pub fn year(&self, ref_period: &str) -> Option<i32> {
        self.year
            .captures(ref_period)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Two digits preceding the first `-YYYY` token.
    pub fn month(&self, ref_period: &str) -> Option<u32> {
        self.month
            .captures(ref_period)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Derive one clean record, or say why it cannot be derived.
    pub fn clean_record(&self, raw: &RawRecord) -> std::result::Result<CleanRecord, DropReason> {
        let cases = raw.cases.ok_or(DropReason::MissingCases)?;
        let governorate = self
            .governorate(&raw.ref_area)
            .ok_or(DropReason::UnmatchedArea)?;
        let year = self.year(&raw.ref_period).ok_or(DropReason::MissingYear)?;
        let month = self.month(&raw.ref_period).ok_or(DropReason::MissingMonth)?;
        if year < 1 {
            return Err(DropReason::InvalidDate);
        }
        let date = NaiveDate::from_ymd_opt(year, month, 1).ok_or(DropReason::InvalidDate)?;

        Ok(CleanRecord::new(date, governorate, cases))
    }

    /// Clean a whole record set, keeping source order.
    pub fn clean(&self, raws: &[RawRecord]) -> CleanTable {
        let mut dropped = 0usize;
        let table: CleanTable = raws
            .iter()
            .enumerate()
            .filter_map(|(row, raw)| match self.clean_record(raw) {
                Ok(record) => Some(record),
                Err(reason) => {
                    dropped += 1;
                    debug!(row, reason = reason.describe(), area = %raw.ref_area, period = %raw.ref_period, "dropping record");
                    None
                }
            })
            .collect();

        info!(read = raws.len(), kept = table.len(), dropped, "cleaned dataset");
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEIRUT: &str = "http://linked.aub.edu.lb/pkgcube/resource/Beirut";

    fn cleaner() -> RecordCleaner {
        RecordCleaner::new().unwrap()
    }

    #[test]
    fn test_governorate_from_resource_url() {
        let c = cleaner();
        assert_eq!(c.governorate(BEIRUT).as_deref(), Some("Beirut"));
        assert_eq!(
            c.governorate("http://x/resource/Mount_Lebanon").as_deref(),
            Some("Mount Lebanon")
        );
    }

    #[test]
    fn test_governorate_rejects_non_resource_strings() {
        let c = cleaner();
        assert_eq!(c.governorate("badformat"), None);
        assert_eq!(c.governorate("http://x/resource/"), None);
        assert_eq!(c.governorate("http://x/resource/Beirut/"), None);
        assert_eq!(c.governorate("http://x/page/Beirut"), None);
    }

    #[test]
    fn test_year_and_month_extraction() {
        let c = cleaner();
        assert_eq!(c.year("01-2020"), Some(2020));
        assert_eq!(c.month("01-2020"), Some(1));
        assert_eq!(c.year("http://x/period/11-2017"), Some(2017));
        assert_eq!(c.month("http://x/period/11-2017"), Some(11));
        assert_eq!(c.month("2020"), None);
        assert_eq!(c.year("01-20"), None);
    }

    #[test]
    fn test_clean_record_scenario() {
        let raw = RawRecord::new(BEIRUT, "02-2020", Some(20.0));
        let record = cleaner().clean_record(&raw).unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2020, 2, 1).unwrap());
        assert_eq!(record.year, "2020");
        assert_eq!(record.month, "02");
        assert_eq!(record.governorate, "Beirut");
        assert_eq!(record.cases, 20.0);
    }

    #[test]
    fn test_drop_reasons() {
        let c = cleaner();
        let cases = [
            (RawRecord::new(BEIRUT, "01-2020", None), DropReason::MissingCases),
            (RawRecord::new("badformat", "01-2020", Some(1.0)), DropReason::UnmatchedArea),
            (RawRecord::new(BEIRUT, "January", Some(1.0)), DropReason::MissingYear),
            (RawRecord::new(BEIRUT, "2020", Some(1.0)), DropReason::MissingMonth),
            (RawRecord::new(BEIRUT, "13-2020", Some(1.0)), DropReason::InvalidDate),
            (RawRecord::new(BEIRUT, "00-2020", Some(1.0)), DropReason::InvalidDate),
        ];

        for (raw, expected) in cases {
            assert_eq!(c.clean_record(&raw).unwrap_err(), expected, "{raw:?}");
        }
    }

    #[test]
    fn test_clean_keeps_source_order_and_drops_invalid() {
        let raws = vec![
            RawRecord::new(BEIRUT, "02-2020", Some(20.0)),
            RawRecord::new("badformat", "01-2020", Some(5.0)),
            RawRecord::new(BEIRUT, "01-2020", Some(10.0)),
            RawRecord::new(BEIRUT, "03-2020", None),
        ];
        let table = cleaner().clean(&raws);

        assert_eq!(table.len(), 2);
        assert_eq!(table.records()[0].month, "02");
        assert_eq!(table.records()[1].month, "01");
    }

    #[test]
    fn test_clean_is_deterministic() {
        let raws = vec![
            RawRecord::new(BEIRUT, "02-2020", Some(20.0)),
            RawRecord::new("http://x/resource/North", "07-2019", Some(3.0)),
        ];
        let c = cleaner();
        assert_eq!(c.clean(&raws), c.clean(&raws));
    }
}
