//! CSV file record source.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use dataset_api::DatasetConfig;
use dataset_spi::{
    ColumnMapping, DatasetError, RawRecord, RecordSource, Result, SourceFingerprint,
};

/// Reads raw records from a CSV file with a header row.
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
    columns: ColumnMapping,
    name: String,
}

impl CsvFileSource {
    /// Source with the default column names.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self::with_columns(path, ColumnMapping::default())
    }

    pub fn with_columns(path: impl AsRef<Path>, columns: ColumnMapping) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            name: path.display().to_string(),
            path,
            columns,
        }
    }

    pub fn from_config(config: &DatasetConfig) -> Self {
        Self::with_columns(&config.path, config.columns.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DatasetError::MissingColumn(name.to_string()))
    }
}

impl RecordSource for CsvFileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_records(&self) -> Result<Vec<RawRecord>> {
        let file = File::open(&self.path)
            .map_err(|e| DatasetError::FileNotFound(format!("{}: {}", self.path.display(), e)))?;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(BufReader::new(file));

        let headers = reader
            .headers()
            .map_err(|e| DatasetError::CsvError(e.to_string()))?
            .clone();

        let area_idx = Self::column_index(&headers, &self.columns.area)?;
        let period_idx = Self::column_index(&headers, &self.columns.period)?;
        let cases_idx = Self::column_index(&headers, &self.columns.cases)?;
        debug!(area_idx, period_idx, cases_idx, "resolved dataset columns");

        let mut records = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| DatasetError::CsvError(e.to_string()))?;
            // Short rows read as missing cells; long rows have no column to map to.
            if record.len() > headers.len() {
                let line = record.position().map_or(0, |p| p.line());
                return Err(DatasetError::CsvError(format!(
                    "line {line}: found {} fields, header has {}",
                    record.len(),
                    headers.len()
                )));
            }
            let field = |idx: usize| record.get(idx).unwrap_or_default();
            records.push(RawRecord::new(
                field(area_idx),
                field(period_idx),
                parse_cases(field(cases_idx)),
            ));
        }

        info!(source = %self.name, rows = records.len(), "read raw records");
        Ok(records)
    }

    fn fingerprint(&self) -> Result<Option<SourceFingerprint>> {
        let meta = fs::metadata(&self.path)
            .map_err(|e| DatasetError::FileNotFound(format!("{}: {}", self.path.display(), e)))?;
        Ok(Some(SourceFingerprint::new(meta.len(), meta.modified().ok())))
    }
}

/// Parse a case-count cell. Empty, non-numeric and non-finite cells are null.
pub fn parse_cases(field: &str) -> Option<f64> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cleaner::RecordCleaner;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(lines: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        file
    }

    #[test]
    fn test_parse_cases() {
        assert_eq!(parse_cases("12"), Some(12.0));
        assert_eq!(parse_cases(" 3.5 "), Some(3.5));
        assert_eq!(parse_cases(""), None);
        assert_eq!(parse_cases("NaN"), None);
        assert_eq!(parse_cases("inf"), None);
        assert_eq!(parse_cases("n/a"), None);
    }

    #[test]
    fn test_read_records() {
        let file = write_csv(&[
            "refArea,refPeriod,Number of cases,Other",
            "http://x/resource/Beirut,01-2020,10,a",
            "http://x/resource/Beirut,02-2020,,b",
        ]);

        let records = CsvFileSource::new(file.path()).read_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].ref_area, "http://x/resource/Beirut");
        assert_eq!(records[0].ref_period, "01-2020");
        assert_eq!(records[0].cases, Some(10.0));
        assert_eq!(records[1].cases, None);
    }

    #[test]
    fn test_columns_in_any_order() {
        let file = write_csv(&[
            "Number of cases,refPeriod,refArea",
            "7,05-2019,http://x/resource/North",
        ]);

        let records = CsvFileSource::new(file.path()).read_records().unwrap();
        assert_eq!(records[0], RawRecord::new("http://x/resource/North", "05-2019", Some(7.0)));
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = CsvFileSource::new("/nonexistent/cases.csv")
            .read_records()
            .unwrap_err();
        assert!(matches!(err, DatasetError::FileNotFound(_)));
    }

    #[test]
    fn test_missing_column_is_fatal() {
        let file = write_csv(&["refArea,refPeriod", "http://x/resource/Beirut,01-2020"]);
        let err = CsvFileSource::new(file.path()).read_records().unwrap_err();
        assert_eq!(err, DatasetError::MissingColumn("Number of cases".to_string()));
    }

    #[test]
    fn test_short_rows_read_as_missing_cells() {
        let file = write_csv(&[
            "refArea,refPeriod,Number of cases",
            "http://x/resource/Beirut,01-2020,10",
            "http://x/resource/Beirut,02-2020",
            "http://x/resource/North",
        ]);
        let records = CsvFileSource::new(file.path()).read_records().unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[1], RawRecord::new("http://x/resource/Beirut", "02-2020", None));
        assert_eq!(records[2], RawRecord::new("http://x/resource/North", "", None));

        let table = RecordCleaner::new().unwrap().clean(&records);
        assert_eq!(table.len(), 1);
        assert_eq!(table.records()[0].cases, 10.0);
    }

    #[test]
    fn test_long_rows_are_fatal() {
        let file = write_csv(&[
            "refArea,refPeriod,Number of cases",
            "http://x/resource/Beirut,01-2020,10,extra",
        ]);
        let err = CsvFileSource::new(file.path()).read_records().unwrap_err();
        assert!(matches!(err, DatasetError::CsvError(_)));
    }

    #[test]
    fn test_custom_columns() {
        let file = write_csv(&["area,period,cases", "http://x/resource/Akkar,12-2018,4"]);
        let columns = ColumnMapping {
            area: "area".to_string(),
            period: "period".to_string(),
            cases: "cases".to_string(),
        };

        let records = CsvFileSource::with_columns(file.path(), columns)
            .read_records()
            .unwrap();
        assert_eq!(records[0].cases, Some(4.0));
    }

    #[test]
    fn test_fingerprint_tracks_length() {
        let mut file = write_csv(&["refArea,refPeriod,Number of cases"]);
        let source = CsvFileSource::new(file.path());
        let before = source.fingerprint().unwrap().unwrap();

        writeln!(file, "http://x/resource/Beirut,01-2020,1").unwrap();
        file.flush().unwrap();
        let after = source.fingerprint().unwrap().unwrap();

        assert!(after.len > before.len);
    }
}
