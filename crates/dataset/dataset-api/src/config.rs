//! Dataset configuration types.

use std::path::{Path, PathBuf};

use dataset_spi::ColumnMapping;
use serde::{Deserialize, Serialize};

/// File name used when no path is configured.
pub const DEFAULT_DATA_FILE: &str = "Dysentery_data.csv";

/// Where the dataset lives and which columns to read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Path of the CSV file
    pub path: PathBuf,
    /// Header names of the required columns
    #[serde(default)]
    pub columns: ColumnMapping,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

impl DatasetConfig {
    /// Create a configuration with the default column names.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            columns: ColumnMapping::default(),
        }
    }
}

/// Builder for DatasetConfig.
#[derive(Debug, Default)]
pub struct DatasetConfigBuilder {
    path: Option<PathBuf>,
    area_column: Option<String>,
    period_column: Option<String>,
    cases_column: Option<String>,
}

impl DatasetConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the CSV path.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Override the region column name.
    pub fn area_column(mut self, name: &str) -> Self {
        self.area_column = Some(name.to_string());
        self
    }

    /// Override the period column name.
    pub fn period_column(mut self, name: &str) -> Self {
        self.period_column = Some(name.to_string());
        self
    }

    /// Override the case-count column name.
    pub fn cases_column(mut self, name: &str) -> Self {
        self.cases_column = Some(name.to_string());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<DatasetConfig, &'static str> {
        let defaults = ColumnMapping::default();
        let columns = ColumnMapping {
            area: self.area_column.unwrap_or(defaults.area),
            period: self.period_column.unwrap_or(defaults.period),
            cases: self.cases_column.unwrap_or(defaults.cases),
        };
        if columns.area.is_empty() || columns.period.is_empty() || columns.cases.is_empty() {
            return Err("column names must not be empty");
        }

        Ok(DatasetConfig {
            path: self.path.ok_or("path is required")?,
            columns,
        })
    }
}
