//! Dataset Facade
//!
//! Unified re-exports for the dataset module.
//!
//! This facade provides a single entry point for all dataset functionality:
//! - `dataset_spi` - Records, selection, errors and the source trait
//! - `dataset_api` - Configuration types and builders
//! - `dataset_core` - CSV source, cleaner, filter and repository
//!
//! # Example
//!
//! ```rust,ignore
//! use dataset_facade::{filter_table, open_repository, DatasetConfig, Selection};
//!
//! let repo = open_repository(&DatasetConfig::new("Dysentery_data.csv"))?;
//! let table = repo.table();
//! let beirut = filter_table(&table, &Selection::new(table.years(), ["Beirut"]));
//! println!("{} rows for Beirut", beirut.len());
//! ```

// Re-export everything from SPI
pub use dataset_spi::*;

// Re-export everything from API
pub use dataset_api::*;

// Re-export everything from Core
pub use dataset_core::{
    cleaner, csv_source, filter, memory_source, parse_cases, repository, filter_table,
    CaseRepository, CsvFileSource, DropReason, InMemorySource, RecordCleaner,
};

/// Open a repository over the CSV file described by `config`.
pub fn open_repository(config: &DatasetConfig) -> Result<CaseRepository> {
    CaseRepository::open(CsvFileSource::from_config(config))
}
