//! Dataset Core
//!
//! Implementations for loading and preparing a case-count dataset:
//! record sources, the cleaner, the filter stage and the caching repository.

pub mod cleaner;
pub mod csv_source;
pub mod filter;
pub mod memory_source;
pub mod repository;

// Re-export SPI types for implementations
pub use dataset_spi::{
    CleanRecord, CleanTable, ColumnMapping, DatasetError, RawRecord, RecordSource, Result,
    Selection, SourceFingerprint,
};

// Re-export main types
pub use cleaner::{DropReason, RecordCleaner};
pub use csv_source::{parse_cases, CsvFileSource};
pub use filter::filter_table;
pub use memory_source::InMemorySource;
pub use repository::CaseRepository;
