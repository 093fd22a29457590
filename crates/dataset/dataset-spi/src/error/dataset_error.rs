//! Dataset error types.

use thiserror::Error;

/// Errors raised while loading a dataset.
///
/// All of these are fatal at startup. Row-level derivation failures are not
/// errors: those rows are dropped by the cleaner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    /// Source file missing or not openable
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// I/O failure after the file was opened
    #[error("Failed to read file: {0}")]
    ReadError(String),

    /// Malformed CSV content
    #[error("Failed to parse CSV: {0}")]
    CsvError(String),

    /// A required column is absent from the header row
    #[error("Missing required column '{0}'")]
    MissingColumn(String),

    /// An extraction pattern failed to compile
    #[error("Invalid extraction pattern: {0}")]
    InvalidPattern(String),
}
