//! Dataset Consumer API
//!
//! Configuration types and builders for loading a case-count dataset.

pub mod config;

pub use config::{DatasetConfig, DatasetConfigBuilder, DEFAULT_DATA_FILE};
