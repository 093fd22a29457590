//! Fixed in-memory record source.

use dataset_spi::{RawRecord, RecordSource, Result};

/// Serves a fixed record set. Never stale.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    name: String,
    records: Vec<RawRecord>,
}

impl InMemorySource {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self::named("in-memory", records)
    }

    pub fn named(name: impl Into<String>, records: Vec<RawRecord>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

impl RecordSource for InMemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_records(&self) -> Result<Vec<RawRecord>> {
        Ok(self.records.clone())
    }
}
