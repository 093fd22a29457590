//! Cached clean table with an explicit reload hook.

use std::sync::Arc;

use tracing::{info, warn};

use dataset_spi::{CleanTable, RecordSource, Result, SourceFingerprint};

use crate::cleaner::RecordCleaner;

/// Owns the cleaned dataset for the lifetime of a session.
///
/// The source is read and cleaned once in [`CaseRepository::open`]. Later
/// calls to [`CaseRepository::table`] reuse that result until
/// [`CaseRepository::reload`] is called.
pub struct CaseRepository {
    source: Box<dyn RecordSource>,
    cleaner: RecordCleaner,
    table: Arc<CleanTable>,
    fingerprint: Option<SourceFingerprint>,
    raw_count: usize,
}

impl CaseRepository {
    /// Read and clean `source`. Any failure is fatal to the caller.
    pub fn open(source: impl RecordSource + 'static) -> Result<Self> {
        let cleaner = RecordCleaner::new()?;
        let source: Box<dyn RecordSource> = Box::new(source);
        let (table, fingerprint, raw_count) = Self::load(source.as_ref(), &cleaner)?;

        Ok(Self {
            source,
            cleaner,
            table: Arc::new(table),
            fingerprint,
            raw_count,
        })
    }

    fn load(
        source: &dyn RecordSource,
        cleaner: &RecordCleaner,
    ) -> Result<(CleanTable, Option<SourceFingerprint>, usize)> {
        let fingerprint = source.fingerprint()?;
        let raws = source.read_records()?;
        let table = cleaner.clean(&raws);
        info!(source = source.name(), rows = table.len(), "loaded dataset");
        Ok((table, fingerprint, raws.len()))
    }

    /// The cached clean table.
    pub fn table(&self) -> Arc<CleanTable> {
        Arc::clone(&self.table)
    }

    pub fn source_name(&self) -> &str {
        self.source.name()
    }

    /// Raw rows read at the last load, before cleaning.
    pub fn raw_count(&self) -> usize {
        self.raw_count
    }

    /// Raw rows excluded by the cleaner at the last load.
    pub fn dropped_count(&self) -> usize {
        self.raw_count.saturating_sub(self.table.len())
    }

    /// Whether the source changed since the last load.
    pub fn is_stale(&self) -> Result<bool> {
        Ok(self.source.fingerprint()? != self.fingerprint)
    }

    /// Re-read the source unconditionally.
    ///
    /// On failure the previously loaded table stays in place.
    pub fn reload(&mut self) -> Result<Arc<CleanTable>> {
        match Self::load(self.source.as_ref(), &self.cleaner) {
            Ok((table, fingerprint, raw_count)) => {
                self.table = Arc::new(table);
                self.fingerprint = fingerprint;
                self.raw_count = raw_count;
                Ok(self.table())
            }
            Err(e) => {
                warn!(source = self.source.name(), error = %e, "reload failed, keeping previous table");
                Err(e)
            }
        }
    }

    /// Reload only when the source fingerprint changed. Returns whether a
    /// reload happened.
    pub fn reload_if_stale(&mut self) -> Result<bool> {
        if self.is_stale()? {
            self.reload()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl std::fmt::Debug for CaseRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseRepository")
            .field("source", &self.source.name())
            .field("rows", &self.table.len())
            .field("fingerprint", &self.fingerprint)
            .finish()
    }
}
