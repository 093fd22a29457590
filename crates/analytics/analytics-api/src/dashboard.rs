//! Repository plus recompute: everything the UI needs.

use std::sync::Arc;
use std::time::Instant;

use analytics_core::{compute_views, LinearTrendForecaster};
use analytics_spi::{DashboardViews, Forecaster};
use dataset_facade::{
    filter_table, open_repository, CaseRepository, CleanTable, DatasetConfig, Result, Selection,
};
use tracing::debug;

use crate::config::ForecastConfig;

/// Owns the loaded dataset and the forecaster.
///
/// [`Dashboard::recompute`] is the only way views are produced. It reads the
/// cached table and never touches the source, so calling it on every filter
/// change is cheap. [`Dashboard::reload`] re-reads the source.
#[derive(Debug)]
pub struct Dashboard {
    repository: CaseRepository,
    forecaster: LinearTrendForecaster,
}

impl Dashboard {
    /// Load the dataset described by `dataset`. Load errors are returned
    /// as-is and should be treated as fatal.
    pub fn open(dataset: &DatasetConfig, forecast: ForecastConfig) -> Result<Self> {
        Ok(Self::from_repository(open_repository(dataset)?, forecast))
    }

    pub fn from_repository(repository: CaseRepository, forecast: ForecastConfig) -> Self {
        Self {
            repository,
            forecaster: LinearTrendForecaster::new(forecast.scale),
        }
    }

    /// The full cleaned table, unfiltered.
    pub fn table(&self) -> Arc<CleanTable> {
        self.repository.table()
    }

    pub fn repository(&self) -> &CaseRepository {
        &self.repository
    }

    pub fn forecaster(&self) -> &dyn Forecaster {
        &self.forecaster
    }

    pub fn source_name(&self) -> &str {
        self.repository.source_name()
    }

    /// Every year and governorate in the loaded table.
    pub fn default_selection(&self) -> Selection {
        Selection::all(&self.repository.table())
    }

    /// Filter, aggregate and forecast for `selection`.
    pub fn recompute(&self, selection: &Selection) -> DashboardViews {
        let started = Instant::now();
        let table = self.repository.table();
        let filtered = filter_table(&table, selection);
        let views = compute_views(&filtered, &self.forecaster);
        debug!(
            years = selection.years.len(),
            governorates = selection.governorates.len(),
            rows = filtered.len(),
            elapsed_us = started.elapsed().as_micros() as u64,
            "recomputed dashboard"
        );
        views
    }

    /// Re-read the source. The previous table stays loaded on error.
    pub fn reload(&mut self) -> Result<Arc<CleanTable>> {
        self.repository.reload()
    }

    /// Reload only if the source changed on disk.
    pub fn reload_if_stale(&mut self) -> Result<bool> {
        self.repository.reload_if_stale()
    }
}
