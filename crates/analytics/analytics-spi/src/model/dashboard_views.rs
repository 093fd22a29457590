//! Everything the presentation layer needs for one selection.

use serde::{Deserialize, Serialize};

use super::{DateTotal, ForecastSeries, Kpis, MonthlyMean, RegionTotal, RegressionPoint};
use crate::error::AnalyticsError;

/// Views recomputed from scratch on every selection change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardViews {
    pub kpis: Kpis,
    /// Ascending by date
    pub by_date: Vec<DateTotal>,
    /// Ascending by total
    pub by_region: Vec<RegionTotal>,
    /// Always twelve entries, January first
    pub monthly_mean: Vec<MonthlyMean>,
    pub regression: Vec<RegressionPoint>,
    /// `Err` when the selection has too little history to fit a line
    pub forecast: Result<ForecastSeries, AnalyticsError>,
}

impl DashboardViews {
    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }

    pub fn forecast_series(&self) -> Option<&ForecastSeries> {
        self.forecast.as_ref().ok()
    }
}
