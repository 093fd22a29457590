//! Forecast output types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of future months produced by every forecast.
pub const FORECAST_HORIZON: usize = 6;

/// Fitted line parameters, informational only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub n_observations: usize,
}

/// One predicted month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    pub ordinal: i64,
    /// May be negative, predictions are not clamped
    pub predicted: f64,
}

/// Future months following the latest observed month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    /// Latest historical month, where the forecast boundary is drawn
    pub last_observed: NaiveDate,
    pub points: Vec<ForecastPoint>,
    pub trend: TrendSummary,
}

impl ForecastSeries {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.points.iter().map(|p| p.date).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.predicted).collect()
    }
}

/// Whether a displayed point was observed or predicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Historical,
    Forecast,
}

/// One point of the combined history + forecast line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub cases: f64,
    pub kind: SeriesKind,
}
