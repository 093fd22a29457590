//! Forecaster trait

use crate::error::Result;
use crate::model::{ForecastSeries, OrdinalScale, RegressionPoint};

/// Extends a monthly regression series into the future.
pub trait Forecaster: Send + Sync {
    /// Forecaster name for display.
    fn name(&self) -> &str;

    /// Date encoding the `ordinal` field of `history` must use.
    fn scale(&self) -> OrdinalScale;

    /// Forecast the months following the last point of `history`.
    ///
    /// `history` must be ascending by date with one point per month.
    fn forecast(&self, history: &[RegressionPoint]) -> Result<ForecastSeries>;
}
