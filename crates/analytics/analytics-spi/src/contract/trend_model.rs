//! Trend model trait

use crate::error::Result;

/// A model of `y` as a function of a numeric coordinate `x`.
///
/// Follows a fit-predict pattern: [`TrendModel::fit`] must succeed before
/// [`TrendModel::predict_at`] returns values.
pub trait TrendModel {
    /// Fit the model to paired observations.
    ///
    /// # Arguments
    ///
    /// * `x` - Independent coordinates
    /// * `y` - Observed values, same length as `x`
    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()>;

    /// Evaluate the fitted model at `x`.
    fn predict_at(&self, x: f64) -> Result<f64>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
