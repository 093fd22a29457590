//! Analytics error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while fitting or forecasting.
///
/// None of these are fatal: the dashboard keeps rendering the other views
/// and reports the error in place of the forecast.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnalyticsError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model used before fitting
    #[error("Model must be fitted before prediction")]
    NotFitted,

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),
}

impl AnalyticsError {
    /// Whether this is the recoverable "not enough history" condition.
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, AnalyticsError::InsufficientData { .. })
    }
}
