//! Linear trend by ordinary least squares
//!
//! Fits `y = intercept + slope * x` over arbitrary x coordinates. The sums
//! are taken around the mean of x so that large coordinates (day counts are
//! around 7e5) do not cancel out in the denominator.

use analytics_spi::{AnalyticsError, Result, TrendModel, TrendSummary};

/// OLS line over (x, y) pairs.
///
/// # Example
///
/// ```rust
/// use analytics_core::regression::LinearTrend;
/// use analytics_core::TrendModel;
///
/// let mut model = LinearTrend::new();
/// model.fit(&[1.0, 2.0, 3.0], &[10.0, 20.0, 30.0]).unwrap();
/// assert!((model.predict_at(4.0).unwrap() - 40.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearTrend {
    state: FitState,
}

/// Parameters of a fitted line.
#[derive(Debug, Clone, Copy, Default)]
enum FitState {
    #[default]
    Unfitted,
    Fitted {
        intercept: f64,
        slope: f64,
        r_squared: f64,
        n_observations: usize,
    },
}

impl LinearTrend {
    /// Create a new, unfitted model
    pub fn new() -> Self {
        Self::default()
    }

    /// Slope per unit of x, 0 before fitting
    pub fn slope(&self) -> f64 {
        self.summary().slope
    }

    /// Intercept at x = 0, 0 before fitting
    pub fn intercept(&self) -> f64 {
        self.summary().intercept
    }

    /// Coefficient of determination, 0 before fitting
    pub fn r_squared(&self) -> f64 {
        self.summary().r_squared
    }

    pub fn summary(&self) -> TrendSummary {
        match self.state {
            FitState::Unfitted => TrendSummary::default(),
            FitState::Fitted {
                intercept,
                slope,
                r_squared,
                n_observations,
            } => TrendSummary {
                slope,
                intercept,
                r_squared,
                n_observations,
            },
        }
    }
}

impl TrendModel for LinearTrend {
    fn fit(&mut self, x: &[f64], y: &[f64]) -> Result<()> {
        if x.len() != y.len() {
            return Err(AnalyticsError::InvalidParameter {
                name: "y".to_string(),
                reason: format!("expected {} values, got {}", x.len(), y.len()),
            });
        }
        if x.len() < 2 {
            return Err(AnalyticsError::InsufficientData {
                required: 2,
                actual: x.len(),
            });
        }
        if x.iter().chain(y).any(|v| !v.is_finite()) {
            return Err(AnalyticsError::NumericalError(
                "non-finite value in regression input".to_string(),
            ));
        }

        let n = x.len() as f64;
        let mean_x = x.iter().sum::<f64>() / n;
        let mean_y = y.iter().sum::<f64>() / n;

        let sxx: f64 = x.iter().map(|&xi| (xi - mean_x).powi(2)).sum();
        let sxy: f64 = x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
            .sum();

        if sxx.abs() < 1e-10 {
            return Err(AnalyticsError::NumericalError(
                "x coordinates are all equal".to_string(),
            ));
        }

        let slope = sxy / sxx;
        let intercept = mean_y - slope * mean_x;

        let ss_tot: f64 = y.iter().map(|&yi| (yi - mean_y).powi(2)).sum();
        let ss_res: f64 = x
            .iter()
            .zip(y)
            .map(|(&xi, &yi)| (yi - (intercept + slope * xi)).powi(2))
            .sum();
        let r_squared = if ss_tot > 1e-10 {
            1.0 - ss_res / ss_tot
        } else {
            1.0
        };

        self.state = FitState::Fitted {
            intercept,
            slope,
            r_squared,
            n_observations: x.len(),
        };
        Ok(())
    }

    fn predict_at(&self, x: f64) -> Result<f64> {
        match self.state {
            FitState::Unfitted => Err(AnalyticsError::NotFitted),
            FitState::Fitted {
                intercept, slope, ..
            } => Ok(intercept + slope * x),
        }
    }

    fn is_fitted(&self) -> bool {
        matches!(self.state, FitState::Fitted { .. })
    }
}
