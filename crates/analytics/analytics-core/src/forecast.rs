//! Monthly linear-trend forecaster.

use analytics_spi::{
    AnalyticsError, DateTotal, ForecastPoint, ForecastSeries, Forecaster, OrdinalScale, Result,
    RegressionPoint, SeriesKind, SeriesPoint, TrendModel, FORECAST_HORIZON,
};
use chrono::Months;
use tracing::debug;

use crate::regression::LinearTrend;

/// Minimum number of distinct months needed to fit a line.
const MIN_HISTORY: usize = 2;

/// Fits an OLS line through the monthly totals and extends it month by
/// month past the last observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearTrendForecaster {
    scale: OrdinalScale,
    horizon: usize,
}

impl Default for LinearTrendForecaster {
    fn default() -> Self {
        Self::new(OrdinalScale::default())
    }
}

impl LinearTrendForecaster {
    /// Forecaster producing [`FORECAST_HORIZON`] months.
    pub fn new(scale: OrdinalScale) -> Self {
        Self {
            scale,
            horizon: FORECAST_HORIZON,
        }
    }

    pub fn horizon(&self) -> usize {
        self.horizon
    }
}

impl Forecaster for LinearTrendForecaster {
    fn name(&self) -> &str {
        "Linear trend"
    }

    fn scale(&self) -> OrdinalScale {
        self.scale
    }

    fn forecast(&self, history: &[RegressionPoint]) -> Result<ForecastSeries> {
        if history.len() < MIN_HISTORY {
            return Err(AnalyticsError::InsufficientData {
                required: MIN_HISTORY,
                actual: history.len(),
            });
        }
        if history.windows(2).any(|w| w[0].date >= w[1].date) {
            return Err(AnalyticsError::InvalidParameter {
                name: "history".to_string(),
                reason: "dates must be strictly increasing".to_string(),
            });
        }

        let x: Vec<f64> = history.iter().map(|p| p.ordinal as f64).collect();
        let y: Vec<f64> = history.iter().map(|p| p.cases).collect();
        let mut model = LinearTrend::new();
        model.fit(&x, &y)?;

        let last_observed = history[history.len() - 1].date;
        let points = (1..=self.horizon)
            .map(|step| -> Result<ForecastPoint> {
                let months = u32::try_from(step).map_err(|_| AnalyticsError::InvalidParameter {
                    name: "horizon".to_string(),
                    reason: format!("{step} months is out of range"),
                })?;
                let date = last_observed
                    .checked_add_months(Months::new(months))
                    .ok_or_else(|| {
                        AnalyticsError::NumericalError(format!(
                            "{last_observed} + {months} months is out of range"
                        ))
                    })?;
                let ordinal = self.scale.ordinal(date);
                Ok(ForecastPoint {
                    date,
                    ordinal,
                    predicted: model.predict_at(ordinal as f64)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let trend = model.summary();
        debug!(
            history = history.len(),
            slope = trend.slope,
            r_squared = trend.r_squared,
            scale = self.scale.name(),
            "fitted forecast trend"
        );

        Ok(ForecastSeries {
            last_observed,
            points,
            trend,
        })
    }
}

/// History followed by the forecast, as one line for display.
pub fn combined_series(history: &[DateTotal], forecast: &ForecastSeries) -> Vec<SeriesPoint> {
    history
        .iter()
        .map(|h| SeriesPoint {
            date: h.date,
            cases: h.cases,
            kind: SeriesKind::Historical,
        })
        .chain(forecast.points.iter().map(|p| SeriesPoint {
            date: p.date,
            cases: p.predicted,
            kind: SeriesKind::Forecast,
        }))
        .collect()
}
