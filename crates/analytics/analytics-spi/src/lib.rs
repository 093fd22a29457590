//! Analytics Service Provider Interface
//!
//! Defines the derived views of a case-count dataset, the errors raised while
//! computing them, and the contracts for trend models and forecasters.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Forecaster, TrendModel};
pub use error::{AnalyticsError, Result};
pub use model::{
    CalendarMonth, DashboardViews, DateTotal, ForecastPoint, ForecastSeries, Kpis, MonthlyMean,
    OrdinalScale, RegionTotal, RegressionPoint, SeriesKind, SeriesPoint, TrendSummary,
    FORECAST_HORIZON,
};
