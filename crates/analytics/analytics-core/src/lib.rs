//! Analytics Core
//!
//! Core implementations over a filtered case table: the four aggregate
//! views, headline KPIs, an ordinary least squares trend and the monthly
//! forecaster built on it.

pub mod aggregate;
pub mod forecast;
pub mod kpi;
pub mod regression;
pub mod views;

// Re-export SPI traits for implementations
pub use analytics_spi::{
    AnalyticsError, CalendarMonth, DashboardViews, DateTotal, ForecastPoint, ForecastSeries,
    Forecaster, Kpis, MonthlyMean, OrdinalScale, RegionTotal, RegressionPoint, Result,
    SeriesKind, SeriesPoint, TrendModel, TrendSummary, FORECAST_HORIZON,
};

// Re-export main types
pub use aggregate::{mean_by_calendar_month, regression_series, total_by_date, total_by_region};
pub use forecast::{combined_series, LinearTrendForecaster};
pub use kpi::summarize;
pub use regression::LinearTrend;
pub use views::compute_views;
