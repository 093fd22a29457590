//! Analytics Consumer API
//!
//! Configuration and the dashboard object the presentation layer talks to.
//!
//! This crate provides:
//! - `ForecastConfig` and its builder
//! - `Dashboard`, which owns the case repository and turns a selection
//!   into a full set of views
//! - Re-exports from SPI and core for convenience

pub mod config;
pub mod dashboard;

// Re-export from core
pub use analytics_core::{
    combined_series, compute_views, summarize, LinearTrend, LinearTrendForecaster,
};

// Re-export traits from SPI
pub use analytics_spi::{
    AnalyticsError, DashboardViews, ForecastSeries, Forecaster, OrdinalScale, Result,
    FORECAST_HORIZON,
};

pub use config::{ForecastConfig, ForecastConfigBuilder};
pub use dashboard::Dashboard;
