//! Analytics Facade
//!
//! Unified re-exports for the analytics module.
//!
//! This facade provides a single entry point for all analytics functionality:
//! - `analytics_spi` - View models, calendar months, errors and contracts
//! - `analytics_core` - Aggregations, KPIs, the OLS trend and the forecaster
//! - `analytics_api` - Forecast configuration and the `Dashboard`
//!
//! # Example
//!
//! ```rust,ignore
//! use analytics_facade::{Dashboard, ForecastConfig};
//! use dataset_facade::DatasetConfig;
//!
//! let dashboard = Dashboard::open(&DatasetConfig::default(), ForecastConfig::default())?;
//! let views = dashboard.recompute(&dashboard.default_selection());
//! println!("total cases: {}", views.kpis.total_cases_display());
//! match &views.forecast {
//!     Ok(series) => println!("next month: {:.1}", series.points[0].predicted),
//!     Err(e) => println!("no forecast: {e}"),
//! }
//! ```

// Re-export everything from SPI
pub use analytics_spi::*;

// Re-export everything from Core
pub use analytics_core::{
    aggregate, forecast, kpi, regression, views, combined_series, compute_views,
    mean_by_calendar_month, regression_series, summarize, total_by_date, total_by_region,
    LinearTrend, LinearTrendForecaster,
};

// Re-export everything from API
pub use analytics_api::{config, dashboard, Dashboard, ForecastConfig, ForecastConfigBuilder};
