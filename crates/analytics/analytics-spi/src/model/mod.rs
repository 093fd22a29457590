//! Model module containing derived views and forecast types

mod calendar_month;
mod dashboard_views;
mod forecast;
mod kpis;
mod ordinal_scale;
mod views;

pub use calendar_month::CalendarMonth;
pub use dashboard_views::DashboardViews;
pub use forecast::{
    ForecastPoint, ForecastSeries, SeriesKind, SeriesPoint, TrendSummary, FORECAST_HORIZON,
};
pub use kpis::Kpis;
pub use ordinal_scale::OrdinalScale;
pub use views::{DateTotal, MonthlyMean, RegionTotal, RegressionPoint};
