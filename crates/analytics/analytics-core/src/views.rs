//! All views for one filtered table.

use std::time::Instant;

use analytics_spi::{DashboardViews, Forecaster};
use dataset_spi::CleanTable;
use tracing::{debug, warn};

use crate::aggregate::{mean_by_calendar_month, regression_series, total_by_date, total_by_region};
use crate::kpi::summarize;

/// Compute KPIs, the four aggregate views and the forecast.
///
/// Never fails. A forecast that cannot be produced is carried as `Err` in
/// [`DashboardViews::forecast`] while the other views are filled normally.
pub fn compute_views(filtered: &CleanTable, forecaster: &dyn Forecaster) -> DashboardViews {
    let started = Instant::now();

    let regression = regression_series(filtered, forecaster.scale());
    let forecast = forecaster.forecast(&regression);
    if let Err(e) = &forecast {
        warn!(forecaster = forecaster.name(), error = %e, "forecast skipped");
    }

    let views = DashboardViews {
        kpis: summarize(filtered),
        by_date: total_by_date(filtered),
        by_region: total_by_region(filtered),
        monthly_mean: mean_by_calendar_month(filtered),
        regression,
        forecast,
    };

    debug!(
        rows = filtered.len(),
        months = views.by_date.len(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "computed dashboard views"
    );
    views
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forecast::LinearTrendForecaster;
    use analytics_spi::{AnalyticsError, OrdinalScale};
    use chrono::NaiveDate;
    use dataset_spi::CleanRecord;

    fn rec(y: i32, m: u32, g: &str, c: f64) -> CleanRecord {
        CleanRecord::new(NaiveDate::from_ymd_opt(y, m, 1).unwrap(), g, c)
    }

    #[test]
    fn test_views_for_two_months() {
        let table = CleanTable::new(vec![rec(2020, 1, "Beirut", 10.0), rec(2020, 2, "Beirut", 20.0)]);
        let views = compute_views(&table, &LinearTrendForecaster::new(OrdinalScale::MonthIndex));

        assert_eq!(views.kpis.total_cases, 30.0);
        assert_eq!(views.by_date.len(), 2);
        assert_eq!(views.by_region.len(), 1);
        assert_eq!(views.monthly_mean.len(), 12);
        let forecast = views.forecast_series().unwrap();
        assert!((forecast.points[0].predicted - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_month_skips_forecast_only() {
        let table = CleanTable::new(vec![rec(2020, 1, "Beirut", 10.0), rec(2020, 1, "North", 4.0)]);
        let views = compute_views(&table, &LinearTrendForecaster::default());

        assert_eq!(views.kpis.total_cases, 14.0);
        assert_eq!(views.by_region.len(), 2);
        assert_eq!(
            views.forecast,
            Err(AnalyticsError::InsufficientData {
                required: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_empty_table() {
        let views = compute_views(&CleanTable::default(), &LinearTrendForecaster::default());

        assert!(views.is_empty());
        assert_eq!(views.kpis.total_cases_display(), 0);
        assert!(views.by_region.is_empty());
        assert!(views.monthly_mean.iter().all(|m| m.mean.is_none()));
        assert!(views.forecast.as_ref().unwrap_err().is_insufficient_data());
    }

    #[test]
    fn test_views_serialize() {
        let table = CleanTable::new(vec![rec(2020, 1, "Beirut", 10.0), rec(2020, 2, "Beirut", 20.0)]);
        let views = compute_views(&table, &LinearTrendForecaster::default());
        let json = serde_json::to_value(&views).unwrap();

        assert_eq!(json["kpis"]["months_covered"], 2);
        assert_eq!(json["by_date"][0]["date"], "2020-01-01");
        assert_eq!(json["monthly_mean"][0]["month"], "January");
        assert!(json["monthly_mean"][2]["mean"].is_null());
    }
}
