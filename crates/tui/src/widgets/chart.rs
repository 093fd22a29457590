//! Line charts over monthly totals.
//!
//! Datasets borrow their points, so the points are built once per
//! recompute into [`ChartData`] and kept on the app between frames.

use analytics_facade::{combined_series, DashboardViews, OrdinalScale, SeriesKind};
use chrono::NaiveDate;
use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

/// X coordinate shared by every chart: one unit per calendar month.
fn month_x(date: NaiveDate) -> f64 {
    OrdinalScale::MonthIndex.ordinal(date) as f64
}

fn month_label(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Owned points and bounds for the trend and forecast charts.
#[derive(Debug, Clone, Default)]
pub struct ChartData {
    pub history: Vec<(f64, f64)>,
    /// Last historical point followed by the forecast
    pub forecast: Vec<(f64, f64)>,
    /// Vertical line at the last observed month
    pub boundary: Vec<(f64, f64)>,
    pub history_bounds: [f64; 2],
    pub combined_bounds: [f64; 2],
    pub history_y: [f64; 2],
    pub combined_y: [f64; 2],
    pub first_label: String,
    pub last_label: String,
    pub horizon_label: String,
}

impl ChartData {
    pub fn from_views(views: &DashboardViews) -> Self {
        let history: Vec<(f64, f64)> = views
            .by_date
            .iter()
            .map(|d| (month_x(d.date), d.cases))
            .collect();
        let (Some(first), Some(last)) = (views.by_date.first(), views.by_date.last()) else {
            return Self::default();
        };

        let mut data = Self {
            history_bounds: x_bounds(&history),
            history_y: y_bounds(history.iter().map(|p| p.1)),
            first_label: month_label(first.date),
            last_label: month_label(last.date),
            history,
            ..Self::default()
        };

        if let Some(series) = views.forecast_series() {
            let combined = combined_series(&views.by_date, series);
            data.forecast = std::iter::once((month_x(last.date), last.cases))
                .chain(
                    combined
                        .iter()
                        .filter(|p| p.kind == SeriesKind::Forecast)
                        .map(|p| (month_x(p.date), p.cases)),
                )
                .collect();

            let all: Vec<(f64, f64)> = combined.iter().map(|p| (month_x(p.date), p.cases)).collect();
            data.combined_bounds = x_bounds(&all);
            data.combined_y = y_bounds(all.iter().map(|p| p.1));
            data.horizon_label = series.points.last().map(|p| month_label(p.date)).unwrap_or_default();

            let x = month_x(last.date);
            data.boundary = vec![(x, data.combined_y[0]), (x, data.combined_y[1])];
        }
        data
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

fn x_bounds(points: &[(f64, f64)]) -> [f64; 2] {
    let min = points.first().map_or(0.0, |p| p.0);
    let max = points.last().map_or(1.0, |p| p.0);
    if max > min {
        [min, max]
    } else {
        [min - 1.0, max + 1.0]
    }
}

fn y_bounds(values: impl Iterator<Item = f64>) -> [f64; 2] {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((max - min) * 0.1).max(1.0);
    [min - pad, max + pad]
}

fn value_axis<'a>(bounds: [f64; 2]) -> Axis<'a> {
    Axis::default()
        .title("Cases")
        .style(Style::default().fg(Color::Gray))
        .bounds(bounds)
        .labels(vec![
            Span::raw(format!("{:.0}", bounds[0])),
            Span::raw(format!("{:.0}", (bounds[0] + bounds[1]) / 2.0)),
            Span::raw(format!("{:.0}", bounds[1])),
        ])
}

/// Total cases over time.
pub fn create_trend_chart(data: &ChartData) -> Chart<'_> {
    let dataset = Dataset::default()
        .name("Cases")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data.history);

    Chart::new(vec![dataset])
        .block(Block::default().borders(Borders::ALL).title(" Dysentery Cases Over Time "))
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds(data.history_bounds)
                .labels(vec![
                    Span::raw(data.first_label.as_str()),
                    Span::raw(data.last_label.as_str()),
                ]),
        )
        .y_axis(value_axis(data.history_y))
}

/// Historical totals, the forecast and a marker at the last observed month.
pub fn create_forecast_chart<'a>(data: &'a ChartData, model_name: &'a str) -> Chart<'a> {
    let datasets = vec![
        Dataset::default()
            .name("Historical")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(&data.history),
        Dataset::default()
            .name("Forecast")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Magenta))
            .data(&data.forecast),
        Dataset::default()
            .name("Today")
            .marker(Marker::Dot)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&data.boundary),
    ];

    Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Historical Data and Forecast ({model_name}) ")),
        )
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::Gray))
                .bounds(data.combined_bounds)
                .labels(vec![
                    Span::raw(data.first_label.as_str()),
                    Span::styled(data.last_label.as_str(), Style::default().fg(Color::Yellow)),
                    Span::raw(data.horizon_label.as_str()),
                ]),
        )
        .y_axis(value_axis(data.combined_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_facade::{compute_views, LinearTrendForecaster};
    use dataset_facade::{CleanRecord, CleanTable};

    fn views(rows: &[(i32, u32, f64)]) -> DashboardViews {
        let table: CleanTable = rows
            .iter()
            .map(|&(y, m, c)| CleanRecord::new(NaiveDate::from_ymd_opt(y, m, 1).unwrap(), "Beirut", c))
            .collect();
        compute_views(&table, &LinearTrendForecaster::default())
    }

    #[test]
    fn test_forecast_line_starts_at_last_observation() {
        let data = ChartData::from_views(&views(&[(2020, 1, 10.0), (2020, 2, 20.0)]));

        assert_eq!(data.history.len(), 2);
        assert_eq!(data.forecast.len(), 7);
        assert_eq!(data.forecast[0], data.history[1]);
        assert!((data.forecast[1].1 - 30.0).abs() < 1e-9);
        assert_eq!(data.boundary[0].0, data.history[1].0);
        assert_eq!(data.last_label, "2020-02");
        assert_eq!(data.horizon_label, "2020-08");
    }

    #[test]
    fn test_single_month_has_no_forecast_line() {
        let data = ChartData::from_views(&views(&[(2020, 1, 10.0)]));

        assert_eq!(data.history.len(), 1);
        assert!(data.forecast.is_empty());
        assert!(data.boundary.is_empty());
        assert!(data.history_bounds[1] > data.history_bounds[0]);
    }

    #[test]
    fn test_empty_views() {
        let data = ChartData::from_views(&views(&[]));
        assert!(data.is_empty());
    }
}
