//! Forecast tab UI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::app::App;
use crate::widgets::create_forecast_chart;

/// Draw the Forecast tab.
pub fn draw_forecast_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),    // Chart
            Constraint::Length(10), // Summary table
        ])
        .split(area);

    match &app.views.forecast {
        Ok(_) => {
            let chart = create_forecast_chart(&app.chart, app.dashboard.forecaster().name());
            frame.render_widget(chart, chunks[0]);
            draw_forecast_summary(frame, chunks[1], app);
        }
        Err(e) => {
            let text = vec![
                Line::from("Insufficient data for forecast").style(
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Line::from(e.to_string()),
                Line::from("Select more months on the Filters tab [5]."),
            ];
            let notice = Paragraph::new(text)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(" Historical Data and Forecast "),
                );
            frame.render_widget(notice, area);
        }
    }
}

fn draw_forecast_summary(frame: &mut Frame, area: Rect, app: &App) {
    let Some(series) = app.views.forecast_series() else {
        return;
    };

    let rows: Vec<Row> = series
        .points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Row::new(vec![
                format!("+{} mo", i + 1),
                p.date.format("%Y-%m").to_string(),
                format!("{:.2}", p.predicted),
            ])
        })
        .collect();

    let trend = &series.trend;
    let table = Table::new(
        rows,
        [
            Constraint::Length(8),
            Constraint::Length(10),
            Constraint::Length(12),
        ],
    )
    .header(
        Row::new(vec!["Step", "Month", "Forecast"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(format!(
        " Forecast Summary (slope {:.3}/{}, R² {:.3}, n={}) ",
        trend.slope,
        app.dashboard.forecaster().scale().name(),
        trend.r_squared,
        trend.n_observations
    )));

    frame.render_widget(table, area);
}
