//! Seasonality tab UI.

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

use crate::app::App;

/// Bars carry integer heights; means are scaled so one decimal survives.
const SCALE: f64 = 10.0;

/// Draw the mean row value for each calendar month, January to December.
pub fn draw_seasonality_tab(frame: &mut Frame, area: Rect, app: &App) {
    let bars: Vec<Bar> = app
        .views
        .monthly_mean
        .iter()
        .map(|m| {
            let bar = Bar::default().label(Line::from(m.month.short_name()));
            match m.mean {
                Some(mean) => bar
                    .value((mean.max(0.0) * SCALE).round() as u64)
                    .text_value(format!("{mean:.1}")),
                None => bar.value(0).text_value("–".to_string()),
            }
        })
        .collect();

    let bar_width = (area.width.saturating_sub(2) / 12).saturating_sub(1).clamp(3, 9);
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Average Cases by Month "),
        )
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green))
        .label_style(Style::default().fg(Color::Gray))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
