//! Overview tab UI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use super::draw_placeholder;
use crate::app::App;
use crate::widgets::create_trend_chart;

/// Draw the Overview tab: KPIs above the time-trend chart.
pub fn draw_overview_tab(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),  // KPIs
            Constraint::Min(10),    // Chart
        ])
        .split(area);

    draw_kpis(frame, chunks[0], app);

    if app.chart.is_empty() {
        draw_placeholder(frame, chunks[1], "Cases Over Time", "No rows match the current filters");
    } else {
        frame.render_widget(create_trend_chart(&app.chart), chunks[1]);
    }
}

fn draw_kpis(frame: &mut Frame, area: Rect, app: &App) {
    let kpis = &app.views.kpis;
    let cards = [
        ("Total Cases", kpis.total_cases_display().to_string(), Color::Red),
        ("Months Covered", kpis.months_covered.to_string(), Color::Cyan),
        ("Regions Covered", kpis.regions_covered.to_string(), Color::Green),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for ((title, value, color), column) in cards.into_iter().zip(columns.iter()) {
        let card = Paragraph::new(value)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(format!(" {title} ")));
        frame.render_widget(card, *column);
    }
}
