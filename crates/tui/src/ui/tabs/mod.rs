//! Tab-specific UI modules.

mod filters;
mod forecast;
mod overview;
mod regions;
mod seasonality;

pub use filters::draw_filters_tab;
pub use forecast::draw_forecast_tab;
pub use overview::draw_overview_tab;
pub use regions::draw_regions_tab;
pub use seasonality::draw_seasonality_tab;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

/// Bordered box with a centered grey message.
pub(crate) fn draw_placeholder(frame: &mut Frame, area: Rect, title: &str, message: &str) {
    let placeholder = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .style(Style::default().fg(Color::DarkGray));

    // Calculate inner area before rendering the block
    let inner = placeholder.inner(area);
    frame.render_widget(placeholder, area);

    let centered = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(1),
            Constraint::Percentage(45),
        ])
        .split(inner);
    let msg = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(msg, centered[1]);
}
