//! Header bar widget.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

/// Draw the header bar with the title and the loaded source.
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let repository = app.dashboard.repository();
    let text = format!(
        "casewatch v{} - Dysentery Cases in Lebanon    {} ({} rows, {} dropped)",
        env!("CARGO_PKG_VERSION"),
        app.dashboard.source_name(),
        repository.table().len(),
        repository.dropped_count(),
    );
    let title = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));

    frame.render_widget(title, area);
}
