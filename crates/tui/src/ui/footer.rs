//! Footer bar widget with keyboard shortcuts.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, Tab};

/// Draw the footer bar with context-sensitive help.
pub fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let tab_help = match app.current_tab {
        Tab::Filters => "[↑↓] Move  [Space] Toggle  [a] All  [n] None  [y/g] Year/Governorate",
        _ => "",
    };
    let help_text = format!("{tab_help}  [R] Reload  |  [1-5] Tab  [Tab/←→] Navigate  [q] Quit");

    // Add status message if present
    let display_text = if let Some((status, _)) = &app.status_message {
        format!("{} | {}", status, help_text.trim_start())
    } else {
        help_text.trim_start().to_string()
    };

    let footer = Paragraph::new(display_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP));

    frame.render_widget(footer, area);
}
