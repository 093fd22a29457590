//! Filters tab UI.

use std::collections::BTreeSet;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};

use crate::app::{App, FilterList};

/// Draw the year and governorate checkbox lists side by side.
pub fn draw_filters_tab(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    draw_list(
        frame,
        columns[0],
        app,
        FilterList::Years,
        &app.years,
        &app.selection.years,
        app.year_cursor,
    );
    draw_list(
        frame,
        columns[1],
        app,
        FilterList::Governorates,
        &app.governorates,
        &app.selection.governorates,
        app.governorate_cursor,
    );
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    list: FilterList,
    items: &[String],
    chosen: &BTreeSet<String>,
    cursor: usize,
) {
    let focused = app.filter_focus == list;
    let items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let (mark, style) = if chosen.contains(item) {
                ("[x]", Style::default().fg(Color::Green))
            } else {
                ("[ ]", Style::default().fg(Color::DarkGray))
            };
            ListItem::new(format!("{mark} {item}")).style(style)
        })
        .collect();

    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };
    let title = format!(" {} ({} of {}) ", list.name(), chosen.len(), items.len());
    let widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).border_style(border).title(title))
        .highlight_symbol(if focused { "> " } else { "  " })
        .highlight_style(Style::default().add_modifier(Modifier::BOLD));

    let mut state = ListState::default().with_selected(Some(cursor));
    frame.render_stateful_widget(widget, area, &mut state);
}
