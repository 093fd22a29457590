//! Main layout for the TUI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Tabs},
};

use crate::app::{App, Tab};
use super::footer::draw_footer;
use super::header::draw_header;
use super::tabs::{
    draw_filters_tab, draw_forecast_tab, draw_overview_tab, draw_regions_tab,
    draw_seasonality_tab,
};

/// Draw header, tab bar, the active tab and the footer.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let [header, tab_bar, content, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Min(10),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    draw_header(frame, header, app);
    draw_tab_bar(frame, tab_bar, app);

    let draw_tab = match app.current_tab {
        Tab::Overview => draw_overview_tab,
        Tab::Regions => draw_regions_tab,
        Tab::Seasonality => draw_seasonality_tab,
        Tab::Forecast => draw_forecast_tab,
        Tab::Filters => draw_filters_tab,
    };
    draw_tab(frame, content, app);

    draw_footer(frame, footer, app);
}

/// How much of the loaded table the current filters keep, e.g.
/// `2/3 years, 8/8 governorates, 96 rows`.
pub fn selection_summary(app: &App) -> String {
    let chosen = |all: &[String], picked: &std::collections::BTreeSet<String>| {
        all.iter().filter(|item| picked.contains(*item)).count()
    };
    format!(
        "{}/{} years, {}/{} governorates, {} months",
        chosen(&app.years, &app.selection.years),
        app.years.len(),
        chosen(&app.governorates, &app.selection.governorates),
        app.governorates.len(),
        app.views.kpis.months_covered,
    )
}

/// Numbered tabs, titled with the selection summary. The Filters tab is
/// starred while anything is filtered out.
fn draw_tab_bar(frame: &mut Frame, area: Rect, app: &App) {
    let narrowed = app.selection.years.len() < app.years.len()
        || app.selection.governorates.len() < app.governorates.len();

    let titles: Vec<Line> = Tab::all()
        .iter()
        .enumerate()
        .map(|(i, &tab)| {
            let star = if tab == Tab::Filters && narrowed { "*" } else { "" };
            Line::from(format!(" {} {}{} ", i + 1, tab.name(), star))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", selection_summary(app))),
        )
        .select(app.current_tab.index())
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .divider("|");

    frame.render_widget(tabs, area);
}
