//! Regions tab UI.

use ratatui::{
    prelude::*,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
};

use super::draw_placeholder;
use crate::app::App;

/// Draw total cases per governorate as horizontal bars, largest on top.
pub fn draw_regions_tab(frame: &mut Frame, area: Rect, app: &App) {
    let regions = &app.views.by_region;
    if regions.is_empty() {
        draw_placeholder(frame, area, "Cases by Region", "No rows match the current filters");
        return;
    }

    // Rows are drawn top-down and the view is ascending.
    let bars: Vec<Bar> = regions
        .iter()
        .rev()
        .map(|r| {
            Bar::default()
                .label(Line::from(r.governorate.as_str()))
                .value(r.cases.max(0.0).round() as u64)
                .text_value(format!("{:.0}", r.cases))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(" Cases by Region "))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(Color::Red))
        .value_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(Color::Gray))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics_facade::{Dashboard, ForecastConfig};
    use dataset_facade::{CaseRepository, InMemorySource, RawRecord};
    use ratatui::backend::TestBackend;

    fn rows(app: &App) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        terminal
            .draw(|frame| draw_regions_tab(frame, frame.area(), app))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    #[test]
    fn test_largest_region_is_drawn_first() {
        let source = InMemorySource::new(vec![
            RawRecord::new("http://x/resource/Beirut", "01-2020", Some(50.0)),
            RawRecord::new("http://x/resource/North", "01-2020", Some(5.0)),
            RawRecord::new("http://x/resource/South", "01-2020", Some(20.0)),
        ]);
        let repository = CaseRepository::open(source).unwrap();
        let app = App::new(Dashboard::from_repository(repository, ForecastConfig::default()));

        let rows = rows(&app);
        assert!(rows[1].contains("Beirut"), "{rows:#?}");
        assert!(rows[2].contains("South"), "{rows:#?}");
        assert!(rows[3].contains("North"), "{rows:#?}");
    }
}
