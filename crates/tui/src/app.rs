//! Application state management for the TUI.

use std::time::Instant;

use analytics_facade::{Dashboard, DashboardViews};
use dataset_facade::Selection;
use tracing::{info, warn};

use crate::widgets::ChartData;

/// Main application state.
pub struct App {
    /// Current active tab
    pub current_tab: Tab,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Loaded dataset and forecaster
    pub dashboard: Dashboard,
    /// Current filter choice
    pub selection: Selection,
    /// Views for the current selection
    pub views: DashboardViews,
    /// Line chart points derived from `views`
    pub chart: ChartData,
    /// Every year in the loaded table
    pub years: Vec<String>,
    /// Every governorate in the loaded table
    pub governorates: Vec<String>,
    /// Which list on the Filters tab has focus
    pub filter_focus: FilterList,
    /// Highlighted row in the years list
    pub year_cursor: usize,
    /// Highlighted row in the governorates list
    pub governorate_cursor: usize,
    /// Status message with expiry
    pub status_message: Option<(String, Instant)>,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        let selection = dashboard.default_selection();
        let views = dashboard.recompute(&selection);
        let chart = ChartData::from_views(&views);
        let table = dashboard.table();

        Self {
            current_tab: Tab::default(),
            should_quit: false,
            years: table.years(),
            governorates: table.governorates(),
            dashboard,
            selection,
            views,
            chart,
            filter_focus: FilterList::default(),
            year_cursor: 0,
            governorate_cursor: 0,
            status_message: None,
        }
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Clear expired status messages (older than 5 seconds).
    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }

    /// Move to next tab.
    pub fn next_tab(&mut self) {
        self.current_tab = self.current_tab.next();
    }

    /// Move to previous tab.
    pub fn previous_tab(&mut self) {
        self.current_tab = self.current_tab.previous();
    }

    /// Jump to a specific tab by number (1-5).
    pub fn goto_tab(&mut self, num: u8) {
        self.current_tab = Tab::from_num(num);
    }

    /// Rebuild every view from the current selection.
    pub fn recompute(&mut self) {
        self.views = self.dashboard.recompute(&self.selection);
        self.chart = ChartData::from_views(&self.views);
    }

    /// Re-read the dataset and reset the filters to everything.
    pub fn reload(&mut self) {
        match self.dashboard.reload() {
            Ok(table) => {
                self.years = table.years();
                self.governorates = table.governorates();
                self.selection = Selection::all(&table);
                self.year_cursor = self.year_cursor.min(self.years.len().saturating_sub(1));
                self.governorate_cursor = self
                    .governorate_cursor
                    .min(self.governorates.len().saturating_sub(1));
                self.recompute();
                info!(rows = table.len(), "dataset reloaded from the terminal");
                self.set_status(format!("Reloaded {} rows", table.len()));
            }
            Err(e) => {
                warn!(error = %e, "reload requested from the terminal failed");
                self.set_status(format!("Reload failed: {e}"));
            }
        }
    }

    fn focused(&self) -> (&[String], usize) {
        match self.filter_focus {
            FilterList::Years => (&self.years, self.year_cursor),
            FilterList::Governorates => (&self.governorates, self.governorate_cursor),
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.filter_focus {
            FilterList::Years => &mut self.year_cursor,
            FilterList::Governorates => &mut self.governorate_cursor,
        }
    }

    pub fn cursor_up(&mut self) {
        let cursor = self.cursor_mut();
        *cursor = cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        let len = self.focused().0.len();
        let cursor = self.cursor_mut();
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    /// Flip the highlighted entry of the focused list.
    pub fn toggle_current(&mut self) {
        let (items, cursor) = self.focused();
        let Some(item) = items.get(cursor).cloned() else {
            return;
        };
        match self.filter_focus {
            FilterList::Years => self.selection.toggle_year(&item),
            FilterList::Governorates => self.selection.toggle_governorate(&item),
        }
        self.recompute();
    }

    /// Choose every entry of the focused list.
    pub fn select_all(&mut self) {
        match self.filter_focus {
            FilterList::Years => self.selection.years = self.years.iter().cloned().collect(),
            FilterList::Governorates => {
                self.selection.governorates = self.governorates.iter().cloned().collect()
            }
        }
        self.recompute();
    }

    /// Clear the focused list.
    pub fn select_none(&mut self) {
        match self.filter_focus {
            FilterList::Years => self.selection.years.clear(),
            FilterList::Governorates => self.selection.governorates.clear(),
        }
        self.recompute();
    }
}

/// Available tabs in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    Regions,
    Seasonality,
    Forecast,
    Filters,
}

impl Tab {
    pub fn next(self) -> Self {
        match self {
            Tab::Overview => Tab::Regions,
            Tab::Regions => Tab::Seasonality,
            Tab::Seasonality => Tab::Forecast,
            Tab::Forecast => Tab::Filters,
            Tab::Filters => Tab::Overview,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Tab::Overview => Tab::Filters,
            Tab::Regions => Tab::Overview,
            Tab::Seasonality => Tab::Regions,
            Tab::Forecast => Tab::Seasonality,
            Tab::Filters => Tab::Forecast,
        }
    }

    pub fn from_num(num: u8) -> Self {
        match num {
            1 => Tab::Overview,
            2 => Tab::Regions,
            3 => Tab::Seasonality,
            4 => Tab::Forecast,
            5 => Tab::Filters,
            _ => Tab::Overview,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Overview => 0,
            Tab::Regions => 1,
            Tab::Seasonality => 2,
            Tab::Forecast => 3,
            Tab::Filters => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Regions => "Regions",
            Tab::Seasonality => "Seasonality",
            Tab::Forecast => "Forecast",
            Tab::Filters => "Filters",
        }
    }

    pub fn all() -> &'static [Tab] {
        &[
            Tab::Overview,
            Tab::Regions,
            Tab::Seasonality,
            Tab::Forecast,
            Tab::Filters,
        ]
    }
}

/// The two filter lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterList {
    #[default]
    Years,
    Governorates,
}

impl FilterList {
    pub fn name(self) -> &'static str {
        match self {
            FilterList::Years => "Year",
            FilterList::Governorates => "Governorate",
        }
    }
}
