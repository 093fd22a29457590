//! Event handling for the TUI.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;

use crate::app::{App, FilterList, Tab};

/// Handle keyboard events.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('R') => app.reload(),

        // Tab navigation
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => app.next_tab(),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => app.previous_tab(),
        KeyCode::Char(c @ '1'..='5') => app.goto_tab(c as u8 - b'0'),

        // Tab-specific actions
        _ => {
            if app.current_tab == Tab::Filters {
                handle_filters_tab_keys(app, key);
            }
        }
    }
}

fn handle_filters_tab_keys(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => app.cursor_down(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle_current(),
        KeyCode::Char('a') => {
            app.select_all();
            app.set_status(format!("All {} selected", app.filter_focus.name().to_lowercase()));
        }
        KeyCode::Char('n') => {
            app.select_none();
            app.set_status(format!("{} selection cleared", app.filter_focus.name()));
        }
        KeyCode::Char('y') => app.filter_focus = FilterList::Years,
        KeyCode::Char('g') => app.filter_focus = FilterList::Governorates,
        _ => {}
    }
}

/// Poll for events with a timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}
