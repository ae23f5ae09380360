//! Event handling for the interactive directory
//!
//! Maps keyboard and mouse events onto the view-state commands. Printable
//! characters edit the search term live; sorting and paging sit on control
//! and navigation keys since every plain character belongs to the search box.

use super::app::App;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use crate::view::state::SortField;
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Keep running the event loop
    Continue,
    /// Exit the session
    Exit,
    /// No action taken
    Ignored,
}

fn handle_key(app: &mut App, key: KeyEvent) -> EventResult {
    // Help overlay swallows the next keypress
    if app.show_help {
        app.show_help = false;
        return EventResult::Continue;
    }

    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.quit();
            EventResult::Exit
        }

        // Sorting
        (KeyCode::Char('n'), KeyModifiers::CONTROL) => {
            app.sort_by(SortField::Name);
            EventResult::Continue
        }
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            app.sort_by(SortField::State);
            EventResult::Continue
        }

        // Paging
        (KeyCode::PageDown, _) | (KeyCode::Down, _) => {
            app.next_page();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) | (KeyCode::Up, _) => {
            app.prev_page();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            app.first_page();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            app.last_page();
            EventResult::Continue
        }

        // Help overlay
        (KeyCode::F(1), _) | (KeyCode::Char('?'), _) => {
            app.show_help = true;
            EventResult::Continue
        }

        // Query editing
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
            app.query_clear();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            app.query_push(c);
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            if app.view.search_term.is_empty() {
                EventResult::Ignored
            } else {
                app.query_backspace();
                EventResult::Continue
            }
        }
        (KeyCode::Left, _) => {
            app.query_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            app.query_cursor_right();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            app.prev_page();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            app.next_page();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// Returns within `timeout` even when no event arrives, so the caller can
/// keep polling the load channel.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle(app: &mut App, timeout: Duration) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    let result = match event::read()? {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(_, _) => EventResult::Continue,
        _ => EventResult::Ignored,
    };

    Ok(result)
}
