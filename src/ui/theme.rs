//! Color theme for the TUI

use ratatui::style::{Color, Modifier, Style};

/// Styles used across the rendered widgets
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub header: Style,
    pub active_sort: Style,
    pub row: Style,
    pub dim: Style,
    pub link: Style,
    pub warning: Style,
    pub error: Style,
    pub hint: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            header: Style::default().add_modifier(Modifier::BOLD),
            active_sort: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            row: Style::default(),
            dim: Style::default().add_modifier(Modifier::DIM),
            link: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            hint: Style::default().fg(Color::DarkGray),
        }
    }
}
