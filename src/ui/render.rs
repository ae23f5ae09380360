//! Rendering for the interactive directory
//!
//! Draws one of the four display states: a loading line while the read is
//! outstanding, a terminal error message, or the table (populated, or with a
//! single informational row when the window is empty).

use super::app::{App, Phase};
use super::theme::Theme;
use crate::output::PLACEHOLDER;
use crate::view::PageView;
use crate::view::state::SortField;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};

/// Draw the whole frame
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(3), // search input
            Constraint::Min(5),    // table / status
            Constraint::Length(2), // footer
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], theme);
    draw_search(frame, chunks[1], app, theme);

    match &app.phase {
        Phase::Loading => draw_loading(frame, chunks[2], theme),
        Phase::Failed(message) => draw_error(frame, chunks[2], message, theme),
        Phase::Ready => {
            let page = app.current_page();
            draw_table(frame, chunks[2], app, &page, theme);
            draw_footer(frame, chunks[3], app, &page, theme);
        }
    }

    if app.show_help {
        draw_help(frame, theme);
    }
}

fn draw_title(frame: &mut Frame, area: Rect, theme: &Theme) {
    let title = Paragraph::new(Span::styled("Microbrewery Directory", theme.title))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_search(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let input = Paragraph::new(app.view.search_term.as_str()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Search by name or state ", theme.hint)),
    );
    frame.render_widget(input, area);

    // Cursor inside the input box, in characters rather than bytes
    let cursor_chars = app.view.search_term[..app.query_cursor].chars().count();
    #[allow(clippy::cast_possible_truncation)]
    frame.set_cursor_position(Position::new(
        area.x + 1 + cursor_chars as u16,
        area.y + 1,
    ));
}

fn draw_loading(frame: &mut Frame, area: Rect, theme: &Theme) {
    let loading = Paragraph::new(Span::styled("Loading breweries...", theme.dim))
        .alignment(Alignment::Center);
    frame.render_widget(loading, area);
}

fn draw_error(frame: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let error = Paragraph::new(Span::styled(
        format!("Failed to load brewery data: {message}"),
        theme.error,
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(error, area);
}

fn header_cell(app: &App, field: SortField, theme: &Theme) -> Cell<'static> {
    if app.view.sort_field == field {
        Cell::from(Span::styled(
            format!("{} {}", field.label(), app.view.sort_direction.indicator()),
            theme.active_sort,
        ))
    } else {
        Cell::from(Span::styled(field.label(), theme.header))
    }
}

fn draw_table(frame: &mut Frame, area: Rect, app: &App, page: &PageView<'_>, theme: &Theme) {
    let header = Row::new([
        header_cell(app, SortField::Name, theme),
        Cell::from(Span::styled("City", theme.header)),
        header_cell(app, SortField::State, theme),
        Cell::from(Span::styled("Website", theme.header)),
    ]);

    let rows: Vec<Row> = page
        .rows
            .iter()
            .map(|record| {
                let website = record.website_url.as_deref().map_or_else(
                    || Cell::from(Span::styled(PLACEHOLDER, theme.dim)),
                    |url| Cell::from(Span::styled(url.to_string(), theme.link)),
                );
                Row::new([
                    Cell::from(Span::styled(record.name.clone(), theme.row)),
                    Cell::from(
                        record
                            .city
                            .clone()
                            .unwrap_or_else(|| PLACEHOLDER.to_string()),
                    ),
                    Cell::from(record.state.clone()),
                    website,
                ])
            })
            .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(32),
            Constraint::Percentage(18),
            Constraint::Percentage(16),
            Constraint::Percentage(34),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL))
    .column_spacing(1);

    frame.render_widget(table, area);

    // The informational row is a full-width paragraph rather than a table
    // cell, so long messages are not clipped to the first column.
    if page.is_empty() && area.height > 4 {
        let message = if app.view.search_term.is_empty() {
            "No microbreweries found."
        } else {
            "No breweries found matching your search."
        };
        let inner = Rect {
            x: area.x + 1,
            y: area.y + 3,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        let info = Paragraph::new(Span::styled(message, theme.dim)).alignment(Alignment::Center);
        frame.render_widget(info, inner);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, page: &PageView<'_>, theme: &Theme) {
    let mut summary = format!(
        "Showing {} microbreweries  |  page {}/{}",
        page.total,
        page.page + 1,
        page.page_count()
    );
    if !app.view.search_term.is_empty() {
        summary.push_str(&format!("  |  matching \"{}\"", app.view.search_term));
    }

    let mut first_line = vec![Span::styled(summary, theme.hint)];
    if let Some(notice) = &app.notice {
        first_line.push(Span::raw("  "));
        first_line.push(Span::styled(format!("⚠ {notice}"), theme.warning));
    }

    let hints = Span::styled(
        "type: search  ^N/^S: sort  PgUp/PgDn: page  Home/End: first/last  ?: help  Esc: quit",
        theme.hint,
    );

    let footer = Paragraph::new(vec![Line::from(first_line), Line::from(hints)]);
    frame.render_widget(footer, area);
}

fn draw_help(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(50, 12, frame.area());
    let lines = vec![
        Line::from(Span::styled("Keys", theme.title)),
        Line::from(""),
        Line::from("type / Backspace   edit the search term"),
        Line::from("Ctrl-U             clear the search term"),
        Line::from("Ctrl-N / Ctrl-S    sort by Name / State (toggle direction)"),
        Line::from("PgUp / PgDn        previous / next page"),
        Line::from("Home / End         first / last page"),
        Line::from("Esc / Ctrl-C       quit"),
        Line::from(""),
        Line::from(Span::styled("press any key to close", theme.dim)),
    ];
    let help = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));
    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

/// A centered rect of at most `width` x `height` inside `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FallbackReason, LoadOutcome, fallback_records};
    use ratatui::{Terminal, backend::TestBackend};

    fn render_to_text(app: &App) -> String {
        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal.draw(|frame| draw(frame, app, &theme)).unwrap();

        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                if let Some(cell) = buffer.cell((x, y)) {
                    text.push_str(cell.symbol());
                }
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_loading_state_shows_no_table() {
        let app = App::new(5);
        let text = render_to_text(&app);
        assert!(text.contains("Loading breweries..."));
        assert!(!text.contains("Website"));
    }

    #[test]
    fn test_error_state_shows_message() {
        let mut app = App::new(5);
        app.fail_load("load worker disconnected before producing a result");
        let text = render_to_text(&app);
        assert!(text.contains("Failed to load brewery data"));
        assert!(!text.contains("Website"));
    }

    #[test]
    fn test_populated_state_shows_first_page() {
        let mut app = App::new(5);
        app.finish_load(LoadOutcome::Remote(fallback_records()));
        let text = render_to_text(&app);

        // Sorted by name ascending: Anchor Brewing is the first row
        assert!(text.contains("Anchor Brewing"));
        assert!(text.contains("Showing 15 microbreweries"));
        assert!(text.contains("page 1/3"));
    }

    #[test]
    fn test_absent_website_renders_placeholder() {
        let mut app = App::new(5);
        app.finish_load(LoadOutcome::Remote(fallback_records()));
        let text = render_to_text(&app);

        // Anchor Brewing's row ends in the N/A placeholder
        let anchor_line = text
            .lines()
            .find(|line| line.contains("Anchor Brewing"))
            .unwrap();
        assert!(anchor_line.contains("N/A"));
    }

    #[test]
    fn test_empty_search_result_message() {
        let mut app = App::new(5);
        app.finish_load(LoadOutcome::Remote(fallback_records()));
        for c in "zzzz".chars() {
            app.query_push(c);
        }
        let text = render_to_text(&app);
        assert!(text.contains("No breweries found matching your search."));
    }

    #[test]
    fn test_empty_working_set_message() {
        let mut app = App::new(5);
        app.finish_load(LoadOutcome::Remote(Vec::new()));
        let text = render_to_text(&app);
        assert!(text.contains("No microbreweries found."));
    }

    #[test]
    fn test_fallback_notice_in_footer() {
        let mut app = App::new(5);
        app.finish_load(LoadOutcome::Fallback {
            records: fallback_records(),
            reason: FallbackReason::Offline,
        });
        let text = render_to_text(&app);
        assert!(text.contains("using built-in data"));
    }
}
