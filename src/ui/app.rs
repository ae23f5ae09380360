//! Application state for the interactive directory
//!
//! Owns the loaded working set and the [`ViewState`] that shapes the table,
//! plus the cursor position inside the live search input. The four display
//! states of the session (loading, error, empty, populated) all derive from
//! [`Phase`] and the current page window.

use crate::model::{Brewery, filter_micro};
use crate::source::LoadOutcome;
use crate::view::state::{SortField, ViewState};
use crate::view::{PageView, derive_view, matches_search};

/// Load lifecycle of the session
///
/// Loading transitions exactly once, to either `Ready` or `Failed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// The background read is still outstanding
    Loading,
    /// The working set is populated (possibly empty)
    Ready,
    /// An unexpected failure escaped the fallback path
    Failed(String),
}

/// All mutable state of an interactive session
#[derive(Debug)]
pub struct App {
    pub phase: Phase,
    /// Microbreweries remaining after the one-time category filter
    pub working_set: Vec<Brewery>,
    pub view: ViewState,
    /// Byte offset of the cursor within `view.search_term`
    pub query_cursor: usize,
    /// Non-fatal notice shown in the footer (fallback substitution)
    pub notice: Option<String>,
    pub show_help: bool,
    pub should_exit: bool,
}

impl App {
    /// Create a session in the loading phase
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            phase: Phase::Loading,
            working_set: Vec::new(),
            view: ViewState::new(page_size),
            query_cursor: 0,
            notice: None,
            show_help: false,
            should_exit: false,
        }
    }

    /// Install the load result: filter to the working set and leave loading
    ///
    /// A fallback outcome is still a success; its reason becomes a footer
    /// notice instead of an error.
    pub fn finish_load(&mut self, outcome: LoadOutcome) {
        if let Some(reason) = outcome.fallback_reason() {
            self.notice = Some(format!("using built-in data ({reason})"));
        }
        self.working_set = filter_micro(outcome.into_records());
        self.phase = Phase::Ready;
    }

    /// Enter the terminal error state with an empty working set
    pub fn fail_load(&mut self, message: impl Into<String>) {
        self.working_set = Vec::new();
        self.phase = Phase::Failed(message.into());
    }

    /// The page that should be on screen right now
    #[must_use]
    pub fn current_page(&self) -> PageView<'_> {
        derive_view(&self.working_set, &self.view)
    }

    /// Length of the filtered sequence under the current search term
    ///
    /// Cheaper than a full derive when only page clamping needs it.
    #[must_use]
    pub fn current_total(&self) -> usize {
        self.working_set
            .iter()
            .filter(|record| matches_search(record, &self.view.search_term))
            .count()
    }

    /// Select or toggle a sort column
    pub fn sort_by(&mut self, field: SortField) {
        self.view.sort_by(field);
    }

    /// Page navigation, clamped against the current result size
    pub fn next_page(&mut self) {
        let total = self.current_total();
        self.view.next_page(total);
    }

    pub fn prev_page(&mut self) {
        self.view.prev_page();
    }

    pub fn first_page(&mut self) {
        self.view.first_page();
    }

    pub fn last_page(&mut self) {
        let total = self.current_total();
        self.view.jump_last_page(total);
    }

    // Live search editing. Every edit funnels through ViewState::set_search
    // so the page-reset invariant holds no matter how the term changed.

    /// Insert a character at the query cursor
    pub fn query_push(&mut self, c: char) {
        let mut term = self.view.search_term.clone();
        term.insert(self.query_cursor, c);
        self.query_cursor += c.len_utf8();
        self.view.set_search(term);
    }

    /// Remove the character before the query cursor
    pub fn query_backspace(&mut self) {
        if self.query_cursor == 0 {
            return;
        }
        let mut term = self.view.search_term.clone();
        let prev_boundary = term[..self.query_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        term.remove(prev_boundary);
        self.query_cursor = prev_boundary;
        self.view.set_search(term);
    }

    /// Clear the whole search term
    pub fn query_clear(&mut self) {
        self.query_cursor = 0;
        self.view.set_search(String::new());
    }

    /// Move the query cursor one character left
    pub fn query_cursor_left(&mut self) {
        if self.query_cursor > 0 {
            self.query_cursor = self.view.search_term[..self.query_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move the query cursor one character right
    pub fn query_cursor_right(&mut self) {
        let term = &self.view.search_term;
        if self.query_cursor < term.len() {
            self.query_cursor = term[self.query_cursor..]
                .char_indices()
                .nth(1)
                .map_or(term.len(), |(i, _)| self.query_cursor + i);
        }
    }

    /// Request exit on the next loop turn
    pub const fn quit(&mut self) {
        self.should_exit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FallbackReason, LoadOutcome, fallback_records};
    use crate::testing::brewery_with_type;
    use crate::view::state::{SortDirection, SortField};

    fn loaded_app() -> App {
        let mut app = App::new(5);
        app.finish_load(LoadOutcome::Remote(fallback_records()));
        app
    }

    #[test]
    fn test_new_app_is_loading() {
        let app = App::new(5);
        assert_eq!(app.phase, Phase::Loading);
        assert!(app.working_set.is_empty());
    }

    #[test]
    fn test_finish_load_filters_to_micro_working_set() {
        let mut app = App::new(5);
        app.finish_load(LoadOutcome::Remote(vec![
            brewery_with_type("1", "Alpha", "micro"),
            brewery_with_type("2", "Beta", "brewpub"),
        ]));

        assert_eq!(app.phase, Phase::Ready);
        assert_eq!(app.working_set.len(), 1);
        assert!(app.notice.is_none());
    }

    #[test]
    fn test_fallback_load_sets_notice_not_error() {
        let mut app = App::new(5);
        app.finish_load(LoadOutcome::Fallback {
            records: fallback_records(),
            reason: FallbackReason::Status(503),
        });

        assert_eq!(app.phase, Phase::Ready);
        assert_eq!(app.working_set.len(), 15);
        assert!(app.notice.as_deref().unwrap().contains("HTTP 503"));
    }

    #[test]
    fn test_fail_load_empties_working_set() {
        let mut app = loaded_app();
        app.fail_load("boom");
        assert_eq!(app.phase, Phase::Failed("boom".to_string()));
        assert!(app.working_set.is_empty());
    }

    #[test]
    fn test_query_editing_resets_page() {
        let mut app = loaded_app();
        app.next_page();
        assert_eq!(app.view.page, 1);

        app.query_push('s');
        assert_eq!(app.view.page, 0);
        assert_eq!(app.view.search_term, "s");

        app.next_page();
        app.query_backspace();
        assert_eq!(app.view.page, 0);
        assert!(app.view.search_term.is_empty());
    }

    #[test]
    fn test_query_cursor_moves_on_char_boundaries() {
        let mut app = loaded_app();
        app.query_push('b');
        app.query_push('r');
        app.query_cursor_left();
        app.query_push('e');
        assert_eq!(app.view.search_term, "ber");

        app.query_cursor_right();
        assert_eq!(app.query_cursor, 3);
        app.query_clear();
        assert_eq!(app.query_cursor, 0);
    }

    #[test]
    fn test_sort_toggle_via_app() {
        let mut app = loaded_app();
        app.sort_by(SortField::State);
        assert_eq!(app.view.sort_field, SortField::State);
        assert_eq!(app.view.sort_direction, SortDirection::Asc);

        app.sort_by(SortField::State);
        assert_eq!(app.view.sort_direction, SortDirection::Desc);
    }

    #[test]
    fn test_page_navigation_clamps_to_result() {
        let mut app = loaded_app();
        // 15 records, page size 5 -> pages 0..=2
        app.last_page();
        assert_eq!(app.view.page, 2);
        app.next_page();
        assert_eq!(app.view.page, 2);
        app.first_page();
        assert_eq!(app.view.page, 0);
    }

    #[test]
    fn test_current_page_matches_view_state() {
        let mut app = loaded_app();
        app.query_push('c');
        let page = app.current_page();
        assert_eq!(page.total, app.current_total());
        assert!(page.rows.len() <= app.view.page_size);
    }
}
