//! View state and the commands that mutate it
//!
//! `ViewState` is the single source of truth for what the table shows:
//! search term, sort key and direction, and the current page window. It is
//! owned by the presentation layer and mutated only through the command
//! methods here, which maintain the page-reset invariant: any search or sort
//! change puts the window back on page 0 so it can never silently land past
//! the end of a shrunken result.

use crate::model::Brewery;
use std::cmp::Ordering;

/// Fixed default window size, matching the original directory
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Which column the table is sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    State,
}

impl SortField {
    /// The sortable value of a record for this field
    #[must_use]
    pub fn key<'a>(&self, record: &'a Brewery) -> &'a str {
        match self {
            Self::Name => &record.name,
            Self::State => &record.state,
        }
    }

    /// Column label for display
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::State => "State",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Apply this direction to an ascending comparison
    ///
    /// Reverses the comparison, not the sequence, so a stable sort keeps the
    /// original relative order of equal keys in both directions.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    /// Indicator glyph for column headers
    #[must_use]
    pub const fn indicator(&self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// All state that shapes the derived view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    /// Live search term; empty matches everything
    pub search_term: String,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
    /// Zero-based page index
    pub page: usize,
    pub page_size: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl ViewState {
    /// Create a fresh view state with the given window size
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            search_term: String::new(),
            sort_field: SortField::default(),
            sort_direction: SortDirection::default(),
            page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Replace the search term, resetting to the first page
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
        self.page = 0;
    }

    /// Select a sort column, resetting to the first page
    ///
    /// Selecting the already-active column toggles the direction instead;
    /// switching columns always starts ascending.
    pub fn sort_by(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.toggled();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }
        self.page = 0;
    }

    /// Jump to an arbitrary page; an out-of-range page simply yields an
    /// empty window downstream
    pub const fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Last valid page index for `total` results
    #[must_use]
    pub const fn last_page(&self, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            (total - 1) / self.page_size
        }
    }

    /// Advance one page, clamped against `total`
    pub const fn next_page(&mut self, total: usize) {
        let last = self.last_page(total);
        if self.page < last {
            self.page += 1;
        }
    }

    /// Go back one page
    pub const fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// Jump to the first page
    pub const fn first_page(&mut self) {
        self.page = 0;
    }

    /// Jump to the last page for `total` results
    pub const fn jump_last_page(&mut self, total: usize) {
        self.page = self.last_page(total);
    }
}
