//! View module - the search/sort/paginate pipeline and its state
//!
//! UI-agnostic: the TUI and the `list` command both drive the same state
//! commands and read the same derived view.
//!
//! # Architecture
//!
//! - `state`: [`ViewState`] and the commands that mutate it
//! - `pipeline`: the pure projection from (records, state) to a [`PageView`]

pub mod pipeline;
pub mod state;

pub use pipeline::{PageView, derive_view, matches_search};
pub use state::{DEFAULT_PAGE_SIZE, SortDirection, SortField, ViewState};
