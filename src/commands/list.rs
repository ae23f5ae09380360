//! The `list` command - print the derived table to stdout
//!
//! Runs the same load → filter → pipeline sequence as the interactive
//! session, then formats one page (or, with `--all`, the whole filtered
//! sequence) through the output module.

use crate::BrewdirError;
use crate::cli::{Cli, SortColumn};
use crate::model::filter_micro;
use crate::output;
use crate::source::Source;
use crate::view::state::{SortDirection, ViewState};
use crate::view::{PageView, derive_view};

/// Options for a single `list` invocation, straight from the CLI
#[derive(Debug, Clone)]
pub struct ListOptions {
    pub search: Option<String>,
    pub sort: SortColumn,
    pub desc: bool,
    pub page: usize,
    pub page_size: usize,
    pub all: bool,
}

impl ListOptions {
    /// Translate the options into pipeline state over `total` records
    fn view_state(&self, total: usize) -> ViewState {
        // --all widens the window to the whole working set
        let page_size = if self.all {
            total.max(1)
        } else {
            self.page_size
        };

        let mut state = ViewState::new(page_size);
        if let Some(term) = &self.search {
            state.set_search(term.clone());
        }
        state.sort_field = self.sort.into();
        if self.desc {
            state.sort_direction = SortDirection::Desc;
        }
        if !self.all {
            state.set_page(self.page);
        }
        state
    }
}

/// Execute the command
///
/// # Errors
///
/// Returns `BrewdirError` if writing the table fails. Load failures do not
/// error here; the fallback collection is substituted with a warning.
pub fn run(cli: &Cli, options: &ListOptions) -> Result<(), BrewdirError> {
    let source = Source::new(cli.endpoint.clone(), cli.offline);

    let outcome = source.load();
    if let Some(reason) = outcome.fallback_reason() {
        output::warn(&format!("using built-in data ({reason})"), cli.quiet);
    }

    let working_set = filter_micro(outcome.into_records());
    let state = options.view_state(working_set.len());
    let page = derive_view(&working_set, &state);

    print_page(&page, &state, cli.quiet);
    Ok(())
}

fn print_page(page: &PageView<'_>, state: &ViewState, quiet: bool) {
    for line in output::format_table(page, &state.search_term, quiet) {
        println!("{line}");
    }
    if !quiet {
        println!();
        println!("{}", output::summary_line(page, &state.search_term));
    }
}
