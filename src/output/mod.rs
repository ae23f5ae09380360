//! Output formatting for CLI display
//!
//! Plain-text rendering of the derived view for the `list` command, plus the
//! warning/summary helpers shared with the TUI entry points. All informational
//! output respects the global quiet flag; quiet mode emits bare tab-separated
//! rows for scripting.

use crate::model::Brewery;
use crate::view::PageView;
use colored::Colorize;

/// Placeholder for absent optional fields
pub const PLACEHOLDER: &str = "N/A";

/// Print a non-fatal warning to stderr unless quiet
pub fn warn(message: &str, quiet: bool) {
    if !quiet {
        eprintln!("{} {message}", "warning:".yellow().bold());
    }
}

/// City cell contents, with the placeholder for absent values
#[must_use]
pub fn format_city(city: Option<&str>) -> String {
    city.unwrap_or(PLACEHOLDER).to_string()
}

/// Website cell contents, with the placeholder for absent values
#[must_use]
pub fn format_website(website: Option<&str>) -> String {
    website.unwrap_or(PLACEHOLDER).to_string()
}

/// Summary line under the table ("Showing 15 microbreweries")
#[must_use]
pub fn summary_line(view: &PageView<'_>, search_term: &str) -> String {
    let mut line = format!("Showing {} microbreweries", view.total);
    if !search_term.is_empty() {
        line.push_str(&format!(" matching \"{search_term}\""));
    }
    line.push_str(&format!(
        " (page {}/{})",
        view.page + 1,
        view.page_count()
    ));
    line
}

/// Render the visible window as aligned text rows
///
/// Returns one string per output line. In quiet mode the header and alignment
/// are dropped in favor of tab-separated values.
#[must_use]
pub fn format_table(view: &PageView<'_>, search_term: &str, quiet: bool) -> Vec<String> {
    if quiet {
        return view
            .rows
            .iter()
            .map(|record| {
                format!(
                    "{}\t{}\t{}\t{}",
                    record.name,
                    format_city(record.city.as_deref()),
                    record.state,
                    format_website(record.website_url.as_deref()),
                )
            })
            .collect();
    }

    if view.is_empty() {
        let message = if search_term.is_empty() {
            "No microbreweries found."
        } else {
            "No breweries found matching your search."
        };
        return vec![format!("  {}", message.dimmed())];
    }

    let widths = column_widths(&view.rows);
    let mut lines = Vec::with_capacity(view.rows.len() + 1);
    // Pad first, then style: ANSI escapes inside a padded field would throw
    // the column alignment off.
    let header = format!(
        "  {:<name$}  {:<city$}  {:<state$}  Website",
        "Name",
        "City",
        "State",
        name = widths.0,
        city = widths.1,
        state = widths.2,
    );
    lines.push(header.bold().to_string());

    for record in &view.rows {
        let website = record.website_url.as_deref().map_or_else(
            || PLACEHOLDER.dimmed().to_string(),
            str::to_string,
        );
        lines.push(format!(
            "  {:<name$}  {:<city$}  {:<state$}  {website}",
            record.name,
            format_city(record.city.as_deref()),
            record.state,
            name = widths.0,
            city = widths.1,
            state = widths.2,
        ));
    }
    lines
}

/// Widths of the Name / City / State columns over the visible rows
fn column_widths(rows: &[&Brewery]) -> (usize, usize, usize) {
    let mut name = "Name".len();
    let mut city = "City".len();
    let mut state = "State".len();
    for record in rows {
        name = name.max(record.name.len());
        city = city.max(format_city(record.city.as_deref()).len());
        state = state.max(record.state.len());
    }
    (name, city, state)
}
