//! The search → sort → paginate projection
//!
//! `derive_view` is a pure function from (working set, view state) to the
//! page that should be on screen. It is recomputed from scratch on every
//! relevant state change and never mutates the source collection; sorting
//! happens on a derived vector of references.

use super::state::ViewState;
use crate::model::Brewery;

/// One page of the derived view, plus the figures the footer needs
#[derive(Debug)]
pub struct PageView<'a> {
    /// Records in the visible window, in display order
    pub rows: Vec<&'a Brewery>,
    /// Length of the filtered (pre-pagination) sequence
    pub total: usize,
    /// Zero-based page this window corresponds to
    pub page: usize,
    pub page_size: usize,
}

impl PageView<'_> {
    /// Number of pages the filtered sequence spans (at least 1)
    #[must_use]
    pub const fn page_count(&self) -> usize {
        if self.total == 0 {
            1
        } else {
            self.total.div_ceil(self.page_size)
        }
    }

    /// Whether the visible window holds no rows
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Case-folded substring match of `term` against name or state
///
/// An empty term matches every record.
#[must_use]
pub fn matches_search(record: &Brewery, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    record.name.to_lowercase().contains(&needle) || record.state.to_lowercase().contains(&needle)
}

/// Project the working set through search, sort, and pagination
#[must_use]
pub fn derive_view<'a>(records: &'a [Brewery], view: &ViewState) -> PageView<'a> {
    let mut filtered: Vec<&Brewery> = records
        .iter()
        .filter(|record| matches_search(record, &view.search_term))
        .collect();

    // Stable sort on the case-folded key; a missing value compares as the
    // empty string and therefore sorts first ascending. The direction
    // reverses the comparison itself, keeping equal keys in input order.
    filtered.sort_by(|a, b| {
        let a_key = view.sort_field.key(a).to_lowercase();
        let b_key = view.sort_field.key(b).to_lowercase();
        view.sort_direction.apply(a_key.cmp(&b_key))
    });

    let total = filtered.len();
    let start = view.page.saturating_mul(view.page_size);
    let rows = if start >= total {
        Vec::new()
    } else {
        let end = (start + view.page_size).min(total);
        filtered[start..end].to_vec()
    };

    PageView {
        rows,
        total,
        page: view.page,
        page_size: view.page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::fallback_records;
    use crate::testing::{brewery, brewery_in};
    use crate::view::state::{SortDirection, SortField};

    fn view(page_size: usize) -> ViewState {
        ViewState::new(page_size)
    }

    #[test]
    fn test_empty_term_matches_everything() {
        let records = fallback_records();
        let page = derive_view(&records, &view(100));
        assert_eq!(page.total, records.len());
    }

    #[test]
    fn test_search_matches_name_or_state_case_folded() {
        let records = vec![
            brewery_in("1", "Stone Brewing", "California"),
            brewery_in("2", "Brooklyn Brewery", "New York"),
            brewery_in("3", "Caliber Ales", "Ohio"),
        ];

        let mut state = view(100);
        state.set_search("CALI");
        let page = derive_view(&records, &state);

        // "Stone" via state, "Caliber" via name
        let names: Vec<&str> = page.rows.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Caliber Ales", "Stone Brewing"]);
    }

    #[test]
    fn test_search_keeps_every_matching_record() {
        let records = fallback_records();
        let mut state = view(100);
        state.set_search("brew");

        let page = derive_view(&records, &state);
        let expected = records
            .iter()
            .filter(|b| matches_search(b, "brew"))
            .count();
        assert_eq!(page.total, expected);
    }

    #[test]
    fn test_sort_by_state_descending() {
        let records = fallback_records();
        let mut state = view(5);
        state.sort_by(SortField::State);
        state.sort_by(SortField::State); // toggle to descending

        let page = derive_view(&records, &state);
        assert_eq!(page.rows[0].state, "Pennsylvania");
    }

    #[test]
    fn test_sort_is_idempotent() {
        let records = fallback_records();
        let mut state = view(100);
        state.sort_field = SortField::State;

        let first: Vec<String> = derive_view(&records, &state)
            .rows
            .iter()
            .map(|b| b.id.clone())
            .collect();

        // Re-deriving from the same inputs must not reorder anything
        let second: Vec<String> = derive_view(&records, &state)
            .rows
            .iter()
            .map(|b| b.id.clone())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_sort_stability_on_equal_keys() {
        // Three records in the same state: direction flips must not reorder
        // them relative to each other.
        let records = vec![
            brewery_in("a", "Alpha", "Oregon"),
            brewery_in("b", "Beta", "Oregon"),
            brewery_in("c", "Gamma", "Oregon"),
        ];

        let mut state = view(100);
        state.sort_field = SortField::State;

        let asc: Vec<&str> = derive_view(&records, &state)
            .rows
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(asc, vec!["a", "b", "c"]);

        state.sort_direction = SortDirection::Desc;
        let desc: Vec<&str> = derive_view(&records, &state)
            .rows
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        assert_eq!(desc, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_reversing_direction_reverses_distinct_keys() {
        let records = vec![
            brewery_in("1", "Alpha", "Oregon"),
            brewery_in("2", "Beta", "California"),
        ];

        let mut state = view(100);
        state.sort_field = SortField::State;
        let asc = derive_view(&records, &state);
        assert_eq!(asc.rows[0].id, "2");

        state.sort_direction = SortDirection::Desc;
        let desc = derive_view(&records, &state);
        assert_eq!(desc.rows[0].id, "1");
    }

    #[test]
    fn test_missing_sort_value_sorts_first_ascending() {
        let records = vec![
            brewery_in("1", "Zed Brewing", "Texas"),
            brewery("2", "Nameless State", None, "", None),
        ];

        let mut state = view(100);
        state.sort_field = SortField::State;
        let page = derive_view(&records, &state);
        assert_eq!(page.rows[0].id, "2");
    }

    #[test]
    fn test_pagination_windows_partition_the_sequence() {
        let records = fallback_records();
        let mut state = view(4);

        let mut seen: Vec<String> = Vec::new();
        for page_idx in 0..derive_view(&records, &state).page_count() {
            state.set_page(page_idx);
            let page = derive_view(&records, &state);
            assert!(page.rows.len() <= 4);
            seen.extend(page.rows.iter().map(|b| b.id.clone()));
        }

        // Consecutive, non-overlapping, covering every record exactly once
        assert_eq!(seen.len(), records.len());
        let mut deduped = seen.clone();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), records.len());
    }

    #[test]
    fn test_out_of_range_page_yields_empty_window() {
        let records = fallback_records();
        let mut state = view(5);
        state.set_page(99);

        let page = derive_view(&records, &state);
        assert!(page.is_empty());
        assert_eq!(page.total, records.len());
    }

    #[test]
    fn test_page_count_of_empty_result_is_one() {
        let records: Vec<crate::model::Brewery> = Vec::new();
        let page = derive_view(&records, &view(5));
        assert_eq!(page.page_count(), 1);
        assert!(page.is_empty());
    }

    #[test]
    fn test_derive_view_does_not_mutate_source() {
        let records = fallback_records();
        let before = records.clone();

        let mut state = view(3);
        state.set_search("brew");
        state.sort_by(SortField::State);
        let _ = derive_view(&records, &state);

        assert_eq!(records, before);
    }
}
