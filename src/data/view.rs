//! Search, sort and pagination over a [`TableStore`].
//!
//! The projection is a pure function of (store, view state): it borrows rows
//! from the snapshot and never mutates it. The caller owns the view state
//! and decides when to recompute.

use crate::constants::PREVIEW_ROW_LIMIT;
use crate::types::{CellValue, TableStore};
use serde::{Deserialize, Serialize};

/// Direction applied to the active sort column
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Re-derivable view state owned by the shell. Never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableViewState {
    pub search_term: String,
    pub sort_column: Option<String>,
    pub sort_direction: SortDirection,
    pub show_all: bool,
}

impl TableViewState {
    /// Clicking the active column flips direction; a new column starts
    /// ascending.
    pub fn toggle_sort(&mut self, column: &str) {
        if self.sort_column.as_deref() == Some(column) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = Some(column.to_string());
            self.sort_direction = SortDirection::Ascending;
        }
    }
}

/// Derived projection handed to the table widget
#[derive(Clone, Debug, PartialEq)]
pub struct TableView<'a> {
    /// Rows to render, in matched/sorted order
    pub visible_rows: Vec<&'a [CellValue]>,
    /// How many rows matched the search before pagination
    pub total_matched: usize,
    /// True when pagination hid part of the matched set
    pub is_truncated: bool,
}

/// Compute the visible projection of `table` under `state`.
pub fn project_view<'a>(table: &'a TableStore, state: &TableViewState) -> TableView<'a> {
    let needle = state.search_term.to_lowercase();

    let mut matched: Vec<&'a [CellValue]> = table
        .rows()
        .iter()
        .map(Vec::as_slice)
        .filter(|row| row_matches(row, &needle))
        .collect();

    if let Some(column) = &state.sort_column {
        // a stale column name (no longer a header) leaves the order as-is
        if let Some(idx) = table.column_index(column) {
            matched.sort_by(|a, b| {
                let ord = a[idx].total_cmp(&b[idx]);
                match state.sort_direction {
                    SortDirection::Ascending => ord,
                    SortDirection::Descending => ord.reverse(),
                }
            });
        }
    }

    let total_matched = matched.len();
    if state.show_all {
        TableView {
            visible_rows: matched,
            total_matched,
            is_truncated: false,
        }
    } else {
        let is_truncated = total_matched > PREVIEW_ROW_LIMIT;
        matched.truncate(PREVIEW_ROW_LIMIT);
        TableView {
            visible_rows: matched,
            total_matched,
            is_truncated,
        }
    }
}

/// Empty term matches everything; otherwise any cell's display string must
/// contain the term, case-insensitively.
fn row_matches(row: &[CellValue], needle: &str) -> bool {
    needle.is_empty()
        || row
            .iter()
            .any(|cell| cell.to_display_string().to_lowercase().contains(needle))
}
