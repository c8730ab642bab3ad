//! Core types for the ingestion pipeline.
//!
//! This module defines the fundamental data structures used throughout the
//! crate: cell values, the immutable tabular snapshot, axis selection, and
//! the chart type enumeration.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// Cell Values
// ============================================================================

/// A single cell value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Empty,
}

impl CellValue {
    /// String form used for display, search, and header rendering
    pub fn to_display_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => {
                // Format nicely: no trailing zeros for whole numbers
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    format!("{}", *n as i64)
                } else {
                    format!("{}", n)
                }
            }
            CellValue::Boolean(b) => if *b { "true" } else { "false" }.to_string(),
            CellValue::Empty => String::new(),
        }
    }

    /// Numeric coercion shared by sorting and chart building.
    ///
    /// A value coerces iff it is a number, or text whose trimmed content
    /// parses fully as a finite f64. Booleans and empty cells never coerce.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => n.is_finite().then_some(*n),
            CellValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Deterministic total order for sorting heterogeneous columns.
    ///
    /// Each value maps to a sort key: numeric-coercible values form one class
    /// compared with `f64::total_cmp`; the remaining classes rank
    /// `Empty < Boolean < numeric < Text`. Key extraction keeps the order
    /// transitive regardless of how types are mixed within a column.
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp_key(&other.sort_key())
    }

    fn sort_key(&self) -> SortKey<'_> {
        if let Some(n) = self.as_f64() {
            return SortKey::Numeric(n);
        }
        match self {
            CellValue::Empty => SortKey::Empty,
            CellValue::Boolean(b) => SortKey::Boolean(*b),
            CellValue::Text(s) => SortKey::Text(s),
            // non-finite numbers never come out of the decoder, but
            // total_cmp still gives them a fixed place if they do
            CellValue::Number(n) => SortKey::Numeric(*n),
        }
    }
}

enum SortKey<'a> {
    Empty,
    Boolean(bool),
    Numeric(f64),
    Text(&'a str),
}

impl SortKey<'_> {
    fn rank(&self) -> u8 {
        match self {
            SortKey::Empty => 0,
            SortKey::Boolean(_) => 1,
            SortKey::Numeric(_) => 2,
            SortKey::Text(_) => 3,
        }
    }

    fn cmp_key(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortKey::Boolean(a), SortKey::Boolean(b)) => a.cmp(b),
            (SortKey::Numeric(a), SortKey::Numeric(b)) => a.total_cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

// ============================================================================
// Tabular Snapshot
// ============================================================================

/// Immutable snapshot of one decoded sheet: ordered headers plus a row
/// matrix where every row has exactly `headers().len()` cells.
///
/// Constructed only by the decoder; replaced wholesale on a new upload.
#[derive(Clone, Debug, PartialEq)]
pub struct TableStore {
    headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl TableStore {
    /// Invariants (non-empty headers/rows, rectangular rows) are enforced by
    /// the decoder before construction.
    pub(crate) fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        debug_assert!(!headers.is_empty());
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().all(|r| r.len() == headers.len()));
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Position of the first header with this name. Headers are
    /// position-significant and not required to be unique.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

// ============================================================================
// Axis Selection
// ============================================================================

/// Column names selected for the chart axes. An empty string means
/// unselected; names are validated against the live store at build time.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    pub x_column: String,
    pub y_column: String,
}

impl AxisSelection {
    /// Default policy applied when a new store becomes ready: first column
    /// drives X, second drives Y, empty when absent.
    pub fn for_table(table: &TableStore) -> Self {
        Self {
            x_column: table.headers().first().cloned().unwrap_or_default(),
            y_column: table.headers().get(1).cloned().unwrap_or_default(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.x_column.is_empty() && !self.y_column.is_empty()
    }
}

// ============================================================================
// Chart Types
// ============================================================================

/// Types of charts available
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartType {
    #[default]
    Bar,
    Line,
    Scatter,
    Pie,
    Bar3d,
    Scatter3d,
}

impl ChartType {
    pub fn label(&self) -> &'static str {
        match self {
            ChartType::Bar => "Bar",
            ChartType::Line => "Line",
            ChartType::Scatter => "Scatter",
            ChartType::Pie => "Pie",
            ChartType::Bar3d => "3D Bar",
            ChartType::Scatter3d => "3D Scatter",
        }
    }

    pub fn all() -> &'static [ChartType] {
        &[
            ChartType::Bar,
            ChartType::Line,
            ChartType::Scatter,
            ChartType::Pie,
            ChartType::Bar3d,
            ChartType::Scatter3d,
        ]
    }

    /// Whether the Y column must contain at least one numeric-coercible
    /// value. Pie charts take raw values and are exempt.
    pub fn requires_numeric_y(&self) -> bool {
        !matches!(self, ChartType::Pie)
    }

    /// The 3D variants drive a color scale from the Y values instead of a
    /// true third spatial axis.
    pub fn color_encoded(&self) -> bool {
        matches!(self, ChartType::Bar3d | ChartType::Scatter3d)
    }
}
