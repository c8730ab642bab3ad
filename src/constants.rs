//! Application-wide constants.
//!
//! Centralizes upload limits and view defaults to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Upload Limits
// ============================================================================

/// Maximum accepted upload size in bytes (10 MiB, hard ceiling)
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Declared MIME type of legacy `.xls` workbooks
pub const XLS_MIME: &str = "application/vnd.ms-excel";

/// Declared MIME type of OOXML `.xlsx` workbooks
pub const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// The two spreadsheet MIME types the validator accepts
pub const SUPPORTED_MIME_TYPES: [&str; 2] = [XLS_MIME, XLSX_MIME];

// ============================================================================
// Table View
// ============================================================================

/// Number of rows shown when the table preview is collapsed
pub const PREVIEW_ROW_LIMIT: usize = 10;

// ============================================================================
// Upload History
// ============================================================================

/// Maximum upload records retained, oldest evicted first
pub const MAX_UPLOAD_HISTORY: usize = 5;
