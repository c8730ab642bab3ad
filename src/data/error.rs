//! Error types for the ingestion pipeline.
//!
//! Provides unified error handling for upload validation, spreadsheet
//! decoding, and chart derivation.

use thiserror::Error;

// Re-export upload limits from constants module for consistency
pub use crate::constants::{MAX_UPLOAD_BYTES, SUPPORTED_MIME_TYPES};

/// Errors that can occur in the ingestion-to-visualization pipeline
#[derive(Error, Debug)]
pub enum DataError {
    /// Upload exceeds the hard size ceiling
    #[error("File too large: {size_bytes} bytes (max {max_bytes} bytes)")]
    SizeExceeded { size_bytes: u64, max_bytes: u64 },

    /// Declared MIME type is not a recognized spreadsheet format
    #[error("Unsupported file type: {mime_type}")]
    UnsupportedType { mime_type: String },

    /// Workbook has no sheets, or the first sheet has no cells
    #[error("Workbook is empty")]
    EmptyWorkbook,

    /// Header row has zero columns
    #[error("No header columns found")]
    NoHeaders,

    /// Workbook has a header row but no data rows
    #[error("No data rows below the header row")]
    NoDataRows,

    /// Decoder-internal failure (corrupt bytes, bad container)
    #[error("Spreadsheet decode error: {0}")]
    Codec(#[from] calamine::Error),

    /// Chart build requested without both axes selected
    #[error("Both X and Y axis columns must be selected")]
    MissingAxis,

    /// Axis column name is absent from the current table
    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    /// Numeric-Y chart type found no numeric-coercible Y values
    #[error("Column {column:?} contains no numeric values")]
    NoNumericData { column: String },

    /// A prior upload is still decoding; submissions are rejected, not queued
    #[error("Another upload is still being decoded")]
    DecodeInFlight,
}

/// Result type alias for pipeline operations
pub type DataResult<T> = Result<T, DataError>;
