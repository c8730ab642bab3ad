//! Spreadsheet decoding.
//!
//! Turns raw workbook bytes into a [`TableStore`] via calamine's
//! auto-detecting reader (handles both legacy `.xls` and OOXML `.xlsx`
//! containers). Only the first sheet by position is considered; later
//! sheets are ignored. This is a documented limitation, not a bug.
//!
//! Row 0 of the sheet range is unconditionally the header row; there are no
//! header inference heuristics. All subsequent rows are data.

use crate::data::error::{DataError, DataResult};
use crate::types::{CellValue, TableStore};
use calamine::{Data, Reader, open_workbook_auto_from_rs};
use std::io::Cursor;

/// Decode workbook bytes into an immutable tabular snapshot.
pub fn decode_workbook(bytes: &[u8]) -> DataResult<TableStore> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let Some(first_sheet) = sheet_names.first() else {
        return Err(DataError::EmptyWorkbook);
    };
    let range = workbook.worksheet_range(first_sheet)?;

    let (height, width) = range.get_size();
    if height == 0 {
        return Err(DataError::EmptyWorkbook);
    }
    if width == 0 {
        return Err(DataError::NoHeaders);
    }
    if height == 1 {
        return Err(DataError::NoDataRows);
    }

    let mut rows_iter = range.rows();
    let Some(header_row) = rows_iter.next() else {
        return Err(DataError::EmptyWorkbook);
    };

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell_value(cell).to_display_string())
        .collect();

    // calamine ranges are rectangular, so every row already has exactly
    // `width` cells and the store invariant holds by construction
    let rows: Vec<Vec<CellValue>> = rows_iter
        .map(|row| row.iter().map(cell_value).collect())
        .collect();

    tracing::debug!(
        rows = rows.len(),
        columns = headers.len(),
        "decoded first sheet"
    );

    Ok(TableStore::new(headers, rows))
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Boolean(*b),
        // serial date number, same representation the sheet stores
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}
