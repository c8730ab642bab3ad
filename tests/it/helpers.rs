//! Test helpers and builders for reducing boilerplate in tests.
//!
//! Provides workbook fixture builders (real `.xlsx` bytes written with
//! `rust_xlsxwriter`) and a ready-to-use controller with a decoded table.

use rust_xlsxwriter::Workbook;
use sheetlens::constants::XLSX_MIME;
use sheetlens::data::FileMeta;
use sheetlens::pipeline::PipelineController;

/// Write a workbook whose first sheet holds `headers` and string `rows`.
pub fn workbook_bytes(headers: &[&str], rows: &[&[&str]]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            worksheet
                .write_string(r as u32 + 1, c as u16, *cell)
                .unwrap();
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// Like [`workbook_bytes`] but writes numeric data cells.
pub fn numeric_workbook_bytes(headers: &[&str], rows: &[&[f64]]) -> Vec<u8> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string(0, col as u16, *header).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            worksheet
                .write_number(r as u32 + 1, c as u16, *cell)
                .unwrap();
        }
    }
    workbook.save_to_buffer().unwrap()
}

/// Metadata for a small, well-typed xlsx upload.
pub fn xlsx_meta(file_name: &str) -> FileMeta {
    FileMeta::new(file_name, 4096, XLSX_MIME)
}

/// Controller with the classic Name/Sales fixture already installed.
pub fn controller_with_sales_table() -> PipelineController {
    let mut controller = PipelineController::new();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.write_string(0, 0, "Name").unwrap();
    worksheet.write_string(0, 1, "Sales").unwrap();
    worksheet.write_string(1, 0, "Alice").unwrap();
    worksheet.write_number(1, 1, 10.0).unwrap();
    worksheet.write_string(2, 0, "Bob").unwrap();
    worksheet.write_number(2, 1, 20.0).unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let ticket = controller.begin_upload(xlsx_meta("sales.xlsx")).unwrap();
    controller.finish_upload(ticket, &bytes).unwrap();
    controller
}

/// Opt into test log output with `RUST_LOG=debug cargo test`.
#[allow(dead_code)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
