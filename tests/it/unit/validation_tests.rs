//! Unit tests for upload validation.

use sheetlens::constants::{MAX_UPLOAD_BYTES, XLS_MIME, XLSX_MIME};
use sheetlens::data::{DataError, FileMeta, validate_upload};

#[test]
fn test_eleven_mib_file_is_rejected_on_size() {
    let meta = FileMeta::new("report.xlsx", 11 * 1024 * 1024, XLSX_MIME);
    match validate_upload(&meta) {
        Err(DataError::SizeExceeded {
            size_bytes,
            max_bytes,
        }) => {
            assert_eq!(size_bytes, 11 * 1024 * 1024);
            assert_eq!(max_bytes, MAX_UPLOAD_BYTES);
        }
        other => panic!("expected SizeExceeded, got {other:?}"),
    }
}

#[test]
fn test_legacy_and_ooxml_types_accepted() {
    for mime in [XLS_MIME, XLSX_MIME] {
        let meta = FileMeta::new("ok.xls", 100, mime);
        assert!(validate_upload(&meta).is_ok(), "rejected {mime}");
    }
}

#[test]
fn test_near_miss_mime_types_rejected() {
    for mime in [
        "text/csv",
        "application/vnd.oasis.opendocument.spreadsheet",
        "application/zip",
        "",
    ] {
        let meta = FileMeta::new("bad", 100, mime);
        assert!(
            matches!(
                validate_upload(&meta),
                Err(DataError::UnsupportedType { .. })
            ),
            "accepted {mime:?}"
        );
    }
}

#[test]
fn test_zero_byte_file_passes_size_check() {
    // an empty file is a decoder problem, not a validator problem
    let meta = FileMeta::new("empty.xlsx", 0, XLSX_MIME);
    assert!(validate_upload(&meta).is_ok());
}
