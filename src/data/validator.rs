//! Pre-parse upload validation.
//!
//! Checks declared size and MIME type before any bytes are decoded. Size is
//! checked first; the first failing check is the one surfaced.

use crate::constants::{MAX_UPLOAD_BYTES, SUPPORTED_MIME_TYPES};
use crate::data::error::{DataError, DataResult};

/// Metadata the file-selection layer reports about an upload
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileMeta {
    /// Original file name, carried through to history and notifications
    pub file_name: String,
    /// Declared size in bytes
    pub size_bytes: u64,
    /// Declared MIME type
    pub mime_type: String,
}

impl FileMeta {
    pub fn new(
        file_name: impl Into<String>,
        size_bytes: u64,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            size_bytes,
            mime_type: mime_type.into(),
        }
    }
}

/// Validate an upload before decoding. Pure, no side effects.
pub fn validate_upload(meta: &FileMeta) -> DataResult<()> {
    if meta.size_bytes > MAX_UPLOAD_BYTES {
        return Err(DataError::SizeExceeded {
            size_bytes: meta.size_bytes,
            max_bytes: MAX_UPLOAD_BYTES,
        });
    }

    if !SUPPORTED_MIME_TYPES.contains(&meta.mime_type.as_str()) {
        return Err(DataError::UnsupportedType {
            mime_type: meta.mime_type.clone(),
        });
    }

    Ok(())
}
