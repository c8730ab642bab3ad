//! Upload history bookkeeping.
//!
//! A fixed-size ring of the most recent successful uploads, newest first.
//! Display-layer data only; the pipeline never reads it back.

use crate::constants::MAX_UPLOAD_HISTORY;
use crate::types::TableStore;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use uuid::Uuid;

/// One successful upload, as shown in the history panel
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct UploadRecord {
    pub id: Uuid,
    pub file_name: String,
    pub uploaded_at: DateTime<Utc>,
    pub row_count: usize,
    pub column_count: usize,
}

impl UploadRecord {
    pub fn new(file_name: impl Into<String>, table: &TableStore) -> Self {
        Self {
            id: Uuid::new_v4(),
            file_name: file_name.into(),
            uploaded_at: Utc::now(),
            row_count: table.row_count(),
            column_count: table.column_count(),
        }
    }
}

/// Ring of the [`MAX_UPLOAD_HISTORY`] most recent records, newest first
#[derive(Clone, Debug, Default)]
pub struct UploadHistory {
    records: VecDeque<UploadRecord>,
}

impl UploadHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record; the oldest is evicted once the ring is full.
    pub fn record(&mut self, record: UploadRecord) {
        self.records.push_front(record);
        self.records.truncate(MAX_UPLOAD_HISTORY);
    }

    /// Records newest first.
    pub fn iter(&self) -> impl Iterator<Item = &UploadRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
