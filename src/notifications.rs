//! Structured notification events for the toast collaborator.
//!
//! The pipeline queues one event per boundary outcome; the shell drains the
//! queue and renders toasts however it likes. Every failure kind maps to
//! exactly one user-facing message.

use crate::data::DataError;
use crate::types::TableStore;

/// Visual flavor of a notification
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// One user-facing event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            description: description.into(),
        }
    }

    /// The single user-facing message for each failure kind.
    pub fn for_error(err: &DataError) -> Self {
        let title = match err {
            DataError::SizeExceeded { .. } => "File too large",
            DataError::UnsupportedType { .. } => "Unsupported file type",
            DataError::EmptyWorkbook => "Empty workbook",
            DataError::NoHeaders => "No headers",
            DataError::NoDataRows => "No data rows",
            DataError::Codec(_) => "Could not read spreadsheet",
            DataError::MissingAxis => "Select both axes",
            DataError::ColumnNotFound { .. } => "Column not found",
            DataError::NoNumericData { .. } => "No numeric data",
            DataError::DecodeInFlight => "Upload in progress",
        };
        Self::error(title, err.to_string())
    }

    /// Reports a successfully installed table.
    pub fn upload_success(file_name: &str, table: &TableStore) -> Self {
        Self::success(
            "Spreadsheet loaded",
            format!(
                "{}: {} rows, {} columns",
                file_name,
                table.row_count(),
                table.column_count()
            ),
        )
    }
}

/// FIFO of pending notifications, drained by the shell
#[derive(Debug, Default)]
pub struct NotificationQueue {
    pending: Vec<Notification>,
}

impl NotificationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, notification: Notification) {
        self.pending.push(notification);
    }

    /// Hand every pending event to the caller, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.pending)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
