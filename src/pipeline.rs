//! Pipeline orchestration.
//!
//! [`PipelineController`] drives validate → decode → install, owns the single
//! active [`TableStore`], and recomputes the table view and chart spec on
//! demand. There is no hidden dependency tracking: the shell mutates state
//! through the controller and asks for fresh projections when it wants them.
//!
//! ## Upload lifecycle
//!
//! The only suspension point is the shell's asynchronous read of file bytes,
//! modeled as a two-phase submission:
//!
//! 1. [`PipelineController::begin_upload`] validates the metadata and hands
//!    out a generation-stamped [`DecodeTicket`].
//! 2. The shell reads the bytes however it likes, then redeems the ticket
//!    with [`PipelineController::finish_upload`].
//!
//! While a ticket is outstanding the controller is `Decoding` and rejects
//! further submissions (rejection, not queuing). A ticket invalidated by
//! [`PipelineController::reset`] is discarded on redemption.

use crate::data::{
    ChartSpec, DataError, DataResult, FileMeta, TableView, TableViewState, build_chart,
    decode_workbook, project_view, validate_upload,
};
use crate::history::{UploadHistory, UploadRecord};
use crate::notifications::{Notification, NotificationQueue};
use crate::types::{AxisSelection, ChartType, TableStore};

/// Controller state machine phases
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PipelinePhase {
    #[default]
    Empty,
    Validating,
    Decoding,
    Ready,
    Failed {
        reason: String,
    },
}

/// Proof that a submission passed validation. Redeemed exactly once; a
/// ticket whose generation no longer matches is discarded.
#[derive(Debug)]
pub struct DecodeTicket {
    generation: u64,
}

/// Orchestrates the ingestion pipeline and owns all re-derivable UI state.
#[derive(Debug, Default)]
pub struct PipelineController {
    phase: PipelinePhase,
    table: Option<TableStore>,
    axes: AxisSelection,
    chart_type: ChartType,
    view_state: TableViewState,
    history: UploadHistory,
    notifications: NotificationQueue,
    pending_file: Option<FileMeta>,
    generation: u64,
}

impl PipelineController {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Upload lifecycle
    // ------------------------------------------------------------------

    /// Submit a file for ingestion. Allowed from `Empty`, `Ready` (the
    /// current store is retained until superseded) and `Failed` (retry);
    /// rejected while a decode is in flight.
    pub fn begin_upload(&mut self, meta: FileMeta) -> DataResult<DecodeTicket> {
        if self.phase == PipelinePhase::Decoding {
            return Err(DataError::DecodeInFlight);
        }

        self.phase = PipelinePhase::Validating;
        tracing::info!(
            file = %meta.file_name,
            size_bytes = meta.size_bytes,
            mime = %meta.mime_type,
            "upload submitted"
        );

        if let Err(err) = validate_upload(&meta) {
            tracing::warn!(file = %meta.file_name, %err, "upload rejected");
            self.notifications.push(Notification::for_error(&err));
            self.phase = PipelinePhase::Failed {
                reason: err.to_string(),
            };
            return Err(err);
        }

        self.generation += 1;
        self.pending_file = Some(meta);
        self.phase = PipelinePhase::Decoding;
        Ok(DecodeTicket {
            generation: self.generation,
        })
    }

    /// Redeem a ticket with the bytes the shell read. Stale tickets are
    /// discarded without touching any state.
    pub fn finish_upload(&mut self, ticket: DecodeTicket, bytes: &[u8]) -> DataResult<()> {
        if ticket.generation != self.generation {
            tracing::debug!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale decode result"
            );
            return Ok(());
        }

        match decode_workbook(bytes) {
            Ok(table) => {
                self.install(table);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(%err, "decode failed");
                self.notifications.push(Notification::for_error(&err));
                self.pending_file = None;
                self.phase = PipelinePhase::Failed {
                    reason: err.to_string(),
                };
                Err(err)
            }
        }
    }

    /// Install a freshly decoded store: re-resolve axes via the default
    /// policy, reset the view state, record history, and go `Ready`.
    fn install(&mut self, table: TableStore) {
        self.axes = AxisSelection::for_table(&table);
        self.view_state = TableViewState::default();

        if let Some(meta) = self.pending_file.take() {
            self.notifications
                .push(Notification::upload_success(&meta.file_name, &table));
            self.history.record(UploadRecord::new(meta.file_name, &table));
        }

        tracing::info!(
            rows = table.row_count(),
            columns = table.column_count(),
            "table installed"
        );
        self.table = Some(table);
        self.phase = PipelinePhase::Ready;
    }

    /// Clear store, axis selection and view state, and invalidate any
    /// outstanding ticket. Upload history survives.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.table = None;
        self.axes = AxisSelection::default();
        self.view_state = TableViewState::default();
        self.pending_file = None;
        self.phase = PipelinePhase::Empty;
        tracing::info!("pipeline reset");
    }

    // ------------------------------------------------------------------
    // State accessors
    // ------------------------------------------------------------------

    pub fn phase(&self) -> &PipelinePhase {
        &self.phase
    }

    pub fn table(&self) -> Option<&TableStore> {
        self.table.as_ref()
    }

    pub fn axes(&self) -> &AxisSelection {
        &self.axes
    }

    pub fn chart_type(&self) -> ChartType {
        self.chart_type
    }

    pub fn view_state(&self) -> &TableViewState {
        &self.view_state
    }

    pub fn history(&self) -> &UploadHistory {
        &self.history
    }

    /// Hand pending notification events to the toast collaborator.
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }

    // ------------------------------------------------------------------
    // View and chart configuration
    // ------------------------------------------------------------------

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view_state.search_term = term.into();
    }

    pub fn toggle_sort(&mut self, column: &str) {
        self.view_state.toggle_sort(column);
    }

    pub fn set_show_all(&mut self, show_all: bool) {
        self.view_state.show_all = show_all;
    }

    pub fn set_x_column(&mut self, column: impl Into<String>) {
        self.axes.x_column = column.into();
    }

    pub fn set_y_column(&mut self, column: impl Into<String>) {
        self.axes.y_column = column.into();
    }

    pub fn set_chart_type(&mut self, chart_type: ChartType) {
        self.chart_type = chart_type;
    }

    // ------------------------------------------------------------------
    // On-demand projections
    // ------------------------------------------------------------------

    /// Recompute the table view from the live store. `None` until a store
    /// is installed.
    pub fn current_view(&self) -> Option<TableView<'_>> {
        self.table
            .as_ref()
            .map(|table| project_view(table, &self.view_state))
    }

    /// Recompute the chart spec from the live store. Failures are returned
    /// inline and never alter the store or the view.
    pub fn current_chart(&self) -> Option<DataResult<ChartSpec>> {
        self.table
            .as_ref()
            .map(|table| build_chart(table, &self.axes, self.chart_type))
    }
}
