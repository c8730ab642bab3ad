//! sheetlens — spreadsheet upload, inspection and chart derivation.
//!
//! The crate implements the ingestion-to-visualization pipeline behind a
//! spreadsheet viewer: uploads are validated and decoded into an immutable
//! tabular snapshot, a pure search/sort/pagination projection serves the
//! table widget, and a chart builder derives the trace/layout payload the
//! external charting engine renders.
//!
//! Rendering, toasts and the application shell are collaborators: they feed
//! [`data::FileMeta`] plus raw bytes in, and consume [`data::TableView`],
//! [`data::ChartSpec`] and [`notifications::Notification`] values out. The
//! whole pipeline runs in process memory; nothing is persisted.

pub mod constants;
pub mod data;
pub mod history;
pub mod notifications;
pub mod pipeline;
pub mod types;
