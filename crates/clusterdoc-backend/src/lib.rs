//! Format backends for clusterdoc: XLSX ingestion and DOCX report output.
//!
//! # Architecture
//!
//! ```text
//! XlsxTicketReader ──► ClusterGroups ──► ClusterRenderer ──► DocxReportWriter
//!    (calamine)       (clusterdoc-core)  (clusterdoc-core)      (docx-rs)
//! ```
//!
//! [`ReportGenerator`] wires the four stages together and is the only entry
//! point most callers need. The reader and writer are public so tests (and
//! embedders with unusual pipelines) can drive the stages separately.

pub mod docx;
pub mod generator;
pub mod options;
pub mod xlsx;

pub use docx::DocxReportWriter;
pub use generator::{ReportGenerator, ReportSummary};
pub use options::ReportOptions;
pub use xlsx::{RowScan, XlsxTicketReader};
