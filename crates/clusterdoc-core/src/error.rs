//! Error types for report generation.
//!
//! Only fatal conditions are represented here. Malformed data rows are a
//! recoverable, per-row condition: the reader logs a warning with the row
//! number and continues, so they never surface as a [`ReportError`].

use thiserror::Error;

/// Errors that can occur while generating a clustered ticket report.
///
/// # Examples
///
/// ```rust
/// use clusterdoc_core::{ReportError, Result};
///
/// fn check_columns(missing: &[&str]) -> Result<()> {
///     if missing.is_empty() {
///         Ok(())
///     } else {
///         Err(ReportError::Schema(format!(
///             "Missing required column(s): {}",
///             missing.join(", ")
///         )))
///     }
/// }
///
/// assert!(check_columns(&["Cluster"]).is_err());
/// ```
#[derive(Error, Debug)]
pub enum ReportError {
    /// Missing sheet, missing header row, or missing required columns.
    ///
    /// Schema problems abort the entire run; there is nothing sensible to
    /// produce from an input whose shape is unknown.
    #[error("Schema error: {0}")]
    Schema(String),

    /// The workbook could not be opened or its first sheet could not be read.
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// The output document could not be assembled or packed.
    #[error("Document error: {0}")]
    Document(String),

    /// File I/O error while reading input or writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for [`Result<T, ReportError>`].
pub type Result<T> = std::result::Result<T, ReportError>;
