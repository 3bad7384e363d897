//! Clustered ticket ingestion from Excel workbooks using calamine.
//!
//! The first sheet is authoritative: its first row must be a header
//! containing every required column name (case-sensitive exact match after
//! trimming). Rows whose `Cluster` cell is not numeric are skipped with a
//! warning carrying the spreadsheet row number; fully empty rows are
//! skipped silently. Neither condition is fatal — only a broken schema or
//! an unreadable workbook aborts the run.

// Clippy pedantic allows:
// - Cluster ids are small integers; f64 -> i64 truncation is the contract
#![allow(clippy::cast_possible_truncation)]

use calamine::{open_workbook, Data, DataType, Range, Reader, Xlsx};
use clusterdoc_core::{ReportError, Result, TicketRecord};
use std::path::Path;

const COL_DOCKET_NO: &str = "docket_no";
const COL_MAIL_LIST_ID: &str = "mail_list_id";
const COL_MAIL_ID: &str = "mail_id";
const COL_TICKET_ID: &str = "ticket_id";
const COL_DISPOSITION_NAME: &str = "disposition_name";
const COL_SUB_DISPOSITION_NAME: &str = "sub_disposition_name";
const COL_PRIORITY_NAME: &str = "priority_name";
const COL_PROBLEM_REPORTED: &str = "problem_reported";
const COL_ASSIGNED_TO_DEPT_NAME: &str = "assigned_to_dept_name";
const COL_PROCESSED_BODY: &str = "ProcessedBody_cleaned";
const COL_SOLUTION: &str = "Solution";
const COL_CLUSTER: &str = "Cluster";

/// Resolved column positions for one workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMap {
    docket_no: usize,
    mail_list_id: usize,
    mail_id: usize,
    ticket_id: usize,
    disposition_name: usize,
    sub_disposition_name: usize,
    priority_name: usize,
    problem_reported: usize,
    assigned_to_dept_name: usize,
    processed_body: usize,
    solution: usize,
    cluster: usize,
}

impl ColumnMap {
    /// Resolve every required column against the header row, collecting all
    /// missing names into a single schema error.
    fn resolve(header: &[Data]) -> Result<Self> {
        let mut missing = Vec::new();
        let mut find = |name: &'static str| {
            header
                .iter()
                .position(|cell| cell_text(cell) == name)
                .unwrap_or_else(|| {
                    missing.push(name);
                    0
                })
        };

        let map = Self {
            docket_no: find(COL_DOCKET_NO),
            mail_list_id: find(COL_MAIL_LIST_ID),
            mail_id: find(COL_MAIL_ID),
            ticket_id: find(COL_TICKET_ID),
            disposition_name: find(COL_DISPOSITION_NAME),
            sub_disposition_name: find(COL_SUB_DISPOSITION_NAME),
            priority_name: find(COL_PRIORITY_NAME),
            problem_reported: find(COL_PROBLEM_REPORTED),
            assigned_to_dept_name: find(COL_ASSIGNED_TO_DEPT_NAME),
            processed_body: find(COL_PROCESSED_BODY),
            solution: find(COL_SOLUTION),
            cluster: find(COL_CLUSTER),
        };

        if missing.is_empty() {
            Ok(map)
        } else {
            Err(ReportError::Schema(format!(
                "Missing required column(s) in header row: {}",
                missing.join(", ")
            )))
        }
    }
}

/// Result of scanning a sheet: valid records plus skip statistics.
#[derive(Debug, Clone, Default)]
pub struct RowScan {
    /// Records in original row order.
    pub records: Vec<TicketRecord>,
    /// Rows dropped for lacking a numeric cluster value.
    pub skipped_rows: usize,
}

/// Reads clustered ticket records from `.xlsx` workbooks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct XlsxTicketReader;

impl XlsxTicketReader {
    /// Create a new reader.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Read all valid records from the first sheet of the workbook.
    ///
    /// # Errors
    /// Returns [`ReportError::Workbook`] when the file cannot be opened or
    /// its first sheet cannot be read, and [`ReportError::Schema`] when the
    /// header row is absent or misses required columns.
    pub fn read_records<P: AsRef<Path>>(&self, path: P) -> Result<RowScan> {
        let path_ref = path.as_ref();
        let filename = path_ref.display().to_string();

        let mut workbook: Xlsx<_> = open_workbook(path_ref).map_err(|e| {
            ReportError::Workbook(format!("Failed to open XLSX: {e}: {filename}"))
        })?;

        let sheet_names = workbook.sheet_names();
        let Some(first_sheet) = sheet_names.first().cloned() else {
            return Err(ReportError::Schema(format!(
                "No sheets found in workbook: {filename}"
            )));
        };

        let range = workbook.worksheet_range(&first_sheet).map_err(|e| {
            ReportError::Workbook(format!(
                "Failed to read sheet {first_sheet:?}: {e}: {filename}"
            ))
        })?;

        scan_rows(&range)
    }
}

/// Extract records from a sheet range whose first row is the header.
fn scan_rows(range: &Range<Data>) -> Result<RowScan> {
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Err(ReportError::Schema(
            "Sheet is empty or header row is missing".to_string(),
        ));
    };
    let columns = ColumnMap::resolve(header)?;

    let mut scan = RowScan::default();
    for (idx, row) in rows.enumerate() {
        // 1-based spreadsheet row number; the header is row 1.
        let row_no = idx + 2;

        if row.iter().all(DataType::is_empty) {
            continue;
        }

        match record_from_row(row, &columns) {
            RowOutcome::Record(record) => scan.records.push(record),
            RowOutcome::BadCluster(cell) => {
                log::warn!(
                    "Skipping row {row_no}: invalid or missing cluster value {cell:?}"
                );
                scan.skipped_rows += 1;
            }
        }
    }
    Ok(scan)
}

enum RowOutcome {
    Record(TicketRecord),
    BadCluster(String),
}

fn record_from_row(row: &[Data], columns: &ColumnMap) -> RowOutcome {
    let Some(cluster) = cluster_value(row.get(columns.cluster)) else {
        let cell = row.get(columns.cluster).map(cell_text).unwrap_or_default();
        return RowOutcome::BadCluster(cell);
    };

    let field = |idx: usize| row.get(idx).map(cell_text).unwrap_or_default();
    RowOutcome::Record(TicketRecord {
        docket_no: field(columns.docket_no),
        mail_list_id: field(columns.mail_list_id),
        mail_id: field(columns.mail_id),
        ticket_id: field(columns.ticket_id),
        disposition_name: field(columns.disposition_name),
        sub_disposition_name: field(columns.sub_disposition_name),
        priority_name: field(columns.priority_name),
        problem_reported: field(columns.problem_reported),
        assigned_to_dept_name: field(columns.assigned_to_dept_name),
        processed_body: field(columns.processed_body),
        solution: field(columns.solution),
        cluster,
    })
}

/// Cluster ids come from numeric cells only; fractional values are
/// truncated toward zero. Anything else drops the row.
fn cluster_value(cell: Option<&Data>) -> Option<i64> {
    match cell {
        Some(Data::Int(i)) => Some(*i),
        Some(Data::Float(f)) => Some(f.trunc() as i64),
        _ => None,
    }
}

/// Stateless cell formatter: trimmed display text, empty for blank or error
/// cells, integral floats rendered without a trailing `.0`.
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{f:.0}"),
        Data::Bool(b) => {
            if *b {
                "TRUE".to_string()
            } else {
                "FALSE".to_string()
            }
        }
        other => other.to_string().trim().to_string(),
    }
}
