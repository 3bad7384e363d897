//! Per-cluster rendering into bold-flagged display lines.
//!
//! Each cluster becomes one block of lines: a main issue followed by its
//! numbered similar issues. The unclustered sentinel id is the exception:
//! every one of its records renders as an independent main-issue block with
//! no similar issues.
//!
//! Rendering is pure text assembly. The document writer decides how lines
//! become runs and paragraphs; this module only decides what the lines say
//! and which of them are bold.

use crate::record::TicketRecord;
use std::borrow::Cow;

/// Cluster id given to rows the upstream clustering left unclustered.
///
/// Rows under this id are unrelated to each other, so each renders as its
/// own main issue. The value is a convention of the exporting system, kept
/// as an explicit special case rather than generalized.
pub const UNCLUSTERED_ID: i64 = 50000;

/// Character cap applied to problem-details and solution text.
pub const MAX_FIELD_CHARS: usize = 10_000;

/// Suffix appended when a field is cut at [`MAX_FIELD_CHARS`].
pub const TRUNCATION_SUFFIX: &str = "... [Truncated]";

/// A display line plus its bold flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Text of the line, marker characters already stripped.
    pub text: String,
    /// Whether the document writer should render this line bold.
    pub bold: bool,
}

/// One rendered block of lines.
///
/// Non-sentinel clusters produce exactly one block; the unclustered
/// sentinel produces one block per record. Every block is written as a
/// single paragraph, and each block carries its own trailing separator
/// decision (made by the caller, since only it knows which block is last).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClusterBlock {
    /// Lines in display order.
    pub lines: Vec<Line>,
}

impl ClusterBlock {
    fn push_bold(&mut self, text: impl Into<String>) {
        self.lines.push(Line {
            text: text.into(),
            bold: true,
        });
    }

    fn push_plain(&mut self, text: impl Into<String>) {
        self.lines.push(Line {
            text: text.into(),
            bold: false,
        });
    }
}

/// Renders one cluster's records into display blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClusterRenderer {
    max_field_chars: usize,
}

impl ClusterRenderer {
    /// Create a renderer with a custom field-length cap.
    #[inline]
    #[must_use]
    pub const fn new(max_field_chars: usize) -> Self {
        Self { max_field_chars }
    }

    /// Render one cluster into its display blocks.
    ///
    /// Returns an empty vector for a cluster with no records; such a
    /// cluster contributes nothing to the report.
    #[must_use]
    pub fn render_cluster(&self, cluster_id: i64, records: &[TicketRecord]) -> Vec<ClusterBlock> {
        if records.is_empty() {
            log::debug!("Cluster {cluster_id} has no rows; skipping");
            return Vec::new();
        }

        if cluster_id == UNCLUSTERED_ID {
            // Unclustered rows have nothing in common: one block per record.
            return records.iter().map(|r| self.unclustered_block(r)).collect();
        }

        let (main, similar) = split_main_issue(records);
        vec![self.cluster_block(main, &similar)]
    }

    fn cluster_block(&self, main: &TicketRecord, similar: &[&TicketRecord]) -> ClusterBlock {
        let mut block = ClusterBlock::default();
        self.push_main_issue(&mut block, main);
        for (i, issue) in similar.iter().enumerate() {
            self.push_similar_issue(&mut block, i + 1, issue);
        }
        block
    }

    fn unclustered_block(&self, record: &TicketRecord) -> ClusterBlock {
        let mut block = ClusterBlock::default();
        self.push_main_issue(&mut block, record);
        block.push_plain("None");
        block.push_plain("");
        block
    }

    fn push_main_issue(&self, block: &mut ClusterBlock, main: &TicketRecord) {
        block.push_bold("Main Issue:");
        block.push_plain(main.problem_reported.clone());
        block.push_plain("");
        block.push_plain("Problem Details:");
        block.push_plain(self.truncate(&main.processed_body).into_owned());
        block.push_plain(format!("Disposition: {}", main.disposition_name));
        block.push_plain(format!("SubDisposition: {}", main.sub_disposition_name));
        block.push_plain(format!("Priority: {}", main.priority_name));
        block.push_plain(format!("- Docket No: {}", main.docket_no));
        block.push_plain(format!("- Mail List ID: {}", main.mail_list_id));
        block.push_plain(format!("- Mail ID: {}", main.mail_id));
        block.push_plain(format!("- Ticket ID: {}", main.ticket_id));
        block.push_plain(format!(
            "- Assigned To Dept: {}",
            main.assigned_to_dept_name
        ));
        block.push_plain("");
        block.push_plain("Solution:");
        block.push_plain(self.truncate(&main.solution).into_owned());
        block.push_plain("");
        block.push_bold("Similar issues:");
    }

    fn push_similar_issue(&self, block: &mut ClusterBlock, n: usize, issue: &TicketRecord) {
        block.push_plain(format!(
            "  {n}. Issue reported : {}",
            issue.problem_reported
        ));
        block.push_plain(format!(
            "     Problem Details: {}",
            self.truncate(&issue.processed_body)
        ));
        block.push_plain(format!("     - Docket No: {}", issue.docket_no));
        block.push_plain(format!("     - Mail List ID: {}", issue.mail_list_id));
        block.push_plain(format!("     - Mail ID: {}", issue.mail_id));
        block.push_plain(format!("     - Ticket ID: {}", issue.ticket_id));
        block.push_plain(format!("     - Disposition: {}", issue.disposition_name));
        block.push_plain(format!(
            "     - SubDisposition: {}",
            issue.sub_disposition_name
        ));
        block.push_plain(format!("     - Priority: {}", issue.priority_name));
        block.push_plain(format!(
            "     - Assigned To Dept: {}",
            issue.assigned_to_dept_name
        ));
        block.push_plain(format!("     - Solution: {}", self.truncate(&issue.solution)));
        block.push_plain("");
    }

    /// Cut `text` at the character cap and append the truncation suffix.
    ///
    /// The cap counts characters, not bytes, so multi-byte text is never
    /// cut mid-code-point. Text at or under the cap is returned borrowed.
    fn truncate<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match text.char_indices().nth(self.max_field_chars) {
            None => Cow::Borrowed(text),
            Some((byte_idx, _)) => {
                let mut cut = text[..byte_idx].to_string();
                cut.push_str(TRUNCATION_SUFFIX);
                Cow::Owned(cut)
            }
        }
    }
}

impl Default for ClusterRenderer {
    #[inline]
    fn default() -> Self {
        Self::new(MAX_FIELD_CHARS)
    }
}

/// Pick the main issue for a non-sentinel cluster.
///
/// The first record (in original row order) with a non-empty solution wins;
/// when none has one, the first record is the main issue by default. All
/// remaining records keep their original relative order as similar issues.
fn split_main_issue(records: &[TicketRecord]) -> (&TicketRecord, Vec<&TicketRecord>) {
    let main_idx = records
        .iter()
        .position(TicketRecord::has_solution)
        .unwrap_or(0);
    let similar = records
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != main_idx)
        .map(|(_, r)| r)
        .collect();
    (&records[main_idx], similar)
}
