//! The report generation pipeline: read, group, render, write.

use crate::docx::DocxReportWriter;
use crate::options::ReportOptions;
use crate::xlsx::XlsxTicketReader;
use clusterdoc_core::{group_records, ClusterRenderer, Result, UNCLUSTERED_ID};
use std::path::{Path, PathBuf};

/// Outcome of one report run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// Rows successfully ingested.
    pub rows_read: usize,
    /// Rows dropped for lacking a numeric cluster value.
    pub rows_skipped: usize,
    /// Distinct clusters rendered.
    pub clusters: usize,
    /// Every DOCX file written, in creation order.
    pub files: Vec<PathBuf>,
}

/// Orchestrates the full pipeline over one workbook.
///
/// ```rust,ignore
/// use clusterdoc_backend::{ReportGenerator, ReportOptions};
///
/// let generator = ReportGenerator::new(ReportOptions::default());
/// let summary = generator.generate("clustered_emails.xlsx", "ClusteredEmailReport.docx")?;
/// println!("{} clusters in {} file(s)", summary.clusters, summary.files.len());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportGenerator {
    options: ReportOptions,
}

impl ReportGenerator {
    /// Create a generator with the given options.
    #[inline]
    #[must_use]
    pub const fn new(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Read `input`, group by cluster, and write the report to `output`
    /// (plus `_N`-suffixed siblings when the run splits across files).
    ///
    /// # Errors
    /// Returns an error on schema violations, an unreadable workbook, or a
    /// failed document write. Malformed data rows are skipped and counted,
    /// never fatal.
    pub fn generate<P, Q>(&self, input: P, output: Q) -> Result<ReportSummary>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let scan = XlsxTicketReader::new().read_records(input)?;
        if scan.skipped_rows > 0 {
            log::warn!(
                "{} row(s) skipped for invalid or missing cluster values",
                scan.skipped_rows
            );
        }

        let rows_read = scan.records.len();
        let groups = group_records(scan.records);
        let renderer = ClusterRenderer::new(self.options.max_field_chars);
        let mut writer = DocxReportWriter::new(output.as_ref(), self.options.clusters_per_file);

        let total = groups.len();
        for (position, (cluster_id, records)) in groups.iter().enumerate() {
            log::info!("Cluster {cluster_id}: {} rows", records.len());

            let blocks = renderer.render_cluster(cluster_id, records);
            if blocks.is_empty() {
                continue;
            }

            writer.begin_cluster()?;
            let is_last_cluster = position + 1 == total;
            let last_block = blocks.len() - 1;
            for (i, block) in blocks.iter().enumerate() {
                // Sentinel blocks always carry their own separator; otherwise
                // the very last block of the run goes without one.
                let separator_after =
                    cluster_id == UNCLUSTERED_ID || !(is_last_cluster && i == last_block);
                writer.append_block(block, separator_after);
            }
        }

        let files = writer.finish()?;
        Ok(ReportSummary {
            rows_read,
            rows_skipped: scan.skipped_rows,
            clusters: total,
            files,
        })
    }
}
