//! DOCX report output using docx-rs.
//!
//! One document is open at a time. Every document carries a centered
//! page-number footer; each rendered block becomes a single paragraph whose
//! lines are runs separated by line breaks, with bold honored per line.
//! After the configured number of clusters the current document is written
//! to a `_N`-suffixed path and a fresh one is opened. The unsuffixed output
//! path is used only when the whole run fits in a single file.

use clusterdoc_core::{ClusterBlock, ReportError, Result};
use docx_rs::{
    AlignmentType, BreakType, Docx, FieldCharType, Footer, InstrText, Paragraph, Run, RunFonts,
};
use std::fs::File;
use std::mem;
use std::path::{Path, PathBuf};

/// Font used for every run in the report, footer included.
const REPORT_FONT: &str = "Consolas";

/// Run font size in half-points (10 pt).
const REPORT_FONT_SIZE: usize = 20;

/// Text of the separator paragraph written between blocks.
const SEPARATOR: &str = "---";

/// Writes rendered cluster blocks into one or more DOCX files.
#[derive(Debug)]
pub struct DocxReportWriter {
    doc: Docx,
    output_path: PathBuf,
    clusters_per_file: usize,
    clusters_seen: usize,
    file_counter: usize,
    written: Vec<PathBuf>,
}

impl DocxReportWriter {
    /// Create a writer targeting `output_path`, rotating after
    /// `clusters_per_file` clusters.
    #[must_use]
    pub fn new<P: Into<PathBuf>>(output_path: P, clusters_per_file: usize) -> Self {
        Self {
            doc: new_document(),
            output_path: output_path.into(),
            clusters_per_file,
            clusters_seen: 0,
            file_counter: 1,
            written: Vec::new(),
        }
    }

    /// Begin the next cluster, rotating to a fresh document when the
    /// per-file limit has been reached.
    ///
    /// # Errors
    /// Returns an error when the full document cannot be written to disk.
    pub fn begin_cluster(&mut self) -> Result<()> {
        self.clusters_seen += 1;
        if self.clusters_seen > 1 && (self.clusters_seen - 1) % self.clusters_per_file == 0 {
            let path = split_output_path(&self.output_path, self.file_counter);
            self.write_current(&path)?;
            self.file_counter += 1;
            self.doc = new_document();
        }
        Ok(())
    }

    /// Append one rendered block as a paragraph, optionally followed by a
    /// separator paragraph.
    pub fn append_block(&mut self, block: &ClusterBlock, separator_after: bool) {
        let mut paragraph = Paragraph::new();
        for line in &block.lines {
            let mut run = base_run().add_text(line.text.clone());
            if line.bold {
                run = run.bold();
            }
            paragraph = paragraph.add_run(run.add_break(BreakType::TextWrapping));
        }

        let mut doc = mem::take(&mut self.doc).add_paragraph(paragraph);
        if separator_after {
            doc = doc.add_paragraph(separator_paragraph());
        }
        self.doc = doc;
    }

    /// Write the final document and return every path produced by the run.
    ///
    /// # Errors
    /// Returns an error when the document cannot be written to disk.
    pub fn finish(mut self) -> Result<Vec<PathBuf>> {
        let path = if self.file_counter == 1 {
            self.output_path.clone()
        } else {
            split_output_path(&self.output_path, self.file_counter)
        };
        self.write_current(&path)?;
        Ok(self.written)
    }

    fn write_current(&mut self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        mem::take(&mut self.doc).build().pack(file).map_err(|e| {
            ReportError::Document(format!("Failed to pack DOCX: {e}: {}", path.display()))
        })?;
        log::info!("DOCX file written to: {}", path.display());
        self.written.push(path.to_path_buf());
        Ok(())
    }
}

/// Fresh document carrying the centered page-number footer.
fn new_document() -> Docx {
    Docx::new().footer(Footer::new().add_paragraph(page_number_paragraph()))
}

/// Centered footer paragraph with a `PAGE` field.
fn page_number_paragraph() -> Paragraph {
    let run = base_run()
        .add_field_char(FieldCharType::Begin, false)
        .add_instr_text(InstrText::Unsupported("PAGE".to_string()))
        .add_field_char(FieldCharType::End, false);
    Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(run)
}

fn separator_paragraph() -> Paragraph {
    Paragraph::new().add_run(
        base_run()
            .add_text(SEPARATOR)
            .add_break(BreakType::TextWrapping),
    )
}

fn base_run() -> Run {
    Run::new()
        .fonts(RunFonts::new().ascii(REPORT_FONT))
        .size(REPORT_FONT_SIZE)
}

/// `report.docx` becomes `report_3.docx`; extensionless paths get `_3`
/// appended.
fn split_output_path(base: &Path, n: usize) -> PathBuf {
    let stem = base
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match base.extension() {
        Some(ext) => format!("{stem}_{n}.{}", ext.to_string_lossy()),
        None => format!("{stem}_{n}"),
    };
    base.with_file_name(name)
}
