//! clusterdoc - clustered ticket report generator
//!
//! Reads an `.xlsx` export of clustered support tickets and writes a DOCX
//! report summarizing every cluster: one main issue plus its similar
//! issues, split across multiple documents for very large runs.

use anyhow::{Context, Result};
use clap::Parser;
use clusterdoc_backend::{ReportGenerator, ReportOptions};
use std::path::PathBuf;

/// Input workbook used when no path is given on the command line.
const DEFAULT_INPUT: &str = "clustered_emails.xlsx";

/// The report is always written into the working directory under this name
/// (suffixed `_1`, `_2`, ... when the run splits across files).
const OUTPUT_PATH: &str = "ClusteredEmailReport.docx";

#[derive(Debug, Parser)]
#[command(
    name = "clusterdoc",
    version,
    about = "Generate a DOCX report from a clustered ticket export"
)]
struct Cli {
    /// Input workbook (.xlsx) with clustered ticket rows
    #[arg(default_value = DEFAULT_INPUT)]
    input: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let summary = ReportGenerator::new(ReportOptions::default())
        .generate(&cli.input, OUTPUT_PATH)
        .with_context(|| format!("Failed to process {}", cli.input.display()))?;

    if summary.rows_skipped > 0 {
        log::warn!("{} row(s) were skipped; see warnings above", summary.rows_skipped);
    }
    println!(
        "Report processing complete: {} cluster(s) from {} row(s) in {} file(s)",
        summary.clusters,
        summary.rows_read,
        summary.files.len()
    );
    Ok(())
}
