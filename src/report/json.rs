use anyhow::{Context, Result};
use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::analysis::{GapTotals, PaperAnalysis, PatternCount, VolumeMismatchSummary, TOP_PATTERNS};

/// Machine-readable gap report
#[derive(Debug, Serialize)]
pub struct GapReport<'a> {
    pub totals: &'a GapTotals,
    pub recall: f64,
    pub volume_mismatch: VolumeMismatchSummary,
    pub top_volume_mismatches: Vec<PatternCount>,
    pub papers: &'a [PaperAnalysis],
}

impl<'a> GapReport<'a> {
    pub fn new(totals: &'a GapTotals, papers: &'a [PaperAnalysis]) -> Self {
        let volume_mismatch = VolumeMismatchSummary::from_analyses(papers);
        let top_volume_mismatches = volume_mismatch.top_patterns(TOP_PATTERNS);
        Self {
            totals,
            recall: totals.recall(),
            volume_mismatch,
            top_volume_mismatches,
            papers,
        }
    }
}

/// Write the gap report as pretty-printed JSON
pub fn write_json_report(report: &GapReport, output_path: &Path) -> Result<()> {
    info!(
        "Writing JSON report for {} papers to: {}",
        report.papers.len(),
        output_path.display()
    );

    let file = File::create(output_path)
        .with_context(|| format!("Failed to create output file: {}", output_path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)
        .with_context(|| format!("Failed to write JSON report: {}", output_path.display()))?;
    writeln!(writer)?;
    writer.flush()?;

    Ok(())
}
