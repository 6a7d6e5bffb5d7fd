use std::io::{self, Write};

use crate::analysis::{
    GapTotals, MissCategory, NearMissCategory, PaperAnalysis, VolumeMismatchSummary, TOP_PATTERNS,
};
use crate::common::{percent, truncate_chars, MatchTally};

/// Characters of extractor citation text shown per near-miss case
const RAW_REF_PREVIEW: usize = 100;

/// Knobs for the human-readable gap report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Minimum journal_with_raw misses for a paper to appear in the per-paper table
    pub min_actionable: usize,
    /// Papers whose missed citation text is printed
    pub top_raw: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            min_actionable: 5,
            top_raw: 20,
        }
    }
}

fn rule(out: &mut impl Write, width: usize) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(width))
}

fn format_recall(recall: f64) -> String {
    format!("{:.1}%", recall * 100.0)
}

/// `inspire extracted arxiv journal doi` on one line
pub fn format_tally_line(tally: &MatchTally) -> String {
    format!(
        "{} {} {} {} {}",
        tally.inspire_count,
        tally.extracted_count,
        tally.matched_arxiv,
        tally.matched_journal,
        tally.matched_doi
    )
}

/// Full gap report: summary, breakdowns, per-paper tables
pub fn write_report(
    out: &mut impl Write,
    analyses: &[PaperAnalysis],
    totals: &GapTotals,
    options: &ReportOptions,
) -> io::Result<()> {
    write_summary(out, totals)?;
    write_category_breakdown(out, totals)?;
    write_near_miss_breakdown(out, analyses, totals)?;
    write_volume_mismatch(out, &VolumeMismatchSummary::from_analyses(analyses))?;
    write_actionable_papers(out, analyses, options.min_actionable)?;
    write_actionable_raw(out, analyses, options.top_raw)
}

pub fn write_summary(out: &mut impl Write, totals: &GapTotals) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Total papers analyzed: {}", totals.papers)?;
    writeln!(out, "Total INSPIRE refs:    {}", totals.tally.inspire_count)?;
    writeln!(
        out,
        "Total matched:         {}  ({} recall)",
        totals.tally.matched(),
        format_recall(totals.recall())
    )?;
    writeln!(out, "Total unmatched:       {}", totals.total_unmatched())?;
    writeln!(out)
}

pub fn write_category_breakdown(out: &mut impl Write, totals: &GapTotals) -> io::Result<()> {
    let total = totals.total_unmatched();
    writeln!(out, "Overall unmatched category breakdown")?;
    rule(out, 45)?;
    for category in MissCategory::ALL {
        let n = totals.category_count(category);
        writeln!(
            out,
            "  {:<20} {:6}  ({:5.1}%)",
            category.as_str(),
            n,
            percent(n, total)
        )?;
    }
    writeln!(out, "  {:<20} {:6}", "TOTAL", total)?;
    writeln!(out)
}

/// Near-miss counts for journal_no_raw misses, then every near_miss_volume case
pub fn write_near_miss_breakdown(
    out: &mut impl Write,
    analyses: &[PaperAnalysis],
    totals: &GapTotals,
) -> io::Result<()> {
    let total = totals.category_count(MissCategory::JournalNoRaw);
    if total == 0 {
        return Ok(());
    }

    writeln!(out, "journal_no_raw breakdown ({} refs)", total)?;
    rule(out, 70)?;
    for category in NearMissCategory::ALL {
        let n = totals.near_miss_count(category);
        writeln!(
            out,
            "  {:<22} {:5}  ({:5.1}%)  -- {}",
            category.as_str(),
            n,
            percent(n, total),
            category.description()
        )?;
    }
    writeln!(out)?;

    let cases = totals.near_miss_count(NearMissCategory::NearMissVolume);
    if cases == 0 {
        return Ok(());
    }

    writeln!(
        out,
        "near_miss_volume cases ({} refs, same journal+volume, not matched)",
        cases
    )?;
    rule(out, 70)?;
    for analysis in analyses {
        for (reference, near_miss) in analysis.near_misses() {
            let Some(candidate) = &near_miss.candidate else {
                continue;
            };
            writeln!(out)?;
            writeln!(out, "  Paper: {}", analysis.paper_id)?;
            writeln!(
                out,
                "  INSPIRE  journal={:<30} volume={:?}",
                format!("{:?}", reference.journal()),
                reference.volume()
            )?;
            writeln!(
                out,
                "  Extracted journal={:<30} volume={:?}",
                format!("{:?}", candidate.journal()),
                candidate.volume()
            )?;
            if !candidate.raw_ref().is_empty() {
                writeln!(out, "  raw_ref: {}", truncate_chars(candidate.raw_ref(), RAW_REF_PREVIEW))?;
            }
        }
    }
    writeln!(out)
}

pub fn write_volume_mismatch(out: &mut impl Write, summary: &VolumeMismatchSummary) -> io::Result<()> {
    if summary.is_empty() {
        return Ok(());
    }

    writeln!(
        out,
        "Volume mismatch analysis ({} near_miss_journal refs)",
        summary.total()
    )?;
    rule(out, 70)?;
    writeln!(out, "INSPIRE volume present, no matching extraction:")?;
    writeln!(
        out,
        "  No extracted volumes for journal:   {:5} cases",
        summary.no_extracted_volumes
    )?;
    writeln!(
        out,
        "  Extracted volumes exist but differ: {:5} cases",
        summary.differing_extracted_volumes
    )?;
    writeln!(
        out,
        "  INSPIRE volume starts with letter:  {:5} cases  (e.g. D95, A123, C80)",
        summary.letter_prefixed
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "Top {} specific mismatches (inspire_journal  INSPIRE_vol -> [extracted_vols]):",
        TOP_PATTERNS
    )?;
    writeln!(out, "{}", "-".repeat(70))?;
    for entry in summary.top_patterns(TOP_PATTERNS) {
        let pattern = &entry.pattern;
        let volume = if pattern.volume.is_empty() {
            "(empty)".to_string()
        } else {
            format!("{:?}", pattern.volume)
        };
        let extracted = if pattern.extracted_volumes.is_empty() {
            "(none)".to_string()
        } else {
            format!("{:?}", pattern.extracted_volumes)
        };
        writeln!(
            out,
            "  {:<30} {:<10} -> {:<30}  ({} cases)",
            pattern.journal, volume, extracted, entry.count
        )?;
    }
    writeln!(out)
}

/// Papers with at least `min` journal_with_raw misses, most misses first
fn actionable_papers(analyses: &[PaperAnalysis], min: usize) -> Vec<&PaperAnalysis> {
    let mut papers: Vec<&PaperAnalysis> = analyses
        .iter()
        .filter(|a| a.category_count(MissCategory::JournalWithRaw) >= min)
        .collect();
    papers.sort_by_key(|a| std::cmp::Reverse(a.category_count(MissCategory::JournalWithRaw)));
    papers
}

pub fn write_actionable_papers(
    out: &mut impl Write,
    analyses: &[PaperAnalysis],
    min_actionable: usize,
) -> io::Result<()> {
    let papers = actionable_papers(analyses, min_actionable);
    if papers.is_empty() {
        writeln!(
            out,
            "No papers with >= {} actionable (journal_with_raw) misses.",
            min_actionable
        )?;
        return writeln!(out);
    }

    writeln!(
        out,
        "Papers with >= {} actionable misses (sorted by miss count)",
        min_actionable
    )?;
    rule(out, 70)?;
    writeln!(
        out,
        "{:<16} {:>7} {:>8} {:>8} {:>8} {:>9} {:>9} {:>7}",
        "Paper", "Recall", "Inspire", "Matched", "j_w_raw", "j_no_raw", "doi_only", "no_id"
    )?;
    writeln!(out, "{}", "-".repeat(70))?;
    for a in papers {
        writeln!(
            out,
            "{:<16} {:>7} {:>8} {:>8} {:>8} {:>9} {:>9} {:>7}",
            a.paper_id,
            format_recall(a.recall),
            a.tally.inspire_count,
            a.tally.matched(),
            a.category_count(MissCategory::JournalWithRaw),
            a.category_count(MissCategory::JournalNoRaw),
            a.category_count(MissCategory::DoiOnly),
            a.category_count(MissCategory::NoId)
        )?;
    }
    writeln!(out)
}

/// Ground-truth citation text of journal_with_raw misses for the top papers
pub fn write_actionable_raw(out: &mut impl Write, analyses: &[PaperAnalysis], top_n: usize) -> io::Result<()> {
    let papers = actionable_papers(analyses, 1);
    if papers.is_empty() {
        writeln!(out, "No actionable misses (journal_with_raw) found in any paper.")?;
        return writeln!(out);
    }

    writeln!(out, "Raw ref text for top {} actionable papers", top_n)?;
    rule(out, 70)?;
    for a in papers.into_iter().take(top_n) {
        let missed: Vec<_> = a.unmatched_in(MissCategory::JournalWithRaw).collect();
        writeln!(out)?;
        writeln!(
            out,
            "--- {} (recall={}, {} actionable misses) ---",
            a.paper_id,
            format_recall(a.recall),
            missed.len()
        )?;
        for u in missed {
            let r = &u.reference;
            let mut line = format!("  INSPIRE: {} vol={}", r.journal(), r.volume());
            if r.has_arxiv() {
                line.push_str(&format!(" arxiv={}", r.arxiv()));
            }
            if r.has_doi() {
                line.push_str(&format!(" doi={}", r.doi()));
            }
            writeln!(out, "{}", line)?;
            if r.has_raw_text() {
                writeln!(out, "  raw_ref: {}", r.raw_text())?;
            } else {
                writeln!(out, "  raw_ref: (none)")?;
            }
        }
    }
    writeln!(out)
}
