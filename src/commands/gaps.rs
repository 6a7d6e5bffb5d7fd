use anyhow::{Context, Result};
use log::{error, info};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use crate::analysis::{analyze_papers, summarize, GapTotals, RecallFilter};
use crate::cli::GapsArgs;
use crate::common::{create_paper_progress_bar, format_elapsed, setup_logging};
use crate::input::{find_papers, load_paper, resolve_dir, PaperFiles};
use crate::report::{write_json_report, write_report, GapReport, ReportOptions};

/// Analyze every paper present in both directories and print the gap report
pub fn run_gaps(args: GapsArgs) -> Result<GapTotals> {
    setup_logging(&args.log_level)?;
    let start = Instant::now();

    let num_threads = if args.threads == 0 {
        let cores = num_cpus::get();
        info!("Auto-detected {} CPU cores. Using {} threads.", cores, cores);
        cores
    } else {
        info!("Using specified {} threads.", args.threads);
        args.threads
    };

    if let Err(e) = rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()
    {
        error!("Failed to build thread pool: {}. Using default.", e);
    }

    let results_dir = resolve_dir(&args.results_dir);
    let metadata_dir = resolve_dir(&args.metadata_dir);
    info!("Results directory: {}", results_dir.display());
    info!("Metadata directory: {}", metadata_dir.display());

    let papers = find_papers(&results_dir, &metadata_dir, args.paper.as_deref())?;
    info!("Analyzing {} paper(s)...", papers.len());

    let filter = RecallFilter::new(args.min_recall, args.max_recall);
    let progress = create_paper_progress_bar(papers.len() as u64);
    let load = |paper_id: &str| load_paper(&PaperFiles::new(&results_dir, &metadata_dir, paper_id));
    let analyses = analyze_papers(&papers, load, filter, &progress);
    progress.finish_and_clear();

    let totals = summarize(&analyses);

    let options = ReportOptions {
        min_actionable: args.min_actionable,
        top_raw: args.top_raw,
    };
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_report(&mut out, &analyses, &totals, &options).context("Failed to write report")?;
    out.flush()?;

    if let Some(path) = &args.output_json {
        write_json_report(&GapReport::new(&totals, &analyses), Path::new(path))?;
    }

    info!(
        "Gap analysis complete in {}: {} papers, {} of {} references matched",
        format_elapsed(start.elapsed()),
        totals.papers,
        totals.tally.matched(),
        totals.tally.inspire_count
    );

    Ok(totals)
}
