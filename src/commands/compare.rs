use anyhow::Result;
use log::debug;
use std::path::Path;

use crate::cli::CompareArgs;
use crate::common::{setup_logging, MatchTally};
use crate::input::{load_extracted, load_ground_truth};
use crate::matching::match_references;
use crate::report::format_tally_line;

/// Match one paper and print its tally line
pub fn run_compare(args: CompareArgs) -> Result<MatchTally> {
    setup_logging(&args.log_level)?;

    let ground_truth = load_ground_truth(Path::new(&args.metadata))?;
    let extracted = load_extracted(Path::new(&args.result))?;
    debug!(
        "Loaded {} INSPIRE and {} extracted references",
        ground_truth.len(),
        extracted.len()
    );

    let result = match_references(&ground_truth, &extracted);
    println!("{}", format_tally_line(&result.tally));

    Ok(result.tally)
}
