pub mod discovery;
pub mod extracted;
pub mod inspire;

pub use discovery::{find_papers, resolve_dir, PaperFiles};
pub use extracted::{load_extracted, parse_extracted};
pub use inspire::{load_ground_truth, parse_ground_truth};

use anyhow::Result;

use crate::analysis::PaperInputs;

/// Load ground truth and extracted references for one paper
pub fn load_paper(files: &PaperFiles) -> Result<PaperInputs> {
    let ground_truth = load_ground_truth(&files.metadata)?;
    let extracted = load_extracted(&files.result)?;
    Ok((ground_truth, extracted))
}
