use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

const JSON_EXTENSION: &str = "json";

/// Result and metadata file for one paper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperFiles {
    pub result: PathBuf,
    pub metadata: PathBuf,
}

impl PaperFiles {
    pub fn new(results_dir: &Path, metadata_dir: &Path, paper_id: &str) -> Self {
        let file_name = format!("{}.{}", paper_id, JSON_EXTENSION);
        Self {
            result: results_dir.join(&file_name),
            metadata: metadata_dir.join(&file_name),
        }
    }
}

/// Stems of the `.json` files directly inside `dir`
fn json_stems(dir: &Path) -> Result<BTreeSet<String>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("Failed to read directory: {}", dir.display()))?;

    let mut stems = BTreeSet::new();
    for entry in entries {
        let path = entry
            .with_context(|| format!("Failed to read directory entry in: {}", dir.display()))?
            .path();
        if path.extension().and_then(|e| e.to_str()) != Some(JSON_EXTENSION) {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            stems.insert(stem.to_string());
        }
    }
    Ok(stems)
}

/// Paper IDs with a file in both directories, sorted.
///
/// With `paper` set, returns just that paper, or an error if either directory lacks it.
pub fn find_papers(results_dir: &Path, metadata_dir: &Path, paper: Option<&str>) -> Result<Vec<String>> {
    let results = json_stems(results_dir)?;
    let metadata = json_stems(metadata_dir)?;
    let common: Vec<String> = results.intersection(&metadata).cloned().collect();

    match paper {
        Some(paper_id) if common.iter().any(|p| p == paper_id) => Ok(vec![paper_id.to_string()]),
        Some(paper_id) => Err(anyhow::anyhow!(
            "Paper '{}' not found in both {} and {}",
            paper_id,
            results_dir.display(),
            metadata_dir.display()
        )),
        None => Ok(common),
    }
}

/// Resolve a data directory: absolute paths and paths that exist relative to the
/// working directory are used as given; otherwise the path is tried relative to
/// the crate root.
pub fn resolve_dir(path: &str) -> PathBuf {
    resolve_dir_from(path, Path::new(env!("CARGO_MANIFEST_DIR")))
}

fn resolve_dir_from(path: &str, root: &Path) -> PathBuf {
    let given = PathBuf::from(path);
    if given.is_absolute() || given.is_dir() {
        return given;
    }
    let candidate = root.join(&given);
    if candidate.is_dir() {
        candidate
    } else {
        given
    }
}
