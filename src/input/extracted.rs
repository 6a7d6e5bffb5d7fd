use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::common::Reference;

/// One reference as written by the extractor
#[derive(Debug, Default, Deserialize)]
struct ExtractedEntry {
    #[serde(default)]
    arxiv_id: Option<String>,
    #[serde(default)]
    doi: Option<String>,
    #[serde(default)]
    journal_title: Option<String>,
    #[serde(default)]
    journal_volume: Option<String>,
    #[serde(default)]
    raw_ref: Option<String>,
}

/// Result files hold a list of entries, or a single entry for one-reference papers
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ResultFile {
    Many(Vec<ExtractedEntry>),
    One(ExtractedEntry),
}

impl ExtractedEntry {
    fn into_reference(self) -> Reference {
        Reference::new(
            self.arxiv_id.as_deref().unwrap_or(""),
            self.doi.as_deref().unwrap_or(""),
            self.journal_title.as_deref().unwrap_or(""),
            self.journal_volume.as_deref().unwrap_or(""),
        )
        .with_raw_ref(self.raw_ref.as_deref().unwrap_or(""))
    }
}

fn into_references(file: ResultFile) -> Vec<Reference> {
    let entries = match file {
        ResultFile::Many(entries) => entries,
        ResultFile::One(entry) => vec![entry],
    };
    entries.into_iter().map(ExtractedEntry::into_reference).collect()
}

/// Parse extractor output JSON into extracted references
pub fn parse_extracted(json: &str) -> Result<Vec<Reference>> {
    let file: ResultFile =
        serde_json::from_str(json).context("Failed to parse extractor results")?;
    Ok(into_references(file))
}

/// Load extracted references from an extractor result file
pub fn load_extracted(path: &Path) -> Result<Vec<Reference>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open result file: {}", path.display()))?;
    let parsed: ResultFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse result file: {}", path.display()))?;
    Ok(into_references(parsed))
}
