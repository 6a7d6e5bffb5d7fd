use anyhow::{Context, Result};
use serde::de::IgnoredAny;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::common::Reference;

/// Schema marking plain citation text in `raw_refs`
const TEXT_SCHEMA: &str = "text";

#[derive(Debug, Default, Deserialize)]
struct MetadataFile {
    #[serde(default)]
    metadata: Option<Metadata>,
}

#[derive(Debug, Default, Deserialize)]
struct Metadata {
    #[serde(default)]
    references: Option<Vec<ReferenceEntry>>,
}

#[derive(Debug, Default, Deserialize)]
struct ReferenceEntry {
    #[serde(default)]
    reference: Option<InspireReference>,
}

#[derive(Debug, Default, Deserialize)]
struct InspireReference {
    #[serde(default)]
    arxiv_eprint: Option<TextField>,
    #[serde(default)]
    dois: Option<Vec<DoiEntry>>,
    #[serde(default)]
    publication_info: Option<PublicationInfo>,
    #[serde(default)]
    raw_refs: Option<Vec<RawRefEntry>>,
}

#[derive(Debug, Default, Deserialize)]
struct PublicationInfo {
    #[serde(default)]
    journal_title: Option<TextField>,
    #[serde(default)]
    journal_volume: Option<TextField>,
}

/// A string field; any other JSON value reads as empty
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextField {
    Text(String),
    Other(IgnoredAny),
}

impl TextField {
    fn as_str(&self) -> &str {
        match self {
            TextField::Text(value) => value,
            TextField::Other(_) => "",
        }
    }
}

fn text_or_empty(field: &Option<TextField>) -> &str {
    field.as_ref().map(TextField::as_str).unwrap_or("")
}

/// INSPIRE writes DOIs either bare or as `{"value": ..., "source": ...}`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DoiEntry {
    Plain(String),
    Object {
        #[serde(default)]
        value: Option<String>,
    },
    Other(IgnoredAny),
}

impl DoiEntry {
    fn value(&self) -> &str {
        match self {
            DoiEntry::Plain(value) => value,
            DoiEntry::Object { value } => value.as_deref().unwrap_or(""),
            DoiEntry::Other(_) => "",
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRefEntry {
    Plain(String),
    Object {
        #[serde(default)]
        schema: Option<String>,
        #[serde(default)]
        value: Option<String>,
    },
    Other(IgnoredAny),
}

impl RawRefEntry {
    /// Citation text if this entry is plain text; a missing schema counts as text
    fn text(&self) -> Option<&str> {
        let text = match self {
            RawRefEntry::Plain(value) => value.as_str(),
            RawRefEntry::Object { schema, value } => {
                if schema.as_deref().unwrap_or(TEXT_SCHEMA) != TEXT_SCHEMA {
                    return None;
                }
                value.as_deref().unwrap_or("")
            }
            RawRefEntry::Other(_) => "",
        };
        Some(text).filter(|t| !t.is_empty())
    }
}

impl InspireReference {
    fn into_reference(self) -> Reference {
        let doi = self
            .dois
            .as_ref()
            .and_then(|dois| dois.first())
            .map(DoiEntry::value)
            .unwrap_or("");
        let raw_text = self
            .raw_refs
            .as_ref()
            .and_then(|raw_refs| raw_refs.iter().find_map(RawRefEntry::text))
            .unwrap_or("");
        let publication = self.publication_info.unwrap_or_default();

        Reference::new(
            text_or_empty(&self.arxiv_eprint),
            doi,
            text_or_empty(&publication.journal_title),
            text_or_empty(&publication.journal_volume),
        )
        .with_raw_text(raw_text)
    }
}

fn into_references(file: MetadataFile) -> Vec<Reference> {
    file.metadata
        .and_then(|m| m.references)
        .unwrap_or_default()
        .into_iter()
        .map(|entry| entry.reference.unwrap_or_default().into_reference())
        .collect()
}

/// Parse INSPIRE metadata JSON into ground-truth references
pub fn parse_ground_truth(json: &str) -> Result<Vec<Reference>> {
    let file: MetadataFile =
        serde_json::from_str(json).context("Failed to parse INSPIRE metadata")?;
    Ok(into_references(file))
}

/// Load ground-truth references from an INSPIRE metadata file
pub fn load_ground_truth(path: &Path) -> Result<Vec<Reference>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open metadata file: {}", path.display()))?;
    let parsed: MetadataFile = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to parse metadata file: {}", path.display()))?;
    Ok(into_references(parsed))
}
