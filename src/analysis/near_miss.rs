use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::common::Reference;
use crate::matching::{journals_match, volumes_match};

/// What the extractor produced for a journal+volume reference with no citation text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NearMissCategory {
    /// Journal not in the extracted output
    NotExtracted,
    /// Same journal, different volume
    NearMissJournal,
    /// Same journal and volume but not matched
    NearMissVolume,
}

impl NearMissCategory {
    pub const ALL: [NearMissCategory; 3] = [
        NearMissCategory::NotExtracted,
        NearMissCategory::NearMissJournal,
        NearMissCategory::NearMissVolume,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NearMissCategory::NotExtracted => "not_extracted",
            NearMissCategory::NearMissJournal => "near_miss_journal",
            NearMissCategory::NearMissVolume => "near_miss_volume",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NearMissCategory::NotExtracted => "journal not in extracted output",
            NearMissCategory::NearMissJournal => "same journal, different volume",
            NearMissCategory::NearMissVolume => "same journal+volume but not matched",
        }
    }
}

impl std::fmt::Display for NearMissCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NearMiss {
    pub category: NearMissCategory,
    /// First extracted record agreeing on journal and volume (near_miss_volume)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate: Option<Reference>,
    /// Sorted distinct volumes extracted for the matched journal (near_miss_journal)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub extracted_volumes: Vec<String>,
}

impl NearMiss {
    fn new(category: NearMissCategory) -> Self {
        Self {
            category,
            candidate: None,
            extracted_volumes: Vec::new(),
        }
    }
}

/// Look for the journal of a missed reference among the paper's extracted records.
///
/// Scans the extracted records as given: no PoS reshaping, and a record only
/// needs a journal to be considered.
pub fn analyze_near_miss(reference: &Reference, extracted: &[Reference]) -> NearMiss {
    let journal_matches: Vec<&Reference> = extracted
        .iter()
        .filter(|r| !r.journal().is_empty() && journals_match(reference.journal(), r.journal()))
        .collect();

    if journal_matches.is_empty() {
        return NearMiss::new(NearMissCategory::NotExtracted);
    }

    let volume_match = journal_matches.iter().find(|r| {
        !reference.volume().is_empty()
            && !r.volume().is_empty()
            && volumes_match(reference.volume(), r.volume())
    });

    if let Some(candidate) = volume_match {
        return NearMiss {
            candidate: Some((*candidate).clone()),
            ..NearMiss::new(NearMissCategory::NearMissVolume)
        };
    }

    let extracted_volumes: BTreeSet<&str> = journal_matches
        .iter()
        .map(|r| r.volume())
        .filter(|v| !v.is_empty())
        .collect();

    NearMiss {
        extracted_volumes: extracted_volumes.into_iter().map(String::from).collect(),
        ..NearMiss::new(NearMissCategory::NearMissJournal)
    }
}
