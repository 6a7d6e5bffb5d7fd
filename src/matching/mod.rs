pub mod journal;
pub mod lookup;
pub mod strategy;
pub mod volume;

pub use journal::journals_match;
pub use lookup::{ExtractedIndex, JournalVolumeEntry};
pub use strategy::{MatchStrategy, DEFAULT_PRIORITY};
pub use volume::volumes_match;

use serde::Serialize;

use crate::common::{MatchOutcome, MatchTally, Reference};

/// Outcome for one ground-truth reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReferenceMatch {
    pub outcome: MatchOutcome,
    /// Extracted record that satisfied the winning strategy; only meaningful
    /// next to the paper's extracted list, so it is left out of reports
    #[serde(skip)]
    pub extracted: Option<usize>,
}

impl ReferenceMatch {
    pub fn unmatched() -> Self {
        Self {
            outcome: MatchOutcome::Unmatched,
            extracted: None,
        }
    }
}

/// Matching result for one paper; `matches` is parallel to the ground-truth list
#[derive(Debug, Clone, Default, Serialize)]
pub struct MatchResult {
    pub tally: MatchTally,
    pub matches: Vec<ReferenceMatch>,
}

impl MatchResult {
    /// Positions of ground-truth references that stayed unmatched
    pub fn unmatched_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.matches
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.outcome.is_matched())
            .map(|(i, _)| i)
    }
}

/// Matches ground-truth references against extracted ones, trying strategies in order
#[derive(Debug, Clone)]
pub struct ReferenceMatcher {
    strategies: Vec<MatchStrategy>,
}

impl Default for ReferenceMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_PRIORITY.to_vec())
    }
}

impl ReferenceMatcher {
    pub fn new(strategies: Vec<MatchStrategy>) -> Self {
        Self { strategies }
    }

    pub fn strategies(&self) -> &[MatchStrategy] {
        &self.strategies
    }

    /// First strategy that succeeds decides the outcome
    pub fn match_one(&self, reference: &Reference, index: &ExtractedIndex) -> ReferenceMatch {
        self.strategies
            .iter()
            .find_map(|strategy| {
                strategy.attempt(reference, index).map(|source| ReferenceMatch {
                    outcome: strategy.outcome(),
                    extracted: Some(source),
                })
            })
            .unwrap_or_else(ReferenceMatch::unmatched)
    }

    pub fn match_all(&self, ground_truth: &[Reference], extracted: &[Reference]) -> MatchResult {
        let index = ExtractedIndex::build(extracted);
        let mut tally = MatchTally::new(ground_truth.len(), extracted.len());

        let matches = ground_truth
            .iter()
            .map(|reference| {
                let m = self.match_one(reference, &index);
                tally.record(m.outcome);
                m
            })
            .collect();

        MatchResult { tally, matches }
    }
}

/// Match with the default arXiv > DOI > journal+volume priority.
///
/// Extracted records are never consumed: one extracted record may satisfy
/// any number of ground-truth references.
pub fn match_references(ground_truth: &[Reference], extracted: &[Reference]) -> MatchResult {
    ReferenceMatcher::default().match_all(ground_truth, extracted)
}
