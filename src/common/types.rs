use serde::{Deserialize, Serialize};

use crate::normalize::{normalize_arxiv, normalize_doi, normalize_journal};

/// Canonical reference record built from either INSPIRE metadata or extractor output.
///
/// Identifier fields are normalized once, at construction, and never change
/// afterwards. A missing identifier is the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reference {
    arxiv: String,
    doi: String,
    journal: String,
    volume: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    raw_text: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    raw_ref: String,
}

impl Reference {
    /// Build a reference from raw identifier strings, normalizing each one.
    pub fn new(arxiv: &str, doi: &str, journal: &str, volume: &str) -> Self {
        Self {
            arxiv: normalize_arxiv(arxiv),
            doi: normalize_doi(doi),
            journal: normalize_journal(journal),
            volume: volume.trim().to_string(),
            raw_text: String::new(),
            raw_ref: String::new(),
        }
    }

    /// Attach the ground-truth citation text
    pub fn with_raw_text(mut self, raw_text: &str) -> Self {
        self.raw_text = raw_text.to_string();
        self
    }

    /// Attach the citation text produced by the extractor
    pub fn with_raw_ref(mut self, raw_ref: &str) -> Self {
        self.raw_ref = raw_ref.to_string();
        self
    }

    pub fn arxiv(&self) -> &str {
        &self.arxiv
    }

    pub fn doi(&self) -> &str {
        &self.doi
    }

    pub fn journal(&self) -> &str {
        &self.journal
    }

    pub fn volume(&self) -> &str {
        &self.volume
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn raw_ref(&self) -> &str {
        &self.raw_ref
    }

    pub fn has_arxiv(&self) -> bool {
        !self.arxiv.is_empty()
    }

    pub fn has_doi(&self) -> bool {
        !self.doi.is_empty()
    }

    /// Journal and volume are both present
    pub fn has_journal(&self) -> bool {
        !self.journal.is_empty() && !self.volume.is_empty()
    }

    pub fn has_raw_text(&self) -> bool {
        !self.raw_text.is_empty()
    }
}

/// How a ground-truth reference was matched, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchOutcome {
    Arxiv,
    Doi,
    Journal,
    Unmatched,
}

impl MatchOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOutcome::Arxiv => "arxiv",
            MatchOutcome::Doi => "doi",
            MatchOutcome::Journal => "journal",
            MatchOutcome::Unmatched => "unmatched",
        }
    }

    pub fn is_matched(&self) -> bool {
        !matches!(self, MatchOutcome::Unmatched)
    }
}

impl std::fmt::Display for MatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Per-paper (or summed) match counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchTally {
    pub inspire_count: usize,
    pub extracted_count: usize,
    pub matched_arxiv: usize,
    pub matched_doi: usize,
    pub matched_journal: usize,
}

impl MatchTally {
    pub fn new(inspire_count: usize, extracted_count: usize) -> Self {
        Self {
            inspire_count,
            extracted_count,
            ..Default::default()
        }
    }

    /// Count one ground-truth reference's outcome
    pub fn record(&mut self, outcome: MatchOutcome) {
        match outcome {
            MatchOutcome::Arxiv => self.matched_arxiv += 1,
            MatchOutcome::Doi => self.matched_doi += 1,
            MatchOutcome::Journal => self.matched_journal += 1,
            MatchOutcome::Unmatched => {}
        }
    }

    pub fn matched(&self) -> usize {
        self.matched_arxiv + self.matched_doi + self.matched_journal
    }

    pub fn unmatched(&self) -> usize {
        self.inspire_count.saturating_sub(self.matched())
    }

    /// Fraction of ground-truth references matched; 0.0 for an empty ground truth
    pub fn recall(&self) -> f64 {
        if self.inspire_count == 0 {
            0.0
        } else {
            self.matched() as f64 / self.inspire_count as f64
        }
    }

    /// Field-wise sum
    pub fn merge(self, other: MatchTally) -> MatchTally {
        MatchTally {
            inspire_count: self.inspire_count + other.inspire_count,
            extracted_count: self.extracted_count + other.extracted_count,
            matched_arxiv: self.matched_arxiv + other.matched_arxiv,
            matched_doi: self.matched_doi + other.matched_doi,
            matched_journal: self.matched_journal + other.matched_journal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_normalizes_on_construction() {
        let r = Reference::new(" 1234.5678V2 ", " 10.1000/ABC ", "Phys. Rev. D", " 95 ");
        assert_eq!(r.arxiv(), "1234.5678");
        assert_eq!(r.doi(), "10.1000/abc");
        assert_eq!(r.journal(), "physrevd");
        assert_eq!(r.volume(), "95");
    }

    #[test]
    fn test_reference_has_journal_requires_volume() {
        assert!(!Reference::new("", "", "JHEP", "").has_journal());
        assert!(!Reference::new("", "", "", "12").has_journal());
        assert!(Reference::new("", "", "JHEP", "12").has_journal());
    }

    #[test]
    fn test_reference_default_is_empty() {
        let r = Reference::default();
        assert!(!r.has_arxiv());
        assert!(!r.has_doi());
        assert!(!r.has_journal());
        assert!(!r.has_raw_text());
    }

    #[test]
    fn test_match_outcome_serialization() {
        assert_eq!(serde_json::to_string(&MatchOutcome::Arxiv).unwrap(), "\"arxiv\"");
        assert_eq!(serde_json::to_string(&MatchOutcome::Unmatched).unwrap(), "\"unmatched\"");
    }

    #[test]
    fn test_tally_record_and_recall() {
        let mut tally = MatchTally::new(4, 10);
        tally.record(MatchOutcome::Arxiv);
        tally.record(MatchOutcome::Doi);
        tally.record(MatchOutcome::Journal);
        tally.record(MatchOutcome::Unmatched);

        assert_eq!(tally.matched(), 3);
        assert_eq!(tally.unmatched(), 1);
        assert!((tally.recall() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tally_recall_empty_ground_truth() {
        assert_eq!(MatchTally::new(0, 5).recall(), 0.0);
    }

    #[test]
    fn test_tally_merge() {
        let a = MatchTally { inspire_count: 3, extracted_count: 2, matched_arxiv: 1, matched_doi: 0, matched_journal: 1 };
        let b = MatchTally { inspire_count: 5, extracted_count: 7, matched_arxiv: 2, matched_doi: 1, matched_journal: 0 };
        let merged = a.merge(b);
        assert_eq!(merged, b.merge(a));
        assert_eq!(merged.inspire_count, 8);
        assert_eq!(merged.matched(), 5);
    }
}
