use crate::common::{MatchOutcome, Reference};

use super::{journals_match, volumes_match, ExtractedIndex};

/// One way a ground-truth reference can be found among the extracted ones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Same normalized arXiv ID
    Arxiv,
    /// Same normalized DOI
    Doi,
    /// Matching journal token and volume
    JournalVolume,
}

/// Strategies in the order they are tried
pub const DEFAULT_PRIORITY: [MatchStrategy; 3] = [
    MatchStrategy::Arxiv,
    MatchStrategy::Doi,
    MatchStrategy::JournalVolume,
];

impl MatchStrategy {
    /// Outcome recorded when this strategy succeeds
    pub fn outcome(&self) -> MatchOutcome {
        match self {
            MatchStrategy::Arxiv => MatchOutcome::Arxiv,
            MatchStrategy::Doi => MatchOutcome::Doi,
            MatchStrategy::JournalVolume => MatchOutcome::Journal,
        }
    }

    /// Try this strategy; returns the position of the extracted record that satisfied it
    pub fn attempt(&self, reference: &Reference, index: &ExtractedIndex) -> Option<usize> {
        match self {
            MatchStrategy::Arxiv if reference.has_arxiv() => index.find_arxiv(reference.arxiv()),
            MatchStrategy::Doi if reference.has_doi() => index.find_doi(reference.doi()),
            MatchStrategy::JournalVolume if reference.has_journal() => index
                .journal_volume_entries()
                .iter()
                .find(|entry| {
                    volumes_match(&entry.volume, reference.volume())
                        && journals_match(reference.journal(), &entry.journal)
                })
                .map(|entry| entry.source),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.outcome())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(extracted: &[Reference]) -> ExtractedIndex {
        ExtractedIndex::build(extracted)
    }

    #[test]
    fn test_arxiv_strategy() {
        let idx = index(&[Reference::new("", "", "", ""), Reference::new("1234.5678", "", "", "")]);
        let gt = Reference::new("1234.5678v1", "", "", "");
        assert_eq!(MatchStrategy::Arxiv.attempt(&gt, &idx), Some(1));
        assert_eq!(MatchStrategy::Doi.attempt(&gt, &idx), None);
    }

    #[test]
    fn test_empty_identifier_never_matches() {
        // Two empty DOIs must not pair up
        let idx = index(&[Reference::new("", "", "", "")]);
        let gt = Reference::new("", "", "", "");
        for strategy in DEFAULT_PRIORITY {
            assert_eq!(strategy.attempt(&gt, &idx), None, "{strategy} matched empty fields");
        }
    }

    #[test]
    fn test_journal_volume_strategy() {
        let idx = index(&[Reference::new("", "", "JHEP", "0904")]);
        let gt = Reference::new("", "", "J. High Energy Phys.", "04");
        assert_eq!(MatchStrategy::JournalVolume.attempt(&gt, &idx), Some(0));

        let wrong_volume = Reference::new("", "", "J. High Energy Phys.", "05");
        assert_eq!(MatchStrategy::JournalVolume.attempt(&wrong_volume, &idx), None);
    }

    #[test]
    fn test_pos_strategy() {
        let idx = index(&[Reference::new("", "", "PoS LATTICE2013", "001")]);
        let gt = Reference::new("", "", "PoS", "LATTICE2013001");
        assert_eq!(MatchStrategy::JournalVolume.attempt(&gt, &idx), Some(0));
    }

    #[test]
    fn test_outcomes() {
        assert_eq!(MatchStrategy::Arxiv.outcome(), MatchOutcome::Arxiv);
        assert_eq!(MatchStrategy::Doi.outcome(), MatchOutcome::Doi);
        assert_eq!(MatchStrategy::JournalVolume.outcome(), MatchOutcome::Journal);
    }
}
