use serde::Serialize;
use std::collections::BTreeMap;

use super::{NearMissCategory, PaperAnalysis};

/// Patterns shown in the report
pub const TOP_PATTERNS: usize = 30;

/// A ground-truth journal+volume and the volumes the extractor produced for that journal
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MismatchPattern {
    pub journal: String,
    pub volume: String,
    pub extracted_volumes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternCount {
    #[serde(flatten)]
    pub pattern: MismatchPattern,
    pub count: usize,
}

/// Breakdown of near_miss_journal findings: journal found, volume not
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VolumeMismatchSummary {
    pub no_extracted_volumes: usize,
    pub differing_extracted_volumes: usize,
    /// Ground-truth volume starts with a section letter ("D95", "A123")
    pub letter_prefixed: usize,
    #[serde(skip)]
    pub patterns: BTreeMap<MismatchPattern, usize>,
}

impl VolumeMismatchSummary {
    pub fn from_analyses<'a, I>(analyses: I) -> Self
    where
        I: IntoIterator<Item = &'a PaperAnalysis>,
    {
        let mut summary = Self::default();
        for analysis in analyses {
            summary.add_paper(analysis);
        }
        summary
    }

    pub fn add_paper(&mut self, analysis: &PaperAnalysis) {
        for (reference, near_miss) in analysis.near_misses() {
            if near_miss.category != NearMissCategory::NearMissJournal {
                continue;
            }

            if near_miss.extracted_volumes.is_empty() {
                self.no_extracted_volumes += 1;
            } else {
                self.differing_extracted_volumes += 1;
            }
            if reference
                .volume()
                .chars()
                .next()
                .map_or(false, |c| c.is_alphabetic())
            {
                self.letter_prefixed += 1;
            }

            let pattern = MismatchPattern {
                journal: reference.journal().to_string(),
                volume: reference.volume().to_string(),
                extracted_volumes: near_miss.extracted_volumes.clone(),
            };
            *self.patterns.entry(pattern).or_insert(0) += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.no_extracted_volumes + self.differing_extracted_volumes
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Most frequent patterns first; ties keep pattern order
    pub fn top_patterns(&self, n: usize) -> Vec<PatternCount> {
        let mut counts: Vec<PatternCount> = self
            .patterns
            .iter()
            .map(|(pattern, count)| PatternCount {
                pattern: pattern.clone(),
                count: *count,
            })
            .collect();
        counts.sort_by(|a, b| b.count.cmp(&a.count));
        counts.truncate(n);
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_paper;
    use crate::common::Reference;

    fn sample() -> PaperAnalysis {
        let gt = vec![
            Reference::new("", "", "Phys. Rev.", "D95"),
            Reference::new("", "", "Phys. Rev. D", "95"),
            Reference::new("", "", "Phys. Rev. D", "95"),
            Reference::new("", "", "JHEP", "04"),
            Reference::new("", "", "Nucl. Phys. B", "500"),
        ];
        let extracted = vec![
            Reference::new("", "", "Phys. Rev. D", "96"),
            Reference::new("", "", "JHEP", ""),
        ];
        analyze_paper("p", &gt, extracted)
    }

    #[test]
    fn test_counts() {
        let analysis = sample();
        let summary = VolumeMismatchSummary::from_analyses([&analysis]);

        // Nucl. Phys. B is not extracted at all and is left out
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.no_extracted_volumes, 1);
        assert_eq!(summary.differing_extracted_volumes, 3);
        assert_eq!(summary.letter_prefixed, 1);
    }

    #[test]
    fn test_top_patterns() {
        let analysis = sample();
        let summary = VolumeMismatchSummary::from_analyses([&analysis]);
        let top = summary.top_patterns(TOP_PATTERNS);

        assert_eq!(top.len(), 3);
        assert_eq!(top[0].count, 2);
        assert_eq!(top[0].pattern.journal, "physrevd");
        assert_eq!(top[0].pattern.extracted_volumes, vec!["96".to_string()]);
        assert_eq!(summary.top_patterns(1).len(), 1);
    }

    #[test]
    fn test_empty() {
        let summary = VolumeMismatchSummary::from_analyses(std::iter::empty::<&PaperAnalysis>());
        assert!(summary.is_empty());
        assert!(summary.top_patterns(TOP_PATTERNS).is_empty());
    }
}
