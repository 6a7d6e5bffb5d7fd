use serde::Serialize;
use std::collections::BTreeMap;

use crate::common::{MatchTally, Reference};
use crate::matching::{match_references, ReferenceMatch};

use super::{analyze_near_miss, classify_miss, MissCategory, NearMiss, NearMissCategory};

/// A ground-truth reference the matcher could not find
#[derive(Debug, Clone, Serialize)]
pub struct UnmatchedReference {
    pub reference: Reference,
    pub category: MissCategory,
    /// Only for journal_no_raw misses
    #[serde(skip_serializing_if = "Option::is_none")]
    pub near_miss: Option<NearMiss>,
}

/// Everything the gap analysis knows about one paper
#[derive(Debug, Clone, Serialize)]
pub struct PaperAnalysis {
    pub paper_id: String,
    pub tally: MatchTally,
    pub recall: f64,
    pub matches: Vec<ReferenceMatch>,
    pub unmatched: Vec<UnmatchedReference>,
    pub categories: BTreeMap<MissCategory, usize>,
    #[serde(skip)]
    pub extracted: Vec<Reference>,
}

impl PaperAnalysis {
    pub fn category_count(&self, category: MissCategory) -> usize {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    pub fn unmatched_in(&self, category: MissCategory) -> impl Iterator<Item = &UnmatchedReference> {
        self.unmatched.iter().filter(move |u| u.category == category)
    }

    /// Near-miss findings with their references
    pub fn near_misses(&self) -> impl Iterator<Item = (&Reference, &NearMiss)> {
        self.unmatched
            .iter()
            .filter_map(|u| u.near_miss.as_ref().map(|nm| (&u.reference, nm)))
    }

    pub fn near_miss_count(&self, category: NearMissCategory) -> usize {
        self.near_misses().filter(|(_, nm)| nm.category == category).count()
    }
}

/// Match, classify and diagnose one paper
pub fn analyze_paper(paper_id: &str, ground_truth: &[Reference], extracted: Vec<Reference>) -> PaperAnalysis {
    let result = match_references(ground_truth, &extracted);
    let extracted_is_empty = extracted.is_empty();

    let unmatched: Vec<UnmatchedReference> = result
        .unmatched_indices()
        .map(|i| {
            let reference = &ground_truth[i];
            let category = classify_miss(reference, extracted_is_empty);
            let near_miss = match category {
                MissCategory::JournalNoRaw => Some(analyze_near_miss(reference, &extracted)),
                _ => None,
            };
            UnmatchedReference {
                reference: reference.clone(),
                category,
                near_miss,
            }
        })
        .collect();

    let mut categories = BTreeMap::new();
    for u in &unmatched {
        *categories.entry(u.category).or_insert(0) += 1;
    }

    PaperAnalysis {
        paper_id: paper_id.to_string(),
        tally: result.tally,
        recall: result.tally.recall(),
        matches: result.matches,
        unmatched,
        categories,
        extracted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::MatchOutcome;

    #[test]
    fn test_zero_extract_paper() {
        let gt = vec![
            Reference::new("1234.5678", "", "", ""),
            Reference::new("", "10.1/a", "", ""),
            Reference::new("", "", "", ""),
        ];
        let analysis = analyze_paper("0704.1500", &gt, Vec::new());

        assert_eq!(analysis.tally.matched(), 0);
        assert_eq!(analysis.category_count(MissCategory::ZeroExtract), 3);
        assert_eq!(analysis.categories.len(), 1);
        assert_eq!(analysis.recall, 0.0);
    }

    #[test]
    fn test_near_miss_attached_to_journal_no_raw() {
        let gt = vec![
            Reference::new("", "", "Phys.Rev.D", "95"),
            Reference::new("", "", "Phys.Rev.D", "95").with_raw_text("Phys. Rev. D 95 (2017)"),
            Reference::new("1234.5678", "", "", ""),
        ];
        let extracted = vec![
            Reference::new("", "", "Phys.Rev.", "96"),
            Reference::new("1234.5678", "", "", ""),
        ];
        let analysis = analyze_paper("p", &gt, extracted);

        assert_eq!(analysis.matches[2].outcome, MatchOutcome::Arxiv);
        assert_eq!(analysis.unmatched.len(), 2);
        assert_eq!(analysis.category_count(MissCategory::JournalNoRaw), 1);
        assert_eq!(analysis.category_count(MissCategory::JournalWithRaw), 1);

        let no_raw = analysis.unmatched_in(MissCategory::JournalNoRaw).next().unwrap();
        assert_eq!(
            no_raw.near_miss.as_ref().map(|nm| nm.category),
            Some(NearMissCategory::NearMissJournal)
        );
        let with_raw = analysis.unmatched_in(MissCategory::JournalWithRaw).next().unwrap();
        assert!(with_raw.near_miss.is_none());
        assert_eq!(analysis.near_miss_count(NearMissCategory::NearMissJournal), 1);
    }

    #[test]
    fn test_categories_sum_to_unmatched() {
        let gt = vec![
            Reference::new("", "", "", ""),
            Reference::new("", "10.1/z", "", ""),
            Reference::new("9999.0001", "", "", ""),
            Reference::new("", "10.1/a", "", ""),
        ];
        let extracted = vec![Reference::new("", "10.1/a", "", "")];
        let analysis = analyze_paper("p", &gt, extracted);

        let total: usize = analysis.categories.values().sum();
        assert_eq!(total, analysis.tally.unmatched());
        assert_eq!(total, 3);
        assert!((analysis.recall - 0.25).abs() < f64::EPSILON);
    }
}
