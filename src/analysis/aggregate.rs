use anyhow::Result;
use indicatif::ProgressBar;
use log::{debug, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::common::{MatchTally, Reference};

use super::{analyze_paper, MissCategory, NearMissCategory, PaperAnalysis};

/// Summed statistics over any number of papers.
///
/// `merge` is associative and commutative with `GapTotals::default()` as identity,
/// so per-paper results can be reduced in any order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapTotals {
    pub papers: usize,
    pub tally: MatchTally,
    pub categories: BTreeMap<MissCategory, usize>,
    pub near_misses: BTreeMap<NearMissCategory, usize>,
}

impl GapTotals {
    pub fn merge(mut self, other: GapTotals) -> GapTotals {
        self.papers += other.papers;
        self.tally = self.tally.merge(other.tally);
        for (category, count) in other.categories {
            *self.categories.entry(category).or_insert(0) += count;
        }
        for (category, count) in other.near_misses {
            *self.near_misses.entry(category).or_insert(0) += count;
        }
        self
    }

    pub fn category_count(&self, category: MissCategory) -> usize {
        self.categories.get(&category).copied().unwrap_or(0)
    }

    pub fn near_miss_count(&self, category: NearMissCategory) -> usize {
        self.near_misses.get(&category).copied().unwrap_or(0)
    }

    /// Sum of the miss-category histogram
    pub fn total_unmatched(&self) -> usize {
        self.categories.values().sum()
    }

    pub fn recall(&self) -> f64 {
        self.tally.recall()
    }
}

impl From<&PaperAnalysis> for GapTotals {
    fn from(analysis: &PaperAnalysis) -> Self {
        let mut near_misses = BTreeMap::new();
        for (_, near_miss) in analysis.near_misses() {
            *near_misses.entry(near_miss.category).or_insert(0) += 1;
        }
        GapTotals {
            papers: 1,
            tally: analysis.tally,
            categories: analysis.categories.clone(),
            near_misses,
        }
    }
}

/// Reduce per-paper analyses into totals
pub fn summarize(analyses: &[PaperAnalysis]) -> GapTotals {
    analyses
        .par_iter()
        .map(GapTotals::from)
        .reduce(GapTotals::default, GapTotals::merge)
}

/// Inclusive recall bounds; papers outside are dropped after analysis
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RecallFilter {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RecallFilter {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn accepts(&self, recall: f64) -> bool {
        self.min.map_or(true, |min| recall >= min) && self.max.map_or(true, |max| recall <= max)
    }
}

/// Ground truth and extracted references for one paper
pub type PaperInputs = (Vec<Reference>, Vec<Reference>);

/// Load and analyze papers in parallel.
///
/// A paper whose inputs fail to load is logged and skipped. Output keeps the
/// order of `paper_ids`; papers rejected by `filter` are dropped.
pub fn analyze_papers<F>(
    paper_ids: &[String],
    load: F,
    filter: RecallFilter,
    progress: &ProgressBar,
) -> Vec<PaperAnalysis>
where
    F: Fn(&str) -> Result<PaperInputs> + Sync,
{
    paper_ids
        .par_iter()
        .filter_map(|paper_id| {
            let analysis = match load(paper_id.as_str()) {
                Ok((ground_truth, extracted)) => Some(analyze_paper(paper_id, &ground_truth, extracted)),
                Err(e) => {
                    warn!("Skipping {}: {:#}", paper_id, e);
                    None
                }
            };
            progress.inc(1);
            analysis
        })
        .filter(|analysis| {
            let keep = filter.accepts(analysis.recall);
            if !keep {
                debug!(
                    "Filtered out {} (recall {:.3})",
                    analysis.paper_id, analysis.recall
                );
            }
            keep
        })
        .collect()
}
