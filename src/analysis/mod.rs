//! Gap analysis: why ground-truth references went unmatched.

pub mod aggregate;
pub mod classify;
pub mod near_miss;
pub mod paper;
pub mod volume_mismatch;

pub use aggregate::{analyze_papers, summarize, GapTotals, PaperInputs, RecallFilter};
pub use classify::{classify_miss, MissCategory};
pub use near_miss::{analyze_near_miss, NearMiss, NearMissCategory};
pub use paper::{analyze_paper, PaperAnalysis, UnmatchedReference};
pub use volume_mismatch::{MismatchPattern, PatternCount, VolumeMismatchSummary, TOP_PATTERNS};
