//! Normalization and fuzzy matching of bibliographic references, with
//! diagnostics for the ground-truth references an extractor missed.

pub mod analysis;
pub mod cli;
pub mod commands;
pub mod common;
pub mod input;
pub mod matching;
pub mod normalize;
pub mod report;
