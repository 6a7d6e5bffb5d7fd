pub mod arxiv;
pub mod journal;

pub use arxiv::normalize_arxiv;
pub use journal::normalize_journal;

/// Normalize a DOI: trim and lowercase, nothing more
pub fn normalize_doi(raw: &str) -> String {
    raw.trim().to_lowercase()
}
