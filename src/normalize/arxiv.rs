use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Trailing version suffix: 1234.5678v2, hep-th/9901001v3
    static ref ARXIV_VERSION_SUFFIX: Regex = Regex::new(r"(?:v\d+)+$").unwrap();
}

/// Normalize an arXiv ID: trim, lowercase, strip the version suffix
pub fn normalize_arxiv(raw: &str) -> String {
    let id = raw.trim().to_lowercase();
    if id.is_empty() {
        return id;
    }
    ARXIV_VERSION_SUFFIX.replace(&id, "").into_owned()
}
