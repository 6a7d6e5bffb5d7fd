use serde::{Deserialize, Serialize};

use crate::common::Reference;

/// Why a ground-truth reference went unmatched, judged from the identifiers it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissCategory {
    /// No arXiv ID, DOI or journal+volume
    NoId,
    /// Only a DOI
    DoiOnly,
    /// Journal+volume, no citation text in the ground truth
    JournalNoRaw,
    /// Journal+volume with citation text; the extractor had something to work with
    JournalWithRaw,
    /// arXiv ID without journal+volume
    ArxivOnly,
    /// The paper produced no extracted references at all
    ZeroExtract,
}

impl MissCategory {
    /// Report order
    pub const ALL: [MissCategory; 6] = [
        MissCategory::NoId,
        MissCategory::DoiOnly,
        MissCategory::JournalNoRaw,
        MissCategory::JournalWithRaw,
        MissCategory::ArxivOnly,
        MissCategory::ZeroExtract,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MissCategory::NoId => "no_id",
            MissCategory::DoiOnly => "doi_only",
            MissCategory::JournalNoRaw => "journal_no_raw",
            MissCategory::JournalWithRaw => "journal_with_raw",
            MissCategory::ArxivOnly => "arxiv_only",
            MissCategory::ZeroExtract => "zero_extract",
        }
    }
}

impl std::fmt::Display for MissCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Categorize an unmatched ground-truth reference.
///
/// `extracted_is_empty` overrides everything: a paper with no extracted
/// references says nothing about the individual reference.
pub fn classify_miss(reference: &Reference, extracted_is_empty: bool) -> MissCategory {
    if extracted_is_empty {
        return MissCategory::ZeroExtract;
    }

    let has_arxiv = reference.has_arxiv();
    let has_doi = reference.has_doi();
    let has_journal = reference.has_journal();

    if !has_arxiv && !has_doi && !has_journal {
        MissCategory::NoId
    } else if has_doi && !has_arxiv && !has_journal {
        MissCategory::DoiOnly
    } else if has_journal {
        if reference.has_raw_text() {
            MissCategory::JournalWithRaw
        } else {
            MissCategory::JournalNoRaw
        }
    } else {
        MissCategory::ArxivOnly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_extract_wins() {
        let r = Reference::new("1234.5678", "10.1/a", "JHEP", "04").with_raw_text("text");
        assert_eq!(classify_miss(&r, true), MissCategory::ZeroExtract);
    }

    #[test]
    fn test_no_id() {
        let r = Reference::new("", "", "", "").with_raw_text("Some book, 1999");
        assert_eq!(classify_miss(&r, false), MissCategory::NoId);
        // journal without volume is not a journal identifier
        let r = Reference::new("", "", "JHEP", "");
        assert_eq!(classify_miss(&r, false), MissCategory::NoId);
    }

    #[test]
    fn test_doi_only() {
        let r = Reference::new("", "10.1/a", "", "");
        assert_eq!(classify_miss(&r, false), MissCategory::DoiOnly);
    }

    #[test]
    fn test_journal_with_and_without_raw() {
        let r = Reference::new("", "10.1/a", "Phys. Rev. D", "95");
        assert_eq!(classify_miss(&r, false), MissCategory::JournalNoRaw);
        let r = r.with_raw_text("Phys. Rev. D 95, 012345");
        assert_eq!(classify_miss(&r, false), MissCategory::JournalWithRaw);
    }

    #[test]
    fn test_arxiv_only() {
        let r = Reference::new("1234.5678", "", "", "");
        assert_eq!(classify_miss(&r, false), MissCategory::ArxivOnly);
        // arXiv plus DOI without a journal also lands here
        let r = Reference::new("1234.5678", "10.1/a", "", "");
        assert_eq!(classify_miss(&r, false), MissCategory::ArxivOnly);
    }

    #[test]
    fn test_serialization_names() {
        for category in MissCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
        }
    }
}
