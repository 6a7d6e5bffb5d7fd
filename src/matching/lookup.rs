use std::collections::HashMap;

use crate::common::Reference;

/// Journal token under which INSPIRE files every Proceedings of Science volume
const POS_JOURNAL: &str = "pos";

/// One (journal, volume) pair an extracted record can be matched on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalVolumeEntry {
    pub journal: String,
    pub volume: String,
    /// Position of the extracted record in the paper's list
    pub source: usize,
}

/// Lookup structures over one paper's extracted references.
///
/// Built once per paper and only read while matching.
#[derive(Debug, Clone, Default)]
pub struct ExtractedIndex {
    /// arXiv ID -> first extracted record carrying it
    arxiv: HashMap<String, usize>,
    /// DOI -> first extracted record carrying it
    doi: HashMap<String, usize>,
    journal_volume: Vec<JournalVolumeEntry>,
    extracted_count: usize,
}

impl ExtractedIndex {
    pub fn build(extracted: &[Reference]) -> Self {
        let mut index = Self {
            arxiv: HashMap::with_capacity(extracted.len()),
            doi: HashMap::with_capacity(extracted.len()),
            journal_volume: Vec::with_capacity(extracted.len()),
            extracted_count: extracted.len(),
        };

        for (source, reference) in extracted.iter().enumerate() {
            index.insert(source, reference);
        }

        // PoS entries go after every plain pair so scan order matches record order first
        let pos_entries: Vec<JournalVolumeEntry> = index
            .journal_volume
            .iter()
            .filter_map(pos_equivalent)
            .collect();
        index.journal_volume.extend(pos_entries);

        index
    }

    fn insert(&mut self, source: usize, reference: &Reference) {
        if reference.has_arxiv() {
            self.arxiv.entry(reference.arxiv().to_string()).or_insert(source);
        }
        if reference.has_doi() {
            self.doi.entry(reference.doi().to_string()).or_insert(source);
        }
        if reference.has_journal() {
            self.journal_volume.push(JournalVolumeEntry {
                journal: reference.journal().to_string(),
                volume: reference.volume().to_string(),
                source,
            });
        }
    }

    pub fn find_arxiv(&self, arxiv: &str) -> Option<usize> {
        self.arxiv.get(arxiv).copied()
    }

    pub fn find_doi(&self, doi: &str) -> Option<usize> {
        self.doi.get(doi).copied()
    }

    pub fn journal_volume_entries(&self) -> &[JournalVolumeEntry] {
        &self.journal_volume
    }

    /// Number of extracted records the index was built from
    pub fn len(&self) -> usize {
        self.extracted_count
    }

    pub fn is_empty(&self) -> bool {
        self.extracted_count == 0
    }
}

/// "poslattice2013" with volume "001" is also filed as ("pos", "LATTICE2013001"),
/// the way INSPIRE encodes the conference into the volume.
fn pos_equivalent(entry: &JournalVolumeEntry) -> Option<JournalVolumeEntry> {
    let conference = entry.journal.strip_prefix(POS_JOURNAL)?;
    if conference.is_empty() {
        return None;
    }
    Some(JournalVolumeEntry {
        journal: POS_JOURNAL.to_string(),
        volume: format!("{}{}", conference.to_uppercase(), entry.volume),
        source: entry.source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_indexes_identifiers() {
        let extracted = vec![
            Reference::new("1234.5678v2", "", "", ""),
            Reference::new("", "10.1000/X", "", ""),
            Reference::new("", "", "Phys. Rev. D", "95"),
        ];
        let index = ExtractedIndex::build(&extracted);

        assert_eq!(index.len(), 3);
        assert_eq!(index.find_arxiv("1234.5678"), Some(0));
        assert_eq!(index.find_doi("10.1000/x"), Some(1));
        assert_eq!(index.find_arxiv("9999.9999"), None);
        assert_eq!(index.journal_volume_entries().len(), 1);
        assert_eq!(index.journal_volume_entries()[0].journal, "physrevd");
        assert_eq!(index.journal_volume_entries()[0].source, 2);
    }

    #[test]
    fn test_first_record_wins() {
        let extracted = vec![
            Reference::new("1234.5678", "", "", ""),
            Reference::new("1234.5678v3", "", "", ""),
        ];
        let index = ExtractedIndex::build(&extracted);
        assert_eq!(index.find_arxiv("1234.5678"), Some(0));
    }

    #[test]
    fn test_journal_without_volume_not_indexed() {
        let extracted = vec![Reference::new("", "", "JHEP", ""), Reference::new("", "", "", "12")];
        let index = ExtractedIndex::build(&extracted);
        assert!(index.journal_volume_entries().is_empty());
    }

    #[test]
    fn test_pos_entries_added() {
        let extracted = vec![
            Reference::new("", "", "PoS LATTICE2013", "001"),
            Reference::new("", "", "JHEP", "04"),
        ];
        let index = ExtractedIndex::build(&extracted);
        let entries = index.journal_volume_entries();

        assert_eq!(entries.len(), 3);
        assert_eq!(
            entries[2],
            JournalVolumeEntry {
                journal: "pos".to_string(),
                volume: "LATTICE2013001".to_string(),
                source: 0,
            }
        );
    }

    #[test]
    fn test_bare_pos_not_reshaped() {
        let extracted = vec![Reference::new("", "", "PoS", "LATTICE2013")];
        let index = ExtractedIndex::build(&extracted);
        assert_eq!(index.journal_volume_entries().len(), 1);
    }

    #[test]
    fn test_empty() {
        let index = ExtractedIndex::build(&[]);
        assert!(index.is_empty());
        assert!(index.journal_volume_entries().is_empty());
    }
}
