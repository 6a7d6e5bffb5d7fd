/// Sub-journal suffixes accepted after a shared prefix ("nuclphysb" vs "nuclphysbprocsuppl")
const SUB_JOURNAL_SUFFIXES: &[&str] = &["lett", "suppl", "supp", "procsuppl"];

/// Proceedings suffixes accepted after a section letter ("nuclphys" vs "nuclphysbprocsuppl")
const SECTION_PROCEEDINGS_SUFFIXES: &[&str] = &["procsuppl", "procsup"];

/// Shortest prefix allowed to match a slightly longer token
const MIN_PREFIX_LEN: usize = 6;
/// Longest extension of that prefix
const MAX_PREFIX_EXTENSION: usize = 3;
const MIN_SUB_JOURNAL_PREFIX_LEN: usize = 8;
const MIN_SECTION_PROCEEDINGS_PREFIX_LEN: usize = 7;
const MIN_SECTION_LETTER_LEN: usize = 8;

/// Decide whether two normalized journal tokens denote the same journal or section.
///
/// Short generic roots such as "phys" never match on prefix alone.
pub fn journals_match(a: &str, b: &str) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if a == b {
        return true;
    }

    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    if let Some(tail) = long.strip_prefix(short) {
        if short.len() >= MIN_PREFIX_LEN && tail.len() <= MAX_PREFIX_EXTENSION {
            return true;
        }
        if short.len() >= MIN_SUB_JOURNAL_PREFIX_LEN && SUB_JOURNAL_SUFFIXES.contains(&tail) {
            return true;
        }
        if short.len() >= MIN_SECTION_PROCEEDINGS_PREFIX_LEN && is_section_proceedings(tail) {
            return true;
        }
    }

    differs_only_in_section_letter(a, b)
}

/// One section letter followed by a proceedings suffix: "bprocsuppl"
fn is_section_proceedings(tail: &str) -> bool {
    let mut chars = tail.chars();
    match chars.next() {
        Some(letter) if letter.is_ascii_alphabetic() && tail.len() >= 2 => {
            SECTION_PROCEEDINGS_SUFFIXES.contains(&chars.as_str())
        }
        _ => false,
    }
}

/// INSPIRE sometimes records a different section letter than the extractor
/// ("physrevd" vs "physrevc"); equal-length tokens differing only there match.
fn differs_only_in_section_letter(a: &str, b: &str) -> bool {
    if a.len() != b.len() || a.len() < MIN_SECTION_LETTER_LEN {
        return false;
    }
    match (a.char_indices().last(), b.char_indices().last()) {
        (Some((ia, ca)), Some((ib, cb))) => {
            a[..ia] == b[..ib] && ca.is_ascii_alphabetic() && cb.is_ascii_alphabetic()
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_never_matches() {
        assert!(!journals_match("", ""));
        assert!(!journals_match("physrev", ""));
        assert!(!journals_match("", "physrev"));
    }

    #[test]
    fn test_exact() {
        assert!(journals_match("jhep", "jhep"));
    }

    #[test]
    fn test_prefix_with_short_extension() {
        assert!(journals_match("physrev", "physrevd"));
        assert!(journals_match("physrevd", "physrev"));
        assert!(journals_match("physlett", "physlettb"));
        // "lett" is four characters past a seven-character prefix
        assert!(!journals_match("physrev", "physrevlett"));
    }

    #[test]
    fn test_prefix_too_short() {
        assert!(!journals_match("phys", "physrev"));
        assert!(!journals_match("jhep", "jhepa"));
        assert!(!journals_match("nucl", "nuclphysb"));
    }

    #[test]
    fn test_prefix_extension_too_long() {
        assert!(!journals_match("physrev", "physrevaccelbeams"));
        assert!(!journals_match("nuclphys", "nuclphysproc"));
    }

    #[test]
    fn test_sub_journal_suffix() {
        assert!(journals_match("modphysa", "modphysalett"));
        assert!(journals_match("nuclphysb", "nuclphysbprocsuppl"));
        assert!(journals_match("nuclphysb", "nuclphysbsuppl"));
        // prefix of seven characters is too short for the suffix rule
        assert!(!journals_match("jphysgx", "jphysgxsuppl"));
    }

    #[test]
    fn test_section_letter_then_proceedings() {
        assert!(journals_match("nuclphys", "nuclphysbprocsuppl"));
        assert!(journals_match("nuclphys", "nuclphysaprocsup"));
        assert!(!journals_match("nuclphys", "nuclphys1procsuppl"));
    }

    #[test]
    fn test_section_letter_tolerance() {
        assert!(journals_match("physrevd", "physrevc"));
        assert!(journals_match("eurphysjc", "eurphysja"));
        // too short for the tolerance
        assert!(!journals_match("physrva", "physrvb"));
        // trailing digits are not section letters
        assert!(!journals_match("physrev1", "physrev2"));
    }

    #[test]
    fn test_unrelated_journals() {
        assert!(!journals_match("jhep", "jcap"));
        assert!(!journals_match("physlettb", "nuclphysb"));
        assert!(!journals_match("annphys", "ann"));
    }
}
