/// Separators between the parts of a combined volume ("904-905")
const VOLUME_SEPARATORS: [char; 3] = ['-', '\u{2013}', '\u{2014}'];

/// Decide whether two volume designators denote the same volume.
///
/// Symmetric. Covers year-prefixed volumes ("0904" vs "04"), combined volumes
/// ("904-905" vs "904"), leading zeros ("012" vs "12") and conference codes
/// ("LAT2006" vs "2006").
pub fn volumes_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    let (short, long) = shorter_longer(a, b);
    if short.chars().count() >= 2 && is_year_prefixed(short, long) {
        return true;
    }

    if is_part_of_combined(a, b) || is_part_of_combined(b, a) {
        return true;
    }

    let a_stripped = strip_leading_zeros(a);
    let b_stripped = strip_leading_zeros(b);
    if a_stripped == b_stripped {
        return true;
    }

    let (short_stripped, long_stripped) = shorter_longer(a_stripped, b_stripped);
    if is_year_prefixed(short_stripped, long_stripped) {
        return true;
    }

    is_conference_code(short, long)
}

/// Lengths compare in characters, not bytes
fn shorter_longer<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a.chars().count() <= b.chars().count() {
        (a, b)
    } else {
        (b, a)
    }
}

fn is_year_prefixed(short: &str, long: &str) -> bool {
    long.ends_with(short) && long[..long.len() - short.len()].chars().count() <= 2
}

/// `combined` contains a separator and `single` equals one of its parts
fn is_part_of_combined(combined: &str, single: &str) -> bool {
    VOLUME_SEPARATORS
        .iter()
        .filter(|sep| combined.contains(**sep))
        .any(|sep| combined.split(*sep).any(|part| part == single))
}

/// Strip leading zeros; an all-zero (or empty) volume becomes "0"
fn strip_leading_zeros(volume: &str) -> &str {
    match volume.trim_start_matches('0') {
        "" => "0",
        stripped => stripped,
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// "LAT2006" vs "2006": an alphabetic code in front of the numeric volume
fn is_conference_code(short: &str, long: &str) -> bool {
    is_numeric(short)
        && !is_numeric(long)
        && long.trim_start_matches(|c: char| c.is_ascii_alphabetic()) == short
}
