//! Journal title canonicalization.
//!
//! A title is reduced to a lowercase alphanumeric token and then rewritten with
//! three closed tables: word-level abbreviations, trailing qualifiers, and
//! whole-prefix equivalences to INSPIRE short forms.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Long form -> abbreviation. Applied in a single left-to-right pass where the
/// longest alias starting at a position wins and replaced text is not rescanned.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("rept", "rep"),
    ("annu", "ann"),
    ("quantum", "quant"),
    ("gravity", "grav"),
    ("methods", "meth"),
    ("annals", "ann"),
    ("polon", "pol"),
    ("atom", "at"),
    ("nuovo", "nuov"),
    ("cimento", "cim"),
    ("relativ", "rel"),
    ("astron", "astr"),
    ("europhys", "eurphys"),
    // "europhys" followed by "ics" must collapse to the same token as "europhys"
    ("europhysics", "eurphys"),
    ("royal", "r"),
    ("roy", "r"),
    ("spectop", "st"),
    ("fortschr", "fortsch"),
    ("london", "lond"),
    ("scripta", "scr"),
    ("japan", "jpn"),
    ("jap", "jpn"),
    ("czechoslov", "czech"),
    ("materials", "mater"),
    ("concepts", ""),
    ("photonics", "photon"),
    ("uspekhi", "usp"),
    ("statistik", "stat"),
    ("statist", "stat"),
    ("natl", "nat"),
    ("national", "nat"),
    ("frontiers", "front"),
    ("philos", "phil"),
    ("theory", "theor"),
    ("interiors", "inter"),
    ("molec", "mol"),
    ("cambridge", "camb"),
    ("nuclear", "nucl"),
    ("physics", "phys"),
];

/// Trailing country codes, stripped before series markers
pub const COUNTRY_SUFFIXES: &[&str] = &["usa", "uk"];

/// Trailing series markers
pub const SERIES_SUFFIXES: &[&str] = &["series", "ser"];

/// Known long-form prefix -> INSPIRE short form. The first listed prefix that
/// matches is rewritten; whatever follows it is kept.
pub const PREFIX_EQUIVALENCES: &[(&str, &str)] = &[
    ("jhighenergyphys", "jhep"),
    ("jcosmolastropartphys", "jcap"),
    ("nuclinstrummethphysres", "nuclinstrummeth"),
    ("eurphyslett", "epl"),
    ("natmater", "naturemater"),
    ("natphys", "naturephys"),
    ("nuovcimlett", "lettnuovcim"),
    ("nuovcimriv", "rivnuovcim"),
    ("annphysleipzig", "annphys"),
    ("annphysnewyork", "annphys"),
    ("highenergyphysnuclphys", "hepnp"),
    ("highenergyphysnuclphysbeijing", "hepnp"),
    ("ieeetransinftheor", "ieeetransinfotheor"),
    ("sovphysjetp", "jexptheorphys"),
    ("sovphysusp", "physusp"),
    ("yadfiz", "physatnucl"),
    ("sovjnuclphys", "physatnucl"),
    ("zhekspteorfiz", "jexptheorphys"),
    ("progtheorexpphys", "ptep"),
    ("procspieintsocopteng", "procspie"),
    ("jdiffergeom", "jdiffgeom"),
    ("jmolecspectrosc", "jmolspectrosc"),
    ("pramanajphys", "pramana"),
    ("hadronicj", "hadronj"),
    ("eurphysjdirect", "eurphysj"),
    ("physscrtopissues", "physscrt"),
    ("naturwissenschaften", "naturwiss"),
    ("fortschittederphys", "fortschphys"),
    ("annalenphys", "annphys"),
    ("comptesrendusphysique", "crphys"),
    ("chinjphysc", "chinphysc"),
    ("gravitcosmol", "gravcosmol"),
    ("physjc", "eurphysjc"),
    ("physja", "eurphysja"),
    ("natphoton", "naturephoton"),
    ("natnanotech", "naturenanotech"),
    ("natcommun", "naturecommun"),
    ("natelectron", "natureelectron"),
    ("natrevphys", "naturerevphys"),
    ("natastr", "natureastr"),
    ("natchem", "naturechem"),
];

lazy_static! {
    static ref NON_ALNUM: Regex = Regex::new(r"[^a-zA-Z0-9]+").unwrap();

    static ref ABBREVIATION_MAP: HashMap<&'static str, &'static str> =
        ABBREVIATIONS.iter().copied().collect();

    // Alternation ordered longest-first so leftmost-first matching picks the
    // longest alias at each position.
    static ref ABBREVIATION_PATTERN: Regex = {
        let mut aliases: Vec<&str> = ABBREVIATIONS.iter().map(|(long, _)| *long).collect();
        aliases.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
        let alternation = aliases
            .iter()
            .map(|a| regex::escape(a))
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&alternation).unwrap()
    };
}

/// Normalize a journal title into a comparable token.
///
/// "J. High Energy Phys." and "JHEP" both become "jhep";
/// "Phys. Rev. D" becomes "physrevd".
pub fn normalize_journal(raw: &str) -> String {
    let mut token = NON_ALNUM.replace_all(raw, "").to_lowercase();

    loop {
        let next = rewrite(&token);
        if next == token {
            return token;
        }
        token = next;
    }
}

fn rewrite(token: &str) -> String {
    let abbreviated = abbreviate(token);
    let stripped = strip_qualifiers(&abbreviated);
    apply_prefix_equivalence(stripped)
}

fn abbreviate(token: &str) -> String {
    ABBREVIATION_PATTERN
        .replace_all(token, |caps: &regex::Captures| {
            let long = &caps[0];
            ABBREVIATION_MAP.get(long).copied().unwrap_or(long).to_string()
        })
        .into_owned()
}

fn strip_first_suffix<'a>(token: &'a str, suffixes: &[&str]) -> &'a str {
    suffixes
        .iter()
        .find_map(|suffix| token.strip_suffix(suffix))
        .unwrap_or(token)
}

/// Strip a country code and then a series marker, until neither applies
fn strip_qualifiers(mut token: &str) -> &str {
    loop {
        let before = token.len();
        token = strip_first_suffix(token, COUNTRY_SUFFIXES);
        token = strip_first_suffix(token, SERIES_SUFFIXES);
        if token.len() == before {
            return token;
        }
    }
}

fn apply_prefix_equivalence(token: &str) -> String {
    PREFIX_EQUIVALENCES
        .iter()
        .find(|(full, _)| token.starts_with(full))
        .map(|(full, short)| format!("{}{}", short, &token[full.len()..]))
        .unwrap_or_else(|| token.to_string())
}
