//! Score-independent false-positive heuristics for candidate spans.

use std::collections::HashSet;
use std::sync::LazyLock;

use redakt_core::EntityLabel;
use regex::Regex;

/// German legal-role nouns that NER backends routinely mislabel as person
/// names. Exact matches are dropped before any placeholder is assigned.
static LEGAL_ROLE_TERMS: &[&str] = &[
    "Kläger",
    "Beklagte",
    "Beklagter",
    "Antragsteller",
    "Antragsgegner",
    "Beschuldigte",
    "Beschuldigter",
    "Angeklagte",
    "Angeklagter",
    "Klägerseite",
    "Beklagtenseite",
    "Nebenintervenientin",
    "Nebenintervenient",
    "Berufungswerber",
    "Berufungswerberin",
    "Revisionswerber",
    "Beschwerdeführer",
    "Beschwerdeführerin",
    "Erblasser",
    "Erblasserin",
    "Erben",
    "Erbin",
    "Mieter",
    "Vermieter",
    "Käufer",
    "Verkäufer",
    "Arbeitgeber",
    "Arbeitnehmer",
    "Dienstgeber",
    "Dienstnehmer",
    "Gläubiger",
    "Schuldner",
    "Bürge",
    "Richter",
    "Richterin",
    "Staatsanwalt",
    "Staatsanwältin",
    "Rechtsanwalt",
    "Rechtsanwältin",
    "Notar",
    "Notarin",
    "Vorsitzende",
    "Vorsitzender",
    "Beisitzer",
    "Zeuge",
    "Zeugin",
    "Sachverständige",
    "Sachverständiger",
    "Bundesrepublik",
    "Republik",
    "Partei",
    "Parteien",
    "Vertragspartei",
    "Absatz",
    "Ziffer",
    "Satz",
    "Nummer",
];

static LEGAL_ROLE_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LEGAL_ROLE_TERMS.iter().copied().collect());

static RE_FRACTION_SHAPE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{1,6}/\d{1,6}$").ok());

/// Whether a candidate span should be dropped regardless of its score.
///
/// Rejects single-character spans, all-digit spans, fraction-shaped spans
/// (also shielded in the pattern phase), and the legal-role lexicon.
/// Applies to every label today.
pub fn should_skip(text: &str, _label: EntityLabel) -> bool {
    let clean = text.trim();

    if clean.chars().count() <= 1 {
        return true;
    }
    let without_spaces: String = clean.chars().filter(|c| !c.is_whitespace()).collect();
    if !without_spaces.is_empty() && without_spaces.chars().all(|c| c.is_ascii_digit()) {
        return true;
    }
    if RE_FRACTION_SHAPE
        .as_ref()
        .is_some_and(|re| re.is_match(clean))
    {
        return true;
    }
    LEGAL_ROLE_SET.contains(clean)
}
