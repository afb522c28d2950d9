//! Static allow-lists: institutions, places, and legal vocabulary that must
//! never be redacted. Process-wide constants, immutable after init.

use std::collections::HashSet;
use std::sync::LazyLock;

use redakt_core::EntityLabel;

/// Courts, public authorities, and recognized supranational or government
/// bodies. ORG candidates matching these (exactly, by prefix, or by
/// containment) are exempt from redaction.
static ORG_TERMS: &[&str] = &[
    // Gerichte
    "Amtsgericht",
    "Landesgericht",
    "Oberlandesgericht",
    "Bundesgerichtshof",
    "Bundesverfassungsgericht",
    "Bundesverwaltungsgericht",
    "Bundesfinanzhof",
    "Bundesarbeitsgericht",
    "Bundessozialgericht",
    "Verwaltungsgericht",
    "Verwaltungsgerichtshof",
    "Finanzgericht",
    "Sozialgericht",
    "Arbeitsgericht",
    "Landesarbeitsgericht",
    "Landessozialgericht",
    "Oberverwaltungsgericht",
    "Bezirksgericht",
    "Handelsgericht",
    "Oberster Gerichtshof",
    "Verfassungsgerichtshof",
    "Bundesgericht",
    "Kantonsgericht",
    "Obergericht",
    "Europäischer Gerichtshof",
    "EuGH",
    "EGMR",
    "Europäischer Gerichtshof für Menschenrechte",
    // Behörden
    "Finanzamt",
    "Grundbuchamt",
    "Handelsregister",
    "Firmenbuch",
    "Standesamt",
    "Bezirkshauptmannschaft",
    "Magistrat",
    "Bundesministerium",
    "Landesregierung",
    "Bezirksregierung",
    "Staatsanwaltschaft",
    "Generalstaatsanwaltschaft",
    "Datenschutzbehörde",
    "Bundespolizei",
    "Polizei",
    "Bundesnetzagentur",
    "Kartellamt",
    "Bundeskartellamt",
    // Supranationales und Staaten
    "Europäische Union",
    "EU",
    "Europäische Kommission",
    "Europäisches Parlament",
    "Europarat",
    "Vereinte Nationen",
    "UN",
    "NATO",
    "Bundesrepublik Deutschland",
    "Republik Österreich",
    "Schweizerische Eidgenossenschaft",
];

/// Countries, states/provinces, and major cities. LOC matching is
/// exact-only.
static LOC_TERMS: &[&str] = &[
    "Deutschland",
    "Österreich",
    "Schweiz",
    "Liechtenstein",
    "Luxemburg",
    "Frankreich",
    "Italien",
    "Spanien",
    "Niederlande",
    "Belgien",
    "Großbritannien",
    "England",
    "Schottland",
    "Irland",
    "USA",
    "Vereinigte Staaten",
    "China",
    "Japan",
    "Russland",
    "Europa",
    "Asien",
    "Afrika",
    "Nordamerika",
    "Südamerika",
    "Bayern",
    "Baden-Württemberg",
    "Hessen",
    "Nordrhein-Westfalen",
    "Niedersachsen",
    "Sachsen",
    "Thüringen",
    "Brandenburg",
    "Mecklenburg-Vorpommern",
    "Sachsen-Anhalt",
    "Schleswig-Holstein",
    "Rheinland-Pfalz",
    "Saarland",
    "Berlin",
    "Hamburg",
    "Bremen",
    "Wien",
    "Niederösterreich",
    "Oberösterreich",
    "Steiermark",
    "Tirol",
    "Kärnten",
    "Salzburg",
    "Vorarlberg",
    "Burgenland",
    "Zürich",
    "Bern",
    "Luzern",
    "Basel",
    "Genf",
    "Lausanne",
];

/// Statute names and legal-form abbreviations, exempt regardless of label.
static MISC_TERMS: &[&str] = &[
    "BGB", "ZPO", "StGB", "StPO", "HGB", "GmbHG", "AktG", "InsO", "ABGB", "UGB", "DSGVO", "BDSG",
    "DSG", "GDPR", "GmbH", "AG", "KG", "OG", "OHG", "e.V.", "e.G.", "GmbH & Co. KG", "UG", "SE",
];

static ORG_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ORG_TERMS.iter().copied().collect());
static LOC_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LOC_TERMS.iter().copied().collect());
static MISC_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| MISC_TERMS.iter().copied().collect());

/// Whether `text` is exempt from redaction under `label`.
///
/// ORG candidates match exactly, by prefix, or by substring containment:
/// "Amtsgericht München" and "das zuständige Amtsgericht" are both exempt.
/// Containment is strictly broader than exact/prefix matching: any
/// candidate containing an authority name anywhere is exempt.
pub fn is_whitelisted(text: &str, label: EntityLabel) -> bool {
    let clean = text.trim();

    if MISC_SET.contains(clean) {
        return true;
    }
    match label {
        EntityLabel::Org => {
            if ORG_SET.contains(clean) {
                return true;
            }
            ORG_TERMS
                .iter()
                .any(|term| clean.starts_with(term) || clean.contains(term))
        }
        EntityLabel::Loc => LOC_SET.contains(clean),
        EntityLabel::Per => false,
    }
}
