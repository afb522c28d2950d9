//! Native tag vocabularies of the supported backends, mapped onto the
//! engine's three labels. A mapping of `None` drops the span entirely:
//! statute references, case citations, and literature references are
//! never redaction candidates.

use redakt_core::EntityLabel;

/// Tag vocabulary of the legal-domain tagger.
pub fn map_legal_tag(tag: &str) -> Option<EntityLabel> {
    match tag {
        "PER" => Some(EntityLabel::Per),
        "ORG" => Some(EntityLabel::Org),
        "LOC" => Some(EntityLabel::Loc),
        // Anwalt
        "AN" => Some(EntityLabel::Per),
        // Unternehmen
        "UN" => Some(EntityLabel::Org),
        // Marke
        "MRK" => Some(EntityLabel::Org),
        // EU-Norm
        "EUN" => Some(EntityLabel::Org),
        // Land, Stadt, Straße, Landschaft
        "LD" | "ST" | "STR" | "LDS" => Some(EntityLabel::Loc),
        // Rechtssache, Gesetz, Rechtsreferenz, Institution, Literatur:
        // nie schwärzen.
        _ => None,
    }
}

/// Tag vocabulary of general-purpose taggers. `MISC` and anything unknown
/// is dropped.
pub fn map_standard_tag(tag: &str) -> Option<EntityLabel> {
    match tag {
        "PER" => Some(EntityLabel::Per),
        "ORG" => Some(EntityLabel::Org),
        "LOC" => Some(EntityLabel::Loc),
        _ => None,
    }
}
