/// Redakt system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The single marker token emitted by the external rewriting service in
/// place of sensitive spans. Alignment back onto the input text is keyed
/// on this exact token.
pub const REWRITE_MARKER: &str = "[REDACTED]";

/// Placeholder category word for natural persons ("Person A", "Person B", ...).
pub const CATEGORY_PERSON: &str = "Person";

/// Placeholder category word for organizations.
pub const CATEGORY_ORG: &str = "Firma";

/// Placeholder category word for locations.
pub const CATEGORY_LOC: &str = "Ort";
