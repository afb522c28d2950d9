//! Detector table: one fixed replacement tag per detector, gated by the
//! lowest sensitivity tier that activates it.

use std::sync::LazyLock;

use redakt_core::Sensitivity;
use regex::Regex;

/// A compiled fixed-format detector.
pub struct FixedPattern {
    pub name: &'static str,
    pub regex: &'static LazyLock<Option<Regex>>,
    /// Fixed replacement tag, e.g. `[E-MAIL REDACTED]`.
    pub tag: &'static str,
    /// Lowest tier at which this detector runs.
    pub min_sensitivity: Sensitivity,
    /// When set, only this capture group's range is replaced; the rest of
    /// the match (the keyword anchor) is kept verbatim.
    pub capture_group: Option<usize>,
}

macro_rules! fixed_pattern {
    ($name:ident, $regex_str:expr) => {
        pub static $name: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new($regex_str).ok());
    };
}

// ── E-Mail ─────────────────────────────────────────────────────────────────
fixed_pattern!(
    RE_EMAIL,
    r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b"
);

// ── IBAN (spaced groups of four) ───────────────────────────────────────────
fixed_pattern!(
    RE_IBAN,
    r"\b[A-Z]{2}\d{2}\s?\d{4}\s?\d{4}\s?\d{4}\s?\d{4}\s?\d{0,2}\b"
);

// ── Steuernummer (Finanzamt/Bezirk/Unterscheidungsnummer) ─────────────────
fixed_pattern!(RE_TAX_NUMBER, r"\b\d{2,3}/\d{3}/\d{4,5}\b");

// ── Handelsregisternummer (HRA/HRB) ────────────────────────────────────────
fixed_pattern!(RE_COMMERCIAL_REGISTER, r"\bHR[AB]\s*\d+\b");

// ── Straßenadresse mit Hausnummer ──────────────────────────────────────────
fixed_pattern!(
    RE_STREET_ADDRESS,
    r"(?i)\b[A-ZÄÖÜ][a-zäöüß]+(?:straße|strasse|str\.|weg|gasse|platz|allee|damm|ring|ufer)\s*\d+\s*[a-zA-Z]?\b"
);

// ── Sozialversicherungsnummer ──────────────────────────────────────────────
fixed_pattern!(RE_SOCIAL_INSURANCE, r"\b\d{2}\s?\d{6}\s?[A-Z]\s?\d{3}\b");

// ── Telefonnummer (Vorwahl + Rufnummer, optional Landesvorwahl) ────────────
fixed_pattern!(
    RE_PHONE,
    r"\b(?:\+\d{1,3}\s?)?(?:\(0\)\s?|\d{2,5}[\s/-])\d{2,5}[\s/-]?\d{2,8}\b"
);

// ── Postleitzahl mit Ortsname ──────────────────────────────────────────────
fixed_pattern!(
    RE_POSTAL_CITY,
    r"\b\d{4,5}\s+[A-ZÄÖÜ][a-zäöüß]+(?:\s+[a-zäöüß]+)?\b"
);

// ── Geburtsdatum, verankert an Geburts-Schlüsselwörtern ────────────────────
fixed_pattern!(
    RE_BIRTH_DATE,
    r"(?i)(?:geb(?:oren)?\.?\s*(?:am\s*)?|Geburtsdatum\s*:?\s*|geboren\s+am\s+|\*\s*)(\d{1,2}\.\d{1,2}\.\d{2,4})"
);

// ── Nacktes Datum (nur aggressiv) ──────────────────────────────────────────
fixed_pattern!(RE_BARE_DATE, r"\b\d{1,2}\.\d{1,2}\.\d{2,4}\b");

/// All detectors in application order. Order matters only insofar as no
/// two detectors may overlap in practice; each runs as a single
/// left-to-right pass.
pub fn all_patterns() -> Vec<FixedPattern> {
    vec![
        FixedPattern {
            name: "email",
            regex: &RE_EMAIL,
            tag: "[E-MAIL REDACTED]",
            min_sensitivity: Sensitivity::Conservative,
            capture_group: None,
        },
        FixedPattern {
            name: "iban",
            regex: &RE_IBAN,
            tag: "[IBAN REDACTED]",
            min_sensitivity: Sensitivity::Conservative,
            capture_group: None,
        },
        FixedPattern {
            name: "tax_number",
            regex: &RE_TAX_NUMBER,
            tag: "[STEUERNR REDACTED]",
            min_sensitivity: Sensitivity::Conservative,
            capture_group: None,
        },
        FixedPattern {
            name: "commercial_register",
            regex: &RE_COMMERCIAL_REGISTER,
            tag: "[HANDELSREG REDACTED]",
            min_sensitivity: Sensitivity::Conservative,
            capture_group: None,
        },
        FixedPattern {
            name: "street_address",
            regex: &RE_STREET_ADDRESS,
            tag: "[ADRESSE REDACTED]",
            min_sensitivity: Sensitivity::Conservative,
            capture_group: None,
        },
        FixedPattern {
            name: "social_insurance",
            regex: &RE_SOCIAL_INSURANCE,
            tag: "[SOZVERSNR REDACTED]",
            min_sensitivity: Sensitivity::Conservative,
            capture_group: None,
        },
        FixedPattern {
            name: "phone",
            regex: &RE_PHONE,
            tag: "[TEL REDACTED]",
            min_sensitivity: Sensitivity::Standard,
            capture_group: None,
        },
        FixedPattern {
            name: "postal_city",
            regex: &RE_POSTAL_CITY,
            tag: "[PLZ-ORT REDACTED]",
            min_sensitivity: Sensitivity::Standard,
            capture_group: None,
        },
        FixedPattern {
            name: "birth_date",
            regex: &RE_BIRTH_DATE,
            tag: "[GEBURTSDATUM REDACTED]",
            min_sensitivity: Sensitivity::Conservative,
            capture_group: Some(1),
        },
        FixedPattern {
            name: "bare_date",
            regex: &RE_BARE_DATE,
            tag: "[DATUM REDACTED]",
            min_sensitivity: Sensitivity::Aggressive,
            capture_group: None,
        },
    ]
}
