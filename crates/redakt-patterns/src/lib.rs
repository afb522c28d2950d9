//! Fixed-format PII detectors for German legal documents.
//!
//! The pattern phase is the first of the three redaction phases: detectors
//! replace matches with fixed tags (irreversible, no placeholder registry
//! interaction). Fraction-like numeric sequences are shielded before any
//! detector runs so registry-share notation such as `128/542` survives
//! every tier untouched. The phase is pure and idempotent.

pub mod rules;
mod shield;

use redakt_core::Sensitivity;

/// Apply all detectors active at `sensitivity` to `text`, one
/// left-to-right pass per detector, in table order.
pub fn apply(text: &str, sensitivity: Sensitivity) -> String {
    let (shielded, fractions) = shield::shield_fractions(text);

    let mut out = shielded;
    for pat in rules::all_patterns() {
        if sensitivity < pat.min_sensitivity {
            continue;
        }
        let Some(re) = pat.regex.as_ref() else {
            // Failed compile degrades to "no matches"; pattern_health()
            // reports the gap.
            continue;
        };
        out = match pat.capture_group {
            None => re.replace_all(&out, pat.tag).into_owned(),
            // Keyword-anchored detectors keep the anchor and replace only
            // the captured range (e.g. "geboren am [GEBURTSDATUM REDACTED]").
            Some(group) => re
                .replace_all(&out, |caps: &regex::Captures| {
                    match (caps.get(0), caps.get(group)) {
                        (Some(whole), Some(inner)) => {
                            let s = whole.as_str();
                            let lead = &s[..inner.start() - whole.start()];
                            let trail = &s[inner.end() - whole.start()..];
                            format!("{lead}{}{trail}", pat.tag)
                        }
                        (Some(whole), None) => whole.as_str().to_string(),
                        _ => String::new(),
                    }
                })
                .into_owned(),
        };
    }

    shield::restore_fractions(out, &fractions)
}

/// Names of detectors whose regex failed to compile at init time.
/// Empty in a healthy build.
pub fn pattern_health() -> Vec<&'static str> {
    rules::all_patterns()
        .iter()
        .filter(|p| p.regex.is_none())
        .map(|p| p.name)
        .collect()
}
