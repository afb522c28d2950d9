//! Fraction shielding: registry-share notation like `128/542` must survive
//! the pattern phase at every tier. Each fraction is swapped for a unique
//! internal marker before the detectors run and restored verbatim after,
//! so no detector can partially match inside it.

use std::sync::LazyLock;

use regex::Regex;

static RE_FRACTION: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b\d{1,6}/\d{1,6}\b").ok());

/// Replace every fraction with `__FRACTION_i__`, returning the shielded
/// text and the marker → original pairs in match order.
pub(crate) fn shield_fractions(text: &str) -> (String, Vec<(String, String)>) {
    let Some(re) = RE_FRACTION.as_ref() else {
        return (text.to_string(), Vec::new());
    };

    let mut shielded = String::with_capacity(text.len());
    let mut fractions = Vec::new();
    let mut cursor = 0;
    for (i, m) in re.find_iter(text).enumerate() {
        let marker = format!("__FRACTION_{i}__");
        shielded.push_str(&text[cursor..m.start()]);
        shielded.push_str(&marker);
        fractions.push((marker, m.as_str().to_string()));
        cursor = m.end();
    }
    shielded.push_str(&text[cursor..]);

    (shielded, fractions)
}

/// Swap every marker back for its original fraction.
pub(crate) fn restore_fractions(mut text: String, fractions: &[(String, String)]) -> String {
    for (marker, original) in fractions {
        text = text.replace(marker.as_str(), original);
    }
    text
}
