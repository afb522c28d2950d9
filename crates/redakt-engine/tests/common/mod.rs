//! Shared extractor mocks for the engine integration tests.

#![allow(dead_code)]

use redakt_core::errors::ExtractError;
use redakt_core::traits::IEntityExtractor;
use redakt_core::{EntityLabel, RedaktResult, TextSpan};

/// Locates configured entity texts in whatever segment it is given and
/// reports every occurrence with character offsets, like a backend would.
pub struct FindingExtractor {
    entities: Vec<(String, EntityLabel, f64)>,
}

impl FindingExtractor {
    pub fn new(entities: &[(&str, EntityLabel, f64)]) -> Self {
        Self {
            entities: entities
                .iter()
                .map(|(t, l, s)| (t.to_string(), *l, *s))
                .collect(),
        }
    }
}

impl IEntityExtractor for FindingExtractor {
    fn extract(&self, text: &str) -> RedaktResult<Vec<TextSpan>> {
        let chars: Vec<char> = text.chars().collect();
        let mut spans = Vec::new();
        for (needle, label, score) in &self.entities {
            let needle_chars: Vec<char> = needle.chars().collect();
            if needle_chars.is_empty() {
                continue;
            }
            let mut i = 0;
            while i + needle_chars.len() <= chars.len() {
                if chars[i..i + needle_chars.len()] == needle_chars[..] {
                    spans.push(TextSpan {
                        start: i,
                        end: i + needle_chars.len(),
                        text: needle.clone(),
                        label: *label,
                        score: *score,
                        source: "mock".into(),
                    });
                    i += needle_chars.len();
                } else {
                    i += 1;
                }
            }
        }
        Ok(spans)
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Returns a fixed span list regardless of input, for overlap scenarios.
pub struct ScriptedExtractor {
    pub spans: Vec<TextSpan>,
}

impl IEntityExtractor for ScriptedExtractor {
    fn extract(&self, _text: &str) -> RedaktResult<Vec<TextSpan>> {
        Ok(self.spans.clone())
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

/// Fails whenever the segment contains the trigger needle; otherwise
/// reports nothing.
pub struct TriggerFailExtractor {
    pub needle: &'static str,
}

impl IEntityExtractor for TriggerFailExtractor {
    fn extract(&self, text: &str) -> RedaktResult<Vec<TextSpan>> {
        if text.contains(self.needle) {
            return Err(ExtractError::BackendFailed {
                backend: "trigger".into(),
                reason: "backend crashed".into(),
            }
            .into());
        }
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "trigger"
    }
}

pub fn span(
    start: usize,
    end: usize,
    text: &str,
    label: EntityLabel,
    score: f64,
) -> TextSpan {
    TextSpan {
        start,
        end,
        text: text.to_string(),
        label,
        score,
        source: "scripted".into(),
    }
}
