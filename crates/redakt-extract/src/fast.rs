//! Fast single-model strategy. The backing tagger may not report usable
//! confidence scores, so scores are synthesized from span shape.

use redakt_core::errors::{ExtractError, RedaktResult};
use redakt_core::traits::{IEntityExtractor, ISequenceTagger};
use redakt_core::{EntityLabel, TextSpan};

use crate::vocab;

pub struct FastExtractor {
    tagger: Box<dyn ISequenceTagger>,
}

impl FastExtractor {
    pub fn new(tagger: Box<dyn ISequenceTagger>) -> Self {
        Self { tagger }
    }
}

impl IEntityExtractor for FastExtractor {
    fn extract(&self, text: &str) -> RedaktResult<Vec<TextSpan>> {
        let text_len = text.chars().count();
        let mut spans = Vec::new();
        for tagged in self.tagger.tag(text)? {
            let Some(label) = vocab::map_standard_tag(&tagged.tag) else {
                continue;
            };
            if tagged.start > tagged.end || tagged.end > text_len {
                return Err(ExtractError::SpanOutOfBounds {
                    backend: self.tagger.name().to_string(),
                    start: tagged.start,
                    end: tagged.end,
                    len: text_len,
                }
                .into());
            }
            let score = synthesize_score(&tagged.text, label);
            spans.push(TextSpan {
                start: tagged.start,
                end: tagged.end,
                text: tagged.text,
                label,
                score,
                source: self.tagger.name().to_string(),
            });
        }
        Ok(spans)
    }

    fn name(&self) -> &str {
        "fast"
    }
}

/// Shape-based confidence: base 0.85, +0.05 for multi-token spans,
/// +0.05 for person spans in title case, −0.30 for very short spans.
fn synthesize_score(text: &str, label: EntityLabel) -> f64 {
    let mut score = 0.85;

    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.len() >= 2 {
        score += 0.05;
    }
    if label == EntityLabel::Per
        && tokens
            .iter()
            .all(|w| w.chars().next().is_some_and(char::is_uppercase))
    {
        score += 0.05;
    }
    if text.trim().chars().count() <= 2 {
        score -= 0.30;
    }

    score
}
