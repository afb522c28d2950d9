//! High-precision ensemble strategy: a legal-domain tagger and a
//! general-purpose tagger over the same text, merged by exact offset pair.

use std::collections::HashSet;

use tracing::debug;

use redakt_core::errors::{ExtractError, RedaktError, RedaktResult};
use redakt_core::traits::{IEntityExtractor, ISequenceTagger};
use redakt_core::{EntityLabel, TextSpan};

use crate::vocab;

/// Runs the legal tagger first, then the general tagger; a span reported
/// by both (identical offsets) is kept from whichever reported it first.
/// Partially overlapping but non-identical spans are kept as-is; the
/// engine's splice pass resolves them deterministically.
///
/// Either tagger may be absent (a backend that failed to load); extraction
/// with both absent is the engine-unavailable hard error.
pub struct EnsembleExtractor {
    legal: Option<Box<dyn ISequenceTagger>>,
    general: Option<Box<dyn ISequenceTagger>>,
}

impl EnsembleExtractor {
    pub fn new(
        legal: Option<Box<dyn ISequenceTagger>>,
        general: Option<Box<dyn ISequenceTagger>>,
    ) -> Self {
        Self { legal, general }
    }
}

impl IEntityExtractor for EnsembleExtractor {
    fn extract(&self, text: &str) -> RedaktResult<Vec<TextSpan>> {
        if self.legal.is_none() && self.general.is_none() {
            return Err(RedaktError::EngineUnavailable {
                engine: self.name().to_string(),
            });
        }

        let text_len = text.chars().count();
        let mut seen: HashSet<(usize, usize)> = HashSet::new();
        let mut spans = Vec::new();

        if let Some(tagger) = &self.legal {
            collect(
                tagger.as_ref(),
                vocab::map_legal_tag,
                text,
                text_len,
                &mut seen,
                &mut spans,
            )?;
        }
        if let Some(tagger) = &self.general {
            collect(
                tagger.as_ref(),
                vocab::map_standard_tag,
                text,
                text_len,
                &mut seen,
                &mut spans,
            )?;
        }

        debug!(count = spans.len(), "ensemble extraction complete");
        Ok(spans)
    }

    fn name(&self) -> &str {
        "ensemble"
    }
}

fn collect(
    tagger: &dyn ISequenceTagger,
    map_tag: fn(&str) -> Option<EntityLabel>,
    text: &str,
    text_len: usize,
    seen: &mut HashSet<(usize, usize)>,
    out: &mut Vec<TextSpan>,
) -> RedaktResult<()> {
    for tagged in tagger.tag(text)? {
        let Some(label) = map_tag(&tagged.tag) else {
            continue;
        };
        if tagged.start > tagged.end || tagged.end > text_len {
            return Err(ExtractError::SpanOutOfBounds {
                backend: tagger.name().to_string(),
                start: tagged.start,
                end: tagged.end,
                len: text_len,
            }
            .into());
        }
        if seen.insert((tagged.start, tagged.end)) {
            out.push(TextSpan {
                start: tagged.start,
                end: tagged.end,
                text: tagged.text,
                label,
                score: tagged.score,
                source: tagger.name().to_string(),
            });
        }
    }
    Ok(())
}
