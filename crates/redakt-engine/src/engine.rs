//! The redaction pipeline: pattern phase → entity phase → learned-always
//! phase, as a small state machine over one immutable text segment.

use std::sync::Arc;

use tracing::debug;

use redakt_core::errors::RedaktResult;
use redakt_core::traits::IEntityExtractor;
use redakt_core::{EntityLabel, Sensitivity};
use redakt_learned::LearnedStore;
use redakt_policy::{confidence, heuristics, whitelist};

use crate::decisions::DecisionLog;
use crate::registry::PlaceholderRegistry;

/// An accepted span waiting for application: character offsets into the
/// pattern-phase output plus the resolved placeholder.
struct AcceptedSpan {
    start: usize,
    end: usize,
    placeholder: String,
}

/// Orchestrates the three redaction phases over one text segment at a
/// time. Holds only the extractor handle and the sensitivity tier; all
/// per-batch state (registry, decision log) is borrowed from the caller.
pub struct RedactionEngine {
    extractor: Arc<dyn IEntityExtractor>,
    sensitivity: Sensitivity,
}

impl RedactionEngine {
    pub fn new(extractor: Arc<dyn IEntityExtractor>, sensitivity: Sensitivity) -> Self {
        Self {
            extractor,
            sensitivity,
        }
    }

    pub fn sensitivity(&self) -> Sensitivity {
        self.sensitivity
    }

    /// Name of the active extraction strategy, for logs and summaries.
    pub fn extractor_name(&self) -> &str {
        self.extractor.name()
    }

    /// Redact one segment through all three phases. Extractor failure is
    /// fatal for the segment, never a silent skip, since a segment
    /// without entity detection would be under-redacted.
    pub fn redact_segment(
        &self,
        text: &str,
        registry: &mut PlaceholderRegistry,
        store: &LearnedStore,
        log: &mut DecisionLog,
    ) -> RedaktResult<String> {
        if text.trim().is_empty() {
            return Ok(text.to_string());
        }

        // Phase 1: fixed-format detectors. Irreversible tags, no registry
        // interaction.
        let patterned = redakt_patterns::apply(text, self.sensitivity);

        // Phase 2: statistical detections against the pattern-phase
        // output, filtered through the policy chain.
        let entity_redacted = self.redact_entities(&patterned, registry, store, log)?;

        // Phase 3: learned always-redact terms, unconditional.
        Ok(self.apply_always_redact(entity_redacted, registry, store))
    }

    fn redact_entities(
        &self,
        text: &str,
        registry: &mut PlaceholderRegistry,
        store: &LearnedStore,
        log: &mut DecisionLog,
    ) -> RedaktResult<String> {
        let spans = self.extractor.extract(text)?;
        debug!(
            extractor = self.extractor.name(),
            candidates = spans.len(),
            "entity candidates extracted"
        );

        let mut accepted = Vec::new();
        for span in spans {
            // Precedence order is load-bearing: user corrections beat the
            // whitelist, which beats the domain exception, which beats the
            // confidence gate, which beats the heuristics.
            if store.is_never_redact(&span.text) {
                log.record_whitelisted(&span.text, span.label);
                continue;
            }
            if whitelist::is_whitelisted(&span.text, span.label) {
                log.record_whitelisted(&span.text, span.label);
                continue;
            }
            if span.label == EntityLabel::Org && self.sensitivity.suppress_org() {
                log.record_domain_exception(&span.text, span.label);
                continue;
            }
            if !confidence::accept(&span, self.sensitivity) {
                log.record_low_confidence(&span.text, span.label, span.score);
                continue;
            }
            if heuristics::should_skip(&span.text, span.label) {
                log.record_heuristic(&span.text, span.label);
                continue;
            }
            if let Some(placeholder) = registry.resolve(&span.text, span.label) {
                accepted.push(AcceptedSpan {
                    start: span.start,
                    end: span.end,
                    placeholder,
                });
            }
        }

        Ok(splice(text, accepted))
    }

    fn apply_always_redact(
        &self,
        mut text: String,
        registry: &mut PlaceholderRegistry,
        store: &LearnedStore,
    ) -> String {
        for (label, terms) in store.always_redact() {
            for term in terms {
                // Never-redact wins over always-redact.
                if store.is_never_redact(term) {
                    continue;
                }
                if !text.contains(term.as_str()) {
                    continue;
                }
                if let Some(placeholder) = registry.resolve(term, *label) {
                    // Direct substring substitution, case-sensitive, every
                    // occurrence. This catches terms inside segments the
                    // detectors left untouched.
                    text = text.replace(term.as_str(), &placeholder);
                }
            }
        }
        text
    }
}

/// Apply accepted spans to the text. Spans are sorted by descending start
/// offset; this ordering is load-bearing: it guarantees no replacement
/// invalidates the offsets of spans still pending. The output is built in
/// a single copy pass with a cursor over the (ascending) span sequence;
/// a span starting inside an already-consumed region is skipped, so
/// overlapping candidates resolve to the leftmost one.
fn splice(text: &str, mut accepted: Vec<AcceptedSpan>) -> String {
    if accepted.is_empty() {
        return text.to_string();
    }
    accepted.sort_by(|a, b| b.start.cmp(&a.start));

    // Char offset → byte offset, computed once per segment.
    let byte_at: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();
    let char_len = byte_at.len() - 1;

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;
    for span in accepted.iter().rev() {
        if span.start < cursor || span.start > span.end || span.end > char_len {
            continue;
        }
        out.push_str(&text[byte_at[cursor]..byte_at[span.start]]);
        out.push_str(&span.placeholder);
        cursor = span.end;
    }
    out.push_str(&text[byte_at[cursor]..]);
    out
}
