//! Decision log: why candidate spans were *not* redacted. Feeds the user
//! review surface, from which corrections flow back into the learned
//! store.

use redakt_core::EntityLabel;

/// One rejected candidate. `score` is retained only for low-confidence
/// rejections, the single rejection class a user can reverse.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntity {
    pub text: String,
    pub label: EntityLabel,
    pub score: Option<f64>,
}

/// Append-only rejection lists for one batch session.
#[derive(Debug, Default)]
pub struct DecisionLog {
    whitelisted: Vec<SkippedEntity>,
    domain_exception: Vec<SkippedEntity>,
    low_confidence: Vec<SkippedEntity>,
    heuristic: Vec<SkippedEntity>,
}

impl DecisionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_whitelisted(&mut self, text: &str, label: EntityLabel) {
        self.whitelisted.push(SkippedEntity {
            text: text.to_string(),
            label,
            score: None,
        });
    }

    pub(crate) fn record_domain_exception(&mut self, text: &str, label: EntityLabel) {
        self.domain_exception.push(SkippedEntity {
            text: text.to_string(),
            label,
            score: None,
        });
    }

    pub(crate) fn record_low_confidence(&mut self, text: &str, label: EntityLabel, score: f64) {
        self.low_confidence.push(SkippedEntity {
            text: text.to_string(),
            label,
            score: Some(score),
        });
    }

    pub(crate) fn record_heuristic(&mut self, text: &str, label: EntityLabel) {
        self.heuristic.push(SkippedEntity {
            text: text.to_string(),
            label,
            score: None,
        });
    }

    /// Spans skipped because of the whitelist or the never-redact list.
    pub fn whitelisted(&self) -> &[SkippedEntity] {
        &self.whitelisted
    }

    /// ORG spans skipped under the conservative tier.
    pub fn domain_exception(&self) -> &[SkippedEntity] {
        &self.domain_exception
    }

    /// Spans below the tier threshold, with their scores.
    pub fn low_confidence(&self) -> &[SkippedEntity] {
        &self.low_confidence
    }

    /// Heuristic rejections. Kept for audit only; these rejections are
    /// silent toward the user and never appear in the review summary.
    pub fn heuristic_audit(&self) -> &[SkippedEntity] {
        &self.heuristic
    }

    pub fn is_empty(&self) -> bool {
        self.whitelisted.is_empty()
            && self.domain_exception.is_empty()
            && self.low_confidence.is_empty()
            && self.heuristic.is_empty()
    }

    /// Deduplicated `(text, label)` view of a rejection list, sorted for
    /// stable display in the end-of-batch summary.
    pub fn unique(entries: &[SkippedEntity]) -> Vec<(String, EntityLabel)> {
        let mut pairs: Vec<(String, EntityLabel)> = entries
            .iter()
            .map(|e| (e.text.clone(), e.label))
            .collect();
        pairs.sort();
        pairs.dedup();
        pairs
    }
}
