//! Per-tier confidence gate for statistical detections.

use redakt_core::{Sensitivity, TextSpan};

/// Whether `span` clears the tier's score threshold.
///
/// Rejections here are the only ones a user can reverse, by adding the
/// exact text to the always-redact list; the engine records the score
/// alongside the rejection for that review.
pub fn accept(span: &TextSpan, sensitivity: Sensitivity) -> bool {
    span.score >= sensitivity.threshold()
}
