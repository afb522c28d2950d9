use serde::{Deserialize, Serialize};

use crate::label::EntityLabel;

/// A candidate entity detection inside one immutable text segment.
///
/// `start`/`end` are **character** positions into exactly the string the
/// extractor was given, `end` exclusive. Spans are produced only by
/// extractors and are never mutated downstream, only filtered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub label: EntityLabel,
    /// Detection confidence in [0, 1].
    pub score: f64,
    /// Name of the backend that reported this span.
    pub source: String,
}

impl TextSpan {
    /// Span length in characters.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Raw backend output: a span carrying the backend's native tag vocabulary,
/// before any mapping onto [`EntityLabel`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaggedSpan {
    pub start: usize,
    pub end: usize,
    pub text: String,
    /// Native tag as emitted by the backend (e.g. "PER", "RS", "MISC").
    pub tag: String,
    pub score: f64,
}
