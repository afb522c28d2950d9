use crate::errors::RedaktResult;
use crate::span::TaggedSpan;

/// One opaque sequence-tagging backend. Model loading, tokenization, and
/// inference all live behind this boundary.
///
/// The call blocks until tagging completes; there are no partial results
/// and no cancellation mid-call.
pub trait ISequenceTagger: Send + Sync {
    /// Tag `text`, returning spans in the backend's native tag vocabulary
    /// with character-indexed offsets.
    fn tag(&self, text: &str) -> RedaktResult<Vec<TaggedSpan>>;

    /// Backend name, recorded as the `source` of every span it reports.
    fn name(&self) -> &str;
}
