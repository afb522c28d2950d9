use crate::errors::RedaktResult;
use crate::span::TextSpan;

/// Entity extraction: raw text in, labeled candidate spans out.
///
/// Implementations wrap one or more statistical backends. The returned
/// offsets are character-indexed into exactly the string passed in. A
/// failing or unavailable backend must surface an error, never an empty
/// result, because a silent skip would produce an under-redacted document.
pub trait IEntityExtractor: Send + Sync {
    /// Extract candidate entity spans from `text`.
    fn extract(&self, text: &str) -> RedaktResult<Vec<TextSpan>>;

    /// Human-readable name of the active strategy, for logs and summaries.
    fn name(&self) -> &str;
}
