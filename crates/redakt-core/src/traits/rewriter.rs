use crate::errors::RedaktResult;

/// The external text-rewriting service used for secondary redaction.
///
/// Returns rewritten text in which sensitive spans are replaced by the
/// single fixed marker token [`REWRITE_MARKER`](crate::constants::REWRITE_MARKER),
/// with no offsets. Source positions must be recovered by alignment.
pub trait IRewriter: Send + Sync {
    /// Rewrite `text`, replacing sensitive spans with the marker token.
    fn rewrite(&self, text: &str) -> RedaktResult<String>;
}
