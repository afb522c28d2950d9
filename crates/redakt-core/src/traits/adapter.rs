use serde::{Deserialize, Serialize};

use crate::errors::RedaktResult;

/// One offset-based replacement inside a text segment. Offsets are
/// character positions; lists of substitutions are applied back-to-front
/// so earlier replacements never invalidate pending offsets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
}

/// A document container (structured text, email, page-image, ...) reduced
/// to what the redaction core needs: an ordered sequence of plain-text
/// segments (paragraphs, cells, headers, pages) and a way to write
/// redacted content back.
pub trait IDocumentAdapter {
    /// Display name of the document, used in reports and logs.
    fn name(&self) -> &str;

    /// The document's text segments, in document order.
    fn segments(&self) -> RedaktResult<Vec<String>>;

    /// Replace segment `index` wholesale with `replacement`.
    fn replace_segment(&mut self, index: usize, replacement: &str) -> RedaktResult<()>;

    /// Apply offset-based substitutions to segment `index`. The default
    /// forwards to [`replace_segment`](Self::replace_segment) after
    /// splicing; adapters with native region redaction (e.g. visual
    /// blackout) override this.
    fn apply_substitutions(&mut self, index: usize, subs: &[Substitution]) -> RedaktResult<()> {
        let segment = self.segments()?.into_iter().nth(index).ok_or_else(|| {
            crate::errors::RedaktError::Adapter {
                reason: format!("segment index {index} out of range"),
            }
        })?;
        let mut ordered: Vec<&Substitution> = subs.iter().collect();
        ordered.sort_by(|a, b| b.start.cmp(&a.start));

        let mut out: Vec<char> = segment.chars().collect();
        for sub in ordered {
            if sub.end <= out.len() && sub.start <= sub.end {
                out.splice(sub.start..sub.end, sub.replacement.chars());
            }
        }
        let replaced: String = out.into_iter().collect();
        self.replace_segment(index, &replaced)
    }
}
