//! The redaction engine: turns raw text segments plus candidate entity
//! detections into final redacted text with consistent, auditable
//! substitutions.
//!
//! Three sequential phases per segment: pattern phase (fixed tags),
//! entity phase (policy precedence chain + placeholder registry), and the
//! learned always-redact pass. One [`PlaceholderRegistry`] instance is
//! shared across an entire batch so the same entity resolves to the same
//! placeholder in every file.

pub mod batch;
pub mod decisions;
pub mod engine;
pub mod registry;
pub mod rewrite;

pub use batch::{BatchReport, FileFailure, RedactionBatch};
pub use decisions::{DecisionLog, SkippedEntity};
pub use engine::RedactionEngine;
pub use registry::PlaceholderRegistry;
pub use rewrite::{align_marker_spans, rewrite_segment, MarkedSpan};
