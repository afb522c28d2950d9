//! Policy filters applied to candidate entity spans: static whitelists,
//! score-independent false-positive heuristics, and the per-tier
//! confidence gate. All of them are pure rejection predicates; the
//! precedence between them lives in the redaction engine.

pub mod confidence;
pub mod heuristics;
pub mod whitelist;

pub use confidence::accept;
pub use heuristics::should_skip;
pub use whitelist::is_whitelisted;
