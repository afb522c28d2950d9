//! Error families for the redakt workspace.
//!
//! Each subsystem has its own thiserror enum; `RedaktError` aggregates them
//! with `#[from]` conversions so `?` works across crate seams.

mod extract_error;
mod store_error;

pub use extract_error::ExtractError;
pub use store_error::StoreError;

/// Top-level error for all redakt operations.
#[derive(Debug, thiserror::Error)]
pub enum RedaktError {
    /// No entity-detection backend is available. Surfaced instead of a
    /// silent skip: a document redacted without entity detection would be
    /// under-redacted and unsafe to release.
    #[error("entity engine unavailable: {engine}")]
    EngineUnavailable { engine: String },

    #[error(transparent)]
    Extract(#[from] ExtractError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// Failure reported by a document adapter (corrupt input, segment
    /// replacement rejected, ...).
    #[error("document adapter error: {reason}")]
    Adapter { reason: String },

    /// Failure reported by the external rewriting service.
    #[error("rewriting service failed: {reason}")]
    Rewrite { reason: String },
}

/// Convenience alias used across the workspace.
pub type RedaktResult<T> = Result<T, RedaktError>;
