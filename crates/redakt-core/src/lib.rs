//! # redakt-core
//!
//! Foundation crate for the redakt redaction engine.
//! Defines all shared types, capability traits, errors, and constants.
//! Every other crate in the workspace depends on this.

pub mod constants;
pub mod errors;
pub mod label;
pub mod sensitivity;
pub mod span;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use errors::{RedaktError, RedaktResult};
pub use label::EntityLabel;
pub use sensitivity::Sensitivity;
pub use span::{TaggedSpan, TextSpan};
