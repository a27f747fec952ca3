//! Platform-agnostic building blocks: the input model, loading, and formatting.

pub mod bundle;
pub mod error;
pub mod format;
pub mod party;
pub mod platform;
pub mod source;
