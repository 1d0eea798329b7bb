//! Infrastructure layer
//!
//! Filesystem writes, terminal prompts, and external processes live here;
//! [`crate::core`] stays free of side effects.

pub mod bootstrap;
pub mod filesystem;
pub mod prompt;
