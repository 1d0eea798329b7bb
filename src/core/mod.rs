//! Core business logic module
//!
//! This module contains all business logic for fwforge. Filesystem and
//! process side effects belong in [`crate::infra`]; the interactive pieces
//! here only talk to the [`prompter::Prompter`] trait.
//!
//! # Submodules
//!
//! - [`registry`] - Static catalog of supported target devices
//! - [`resolve`] - Merging explicit flags and prompted answers into a Configuration
//! - [`templates`] - Artifact content composition
//! - [`scaffold`] - Artifact specs and merge-once helpers
//! - [`prompter`] - Interactive prompt capability trait
//! - [`bootstrap`] - Upstream project-generator contract

pub mod bootstrap;
pub mod prompter;
pub mod registry;
pub mod resolve;
pub mod scaffold;
pub mod templates;
