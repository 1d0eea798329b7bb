//! Fwforge - Firmware project scaffolder
//!
//! This library provides the core functionality for scaffolding a Nerves
//! firmware project together with the dev-container, compose, and workspace
//! artifacts that make it buildable out of the box.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (configuration resolution, template composition)
//! - [`infra`] - Infrastructure layer (filesystem, prompts, external processes)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

#[cfg(test)]
pub mod test_utils;
