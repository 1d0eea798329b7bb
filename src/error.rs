//! Error types for fwforge
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Project scaffolding errors (invalid input, pre-flight failures)
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// Project name does not match the required pattern
    #[error(
        "Invalid project name '{name}': must start with a lowercase letter and \
         contain only lowercase letters, digits, and underscores"
    )]
    InvalidProjectName { name: String },

    /// Target directory already exists
    #[error("Directory '{path}' already exists. Choose a different project name or remove it")]
    DirectoryExists { path: PathBuf },
}

/// Interactive prompt errors
#[derive(Error, Debug)]
pub enum PromptError {
    /// Terminal interaction failed or was aborted
    #[error("Prompt '{label}' failed: {error}")]
    Interaction { label: String, error: String },

    /// Scripted prompter ran out of answers (test doubles only)
    #[error("No scripted answer left for prompt '{label}'")]
    Exhausted { label: String },
}

/// External project-bootstrap errors
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Upstream generator binary is not installed
    #[error(
        "'{tool}' not found on PATH. Install Elixir and the Nerves bootstrap archive:\n  \
         mix archive.install hex nerves_bootstrap"
    )]
    ToolMissing { tool: String },

    /// Upstream generator exited with a non-zero status
    #[error("'{command}' failed with exit code {code}")]
    ExitStatus { command: String, code: i32 },

    /// Failed to spawn the upstream generator
    #[error("Failed to run '{command}': {error}")]
    SpawnFailed { command: String, error: String },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to append to file
    #[error("Failed to append to file '{path}': {error}")]
    AppendFile { path: PathBuf, error: String },
}

/// Top-level fwforge error type
#[derive(Error, Debug)]
pub enum FwforgeError {
    /// Scaffold error
    #[error("Scaffold error: {0}")]
    Scaffold(#[from] ScaffoldError),

    /// Prompt error
    #[error("Prompt error: {0}")]
    Prompt(#[from] PromptError),

    /// Bootstrap error
    #[error("Bootstrap error: {0}")]
    Bootstrap(#[from] BootstrapError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Generic error
    #[error("{0}")]
    Generic(String),
}
