//! Artifact specs and merge-once helpers
//!
//! The generator always materializes the same fixed, ordered list of
//! artifacts; content varies with the configuration, membership does not.
//! The WiFi target.exs snippet is the one deliberate exception: it is
//! produced separately (see [`crate::core::templates::wifi_network_snippet`])
//! and appended without any guard.

use std::path::PathBuf;

use crate::config::defaults::GITIGNORE_MARKER;
use crate::core::registry::DeviceDescriptor;
use crate::core::resolve::Configuration;
use crate::core::templates;

/// Write discipline for one artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteMode {
    /// Truncate and write; used for every newly generated file
    Overwrite,
    /// Append only while `marker` is absent from the existing content;
    /// the single idempotent merge in the system
    AppendIfAbsent { marker: &'static str },
}

/// One artifact to materialize
#[derive(Debug, Clone)]
pub struct ArtifactSpec {
    /// Human-readable name for log lines and the --json summary
    pub name: &'static str,
    /// Path relative to the project directory
    pub rel_path: PathBuf,
    /// Composed content
    pub content: String,
    /// Write discipline
    pub mode: WriteMode,
}

impl ArtifactSpec {
    fn overwrite(name: &'static str, rel_path: &str, content: String) -> Self {
        Self {
            name,
            rel_path: PathBuf::from(rel_path),
            content,
            mode: WriteMode::Overwrite,
        }
    }
}

/// Compose the fixed, ordered artifact list for a run
pub fn compose_artifacts(
    project_name: &str,
    config: &Configuration,
    device: &DeviceDescriptor,
) -> Vec<ArtifactSpec> {
    vec![
        ArtifactSpec::overwrite(
            "container descriptor",
            ".devcontainer/devcontainer.json",
            templates::devcontainer_json(project_name, config),
        ),
        ArtifactSpec::overwrite(
            "compose descriptor",
            ".devcontainer/docker-compose.yml",
            templates::docker_compose_yml(project_name),
        ),
        ArtifactSpec::overwrite(
            "build descriptor",
            ".devcontainer/Dockerfile",
            templates::dockerfile(project_name),
        ),
        ArtifactSpec {
            name: "workspace descriptor",
            rel_path: PathBuf::from(format!("{project_name}.code-workspace")),
            content: templates::code_workspace(project_name),
            mode: WriteMode::Overwrite,
        },
        ArtifactSpec::overwrite(
            "getting-started guide",
            "GETTING_STARTED.md",
            templates::getting_started_guide(project_name, config, device),
        ),
        ArtifactSpec::overwrite(
            "secrets placeholder",
            ".secrets/.gitkeep",
            templates::secrets_placeholder(),
        ),
        ArtifactSpec {
            name: "ignore rules",
            rel_path: PathBuf::from(".gitignore"),
            content: templates::gitignore_block(),
            mode: WriteMode::AppendIfAbsent {
                marker: GITIGNORE_MARKER,
            },
        },
    ]
}

/// Merge `block` into existing content unless `marker` is already present.
/// Pure counterpart of [`crate::infra::filesystem::append_if_absent`].
pub fn merge_once(existing: &str, block: &str, marker: &str) -> String {
    if existing.contains(marker) {
        return existing.to_string();
    }

    let mut result = existing.to_string();
    if !result.is_empty() && !result.ends_with('\n') {
        result.push('\n');
    }
    if !result.is_empty() {
        result.push('\n');
    }
    result.push_str(block);
    result
}
