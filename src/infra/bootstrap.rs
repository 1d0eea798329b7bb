//! Upstream generator invocation
//!
//! Production [`ProjectBootstrapper`]: runs `mix nerves.new <name>` with
//! the target code set on the child process environment.

use std::path::PathBuf;
use std::process::Command;

use crate::config::defaults::{BOOTSTRAP_TASK, BOOTSTRAP_TOOL, TARGET_ENV_VAR};
use crate::core::bootstrap::ProjectBootstrapper;
use crate::error::BootstrapError;

/// Shells out to the Nerves generator
#[derive(Debug)]
pub struct MixBootstrapper {
    /// Directory the generator runs in; the project is created beneath it
    base_dir: PathBuf,
}

impl MixBootstrapper {
    pub fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }
}

impl ProjectBootstrapper for MixBootstrapper {
    fn bootstrap(&self, name: &str, target: &str) -> Result<(), BootstrapError> {
        // Fail with an install hint before spawning anything
        which::which(BOOTSTRAP_TOOL).map_err(|_| BootstrapError::ToolMissing {
            tool: BOOTSTRAP_TOOL.to_string(),
        })?;

        let command = format!("{BOOTSTRAP_TOOL} {BOOTSTRAP_TASK} {name}");
        tracing::info!(%command, %target, "running upstream generator");

        let status = Command::new(BOOTSTRAP_TOOL)
            .arg(BOOTSTRAP_TASK)
            .arg(name)
            .current_dir(&self.base_dir)
            // Target code is scoped to the child process; the fwforge
            // process environment is never mutated
            .env(TARGET_ENV_VAR, target)
            .status()
            .map_err(|e| BootstrapError::SpawnFailed {
                command: command.clone(),
                error: e.to_string(),
            })?;

        if !status.success() {
            return Err(BootstrapError::ExitStatus {
                command,
                code: status.code().unwrap_or(-1),
            });
        }
        Ok(())
    }
}
