//! CLI implementation for `fwforge new`
//!
//! Runs the whole pipeline strictly in sequence: validate the project
//! name, resolve the configuration, run the upstream generator, then
//! materialize the artifact list. Any failure aborts immediately; files
//! already written stay on disk.

use std::path::Path;

use serde::Serialize;

use crate::cli::output::{print_detail, print_success, OutputConfig};
use crate::config::defaults::TARGET_CONFIG_FILE;
use crate::core::bootstrap::ProjectBootstrapper;
use crate::core::prompter::Prompter;
use crate::core::registry::DeviceRegistry;
use crate::core::resolve::{
    resolve_target, resolve_wifi, validate_project_name, Configuration,
};
use crate::core::scaffold::compose_artifacts;
use crate::core::templates::wifi_network_snippet;
use crate::error::FwforgeError;
use crate::infra::filesystem::{append_file, materialize};

/// Options for project creation
#[derive(Debug, Clone, Default)]
pub struct NewOptions {
    /// Explicit target device code
    pub target: Option<String>,
    /// Explicit WiFi network name
    pub wifi_ssid: Option<String>,
    /// Explicit WiFi passphrase
    pub wifi_psk: Option<String>,
}

/// Machine-readable run summary emitted with --json
#[derive(Debug, Serialize)]
pub struct RunSummary {
    /// Project name
    pub project: String,
    /// Resolved target code
    pub target: String,
    /// Whether WiFi was reported as configured
    pub wifi_configured: bool,
    /// Paths written or merged, relative to the project directory
    pub artifacts: Vec<String>,
}

/// Execute the new command
pub fn execute(
    base_dir: &Path,
    project_name: &str,
    options: &NewOptions,
    prompter: &mut dyn Prompter,
    bootstrapper: &dyn ProjectBootstrapper,
) -> Result<(), FwforgeError> {
    // Name and directory checks run before any prompt or side effect
    validate_project_name(project_name, base_dir)?;

    let registry = DeviceRegistry::global();
    let target = resolve_target(options.target.as_deref(), registry, prompter)?;
    let (wifi_ssid, wifi_psk) = resolve_wifi(
        options.wifi_ssid.as_deref(),
        options.wifi_psk.as_deref(),
        prompter,
    )?;

    let config = Configuration {
        target,
        wifi_ssid,
        wifi_psk,
    };

    // Block until the upstream generator has created the base project
    bootstrapper.bootstrap(project_name, &config.target)?;

    let project_dir = base_dir.join(project_name);
    let device = registry
        .lookup(&config.target)
        .expect("resolved target is always a registry code");

    let artifacts = compose_artifacts(project_name, &config, device);
    let mut written: Vec<String> = Vec::with_capacity(artifacts.len() + 1);
    for artifact in &artifacts {
        tracing::info!(artifact = artifact.name, "materializing");
        materialize(&project_dir, artifact)?;
        written.push(artifact.rel_path.display().to_string());
    }

    // The network-configuration block goes into the generator-owned config
    // file; plain append, no marker (the one supported call path runs once)
    if let Some(snippet) = wifi_network_snippet(&config) {
        let target_config = project_dir.join(TARGET_CONFIG_FILE);
        append_file(&target_config, &snippet)?;
        written.push(TARGET_CONFIG_FILE.to_string());
    }

    report(project_name, &config, &written)?;
    Ok(())
}

fn report(
    project_name: &str,
    config: &Configuration,
    written: &[String],
) -> Result<(), FwforgeError> {
    let wifi_configured = !config.wifi_ssid.is_empty() || !config.wifi_psk.is_empty();

    if OutputConfig::global().json {
        let summary = RunSummary {
            project: project_name.to_string(),
            target: config.target.clone(),
            wifi_configured,
            artifacts: written.to_vec(),
        };
        let rendered = serde_json::to_string_pretty(&summary)
            .map_err(|e| FwforgeError::Generic(e.to_string()))?;
        println!("{rendered}");
        return Ok(());
    }

    print_success(&format!("Created firmware project {project_name}"));
    print_detail(&format!("Target: {}", config.target));
    if wifi_configured {
        print_detail("WiFi: configured");
    } else {
        print_detail("WiFi: not configured (see GETTING_STARTED.md)");
    }
    for path in written {
        print_detail(&format!("Wrote {path}"));
    }
    Ok(())
}
