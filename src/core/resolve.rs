//! Configuration resolution
//!
//! Merges explicit CLI flags with interactively-prompted answers into one
//! canonical [`Configuration`]. The tie-break rules here are easy to
//! miswrite and are pinned down by the tests at the bottom of this file.

use std::path::Path;

use regex::Regex;

use crate::cli::output::{print_detail, print_warning};
use crate::config::defaults::PROJECT_NAME_PATTERN;
use crate::core::prompter::Prompter;
use crate::core::registry::DeviceRegistry;
use crate::error::{PromptError, ScaffoldError};

/// Resolved, validated run configuration. Built once per run and immutable
/// afterward. Empty `wifi_ssid`/`wifi_psk` mean "unset".
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    /// Target device code; always one of the registry codes
    pub target: String,
    /// WiFi network name, empty if not configured
    pub wifi_ssid: String,
    /// WiFi passphrase, empty if not configured
    pub wifi_psk: String,
}

impl Configuration {
    /// Whether both WiFi values are present. This is the condition for
    /// embedding credentials into generated artifacts; the guide uses the
    /// weaker ssid-only condition instead (see [`crate::core::templates`]).
    pub fn wifi_complete(&self) -> bool {
        !self.wifi_ssid.is_empty() && !self.wifi_psk.is_empty()
    }
}

/// Resolve the target device code.
///
/// An explicit code that is in the registry is used directly. An explicit
/// code that is not in the registry downgrades to interactive selection
/// with a warning rather than terminating. No explicit code goes straight
/// to interactive selection.
pub fn resolve_target(
    explicit: Option<&str>,
    registry: &DeviceRegistry,
    prompter: &mut dyn Prompter,
) -> Result<String, PromptError> {
    if let Some(code) = explicit {
        if let Some(device) = registry.lookup(code) {
            print_detail(&format!("Target: {} ({})", device.display_name, device.code));
            return Ok(device.code.clone());
        }
        print_warning(&format!(
            "Unknown target '{code}', choose one from the list"
        ));
    }
    select_target(registry, prompter)
}

fn select_target(
    registry: &DeviceRegistry,
    prompter: &mut dyn Prompter,
) -> Result<String, PromptError> {
    let items: Vec<String> = registry
        .list()
        .iter()
        .map(|d| format!("{} - {}", d.display_name, d.description))
        .collect();
    let index = prompter.select_one("Which device are you targeting?", &items)?;
    // The prompter only offers registry entries, so the index is always valid
    Ok(registry.list()[index].code.clone())
}

/// Resolve the WiFi credentials.
///
/// Only when *both* flags are absent does the interactive flow run. If
/// either flag is present, WiFi is reported as configured and the missing
/// half stays empty without a prompt or a warning. Supplying only an SSID
/// therefore silently yields an empty passphrase; this asymmetry is a known
/// quirk and is kept on purpose.
pub fn resolve_wifi(
    explicit_ssid: Option<&str>,
    explicit_psk: Option<&str>,
    prompter: &mut dyn Prompter,
) -> Result<(String, String), PromptError> {
    if explicit_ssid.is_none() && explicit_psk.is_none() {
        if prompter.confirm("Configure WiFi now?")? {
            let ssid = prompter.text_input("WiFi network name (SSID)")?;
            let psk = prompter.secret_input("WiFi passphrase")?;
            return Ok((ssid, psk));
        }
        return Ok((String::new(), String::new()));
    }

    print_detail("WiFi: configured from command line");
    Ok((
        explicit_ssid.unwrap_or_default().to_string(),
        explicit_psk.unwrap_or_default().to_string(),
    ))
}

/// Validate the project name before anything touches the filesystem.
///
/// The name must match `^[a-z][a-z0-9_]*$` and `base_dir/<name>` must not
/// exist yet. Both checks run before any artifact is created.
pub fn validate_project_name(name: &str, base_dir: &Path) -> Result<(), ScaffoldError> {
    let pattern = Regex::new(PROJECT_NAME_PATTERN).expect("project name pattern is valid");
    if !pattern.is_match(name) {
        return Err(ScaffoldError::InvalidProjectName {
            name: name.to_string(),
        });
    }

    let target_dir = base_dir.join(name);
    if target_dir.exists() {
        return Err(ScaffoldError::DirectoryExists { path: target_dir });
    }

    Ok(())
}
