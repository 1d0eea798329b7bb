//! Device registry
//!
//! Static, read-only catalog of supported target devices, parsed once from
//! the embedded `devices.toml`. Entry order is significant: it is the order
//! devices are shown in selection menus.

use std::sync::OnceLock;

use serde::Deserialize;

use crate::config::defaults::DEVICES_TOML;

/// A supported target device
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeviceDescriptor {
    /// Target code handed to the upstream generator (e.g. "rpi4")
    pub code: String,

    /// Name shown in selection menus
    pub display_name: String,

    /// Short description shown next to the name
    pub description: String,

    /// Power requirements for the getting-started guide; devices without a
    /// curated entry get generic instructions instead
    #[serde(default)]
    pub power_spec: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DeviceTable {
    device: Vec<DeviceDescriptor>,
}

/// Read-only registry of supported targets
#[derive(Debug)]
pub struct DeviceRegistry {
    devices: Vec<DeviceDescriptor>,
}

impl DeviceRegistry {
    /// Parse a registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let table: DeviceTable = toml::from_str(content)?;
        Ok(Self {
            devices: table.device,
        })
    }

    /// The process-wide registry backed by the embedded device table.
    ///
    /// The table ships with the binary, so a parse failure is a programmer
    /// error, not a user-facing one.
    pub fn global() -> &'static Self {
        static REGISTRY: OnceLock<DeviceRegistry> = OnceLock::new();
        REGISTRY.get_or_init(|| {
            Self::from_toml(DEVICES_TOML).expect("embedded devices.toml is invalid")
        })
    }

    /// All devices, in menu order
    pub fn list(&self) -> &[DeviceDescriptor] {
        &self.devices
    }

    /// Look up a device by target code
    pub fn lookup(&self, code: &str) -> Option<&DeviceDescriptor> {
        self.devices.iter().find(|d| d.code == code)
    }
}
