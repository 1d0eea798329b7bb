//! Artifact content composition
//!
//! Pure functions turning a [`Configuration`] (plus registry lookups) into
//! the literal text of each generated artifact. Nothing here touches the
//! filesystem.
//!
//! Two WiFi conditions exist side by side and must not be conflated: the
//! container descriptor and the target.exs snippet require *both* ssid and
//! psk, while the guide's WiFi section looks at the ssid alone. A
//! Configuration with only an ssid therefore reads as "already configured"
//! in the guide while the descriptor carries no credentials.

use crate::config::defaults::{SECRETS_DIR, TARGET_CONFIG_FILE};
use crate::core::registry::DeviceDescriptor;
use crate::core::resolve::Configuration;

/// Escape a user-supplied string for embedding between double quotes in a
/// structured-text artifact (JSON descriptor, Elixir config). Backslashes
/// are doubled first, then double quotes escaped; nothing else is touched.
/// Every templated field embedding ssid/psk text goes through this one
/// function.
pub fn escape_embedded(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Container descriptor (`.devcontainer/devcontainer.json`).
///
/// `containerEnv` always carries `TARGET`; `WIFI_SSID`/`WIFI_PSK` appear
/// only when both values are non-empty.
pub fn devcontainer_json(project_name: &str, config: &Configuration) -> String {
    let wifi_env = if config.wifi_complete() {
        format!(
            ",\n    \"WIFI_SSID\": \"{}\",\n    \"WIFI_PSK\": \"{}\"",
            escape_embedded(&config.wifi_ssid),
            escape_embedded(&config.wifi_psk)
        )
    } else {
        String::new()
    };

    format!(
        r#"{{
  "name": "{name}",
  "dockerComposeFile": "docker-compose.yml",
  "service": "dev",
  "workspaceFolder": "/workspace/{name}",
  "mounts": [
    "source=${{localWorkspaceFolder}}/{secrets},target=/workspace/{name}/{secrets},type=bind"
  ],
  "containerEnv": {{
    "TARGET": "{target}"{wifi_env}
  }},
  "postCreateCommand": "mix deps.get"
}}
"#,
        name = project_name,
        secrets = SECRETS_DIR,
        target = escape_embedded(&config.target),
        wifi_env = wifi_env,
    )
}

/// Compose descriptor (`.devcontainer/docker-compose.yml`)
pub fn docker_compose_yml(project_name: &str) -> String {
    format!(
        r#"services:
  dev:
    build:
      context: .
      dockerfile: Dockerfile
    volumes:
      - ..:/workspace/{project_name}:cached
    working_dir: /workspace/{project_name}
    command: sleep infinity
    # fwup needs direct access to SD card readers for `mix burn`
    privileged: true
"#
    )
}

/// Build-environment descriptor (`.devcontainer/Dockerfile`)
pub fn dockerfile(project_name: &str) -> String {
    format!(
        r#"FROM hexpm/elixir:1.17.3-erlang-27.2-ubuntu-noble-20241015

# Firmware build dependencies
RUN apt-get update && apt-get install -y --no-install-recommends \
    build-essential automake autoconf git curl \
    squashfs-tools ssh-askpass pkg-config libmnl-dev && \
    rm -rf /var/lib/apt/lists/*

RUN curl -fsSL -o /tmp/fwup.deb \
    https://github.com/fwup-home/fwup/releases/download/v1.12.0/fwup_1.12.0_amd64.deb && \
    dpkg -i /tmp/fwup.deb && rm /tmp/fwup.deb

RUN mix local.hex --force && \
    mix local.rebar --force && \
    mix archive.install hex nerves_bootstrap --force

WORKDIR /workspace/{project_name}
"#
    )
}

/// Workspace descriptor (`<name>.code-workspace`)
pub fn code_workspace(project_name: &str) -> String {
    format!(
        r#"{{
  "folders": [
    {{
      "name": "{project_name}",
      "path": "."
    }}
  ],
  "settings": {{
    "files.watcherExclude": {{
      "**/_build/**": true,
      "**/deps/**": true
    }}
  }}
}}
"#
    )
}

/// Placeholder keeping the otherwise-empty secrets mount directory in git
pub fn secrets_placeholder() -> String {
    String::new()
}

/// The `.gitignore` block merged once per project, guarded by
/// [`crate::config::defaults::GITIGNORE_MARKER`]
pub fn gitignore_block() -> String {
    format!("# firmware secrets\n{SECRETS_DIR}/\n*.fw\n")
}

/// WiFi block appended to `config/target.exs`.
///
/// Produced only when both ssid and psk are present; otherwise the append
/// step is a no-op. The append itself is deliberately unguarded (see
/// [`crate::infra::filesystem::append_file`]).
pub fn wifi_network_snippet(config: &Configuration) -> Option<String> {
    if !config.wifi_complete() {
        return None;
    }

    Some(format!(
        r#"
# WiFi configuration for "{ssid}"
config :vintage_net,
  config: [
    {{"usb0", %{{type: VintageNetDirect}}}},
    {{"wlan0",
     %{{
       type: VintageNetWiFi,
       vintage_net_wifi: %{{
         networks: [
           %{{
             key_mgmt: :wpa_psk,
             ssid: "{ssid}",
             psk: "{psk}"
           }}
         ]
       }},
       ipv4: %{{method: :dhcp}}
     }}}}
  ]
"#,
        ssid = escape_embedded(&config.wifi_ssid),
        psk = escape_embedded(&config.wifi_psk),
    ))
}

/// Getting-started guide (`GETTING_STARTED.md`)
pub fn getting_started_guide(
    project_name: &str,
    config: &Configuration,
    device: &DeviceDescriptor,
) -> String {
    format!(
        r#"# Getting started with {project_name}

{device_section}
## Building firmware

Open this folder in your editor and reopen it in the dev container, or run
the container manually with `docker compose -f .devcontainer/docker-compose.yml up -d`.
Inside the container:

```sh
mix deps.get
mix firmware
```

Insert an SD card and burn the firmware to it:

```sh
mix burn
```

{wifi_section}
## Next steps

- Device configuration lives in `{target_config}`.
- Keep signing keys and other local secrets in `{secrets}/`; they stay out
  of version control.
"#,
        device_section = device_section(device),
        wifi_section = wifi_section(config),
        target_config = TARGET_CONFIG_FILE,
        secrets = SECRETS_DIR,
    )
}

/// Device section of the guide. Devices with a curated power entry get
/// their display name and power spec; the rest fall back to the upper-cased
/// code and generic power instructions.
fn device_section(device: &DeviceDescriptor) -> String {
    match &device.power_spec {
        Some(power) => format!(
            "## Your device\n\n\
             You are building firmware for the **{name}**.\n\
             Power it with {power}.\n",
            name = device.display_name,
        ),
        None => format!(
            "## Your device\n\n\
             You are building firmware for the **{name}**.\n\
             Power it with a supply recommended by the board vendor.\n",
            name = device.code.to_uppercase(),
        ),
    }
}

/// WiFi section of the guide. Branches on the ssid alone; the psk is
/// intentionally not checked here and never shown.
fn wifi_section(config: &Configuration) -> String {
    if config.wifi_ssid.is_empty() {
        format!(
            "## WiFi\n\n\
             WiFi is not configured yet. To join a network on boot, add a\n\
             `VintageNetWiFi` entry to `{target_config}` with your network\n\
             name and passphrase, then rebuild the firmware.\n",
            target_config = TARGET_CONFIG_FILE,
        )
    } else {
        format!(
            "## WiFi\n\n\
             The firmware is already configured to join **{ssid}** on first\n\
             boot. To change networks later, edit `{target_config}` and\n\
             rebuild the firmware.\n",
            ssid = config.wifi_ssid,
            target_config = TARGET_CONFIG_FILE,
        )
    }
}
