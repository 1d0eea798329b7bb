//! Default configuration values

/// Pattern a project name must match
pub const PROJECT_NAME_PATTERN: &str = "^[a-z][a-z0-9_]*$";

/// Upstream generator binary
pub const BOOTSTRAP_TOOL: &str = "mix";

/// Upstream generator task
pub const BOOTSTRAP_TASK: &str = "nerves.new";

/// Environment variable the upstream generator reads for the target
pub const TARGET_ENV_VAR: &str = "MIX_TARGET";

/// Directory mounted into the container for locally-kept secrets
pub const SECRETS_DIR: &str = ".secrets";

/// Marker fragment guarding the .gitignore secrets block.
/// The block is appended only while this substring is absent.
pub const GITIGNORE_MARKER: &str = ".secrets/";

/// Target configuration file the WiFi snippet is appended to
pub const TARGET_CONFIG_FILE: &str = "config/target.exs";

/// Embedded device catalog; entry order is menu order
pub const DEVICES_TOML: &str = include_str!("devices.toml");
