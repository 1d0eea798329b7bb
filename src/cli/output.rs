//! Output formatting
//!
//! Utilities for displaying colored status lines and formatted messages,
//! plus the globally-applied output configuration (quiet/json/verbose).

use std::sync::OnceLock;

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

/// Global output configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Suppress all output except errors
    pub quiet: bool,
    /// Emit a machine-readable summary instead of status lines
    pub json: bool,
    /// Verbosity level from repeated -v flags
    pub verbose: u8,
}

static GLOBAL: OnceLock<OutputConfig> = OnceLock::new();

impl OutputConfig {
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Install this configuration process-wide; later calls are ignored
    pub fn apply_global(self) {
        let _ = GLOBAL.set(self);
    }

    /// The installed configuration, defaulting to plain output
    pub fn global() -> Self {
        GLOBAL.get().copied().unwrap_or_default()
    }
}

fn suppressed() -> bool {
    let config = OutputConfig::global();
    config.quiet || config.json
}

/// Print a success line
pub fn print_success(message: &str) {
    if !suppressed() {
        println!("{} {message}", status::SUCCESS);
    }
}

/// Print an indented detail line
pub fn print_detail(message: &str) {
    if !suppressed() {
        println!("  {message}");
    }
}

/// Print a warning line
pub fn print_warning(message: &str) {
    if !suppressed() {
        eprintln!("{} {message}", status::WARNING);
    }
}

/// Print an error with its cause chain to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  caused by: {cause}");
    }
}
