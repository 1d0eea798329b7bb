//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod new;

use anyhow::Result;
use clap::Subcommand;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new firmware project
    New {
        /// Project name (lowercase letters, digits, underscores)
        project_name: String,

        /// Target device code (prompted for when omitted or unknown)
        #[arg(short, long)]
        target: Option<String>,

        /// WiFi network name to configure
        #[arg(long)]
        wifi_ssid: Option<String>,

        /// WiFi passphrase to configure
        #[arg(long)]
        wifi_psk: Option<String>,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self) -> Result<()> {
        match self {
            Self::New {
                project_name,
                target,
                wifi_ssid,
                wifi_psk,
            } => {
                let current_dir = std::env::current_dir()?;
                let options = new::NewOptions {
                    target,
                    wifi_ssid,
                    wifi_psk,
                };
                let mut prompter = crate::infra::prompt::TerminalPrompter::new();
                let bootstrapper =
                    crate::infra::bootstrap::MixBootstrapper::new(current_dir.clone());
                new::execute(
                    &current_dir,
                    &project_name,
                    &options,
                    &mut prompter,
                    &bootstrapper,
                )?;
                Ok(())
            }
        }
    }
}
