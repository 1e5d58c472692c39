pub mod entries;
pub mod settings;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use crate::utils::error::{PushError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "uart-push")]
#[command(version)]
#[command(about = "Push key=value config entries to a device over a serial link")]
pub struct CliConfig {
    /// Serial port (e.g. /dev/ttyUSB0 or COM3)
    #[arg(required_unless_present = "list_ports")]
    pub port: Option<String>,

    /// Config file with one key=value entry per line
    #[arg(required_unless_present = "list_ports")]
    pub config: Option<String>,

    /// TOML file with [link] settings
    #[arg(long)]
    pub settings: Option<String>,

    /// Override the baud rate from settings
    #[arg(long)]
    pub baud: Option<u32>,

    /// Print the commands that would be sent without opening the port
    #[arg(long)]
    pub dry_run: bool,

    /// List serial ports and exit
    #[arg(long)]
    pub list_ports: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Any argument error other than help/version is a usage error (exit 1).
#[cfg(feature = "cli")]
impl From<clap::Error> for PushError {
    fn from(e: clap::Error) -> Self {
        PushError::UsageError {
            message: e.render().to_string(),
        }
    }
}

// Clap already enforces PORT and CONFIG for the binary; these accessors guard
// library callers that build a CliConfig by hand.
#[cfg(feature = "cli")]
impl CliConfig {
    pub fn port_name(&self) -> Result<&str> {
        self.port.as_deref().ok_or_else(|| PushError::UsageError {
            message: "missing PORT".to_string(),
        })
    }

    pub fn config_path(&self) -> Result<&str> {
        self.config.as_deref().ok_or_else(|| PushError::UsageError {
            message: "missing CONFIG".to_string(),
        })
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.list_ports {
            return Ok(());
        }
        validation::validate_path("port", self.port_name()?)?;
        validation::validate_path("config", self.config_path()?)?;
        if let Some(settings) = &self.settings {
            validation::validate_path("settings", settings)?;
        }
        Ok(())
    }
}
