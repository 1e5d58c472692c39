use crate::adapters::serial;
use crate::config::entries::load_entries;
use crate::config::settings::{LinkTimings, SettingsFile};
use crate::core::console::Console;
use crate::core::session::run_session;
use crate::domain::model::{Command, ConfigEntry, SessionTally};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Everything needed before the port is touched: entries, link timings, target.
#[derive(Debug, Clone)]
pub struct PushPlan {
    pub port: String,
    pub config_path: PathBuf,
    pub entries: Vec<ConfigEntry>,
    pub timings: LinkTimings,
}

impl PushPlan {
    /// Load the config file first so a bad config never reaches the port.
    pub fn load(
        port: &str,
        config_path: &Path,
        settings_path: Option<&Path>,
        baud_override: Option<u32>,
    ) -> Result<Self> {
        let entries = load_entries(config_path)?;

        let settings = match settings_path {
            Some(path) => SettingsFile::from_file(path)?,
            None => SettingsFile::default(),
        };
        let mut timings = settings.timings();
        if let Some(baud) = baud_override {
            tracing::info!("🔧 Baud rate overridden to: {}", baud);
            timings.baud_rate = baud;
        }
        timings.validate()?;

        Ok(Self {
            port: port.to_string(),
            config_path: config_path.to_path_buf(),
            entries,
            timings,
        })
    }

    #[cfg(feature = "cli")]
    pub fn from_cli(config: &crate::config::CliConfig) -> Result<Self> {
        Self::load(
            config.port_name()?,
            Path::new(config.config_path()?),
            config.settings.as_deref().map(Path::new),
            config.baud,
        )
    }

    /// Every command the session would send, in order.
    pub fn commands(&self) -> Vec<Command> {
        let mut commands = Vec::with_capacity(self.entries.len() + 2);
        commands.push(Command::Begin);
        commands.extend(self.entries.iter().map(Command::set));
        commands.push(Command::Commit);
        commands
    }

    fn announce<W: Write>(&self, console: &mut Console<W>) {
        console.info(format_args!(
            "Port: {} | File: {} | Entries: {}",
            self.port,
            self.config_path.display(),
            self.entries.len()
        ));
    }
}

/// Print the planned commands without opening the port.
pub fn dry_run<W: Write>(plan: &PushPlan, out: W) {
    let mut console = Console::new(out);
    plan.announce(&mut console);
    console.info("Dry run, port not opened");
    for command in plan.commands() {
        console.send(command);
    }
}

/// Open the port and run a full session against it.
pub fn push<W: Write>(plan: &PushPlan, mut out: W) -> Result<SessionTally> {
    {
        let mut console = Console::new(&mut out);
        plan.announce(&mut console);
        console.info(format_args!("Opening port ({})...", plan.timings.baud_rate));
    }

    let port = serial::open_port(&plan.port, &plan.timings)?;
    run_session(port, &plan.entries, plan.timings, out)
}
