pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::{dry_run, push, PushPlan};
pub use config::entries::{load_entries, parse_entries};
pub use config::settings::{LinkTimings, SettingsFile};
pub use crate::core::session::{run_session, PushSession};
pub use domain::model::{Command, ConfigEntry, ReplyKind, SessionTally};
pub use domain::ports::Port;
pub use utils::error::{PushError, Result};
