use crate::utils::error::{PushError, Result};
use crate::utils::validation::{self, Validate};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BAUD_RATE: u32 = 115_200;
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 200;
pub const DEFAULT_SETTLE_MS: u64 = 300;
pub const DEFAULT_BOOT_WINDOW_MS: u64 = 800;
pub const DEFAULT_RESPONSE_WINDOW_MS: u64 = 500;
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10;
pub const DEFAULT_BOOT_TAIL_LINES: usize = 12;

/// Optional settings file. Every field falls back to the built-in default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SettingsFile {
    pub link: Option<LinkConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkConfig {
    pub baud_rate: Option<u32>,
    pub read_timeout_ms: Option<u64>,
    pub settle_ms: Option<u64>,
    pub boot_window_ms: Option<u64>,
    pub response_window_ms: Option<u64>,
    pub poll_interval_ms: Option<u64>,
    pub boot_tail_lines: Option<usize>,
}

impl SettingsFile {
    /// 從 TOML 檔案載入設定
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| PushError::SettingsError {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PushError::SettingsError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Resolve into concrete timings, applying defaults for missing fields.
    pub fn timings(&self) -> LinkTimings {
        let link = self.link.clone().unwrap_or_default();
        let defaults = LinkTimings::default();
        LinkTimings {
            baud_rate: link.baud_rate.unwrap_or(defaults.baud_rate),
            read_timeout: link
                .read_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.read_timeout),
            settle: link
                .settle_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.settle),
            boot_window: link
                .boot_window_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.boot_window),
            response_window: link
                .response_window_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.response_window),
            poll_interval: link
                .poll_interval_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.poll_interval),
            boot_tail_lines: link.boot_tail_lines.unwrap_or(defaults.boot_tail_lines),
        }
    }
}

/// Serial link parameters and protocol windows for one session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTimings {
    pub baud_rate: u32,
    /// Bound on a single read call at the port level.
    pub read_timeout: Duration,
    /// Wait after opening before the input buffer is flushed.
    pub settle: Duration,
    pub boot_window: Duration,
    pub response_window: Duration,
    pub poll_interval: Duration,
    /// How many trailing boot lines are shown.
    pub boot_tail_lines: usize,
}

impl Default for LinkTimings {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout: Duration::from_millis(DEFAULT_READ_TIMEOUT_MS),
            settle: Duration::from_millis(DEFAULT_SETTLE_MS),
            boot_window: Duration::from_millis(DEFAULT_BOOT_WINDOW_MS),
            response_window: Duration::from_millis(DEFAULT_RESPONSE_WINDOW_MS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            boot_tail_lines: DEFAULT_BOOT_TAIL_LINES,
        }
    }
}

impl Validate for LinkTimings {
    fn validate(&self) -> Result<()> {
        validation::validate_range("link.baud_rate", self.baud_rate, 50, 4_000_000)?;
        validation::validate_positive_duration("link.read_timeout_ms", self.read_timeout)?;
        validation::validate_positive_duration("link.boot_window_ms", self.boot_window)?;
        validation::validate_positive_duration("link.response_window_ms", self.response_window)?;
        validation::validate_positive_duration("link.poll_interval_ms", self.poll_interval)?;
        validation::validate_positive_number("link.boot_tail_lines", self.boot_tail_lines, 1)?;

        if self.poll_interval > self.response_window {
            return Err(PushError::InvalidConfigValueError {
                field: "link.poll_interval_ms".to_string(),
                value: self.poll_interval.as_millis().to_string(),
                reason: "Poll interval cannot exceed the response window".to_string(),
            });
        }
        Ok(())
    }
}
