use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PushError {
    #[error("Usage error: {message}")]
    UsageError { message: String },

    #[error("Cannot read config file {}: {source}", path.display())]
    ConfigReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file {} contains no key=value entries", path.display())]
    EmptyConfigError { path: PathBuf },

    #[error("Settings error: {message}")]
    SettingsError { message: String },

    #[error("Invalid setting '{field}' = '{value}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Serial port error: {0}")]
    PortError(#[from] serialport::Error),

    #[error("Serial I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Configuration,
    Link,
}

impl PushError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PushError::UsageError { .. } => ErrorCategory::Usage,
            PushError::ConfigReadError { .. }
            | PushError::EmptyConfigError { .. }
            | PushError::SettingsError { .. }
            | PushError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            PushError::PortError(_) | PushError::IoError(_) => ErrorCategory::Link,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Link => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PushError::UsageError { message } => message.trim_end().to_string(),
            PushError::ConfigReadError { path, source } => {
                format!("ERROR: config file unreadable ({}): {}", path.display(), source)
            }
            PushError::EmptyConfigError { path } => {
                format!("ERROR: config file has no entries ({})", path.display())
            }
            PushError::SettingsError { .. } | PushError::InvalidConfigValueError { .. } => {
                format!("ERROR: {}", self)
            }
            PushError::PortError(e) => format!("ERROR: could not use serial port: {}", e),
            PushError::IoError(e) => format!("ERROR: serial link failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PushError::UsageError { .. } => "Pass the serial port and the config file path",
            PushError::ConfigReadError { .. } => {
                "The file could not be opened (exit 2, same as an empty config); check the path and permissions"
            }
            PushError::EmptyConfigError { .. } => {
                "The file was read but every line was blank, a # comment, or had no '='; add key=value lines"
            }
            PushError::SettingsError { .. } | PushError::InvalidConfigValueError { .. } => {
                "Fix the [link] section of the settings file"
            }
            PushError::PortError(_) => {
                "Check the port name, permissions, and that no other program holds the port"
            }
            PushError::IoError(_) => "Check the cable and that the device is still powered",
        }
    }
}

pub type Result<T> = std::result::Result<T, PushError>;
