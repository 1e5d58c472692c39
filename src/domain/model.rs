use std::fmt;

/// One `key=value` line of the device config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    pub key: String,
    pub value: String,
}

impl ConfigEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Commands understood by the device firmware.
///
/// Keys and values are sent as-is. A value containing a newline will split
/// the command on the wire; callers are expected not to do that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Begin,
    Set { key: String, value: String },
    Commit,
}

impl Command {
    pub fn set(entry: &ConfigEntry) -> Self {
        Command::Set {
            key: entry.key.clone(),
            value: entry.value.clone(),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Begin => f.write_str("BEGIN"),
            Command::Set { key, value } => write!(f, "SET {} {}", key, value),
            Command::Commit => f.write_str("COMMIT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyKind {
    Ok,
    Err,
    Info,
}

impl ReplyKind {
    pub fn classify(line: &str) -> Self {
        if line.starts_with("OK ") {
            ReplyKind::Ok
        } else if line.starts_with("ERR ") {
            ReplyKind::Err
        } else {
            ReplyKind::Info
        }
    }
}

/// Acknowledgement counters for `SET` replies, counted per reply line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTally {
    pub ok: usize,
    pub err: usize,
}

impl SessionTally {
    pub fn record(&mut self, line: &str) {
        match ReplyKind::classify(line) {
            ReplyKind::Ok => self.ok += 1,
            ReplyKind::Err => self.err += 1,
            ReplyKind::Info => {}
        }
    }

    pub fn from_reply(lines: &[String]) -> Self {
        let mut tally = Self::default();
        for line in lines {
            tally.record(line);
        }
        tally
    }
}

impl std::ops::AddAssign for SessionTally {
    fn add_assign(&mut self, other: Self) {
        self.ok += other.ok;
        self.err += other.err;
    }
}

impl fmt::Display for SessionTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OK={} ERR={}", self.ok, self.err)
    }
}
