use crate::domain::model::ConfigEntry;
use crate::utils::error::{PushError, Result};
use std::path::Path;

/// Load `key=value` entries from a device config file.
///
/// Malformed UTF-8 is replaced rather than rejected. An empty result is an
/// error: there is nothing to push.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<ConfigEntry>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| PushError::ConfigReadError {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_entries(&String::from_utf8_lossy(&bytes));
    tracing::debug!("Parsed {} entries from {}", entries.len(), path.display());

    if entries.is_empty() {
        return Err(PushError::EmptyConfigError {
            path: path.to_path_buf(),
        });
    }
    Ok(entries)
}

/// Parse config text, keeping file order and duplicates.
pub fn parse_entries(content: &str) -> Vec<ConfigEntry> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(raw: &str) -> Option<ConfigEntry> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        tracing::debug!("Skipping line with empty key: {:?}", raw);
        return None;
    }
    Some(ConfigEntry::new(key, value.trim()))
}
