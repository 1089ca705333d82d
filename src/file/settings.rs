// src/file/settings.rs
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::ClientSettings;

/// Writes the default settings to `path` unless a file already exists there.
/// Returns true when a new file was written.
pub fn write_default_if_missing(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create settings directory {}", parent.display()))?;
    }

    let content = ron::ser::to_string_pretty(
        &ClientSettings::default(),
        ron::ser::PrettyConfig::new()
            .new_line("\n".to_string())
            .depth_limit(2),
    )?;
    fs::write(path, content)
        .with_context(|| format!("Failed to write settings file {}", path.display()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_writes_loadable_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("settings.ron");

        assert!(write_default_if_missing(&path).unwrap());
        let loaded = ClientSettings::load(Some(path.as_path())).unwrap();
        assert_eq!(loaded.api_base_url, ClientSettings::default().api_base_url);
    }

    #[test]
    fn test_existing_file_is_left_alone() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.ron");
        fs::write(&path, "(request_timeout_secs: 5)").unwrap();

        assert!(!write_default_if_missing(&path).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "(request_timeout_secs: 5)");
    }
}
