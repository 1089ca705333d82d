// src/file/upload.rs
use anyhow::{anyhow, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// A log file picked by the user, held in memory until it is uploaded.
#[derive(Debug, Clone, PartialEq)]
pub struct LogUpload {
    pub path: PathBuf,
    pub file_name: String,
    pub content: Vec<u8>,
}

impl LogUpload {
    #[cfg(test)]
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        let file_name = file_name.into();
        Self {
            path: PathBuf::from(&file_name),
            file_name,
            content,
        }
    }

    pub fn size(&self) -> usize {
        self.content.len()
    }
}

pub fn read_log_file(path: &Path) -> Result<LogUpload> {
    if !path.is_file() {
        return Err(anyhow!("Log file not found: {}", path.display()));
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| anyhow!("Invalid log file path: {}", path.display()))?
        .to_string_lossy()
        .into_owned();

    let content = fs::read(path)
        .with_context(|| format!("Failed to read log file {}", path.display()))?;

    Ok(LogUpload {
        path: path.to_path_buf(),
        file_name,
        content,
    })
}
