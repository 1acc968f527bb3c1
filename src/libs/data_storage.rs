//! Location of the files baily keeps on disk.

use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name under the platform data directory.
pub const APP_NAME: &str = "baily";

/// Overrides the platform data directory when set.
pub const DATA_DIR_ENV: &str = "BAILY_DATA_DIR";

/// Resolves file paths inside the application data directory.
#[derive(Clone, Debug)]
pub struct DataStorage {
    /// Directory holding `baily.db` and `config.json`
    base_path: PathBuf,
}

impl DataStorage {
    /// Platform data directory, or `$BAILY_DATA_DIR` when set.
    ///
    /// - Windows: `%LOCALAPPDATA%\baily`
    /// - macOS: `~/Library/Application Support/baily`
    /// - elsewhere: `~/.local/share/baily`
    pub fn new() -> Self {
        if let Ok(dir) = var(DATA_DIR_ENV) {
            return Self::at(dir);
        }

        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };

        Self::at(Path::new(&base_path).join(APP_NAME))
    }

    pub fn at(base_path: impl Into<PathBuf>) -> Self {
        Self { base_path: base_path.into() }
    }

    /// Full path of `file_name`, creating the directory on first use.
    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
