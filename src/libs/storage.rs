//! Dataset snapshot loading and platform data paths.
//!
//! The persistent store itself is external; this module only covers the
//! boundary where a snapshot of one user's customers, tasks, and entries
//! arrives as a JSON file, plus the platform-specific directory where the
//! application keeps its own files (configuration).

use crate::libs::entry::Dataset;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::path::{Path, PathBuf};
use std::{fs, str};

pub const VENDOR_NAME: &str = "worktally";
pub const APP_NAME: &str = "worktally";

/// Resolves and creates the platform application-data directory.
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

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

/// Loads a dataset snapshot from a JSON file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        msg_bail_anyhow!(Message::DatasetNotFound(path.display().to_string()));
    }
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|e| msg_error_anyhow!(Message::DatasetParseError(e.to_string())))
}
