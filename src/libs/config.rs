//! Application configuration.
//!
//! Settings are stored as JSON in the platform application-data directory,
//! following the same read/save lifecycle as the rest of the application's
//! files. A missing configuration file is not an error - every option has
//! a sensible default and the command line can override all of them per
//! invocation.

use crate::libs::filter::GroupBy;
use crate::libs::messages::Message;
use crate::libs::range::Period;
use crate::libs::storage::DataStorage;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Persistent application settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Default dataset snapshot file, used when `--input` is not given.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Default grouping dimension for the report command.
    #[serde(default)]
    pub group_by: Option<GroupBy>,

    /// Default period granularity for the sum command.
    #[serde(default)]
    pub period: Option<Period>,
}

impl Config {
    /// Reads the configuration file, or returns defaults when none exists.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        serde_json::from_str(&raw).map_err(|e| msg_error_anyhow!(Message::ConfigParseError(e.to_string())))
    }

    /// Writes the configuration to the application data directory.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let json = serde_json::to_string_pretty(self)?;
        File::create(&path)?.write_all(json.as_bytes())?;
        Ok(())
    }
}
