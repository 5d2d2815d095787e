//! Application configuration.
//!
//! The configuration is a single JSON file in the platform application-data
//! directory holding the location of the to-do database. It is written by
//! `todocli init` and read by every other command; a missing configuration is
//! a distinguished error so commands can tell the user to run `init` first
//! instead of silently operating on a default path.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default database file name, used when the user accepts the suggested
/// location during `todocli init`.
pub const DB_FILE_NAME: &str = "todo.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Path of the to-do database file chosen at initialization.
    pub database: PathBuf,
}

impl Config {
    /// Loads the saved configuration.
    ///
    /// Fails when no configuration file exists yet (the application has not
    /// been initialized) or when the file cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Err(msg_error_anyhow!(Message::ConfigFileNotFound));
        }

        let config_str = fs::read_to_string(&config_file_path).map_err(|_| msg_error_anyhow!(Message::ConfigReadFailed))?;
        let config: Config = serde_json::from_str(&config_str).map_err(|_| msg_error_anyhow!(Message::ConfigReadFailed))?;
        Ok(config)
    }

    /// Persists the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Suggested database location inside the application data directory.
    pub fn default_db_path() -> Result<PathBuf> {
        DataStorage::new().get_path(DB_FILE_NAME)
    }
}
