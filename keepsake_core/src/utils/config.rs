//! Presentation settings persisted under `~/.keepsake/config.json`.
//!
//! Toy state itself is session-only; the config carries only how the toys
//! look and pace themselves.

use crate::utils::error::{KeepsakeError, KeepsakeResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Theme mode name ("light" or "dark")
    pub theme: String,

    /// Milliseconds between animation ticks
    pub tick_interval_ms: u64,

    /// Text shown once the bouquet has fully withered
    pub farewell_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
            tick_interval_ms: 50,
            farewell_text: "withered".to_string(),
        }
    }
}

impl Config {
    /// Location of the config file, if a home directory exists.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".keepsake").join("config.json"))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KeepsakeResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> KeepsakeResult<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Loads the config, falling back to defaults when no file exists.
    /// A file that exists but fails to parse is an error rather than a
    /// silent reset.
    pub fn load_or_default() -> KeepsakeResult<Self> {
        let Some(path) = Self::config_path() else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_from_file(path)
    }

    pub fn save(&self) -> KeepsakeResult<()> {
        let path = Self::config_path()
            .ok_or_else(|| KeepsakeError::Config("no home directory".to_string()))?;
        self.save_to_file(path)
    }
}
