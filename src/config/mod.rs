use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{errors::ConfigError, utils::app_data_dir};

const CONFIG_FILE: &str = "config.json";

/// User preferences read at startup. Expenses themselves are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub screen_reader_mode: bool,
    pub high_contrast_mode: bool,
    pub quiet_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".into(),
            screen_reader_mode: false,
            high_contrast_mode: false,
            quiet_mode: false,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: impl Into<PathBuf>) -> Self {
        Self {
            path: base.into().join(CONFIG_FILE),
        }
    }

    /// Reads the config file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&data)?;
        tracing::debug!(path = %self.path.display(), "loaded config");
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path());
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn partial_file_fills_remaining_fields() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path());
        fs::write(manager.path(), r#"{ "quiet_mode": true }"#).unwrap();

        let config = manager.load().unwrap();
        assert!(config.quiet_mode);
        assert_eq!(config.log_level, "warn");
        assert!(!config.screen_reader_mode);
    }

    #[test]
    fn malformed_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path());
        fs::write(manager.path(), "{ not json").unwrap();

        assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
    }
}
