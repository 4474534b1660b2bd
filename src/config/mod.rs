// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_glance::config::{self, Config};
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.scale_step = Some(0.1);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

mod defaults;

pub use defaults::*;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedGlance";

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Scale change applied per zoom in/out step.
    #[serde(default)]
    pub scale_step: Option<f32>,

    /// Fit mode restored on startup: "normal", "width", or "all".
    #[serde(default)]
    pub fit_mode: Option<String>,

    /// Background fill behind the displayed image (RGB).
    #[serde(default)]
    pub background: Option<[u8; 3]>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale_step: Some(DEFAULT_SCALE_STEP),
            fit_mode: None,
            background: Some(DEFAULT_BACKGROUND_RGB),
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).unwrap();
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_has_expected_values() {
        let config = Config::default();
        assert_eq!(config.scale_step, Some(DEFAULT_SCALE_STEP));
        assert_eq!(config.background, Some(DEFAULT_BACKGROUND_RGB));
        assert!(config.fit_mode.is_none());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);

        let config = Config {
            scale_step: Some(0.1),
            fit_mode: Some("width".to_string()),
            background: Some([0, 0, 0]),
        };
        save_to_path(&config, &path).expect("Failed to save config");

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.scale_step, Some(0.1));
        assert_eq!(loaded.fit_mode, Some("width".to_string()));
        assert_eq!(loaded.background, Some([0, 0, 0]));
    }

    #[test]
    fn load_from_missing_file_is_an_error() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join("does_not_exist.toml");
        assert!(load_from_path(&path).is_err());
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not valid toml [[[").unwrap();

        let loaded = load_from_path(&path).expect("Failed to load config");
        assert_eq!(loaded.scale_step, Some(DEFAULT_SCALE_STEP));
    }
}
