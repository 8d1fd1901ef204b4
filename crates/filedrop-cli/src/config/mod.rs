//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Persisted client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub version: String,
    /// Base URL of the remote file store.
    pub server_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version: "1.0.0".to_string(),
            server_url: "http://localhost:5000".to_string(),
        }
    }
}

pub struct SettingsManager;

impl SettingsManager {
    /// Get the filedrop home directory (~/.filedrop)
    pub fn filedrop_home() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("FILEDROP_HOME") {
            return Ok(PathBuf::from(path));
        }
        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".filedrop"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Result<PathBuf> {
        Ok(Self::filedrop_home()?.join("settings.json"))
    }

    /// Load settings from disk, writing defaults on first run. The
    /// `FILEDROP_SERVER_URL` environment variable overrides the stored
    /// server URL.
    pub fn load() -> Result<Settings> {
        let path = Self::settings_path()?;

        let mut settings = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {:?}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse settings from {:?}", path))?
        } else {
            let settings = Settings::default();
            Self::save(&settings)?;
            settings
        };

        if let Ok(url) = std::env::var("FILEDROP_SERVER_URL") {
            if !url.is_empty() {
                settings.server_url = url;
            }
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(settings: &Settings) -> Result<()> {
        let path = Self::settings_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let content =
            serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

        std::fs::write(&path, content)
            .with_context(|| format!("Failed to write settings to {:?}", path))?;

        Ok(())
    }
}
