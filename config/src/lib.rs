//! Configuration loading and preference persistence for lapwatch.
//!
//! Two files live under `~/.lapwatch/`:
//!
//! - `config.toml`: read-only application settings (`[app]` table)
//! - `storage.json`: a small key-value store holding the preference payload

mod preferences;
mod store;

pub use preferences::{PREFERENCES_KEY, load_preferences, save_preferences};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const CONFIG_DIR_NAME: &str = ".lapwatch";

#[derive(Debug, Default, Deserialize)]
pub struct LapwatchConfig {
    pub app: Option<AppConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// City key shown by the live clock at startup.
    pub city: Option<String>,
    /// Use ASCII-only glyphs for digits and markers.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
    /// Disable pulse, flash and particle motion.
    #[serde(default)]
    pub reduced_motion: bool,
    /// Override for the preference storage file.
    pub storage_path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

impl LapwatchConfig {
    /// Load `~/.lapwatch/config.toml`. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn app(&self) -> Option<&AppConfig> {
        self.app.as_ref()
    }

    /// Storage file to use: the configured override, else `~/.lapwatch/storage.json`.
    #[must_use]
    pub fn storage_path(&self) -> Option<PathBuf> {
        self.app()
            .and_then(|app| app.storage_path.clone())
            .or_else(default_storage_path)
    }
}

#[must_use]
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

#[must_use]
pub fn default_storage_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("storage.json"))
}
