//! Configuration loading from TOML files

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global configuration for bibline
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub dumps: DumpsConfig,
    pub store: StoreConfig,
    pub load: LoadLimits,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DumpsConfig {
    pub authors: PathBuf,
    pub works: PathBuf,
}

impl Default for DumpsConfig {
    fn default() -> Self {
        Self {
            authors: PathBuf::from("dumps/ol_dump_authors.txt"),
            works: PathBuf::from("dumps/ol_dump_works.txt"),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub dir: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./data"),
        }
    }
}

/// Named line ceilings per phase. Absent = whole file.
#[derive(Debug, Clone, Copy, Deserialize, Default)]
#[serde(default)]
pub struct LoadLimits {
    pub max_authors: Option<usize>,
    pub max_books: Option<usize>,
}

impl Config {
    /// Load configuration from default locations
    ///
    /// Search order:
    /// 1. ./bibline.toml (current directory)
    /// 2. ~/.config/bibline/config.toml
    ///
    /// If no config file found, returns default config.
    pub fn load() -> Result<Self> {
        let local_config = PathBuf::from("bibline.toml");
        if local_config.exists() {
            return Self::from_file(&local_config);
        }

        if let Some(config_dir) = directories::ProjectDirs::from("", "", "bibline") {
            let user_config = config_dir.config_dir().join("config.toml");
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        log::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }
}
