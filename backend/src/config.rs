//! # Application Configuration
//!
//! Settings are read from an optional YAML file and then overridden by
//! environment variables.
//!
//! ## YAML Format
//!
//! ```yaml
//! data_directory: "/srv/temple/data"   # omit to start from the sample data
//! log_level: "info"
//! language: "hi"
//! ```
//!
//! ## Environment
//!
//! - `TEMPLE_CONFIG`: path of the YAML file (default `temple_donations.yaml`)
//! - `TEMPLE_DATA_DIR`: directory holding `donors.csv` and `donations.csv`
//! - `TEMPLE_LOG_LEVEL`: default log filter when `RUST_LOG` is not set
//! - `TEMPLE_LANGUAGE`: `en` or `hi`

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use shared::Language;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "temple_donations.yaml";

pub const CONFIG_PATH_VAR: &str = "TEMPLE_CONFIG";
pub const DATA_DIR_VAR: &str = "TEMPLE_DATA_DIR";
pub const LOG_LEVEL_VAR: &str = "TEMPLE_LOG_LEVEL";
pub const LANGUAGE_VAR: &str = "TEMPLE_LANGUAGE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV data directory; the built-in sample data is used when unset
    pub data_directory: Option<PathBuf>,
    pub log_level: String,
    pub language: Language,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_directory: None,
            log_level: "info".to_string(),
            language: Language::English,
        }
    }
}

impl AppConfig {
    /// Load the configuration file named by `TEMPLE_CONFIG` (or the default
    /// file when present), then apply environment overrides.
    pub fn load() -> Result<Self> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Same as [`AppConfig::load`] with a custom variable lookup
    pub fn load_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match lookup(CONFIG_PATH_VAR) {
            Some(path) => Self::from_yaml_file(Path::new(&path))?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_yaml_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.with_overrides(lookup)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        let yaml_content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: AppConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|d| !d.trim().is_empty()) {
            self.data_directory = Some(PathBuf::from(dir.trim()));
        }
        if let Some(level) = lookup(LOG_LEVEL_VAR).filter(|l| !l.trim().is_empty()) {
            self.log_level = level.trim().to_string();
        }
        if let Some(language) = lookup(LANGUAGE_VAR) {
            self.language = language
                .parse()
                .map_err(|e: String| anyhow!("{}: {}", LANGUAGE_VAR, e))?;
        }
        Ok(self)
    }
}
