//! Configuration module for photag
//!
//! Manages where the index and audit log live and which files count as
//! images. Configuration is stored in the user's config directory and can be
//! overridden with `PHOTAG_*` environment variables.

mod setup;

pub use setup::first_time_setup;

use crate::scan::ScanOptions;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Path display format
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathFormat {
    /// Display absolute paths
    #[default]
    Absolute,
    /// Display relative paths (relative to current directory)
    Relative,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct PhotagConfig {
    /// Directory of the embedded index database
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Text file receiving one line per rename
    #[serde(default = "default_audit_log")]
    pub audit_log: PathBuf,

    /// Extensions picked up by `scan`, without the dot
    #[serde(default = "default_extensions")]
    pub image_extensions: Vec<String>,

    /// Descend into subfolders when scanning
    #[serde(default = "default_recursive")]
    pub recursive: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Default format for displaying paths (absolute or relative)
    #[serde(default)]
    pub path_format: PathFormat,
}

impl Default for PhotagConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            audit_log: default_audit_log(),
            image_extensions: default_extensions(),
            recursive: default_recursive(),
            quiet: false,
            path_format: PathFormat::default(),
        }
    }
}

fn data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("photag")
}

fn default_database() -> PathBuf {
    data_dir().join("db")
}

fn default_audit_log() -> PathBuf {
    data_dir().join("nameLog.txt")
}

fn default_extensions() -> Vec<String> {
    ScanOptions::default().extensions
}

const fn default_recursive() -> bool {
    true
}

impl PhotagConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("photag").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::default().save_to(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load configuration from `path` plus `PHOTAG_*` environment overrides.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an override cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix("PHOTAG")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("image_extensions"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            first_time_setup()
        }
    }

    /// Scan settings derived from this configuration
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            extensions: self
                .image_extensions
                .iter()
                .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
            recursive: self.recursive,
        }
    }
}
