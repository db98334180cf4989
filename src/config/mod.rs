//! Configuration module for shots-studio
//!
//! Manages server address, file-serving root and scan/process options.
//! Configuration is stored in the user's config directory
//! (`~/.config/shots-studio/config.toml` on Linux) and can be overridden with
//! `SHOTS_STUDIO_*` environment variables (`__` separates nested keys, e.g.
//! `SHOTS_STUDIO_PROCESS__RESET_COLLECTIONS=true`).

use crate::scan::Scanner;
use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "SHOTS_STUDIO";

/// Scan options
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ScanConfig {
    /// Follow symbolic links while walking
    pub follow_links: bool,
}

/// Process options
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct ProcessConfig {
    /// Drop every collection before tagging (destructive mode)
    pub reset_collections: bool,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StudioConfig {
    /// Interface the HTTP server binds to
    pub host: String,

    /// Port the HTTP server listens on
    pub port: u16,

    /// Directory that `/user_files/` paths are resolved against
    pub user_files_root: PathBuf,

    /// Directory scanned when a scan request names none
    pub default_scan_dir: Option<PathBuf>,

    /// Suppress informational output by default
    pub quiet: bool,

    pub scan: ScanConfig,

    pub process: ProcessConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            user_files_root: PathBuf::from("/"),
            default_scan_dir: None,
            quiet: false,
            scan: ScanConfig::default(),
            process: ProcessConfig::default(),
        }
    }
}

impl StudioConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("shots-studio").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
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

    /// Load configuration from an explicit file plus environment overrides
    ///
    /// A missing file is treated as empty; missing keys take their defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be parsed or a value has the wrong type.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    fn load_with_env(
        path: &Path,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path)
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
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

    /// `host:port` string for the listener
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Scanner configured with the scan options
    #[must_use]
    pub const fn scanner(&self) -> Scanner {
        Scanner {
            follow_links: self.scan.follow_links,
        }
    }
}
