//! Category and source-directory configuration.
//!
//! Configuration is loaded from a TOML file with three recognized top-level
//! keys: `file_types`, mapping a category name to the filename extensions it
//! claims; `path`, the list of directories to organize; and `on_collision`,
//! the policy for destination name collisions. Category order in the document
//! is the match order.
//!
//! # Configuration File Format
//!
//! ```toml
//! path = ["/home/me/Downloads", "/home/me/Desktop"]
//! on_collision = "rename"
//!
//! [file_types]
//! Images = [".jpg", ".jpeg", ".png"]
//! Documents = [".pdf", ".docx"]
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::output::OutputFormatter;

/// Name of the configuration file looked up in the current directory.
const LOCAL_CONFIG_NAME: &str = ".sortboxrc.toml";

/// Errors that can occur while loading configuration.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// No configuration file was found at the given or default locations.
    ConfigNotFound(PathBuf),
    /// Invalid TOML syntax or structure.
    ConfigInvalid(String),
    /// IO error while reading the configuration file.
    IoError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ConfigNotFound(path) => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            ConfigError::ConfigInvalid(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigError::IoError(msg) => write!(f, "IO error reading configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// What to do when a file's destination already exists.
///
/// The underlying rename primitive behaves differently across platforms, so
/// collisions are resolved explicitly before the move instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionPolicy {
    /// Abort the run with an error.
    Fail,
    /// Replace the existing destination file.
    Overwrite,
    /// Keep both files by moving under a timestamp-suffixed name.
    #[default]
    Rename,
}

/// The full configuration for an organization run.
///
/// Deserialized from TOML. `file_types` keeps the document's key order, which
/// is what "first matching category wins" is defined against. All keys are
/// optional; the empty configuration organizes nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Ordered mapping from category name to the extensions it claims.
    #[serde(default)]
    pub file_types: IndexMap<String, Vec<String>>,

    /// Directories to organize, processed in list order.
    #[serde(default, rename = "path")]
    pub sources: Vec<PathBuf>,

    /// Destination collision policy.
    #[serde(default)]
    pub on_collision: CollisionPolicy,
}

impl Config {
    /// Load configuration, searching in the following order:
    /// 1. The explicitly provided path, if any
    /// 2. `.sortboxrc.toml` in the current directory
    /// 3. `~/.config/sortbox/config.toml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigNotFound` when no candidate file exists,
    /// `ConfigError::ConfigInvalid` on TOML parse failure, or
    /// `ConfigError::IoError` when a file exists but cannot be read.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local_config = PathBuf::from(LOCAL_CONFIG_NAME);
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        if let Ok(home) = std::env::var("HOME") {
            let home_config = PathBuf::from(home)
                .join(".config")
                .join("sortbox")
                .join("config.toml");
            if home_config.exists() {
                return Self::load_from_file(&home_config);
            }
        }

        Err(ConfigError::ConfigNotFound(local_config))
    }

    /// Load configuration, substituting the empty configuration on failure.
    ///
    /// This is the boundary the rest of the program relies on: it prints one
    /// diagnostic line on any load failure and always returns a well-formed
    /// `Config`, so a missing or malformed file never aborts startup.
    pub fn load_or_default(config_path: Option<&Path>) -> Self {
        match Self::load(config_path) {
            Ok(config) => config,
            Err(e) => {
                OutputFormatter::warning(&format!("Error loading config file: {}", e));
                Self::default()
            }
        }
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigInvalid` if parsing fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ConfigInvalid(e.to_string()))
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Self::from_toml(&content)
    }
}
