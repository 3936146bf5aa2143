//! Configuration system for filetrail.
//!
//! This module provides the configuration structure for filetrail with
//! sensible defaults and support for serialization/deserialization via
//! serde. Configuration can be loaded from TOML files and merged with
//! command-line arguments.
//!
//! # Example
//!
//! ```
//! use filetrail::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.capacity, 50);
//!
//! // Create custom configuration
//! let custom = Config { capacity: 10 };
//! assert_eq!(custom.capacity, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Configuration for the filetrail tracker.
///
/// # Fields
///
/// * `capacity` - Maximum number of recent entries retained (default: 50)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum number of recent entries retained; the tail is evicted
    /// once the bound is exceeded
    #[serde(default = "default_capacity")]
    pub capacity: usize,
}

/// Returns the default capacity bound.
fn default_capacity() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/filetrail/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("filetrail");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, toml_string)?;

        Ok(())
    }
}
