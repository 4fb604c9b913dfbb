//! Configuration system for treequery.
//!
//! This module provides the configuration structure for treequery with
//! sensible defaults and support for serialization/deserialization via
//! serde. Configuration is loaded from a TOML file and merged with
//! command-line arguments, which take precedence.
//!
//! # Example
//!
//! ```
//! use treequery::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.dialect, "regex");
//! assert!(!config.ignore_case);
//!
//! // Create custom configuration
//! let custom = Config {
//!     dialect: "glob".to_string(),
//!     ..Config::default()
//! };
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::query::{Dialect, QueryError};

/// Configuration for the treequery application.
///
/// # Fields
///
/// * `dialect` - Query dialect: "regex", "glob", "grep" or "literal" (default: "regex")
/// * `ignore_case` - Compare names case-insensitively (default: false)
/// * `max_results` - Stop after this many results, 0 for no limit (default: 0)
/// * `show_names` - Print node names instead of full paths (default: false)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Query dialect name
    #[serde(default = "default_dialect")]
    pub dialect: String,

    /// Compare names case-insensitively
    #[serde(default)]
    pub ignore_case: bool,

    /// Maximum number of results to print, 0 for no limit
    #[serde(default)]
    pub max_results: usize,

    /// Print node names instead of full paths
    #[serde(default)]
    pub show_names: bool,
}

/// Returns the default dialect name.
fn default_dialect() -> String {
    Dialect::default().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dialect: default_dialect(),
            ignore_case: false,
            max_results: 0,
            show_names: false,
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/treequery/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("treequery");
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

        Self::load_from(&config_path).unwrap_or_else(|e| {
            log::warn!("ignoring config file {}: {:#}", config_path.display(), e);
            Self::default()
        })
    }

    /// Loads configuration from an explicit file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to(&config_path)
    }

    /// Saves configuration to an explicit file, creating parent directories.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }

    /// Parses the configured dialect name.
    pub fn dialect(&self) -> Result<Dialect, QueryError> {
        self.dialect.parse()
    }
}
