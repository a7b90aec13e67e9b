//! Configuration management for yamlselect.
//!
//! This module provides the `Config` type for loading and saving user
//! preferences. Configuration is stored in TOML format at
//! `~/.config/yamlselect/config.toml`.
//!
//! # Example
//!
//! ```
//! use yamlselect::config::Config;
//!
//! let config = Config::default();
//! assert!(!config.extend_keys);
//! assert_eq!(config.output_format, "plain");
//! ```

use serde::{Deserialize, Serialize};

use crate::selection::locate::DEFAULT_MAX_DEPTH;

/// User configuration for yamlselect.
///
/// All fields have defaults, so a config file only needs the settings it
/// changes. Command line flags override these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Widen a selected first key to its whole mapping
    #[serde(default)]
    pub extend_keys: bool,

    /// Deepest nesting the resolver descends into before giving up
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,

    /// Output format: "plain" or "json"
    #[serde(default = "default_output_format")]
    pub output_format: String,
}

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}

fn default_output_format() -> String {
    "plain".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extend_keys: false,
            max_depth: default_max_depth(),
            output_format: default_output_format(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/yamlselect/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("yamlselect");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
                log::warn!("Ignoring invalid config {}: {}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                log::warn!("Could not read config {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("extend_keys = true\n").unwrap();
        assert!(config.extend_keys);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(config.output_format, "plain");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }
}
