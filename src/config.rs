//! Configuration System
//!
//! File- and environment-driven defaults for the tree mutator. Explicit CLI
//! flags always win; the config file only supplies the values the caller did
//! not pass. Sources, highest to lowest: `RESTRING_*` environment variables,
//! the `--config` file (or the global `~/.config/restring/config.toml` when
//! no explicit file is given), built-in defaults.

use crate::error::MutateError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestringConfig {
    /// Maximum number of files processed before the traversal aborts
    #[serde(default = "default_max_files")]
    pub max_files: usize,

    /// Directory names excluded from traversal
    #[serde(default = "default_skip_dirs")]
    pub skip_dirs: Vec<String>,

    /// Match skip directory names case-insensitively
    #[serde(default)]
    pub skip_ignore_case: bool,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_max_files() -> usize {
    100
}

fn default_skip_dirs() -> Vec<String> {
    vec![".git".to_string()]
}

impl Default for RestringConfig {
    fn default() -> Self {
        Self {
            max_files: default_max_files(),
            skip_dirs: default_skip_dirs(),
            skip_ignore_case: false,
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration loader facade
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from an explicit file, or from the global config
    /// file when none is given. Missing files are not an error; the built-in
    /// defaults apply.
    pub fn load(explicit_path: Option<&Path>) -> Result<RestringConfig, MutateError> {
        let mut builder = Config::builder();

        if let Some(path) = explicit_path {
            if !path.exists() {
                return Err(MutateError::Config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path));
        } else if let Some(global) = global_config_path() {
            if global.exists() {
                builder = builder.add_source(File::from(global));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix("RESTRING")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder
            .build()
            .map_err(|e| MutateError::Config(format!("Failed to load config: {}", e)))?;

        config
            .try_deserialize()
            .map_err(|e| MutateError::Config(format!("Invalid config: {}", e)))
    }
}

/// Path to the global config file: `$XDG_CONFIG_HOME/restring/config.toml`,
/// falling back to `~/.config/restring/config.toml`.
pub fn global_config_path() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg).join("restring").join("config.toml"));
    }
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("restring")
            .join("config.toml")
    })
}
