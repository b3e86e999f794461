//! Configuration for stash
//!
//! Centralized configuration with sensible defaults. Core operations consume
//! a `Config` value; only `Config::from_env` touches the process environment,
//! so the store logic itself stays free of ambient state.

use std::env;
use std::path::PathBuf;

/// Environment variable naming the store file
pub const ENV_STORE_FILE: &str = "STASH_FILE";

/// Environment variable overriding the `list` line template
pub const ENV_LIST_FORMAT: &str = "STASH_LIST_FORMAT";

/// Environment variable overriding the `list` date format (strftime)
pub const ENV_DATE_FORMAT: &str = "STASH_DATE_FORMAT";

/// Main configuration for a stash store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the flat store file. Created empty on first read if missing.
    pub store_path: PathBuf,

    // -------------------------------------------------------------------------
    // Display Configuration
    // -------------------------------------------------------------------------
    /// Template for one `list` line; `{key}` and `{date}` are substituted
    pub list_format: String,

    /// strftime format for `{date}` in `list` output
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
            list_format: "{key}  {date}".to_string(),
            date_format: "%Y-%m-%d %H:%M".to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Defaults overridden by `STASH_FILE`, `STASH_LIST_FORMAT`, and
    /// `STASH_DATE_FORMAT` where set
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = env::var(ENV_STORE_FILE) {
            if !path.is_empty() {
                config.store_path = PathBuf::from(path);
            }
        }
        if let Ok(fmt) = env::var(ENV_LIST_FORMAT) {
            if !fmt.is_empty() {
                config.list_format = fmt;
            }
        }
        if let Ok(fmt) = env::var(ENV_DATE_FORMAT) {
            if !fmt.is_empty() {
                config.date_format = fmt;
            }
        }
        config
    }
}

/// `$HOME/.stash`, or `./.stash` when no home directory is known
fn default_store_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".stash")
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the store file path
    pub fn store_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.store_path = path.into();
        self
    }

    /// Set the `list` line template
    pub fn list_format(mut self, fmt: impl Into<String>) -> Self {
        self.config.list_format = fmt.into();
        self
    }

    /// Set the `list` date format (strftime)
    pub fn date_format(mut self, fmt: impl Into<String>) -> Self {
        self.config.date_format = fmt.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
