//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! A [`ListConfig`] selects the ordering a list is built with and how much
//! it reports on stderr. Values resolve in this order (later overrides
//! earlier):
//! 1. Default values
//! 2. The config file
//!
//! # Config Location
//!
//! [`ListConfig::load`] reads an explicit path. [`ListConfig::from_env`]
//! reads `$SORTED_LIST_CONFIG` when it is set and names an existing file,
//! and falls back to defaults otherwise.
//!
//! # Example
//!
//! ```
//! use sorted_linked_list::core::config::ListConfig;
//! use sorted_linked_list::core::list::SortedList;
//!
//! let config = ListConfig::from_toml("order = \"descending\"").unwrap();
//! let mut list = SortedList::from_config(&config);
//! list.insert(1).unwrap();
//! list.insert(5).unwrap();
//! assert_eq!(list.to_string(), "[5, 1]");
//! ```

pub mod schema;

pub use schema::ListConfig;

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::ui::output;

/// Environment variable naming the config file.
pub const CONFIG_ENV_VAR: &str = "SORTED_LIST_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {message}")]
    ParseError {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.message, self.path.display())
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: ListConfig,
    /// The file the configuration came from, if any.
    pub path: Option<PathBuf>,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

impl ConfigLoadResult {
    /// Print collected warnings at the loaded config's verbosity.
    pub fn emit_warnings(&self) {
        let verbosity = self.config.verbosity();
        for warning in &self.warnings {
            output::warn(warning, verbosity);
        }
    }
}

impl ListConfig {
    /// Parse and validate configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` for malformed TOML or unknown keys,
    /// and `ConfigError::InvalidValue` if validation fails.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ListConfig = toml::from_str(contents).map_err(|e| ConfigError::ParseError {
            path: None,
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::from_toml(&contents).map_err(|e| match e {
            ConfigError::ParseError { message, .. } => ConfigError::ParseError {
                path: Some(path.to_path_buf()),
                message,
            },
            other => other,
        })
    }

    /// Load configuration from `$SORTED_LIST_CONFIG`.
    ///
    /// A missing variable yields defaults. A variable naming a file that
    /// does not exist yields defaults plus a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the named file exists but cannot be parsed.
    pub fn from_env() -> Result<ConfigLoadResult, ConfigError> {
        Self::load_from_var(std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from))
    }

    fn load_from_var(path: Option<PathBuf>) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();

        let Some(path) = path else {
            return Ok(ConfigLoadResult {
                config: ListConfig::default(),
                path: None,
                warnings,
            });
        };

        if !path.exists() {
            warnings.push(ConfigWarning {
                message: format!("{} names a missing file, using defaults", CONFIG_ENV_VAR),
                path,
            });
            return Ok(ConfigLoadResult {
                config: ListConfig::default(),
                path: None,
                warnings,
            });
        }

        let config = Self::load(&path)?;
        output::debug(
            format!("loaded list config from {}", path.display()),
            config.verbosity(),
        );
        Ok(ConfigLoadResult {
            config,
            path: Some(path),
            warnings,
        })
    }

    /// Write configuration atomically.
    ///
    /// Creates parent directories if needed. Writes to a temp file, then
    /// renames it over the destination.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let result = write_synced(&temp_path, contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })
            .and_then(|()| {
                fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
                    path: path.to_path_buf(),
                    source: e,
                })
            });

        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }
}

/// Create `path`, write `contents` and flush them to disk.
fn write_synced(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents)?;
    file.sync_all()
}
