//! Error types for the settings crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while locating, reading or writing the config file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Cannot read config {path}: {reason}")]
    Load { path: PathBuf, reason: String },

    #[error("Cannot write config {path}: {reason}")]
    Save { path: PathBuf, reason: String },

    /// No platform config directory could be resolved.
    #[error("No config directory available on this platform")]
    NoConfigDirectory,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot encode TOML config: {0}")]
    TomlWrite(#[from] toml::ser::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] ConfigError),
}

/// A config that parsed but cannot be used.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Only `.json` and `.toml` are understood.
    #[error("Unsupported config format '{0}', expected .json or .toml")]
    UnsupportedFormat(String),

    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },
}

impl ConfigError {
    pub(crate) fn out_of_range(key: &str, value: impl ToString) -> Self {
        Self::ValueOutOfRange {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

pub type SettingsResult<T> = Result<T, SettingsError>;

pub type ConfigResult<T> = Result<T, ConfigError>;
