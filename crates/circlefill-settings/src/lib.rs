//! CircleFill Settings Crate
//!
//! Handles application configuration and its persistence as JSON or TOML.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, CircleSettings, Config, ExportSettings, RectangleSettings, ViewSettings,
};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
