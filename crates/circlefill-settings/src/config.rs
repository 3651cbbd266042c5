//! Configuration and settings management for CircleFill
//!
//! Provides configuration file handling and validation. Supports JSON and
//! TOML file formats stored in the platform-specific config directory.
//!
//! Configuration is organized into logical sections:
//! - Rectangle (origin and size in mm)
//! - Circles (diameter, batch count, spacing)
//! - View (fit mode, manual scale, zoom, surface size)
//! - Export (layer, color, output directory)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use circlefill_core::constants::{
    CANVAS_DEFAULT_HEIGHT, CANVAS_DEFAULT_WIDTH, CANVAS_MARGIN_PX, DEFAULT_CIRCLE_COUNT,
    DEFAULT_CIRCLE_DIAMETER_MM, DEFAULT_COLOR_INDEX, DEFAULT_LAYER, DEFAULT_MANUAL_PX_PER_MM,
    DEFAULT_MIN_SPACING_MM, DEFAULT_RECT_HEIGHT_MM, DEFAULT_RECT_WIDTH_MM, DEFAULT_RECT_X0_MM,
    DEFAULT_RECT_Y0_MM, RECENT_EXPORTS_COUNT, ZOOM_MAX, ZOOM_MIN,
};
use circlefill_core::FitMode;

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};

const APP_DIR: &str = "circlefill";
const CONFIG_FILE: &str = "config.toml";

/// Boundary rectangle settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RectangleSettings {
    /// Top-left X in mm
    pub x0: f64,
    /// Top-left Y in mm
    pub y0: f64,
    /// Width in mm
    pub width: f64,
    /// Height in mm
    pub height: f64,
}

impl Default for RectangleSettings {
    fn default() -> Self {
        Self {
            x0: DEFAULT_RECT_X0_MM,
            y0: DEFAULT_RECT_Y0_MM,
            width: DEFAULT_RECT_WIDTH_MM,
            height: DEFAULT_RECT_HEIGHT_MM,
        }
    }
}

/// Circle batch settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CircleSettings {
    /// Diameter in mm
    pub diameter: f64,
    /// Circles requested per batch
    pub count: usize,
    /// Minimum edge-to-edge spacing in mm
    pub min_spacing: f64,
}

impl Default for CircleSettings {
    fn default() -> Self {
        Self {
            diameter: DEFAULT_CIRCLE_DIAMETER_MM,
            count: DEFAULT_CIRCLE_COUNT,
            min_spacing: DEFAULT_MIN_SPACING_MM,
        }
    }
}

/// View preference settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewSettings {
    pub fit_mode: FitMode,
    /// Manual scale in px/mm
    pub manual_px_per_mm: f64,
    pub zoom: f64,
    /// Margin around the rectangle when auto-fitting
    pub margin_px: f64,
    /// Reference surface width in pixels
    pub surface_width: f64,
    /// Reference surface height in pixels; also drives the export Y flip
    pub surface_height: f64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            fit_mode: FitMode::Auto,
            manual_px_per_mm: DEFAULT_MANUAL_PX_PER_MM,
            zoom: 1.0,
            margin_px: CANVAS_MARGIN_PX,
            surface_width: CANVAS_DEFAULT_WIDTH,
            surface_height: CANVAS_DEFAULT_HEIGHT,
        }
    }
}

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// CAD layer for every entity
    pub layer: String,
    /// AutoCAD color index (1-255)
    pub color: u8,
    /// Default output directory
    pub output_directory: PathBuf,
    /// Number of recent exports to track
    pub recent_exports_count: usize,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            layer: DEFAULT_LAYER.to_string(),
            color: DEFAULT_COLOR_INDEX,
            output_directory: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            recent_exports_count: RECENT_EXPORTS_COUNT,
        }
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Recent export paths, most recent first
    pub recent_exports: Vec<PathBuf>,
    pub rectangle: RectangleSettings,
    pub circles: CircleSettings,
    pub view: ViewSettings,
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::Load {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Loads `path` when it exists, otherwise returns the defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match Format::from_path(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Save {
                path: parent.to_path_buf(),
                reason: e.to_string(),
            })?;
        }
        std::fs::write(path, content).map_err(|e| SettingsError::Save {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        let rect = &self.rectangle;
        if !rect.x0.is_finite() {
            return Err(ConfigError::out_of_range("rectangle.x0", rect.x0));
        }
        if !rect.y0.is_finite() {
            return Err(ConfigError::out_of_range("rectangle.y0", rect.y0));
        }
        require_positive("rectangle.width", rect.width)?;
        require_positive("rectangle.height", rect.height)?;

        require_positive("circles.diameter", self.circles.diameter)?;
        if self.circles.count == 0 {
            return Err(ConfigError::out_of_range("circles.count", 0));
        }
        let spacing = self.circles.min_spacing;
        if !spacing.is_finite() || spacing < 0.0 {
            return Err(ConfigError::out_of_range("circles.min_spacing", spacing));
        }

        let view = &self.view;
        require_positive("view.manual_px_per_mm", view.manual_px_per_mm)?;
        if !(ZOOM_MIN..=ZOOM_MAX).contains(&view.zoom) {
            return Err(ConfigError::out_of_range("view.zoom", view.zoom));
        }
        if !view.margin_px.is_finite() || view.margin_px < 0.0 {
            return Err(ConfigError::out_of_range("view.margin_px", view.margin_px));
        }
        require_positive("view.surface_width", view.surface_width)?;
        require_positive("view.surface_height", view.surface_height)?;

        if self.export.color == 0 {
            return Err(ConfigError::out_of_range("export.color", 0));
        }
        if self.export.recent_exports_count == 0 {
            return Err(ConfigError::out_of_range("export.recent_exports_count", 0));
        }

        Ok(())
    }

    /// Add path to the recent exports list
    pub fn add_recent_export(&mut self, path: PathBuf) {
        // Remove if already in list
        self.recent_exports.retain(|p| p != &path);

        self.recent_exports.insert(0, path);
        self.recent_exports
            .truncate(self.export.recent_exports_count);
    }
}

fn require_positive(key: &str, value: f64) -> ConfigResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, value))
    }
}

/// Default config file location, `<config dir>/circlefill/config.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
        .ok_or(SettingsError::NoConfigDirectory)
}
