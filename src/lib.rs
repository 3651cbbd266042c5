//! # CircleFill
//!
//! Random constrained placement of circles inside a millimetre rectangle,
//! with an auto-fitting view transform and DXF export.
//!
//! ## Architecture
//!
//! CircleFill is organized as a workspace with multiple crates:
//!
//! 1. **circlefill-core** - Errors, units, fit modes and constants
//! 2. **circlefill-designer** - Geometry, placement, viewport, export, designer state
//! 3. **circlefill-settings** - Configuration persistence (JSON/TOML)
//! 4. **circlefill** - Command-line binary that integrates all crates

pub mod cli;

pub use circlefill_core::{Error, FitMode, LinearUnit, Result};
pub use circlefill_designer::{
    CadSink, Circle, CircleRequest, DesignerState, DxfSink, ExportGeometry, ExportOptions,
    PlacementEngine, PlacementReport, Point, Rectangle, ViewTransform, Viewport,
};
pub use circlefill_settings::{default_config_path, Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout for results
/// - RUST_LOG environment variable support (INFO when unset)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Builds a designer state from persisted settings.
///
/// Fails when a section holds values the designer would reject.
pub fn designer_from_config(config: &Config, seed: Option<u64>) -> Result<DesignerState> {
    let mut state = match seed {
        Some(seed) => DesignerState::with_seed(seed),
        None => DesignerState::new(),
    };

    let rect = &config.rectangle;
    state.update_rectangle(rect.x0, rect.y0, rect.width, rect.height)?;

    let circles = &config.circles;
    state.set_circle_request(circles.diameter, circles.count, circles.min_spacing)?;

    let view = &config.view;
    state.set_fit_mode(view.fit_mode);
    state.set_manual_px_per_mm(view.manual_px_per_mm);
    state.viewport.set_zoom(view.zoom);
    state.viewport.set_margin_px(view.margin_px)?;
    state.resize_surface(view.surface_width, view.surface_height);

    state.set_export_options(&config.export.layer, config.export.color)?;
    Ok(state)
}

/// Writes the designer's current settings back into `config`.
pub fn store_in_config(state: &DesignerState, config: &mut Config) {
    let rect = &state.rectangle;
    config.rectangle.x0 = rect.x0();
    config.rectangle.y0 = rect.y0();
    config.rectangle.width = rect.width;
    config.rectangle.height = rect.height;

    let request = &state.circle_request;
    config.circles.diameter = request.diameter;
    config.circles.count = request.count;
    config.circles.min_spacing = request.min_spacing;

    let viewport = &state.viewport;
    config.view.fit_mode = viewport.fit_mode();
    config.view.manual_px_per_mm = viewport.manual_px_per_mm();
    config.view.zoom = viewport.zoom();
    config.view.margin_px = viewport.margin_px();
    config.view.surface_width = viewport.canvas_width();
    config.view.surface_height = viewport.canvas_height();

    config.export.layer = state.export_options.layer.clone();
    config.export.color = state.export_options.color;
}
