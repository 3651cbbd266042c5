//! Application-wide constants.

/// Margin in device pixels kept around the rectangle when auto-fitting.
pub const CANVAS_MARGIN_PX: f64 = 24.0;

/// Default drawing surface width in device pixels.
pub const CANVAS_DEFAULT_WIDTH: f64 = 800.0;

/// Default drawing surface height in device pixels.
pub const CANVAS_DEFAULT_HEIGHT: f64 = 600.0;

/// Smallest allowed zoom multiplier.
pub const ZOOM_MIN: f64 = 0.05;

/// Largest allowed zoom multiplier.
pub const ZOOM_MAX: f64 = 10.0;

/// Factor applied by a single zoom in/out step.
pub const ZOOM_STEP: f64 = 1.2;

/// Manual pixels-per-millimetre used when nothing valid is configured.
pub const FALLBACK_PX_PER_MM: f64 = 1.0;

/// Default manual pixels-per-millimetre.
pub const DEFAULT_MANUAL_PX_PER_MM: f64 = 3.0;

/// Rectangle extents below this are treated as this value when fitting.
pub const MIN_EXTENT_MM: f64 = 1e-6;

/// Random draws allowed per circle when adding new circles.
pub const PLACE_NEW_MAX_ATTEMPTS: usize = 600;

/// Random draws allowed per circle when repacking ("mix").
pub const REPACK_MAX_ATTEMPTS: usize = 800;

/// Default rectangle origin X in mm.
pub const DEFAULT_RECT_X0_MM: f64 = 10.0;

/// Default rectangle origin Y in mm.
pub const DEFAULT_RECT_Y0_MM: f64 = 10.0;

/// Default rectangle width in mm.
pub const DEFAULT_RECT_WIDTH_MM: f64 = 800.0;

/// Default rectangle height in mm.
pub const DEFAULT_RECT_HEIGHT_MM: f64 = 2000.0;

/// Default circle diameter in mm.
pub const DEFAULT_CIRCLE_DIAMETER_MM: f64 = 100.0;

/// Default number of circles requested per batch.
pub const DEFAULT_CIRCLE_COUNT: usize = 5;

/// Default edge-to-edge spacing in mm.
pub const DEFAULT_MIN_SPACING_MM: f64 = 20.0;

/// Default CAD layer name.
pub const DEFAULT_LAYER: &str = "0";

/// Default CAD color index (white/black).
pub const DEFAULT_COLOR_INDEX: u8 = 7;

/// Number of recent export paths remembered.
pub const RECENT_EXPORTS_COUNT: usize = 10;
