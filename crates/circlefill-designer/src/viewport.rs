//! Viewport and coordinate transformation for canvas rendering.
//!
//! Handles conversion between model coordinates (millimetres, origin top-left,
//! +Y down) and device coordinates (pixels on the drawing surface, same
//! orientation). The mapping is a uniform scale plus an offset:
//!
//! ```text
//! pixel_x = x_mm * px_per_mm + x_offset
//! pixel_y = y_mm * px_per_mm + y_offset
//! ```
//!
//! In auto-fit mode the scale is derived from the surface size and the
//! rectangle bounds; in manual mode a fixed pixels-per-millimetre is used and
//! the model origin sits on the surface origin. Zoom multiplies either scale.

use std::fmt;

use circlefill_core::constants::{
    CANVAS_DEFAULT_HEIGHT, CANVAS_DEFAULT_WIDTH, CANVAS_MARGIN_PX, DEFAULT_MANUAL_PX_PER_MM,
    FALLBACK_PX_PER_MM, MIN_EXTENT_MM, ZOOM_MAX, ZOOM_MIN, ZOOM_STEP,
};
use circlefill_core::{FitMode, ParameterError, Result};

use crate::model::{DesignerShape, Point, Rectangle};

/// Affine model-to-device mapping for one redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub px_per_mm: f64,
    pub x_offset_px: f64,
    pub y_offset_px: f64,
}

impl ViewTransform {
    /// Converts model coordinates to device coordinates.
    pub fn mm_to_device(&self, x_mm: f64, y_mm: f64) -> (f64, f64) {
        mm_to_device(x_mm, y_mm, self.px_per_mm, self.x_offset_px, self.y_offset_px)
    }

    /// Converts device coordinates back to model coordinates.
    pub fn device_to_mm(&self, x_px: f64, y_px: f64) -> Point {
        Point::new(
            (x_px - self.x_offset_px) / self.px_per_mm,
            (y_px - self.y_offset_px) / self.px_per_mm,
        )
    }

    /// Converts a model length (radius, grid step) to device units.
    pub fn length_to_device(&self, length_mm: f64) -> f64 {
        length_mm * self.px_per_mm
    }
}

/// Maps a model point to the device surface.
pub fn mm_to_device(x_mm: f64, y_mm: f64, scale: f64, x_offset: f64, y_offset: f64) -> (f64, f64) {
    (x_mm * scale + x_offset, y_mm * scale + y_offset)
}

/// Computes the effective scale and offsets for drawing `rect`.
///
/// # Arguments
/// * `surface_width`, `surface_height` - Drawing surface size in pixels
/// * `margin_px` - Space kept around the rectangle when auto-fitting
/// * `fit_mode` - Auto-fit or manual scale
/// * `manual_px_per_mm` - Manual scale; non-positive or non-finite means 1.0
/// * `zoom` - Multiplier applied on top of the base scale
pub fn compute_transform(
    rect: &Rectangle,
    surface_width: f64,
    surface_height: f64,
    margin_px: f64,
    fit_mode: FitMode,
    manual_px_per_mm: f64,
    zoom: f64,
) -> ViewTransform {
    match fit_mode {
        FitMode::Auto => {
            let (min_x, min_y, max_x, max_y) = rect.bounds();
            let width_mm = (max_x - min_x).max(MIN_EXTENT_MM);
            let height_mm = (max_y - min_y).max(MIN_EXTENT_MM);

            let avail_w = (surface_width - 2.0 * margin_px).max(1.0);
            let avail_h = (surface_height - 2.0 * margin_px).max(1.0);

            // Use the smaller scale so both dimensions fit
            let mut base = (avail_w / width_mm).min(avail_h / height_mm);
            if !base.is_finite() || base <= 0.0 {
                base = FALLBACK_PX_PER_MM;
            }

            let px_per_mm = base * zoom;
            ViewTransform {
                px_per_mm,
                x_offset_px: margin_px - min_x * px_per_mm,
                y_offset_px: margin_px - min_y * px_per_mm,
            }
        }
        FitMode::Manual => ViewTransform {
            px_per_mm: sanitize_px_per_mm(manual_px_per_mm) * zoom,
            x_offset_px: 0.0,
            y_offset_px: 0.0,
        },
    }
}

/// Replaces an unusable manual scale with the fallback.
pub fn sanitize_px_per_mm(px_per_mm: f64) -> f64 {
    if px_per_mm.is_finite() && px_per_mm > 0.0 {
        px_per_mm
    } else {
        FALLBACK_PX_PER_MM
    }
}

/// Represents the view state: surface size, fit mode, manual scale and zoom.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    fit_mode: FitMode,
    manual_px_per_mm: f64,
    zoom: f64,
    margin_px: f64,
    canvas_width: f64,
    canvas_height: f64,
}

impl Viewport {
    /// Creates a new auto-fit viewport for a surface of the given size.
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            fit_mode: FitMode::Auto,
            manual_px_per_mm: DEFAULT_MANUAL_PX_PER_MM,
            zoom: 1.0,
            margin_px: CANVAS_MARGIN_PX,
            canvas_width: canvas_width.max(1.0),
            canvas_height: canvas_height.max(1.0),
        }
    }

    /// Gets the canvas width.
    pub fn canvas_width(&self) -> f64 {
        self.canvas_width
    }

    /// Gets the canvas height.
    pub fn canvas_height(&self) -> f64 {
        self.canvas_height
    }

    /// Sets the canvas dimensions (typically called when window resizes).
    /// Each dimension is floored at one pixel.
    pub fn set_canvas_size(&mut self, width: f64, height: f64) {
        self.canvas_width = if width.is_finite() { width.max(1.0) } else { 1.0 };
        self.canvas_height = if height.is_finite() { height.max(1.0) } else { 1.0 };
    }

    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    pub fn set_fit_mode(&mut self, fit_mode: FitMode) {
        self.fit_mode = fit_mode;
    }

    pub fn manual_px_per_mm(&self) -> f64 {
        self.manual_px_per_mm
    }

    /// Sets the manual scale. Invalid values are stored as 1.0 so the
    /// displayed setting matches what is actually used.
    pub fn set_manual_px_per_mm(&mut self, px_per_mm: f64) {
        self.manual_px_per_mm = sanitize_px_per_mm(px_per_mm);
    }

    pub fn margin_px(&self) -> f64 {
        self.margin_px
    }

    pub fn set_margin_px(&mut self, margin_px: f64) -> Result<()> {
        self.margin_px = ParameterError::require_non_negative("margin_px", margin_px)?;
        Ok(())
    }

    /// Gets the current zoom level (1.0 = 100%).
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom level, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        }
    }

    /// Zooms in by one step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom * ZOOM_STEP);
    }

    /// Zooms out by one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / ZOOM_STEP);
    }

    /// Resets zoom to 1.0 (100%).
    pub fn reset_zoom(&mut self) {
        self.zoom = 1.0;
    }

    /// Computes the transform for drawing `rect` with the current state.
    pub fn transform(&self, rect: &Rectangle) -> ViewTransform {
        compute_transform(
            rect,
            self.canvas_width,
            self.canvas_height,
            self.margin_px,
            self.fit_mode,
            self.manual_px_per_mm,
            self.zoom,
        )
    }

    /// Text for the scale indicator, e.g. `Scale: 0.300 px/mm  (100%)`.
    pub fn scale_label(&self, rect: &Rectangle) -> String {
        let transform = self.transform(rect);
        let zoom_pct = (self.zoom * 100.0).round() as i64;
        if transform.px_per_mm.is_finite() {
            format!("Scale: {:.3} px/mm  ({}%)", transform.px_per_mm, zoom_pct)
        } else {
            format!("Scale: -- px/mm  ({}%)", zoom_pct)
        }
    }

    /// Resets fit mode, manual scale and zoom. The surface size is kept.
    pub fn reset(&mut self) {
        self.fit_mode = FitMode::Auto;
        self.manual_px_per_mm = DEFAULT_MANUAL_PX_PER_MM;
        self.zoom = 1.0;
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fit: {} | Zoom: {:.2}x | Surface: {:.0}x{:.0}",
            self.fit_mode, self.zoom, self.canvas_width, self.canvas_height
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(CANVAS_DEFAULT_WIDTH, CANVAS_DEFAULT_HEIGHT)
    }
}
