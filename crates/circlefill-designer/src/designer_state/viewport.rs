//! Viewport operations (zoom, fit mode, surface size) for designer state.

use circlefill_core::FitMode;

use super::DesignerState;
use crate::viewport::ViewTransform;

impl DesignerState {
    /// Zooms in.
    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    /// Zooms out.
    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    /// Resets zoom to 100%.
    pub fn zoom_reset(&mut self) {
        self.viewport.reset_zoom();
    }

    /// Gets the current zoom level.
    pub fn zoom(&self) -> f64 {
        self.viewport.zoom()
    }

    pub fn set_fit_mode(&mut self, fit_mode: FitMode) {
        self.viewport.set_fit_mode(fit_mode);
    }

    pub fn set_manual_px_per_mm(&mut self, px_per_mm: f64) {
        self.viewport.set_manual_px_per_mm(px_per_mm);
    }

    /// Updates the drawing surface size after a resize.
    pub fn resize_surface(&mut self, width: f64, height: f64) {
        self.viewport.set_canvas_size(width, height);
    }

    /// Transform for drawing the current rectangle and circles.
    pub fn view_transform(&self) -> ViewTransform {
        self.viewport.transform(&self.rectangle)
    }

    /// Scale indicator text for the current view.
    pub fn scale_label(&self) -> String {
        self.viewport.scale_label(&self.rectangle)
    }
}
