//! Designer state for UI integration.
//!
//! Owns everything the presentation shell mutates: the boundary rectangle,
//! the circle collection, the current circle request, the view state and the
//! export options. Core functions only ever see snapshots of this state and
//! their results replace it wholesale.
//!
//! This module is split into submodules:
//! - `circles`: Adding, mixing and clearing circles
//! - `viewport`: Zoom, fit mode and surface size
//! - `file_io`: DXF export

mod circles;
mod file_io;
mod viewport;

pub use circles::PlacementReport;

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use circlefill_core::Result;

use crate::export::ExportOptions;
use crate::model::{Circle, Rectangle};
use crate::placement::{CircleRequest, PlacementEngine};
use crate::viewport::Viewport;

/// Designer state for UI integration
#[derive(Clone, Debug)]
pub struct DesignerState {
    pub rectangle: Rectangle,
    pub circles: Vec<Circle>,
    pub circle_request: CircleRequest,
    pub viewport: Viewport,
    pub export_options: ExportOptions,
    pub engine: PlacementEngine,
    pub last_export_path: Option<PathBuf>,
    rng: StdRng,
}

impl DesignerState {
    /// Creates a new designer state with an entropy-seeded random source.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Creates a designer state whose placements are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            rectangle: Rectangle::default(),
            circles: Vec::new(),
            circle_request: CircleRequest::default(),
            viewport: Viewport::default(),
            export_options: ExportOptions::default(),
            engine: PlacementEngine::default(),
            last_export_path: None,
            rng,
        }
    }

    /// Replaces the rectangle. Leaves the state untouched on invalid input.
    pub fn update_rectangle(&mut self, x0: f64, y0: f64, width: f64, height: f64) -> Result<()> {
        self.rectangle = Rectangle::new(x0, y0, width, height)?;
        debug!("Rectangle set to {:?}", self.rectangle);
        Ok(())
    }

    /// Replaces the circle request used by the next add.
    pub fn set_circle_request(&mut self, diameter: f64, count: usize, min_spacing: f64) -> Result<()> {
        self.circle_request = CircleRequest::new(diameter, count, min_spacing)?;
        Ok(())
    }

    /// Replaces the export layer and color.
    pub fn set_export_options(&mut self, layer: &str, color: u8) -> Result<()> {
        self.export_options = ExportOptions::new(layer, color)?;
        Ok(())
    }

    /// Restores the default rectangle, circle request and view, and removes
    /// all circles. Export options and the surface size are kept.
    pub fn reset_defaults(&mut self) {
        self.rectangle = Rectangle::default();
        self.circle_request = CircleRequest::default();
        self.viewport.reset();
        self.circles.clear();
        debug!("Designer reset to defaults");
    }
}

impl Default for DesignerState {
    fn default() -> Self {
        Self::new()
    }
}
