//! Export transform from model space to CAD space.
//!
//! CAD drawings use Y increasing upward while the model uses Y increasing
//! downward. Every Y coordinate is flipped against the height of the reference
//! drawing surface expressed in millimetres:
//!
//! ```text
//! y_cad = canvas_height_mm - y_model
//! canvas_height_mm = surface_height_px / px_per_mm
//! ```
//!
//! The resulting primitives are handed to a [`CadSink`], which owns the actual
//! file encoding.

use serde::{Deserialize, Serialize};
use tracing::debug;

use circlefill_core::constants::{DEFAULT_COLOR_INDEX, DEFAULT_LAYER};
use circlefill_core::{LinearUnit, ParameterError, Result};

use crate::model::{Circle, Point, Rectangle};

/// Layer and color applied to every exported primitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    pub layer: String,
    /// AutoCAD color index, 1..=255.
    pub color: u8,
}

impl ExportOptions {
    /// Builds options, falling back to layer `"0"` when `layer` is blank.
    pub fn new(layer: &str, color: u8) -> Result<Self> {
        if color == 0 {
            return Err(ParameterError::OutOfRange {
                param: "color".to_string(),
                value: 0.0,
                min: 1.0,
                max: 255.0,
            }
            .into());
        }
        let layer = layer.trim();
        Ok(Self {
            layer: if layer.is_empty() {
                DEFAULT_LAYER.to_string()
            } else {
                layer.to_string()
            },
            color,
        })
    }

    pub fn attributes(&self) -> EntityAttributes<'_> {
        EntityAttributes {
            layer: &self.layer,
            color: self.color,
        }
    }
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            layer: DEFAULT_LAYER.to_string(),
            color: DEFAULT_COLOR_INDEX,
        }
    }
}

/// Attributes attached to a single primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityAttributes<'a> {
    pub layer: &'a str,
    pub color: u8,
}

/// A circle in CAD coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportCircle {
    pub center: Point,
    pub radius: f64,
}

/// Rectangle and circles in CAD coordinates, millimetres.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportGeometry {
    /// Closed outline in model corner order (top-left first).
    pub outline: [Point; 4],
    pub circles: Vec<ExportCircle>,
    pub canvas_height_mm: f64,
    pub unit: LinearUnit,
}

/// Height of the reference surface in millimetres.
///
/// A non-positive or non-finite scale falls back to the raw pixel height.
pub fn canvas_height_mm(reference_scale: f64, reference_surface_height_px: f64) -> f64 {
    if reference_scale.is_finite() && reference_scale > 0.0 {
        reference_surface_height_px / reference_scale
    } else {
        reference_surface_height_px
    }
}

/// Flips the model into CAD space.
pub fn to_export_space(
    rect: &Rectangle,
    circles: &[Circle],
    reference_scale: f64,
    reference_surface_height_px: f64,
) -> ExportGeometry {
    let height_mm = canvas_height_mm(reference_scale, reference_surface_height_px);
    let flip = |p: Point| Point::new(p.x, height_mm - p.y);

    ExportGeometry {
        outline: rect.corners().map(flip),
        circles: circles
            .iter()
            .map(|c| ExportCircle {
                center: flip(c.center),
                radius: c.radius(),
            })
            .collect(),
        canvas_height_mm: height_mm,
        unit: LinearUnit::Millimeters,
    }
}

/// Destination for exported primitives.
pub trait CadSink {
    /// Declares the drawing's linear unit.
    fn set_units(&mut self, unit: LinearUnit);

    /// Creates `name` with `color` as its default unless it already exists.
    fn ensure_layer(&mut self, name: &str, color: u8);

    fn add_closed_polyline(&mut self, points: &[Point], attributes: EntityAttributes<'_>);

    fn add_circle(&mut self, center: Point, radius: f64, attributes: EntityAttributes<'_>);
}

/// Sends `geometry` to `sink`: unit first, then the layer, then the outline
/// and one circle per entry.
pub fn write_geometry<S: CadSink + ?Sized>(
    geometry: &ExportGeometry,
    options: &ExportOptions,
    sink: &mut S,
) {
    sink.set_units(geometry.unit);
    sink.ensure_layer(&options.layer, options.color);

    let attributes = options.attributes();
    sink.add_closed_polyline(&geometry.outline, attributes);
    for circle in &geometry.circles {
        sink.add_circle(circle.center, circle.radius, attributes);
    }
    debug!(
        "Wrote outline and {} circles to layer '{}'",
        geometry.circles.len(),
        options.layer
    );
}
