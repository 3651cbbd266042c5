//! DXF writer backed by the `dxf` crate.
//!
//! Produces an R2010 drawing with `$INSUNITS` set from the declared unit, one
//! LWPOLYLINE for the rectangle and one CIRCLE per circle.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use dxf::entities::{Circle as DxfCircle, Entity, EntityType, LwPolyline};
use dxf::enums::{AcadVersion, Units};
use dxf::tables::Layer;
use dxf::{Color, Drawing, LwPolylineVertex};
use tracing::{debug, info};

use circlefill_core::{ExportError, LinearUnit, Result};

use crate::export::{CadSink, EntityAttributes};
use crate::model::Point;

/// [`CadSink`] that accumulates entities into a DXF drawing.
pub struct DxfSink {
    drawing: Drawing,
}

impl DxfSink {
    pub fn new() -> Self {
        let mut drawing = Drawing::new();
        drawing.header.version = AcadVersion::R2010;
        Self { drawing }
    }

    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn into_drawing(self) -> Drawing {
        self.drawing
    }

    /// Encodes the drawing into `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.drawing.save(writer).map_err(|e| ExportError::Encoding {
            reason: e.to_string(),
        })?;
        Ok(())
    }

    /// Writes the drawing to `path`, creating or truncating the file.
    pub fn save_file(&self, path: &Path) -> Result<()> {
        let sink_failure = |reason: String| ExportError::SinkFailure {
            path: path.display().to_string(),
            reason,
        };

        let file = File::create(path).map_err(|e| sink_failure(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        self.drawing
            .save(&mut writer)
            .map_err(|e| sink_failure(e.to_string()))?;
        writer.flush().map_err(|e| sink_failure(e.to_string()))?;

        info!("Saved DXF (mm) to: {}", path.display());
        Ok(())
    }

    fn add_entity(&mut self, specific: EntityType, attributes: EntityAttributes<'_>) {
        let mut entity = Entity::new(specific);
        entity.common.layer = attributes.layer.to_string();
        entity.common.color = Color::from_index(attributes.color);
        self.drawing.add_entity(entity);
    }
}

impl Default for DxfSink {
    fn default() -> Self {
        Self::new()
    }
}

fn dxf_units(unit: LinearUnit) -> Units {
    match unit {
        LinearUnit::Millimeters => Units::Millimeters,
        LinearUnit::Centimeters => Units::Centimeters,
        LinearUnit::Inches => Units::Inches,
    }
}

impl CadSink for DxfSink {
    fn set_units(&mut self, unit: LinearUnit) {
        self.drawing.header.default_drawing_units = dxf_units(unit);
    }

    fn ensure_layer(&mut self, name: &str, color: u8) {
        if self.drawing.layers().any(|layer| layer.name == name) {
            return;
        }
        debug!("Creating layer '{}' with color {}", name, color);
        self.drawing.add_layer(Layer {
            name: name.to_string(),
            color: Color::from_index(color),
            ..Default::default()
        });
    }

    fn add_closed_polyline(&mut self, points: &[Point], attributes: EntityAttributes<'_>) {
        let mut polyline = LwPolyline::default();
        polyline.vertices = points
            .iter()
            .map(|p| LwPolylineVertex {
                x: p.x,
                y: p.y,
                ..Default::default()
            })
            .collect();
        polyline.set_is_closed(true);
        self.add_entity(EntityType::LwPolyline(polyline), attributes);
    }

    fn add_circle(&mut self, center: Point, radius: f64, attributes: EntityAttributes<'_>) {
        let circle = DxfCircle::new(dxf::Point::new(center.x, center.y, 0.0), radius);
        self.add_entity(EntityType::Circle(circle), attributes);
    }
}
