//! Export operations for designer state.

use std::path::Path;

use circlefill_core::{Error, Result};

use super::DesignerState;
use crate::dxf_export::DxfSink;
use crate::export::{to_export_space, write_geometry, CadSink, ExportGeometry};

impl DesignerState {
    /// Geometry in CAD space, flipped against the current surface height at
    /// the current effective scale.
    pub fn export_geometry(&self) -> ExportGeometry {
        let transform = self.view_transform();
        to_export_space(
            &self.rectangle,
            &self.circles,
            transform.px_per_mm,
            self.viewport.canvas_height(),
        )
    }

    /// Sends the current geometry to any CAD sink.
    pub fn export_to_sink<S: CadSink + ?Sized>(&self, sink: &mut S) {
        write_geometry(&self.export_geometry(), &self.export_options, sink);
    }

    /// Writes the current geometry to a DXF file.
    ///
    /// A failed write leaves the design untouched and is returned as an
    /// export error. An empty path is rejected before anything is encoded.
    pub fn save_dxf(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::other("No export path given"));
        }
        let mut sink = DxfSink::new();
        self.export_to_sink(&mut sink);
        sink.save_file(path)?;
        self.last_export_path = Some(path.to_path_buf());
        Ok(())
    }
}
