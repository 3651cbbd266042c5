//! # CircleFill Designer
//!
//! Fills a millimetre rectangle with randomly placed circles and exports the
//! result as DXF.
//!
//! ## Core Components
//!
//! - **Model**: `Rectangle` and `Circle` value types in millimetres
//! - **Placement**: rejection-sampling placement and full repacking ("mix")
//! - **Viewport**: model-to-device transform with auto-fit, manual scale and zoom
//! - **Export**: Y-axis flip into CAD space and a DXF sink
//! - **Designer State**: the shell-owned state tying it all together
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (owned by the shell)
//!   ├── Rectangle + Vec<Circle>
//!   ├── PlacementEngine (pure, rng injected)
//!   ├── Viewport ── ViewTransform (device mapping)
//!   └── ExportOptions ── ExportGeometry ── CadSink (DxfSink)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use circlefill_designer::DesignerState;
//!
//! let mut state = DesignerState::with_seed(7);
//! state.update_rectangle(10.0, 10.0, 800.0, 2000.0)?;
//! let report = state.add_circles(100.0, 5, 20.0)?;
//! if let Some(notice) = report.notice() {
//!     eprintln!("{notice}");
//! }
//! state.save_dxf("circles.dxf")?;
//! ```

pub mod designer_state;
pub mod dxf_export;
pub mod export;
pub mod model;
pub mod placement;
pub mod viewport;

pub use designer_state::{DesignerState, PlacementReport};
pub use dxf_export::DxfSink;
pub use export::{
    canvas_height_mm, to_export_space, write_geometry, CadSink, EntityAttributes, ExportCircle,
    ExportGeometry, ExportOptions,
};
pub use model::{Circle, DesignerShape, Point, Rectangle};
pub use placement::{place_new, repack, CircleRequest, PlacementEngine, PlacementOutcome};
pub use viewport::{compute_transform, mm_to_device, ViewTransform, Viewport};

pub use circlefill_core::{Error, FitMode, LinearUnit, Result};
