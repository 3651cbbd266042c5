//! # CircleFill Core
//!
//! Core types shared by every CircleFill crate: the unified error type,
//! linear units, view fit modes and the application-wide constants.

pub mod constants;
pub mod error;
pub mod units;
pub mod view;

pub use error::{Error, ExportError, GeometryError, ParameterError, Result};
pub use units::LinearUnit;
pub use view::FitMode;
