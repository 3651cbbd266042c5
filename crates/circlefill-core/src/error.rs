//! Error handling for CircleFill
//!
//! Provides error types for all layers of the application:
//! - Parameter errors (rejected user input)
//! - Geometry errors (requests that can never fit)
//! - Export errors (CAD sink failures)
//!
//! A placement that succeeds only partially is not an error; it is reported
//! through the placement outcome instead.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Parameter error type
///
/// Raised when a numeric or textual input is out of range. The operation that
/// received it is aborted without changing any state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Value must be strictly positive
    #[error("Invalid parameter '{param}': {value} must be > 0")]
    NotPositive {
        /// The parameter name.
        param: String,
        /// The rejected value.
        value: f64,
    },

    /// Value must not be negative
    #[error("Invalid parameter '{param}': {value} must be >= 0")]
    Negative {
        /// The parameter name.
        param: String,
        /// The rejected value.
        value: f64,
    },

    /// Value is NaN or infinite
    #[error("Invalid parameter '{param}': not a finite number")]
    NotFinite {
        /// The parameter name.
        param: String,
    },

    /// Value outside an allowed closed range
    #[error("Invalid parameter '{param}': {value} not in [{min}, {max}]")]
    OutOfRange {
        /// The parameter name.
        param: String,
        /// The rejected value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Count must be at least one
    #[error("Invalid parameter '{param}': count must be > 0")]
    ZeroCount {
        /// The parameter name.
        param: String,
    },
}

impl ParameterError {
    /// Checks that `value` is finite and strictly positive.
    pub fn require_positive(param: &str, value: f64) -> std::result::Result<f64, Self> {
        if !value.is_finite() {
            return Err(Self::NotFinite {
                param: param.to_string(),
            });
        }
        if value <= 0.0 {
            return Err(Self::NotPositive {
                param: param.to_string(),
                value,
            });
        }
        Ok(value)
    }

    /// Checks that `value` is finite and not negative.
    pub fn require_non_negative(param: &str, value: f64) -> std::result::Result<f64, Self> {
        if !value.is_finite() {
            return Err(Self::NotFinite {
                param: param.to_string(),
            });
        }
        if value < 0.0 {
            return Err(Self::Negative {
                param: param.to_string(),
                value,
            });
        }
        Ok(value)
    }

    /// Checks that `value` is finite.
    pub fn require_finite(param: &str, value: f64) -> std::result::Result<f64, Self> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(Self::NotFinite {
                param: param.to_string(),
            })
        }
    }

    /// Checks that `value` lies in `[min, max]`.
    pub fn require_in_range(
        param: &str,
        value: f64,
        min: f64,
        max: f64,
    ) -> std::result::Result<f64, Self> {
        let value = Self::require_finite(param, value)?;
        if value < min || value > max {
            return Err(Self::OutOfRange {
                param: param.to_string(),
                value,
                min,
                max,
            });
        }
        Ok(value)
    }
}

/// Geometry error type
///
/// Raised before any sampling when a requested circle cannot fit inside the
/// rectangle at all.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// Circle diameter and/or spacing too large for the rectangle
    #[error(
        "Circle Ø{diameter} mm with {min_spacing} mm spacing cannot fit inside a {width} x {height} mm rectangle"
    )]
    Infeasible {
        /// Requested circle diameter in mm.
        diameter: f64,
        /// Requested edge-to-edge spacing in mm.
        min_spacing: f64,
        /// Rectangle width in mm.
        width: f64,
        /// Rectangle height in mm.
        height: f64,
    },
}

/// Export error type
///
/// Raised when the CAD sink rejects a write. The in-memory model is never
/// touched by an export, so these are always safe to retry.
#[derive(Error, Debug, Clone)]
pub enum ExportError {
    /// The sink could not write the drawing
    #[error("Failed to save DXF to {path}: {reason}")]
    SinkFailure {
        /// Destination path.
        path: String,
        /// Reason reported by the sink.
        reason: String,
    },

    /// The drawing could not be encoded
    #[error("Failed to encode drawing: {reason}")]
    Encoding {
        /// Reason reported by the encoder.
        reason: String,
    },
}

/// Main error type for CircleFill
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Parameter error
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is an invalid parameter error
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Error::Parameter(_))
    }

    /// Check if this is an infeasible geometry error
    pub fn is_infeasible_geometry(&self) -> bool {
        matches!(self, Error::Geometry(GeometryError::Infeasible { .. }))
    }

    /// Check if this is an export sink failure
    pub fn is_export_failure(&self) -> bool {
        matches!(self, Error::Export(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
