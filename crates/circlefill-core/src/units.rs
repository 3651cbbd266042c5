//! Linear unit handling
//!
//! Geometry is stored in millimetres throughout. The unit type exists so the
//! export boundary can tag drawings explicitly and so lengths can be
//! formatted for display in the unit a downstream consumer expects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Linear unit declared on exported drawings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinearUnit {
    /// Millimetres (the model unit)
    #[default]
    Millimeters,
    /// Centimetres
    Centimeters,
    /// Inches
    Inches,
}

impl LinearUnit {
    /// Numeric code used by the DXF `$INSUNITS` header variable.
    pub fn insunits_code(self) -> i16 {
        match self {
            Self::Inches => 1,
            Self::Millimeters => 4,
            Self::Centimeters => 5,
        }
    }

    /// Abbreviated unit suffix.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Centimeters => "cm",
            Self::Inches => "in",
        }
    }

    /// Converts a millimetre length into this unit.
    pub fn from_mm(self, value_mm: f64) -> f64 {
        match self {
            Self::Millimeters => value_mm,
            Self::Centimeters => value_mm / 10.0,
            Self::Inches => value_mm / MM_PER_INCH,
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.suffix())
    }
}

impl FromStr for LinearUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeters" | "millimetres" => Ok(Self::Millimeters),
            "cm" | "centimeters" | "centimetres" => Ok(Self::Centimeters),
            "in" | "inch" | "inches" => Ok(Self::Inches),
            _ => Err(format!("Unknown linear unit: {}", s)),
        }
    }
}

/// Format a millimetre length for display
///
/// * `value_mm` - Value in millimetres
/// * `unit` - Target unit
pub fn format_length(value_mm: f64, unit: LinearUnit) -> String {
    format!("{:.3} {}", unit.from_mm(value_mm), unit.suffix())
}

/// Format a diameter label the way circles are annotated on screen (`Ø100mm`).
pub fn format_diameter_label(diameter_mm: f64) -> String {
    format!("Ø{}mm", diameter_mm.round() as i64)
}
