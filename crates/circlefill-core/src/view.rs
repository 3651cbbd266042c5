//! View fit mode selection.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How pixels-per-millimetre is chosen for the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Derive the scale from the surface size and the rectangle bounds.
    #[default]
    Auto,
    /// Use the configured pixels-per-millimetre, uncentered.
    Manual,
}

impl fmt::Display for FitMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "Auto"),
            Self::Manual => write!(f, "Manual"),
        }
    }
}

impl FromStr for FitMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" | "fit" => Ok(Self::Auto),
            "manual" => Ok(Self::Manual),
            _ => Err(format!("Unknown fit mode: {}", s)),
        }
    }
}
