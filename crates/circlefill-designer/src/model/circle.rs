use serde::{Deserialize, Serialize};

use circlefill_core::{ParameterError, Result};

use super::{Bounds, DesignerShape, Point};

/// A placed circle. Immutable once created; placement only ever accepts or
/// rejects whole circles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub diameter: f64,
}

impl Circle {
    pub fn new(cx: f64, cy: f64, diameter: f64) -> Result<Self> {
        let cx = ParameterError::require_finite("cx", cx)?;
        let cy = ParameterError::require_finite("cy", cy)?;
        let diameter = ParameterError::require_positive("diameter", diameter)?;
        Ok(Self {
            center: Point::new(cx, cy),
            diameter,
        })
    }

    pub(crate) fn at(center: Point, diameter: f64) -> Self {
        Self { center, diameter }
    }

    pub fn radius(&self) -> f64 {
        self.diameter / 2.0
    }

    /// Edge-to-edge gap to `other`; negative when the circles overlap.
    pub fn gap_to(&self, other: &Circle) -> f64 {
        self.center.distance_to(&other.center) - self.radius() - other.radius()
    }

    /// Whether a circle of `radius` centered at `center` keeps at least
    /// `spacing` edge-to-edge distance from this one.
    pub fn clears(&self, center: &Point, radius: f64, spacing: f64) -> bool {
        self.center.distance_to(center) >= radius + self.radius() + spacing
    }
}

impl DesignerShape for Circle {
    fn bounds(&self) -> Bounds {
        let r = self.radius();
        (
            self.center.x - r,
            self.center.y - r,
            self.center.x + r,
            self.center.y + r,
        )
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        self.center.distance_to(&p) <= self.radius() + tolerance
    }
}
