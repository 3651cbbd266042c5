use serde::{Deserialize, Serialize};

use circlefill_core::{ParameterError, Result};

use super::{Bounds, Circle, DesignerShape, Point};

/// Boundary rectangle, origin at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Creates a validated rectangle. Width and height must be finite and
    /// strictly positive; the origin may be any finite pair.
    pub fn new(x0: f64, y0: f64, width: f64, height: f64) -> Result<Self> {
        let x0 = ParameterError::require_finite("x0", x0)?;
        let y0 = ParameterError::require_finite("y0", y0)?;
        let width = ParameterError::require_positive("width", width)?;
        let height = ParameterError::require_positive("height", height)?;
        Ok(Self {
            origin: Point::new(x0, y0),
            width,
            height,
        })
    }

    pub fn x0(&self) -> f64 {
        self.origin.x
    }

    pub fn y0(&self) -> f64 {
        self.origin.y
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.height
    }

    /// Corners in model order: top-left, top-right, bottom-right, bottom-left.
    pub fn corners(&self) -> [Point; 4] {
        let (x0, y0) = (self.x0(), self.y0());
        let (x1, y1) = (self.max_x(), self.max_y());
        [
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ]
    }

    /// Whether a circle of `radius` can sit anywhere inside while keeping
    /// `clearance` to every edge. Touching the limit counts as not fitting.
    pub fn can_fit(&self, radius: f64, clearance: f64) -> bool {
        let needed = 2.0 * (radius + clearance);
        self.width > needed && self.height > needed
    }

    /// Range of admissible center coordinates for a circle of `radius` with
    /// `clearance` to the edges, as `((min_x, max_x), (min_y, max_y))`.
    pub fn center_range(&self, radius: f64, clearance: f64) -> ((f64, f64), (f64, f64)) {
        let inset = radius + clearance;
        (
            (self.x0() + inset, self.max_x() - inset),
            (self.y0() + inset, self.max_y() - inset),
        )
    }

    /// Whether `circle` lies inside with at least `clearance` to every edge.
    pub fn keeps_clearance(&self, circle: &Circle, clearance: f64, tolerance: f64) -> bool {
        let ((min_x, max_x), (min_y, max_y)) = self.center_range(circle.radius(), clearance);
        let c = circle.center;
        c.x >= min_x - tolerance
            && c.x <= max_x + tolerance
            && c.y >= min_y - tolerance
            && c.y <= max_y + tolerance
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        use circlefill_core::constants::*;
        Self {
            origin: Point::new(DEFAULT_RECT_X0_MM, DEFAULT_RECT_Y0_MM),
            width: DEFAULT_RECT_WIDTH_MM,
            height: DEFAULT_RECT_HEIGHT_MM,
        }
    }
}

impl DesignerShape for Rectangle {
    fn bounds(&self) -> Bounds {
        (self.x0(), self.y0(), self.max_x(), self.max_y())
    }

    fn contains_point(&self, p: Point, tolerance: f64) -> bool {
        p.x >= self.x0() - tolerance
            && p.x <= self.max_x() + tolerance
            && p.y >= self.y0() - tolerance
            && p.y <= self.max_y() + tolerance
    }
}
