//! Geometry value types in millimetre model space.
//!
//! Model space has its origin at the top-left and Y increasing downward, the
//! same orientation as the drawing surface.

use serde::{Deserialize, Serialize};

mod circle;
mod rectangle;

pub use circle::Circle;
pub use rectangle::Rectangle;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx.hypot(dy)
    }
}

/// Axis-aligned extent of a shape as `(min_x, min_y, max_x, max_y)`.
pub type Bounds = (f64, f64, f64, f64);

pub trait DesignerShape {
    fn bounds(&self) -> Bounds;
    fn contains_point(&self, p: Point, tolerance: f64) -> bool;
}
