//! Basic building blocks.
//!
//! All coordinates are canvas coordinates: the origin is the top-left corner of the canvas and the
//! y-axis grows downward.

use nalgebra::{Point2, Vector2};

pub type Point = Point2<f64>;

/// Displacement between two pointer samples.
pub type Delta = Vector2<f64>;

/// Displacement that moves a dragged object from `from` to `to`.
pub fn drag_delta(from: Point, to: Point) -> Delta {
    to - from
}
