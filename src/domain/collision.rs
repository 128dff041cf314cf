//! Collision detection based on axis-aligned rectangles.

use thiserror::Error;

use super::{Delta, Point};

pub trait HasCollision {
    fn has_collision(&self, other: &dyn HasCollision) -> bool {
        self.bounds().overlaps(&other.bounds())
    }

    fn bounds(&self) -> Rect;
}

/// Axis-aligned rectangle with `x1 <= x2` and `y1 <= y2`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Rect {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl Rect {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, GeometryError> {
        if ![x1, y1, x2, y2].iter().all(|c| c.is_finite()) {
            return Err(GeometryError::NonFinite { x1, y1, x2, y2 });
        }
        if x1 > x2 || y1 > y2 {
            return Err(GeometryError::InvertedCorners { x1, y1, x2, y2 });
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Rectangle spanned by two arbitrary corners. Non-finite coordinates are kept, so a
    /// rectangle built from bad input is still rejected by [`Rect::validated`].
    pub fn from_corners(c_1: Point, c_2: Point) -> Self {
        let (x1, x2) = ordered(c_1.x, c_2.x);
        let (y1, y2) = ordered(c_1.y, c_2.y);
        Self { x1, y1, x2, y2 }
    }

    pub fn with_size(top_left: Point, width: f64, height: f64) -> Result<Self, GeometryError> {
        Self::new(
            top_left.x,
            top_left.y,
            top_left.x + width,
            top_left.y + height,
        )
    }

    /// Checks the invariants of a rectangle that was built without validation.
    pub fn validated(self) -> Result<Self, GeometryError> {
        Self::new(self.x1, self.y1, self.x2, self.y2)
    }

    pub fn x1(&self) -> f64 {
        self.x1
    }

    pub fn y1(&self) -> f64 {
        self.y1
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Same rectangle with both corners shifted by `delta`.
    pub fn translated(&self, delta: Delta) -> Self {
        Self {
            x1: self.x1 + delta.x,
            y1: self.y1 + delta.y,
            x2: self.x2 + delta.x,
            y2: self.y2 + delta.y,
        }
    }

    /// Separating-axis test on the interiors. Rectangles that only share an edge coordinate do
    /// not overlap, while a zero-extent rectangle strictly straddled by `self` does.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.x2 <= other.x1
            || self.x1 >= other.x2
            || self.y2 <= other.y1
            || self.y1 >= other.y2)
    }

    pub fn contains(&self, position: Point) -> bool {
        position.x >= self.x1
            && position.x <= self.x2
            && position.y >= self.y1
            && position.y <= self.y2
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl HasCollision for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("rectangle ({x1}, {y1}, {x2}, {y2}) has inverted corners")]
    InvertedCorners { x1: f64, y1: f64, x2: f64, y2: f64 },
    #[error("rectangle ({x1}, {y1}, {x2}, {y2}) has non-finite coordinates")]
    NonFinite { x1: f64, y1: f64, x2: f64, y2: f64 },
}
