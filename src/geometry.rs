//! Planar primitives shared by the tree and the brute-force set.
//!
//! Rectangles use the same parameter order as every query in this crate:
//! `(min_x, min_y, max_x, max_y)`, bounds inclusive.

use std::fmt;

/// A point in the plane. Equality is exact coordinate equality.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Creates a point from its coordinates
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Returns true when both coordinates are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Coordinate compared by a node splitting on `axis`
    #[inline]
    pub fn coord(self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.x,
            Axis::Horizontal => self.y,
        }
    }

    /// Squared Euclidean distance to `other`
    #[inline]
    pub fn distance_squared_to(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`
    pub fn distance_to(self, other: Point) -> f64 {
        self.distance_squared_to(other).sqrt()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orientation of a node's splitting line.
///
/// A vertical line separates points by x, a horizontal line by y.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[expect(clippy::exhaustive_enums, reason = "the plane has exactly two axes")]
pub enum Axis {
    /// Splits on the x coordinate
    Vertical,
    /// Splits on the y coordinate
    Horizontal,
}

impl Axis {
    /// Axis used by the children of a node splitting on `self`
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Axis::Vertical => Axis::Horizontal,
            Axis::Horizontal => Axis::Vertical,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Vertical => f.write_str("vertical"),
            Axis::Horizontal => f.write_str("horizontal"),
        }
    }
}

/// Axis-aligned rectangle with inclusive bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Left edge
    pub min_x: f64,
    /// Bottom edge
    pub min_y: f64,
    /// Right edge
    pub max_x: f64,
    /// Top edge
    pub max_y: f64,
}

impl Rect {
    /// Creates a rectangle (min_x, min_y, max_x, max_y)
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Rect { min_x, min_y, max_x, max_y }
    }

    /// The unit square `[0, 1] x [0, 1]`
    pub const fn unit() -> Self {
        Rect::new(0.0, 0.0, 1.0, 1.0)
    }

    /// Returns true when every bound is finite and min <= max on both axes
    pub fn is_valid(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }

    /// Width along x
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height along y
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Closed-interval containment on both axes
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.min_x <= p.x && p.x <= self.max_x && self.min_y <= p.y && p.y <= self.max_y
    }

    /// Closed-interval overlap test; touching edges intersect
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min_x <= other.max_x
            && self.max_x >= other.min_x
            && self.min_y <= other.max_y
            && self.max_y >= other.min_y
    }

    /// Squared distance from `p` to the closest point of the rectangle, 0 inside
    #[inline]
    pub fn distance_squared_to(&self, p: Point) -> f64 {
        let dx = axis_distance(p.x, self.min_x, self.max_x);
        let dy = axis_distance(p.y, self.min_y, self.max_y);
        dx * dx + dy * dy
    }

    /// Grows the rectangle so that it contains `p`
    pub fn expand_to(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    /// Clips the rectangle along a splitting line through `at`.
    ///
    /// Returns `(greater, not_greater)`: the half holding coordinates above the
    /// line and the half holding coordinates at or below it. Both halves share
    /// the line itself.
    #[inline]
    pub fn split(&self, axis: Axis, at: Point) -> (Rect, Rect) {
        match axis {
            Axis::Vertical => (
                Rect::new(at.x, self.min_y, self.max_x, self.max_y),
                Rect::new(self.min_x, self.min_y, at.x, self.max_y),
            ),
            Axis::Horizontal => (
                Rect::new(self.min_x, at.y, self.max_x, self.max_y),
                Rect::new(self.min_x, self.min_y, self.max_x, at.y),
            ),
        }
    }
}

impl Default for Rect {
    fn default() -> Self {
        Rect::unit()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] x [{}, {}]", self.min_x, self.max_x, self.min_y, self.max_y)
    }
}

/// Get distance along an axis
#[inline]
fn axis_distance(coordinate: f64, min: f64, max: f64) -> f64 {
    if coordinate < min {
        min - coordinate
    } else if coordinate > max {
        coordinate - max
    } else {
        0.0
    }
}
