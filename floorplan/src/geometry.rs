//! Geometry primitives: points, bounds, shoelace area and point-in-polygon.
//!
//! Everything here is a pure function over canvas-pixel coordinates. The
//! polygon helpers take plain vertex slices so they work equally on the live
//! design polygon and on a drag baseline snapshot.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

/// A point (or displacement) in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// Length of this point read as a vector from the origin.
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Point halfway between `self` and `other`.
    #[must_use]
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Clamp each axis independently into `[0, max_x]` and `[0, max_y]`.
    #[must_use]
    pub fn clamp_to(self, max_x: f64, max_y: f64) -> Point {
        Point::new(clamp_axis(self.x, max_x), clamp_axis(self.y, max_y))
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Clamp a single coordinate into `[0, max]`.
#[must_use]
pub fn clamp_axis(value: f64, max: f64) -> f64 {
    value.min(max).max(0.0)
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounding box of a vertex list, or `None` when it is empty.
    #[must_use]
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Bounds { min_x: first.x, min_y: first.y, max_x: first.x, max_y: first.y };
        Some(points.iter().fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Expand outward to the enclosing multiples of `step` (floor min, ceil max).
    #[must_use]
    pub fn snapped_out(&self, step: f64) -> Bounds {
        Bounds {
            min_x: (self.min_x / step).floor() * step,
            min_y: (self.min_y / step).floor() * step,
            max_x: (self.max_x / step).ceil() * step,
            max_y: (self.max_y / step).ceil() * step,
        }
    }
}

/// Signed shoelace area; positive for counter-clockwise winding in a y-up frame.
#[must_use]
pub fn signed_area(points: &[Point]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut twice = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        twice += a.x * b.y - b.x * a.y;
    }
    twice / 2.0
}

/// Unsigned polygon area in square pixels.
#[must_use]
pub fn polygon_area(points: &[Point]) -> f64 {
    signed_area(points).abs()
}

/// Even-odd ray-casting test. Fewer than three vertices contain nothing.
#[must_use]
pub fn point_in_polygon(p: Point, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (a, b) = (polygon[i], polygon[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Unit vector perpendicular to `start → end`, rotated to `(dy, -dx)`.
///
/// Returns `None` for a zero-length segment.
#[must_use]
pub fn perpendicular_unit(start: Point, end: Point) -> Option<Point> {
    let d = end - start;
    let normal = Point::new(d.y, -d.x);
    let magnitude = normal.length();
    if magnitude == 0.0 {
        return None;
    }
    Some(normal * (1.0 / magnitude))
}
