//! Reshape operations applied while a handle is dragged.
//!
//! Every move is computed from the baseline snapshot taken at pointer-down
//! plus the total pointer displacement since then, never from the previous
//! move. Repeated moves therefore do not accumulate rounding drift, and
//! dragging back to the start point restores the baseline exactly.

#[cfg(test)]
#[path = "reshape_test.rs"]
mod reshape_test;

use crate::doc::{Direction, Polygon};
use crate::geometry::Point;

/// Canvas bounds that dragged vertices are clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn clamp(self, p: Point) -> Point {
        p.clamp_to(self.width, self.height)
    }
}

/// Move vertex `index` to its baseline position plus `delta`, clamped to `extent`.
///
/// Returns false (leaving `polygon` untouched) if `index` does not exist in
/// both polygons.
pub fn drag_vertex(polygon: &mut Polygon, baseline: &Polygon, index: usize, delta: Point, extent: Extent) -> bool {
    let Some(origin) = baseline.vertex(index) else {
        return false;
    };
    polygon.set_vertex(index, extent.clamp(origin + delta))
}

/// Translate segment `index` perpendicular to its direction by `delta`.
///
/// A horizontal segment moves only in y and a vertical one only in x. Both
/// endpoints are clamped independently, so a segment pushed against the
/// canvas edge may end up shorter. Returns false for an unknown segment.
pub fn drag_segment(polygon: &mut Polygon, baseline: &Polygon, index: usize, delta: Point, extent: Extent) -> bool {
    let Some(seg) = baseline.segment(index) else {
        return false;
    };
    let (Some(a), Some(b)) = (baseline.vertex(seg.start), baseline.vertex(seg.end)) else {
        return false;
    };
    if polygon.vertex(seg.start).is_none() || polygon.vertex(seg.end).is_none() {
        return false;
    }

    let shift = match seg.direction {
        Direction::Horizontal => Point::new(0.0, delta.y),
        Direction::Vertical => Point::new(delta.x, 0.0),
    };
    let (start, end) = (seg.start, seg.end);
    polygon.set_vertex(start, extent.clamp(a + shift));
    polygon.set_vertex(end, extent.clamp(b + shift));
    true
}
