//! Handle placement and hit-testing in display space.
//!
//! Handles are drawn by the host over the canvas, so their positions and the
//! pointer both live in display pixels. Vertex handles win over segment
//! midpoint handles when both are within reach.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::Serialize;

use crate::consts::HANDLE_RADIUS_PX;
use crate::doc::Polygon;
use crate::geometry::Point;
use crate::input::Handle;
use crate::viewport::Viewport;

/// A handle and where to draw it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandlePosition {
    pub handle: Handle,
    /// Handle center in display pixels.
    pub display: Point,
}

/// Display positions of every vertex handle, then every segment midpoint handle.
#[must_use]
pub fn handle_positions(polygon: &Polygon, viewport: &Viewport) -> Vec<HandlePosition> {
    let vertices = polygon.vertices.iter().enumerate().map(|(i, v)| HandlePosition {
        handle: Handle::Vertex(i),
        display: viewport.canvas_to_display(*v),
    });
    let midpoints = (0..polygon.segments.len()).filter_map(|i| {
        let (a, b) = polygon.segment_endpoints(i)?;
        Some(HandlePosition { handle: Handle::Segment(i), display: viewport.canvas_to_display(a.midpoint(b)) })
    });
    vertices.chain(midpoints).collect()
}

/// The handle under `display`, if any lies within the hit radius.
///
/// The nearest vertex handle is returned if one is in reach; otherwise the
/// nearest midpoint handle.
#[must_use]
pub fn hit_test(display: Point, polygon: &Polygon, viewport: &Viewport) -> Option<Handle> {
    let positions = handle_positions(polygon, viewport);
    let nearest = |want_vertex: bool| {
        positions
            .iter()
            .filter(|h| matches!(h.handle, Handle::Vertex(_)) == want_vertex)
            .map(|h| (h.handle, h.display.distance(display)))
            .filter(|(_, d)| *d <= HANDLE_RADIUS_PX)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(handle, _)| handle)
    };
    nearest(true).or_else(|| nearest(false))
}
