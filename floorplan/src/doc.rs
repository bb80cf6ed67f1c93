//! Document model: the room polygon, its segments, and the design session.
//!
//! `Polygon` is the single authored shape. Its vertices are the only source
//! of geometric truth; each `Segment` indexes two of them and caches the
//! distance between them. Every mutator on `Polygon` refreshes the cached
//! lengths it touches before returning, so readers never observe a stale
//! `length`.
//!
//! `DesignState` is the per-session object the engine threads through every
//! operation: which layout is active, the polygon, the colors and tile the
//! user picked, and the pattern overlay with its anchor.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BASE_COLOR, DEFAULT_TILE_ID};
use crate::geometry::{Bounds, Point, point_in_polygon, polygon_area};
use crate::pattern::AppliedPattern;
use crate::shapes::ShapeKind;

/// Id of the primary polygon of a design.
pub const MAIN_AREA_ID: &str = "main";

/// Axis along which a segment lies. A segment handle drags perpendicular to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Endpoints share a y coordinate; a drag moves the segment in y.
    Horizontal,
    /// Endpoints share an x coordinate; a drag moves the segment in x.
    Vertical,
}

impl Direction {
    /// Classify the segment `a → b` by its dominant axis.
    ///
    /// Exact for axis-aligned segments; a diagonal resolves to whichever axis
    /// it spans further along.
    #[must_use]
    pub fn between(a: Point, b: Point) -> Self {
        if (b.y - a.y).abs() <= (b.x - a.x).abs() { Self::Horizontal } else { Self::Vertical }
    }
}

/// One polygon edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Stable label such as `"top"` or `"inner-left"`.
    pub name: String,
    /// Index of the first endpoint in the owning polygon.
    pub start: usize,
    /// Index of the second endpoint in the owning polygon.
    pub end: usize,
    /// Cached distance between the endpoints, in canvas pixels.
    pub length: f64,
    /// Which axis the segment lies along.
    pub direction: Direction,
}

/// A closed polygon with one segment per edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub id: String,
    pub vertices: Vec<Point>,
    pub segments: Vec<Segment>,
}

impl Polygon {
    /// Build a polygon whose segments connect consecutive vertices (closing
    /// back to the first), named from `names` in order.
    ///
    /// Missing names fall back to `"edge-<index>"`.
    #[must_use]
    pub fn closed(id: &str, vertices: Vec<Point>, names: &[&str]) -> Self {
        let n = vertices.len();
        let segments = (0..n)
            .map(|i| {
                let end = (i + 1) % n;
                let (a, b) = (vertices[i], vertices[end]);
                Segment {
                    name: names.get(i).map_or_else(|| format!("edge-{i}"), |s| (*s).to_string()),
                    start: i,
                    end,
                    length: a.distance(b),
                    direction: Direction::between(a, b),
                }
            })
            .collect();
        Self { id: id.to_string(), vertices, segments }
    }

    /// A polygon with no vertices. Renders and rasterizes to nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self { id: MAIN_AREA_ID.to_string(), vertices: Vec::new(), segments: Vec::new() }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<Point> {
        self.vertices.get(index).copied()
    }

    #[must_use]
    pub fn segment(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    /// Endpoints of segment `index`, if both indices resolve.
    #[must_use]
    pub fn segment_endpoints(&self, index: usize) -> Option<(Point, Point)> {
        let seg = self.segments.get(index)?;
        Some((self.vertex(seg.start)?, self.vertex(seg.end)?))
    }

    /// Move vertex `index` and refresh every segment touching it.
    ///
    /// Returns false (and changes nothing) if the index is out of range.
    pub fn set_vertex(&mut self, index: usize, p: Point) -> bool {
        let Some(v) = self.vertices.get_mut(index) else {
            return false;
        };
        *v = p;
        self.refresh_lengths_touching(index);
        true
    }

    /// Recompute the cached length of every segment with `vertex` as an endpoint.
    pub fn refresh_lengths_touching(&mut self, vertex: usize) {
        let vertices = &self.vertices;
        for seg in self.segments.iter_mut().filter(|s| s.start == vertex || s.end == vertex) {
            if let (Some(a), Some(b)) = (vertices.get(seg.start), vertices.get(seg.end)) {
                seg.length = a.distance(*b);
            }
        }
    }

    /// Recompute every cached segment length.
    pub fn refresh_all_lengths(&mut self) {
        let vertices = &self.vertices;
        for seg in &mut self.segments {
            if let (Some(a), Some(b)) = (vertices.get(seg.start), vertices.get(seg.end)) {
                seg.length = a.distance(*b);
            }
        }
    }

    /// Scale every vertex by independent x/y factors about the canvas origin.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        for v in &mut self.vertices {
            v.x *= sx;
            v.y *= sy;
        }
        self.refresh_all_lengths();
    }

    #[must_use]
    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.vertices)
    }

    /// Enclosed area in square canvas pixels (shoelace).
    #[must_use]
    pub fn area_px(&self) -> f64 {
        polygon_area(&self.vertices)
    }

    /// Even-odd containment test.
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        point_in_polygon(p, &self.vertices)
    }
}

/// The mutable design session.
#[derive(Debug, Clone, Serialize)]
pub struct DesignState {
    /// Active layout.
    pub shape: ShapeKind,
    /// The primary (`main`) polygon.
    pub main: Polygon,
    /// Fill beneath tiles and patterns.
    pub base_color: String,
    /// Border stroke color; empty means no border has been chosen.
    pub border_color: String,
    /// Tile assigned to cells on the next rebuild.
    pub current_tile_id: String,
    /// Pattern overlay, if one has been applied.
    pub pattern: Option<AppliedPattern>,
}

impl DesignState {
    /// A session showing `main` as a `shape` layout with default colors.
    #[must_use]
    pub fn new(shape: ShapeKind, main: Polygon) -> Self {
        Self {
            shape,
            main,
            base_color: DEFAULT_BASE_COLOR.to_string(),
            border_color: String::new(),
            current_tile_id: DEFAULT_TILE_ID.to_string(),
            pattern: None,
        }
    }
}
