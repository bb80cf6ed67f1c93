#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn unit_rect() -> Polygon {
    Polygon::closed(
        MAIN_AREA_ID,
        vec![pt(0.0, 0.0), pt(40.0, 0.0), pt(40.0, 30.0), pt(0.0, 30.0)],
        &["top", "right", "bottom", "left"],
    )
}

fn assert_lengths_consistent(poly: &Polygon) {
    for seg in &poly.segments {
        let (a, b) = (poly.vertices[seg.start], poly.vertices[seg.end]);
        assert!((seg.length - a.distance(b)).abs() < 1e-9, "stale length on {}", seg.name);
    }
}

// =============================================================
// Direction
// =============================================================

#[test]
fn direction_horizontal_when_y_shared() {
    assert_eq!(Direction::between(pt(0.0, 5.0), pt(10.0, 5.0)), Direction::Horizontal);
}

#[test]
fn direction_vertical_when_x_shared() {
    assert_eq!(Direction::between(pt(3.0, 0.0), pt(3.0, 10.0)), Direction::Vertical);
}

#[test]
fn direction_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Direction::Vertical).unwrap(), "\"vertical\"");
}

// =============================================================
// Polygon::closed
// =============================================================

#[test]
fn closed_builds_one_segment_per_edge() {
    let poly = unit_rect();
    assert_eq!(poly.segments.len(), poly.vertices.len());
    assert_eq!(poly.segments[3].start, 3);
    assert_eq!(poly.segments[3].end, 0);
    assert_lengths_consistent(&poly);
}

#[test]
fn closed_assigns_names_and_directions() {
    let poly = unit_rect();
    assert_eq!(poly.segments[0].name, "top");
    assert_eq!(poly.segments[0].direction, Direction::Horizontal);
    assert_eq!(poly.segments[1].direction, Direction::Vertical);
    assert_eq!(poly.segments[1].length, 30.0);
}

#[test]
fn closed_falls_back_to_generated_names() {
    let poly = Polygon::closed("x", vec![pt(0.0, 0.0), pt(1.0, 0.0), pt(1.0, 1.0)], &["a"]);
    assert_eq!(poly.segments[0].name, "a");
    assert_eq!(poly.segments[2].name, "edge-2");
}

#[test]
fn empty_polygon_has_nothing() {
    let poly = Polygon::empty();
    assert!(poly.is_empty());
    assert!(poly.segments.is_empty());
    assert!(poly.bounds().is_none());
    assert_eq!(poly.area_px(), 0.0);
}

// =============================================================
// Mutation keeps lengths in sync
// =============================================================

#[test]
fn set_vertex_refreshes_touching_segments() {
    let mut poly = unit_rect();
    assert!(poly.set_vertex(2, pt(70.0, 70.0)));
    assert_lengths_consistent(&poly);
    assert_eq!(poly.segments[0].length, 40.0);
}

#[test]
fn set_vertex_out_of_range_is_noop() {
    let mut poly = unit_rect();
    let before = poly.clone();
    assert!(!poly.set_vertex(9, pt(1.0, 1.0)));
    assert_eq!(poly, before);
}

#[test]
fn scale_updates_vertices_and_lengths() {
    let mut poly = unit_rect();
    poly.scale(2.0, 0.5);
    assert_eq!(poly.vertices[2], pt(80.0, 15.0));
    assert_eq!(poly.segments[0].length, 80.0);
    assert_eq!(poly.segments[1].length, 15.0);
}

#[test]
fn segment_endpoints_lookup() {
    let poly = unit_rect();
    assert_eq!(poly.segment_endpoints(1), Some((pt(40.0, 0.0), pt(40.0, 30.0))));
    assert!(poly.segment_endpoints(4).is_none());
}

// =============================================================
// Queries
// =============================================================

#[test]
fn area_and_contains() {
    let poly = unit_rect();
    assert_eq!(poly.area_px(), 1200.0);
    assert!(poly.contains(pt(20.0, 15.0)));
    assert!(!poly.contains(pt(50.0, 15.0)));
}

#[test]
fn design_state_defaults() {
    let state = DesignState::new(ShapeKind::Rectangle, unit_rect());
    assert_eq!(state.base_color, "#CCCCCC");
    assert_eq!(state.current_tile_id, "tile1");
    assert!(state.border_color.is_empty());
    assert!(state.pattern.is_none());
}
