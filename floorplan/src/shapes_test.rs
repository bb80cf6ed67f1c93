#![allow(clippy::float_cmp)]

use super::*;
use crate::doc::Direction;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn assert_well_formed(poly: &Polygon) {
    assert_eq!(poly.vertices.len(), poly.segments.len());
    for (i, seg) in poly.segments.iter().enumerate() {
        assert_eq!(seg.start, i, "segment order must follow traversal");
        assert_eq!(seg.end, (i + 1) % poly.vertices.len());
        let (a, b) = (poly.vertices[seg.start], poly.vertices[seg.end]);
        assert!(approx_eq(seg.length, a.distance(b)), "length mismatch on {}", seg.name);
        match seg.direction {
            Direction::Horizontal => assert!(approx_eq(a.y, b.y), "{} is not horizontal", seg.name),
            Direction::Vertical => assert!(approx_eq(a.x, b.x), "{} is not vertical", seg.name),
        }
    }
}

// =============================================================
// ShapeKind
// =============================================================

#[test]
fn kind_parses_catalog_ids() {
    for kind in ShapeKind::ALL {
        assert_eq!(kind.id().parse::<ShapeKind>().unwrap(), kind);
    }
}

#[test]
fn kind_unknown_name_errors() {
    let err = "hexagon".parse::<ShapeKind>().unwrap_err();
    assert_eq!(err, DesignError::UnknownShape("hexagon".into()));
}

#[test]
fn kind_serde_matches_id() {
    let json = serde_json::to_string(&ShapeKind::DoubleLeggedRectangle).unwrap();
    assert_eq!(json, "\"double-legged-rectangle\"");
    let back: ShapeKind = serde_json::from_str("\"l-shape\"").unwrap();
    assert_eq!(back, ShapeKind::LShape);
}

#[test]
fn kind_default_is_rectangle() {
    assert_eq!(ShapeKind::default(), ShapeKind::Rectangle);
}

// =============================================================
// build_shape: invariants for every kind and size
// =============================================================

#[test]
fn every_kind_is_well_formed_across_sizes() {
    for kind in ShapeKind::ALL {
        for (w, h) in [(500.0, 375.0), (1.0, 1.0), (37.5, 913.25), (1000.0, 10.0)] {
            let poly = build_shape(kind, w, h, 12.0, 7.5);
            assert_eq!(poly.vertices.len(), kind.vertex_count(), "{kind}");
            assert_well_formed(&poly);
            assert_eq!(poly.id, MAIN_AREA_ID);
        }
    }
}

#[test]
fn successive_builds_are_independent() {
    let mut a = build_shape(ShapeKind::Rectangle, 100.0, 100.0, 0.0, 0.0);
    let b = build_shape(ShapeKind::Rectangle, 100.0, 100.0, 0.0, 0.0);
    a.set_vertex(0, Point::new(5.0, 5.0));
    assert_eq!(b.vertices[0], Point::new(0.0, 0.0));
}

// =============================================================
// build_shape: concrete layouts
// =============================================================

#[test]
fn rectangle_default_area_is_width_times_height() {
    let poly = build_shape(ShapeKind::Rectangle, 500.0, 375.0, 150.0, 112.5);
    assert_eq!(poly.area_px(), 500.0 * 375.0);
    assert_eq!(poly.vertices[2], Point::new(650.0, 487.5));
}

#[test]
fn l_shape_removes_bottom_right_quadrant() {
    let poly = build_shape(ShapeKind::LShape, 500.0, 375.0, 150.0, 112.5);
    assert_eq!(poly.vertices[3], Point::new(400.0, 300.0));
    assert!(approx_eq(poly.area_px(), 500.0 * 375.0 * 0.75));
    assert_eq!(poly.segments[2].name, "inner-top");
    assert_eq!(poly.segments[2].length, 250.0);
}

#[test]
fn u_shape_notch_is_half_width_half_height() {
    let poly = build_shape(ShapeKind::UShape, 500.0, 375.0, 150.0, 112.5);
    assert_eq!(poly.vertices[1], Point::new(275.0, 112.5));
    assert_eq!(poly.vertices[3], Point::new(525.0, 300.0));
    assert_eq!(poly.segments[2].length, 250.0);
    assert!(approx_eq(poly.area_px(), 500.0 * 375.0 - 250.0 * 187.5));
}

#[test]
fn double_legged_extends_below_body() {
    let poly = build_shape(ShapeKind::DoubleLeggedRectangle, 500.0, 375.0, 150.0, 112.5);
    assert_eq!(poly.vertices[4], Point::new(525.0, 581.25));
    assert_eq!(poly.segments[3].name, "right-extension");
    assert_eq!(poly.segments[3].length, 93.75);
    assert!(approx_eq(poly.area_px(), 500.0 * 375.0 + 250.0 * 93.75));
}

// =============================================================
// build_shape_named / centered
// =============================================================

#[test]
fn named_unknown_returns_none() {
    assert!(build_shape_named("trapezoid", 10.0, 10.0, 0.0, 0.0).is_none());
}

#[test]
fn named_known_builds() {
    let poly = build_shape_named("u-shape", 100.0, 100.0, 0.0, 0.0).unwrap();
    assert_eq!(poly.vertices.len(), 8);
}

#[test]
fn centered_on_default_canvas() {
    let poly = centered(ShapeKind::Rectangle, 800.0, 600.0, 500.0, 375.0);
    assert_eq!(poly.vertices[0], Point::new(150.0, 112.5));
}
