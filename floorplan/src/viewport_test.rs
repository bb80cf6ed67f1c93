#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn point_approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

// --- defaults ---

#[test]
fn default_is_800_by_600_unscaled() {
    let vp = Viewport::default();
    assert_eq!(vp.canvas_width, 800.0);
    assert_eq!(vp.canvas_height, 600.0);
    assert_eq!(vp.scale_x(), 1.0);
    assert_eq!(vp.scale_y(), 1.0);
}

// --- display_to_canvas ---

#[test]
fn display_to_canvas_identity() {
    let vp = Viewport::default();
    assert!(point_approx_eq(vp.display_to_canvas(Point::new(40.0, 30.0)), Point::new(40.0, 30.0)));
}

#[test]
fn display_to_canvas_half_size_display() {
    let vp = Viewport { canvas_width: 800.0, canvas_height: 600.0, client_width: 400.0, client_height: 300.0 };
    assert!(point_approx_eq(vp.display_to_canvas(Point::new(100.0, 50.0)), Point::new(200.0, 100.0)));
}

#[test]
fn display_to_canvas_independent_axes() {
    let vp = Viewport { canvas_width: 800.0, canvas_height: 600.0, client_width: 1600.0, client_height: 300.0 };
    assert!(point_approx_eq(vp.display_to_canvas(Point::new(100.0, 100.0)), Point::new(50.0, 200.0)));
}

// --- canvas_to_display ---

#[test]
fn canvas_to_display_scales_up() {
    let vp = Viewport { canvas_width: 800.0, canvas_height: 600.0, client_width: 1200.0, client_height: 900.0 };
    assert!(point_approx_eq(vp.canvas_to_display(Point::new(100.0, 100.0)), Point::new(150.0, 150.0)));
}

#[test]
fn round_trip_display_canvas_display() {
    let vp = Viewport { canvas_width: 800.0, canvas_height: 600.0, client_width: 613.0, client_height: 421.0 };
    let p = Point::new(77.0, 311.0);
    assert!(point_approx_eq(vp.canvas_to_display(vp.display_to_canvas(p)), p));
}

// --- guards ---

#[test]
fn zero_client_size_falls_back_to_unit_scale() {
    let vp = Viewport { canvas_width: 800.0, canvas_height: 600.0, client_width: 0.0, client_height: 0.0 };
    assert_eq!(vp.scale_x(), 1.0);
    assert!(point_approx_eq(vp.display_to_canvas(Point::new(5.0, 6.0)), Point::new(5.0, 6.0)));
}
