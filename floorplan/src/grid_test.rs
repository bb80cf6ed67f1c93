#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> Vec<Point> {
    vec![pt(x, y), pt(x + w, y), pt(x + w, y + h), pt(x, y + h)]
}

fn l_shape() -> Vec<Point> {
    vec![pt(0.0, 0.0), pt(100.0, 0.0), pt(100.0, 50.0), pt(50.0, 50.0), pt(50.0, 100.0), pt(0.0, 100.0)]
}

fn key(row: i64, col: i64) -> CellKey {
    CellKey { row, col }
}

// =============================================================
// CellKey
// =============================================================

#[test]
fn key_containing_floors() {
    assert_eq!(CellKey::containing(pt(25.0, 9.99), 10.0), key(0, 2));
    assert_eq!(CellKey::containing(pt(-0.5, -10.0), 10.0), key(-1, -1));
}

#[test]
fn key_origin_is_multiple_of_size() {
    assert_eq!(key(3, -2).origin(10.0), pt(-20.0, 30.0));
}

#[test]
fn keys_order_row_major() {
    let mut keys = vec![key(1, 0), key(0, 5), key(0, 1)];
    keys.sort();
    assert_eq!(keys, vec![key(0, 1), key(0, 5), key(1, 0)]);
}

// =============================================================
// rasterize: rectangles
// =============================================================

#[test]
fn aligned_rectangle_yields_full_grid() {
    let cells = rasterize(&rect(0.0, 0.0, 100.0, 60.0), 10.0);
    assert_eq!(cells.len(), 10 * 6);
}

#[test]
fn offset_aligned_rectangle_yields_full_grid() {
    let cells = rasterize(&rect(20.0, 30.0, 50.0, 50.0), 10.0);
    assert_eq!(cells.len(), 25);
    let first = cells.get(key(3, 2)).unwrap();
    assert_eq!((first.row, first.col), (0, 0));
    assert_eq!((first.x, first.y), (20.0, 30.0));
}

#[test]
fn unaligned_rectangle_covers_partial_edge_cells() {
    // 5..25 spans three 10px columns and rows once snapped out.
    let cells = rasterize(&rect(5.0, 5.0, 20.0, 20.0), 10.0);
    assert_eq!(cells.len(), 9);
    assert!(cells.contains(key(0, 0)));
    assert!(cells.contains(key(2, 2)));
}

#[test]
fn negative_coordinates_snap_outward() {
    let cells = rasterize(&rect(-25.0, -25.0, 30.0, 30.0), 10.0);
    assert_eq!(cells.len(), 16);
    assert!(cells.contains(key(-3, -3)));
    assert!(cells.contains(key(0, 0)));
}

// =============================================================
// rasterize: non-convex and diagonal
// =============================================================

#[test]
fn l_shape_excludes_notch() {
    let cells = rasterize(&l_shape(), 10.0);
    assert_eq!(cells.len(), 75);
    assert!(!cells.contains(key(5, 5)));
    assert!(!cells.contains(key(8, 8)));
    assert!(cells.contains(key(4, 9)));
    assert!(cells.contains(key(9, 4)));
}

#[test]
fn diagonal_edge_over_includes_bisected_cells() {
    let triangle = vec![pt(0.0, 0.0), pt(100.0, 0.0), pt(0.0, 100.0)];
    let cells = rasterize(&triangle, 10.0);
    // Bisected by the hypotenuse: center on the edge, one corner inside.
    assert!(cells.contains(key(4, 5)));
    // Entirely beyond the hypotenuse.
    assert!(!cells.contains(key(9, 9)));
}

// =============================================================
// rasterize: edge cases
// =============================================================

#[test]
fn empty_polygon_yields_nothing() {
    assert!(rasterize(&[], 10.0).is_empty());
}

#[test]
fn non_positive_cell_size_yields_nothing() {
    assert!(rasterize(&rect(0.0, 0.0, 10.0, 10.0), 0.0).is_empty());
    assert!(rasterize(&rect(0.0, 0.0, 10.0, 10.0), -4.0).is_empty());
    assert!(rasterize(&rect(0.0, 0.0, 10.0, 10.0), f64::NAN).is_empty());
}

#[test]
fn rasterize_is_deterministic() {
    let a = rasterize(&l_shape(), 7.3);
    let b = rasterize(&l_shape(), 7.3);
    assert_eq!(a, b);
}

#[test]
fn default_room_rasterizes_at_tile_size() {
    let cell = 15.75 / 12.0 * 25.0;
    let cells = rasterize(&rect(150.0, 112.5, 500.0, 375.0), cell);
    // cols floor(150/c)=4 .. ceil(650/c)=20, rows floor(112.5/c)=3 .. ceil(487.5/c)=15
    assert_eq!(cells.len(), 16 * 12);
}

// =============================================================
// CellSet
// =============================================================

#[test]
fn assign_tile_sets_every_cell() {
    let mut cells = rasterize(&rect(0.0, 0.0, 30.0, 30.0), 10.0);
    cells.assign_tile("tile1");
    assert!(cells.iter().all(|c| c.tile_id.as_deref() == Some("tile1")));
}

#[test]
fn carry_paint_keeps_surviving_keys_only() {
    let mut before = rasterize(&rect(0.0, 0.0, 30.0, 30.0), 10.0);
    before.get_mut(key(0, 0)).unwrap().color = Some("#ff0000".into());
    before.get_mut(key(2, 2)).unwrap().color = Some("#0000ff".into());

    let mut after = rasterize(&rect(0.0, 0.0, 20.0, 20.0), 10.0);
    after.carry_paint_from(&before);

    assert_eq!(after.get(key(0, 0)).unwrap().color.as_deref(), Some("#ff0000"));
    assert!(after.get(key(2, 2)).is_none());
    assert!(after.get(key(1, 1)).unwrap().color.is_none());
}

#[test]
fn iteration_is_row_major() {
    let cells = rasterize(&rect(0.0, 0.0, 20.0, 20.0), 10.0);
    let keys: Vec<CellKey> = cells.iter().map(|c| c.key).collect();
    assert_eq!(keys, vec![key(0, 0), key(0, 1), key(1, 0), key(1, 1)]);
}
