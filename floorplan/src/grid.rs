//! Grid rasterizer: which fixed-size cells fall inside the room polygon.
//!
//! The grid is anchored to the canvas origin, so a cell is identified by its
//! integer `(row, col)` on that global lattice and its pixel position is
//! always `col * cell_size, row * cell_size`. Each cell additionally records
//! its row/column relative to the snapped bounding-box origin of the polygon
//! it was derived from.
//!
//! Membership is permissive: a cell is inside if any of five samples (center
//! and four corners) is inside the polygon. Boundary cells are therefore
//! over-included so tiles never leave gaps along a diagonal or off-grid edge.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::geometry::{Bounds, Point, point_in_polygon};

/// Position of a cell on the origin-anchored lattice.
///
/// Ordered row-major, so iterating a [`CellSet`] walks top-to-bottom,
/// left-to-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CellKey {
    pub row: i64,
    pub col: i64,
}

impl CellKey {
    /// The lattice cell containing canvas point `p`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn containing(p: Point, cell_size: f64) -> Self {
        Self { row: (p.y / cell_size).floor() as i64, col: (p.x / cell_size).floor() as i64 }
    }

    /// Top-left corner of this cell in canvas pixels.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn origin(self, cell_size: f64) -> Point {
        Point::new(self.col as f64 * cell_size, self.row as f64 * cell_size)
    }
}

/// One grid square with optional tile and paint assignments.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cell {
    /// Lattice position.
    pub key: CellKey,
    /// Left edge in canvas pixels.
    pub x: f64,
    /// Top edge in canvas pixels.
    pub y: f64,
    /// Row relative to the snapped bounding-box origin.
    pub row: i64,
    /// Column relative to the snapped bounding-box origin.
    pub col: i64,
    /// Tile texture drawn in this cell.
    pub tile_id: Option<String>,
    /// Paint color drawn over the tile.
    pub color: Option<String>,
}

impl Cell {
    /// An unassigned cell at `key` with relative indices measured from `origin`.
    #[must_use]
    pub fn at(key: CellKey, origin: CellKey, cell_size: f64) -> Self {
        let p = key.origin(cell_size);
        Self { key, x: p.x, y: p.y, row: key.row - origin.row, col: key.col - origin.col, tile_id: None, color: None }
    }
}

/// Cells keyed by lattice position.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CellSet {
    cells: BTreeMap<CellKey, Cell>,
}

impl CellSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: CellKey) -> Option<&Cell> {
        self.cells.get(&key)
    }

    pub fn get_mut(&mut self, key: CellKey) -> Option<&mut Cell> {
        self.cells.get_mut(&key)
    }

    /// Insert or replace the cell at `cell.key`.
    pub fn insert(&mut self, cell: Cell) {
        self.cells.insert(cell.key, cell);
    }

    #[must_use]
    pub fn contains(&self, key: CellKey) -> bool {
        self.cells.contains_key(&key)
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.values_mut()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Assign `tile_id` to every cell.
    pub fn assign_tile(&mut self, tile_id: &str) {
        for cell in self.cells.values_mut() {
            cell.tile_id = Some(tile_id.to_string());
        }
    }

    /// Copy paint colors from `previous` onto cells with the same key.
    ///
    /// Cells that no longer exist in `self` lose their paint.
    pub fn carry_paint_from(&mut self, previous: &CellSet) {
        for (key, cell) in &mut self.cells {
            if let Some(color) = previous.get(*key).and_then(|c| c.color.clone()) {
                cell.color = Some(color);
            }
        }
    }
}

/// Classify every lattice cell overlapping `polygon`'s bounding box.
///
/// Returns an empty set for an empty polygon or a non-positive `cell_size`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn rasterize(polygon: &[Point], cell_size: f64) -> CellSet {
    let mut set = CellSet::new();
    if cell_size.is_nan() || cell_size <= 0.0 {
        return set;
    }
    let Some(bounds) = Bounds::of(polygon) else {
        return set;
    };

    let first = CellKey::containing(bounds.top_left(), cell_size);
    let last_col = (bounds.max_x / cell_size).ceil() as i64;
    let last_row = (bounds.max_y / cell_size).ceil() as i64;

    for row in first.row..last_row {
        for col in first.col..last_col {
            let key = CellKey { row, col };
            if cell_overlaps(key, cell_size, polygon) {
                set.insert(Cell::at(key, first, cell_size));
            }
        }
    }

    tracing::debug!(cells = set.len(), cell_size, "rasterized polygon");
    set
}

/// True if the center or any corner of the cell lies inside `polygon`.
fn cell_overlaps(key: CellKey, cell_size: f64, polygon: &[Point]) -> bool {
    let o = key.origin(cell_size);
    let half = cell_size / 2.0;
    let samples = [
        Point::new(o.x + half, o.y + half),
        o,
        Point::new(o.x + cell_size, o.y),
        Point::new(o.x, o.y + cell_size),
        Point::new(o.x + cell_size, o.y + cell_size),
    ];
    samples.iter().any(|p| point_in_polygon(*p, polygon))
}
