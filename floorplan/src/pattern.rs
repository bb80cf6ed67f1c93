//! Pattern generator: procedural color fields tiled over the room.
//!
//! A pattern is a pure function `(row, col) -> color` over a `rows × cols`
//! block of tile-sized cells. The block repeats in both directions starting
//! at an anchor point, which is captured in polygon space when the pattern is
//! applied so later panning or reshaping does not slide it.
//!
//! Row and column indices are zero-based. Border variants describe their
//! rings with [`Band`]s: an index hits a band when it is at or before `low`
//! or at or after `high`.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// Inclusive edge band along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Band {
    pub low: u32,
    pub high: u32,
}

impl Band {
    #[must_use]
    pub fn new(low: u32, high: u32) -> Self {
        Self { low, high }
    }

    /// True if `index <= low || index >= high`.
    #[must_use]
    pub fn hits(self, index: u32) -> bool {
        index <= self.low || index >= self.high
    }
}

/// A rectangular ring: row band plus column band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ring {
    pub rows: Band,
    pub cols: Band,
}

impl Ring {
    #[must_use]
    pub fn new(rows: Band, cols: Band) -> Self {
        Self { rows, cols }
    }

    /// True if the cell lies on this ring or outside it.
    #[must_use]
    pub fn hits(self, row: u32, col: u32) -> bool {
        self.rows.hits(row) || self.cols.hits(col)
    }
}

/// Procedural pattern variant with its color parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PatternKind {
    /// Every cell the same color.
    Solid { color: String },
    /// `color1` where `row + col` is odd, `color2` where it is even.
    Checkerboard { color1: String, color2: String },
    /// Concentric rings; outer beats inner beats center.
    SingleBorder { outer: Ring, outer_color: String, inner: Ring, inner_color: String, center_color: String },
    /// Row bands with column refinement; first/last beats second beats interior.
    CustomBorder {
        first_last: Ring,
        first_last_color: String,
        second: Ring,
        second_color: String,
        default_color: String,
    },
}

impl PatternKind {
    /// Color of the cell at `(row, col)` within one repeat of the block.
    #[must_use]
    pub fn color(&self, row: u32, col: u32) -> &str {
        match self {
            Self::Solid { color } => color,
            Self::Checkerboard { color1, color2 } => {
                if (row + col) % 2 == 1 {
                    color1
                } else {
                    color2
                }
            }
            Self::SingleBorder { outer, outer_color, inner, inner_color, center_color } => {
                if outer.hits(row, col) {
                    outer_color
                } else if inner.hits(row, col) {
                    inner_color
                } else {
                    center_color
                }
            }
            Self::CustomBorder { first_last, first_last_color, second, second_color, default_color } => {
                if first_last.rows.hits(row) {
                    first_last_color
                } else if second.rows.hits(row) {
                    if second.cols.hits(col) { first_last_color } else { second_color }
                } else if first_last.cols.hits(col) {
                    first_last_color
                } else if second.cols.hits(col) {
                    second_color
                } else {
                    default_color
                }
            }
        }
    }
}

/// A tileable block of `rows × cols` cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternField {
    pub kind: PatternKind,
    pub rows: u32,
    pub cols: u32,
    pub cell_size: f64,
}

/// Build a color field for `kind`. Zero rows or columns are raised to one.
#[must_use]
pub fn generate_pattern(kind: PatternKind, rows: u32, cols: u32, cell_size: f64) -> PatternField {
    PatternField { kind, rows: rows.max(1), cols: cols.max(1), cell_size }
}

impl PatternField {
    /// Color at `(row, col)`, wrapping indices beyond the block.
    #[must_use]
    pub fn color_at(&self, row: u32, col: u32) -> &str {
        self.kind.color(row % self.rows, col % self.cols)
    }

    /// Width of one repeat in canvas pixels, never below one.
    #[must_use]
    pub fn width_px(&self) -> f64 {
        (self.cell_size * f64::from(self.cols)).max(1.0)
    }

    /// Height of one repeat in canvas pixels, never below one.
    #[must_use]
    pub fn height_px(&self) -> f64 {
        (self.cell_size * f64::from(self.rows)).max(1.0)
    }

    /// Color under canvas point `p` when the field is tiled from `anchor`.
    ///
    /// Points above or left of the anchor wrap around, so the field covers the
    /// whole plane.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn color_at_point(&self, p: Point, anchor: Point) -> &str {
        if self.cell_size.is_nan() || self.cell_size <= 0.0 {
            return self.kind.color(0, 0);
        }
        let col = ((p.x - anchor.x) / self.cell_size).floor() as i64;
        let row = ((p.y - anchor.y) / self.cell_size).floor() as i64;
        let col = col.rem_euclid(i64::from(self.cols)) as u32;
        let row = row.rem_euclid(i64::from(self.rows)) as u32;
        self.kind.color(row, col)
    }
}

/// Where a pattern's pixels come from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PatternSource {
    /// Generated from a [`PatternField`].
    Procedural(PatternField),
    /// An image loaded by the host, referenced by id.
    Image { image_id: String },
}

/// A pattern overlay fixed to a point in polygon space.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppliedPattern {
    /// Catalog id of the pattern.
    pub id: String,
    pub source: PatternSource,
    /// Where tiling starts: the polygon's bounding-box top-left when applied.
    pub anchor: Point,
}

impl AppliedPattern {
    /// Procedural color under canvas point `p`; `None` for image patterns.
    #[must_use]
    pub fn color_at(&self, p: Point) -> Option<&str> {
        match &self.source {
            PatternSource::Procedural(field) => Some(field.color_at_point(p, self.anchor)),
            PatternSource::Image { .. } => None,
        }
    }
}
