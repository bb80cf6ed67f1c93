//! Built-in option lists: layouts, pattern presets, tiles and colors.
//!
//! These are plain data. Adapters turn them into option grids; the engine
//! resolves user selections against them by id.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::Serialize;

use crate::error::DesignError;
use crate::pattern::{Band, PatternField, PatternKind, Ring, generate_pattern};
use crate::shapes::ShapeKind;

// ── Colors used by presets ──────────────────────────────────────

const GRAY: &str = "#CCCCCC";
const BLACK: &str = "#000000";
const RED: &str = "#ff0000";

// ── Layouts ─────────────────────────────────────────────────────

/// A selectable room layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutOption {
    pub kind: ShapeKind,
    pub name: &'static str,
}

pub const LAYOUTS: [LayoutOption; 4] = [
    LayoutOption { kind: ShapeKind::Rectangle, name: "Rectangle" },
    LayoutOption { kind: ShapeKind::LShape, name: "L-Shape" },
    LayoutOption { kind: ShapeKind::UShape, name: "U-Shape" },
    LayoutOption { kind: ShapeKind::DoubleLeggedRectangle, name: "Double-Legged Rectangle" },
];

// ── Pattern presets ─────────────────────────────────────────────

/// A named procedural pattern with its block size.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PatternPreset {
    pub id: &'static str,
    pub name: &'static str,
    pub rows: u32,
    pub cols: u32,
    #[serde(skip)]
    build: fn() -> PatternKind,
}

impl PatternPreset {
    /// The pattern variant and colors for this preset.
    #[must_use]
    pub fn kind(&self) -> PatternKind {
        (self.build)()
    }

    /// Generate this preset's color field at `cell_size` pixels per cell.
    #[must_use]
    pub fn field(&self, cell_size: f64) -> PatternField {
        generate_pattern(self.kind(), self.rows, self.cols, cell_size)
    }
}

fn outer_ring() -> Ring {
    Ring::new(Band::new(0, 11), Band::new(0, 15))
}

fn inner_ring() -> Ring {
    Ring::new(Band::new(1, 10), Band::new(1, 14))
}

fn custom_border(first_last: &str, second: &str, default: &str) -> PatternKind {
    PatternKind::CustomBorder {
        first_last: outer_ring(),
        first_last_color: first_last.to_string(),
        second: inner_ring(),
        second_color: second.to_string(),
        default_color: default.to_string(),
    }
}

pub const PATTERN_PRESETS: [PatternPreset; 6] = [
    PatternPreset {
        id: "1",
        name: "Pattern 1",
        rows: 1,
        cols: 1,
        build: || PatternKind::Solid { color: GRAY.to_string() },
    },
    PatternPreset {
        id: "2",
        name: "Pattern 2",
        rows: 2,
        cols: 2,
        build: || PatternKind::Checkerboard { color1: GRAY.to_string(), color2: BLACK.to_string() },
    },
    PatternPreset {
        id: "3",
        name: "Pattern 3",
        rows: 12,
        cols: 16,
        build: || PatternKind::SingleBorder {
            outer: outer_ring(),
            outer_color: BLACK.to_string(),
            inner: inner_ring(),
            inner_color: RED.to_string(),
            center_color: GRAY.to_string(),
        },
    },
    PatternPreset { id: "4", name: "Pattern 4", rows: 12, cols: 16, build: || custom_border(GRAY, BLACK, GRAY) },
    PatternPreset { id: "5", name: "Pattern 5", rows: 12, cols: 16, build: || custom_border(RED, BLACK, BLACK) },
    PatternPreset { id: "6", name: "Pattern 6", rows: 12, cols: 16, build: || custom_border(BLACK, RED, GRAY) },
];

/// Look up a pattern preset by id.
///
/// # Errors
///
/// Returns [`DesignError::UnknownPattern`] if no preset has this id.
pub fn pattern_preset(id: &str) -> Result<&'static PatternPreset, DesignError> {
    PATTERN_PRESETS.iter().find(|p| p.id == id).ok_or_else(|| DesignError::UnknownPattern(id.to_string()))
}

// ── Tiles and colors ────────────────────────────────────────────

/// A tile texture. `image` is a host-side path; the engine only keeps the id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileType {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
}

/// A named color swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Swatch {
    pub id: &'static str,
    pub name: &'static str,
    pub value: &'static str,
}

pub const TILE_TYPES: [TileType; 1] = [TileType { id: "tile1", name: "Tile 1", image: "./media/img/tile.jpeg" }];

pub const EDGE_COLORS: [Swatch; 1] = [Swatch { id: "gray", name: "Gray", value: GRAY }];

pub const PAINT_COLORS: [Swatch; 4] = [
    Swatch { id: "red", name: "Red", value: RED },
    Swatch { id: "black", name: "Black", value: BLACK },
    Swatch { id: "blue", name: "Blue", value: "#0000ff" },
    Swatch { id: "gray", name: "Gray", value: "#808080" },
];

/// Look up a tile type by id.
///
/// # Errors
///
/// Returns [`DesignError::UnknownTile`] if no tile has this id.
pub fn tile_type(id: &str) -> Result<&'static TileType, DesignError> {
    TILE_TYPES.iter().find(|t| t.id == id).ok_or_else(|| DesignError::UnknownTile(id.to_string()))
}

/// Look up a border color swatch by id.
///
/// # Errors
///
/// Returns [`DesignError::UnknownColor`] if no edge color has this id.
pub fn edge_color(id: &str) -> Result<&'static Swatch, DesignError> {
    EDGE_COLORS.iter().find(|s| s.id == id).ok_or_else(|| DesignError::UnknownColor(id.to_string()))
}

/// Look up a paint swatch by id.
///
/// # Errors
///
/// Returns [`DesignError::UnknownColor`] if no paint color has this id.
pub fn paint_color(id: &str) -> Result<&'static Swatch, DesignError> {
    PAINT_COLORS.iter().find(|s| s.id == id).ok_or_else(|| DesignError::UnknownColor(id.to_string()))
}
