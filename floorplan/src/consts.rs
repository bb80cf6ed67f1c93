//! Shared numeric constants for the floorplan crate.

// ── Scale ───────────────────────────────────────────────────────

/// Canvas pixels per real-world foot.
pub const PIXELS_PER_FOOT: f64 = 25.0;

/// Physical tile edge length in inches.
pub const TILE_WIDTH_INCHES: f64 = 15.75;

/// Inches per foot.
pub const INCHES_PER_FOOT: f64 = 12.0;

// ── Canvas ──────────────────────────────────────────────────────

/// Intrinsic canvas width before the first resize.
pub const DEFAULT_CANVAS_WIDTH: f64 = 800.0;

/// Intrinsic canvas height before the first resize.
pub const DEFAULT_CANVAS_HEIGHT: f64 = 600.0;

/// Default room bounding width in feet.
pub const DEFAULT_ROOM_WIDTH_FT: f64 = 20.0;

/// Default room bounding height in feet.
pub const DEFAULT_ROOM_HEIGHT_FT: f64 = 15.0;

/// A canvas resize smaller than this (per axis) is ignored.
pub const RESIZE_THRESHOLD_PX: f64 = 50.0;

// ── Estimate ────────────────────────────────────────────────────

/// Coverage of one tile in square feet.
pub const TILE_AREA_SQFT: f64 = 1.72;

/// Price of one tile.
pub const PRICE_PER_TILE: f64 = 6.25;

/// Multiplier applied to the whole-tile count for cuts and breakage.
pub const WASTE_FACTOR: f64 = 1.1;

// ── Handles and labels ──────────────────────────────────────────

/// Display-space hit radius for vertex and midpoint handles.
pub const HANDLE_RADIUS_PX: f64 = 8.0;

/// Minimum distance from a segment to its dimension label.
pub const LABEL_OFFSET_PX: f64 = 20.0;

/// Extra clearance added to half the label height.
pub const LABEL_CLEARANCE_PX: f64 = 5.0;

// ── Rendering ───────────────────────────────────────────────────

/// Alpha for painted cell colors.
pub const FILL_OPACITY: f64 = 0.8;

/// Alpha for tile textures.
pub const TILE_OPACITY: f64 = 0.4;

/// Alpha for the pattern overlay.
pub const PATTERN_OPACITY: f64 = 0.4;

/// Border stroke width in canvas pixels.
pub const BORDER_WIDTH_PX: f64 = 10.0;

/// Outline stroke width used while the layout step is active.
pub const OUTLINE_WIDTH_PX: f64 = 1.5;

// ── Colors ──────────────────────────────────────────────────────

/// Base fill of a fresh design.
pub const DEFAULT_BASE_COLOR: &str = "#CCCCCC";

/// Paint color selected at startup.
pub const DEFAULT_PAINT_COLOR: &str = "#ff0000";

/// Tile assigned to cells at startup.
pub const DEFAULT_TILE_ID: &str = "tile1";

/// Grid line color.
pub const GRID_STROKE: &str = "rgba(255, 255, 255, 0.3)";

/// Layout outline color.
pub const OUTLINE_STROKE: &str = "#0066cc";
