//! Measurements: feet-and-inches labels, floor area and the tile estimate.

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use serde::Serialize;

use crate::config::DesignConfig;
use crate::consts::{INCHES_PER_FOOT, LABEL_CLEARANCE_PX, LABEL_OFFSET_PX};
use crate::doc::Polygon;
use crate::geometry::{Point, perpendicular_unit};
use crate::viewport::Viewport;

/// Format a pixel length as `{feet}'{inches}"` at `pixels_per_foot`.
///
/// Inches are rounded after splitting off whole feet, so a length just short
/// of a foot boundary reads as `N'12"`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_dimension(px: f64, pixels_per_foot: f64) -> String {
    let total_inches = px / pixels_per_foot * INCHES_PER_FOOT;
    let feet = (total_inches / INCHES_PER_FOOT).floor() as i64;
    let inches = (total_inches % INCHES_PER_FOOT).round() as i64;
    format!("{feet}'{inches}\"")
}

/// Polygon area in square feet.
#[must_use]
pub fn area_sqft(polygon: &Polygon, pixels_per_foot: f64) -> f64 {
    polygon.area_px() / (pixels_per_foot * pixels_per_foot)
}

/// Material estimate for one room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub area_sqft: f64,
    /// Whole tiles to cover the area exactly.
    pub tiles_without_waste: u64,
    /// Whole tiles after the waste allowance.
    pub tiles_needed: u64,
    pub price_per_tile: f64,
    pub total_price: f64,
}

impl Estimate {
    /// Estimate tiles and price for `area_sqft` under `config`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn for_area(area_sqft: f64, config: &DesignConfig) -> Self {
        let exact = (area_sqft / config.tile_area_sqft).ceil().max(0.0);
        let padded = (exact * config.waste_factor).ceil().max(0.0);
        let tiles_needed = padded as u64;
        Self {
            area_sqft,
            tiles_without_waste: exact as u64,
            tiles_needed,
            price_per_tile: config.price_per_tile,
            total_price: tiles_needed as f64 * config.price_per_tile,
        }
    }

    /// Estimate for `polygon` at the configured scale.
    #[must_use]
    pub fn for_polygon(polygon: &Polygon, config: &DesignConfig) -> Self {
        Self::for_area(area_sqft(polygon, config.pixels_per_foot), config)
    }
}

/// One segment's dimension text and where to center it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionLabel {
    pub segment: String,
    pub text: String,
    /// Label center in canvas pixels.
    pub canvas: Point,
    /// Label center in display pixels.
    pub display: Point,
}

/// Canvas-space center for a label of height `label_height` beside `start → end`.
///
/// The label sits off the segment midpoint along the `(dy, -dx)` normal, far
/// enough that it cannot overlap the edge. `None` for a zero-length segment.
#[must_use]
pub fn label_anchor(start: Point, end: Point, label_height: f64) -> Option<Point> {
    let normal = perpendicular_unit(start, end)?;
    let offset = LABEL_OFFSET_PX.max(label_height / 2.0 + LABEL_CLEARANCE_PX);
    Some(start.midpoint(end) + normal * offset)
}

/// Dimension labels for every non-degenerate segment of `polygon`.
#[must_use]
pub fn dimension_labels(
    polygon: &Polygon,
    pixels_per_foot: f64,
    label_height: f64,
    viewport: &Viewport,
) -> Vec<DimensionLabel> {
    polygon
        .segments
        .iter()
        .enumerate()
        .filter_map(|(i, seg)| {
            let (start, end) = polygon.segment_endpoints(i)?;
            let canvas = label_anchor(start, end, label_height)?;
            Some(DimensionLabel {
                segment: seg.name.clone(),
                text: format_dimension(seg.length, pixels_per_foot),
                canvas,
                display: viewport.canvas_to_display(canvas),
            })
        })
        .collect()
}
