//! Display ↔ canvas coordinate conversion.
//!
//! The canvas has an intrinsic pixel size (the space all geometry lives in)
//! and a displayed CSS size. Pointer events arrive in display pixels and
//! handles/labels are positioned in display pixels; everything in between is
//! canvas pixels.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use serde::Serialize;

use crate::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
use crate::geometry::Point;

/// Intrinsic and displayed canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    /// Intrinsic canvas width in canvas pixels.
    pub canvas_width: f64,
    /// Intrinsic canvas height in canvas pixels.
    pub canvas_height: f64,
    /// Displayed width in CSS pixels.
    pub client_width: f64,
    /// Displayed height in CSS pixels.
    pub client_height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT)
    }
}

impl Viewport {
    /// A viewport displayed at its intrinsic size (scale 1:1).
    #[must_use]
    pub fn new(canvas_width: f64, canvas_height: f64) -> Self {
        Self { canvas_width, canvas_height, client_width: canvas_width, client_height: canvas_height }
    }

    /// Display pixels per canvas pixel along x.
    #[must_use]
    pub fn scale_x(&self) -> f64 {
        ratio(self.client_width, self.canvas_width)
    }

    /// Display pixels per canvas pixel along y.
    #[must_use]
    pub fn scale_y(&self) -> f64 {
        ratio(self.client_height, self.canvas_height)
    }

    /// Convert a display-space point to canvas coordinates.
    #[must_use]
    pub fn display_to_canvas(&self, display: Point) -> Point {
        Point::new(
            display.x * ratio(self.canvas_width, self.client_width),
            display.y * ratio(self.canvas_height, self.client_height),
        )
    }

    /// Convert a canvas-space point to display coordinates.
    #[must_use]
    pub fn canvas_to_display(&self, canvas: Point) -> Point {
        Point::new(canvas.x * self.scale_x(), canvas.y * self.scale_y())
    }
}

/// `num / den`, or 1.0 when the denominator is not a usable size.
fn ratio(num: f64, den: f64) -> f64 {
    if den > 0.0 && num > 0.0 { num / den } else { 1.0 }
}
