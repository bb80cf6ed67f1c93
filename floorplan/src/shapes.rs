//! Shape factory: the four built-in room layouts.
//!
//! Each layout is an axis-aligned polygon derived from a bounding width and
//! height plus a top-left origin. Leg sizes are fixed fractions of the
//! bounding box. Every call allocates fresh vertex and segment lists; nothing
//! is shared between successive builds.

#[cfg(test)]
#[path = "shapes_test.rs"]
mod shapes_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::doc::{MAIN_AREA_ID, Polygon};
use crate::error::DesignError;
use crate::geometry::Point;

/// Built-in room layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ShapeKind {
    /// Plain rectangle.
    #[default]
    Rectangle,
    /// Rectangle with the bottom-right quadrant removed.
    LShape,
    /// Rectangle with a notch cut into the top edge, leaving two legs.
    UShape,
    /// Rectangle with a centered block extending below the bottom edge.
    DoubleLeggedRectangle,
}

impl ShapeKind {
    /// All layouts in catalog order.
    pub const ALL: [ShapeKind; 4] = [Self::Rectangle, Self::LShape, Self::UShape, Self::DoubleLeggedRectangle];

    /// Catalog identifier, e.g. `"l-shape"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::LShape => "l-shape",
            Self::UShape => "u-shape",
            Self::DoubleLeggedRectangle => "double-legged-rectangle",
        }
    }

    /// Number of polygon vertices (and segments) this layout produces.
    #[must_use]
    pub fn vertex_count(self) -> usize {
        match self {
            Self::Rectangle => 4,
            Self::LShape => 6,
            Self::UShape | Self::DoubleLeggedRectangle => 8,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ShapeKind {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or_else(|| DesignError::UnknownShape(s.to_string()))
    }
}

/// Build the `main` polygon for `kind` inside the box at `(x, y)` of size `width × height`.
#[must_use]
pub fn build_shape(kind: ShapeKind, width: f64, height: f64, x: f64, y: f64) -> Polygon {
    let p = |dx: f64, dy: f64| Point::new(x + dx, y + dy);
    let (w, h) = (width, height);

    let (vertices, names): (Vec<Point>, &[&str]) = match kind {
        ShapeKind::Rectangle => (vec![p(0.0, 0.0), p(w, 0.0), p(w, h), p(0.0, h)], &["top", "right", "bottom", "left"]),
        ShapeKind::LShape => {
            let (leg_w, leg_h) = (w / 2.0, h / 2.0);
            (
                vec![p(0.0, 0.0), p(w, 0.0), p(w, leg_h), p(leg_w, leg_h), p(leg_w, h), p(0.0, h)],
                &["top", "right-top", "inner-top", "inner-left", "bottom", "left"],
            )
        }
        ShapeKind::UShape => {
            let leg_w = w / 4.0;
            let notch = h / 2.0;
            (
                vec![
                    p(0.0, 0.0),
                    p(leg_w, 0.0),
                    p(leg_w, notch),
                    p(w - leg_w, notch),
                    p(w - leg_w, 0.0),
                    p(w, 0.0),
                    p(w, h),
                    p(0.0, h),
                ],
                &[
                    "top-left",
                    "inner-left-vertical",
                    "inner-bottom",
                    "inner-right-vertical",
                    "top-right",
                    "right",
                    "bottom",
                    "left",
                ],
            )
        }
        ShapeKind::DoubleLeggedRectangle => {
            let (leg_w, leg_h) = (w / 4.0, h / 4.0);
            (
                vec![
                    p(0.0, 0.0),
                    p(w, 0.0),
                    p(w, h),
                    p(w - leg_w, h),
                    p(w - leg_w, h + leg_h),
                    p(leg_w, h + leg_h),
                    p(leg_w, h),
                    p(0.0, h),
                ],
                &[
                    "top",
                    "right",
                    "bottom-right",
                    "right-extension",
                    "bottom-extension",
                    "left-extension",
                    "bottom-left",
                    "left",
                ],
            )
        }
    };

    Polygon::closed(MAIN_AREA_ID, vertices, names)
}

/// Build a layout by catalog name; `None` for an unrecognized name.
#[must_use]
pub fn build_shape_named(name: &str, width: f64, height: f64, x: f64, y: f64) -> Option<Polygon> {
    let Ok(kind) = name.parse::<ShapeKind>() else {
        tracing::debug!(name, "unrecognized layout; nothing to build");
        return None;
    };
    Some(build_shape(kind, width, height, x, y))
}

/// Build `kind` at `width × height`, centered on a canvas of the given size.
#[must_use]
pub fn centered(kind: ShapeKind, canvas_width: f64, canvas_height: f64, width: f64, height: f64) -> Polygon {
    let x = (canvas_width - width) / 2.0;
    let y = (canvas_height - height) / 2.0;
    build_shape(kind, width, height, x, y)
}
