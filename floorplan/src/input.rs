//! Input model: design steps, reshape handles, and the drag state machine.
//!
//! `Step` tracks where the user is in the sidebar workflow and gates which
//! interactions are live. `Handle` names a draggable vertex or segment
//! midpoint. `InputState` is the active gesture between pointer-down and
//! pointer-up, carrying the baseline snapshot every move is computed from.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_PAINT_COLOR;
use crate::doc::Polygon;
use crate::error::DesignError;
use crate::geometry::Point;

/// Sidebar workflow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Step {
    /// Pick a layout and reshape it. Handles are visible only here.
    #[default]
    Layouts,
    /// Pick a pattern overlay.
    Patterns,
    /// Pick the tile texture.
    TileTypes,
    /// Pick the border color.
    Edges,
    /// Paint individual cells.
    Colors,
}

impl Step {
    /// Steps in workflow order.
    pub const ALL: [Step; 5] = [Self::Layouts, Self::Patterns, Self::TileTypes, Self::Edges, Self::Colors];

    /// Identifier used by the sidebar, e.g. `"tileTypes"`.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::Layouts => "layouts",
            Self::Patterns => "patterns",
            Self::TileTypes => "tileTypes",
            Self::Edges => "edges",
            Self::Colors => "colors",
        }
    }

    fn position(self) -> usize {
        match self {
            Self::Layouts => 0,
            Self::Patterns => 1,
            Self::TileTypes => 2,
            Self::Edges => 3,
            Self::Colors => 4,
        }
    }

    /// The following step; the last step stays put.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL.get(self.position() + 1).copied().unwrap_or(self)
    }

    /// The preceding step; the first step stays put.
    #[must_use]
    pub fn prev(self) -> Self {
        self.position().checked_sub(1).and_then(|i| Self::ALL.get(i).copied()).unwrap_or(self)
    }

    /// Whether reshape handles are shown and draggable.
    #[must_use]
    pub fn allows_reshape(self) -> bool {
        self == Self::Layouts
    }

    /// Whether clicks paint cells.
    #[must_use]
    pub fn allows_paint(self) -> bool {
        self == Self::Colors
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Step {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|step| step.id() == s).ok_or_else(|| DesignError::InvalidConfig {
            key: "step".into(),
            reason: format!("unknown step '{s}'"),
        })
    }
}

/// A draggable reshape handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "lowercase")]
pub enum Handle {
    /// The vertex at this index.
    Vertex(usize),
    /// The midpoint of the segment at this index.
    Segment(usize),
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiState {
    /// Current workflow step.
    pub step: Step,
    /// Color applied by the next cell paint.
    pub paint_color: String,
}

impl Default for UiState {
    fn default() -> Self {
        Self { step: Step::default(), paint_color: DEFAULT_PAINT_COLOR.to_string() }
    }
}

/// Internal state for the drag state machine.
///
/// Each dragging variant keeps a deep copy of the polygon taken at
/// pointer-down. Moves are applied as `baseline + total delta`.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// The user is dragging a vertex handle.
    DraggingVertex {
        /// Index of the vertex being moved.
        index: usize,
        /// Display-space pointer position at pointer-down.
        start_display: Point,
        /// Polygon as it was at pointer-down.
        baseline: Polygon,
    },
    /// The user is dragging a segment midpoint handle.
    DraggingSegment {
        /// Index of the segment being moved.
        index: usize,
        /// Display-space pointer position at pointer-down.
        start_display: Point,
        /// Polygon as it was at pointer-down.
        baseline: Polygon,
    },
}

impl InputState {
    /// Begin dragging `handle` from `start_display` over a snapshot of `polygon`.
    #[must_use]
    pub fn begin(handle: Handle, start_display: Point, polygon: &Polygon) -> Self {
        let baseline = polygon.clone();
        match handle {
            Handle::Vertex(index) => Self::DraggingVertex { index, start_display, baseline },
            Handle::Segment(index) => Self::DraggingSegment { index, start_display, baseline },
        }
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The handle being dragged, if any.
    #[must_use]
    pub fn active_handle(&self) -> Option<Handle> {
        match self {
            Self::Idle => None,
            Self::DraggingVertex { index, .. } => Some(Handle::Vertex(*index)),
            Self::DraggingSegment { index, .. } => Some(Handle::Segment(*index)),
        }
    }
}
