use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement};

use crate::catalog;
use crate::config::{DesignConfig, PaintRetention};
use crate::doc::{DesignState, Polygon};
use crate::error::DesignError;
use crate::geometry::Point;
use crate::grid::{Cell, CellKey, CellSet, rasterize};
use crate::hit::{self, HandlePosition};
use crate::input::{Handle, InputState, Step, UiState};
use crate::measure::{self, DimensionLabel, Estimate};
use crate::pattern::{AppliedPattern, PatternSource};
use crate::render::{self, ImageSet};
use crate::reshape::{self, Extent};
use crate::shapes::{self, ShapeKind};
use crate::viewport::Viewport;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Action {
    /// The canvas needs to be redrawn.
    RenderNeeded,
    /// Handle positions or visibility changed.
    HandlesChanged,
    /// Dimension labels and the estimate are stale.
    DimensionsChanged,
    /// The cell grid was rebuilt with this many cells.
    CellsRebuilt(usize),
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Clone)]
pub struct EngineCore {
    pub state: DesignState,
    pub cells: CellSet,
    pub ui: UiState,
    pub input: InputState,
    pub viewport: Viewport,
    pub config: DesignConfig,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(DesignConfig::default())
    }
}

impl EngineCore {
    /// A session showing the default rectangle centered on the configured canvas.
    #[must_use]
    pub fn new(config: DesignConfig) -> Self {
        let viewport = Viewport::new(config.canvas_width, config.canvas_height);
        let main = default_room(ShapeKind::default(), &config, &viewport);
        let mut core = Self {
            state: DesignState::new(ShapeKind::default(), main),
            cells: CellSet::new(),
            ui: UiState::default(),
            input: InputState::default(),
            viewport,
            config,
        };
        core.rebuild_cells();
        core
    }

    // --- Selections ---

    /// Replace the room with a fresh `kind` layout at the default size.
    pub fn select_layout(&mut self, kind: ShapeKind) -> Vec<Action> {
        self.input = InputState::Idle;
        self.state.shape = kind;
        self.state.main = default_room(kind, &self.config, &self.viewport);
        tracing::debug!(kind = %kind, vertices = self.state.main.vertices.len(), "layout selected");
        let n = self.rebuild_cells();
        vec![Action::CellsRebuilt(n), Action::RenderNeeded, Action::HandlesChanged, Action::DimensionsChanged]
    }

    /// [`Self::select_layout`] by catalog id.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnknownShape`] for an unrecognized id.
    pub fn select_layout_named(&mut self, id: &str) -> Result<Vec<Action>, DesignError> {
        let kind = id.parse::<ShapeKind>()?;
        Ok(self.select_layout(kind))
    }

    /// Apply pattern preset `id`, anchored at the room's current top-left.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnknownPattern`] for an unrecognized id.
    pub fn select_pattern(&mut self, id: &str) -> Result<Vec<Action>, DesignError> {
        let preset = catalog::pattern_preset(id)?;
        let source = PatternSource::Procedural(preset.field(self.config.cell_size()));
        self.apply_pattern(id, source);
        Ok(vec![Action::RenderNeeded])
    }

    /// Apply a host-loaded image as the pattern, anchored like a preset.
    pub fn apply_image_pattern(&mut self, image_id: &str) -> Vec<Action> {
        self.apply_pattern(image_id, PatternSource::Image { image_id: image_id.to_string() });
        vec![Action::RenderNeeded]
    }

    /// Remove the pattern overlay.
    pub fn clear_pattern(&mut self) -> Vec<Action> {
        self.state.pattern = None;
        vec![Action::RenderNeeded]
    }

    fn apply_pattern(&mut self, id: &str, source: PatternSource) {
        let anchor = self.state.main.bounds().map(|b| b.top_left()).unwrap_or_default();
        tracing::debug!(pattern = id, anchor_x = anchor.x, anchor_y = anchor.y, "pattern applied");
        self.state.pattern = Some(AppliedPattern { id: id.to_string(), source, anchor });
    }

    /// Make tile `id` current and assign it to every cell.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnknownTile`] for an unrecognized id.
    pub fn select_tile(&mut self, id: &str) -> Result<Vec<Action>, DesignError> {
        let tile = catalog::tile_type(id)?;
        self.state.current_tile_id = tile.id.to_string();
        self.cells.assign_tile(tile.id);
        Ok(vec![Action::RenderNeeded])
    }

    /// Set the color the next cell paint uses.
    pub fn set_paint_color(&mut self, color: &str) {
        self.ui.paint_color = color.to_string();
    }

    /// [`Self::set_paint_color`] by swatch id.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnknownColor`] for an unrecognized id.
    pub fn select_paint_color(&mut self, id: &str) -> Result<(), DesignError> {
        let swatch = catalog::paint_color(id)?;
        self.set_paint_color(swatch.value);
        Ok(())
    }

    /// Set the border stroke color.
    pub fn set_border_color(&mut self, color: &str) -> Vec<Action> {
        self.state.border_color = color.to_string();
        vec![Action::RenderNeeded]
    }

    /// [`Self::set_border_color`] by edge swatch id.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::UnknownColor`] for an unrecognized id.
    pub fn select_edge_color(&mut self, id: &str) -> Result<Vec<Action>, DesignError> {
        let swatch = catalog::edge_color(id)?;
        Ok(self.set_border_color(swatch.value))
    }

    /// Set the fill drawn beneath tiles.
    pub fn set_base_color(&mut self, color: &str) -> Vec<Action> {
        self.state.base_color = color.to_string();
        vec![Action::RenderNeeded]
    }

    // --- Steps ---

    /// Move to `step`. Leaving the layout step finishes any drag in progress.
    pub fn set_step(&mut self, step: Step) -> Vec<Action> {
        if step == self.ui.step {
            return Vec::new();
        }
        let mut actions = if step.allows_reshape() { Vec::new() } else { self.finish_drag() };
        self.ui.step = step;
        tracing::debug!(step = %step, "step changed");
        actions.extend([Action::HandlesChanged, Action::RenderNeeded]);
        actions
    }

    pub fn next_step(&mut self) -> Vec<Action> {
        self.set_step(self.ui.step.next())
    }

    pub fn prev_step(&mut self) -> Vec<Action> {
        self.set_step(self.ui.step.prev())
    }

    // --- Painting ---

    /// Paint the cell under display point `display` with the current paint color.
    ///
    /// Only active in the colors step. Clicks outside the room are ignored. A
    /// click inside the room on a position with no cell yet creates one
    /// carrying the current tile.
    pub fn paint_at(&mut self, display: Point) -> Vec<Action> {
        if !self.ui.step.allows_paint() {
            return Vec::new();
        }
        let p = self.viewport.display_to_canvas(display);
        if !self.state.main.contains(p) {
            return Vec::new();
        }
        let Some(bounds) = self.state.main.bounds() else {
            return Vec::new();
        };

        let cell_size = self.config.cell_size();
        let key = CellKey::containing(p, cell_size);
        if !self.cells.contains(key) {
            let origin = CellKey::containing(bounds.top_left(), cell_size);
            let mut cell = Cell::at(key, origin, cell_size);
            cell.tile_id = Some(self.state.current_tile_id.clone());
            self.cells.insert(cell);
        }
        if let Some(cell) = self.cells.get_mut(key) {
            cell.color = Some(self.ui.paint_color.clone());
        }
        vec![Action::RenderNeeded]
    }

    // --- Reshape input ---

    /// Pointer-down in display space. Starts a drag if a handle is hit.
    pub fn on_pointer_down(&mut self, display: Point) -> Vec<Action> {
        if !self.ui.step.allows_reshape() {
            return Vec::new();
        }
        match hit::hit_test(display, &self.state.main, &self.viewport) {
            Some(handle) => self.on_pointer_down_handle(handle, display),
            None => Vec::new(),
        }
    }

    /// Pointer-down on a known handle. Ignored while another drag is active or
    /// if the handle does not exist on the current polygon.
    pub fn on_pointer_down_handle(&mut self, handle: Handle, display: Point) -> Vec<Action> {
        if !self.ui.step.allows_reshape() {
            return Vec::new();
        }
        if let Some(active) = self.input.active_handle() {
            tracing::warn!(?active, ?handle, "pointer-down during active drag ignored");
            return Vec::new();
        }
        let exists = match handle {
            Handle::Vertex(i) => self.state.main.vertex(i).is_some(),
            Handle::Segment(i) => self.state.main.segment_endpoints(i).is_some(),
        };
        if !exists {
            return Vec::new();
        }
        self.input = InputState::begin(handle, display, &self.state.main);
        tracing::debug!(?handle, "drag started");
        Vec::new()
    }

    /// Pointer-move in display space. Reshapes the room while a drag is active.
    pub fn on_pointer_move(&mut self, display: Point) -> Vec<Action> {
        let extent = Extent::new(self.viewport.canvas_width, self.viewport.canvas_height);
        let moved = match &self.input {
            InputState::Idle => false,
            InputState::DraggingVertex { index, start_display, baseline } => {
                let delta = self.viewport.display_to_canvas(display - *start_display);
                reshape::drag_vertex(&mut self.state.main, baseline, *index, delta, extent)
            }
            InputState::DraggingSegment { index, start_display, baseline } => {
                let delta = self.viewport.display_to_canvas(display - *start_display);
                reshape::drag_segment(&mut self.state.main, baseline, *index, delta, extent)
            }
        };
        if moved {
            vec![Action::RenderNeeded, Action::HandlesChanged, Action::DimensionsChanged]
        } else {
            Vec::new()
        }
    }

    /// Pointer-up. Ends the drag and rebuilds the cell grid.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.finish_drag()
    }

    fn finish_drag(&mut self) -> Vec<Action> {
        if self.input.is_idle() {
            return Vec::new();
        }
        self.input = InputState::Idle;
        let n = self.rebuild_cells();
        tracing::debug!(cells = n, "drag finished");
        vec![Action::CellsRebuilt(n), Action::RenderNeeded, Action::DimensionsChanged]
    }

    // --- Viewport ---

    /// Record the canvas's displayed CSS size.
    pub fn set_display_size(&mut self, client_width: f64, client_height: f64) -> Vec<Action> {
        self.viewport.client_width = client_width;
        self.viewport.client_height = client_height;
        vec![Action::HandlesChanged, Action::DimensionsChanged]
    }

    /// Change the canvas's intrinsic size.
    ///
    /// Changes within the resize threshold on both axes are ignored. Otherwise
    /// any active drag ends at its current geometry, then the room and pattern
    /// anchor are scaled proportionally, or an empty room is replaced by the
    /// default layout.
    pub fn resize_canvas(&mut self, width: f64, height: f64) -> Vec<Action> {
        if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
            tracing::warn!(width, height, "ignoring non-positive canvas size");
            return Vec::new();
        }
        let threshold = self.config.resize_threshold_px;
        let (old_w, old_h) = (self.viewport.canvas_width, self.viewport.canvas_height);
        if (width - old_w).abs() <= threshold && (height - old_h).abs() <= threshold {
            return Vec::new();
        }

        if let Some(active) = self.input.active_handle() {
            tracing::warn!(?active, "canvas resized during drag; drag ended");
            self.input = InputState::Idle;
        }
        self.viewport.canvas_width = width;
        self.viewport.canvas_height = height;
        if self.state.main.is_empty() {
            self.state.main = default_room(self.state.shape, &self.config, &self.viewport);
        } else {
            let (sx, sy) = (width / old_w, height / old_h);
            self.state.main.scale(sx, sy);
            if let Some(pattern) = &mut self.state.pattern {
                pattern.anchor = Point::new(pattern.anchor.x * sx, pattern.anchor.y * sy);
            }
        }
        tracing::debug!(width, height, "canvas resized");
        let n = self.rebuild_cells();
        vec![Action::CellsRebuilt(n), Action::RenderNeeded, Action::HandlesChanged, Action::DimensionsChanged]
    }

    /// Replace the cell set with a fresh rasterization of the room.
    ///
    /// Every cell gets the current tile. Paint is carried over by lattice
    /// position only under [`PaintRetention::ByGridKey`].
    pub fn rebuild_cells(&mut self) -> usize {
        let mut cells = rasterize(&self.state.main.vertices, self.config.cell_size());
        cells.assign_tile(&self.state.current_tile_id);
        if self.config.paint_retention == PaintRetention::ByGridKey {
            cells.carry_paint_from(&self.cells);
        }
        self.cells = cells;
        self.cells.len()
    }

    // --- Queries ---

    /// Handle positions for the host to draw; empty outside the layout step.
    #[must_use]
    pub fn handles(&self) -> Vec<HandlePosition> {
        if self.ui.step.allows_reshape() {
            hit::handle_positions(&self.state.main, &self.viewport)
        } else {
            Vec::new()
        }
    }

    /// Dimension labels for a host label of `label_height` display pixels.
    #[must_use]
    pub fn dimension_labels(&self, label_height: f64) -> Vec<DimensionLabel> {
        measure::dimension_labels(&self.state.main, self.config.pixels_per_foot, label_height, &self.viewport)
    }

    /// The adopted intrinsic canvas size in whole pixels.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn canvas_size_px(&self) -> (u32, u32) {
        (self.viewport.canvas_width.round() as u32, self.viewport.canvas_height.round() as u32)
    }

    #[must_use]
    pub fn estimate(&self) -> Estimate {
        Estimate::for_polygon(&self.state.main, &self.config)
    }

    #[must_use]
    pub fn polygon(&self) -> &Polygon {
        &self.state.main
    }

    /// Everything a host needs to present the design, in one serializable view.
    #[must_use]
    pub fn scene(&self, label_height: f64) -> Scene<'_> {
        Scene {
            step: self.ui.step,
            shape: self.state.shape,
            polygon: &self.state.main,
            cells: self.cells.iter().collect(),
            pattern: self.state.pattern.as_ref(),
            base_color: &self.state.base_color,
            border_color: &self.state.border_color,
            handles: self.handles(),
            labels: self.dimension_labels(label_height),
            estimate: self.estimate(),
        }
    }
}

/// Serializable snapshot of the engine for host-side presentation.
#[derive(Debug, Serialize)]
pub struct Scene<'a> {
    pub step: Step,
    pub shape: ShapeKind,
    pub polygon: &'a Polygon,
    pub cells: Vec<&'a Cell>,
    pub pattern: Option<&'a AppliedPattern>,
    pub base_color: &'a str,
    pub border_color: &'a str,
    pub handles: Vec<HandlePosition>,
    pub labels: Vec<DimensionLabel>,
    pub estimate: Estimate,
}

fn default_room(kind: ShapeKind, config: &DesignConfig, viewport: &Viewport) -> Polygon {
    shapes::centered(
        kind,
        viewport.canvas_width,
        viewport.canvas_height,
        config.room_width_px(),
        config.room_height_px(),
    )
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    images: ImageSet,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: DesignConfig) -> Self {
        let mut core = EngineCore::new(config);
        core.resize_canvas(f64::from(canvas.width()), f64::from(canvas.height()));
        let engine = Self { canvas, images: ImageSet::default(), core };
        engine.write_back_size();
        engine
    }

    // --- Images ---

    /// Register a loaded tile texture under its tile id.
    pub fn register_tile_image(&mut self, tile_id: &str, image: HtmlImageElement) {
        self.images.tiles.insert(tile_id.to_string(), image);
    }

    /// Register a loaded pattern image and apply it.
    pub fn apply_image_pattern(&mut self, image_id: &str, image: HtmlImageElement) -> Vec<Action> {
        self.images.patterns.insert(image_id.to_string(), image);
        self.core.apply_image_pattern(image_id)
    }

    // --- Delegated inputs ---

    /// # Errors
    ///
    /// See [`EngineCore::select_layout_named`].
    pub fn select_layout_named(&mut self, id: &str) -> Result<Vec<Action>, DesignError> {
        self.core.select_layout_named(id)
    }

    /// # Errors
    ///
    /// See [`EngineCore::select_pattern`].
    pub fn select_pattern(&mut self, id: &str) -> Result<Vec<Action>, DesignError> {
        self.core.select_pattern(id)
    }

    /// # Errors
    ///
    /// See [`EngineCore::select_tile`].
    pub fn select_tile(&mut self, id: &str) -> Result<Vec<Action>, DesignError> {
        self.core.select_tile(id)
    }

    pub fn set_step(&mut self, step: Step) -> Vec<Action> {
        self.core.set_step(step)
    }

    pub fn on_pointer_down(&mut self, display: Point) -> Vec<Action> {
        self.core.on_pointer_down(display)
    }

    pub fn on_pointer_move(&mut self, display: Point) -> Vec<Action> {
        self.core.on_pointer_move(display)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn paint_at(&mut self, display: Point) -> Vec<Action> {
        self.core.paint_at(display)
    }

    // --- Viewport ---

    /// Sync the engine with the canvas element's current intrinsic and CSS size.
    ///
    /// The engine owns the intrinsic size: a change the engine ignores is
    /// undone on the element so drawing and clamping agree.
    pub fn sync_size(&mut self) -> Vec<Action> {
        let mut actions = self.core.resize_canvas(f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        self.write_back_size();
        actions.extend(
            self.core.set_display_size(f64::from(self.canvas.client_width()), f64::from(self.canvas.client_height())),
        );
        actions
    }

    fn write_back_size(&self) {
        let (width, height) = self.core.canvas_size_px();
        if self.canvas.width() != width {
            self.canvas.set_width(width);
        }
        if self.canvas.height() != height {
            self.canvas.set_height(height);
        }
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(JsValue::from)?;
        render::draw(&ctx, &self.core, &self.images)
    }

    /// Scene snapshot as JSON for the host's label and sidebar layer.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn scene_json(&self, label_height: f64) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.core.scene(label_height))
    }
}
