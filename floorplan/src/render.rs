//! Rendering: draws the room to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the engine and produces pixels; it does
//! not mutate any application state.
//!
//! Layers, bottom first, all clipped to the room polygon: base fill, tile
//! textures, pattern overlay, painted cells, grid lines, border. The layout
//! outline is drawn unclipped on top while the layout step is active.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::collections::HashMap;

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement, Path2d};

use crate::color::hex_to_rgba;
use crate::consts::{
    BORDER_WIDTH_PX, FILL_OPACITY, GRID_STROKE, OUTLINE_STROKE, OUTLINE_WIDTH_PX, PATTERN_OPACITY, TILE_OPACITY,
};
use crate::doc::Polygon;
use crate::engine::EngineCore;
use crate::geometry::{Bounds, Point};
use crate::grid::CellSet;
use crate::pattern::{AppliedPattern, PatternField, PatternSource};

/// Images loaded by the host, keyed by tile id and pattern image id.
#[derive(Debug, Default)]
pub struct ImageSet {
    pub tiles: HashMap<String, HtmlImageElement>,
    pub patterns: HashMap<String, HtmlImageElement>,
}

/// Draw the full scene.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore, images: &ImageSet) -> Result<(), JsValue> {
    let polygon = &core.state.main;
    ctx.clear_rect(0.0, 0.0, core.viewport.canvas_width, core.viewport.canvas_height);
    let Some(bounds) = polygon.bounds() else {
        return Ok(());
    };
    let path = polygon_path(polygon)?;
    let cell_size = core.config.cell_size();

    ctx.save();
    ctx.clip_with_path_2d(&path);

    ctx.set_fill_style_str(&core.state.base_color);
    ctx.fill_with_path_2d(&path);

    draw_tiles(ctx, &core.cells, cell_size, images)?;
    if let Some(pattern) = &core.state.pattern {
        draw_pattern(ctx, pattern, &bounds, images)?;
    }
    draw_paint(ctx, &core.cells, cell_size);
    draw_grid(ctx, &core.cells, cell_size);

    if !core.state.border_color.is_empty() {
        ctx.set_stroke_style_str(&core.state.border_color);
        ctx.set_line_width(BORDER_WIDTH_PX);
        ctx.stroke_with_path(&path);
    }
    ctx.restore();

    if core.ui.step.allows_reshape() {
        ctx.set_stroke_style_str(OUTLINE_STROKE);
        ctx.set_line_width(OUTLINE_WIDTH_PX);
        ctx.stroke_with_path(&path);
    }
    Ok(())
}

fn polygon_path(polygon: &Polygon) -> Result<Path2d, JsValue> {
    let path = Path2d::new()?;
    let mut vertices = polygon.vertices.iter();
    if let Some(first) = vertices.next() {
        path.move_to(first.x, first.y);
        for v in vertices {
            path.line_to(v.x, v.y);
        }
        path.close_path();
    }
    Ok(path)
}

// =============================================================
// Layers
// =============================================================

fn draw_tiles(
    ctx: &CanvasRenderingContext2d,
    cells: &CellSet,
    cell_size: f64,
    images: &ImageSet,
) -> Result<(), JsValue> {
    ctx.set_global_alpha(TILE_OPACITY);
    for cell in cells.iter() {
        let Some(image) = cell.tile_id.as_ref().and_then(|id| images.tiles.get(id)) else {
            continue;
        };
        ctx.draw_image_with_html_image_element_and_dw_and_dh(image, cell.x, cell.y, cell_size, cell_size)?;
    }
    ctx.set_global_alpha(1.0);
    Ok(())
}

fn draw_pattern(
    ctx: &CanvasRenderingContext2d,
    pattern: &AppliedPattern,
    bounds: &Bounds,
    images: &ImageSet,
) -> Result<(), JsValue> {
    ctx.set_global_alpha(PATTERN_OPACITY);
    match &pattern.source {
        PatternSource::Procedural(field) => draw_field(ctx, field, pattern, bounds),
        PatternSource::Image { image_id } => {
            if let Some(image) = images.patterns.get(image_id) {
                if let Some(fill) = ctx.create_pattern_with_html_image_element(image, "repeat")? {
                    ctx.save();
                    ctx.translate(pattern.anchor.x, pattern.anchor.y)?;
                    ctx.set_fill_style_canvas_pattern(&fill);
                    ctx.fill_rect(
                        bounds.min_x - pattern.anchor.x,
                        bounds.min_y - pattern.anchor.y,
                        bounds.width(),
                        bounds.height(),
                    );
                    ctx.restore();
                }
            }
        }
    }
    ctx.set_global_alpha(1.0);
    Ok(())
}

/// Fill one pattern-cell square at a time, starting from the anchor-aligned
/// position at or before the bounding box.
fn draw_field(ctx: &CanvasRenderingContext2d, field: &PatternField, pattern: &AppliedPattern, bounds: &Bounds) {
    let step = field.cell_size;
    if step.is_nan() || step <= 0.0 {
        return;
    }
    let start_x = pattern.anchor.x + ((bounds.min_x - pattern.anchor.x) / step).floor() * step;
    let start_y = pattern.anchor.y + ((bounds.min_y - pattern.anchor.y) / step).floor() * step;

    let mut y = start_y;
    while y < bounds.max_y {
        let mut x = start_x;
        while x < bounds.max_x {
            let center = Point::new(x + step / 2.0, y + step / 2.0);
            ctx.set_fill_style_str(field.color_at_point(center, pattern.anchor));
            ctx.fill_rect(x, y, step, step);
            x += step;
        }
        y += step;
    }
}

fn draw_paint(ctx: &CanvasRenderingContext2d, cells: &CellSet, cell_size: f64) {
    for cell in cells.iter() {
        if let Some(color) = &cell.color {
            ctx.set_fill_style_str(&hex_to_rgba(color, FILL_OPACITY));
            ctx.fill_rect(cell.x, cell.y, cell_size, cell_size);
        }
    }
}

fn draw_grid(ctx: &CanvasRenderingContext2d, cells: &CellSet, cell_size: f64) {
    ctx.set_stroke_style_str(GRID_STROKE);
    ctx.set_line_width(1.0);
    for cell in cells.iter() {
        ctx.stroke_rect(cell.x, cell.y, cell_size, cell_size);
    }
}
