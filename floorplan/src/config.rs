//! Design configuration: drawing scale, canvas defaults and estimate pricing.
//!
//! Every field has a default matching the shipped tool. `from_env` overrides
//! them from `FLOORPLAN_*` variables and validates the result.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH, DEFAULT_ROOM_HEIGHT_FT, DEFAULT_ROOM_WIDTH_FT, INCHES_PER_FOOT,
    PIXELS_PER_FOOT, PRICE_PER_TILE, RESIZE_THRESHOLD_PX, TILE_AREA_SQFT, TILE_WIDTH_INCHES, WASTE_FACTOR,
};
use crate::error::DesignError;

/// What happens to painted cells when the grid is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaintRetention {
    /// Every rebuild starts from unpainted cells.
    #[default]
    Discard,
    /// Cells whose lattice position survives the rebuild keep their color.
    ByGridKey,
}

impl FromStr for PaintRetention {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discard" => Ok(Self::Discard),
            "by-grid-key" => Ok(Self::ByGridKey),
            other => Err(DesignError::InvalidConfig {
                key: "FLOORPLAN_PAINT_RETENTION".into(),
                reason: format!("expected 'discard' or 'by-grid-key', got '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignConfig {
    /// Canvas pixels per foot.
    pub pixels_per_foot: f64,
    /// Physical tile edge in inches; fixes the grid cell size.
    pub tile_width_inches: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
    pub room_width_ft: f64,
    pub room_height_ft: f64,
    /// Square feet covered by one tile, used for the estimate.
    pub tile_area_sqft: f64,
    pub price_per_tile: f64,
    /// Multiplier on the whole-tile count; at least 1.
    pub waste_factor: f64,
    pub paint_retention: PaintRetention,
    /// Minimum per-axis canvas change that triggers a rescale.
    pub resize_threshold_px: f64,
}

impl Default for DesignConfig {
    fn default() -> Self {
        Self {
            pixels_per_foot: PIXELS_PER_FOOT,
            tile_width_inches: TILE_WIDTH_INCHES,
            canvas_width: DEFAULT_CANVAS_WIDTH,
            canvas_height: DEFAULT_CANVAS_HEIGHT,
            room_width_ft: DEFAULT_ROOM_WIDTH_FT,
            room_height_ft: DEFAULT_ROOM_HEIGHT_FT,
            tile_area_sqft: TILE_AREA_SQFT,
            price_per_tile: PRICE_PER_TILE,
            waste_factor: WASTE_FACTOR,
            paint_retention: PaintRetention::default(),
            resize_threshold_px: RESIZE_THRESHOLD_PX,
        }
    }
}

impl DesignConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Optional:
    /// - `FLOORPLAN_PIXELS_PER_FOOT`: default 25
    /// - `FLOORPLAN_TILE_WIDTH_INCHES`: default 15.75
    /// - `FLOORPLAN_CANVAS_WIDTH` / `FLOORPLAN_CANVAS_HEIGHT`: default 800 × 600
    /// - `FLOORPLAN_ROOM_WIDTH_FT` / `FLOORPLAN_ROOM_HEIGHT_FT`: default 20 × 15
    /// - `FLOORPLAN_TILE_AREA_SQFT`: default 1.72
    /// - `FLOORPLAN_PRICE_PER_TILE`: default 6.25
    /// - `FLOORPLAN_WASTE_FACTOR`: default 1.1
    /// - `FLOORPLAN_PAINT_RETENTION`: `discard` (default) or `by-grid-key`
    /// - `FLOORPLAN_RESIZE_THRESHOLD_PX`: default 50
    ///
    /// Unparsable numbers are logged and replaced by their default.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::InvalidConfig`] for an unknown paint retention
    /// mode or a value that fails [`DesignConfig::validate`].
    pub fn from_env() -> Result<Self, DesignError> {
        let d = Self::default();
        let paint_retention = match std::env::var("FLOORPLAN_PAINT_RETENTION") {
            Ok(raw) => raw.parse()?,
            Err(_) => d.paint_retention,
        };

        let cfg = Self {
            pixels_per_foot: env_parse("FLOORPLAN_PIXELS_PER_FOOT", d.pixels_per_foot),
            tile_width_inches: env_parse("FLOORPLAN_TILE_WIDTH_INCHES", d.tile_width_inches),
            canvas_width: env_parse("FLOORPLAN_CANVAS_WIDTH", d.canvas_width),
            canvas_height: env_parse("FLOORPLAN_CANVAS_HEIGHT", d.canvas_height),
            room_width_ft: env_parse("FLOORPLAN_ROOM_WIDTH_FT", d.room_width_ft),
            room_height_ft: env_parse("FLOORPLAN_ROOM_HEIGHT_FT", d.room_height_ft),
            tile_area_sqft: env_parse("FLOORPLAN_TILE_AREA_SQFT", d.tile_area_sqft),
            price_per_tile: env_parse("FLOORPLAN_PRICE_PER_TILE", d.price_per_tile),
            waste_factor: env_parse("FLOORPLAN_WASTE_FACTOR", d.waste_factor),
            paint_retention,
            resize_threshold_px: env_parse("FLOORPLAN_RESIZE_THRESHOLD_PX", d.resize_threshold_px),
        };
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that scale, sizes and pricing are usable.
    ///
    /// # Errors
    ///
    /// Returns [`DesignError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), DesignError> {
        require_positive("pixels_per_foot", self.pixels_per_foot)?;
        require_positive("tile_width_inches", self.tile_width_inches)?;
        require_positive("canvas_width", self.canvas_width)?;
        require_positive("canvas_height", self.canvas_height)?;
        require_positive("room_width_ft", self.room_width_ft)?;
        require_positive("room_height_ft", self.room_height_ft)?;
        require_positive("tile_area_sqft", self.tile_area_sqft)?;
        if self.price_per_tile.is_nan() || self.price_per_tile < 0.0 {
            return Err(invalid("price_per_tile", "must be zero or greater"));
        }
        if self.waste_factor.is_nan() || self.waste_factor < 1.0 {
            return Err(invalid("waste_factor", "must be at least 1"));
        }
        if self.resize_threshold_px.is_nan() || self.resize_threshold_px < 0.0 {
            return Err(invalid("resize_threshold_px", "must be zero or greater"));
        }
        Ok(())
    }

    /// Grid cell side in canvas pixels: one tile at the drawing scale.
    #[must_use]
    pub fn cell_size(&self) -> f64 {
        self.tile_width_inches / INCHES_PER_FOOT * self.pixels_per_foot
    }

    /// Default room width in canvas pixels.
    #[must_use]
    pub fn room_width_px(&self) -> f64 {
        self.room_width_ft * self.pixels_per_foot
    }

    /// Default room height in canvas pixels.
    #[must_use]
    pub fn room_height_px(&self) -> f64 {
        self.room_height_ft * self.pixels_per_foot
    }
}

fn require_positive(key: &str, value: f64) -> Result<(), DesignError> {
    if value > 0.0 && value.is_finite() { Ok(()) } else { Err(invalid(key, "must be a positive number")) }
}

fn invalid(key: &str, reason: &str) -> DesignError {
    DesignError::InvalidConfig { key: key.to_string(), reason: reason.to_string() }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!(key, value = %raw, "unparsable config value; using default");
            default
        }
    }
}
