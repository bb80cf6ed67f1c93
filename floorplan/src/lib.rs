//! Geometry and grid engine for the floor-plan tiling designer.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and is also
//! used natively by the `tilecraft` CLI. It owns the room polygon, classifies
//! the tile grid against it, runs the vertex/segment reshape state machine,
//! generates pattern overlays, and computes dimension labels and material
//! estimates. The host layer is responsible only for wiring DOM events to the
//! engine and presenting the returned [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Room polygon, segments and the design session state |
//! | [`shapes`] | Built-in layout factory |
//! | [`grid`] | Cell rasterization against the room polygon |
//! | [`reshape`] | Vertex and segment drag operations |
//! | [`input`] | Workflow steps, handles and the drag state machine |
//! | [`hit`] | Handle placement and hit-testing in display space |
//! | [`pattern`] | Procedural pattern generator |
//! | [`catalog`] | Built-in layouts, pattern presets, tiles and colors |
//! | [`measure`] | Dimension labels, area and tile estimates |
//! | [`viewport`] | Display ↔ canvas coordinate conversion |
//! | [`geometry`] | Points, bounds, shoelace area, point-in-polygon |
//! | [`render`] | Scene rendering to a 2D canvas context |
//! | [`color`] | CSS color helpers |
//! | [`config`] | Scale, canvas and pricing configuration |
//! | [`error`] | Error type for fallible lookups and configuration |
//! | [`consts`] | Shared numeric constants (scale, opacities, hit radius, etc.) |

pub mod catalog;
pub mod color;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod hit;
pub mod input;
pub mod measure;
pub mod pattern;
pub mod render;
pub mod reshape;
pub mod shapes;
pub mod viewport;

pub use config::DesignConfig;
pub use engine::{Action, EngineCore};
pub use error::DesignError;
pub use geometry::Point;
pub use shapes::{ShapeKind, build_shape};
