//! Error type shared by the engine's fallible entry points.

/// Error returned when an identifier or configuration value is not usable.
///
/// Geometric edge cases never produce this type: out-of-range drags are
/// clamped, stale handles are ignored and degenerate polygons are accepted.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DesignError {
    /// The layout name is not one of the built-in shape kinds.
    #[error("unknown shape kind: {0}")]
    UnknownShape(String),
    /// No pattern preset is registered under this id.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),
    /// No tile type is registered under this id.
    #[error("unknown tile type: {0}")]
    UnknownTile(String),
    /// No paint or edge color is registered under this id.
    #[error("unknown color: {0}")]
    UnknownColor(String),
    /// A configuration value failed to parse or validate.
    #[error("invalid config {key}: {reason}")]
    InvalidConfig { key: String, reason: String },
}
