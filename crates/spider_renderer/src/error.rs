//! Construction-time validation errors.

use spider_core::ParseError;
use thiserror::Error;

/// Degenerate geometry rejected before it can turn into NaNs mid-render.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("Sphere radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("Plane normal must be non-zero")]
    ZeroNormal,

    #[error("Non-finite value for {0}")]
    NonFiniteValue(&'static str),

    #[error("Viewport must be at least 1x1, got {width}x{height}")]
    EmptyViewport { width: f32, height: f32 },
}

/// Errors raised while building a `Scene` from a description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Invalid scene description: {0}")]
    Description(#[from] ParseError),

    #[error("Degenerate geometry: {0}")]
    Geometry(#[from] GeometryError),
}

/// Result type for geometry construction.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Check that every component of a value is finite.
pub(crate) fn ensure_finite(value: &[f32], what: &'static str) -> GeometryResult<()> {
    if value.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(GeometryError::NonFiniteValue(what))
    }
}
