//! Spiderling Core - renderer-agnostic scene descriptions.
//!
//! This crate provides:
//!
//! - **Description types**: `SceneDescription`, `CameraDescription`,
//!   `LightDescription`, `PrimitiveDescription`, `MaterialDescription`
//! - **Scene files**: the line-oriented `RAYTRACER` text format and a JSON
//!   equivalent
//!
//! # Example
//!
//! ```ignore
//! use spider_core::load_scene;
//!
//! let description = load_scene("scenes/spheres.txt")?;
//! println!("Loaded {} lights, {} primitives",
//!     description.lights.len(),
//!     description.primitives.len());
//! ```

pub mod format;
pub mod scene;

// Re-export commonly used types
pub use format::{
    has_header, load_scene, load_scene_from_json, parse_scene, ParseError, ParseResult,
};
pub use scene::{
    CameraDescription, LightDescription, MaterialDescription, MaterialPreset,
    PrimitiveDescription, Projection, SceneDescription, DEFAULT_VERTICAL_FOV,
};
