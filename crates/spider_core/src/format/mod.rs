//! Scene file support for Spiderling.
//!
//! Two encodings of a `SceneDescription` are understood:
//!
//! - The line-oriented `RAYTRACER` text format (see [`parse_scene`])
//! - JSON, mirroring the description types field for field
//!
//! # Example
//!
//! ```ignore
//! use spider_core::format::load_scene;
//!
//! let description = load_scene("scenes/mirror.json")?;
//! let camera = description.camera()?;
//! ```

mod loader;
mod parser;

pub use loader::*;
pub use parser::*;
