//! Scene file loading.
//!
//! Chooses the encoding from the file extension: `.json` files are read
//! with serde_json, everything else as the `RAYTRACER` text format.

use std::fs;
use std::path::Path;

use crate::format::parser::{parse_scene, ParseResult};
use crate::scene::SceneDescription;

/// Load a scene description from disk.
pub fn load_scene<P: AsRef<Path>>(path: P) -> ParseResult<SceneDescription> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let description = if is_json {
        load_scene_from_json(&content)?
    } else {
        parse_scene(&content)?
    };

    log::info!(
        "Loaded {}: {} lights, {} primitives",
        path.display(),
        description.lights.len(),
        description.primitives.len()
    );

    Ok(description)
}

/// Decode a JSON scene description.
pub fn load_scene_from_json(content: &str) -> ParseResult<SceneDescription> {
    Ok(serde_json::from_str(content)?)
}
