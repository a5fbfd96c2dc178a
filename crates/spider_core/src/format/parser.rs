//! `RAYTRACER` text scene parser.
//!
//! # Supported Syntax
//!
//! ```text
//! RAYTRACER
//! Camera: <perspective|parallel> x y z focal_length
//! Light: x y z
//! Sphere: x y z radius r g b a [material] [reflectivity]
//! Plane: x y z nx ny nz r g b a [material] [reflectivity]
//! ```
//!
//! Lines with any other leading tag are ignored.

use std::str::SplitWhitespace;

use spider_math::{Vec3, Vec4};
use thiserror::Error;

use crate::scene::{
    CameraDescription, LightDescription, MaterialDescription, MaterialPreset,
    PrimitiveDescription, Projection, SceneDescription,
};

/// Header token that marks a file as a ray tracer scene.
pub const HEADER: &str = "RAYTRACER";

/// Errors that can occur while reading a scene file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a ray tracer scene: first line must start with RAYTRACER")]
    MissingHeader,

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Invalid number '{token}' at line {line}")]
    InvalidNumber { line: usize, token: String },

    #[error("Scene does not declare a camera")]
    MissingCamera,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for parsing operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Whitespace-separated fields of one scene line.
struct Fields<'a> {
    tokens: SplitWhitespace<'a>,
    line: usize,
}

impl<'a> Fields<'a> {
    fn new(rest: SplitWhitespace<'a>, line: usize) -> Self {
        Self { tokens: rest, line }
    }

    fn word(&mut self, what: &str) -> ParseResult<&'a str> {
        self.tokens.next().ok_or_else(|| ParseError::Parse {
            line: self.line,
            message: format!("expected {what}"),
        })
    }

    fn float(&mut self, what: &str) -> ParseResult<f32> {
        let token = self.word(what)?;
        parse_float(token, self.line)
    }

    fn vec3(&mut self, what: &str) -> ParseResult<Vec3> {
        Ok(Vec3::new(self.float(what)?, self.float(what)?, self.float(what)?))
    }

    fn vec4(&mut self, what: &str) -> ParseResult<Vec4> {
        Ok(Vec4::new(
            self.float(what)?,
            self.float(what)?,
            self.float(what)?,
            self.float(what)?,
        ))
    }

    /// Optional `[material] [reflectivity]` tail.
    fn material(&mut self) -> ParseResult<MaterialDescription> {
        let preset = self
            .tokens
            .next()
            .map(MaterialPreset::from_name)
            .unwrap_or_default();
        let reflectivity = match self.tokens.next() {
            Some(token) => parse_float(token, self.line)?,
            None => 0.0,
        };
        Ok(MaterialDescription::new(preset, reflectivity))
    }
}

fn parse_float(token: &str, line: usize) -> ParseResult<f32> {
    token.parse::<f32>().map_err(|_| ParseError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

/// Returns true if the first non-blank line starts with the `RAYTRACER` token.
pub fn has_header(content: &str) -> bool {
    content
        .lines()
        .find(|line| !line.trim().is_empty())
        .and_then(|line| line.split_whitespace().next())
        == Some(HEADER)
}

/// Parse a `RAYTRACER` text scene.
pub fn parse_scene(content: &str) -> ParseResult<SceneDescription> {
    if !has_header(content) {
        return Err(ParseError::MissingHeader);
    }

    let mut description = SceneDescription::new();

    for (index, line) in content.lines().enumerate() {
        let line_number = index + 1;
        let mut tokens = line.split_whitespace();
        let Some(tag) = tokens.next() else {
            continue;
        };
        let mut fields = Fields::new(tokens, line_number);

        match tag {
            "Camera:" => {
                let projection = Projection::from_keyword(fields.word("projection")?);
                let position = fields.vec3("camera position")?;
                let focal_length = fields.float("focal length")?;
                description.set_camera(CameraDescription::new(projection, position, focal_length));
            }
            "Light:" => {
                let position = fields.vec3("light position")?;
                description.add_light(LightDescription { position });
            }
            "Sphere:" => {
                let center = fields.vec3("sphere center")?;
                let radius = fields.float("sphere radius")?;
                let color = fields.vec4("sphere color")?;
                let material = fields.material()?;
                description.add_primitive(PrimitiveDescription::Sphere {
                    center,
                    radius,
                    color,
                    material,
                });
            }
            "Plane:" => {
                let position = fields.vec3("plane position")?;
                let normal = fields.vec3("plane normal")?;
                let color = fields.vec4("plane color")?;
                let material = fields.material()?;
                description.add_primitive(PrimitiveDescription::Plane {
                    position,
                    normal,
                    color,
                    material,
                });
            }
            HEADER => {}
            _ if tag.starts_with('#') => {}
            _ => log::warn!("Ignoring unknown tag '{}' at line {}", tag, line_number),
        }
    }

    log::debug!(
        "Parsed scene: camera={}, {} lights, {} primitives",
        description.camera.is_some(),
        description.lights.len(),
        description.primitives.len()
    );

    Ok(description)
}
