//! Surface reflectance coefficients.

use spider_core::{MaterialDescription, MaterialPreset};
use spider_math::Vec4;

/// Color type alias (RGBA values typically 0-1)
pub type Color = Vec4;

/// Per-surface coefficients for the local illumination model.
///
/// Copied by value into each object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Ambient coefficient. The tracer's shading takes ambient from the
    /// surface color instead, so this only travels with the material.
    pub ambient: Color,
    pub diffuse: Color,
    pub specular: Color,
    /// Blinn-Phong exponent
    pub shininess: f32,
    /// Weight of the reflected ray in the final color, in [0, 1]
    pub reflectivity: f32,
}

impl Material {
    /// Create a material from explicit coefficients.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, shininess: f32) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            shininess,
            reflectivity: 0.0,
        }
    }

    /// Tight, bright highlights.
    pub fn shiny() -> Self {
        Self::new(
            Color::ZERO,
            Color::new(0.9, 0.75, 0.8, 0.0),
            Color::new(0.9, 0.8, 0.7, 0.0),
            9.0,
        )
    }

    /// Broad, dim highlights. Used for every unrecognised material name.
    pub fn matte() -> Self {
        Self::new(
            Color::ZERO,
            Color::new(0.4, 0.3, 0.4, 0.0),
            Color::new(0.2, 0.2, 0.1, 0.0),
            1.0,
        )
    }

    pub fn from_preset(preset: MaterialPreset) -> Self {
        match preset {
            MaterialPreset::Shiny => Self::shiny(),
            MaterialPreset::Matte => Self::matte(),
        }
    }

    pub fn from_description(description: &MaterialDescription) -> Self {
        Self::from_preset(description.preset).with_reflectivity(description.reflectivity)
    }

    /// Set how mirror-like the surface is, clamped to [0, 1].
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity.clamp(0.0, 1.0);
        self
    }

    /// Whether tracing should spawn a reflected ray off this surface.
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::matte()
    }
}
