//! Scene description types for Spiderling.
//!
//! A `SceneDescription` is what a scene file says, before any geometry is
//! validated or any renderer state is built from it. Renderers turn it into
//! their own scene representation.

use serde::{Deserialize, Serialize};
use spider_math::{Vec3, Vec4};

use crate::format::{ParseError, ParseResult};

/// Vertical field of view used for every camera loaded from a scene file.
pub const DEFAULT_VERTICAL_FOV: f32 = std::f32::consts::FRAC_PI_4;

/// How the camera projects the view plane onto the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Projection {
    /// Rays fan out from the camera position.
    #[default]
    Perspective,
    /// Rays share the forward axis; no foreshortening.
    Parallel,
}

impl Projection {
    /// Map a scene-file keyword to a projection.
    ///
    /// Only `perspective` selects the perspective model, every other word
    /// falls back to parallel.
    pub fn from_keyword(keyword: &str) -> Self {
        if keyword == "perspective" {
            Projection::Perspective
        } else {
            Projection::Parallel
        }
    }
}

/// Camera parameters as given by a scene file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraDescription {
    pub projection: Projection,
    pub position: Vec3,
    pub focal_length: f32,
    /// Vertical field of view in radians
    #[serde(default = "default_vertical_fov")]
    pub vertical_fov: f32,
}

fn default_vertical_fov() -> f32 {
    DEFAULT_VERTICAL_FOV
}

impl CameraDescription {
    /// Create a camera description with the default field of view.
    pub fn new(projection: Projection, position: Vec3, focal_length: f32) -> Self {
        Self {
            projection,
            position,
            focal_length,
            vertical_fov: DEFAULT_VERTICAL_FOV,
        }
    }
}

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightDescription {
    pub position: Vec3,
}

/// Named reflectance presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialPreset {
    Shiny,
    /// The fallback for every name other than `shiny`
    #[default]
    Matte,
}

impl MaterialPreset {
    /// Map a scene-file material name to a preset.
    pub fn from_name(name: &str) -> Self {
        if name == "shiny" {
            MaterialPreset::Shiny
        } else {
            MaterialPreset::Matte
        }
    }
}

/// Surface material reference: a preset plus how mirror-like it is.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDescription {
    pub preset: MaterialPreset,
    /// Fraction of the final color taken from the reflected ray, in [0, 1]
    pub reflectivity: f32,
}

impl MaterialDescription {
    /// Create a material description, clamping reflectivity to [0, 1].
    pub fn new(preset: MaterialPreset, reflectivity: f32) -> Self {
        Self {
            preset,
            reflectivity: reflectivity.clamp(0.0, 1.0),
        }
    }
}

/// A geometric primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PrimitiveDescription {
    Sphere {
        center: Vec3,
        radius: f32,
        color: Vec4,
        #[serde(default)]
        material: MaterialDescription,
    },
    Plane {
        position: Vec3,
        normal: Vec3,
        color: Vec4,
        #[serde(default)]
        material: MaterialDescription,
    },
}

impl PrimitiveDescription {
    /// Short name of the primitive kind, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            PrimitiveDescription::Sphere { .. } => "sphere",
            PrimitiveDescription::Plane { .. } => "plane",
        }
    }
}

/// Everything a scene file describes.
///
/// Lights and primitives keep file order; a later camera entry replaces an
/// earlier one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDescription {
    pub camera: Option<CameraDescription>,
    pub lights: Vec<LightDescription>,
    pub primitives: Vec<PrimitiveDescription>,
}

impl SceneDescription {
    /// Create an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// The camera, or `MissingCamera` if the file never declared one.
    pub fn camera(&self) -> ParseResult<&CameraDescription> {
        self.camera.as_ref().ok_or(ParseError::MissingCamera)
    }

    /// Set (or replace) the camera.
    pub fn set_camera(&mut self, camera: CameraDescription) {
        if self.camera.is_some() {
            log::debug!("Replacing previously declared camera");
        }
        self.camera = Some(camera);
    }

    /// Append a light.
    pub fn add_light(&mut self, light: LightDescription) {
        self.lights.push(light);
    }

    /// Append a primitive.
    pub fn add_primitive(&mut self, primitive: PrimitiveDescription) {
        self.primitives.push(primitive);
    }
}
