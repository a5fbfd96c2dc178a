//! Spiderling Renderer - recursive ray tracing.
//!
//! A Whitted-style ray tracer over planes and spheres:
//! - Perspective and parallel camera ray generation
//! - Blinn-Phong style local shading from point lights
//! - Mirror reflection up to a configurable bounce limit
//!
//! Rendering is a flat, single-threaded loop over pixels.

mod camera;
mod error;
mod framebuffer;
mod hittable;
mod light;
mod material;
mod plane;
mod renderer;
mod scene;
mod sphere;

pub use camera::{Camera, CameraInput, CameraMove, FrustumBounds, DEFAULT_MOVE_STEP};
pub use error::{GeometryError, GeometryResult, SceneError};
pub use framebuffer::Framebuffer;
pub use hittable::{Hit, Hittable, SceneObject, HIT_EPSILON, NO_HIT};
pub use light::{Light, AMBIENT_INTENSITY};
pub use material::{Color, Material};
pub use plane::Plane;
pub use renderer::{clamp_color, color_to_rgba, EyePoint, RenderConfig, RenderStats};
pub use scene::Scene;
pub use sphere::Sphere;

/// Re-export the scene description types the renderer consumes
pub use spider_core::{Projection, SceneDescription};
/// Re-export Vec3 and common math types from spider_math
pub use spider_math::{Interval, Ray, Vec3, Vec4};
