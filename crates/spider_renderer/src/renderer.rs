//! Render configuration, statistics, and color conversion.

use crate::Color;
use spider_math::{Interval, Vec3};
use std::fmt;

/// Where specular highlights are computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EyePoint {
    /// The fixed world origin, regardless of where the camera is. Matches
    /// reference renders where the camera sits at the origin.
    #[default]
    WorldOrigin,
    /// The active camera position.
    Camera,
}

impl EyePoint {
    /// Resolve to a world-space point for a camera at `camera_position`.
    pub fn resolve(self, camera_position: Vec3) -> Vec3 {
        match self {
            EyePoint::WorldOrigin => Vec3::ZERO,
            EyePoint::Camera => camera_position,
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum number of reflection bounces after the primary ray
    pub max_bounces: u32,
    /// Eye point for specular highlights
    pub eye: EyePoint,
    /// Color returned when a ray hits nothing
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_bounces: 3,
            eye: EyePoint::WorldOrigin,
            background: Color::ZERO,
        }
    }
}

/// Counters gathered while tracing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Camera rays, one per pixel
    pub primary_rays: u64,
    /// Rays spawned by mirror reflection
    pub reflection_rays: u64,
    /// Calls to `Light::shade`
    pub light_evaluations: u64,
    /// Deepest object-scan level reached (the primary ray is level 1)
    pub deepest_level: u32,
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} primary rays, {} reflection rays, {} light evaluations, depth {}",
            self.primary_rays, self.reflection_rays, self.light_evaluations, self.deepest_level
        )
    }
}

/// Clamp every channel to [0, 1].
#[inline]
pub fn clamp_color(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
        Interval::UNIT.clamp(color.w),
    )
}

/// Convert a color to 8-bit RGBA. No gamma is applied.
pub fn color_to_rgba(color: Color) -> [u8; 4] {
    let c = clamp_color(color) * 255.0;
    [c.x as u8, c.y as u8, c.z as u8, c.w as u8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_rgba() {
        assert_eq!(color_to_rgba(Color::ONE), [255, 255, 255, 255]);
        assert_eq!(color_to_rgba(Color::ZERO), [0, 0, 0, 0]);
        assert_eq!(color_to_rgba(Color::new(2.0, -1.0, 0.5, 1.0)), [255, 0, 127, 255]);
    }

    #[test]
    fn test_eye_point_resolve() {
        let camera = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(EyePoint::WorldOrigin.resolve(camera), Vec3::ZERO);
        assert_eq!(EyePoint::Camera.resolve(camera), camera);
    }
}
