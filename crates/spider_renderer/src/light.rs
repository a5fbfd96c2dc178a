//! Point lights and the local illumination model.

use crate::{Color, Material};
use spider_math::Vec3;

/// Intensity applied to the surface color for both the ambient and
/// Lambertian terms. Shared by every light.
pub const AMBIENT_INTENSITY: f32 = 0.7;

/// A point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
}

impl Light {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Blinn-Phong style shading of one surface point by this light.
    ///
    /// Blends `ambient : specular : diffuse` with weights `1 : 2 : 3`,
    /// divides by 3 and clamps each RGBA channel to [0, 1]. `eye` is the
    /// point the specular highlight is computed for.
    pub fn shade(
        &self,
        surface_point: Vec3,
        surface_normal: Vec3,
        surface_color: Color,
        material: &Material,
        eye: Vec3,
    ) -> Color {
        let ambient = surface_color * AMBIENT_INTENSITY;

        let light_direction = (self.position - surface_point).normalize_or_zero();
        let lambertian =
            surface_color * AMBIENT_INTENSITY * surface_normal.dot(light_direction).max(0.0);

        let view_direction = (eye - surface_point).normalize_or_zero();
        // Coincident points and opposed directions give zero vectors, not NaN
        let half_vector = (view_direction + light_direction).normalize_or_zero();
        let specular = material.specular
            * surface_normal
                .dot(half_vector)
                .max(0.0)
                .powf(material.shininess);

        ((ambient + 2.0 * specular + 3.0 * lambertian) / 3.0).clamp(Color::ZERO, Color::ONE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_head_on_weighting() {
        // Light, eye and normal all line up: n.l = n.h = 1
        let light = Light::new(Vec3::new(0.0, 0.0, -4.0));
        let color = Color::new(0.3, 0.3, 0.3, 1.0);
        let material = Material::matte();

        let shaded = light.shade(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, color, &material, Vec3::ZERO);

        // (0.7c + 2ks + 3 * 0.7c) / 3
        let expected = (color * AMBIENT_INTENSITY * 4.0 + 2.0 * material.specular) / 3.0;
        assert!((shaded - expected).abs().max_element() < EPS);
        assert!((shaded.x - 0.413_333).abs() < EPS);
        assert!((shaded.z - 0.346_667).abs() < EPS);
        assert!((shaded.w - 0.933_333).abs() < EPS);
    }

    #[test]
    fn test_diffuse_never_exceeds_head_on_maximum() {
        let color = Color::new(0.5, 0.5, 0.5, 1.0);
        let point = Vec3::new(0.0, 0.0, -5.0);
        // No specular contribution, so only ambient + diffuse remain
        let material = Material::new(Color::ZERO, Color::ZERO, Color::ZERO, 1.0);
        let max = (color * AMBIENT_INTENSITY * 4.0 / 3.0).x;

        for offset in [0.0, 0.5, 1.0, 3.0, 10.0] {
            let light = Light::new(point + Vec3::new(offset, 0.0, 1.0));
            let shaded = light.shade(point, Vec3::Z, color, &material, Vec3::ZERO);
            assert!(shaded.x <= max + EPS);
        }
    }

    #[test]
    fn test_light_behind_surface_leaves_ambient() {
        let light = Light::new(Vec3::new(0.0, 0.0, -10.0));
        let color = Color::new(0.6, 0.3, 0.9, 1.0);
        let material = Material::new(Color::ZERO, Color::ZERO, Color::ZERO, 1.0);

        let shaded = light.shade(Vec3::new(0.0, 0.0, -5.0), Vec3::Z, color, &material, Vec3::ZERO);

        let expected = color * AMBIENT_INTENSITY / 3.0;
        assert!((shaded - expected).abs().max_element() < EPS);
    }

    #[test]
    fn test_output_clamped() {
        let light = Light::new(Vec3::new(0.0, 0.0, -4.0));
        let material = Material::new(Color::ZERO, Color::ZERO, Color::splat(5.0), 1.0);

        let shaded = light.shade(
            Vec3::new(0.0, 0.0, -5.0),
            Vec3::Z,
            Color::splat(3.0),
            &material,
            Vec3::ZERO,
        );
        assert_eq!(shaded, Color::ONE);
    }

    #[test]
    fn test_coincident_points_stay_finite() {
        let point = Vec3::new(0.0, 0.0, -5.0);
        let color = Color::new(0.5, 0.5, 0.5, 1.0);
        let material = Material::shiny();

        // Light sitting on the surface: no diffuse term
        let on_light = Light::new(point).shade(point, Vec3::Z, color, &material, Vec3::ZERO);
        assert!(on_light.is_finite());
        assert!(on_light.x >= (color * AMBIENT_INTENSITY / 3.0).x - EPS);

        // Eye sitting on the surface
        let light = Light::new(Vec3::new(0.0, 0.0, -4.0));
        let at_eye = light.shade(point, Vec3::Z, color, &material, point);
        assert!(at_eye.is_finite());

        // Both at once
        let both = Light::new(point).shade(point, Vec3::Z, color, &material, point);
        assert!(both.is_finite());
        assert!((both - color * AMBIENT_INTENSITY / 3.0).abs().max_element() < EPS);
    }

    #[test]
    fn test_specular_follows_eye() {
        let light = Light::new(Vec3::new(0.0, 0.0, -4.0));
        let color = Color::ZERO;
        let material = Material::shiny();
        let point = Vec3::new(0.0, 0.0, -5.0);

        let facing = light.shade(point, Vec3::Z, color, &material, Vec3::ZERO);
        let grazing = light.shade(point, Vec3::Z, color, &material, Vec3::new(100.0, 0.0, -5.0));
        assert!(facing.x > grazing.x);
    }
}
