//! Infinite plane primitive.

use crate::error::{ensure_finite, GeometryError, GeometryResult};
use crate::hittable::{Hittable, NO_HIT};
use crate::{Color, Material, Ray};
use spider_math::Vec3;

/// An infinite plane through `position` with a unit `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    position: Vec3,
    normal: Vec3,
    color: Color,
    material: Material,
}

impl Plane {
    /// Create a new plane. The normal is normalized here and must be non-zero.
    pub fn new(position: Vec3, normal: Vec3, color: Color, material: Material) -> GeometryResult<Self> {
        ensure_finite(&position.to_array(), "plane position")?;
        ensure_finite(&normal.to_array(), "plane normal")?;
        let normal = normal.try_normalize().ok_or(GeometryError::ZeroNormal)?;

        Ok(Self {
            position,
            normal,
            color,
            material,
        })
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

impl Hittable for Plane {
    fn intersection(&self, ray: &Ray) -> f32 {
        let denominator = ray.direction.dot(self.normal);
        // Parallel to the plane
        if denominator == 0.0 {
            return NO_HIT;
        }
        (self.position - ray.origin).dot(self.normal) / denominator
    }

    fn surface_normal(&self, _point: Vec3) -> Vec3 {
        self.normal
    }

    fn color(&self) -> Color {
        self.color
    }

    fn material(&self) -> Material {
        self.material
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Plane {
        Plane::new(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, Color::ONE, Material::default()).unwrap()
    }

    #[test]
    fn test_hit_from_above() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(3.0, 4.0, 0.0), Vec3::NEG_Y);

        assert!((plane.intersection(&ray) - 5.0).abs() < 1e-6);
        assert_eq!(plane.normal_at(&ray), Vec3::Y);
    }

    #[test]
    fn test_parallel_ray_is_sentinel() {
        let plane = floor();
        let ray = Ray::new(Vec3::new(0.0, 4.0, 0.0), Vec3::new(1.0, 0.0, 1.0));

        assert_eq!(ray.direction.dot(plane.normal()), 0.0);
        let t = plane.intersection(&ray);
        assert_eq!(t, NO_HIT);
        assert!(t.is_finite());
        assert!(!plane.intersected(&ray));
    }

    #[test]
    fn test_plane_behind_ray() {
        let plane = floor();
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);

        assert!(plane.intersection(&ray) < 0.0);
        assert!(plane.hit(&ray).is_none());
    }

    #[test]
    fn test_normal_is_normalized() {
        let plane =
            Plane::new(Vec3::ZERO, Vec3::new(0.0, 0.0, 4.0), Color::ONE, Material::default())
                .unwrap();
        assert_eq!(plane.normal(), Vec3::Z);
    }

    #[test]
    fn test_zero_normal_rejected() {
        let result = Plane::new(Vec3::ZERO, Vec3::ZERO, Color::ONE, Material::default());
        assert_eq!(result, Err(GeometryError::ZeroNormal));
    }
}
