//! Sphere primitive for ray tracing.

use crate::error::{ensure_finite, GeometryError, GeometryResult};
use crate::hittable::{Hittable, HIT_EPSILON, NO_HIT};
use crate::{Color, Material, Ray};
use spider_math::Vec3;

/// A sphere primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
    color: Color,
    material: Material,
}

impl Sphere {
    /// Create a new sphere. The radius must be positive and finite.
    pub fn new(center: Vec3, radius: f32, color: Color, material: Material) -> GeometryResult<Self> {
        ensure_finite(&center.to_array(), "sphere center")?;
        ensure_finite(&[radius], "sphere radius")?;
        if radius <= 0.0 {
            return Err(GeometryError::NonPositiveRadius(radius));
        }

        Ok(Self {
            center,
            radius,
            color,
            material,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn intersection(&self, ray: &Ray) -> f32 {
        let oc = ray.origin - self.center;
        let a = ray.direction.dot(ray.direction);
        let b = 2.0 * ray.direction.dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return NO_HIT;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b - sqrtd) / (2.0 * a);
        let t2 = (-b + sqrtd) / (2.0 * a);
        let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };

        // Nearest root in front of the origin; a root inside the epsilon band
        // is the surface the ray is leaving, so fall through to the far one.
        if near > HIT_EPSILON {
            near
        } else if far > HIT_EPSILON {
            far
        } else {
            NO_HIT
        }
    }

    fn surface_normal(&self, point: Vec3) -> Vec3 {
        (point - self.center) / self.radius
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

    fn unit_sphere(radius: f32) -> Sphere {
        Sphere::new(Vec3::ZERO, radius, Color::ONE, Material::default()).unwrap()
    }

    #[test]
    fn test_head_on_hit() {
        let radius = 2.0;
        let distance = 10.0;
        let sphere = unit_sphere(radius);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -distance), Vec3::Z);

        let t = sphere.intersection(&ray);
        assert!((t - (distance - radius)).abs() < 1e-5);

        let normal = sphere.normal_at(&ray);
        assert!((normal - (-ray.direction)).length() < 1e-5);
        assert!((normal.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_unnormalized_direction() {
        let sphere = unit_sphere(1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 2.0));

        // Parameter is measured in units of the direction length
        assert!((sphere.intersection(&ray) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_miss() {
        let sphere = unit_sphere(1.0);
        let ray = Ray::new(Vec3::new(0.0, 5.0, -5.0), Vec3::Z);

        assert_eq!(sphere.intersection(&ray), NO_HIT);
        assert!(!sphere.intersected(&ray));
        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn test_sphere_behind_origin() {
        let sphere = unit_sphere(1.0);
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);

        assert!(sphere.intersection(&ray) <= 0.0);
        assert!(sphere.hit(&ray).is_none());
    }

    #[test]
    fn test_origin_inside_uses_far_root() {
        let sphere = unit_sphere(3.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let hit = sphere.hit(&ray).unwrap();
        assert!((hit.t - 3.0).abs() < 1e-5);
        assert!((hit.normal - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_origin_on_surface_leaving() {
        let sphere = unit_sphere(1.0);

        // Leaving the surface outward: only root is t = 0, no hit
        let outward = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::Z);
        assert!(sphere.hit(&outward).is_none());

        // Entering the surface: the far side is the hit
        let inward = Ray::new(Vec3::new(0.0, 0.0, 1.0), Vec3::NEG_Z);
        let hit = sphere.hit(&inward).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_invalid_radius_rejected() {
        let zero = Sphere::new(Vec3::ZERO, 0.0, Color::ONE, Material::default());
        assert_eq!(zero, Err(GeometryError::NonPositiveRadius(0.0)));

        let nan = Sphere::new(Vec3::ZERO, f32::NAN, Color::ONE, Material::default());
        assert!(matches!(nan, Err(GeometryError::NonFiniteValue(_))));
    }
}
