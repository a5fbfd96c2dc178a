//! Hittable trait, Hit record, and the closed set of scene objects.

use crate::error::GeometryResult;
use crate::{Color, Material, Plane, Ray, Sphere};
use spider_core::PrimitiveDescription;
use spider_math::{Interval, Vec3};

/// Scalar returned by `intersection` when the ray misses.
///
/// Any `t <= 0` means "no visible hit"; this is the value used when there
/// is nothing to report at all (parallel ray, negative discriminant).
pub const NO_HIT: f32 = 0.0;

/// Hits closer than this to the ray origin are ignored, so a ray leaving
/// a surface does not immediately hit that same surface again.
pub const HIT_EPSILON: f32 = 1e-4;

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at the intersection (not flipped toward the ray)
    pub normal: Vec3,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable {
    /// Closest intersection parameter along the ray.
    ///
    /// Returns a non-positive value (usually `NO_HIT`) when there is no
    /// visible hit. Never panics and never divides by zero.
    fn intersection(&self, ray: &Ray) -> f32;

    /// Surface normal at a point on the surface.
    fn surface_normal(&self, point: Vec3) -> Vec3;

    fn color(&self) -> Color;

    fn material(&self) -> Material;

    /// Whether the ray hits this object in front of its origin.
    fn intersected(&self, ray: &Ray) -> bool {
        self.intersection(ray) > 0.0
    }

    /// Point where the ray meets the surface.
    fn intersection_point(&self, ray: &Ray) -> Vec3 {
        ray.at(self.intersection(ray))
    }

    /// Normal at the point where the ray meets the surface.
    fn normal_at(&self, ray: &Ray) -> Vec3 {
        self.surface_normal(self.intersection_point(ray))
    }

    /// Full hit record, or `None` unless `t` lies in `(HIT_EPSILON, inf)`.
    fn hit(&self, ray: &Ray) -> Option<Hit> {
        let t = self.intersection(ray);
        if !Interval::forward(HIT_EPSILON).surrounds(t) {
            return None;
        }
        let point = ray.at(t);
        Some(Hit {
            t,
            point,
            normal: self.surface_normal(point),
        })
    }
}

/// Every primitive kind a scene can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    Plane(Plane),
    Sphere(Sphere),
}

impl SceneObject {
    /// Build and validate an object from a scene description.
    pub fn from_description(description: &PrimitiveDescription) -> GeometryResult<Self> {
        match description {
            PrimitiveDescription::Sphere {
                center,
                radius,
                color,
                material,
            } => Ok(SceneObject::Sphere(Sphere::new(
                *center,
                *radius,
                *color,
                Material::from_description(material),
            )?)),
            PrimitiveDescription::Plane {
                position,
                normal,
                color,
                material,
            } => Ok(SceneObject::Plane(Plane::new(
                *position,
                *normal,
                *color,
                Material::from_description(material),
            )?)),
        }
    }
}

impl From<Plane> for SceneObject {
    fn from(plane: Plane) -> Self {
        SceneObject::Plane(plane)
    }
}

impl From<Sphere> for SceneObject {
    fn from(sphere: Sphere) -> Self {
        SceneObject::Sphere(sphere)
    }
}

impl Hittable for SceneObject {
    fn intersection(&self, ray: &Ray) -> f32 {
        match self {
            SceneObject::Plane(plane) => plane.intersection(ray),
            SceneObject::Sphere(sphere) => sphere.intersection(ray),
        }
    }

    fn surface_normal(&self, point: Vec3) -> Vec3 {
        match self {
            SceneObject::Plane(plane) => plane.surface_normal(point),
            SceneObject::Sphere(sphere) => sphere.surface_normal(point),
        }
    }

    fn color(&self) -> Color {
        match self {
            SceneObject::Plane(plane) => plane.color(),
            SceneObject::Sphere(sphere) => sphere.color(),
        }
    }

    fn material(&self) -> Material {
        match self {
            SceneObject::Plane(plane) => plane.material(),
            SceneObject::Sphere(sphere) => sphere.material(),
        }
    }
}
