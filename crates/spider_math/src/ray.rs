use crate::Vec3;

/// A half-line used for visibility queries.
///
/// The direction is not required to be unit length; camera rays are
/// normalized, reflected rays inherit whatever length the incoming ray had.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Create a new ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The mirror reflection of this ray leaving `point` on a surface with
    /// unit `normal`.
    pub fn reflected(&self, point: Vec3, normal: Vec3) -> Ray {
        Ray::new(point, reflect(self.direction, normal))
    }
}

/// Reflect a vector about a unit normal: `d - 2 (d . n) n`.
#[inline]
pub fn reflect(d: Vec3, n: Vec3) -> Vec3 {
    d - 2.0 * d.dot(n) * n
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }

    #[test]
    fn test_reflect_off_floor() {
        let d = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(d, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_reflect_head_on_reverses() {
        let d = Vec3::new(0.0, 0.0, -2.0);
        assert_eq!(reflect(d, Vec3::Z), Vec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_reflected_ray_starts_at_hit_point() {
        let ray = Ray::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let bounced = ray.reflected(Vec3::ZERO, Vec3::Y);

        assert_eq!(bounced.origin, Vec3::ZERO);
        assert_eq!(bounced.direction, Vec3::Y);
    }
}
