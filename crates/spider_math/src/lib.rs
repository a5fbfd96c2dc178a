// Re-export glam for convenience
pub use glam::*;

// Spiderling math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::{reflect, Ray};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec4_color_ops() {
        let a = Vec4::new(0.2, 0.4, 0.6, 1.0);
        let b = a * 0.5;
        assert_eq!(b, Vec4::new(0.1, 0.2, 0.3, 0.5));
        assert_eq!(a.clamp(Vec4::ZERO, Vec4::splat(0.5)).w, 0.5);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a.dot(b), 32.0);
    }
}
