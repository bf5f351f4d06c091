//! Umbra math - double precision vector algebra for the SDF path tracer.
//!
//! Sphere tracing accumulates many small steps along a ray, so everything
//! here is `f64` (`glam::DVec3`) rather than the usual `f32` types.

// Re-export glam for convenience
pub use glam::{self, DMat3 as Mat3, DVec3 as Vec3};

mod interval;
mod optics;
mod ray;
mod sampling;

pub use interval::Interval;
pub use optics::{reflect, refract, rotate_x, rotate_y, rotate_z};
pub use ray::Ray;
pub use sampling::{gen_f64, gen_range, random_in_unit_sphere};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_creation() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vec3::splat(3.0));
        // Hadamard product is the plain `*` on glam vectors
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
        assert!((Vec3::new(3.0, 4.0, 0.0).normalize().length() - 1.0).abs() < 1e-12);
    }
}
