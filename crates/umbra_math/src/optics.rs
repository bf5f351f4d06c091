//! Reflection, refraction and axis rotations.

use crate::{Mat3, Vec3};

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - n * 2.0 * v.dot(n)
}

/// Refract `v` through a surface with normal `n` and index ratio `eta`.
///
/// Returns the zero vector when the ray cannot be transmitted.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta: f64) -> Vec3 {
    let cos_i = n.dot(v);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        v * eta - n * (eta * cos_i + k.sqrt())
    }
}

/// Rotate `p` by `angle` radians around the X axis.
#[inline]
pub fn rotate_x(p: Vec3, angle: f64) -> Vec3 {
    Mat3::from_rotation_x(angle) * p
}

/// Rotate `p` by `angle` radians around the Y axis.
#[inline]
pub fn rotate_y(p: Vec3, angle: f64) -> Vec3 {
    Mat3::from_rotation_y(angle) * p
}

/// Rotate `p` by `angle` radians around the Z axis.
#[inline]
pub fn rotate_z(p: Vec3, angle: f64) -> Vec3 {
    Mat3::from_rotation_z(angle) * p
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    fn approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-9
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_refract_straight_through() {
        // Head-on rays are not bent, whatever the ratio
        let v = Vec3::new(0.0, -1.0, 0.0);
        assert!(approx_eq(refract(v, Vec3::Y, 1.0 / 1.5), v));
    }

    #[test]
    fn test_refract_total_internal_reflection() {
        let v = Vec3::new(1.0, -0.1, 0.0).normalize();
        assert_eq!(refract(v, Vec3::Y, 1.5), Vec3::ZERO);
    }

    #[test]
    fn test_rotations() {
        // Pitching a forward (+Z) vector by 90 degrees points it down
        assert!(approx_eq(rotate_x(Vec3::Z, FRAC_PI_2), Vec3::NEG_Y));
        assert!(approx_eq(rotate_y(Vec3::Z, FRAC_PI_2), Vec3::X));
        assert!(approx_eq(rotate_z(Vec3::X, FRAC_PI_2), Vec3::Y));
    }
}
