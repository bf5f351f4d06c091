//! Pinhole camera for ray generation.

use umbra_math::{rotate_x, rotate_y, rotate_z, Ray, Vec3};

use crate::error::{RenderError, RenderResult};

/// Camera at a position looking down +Z, rotated by pitch, yaw and roll.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vec3,
    /// Distance to the image plane; larger values narrow the field of view
    focal_distance: f64,
    // Rotation in radians around X, Y and Z, applied in that order
    pitch: f64,
    yaw: f64,
    roll: f64,
}

impl Camera {
    /// Create a new camera with default settings.
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -40.0),
            focal_distance: 30.0,
            pitch: 0.0,
            yaw: 0.0,
            roll: 0.0,
        }
    }

    /// Set camera position.
    pub fn with_position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Set the focal distance.
    pub fn with_focal_distance(mut self, focal_distance: f64) -> Self {
        self.focal_distance = focal_distance;
        self
    }

    /// Set rotation (radians).
    pub fn with_rotation(mut self, pitch: f64, yaw: f64, roll: f64) -> Self {
        self.pitch = pitch;
        self.yaw = yaw;
        self.roll = roll;
        self
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn focal_distance(&self) -> f64 {
        self.focal_distance
    }

    /// Check that every generated ray will have a usable direction.
    pub fn validate(&self) -> RenderResult<()> {
        if !(self.focal_distance.is_finite() && self.focal_distance > 0.0) {
            return Err(RenderError::InvalidCamera(format!(
                "focal distance must be positive, got {}",
                self.focal_distance
            )));
        }
        if !self.position.is_finite() {
            return Err(RenderError::InvalidCamera("position must be finite".into()));
        }
        if ![self.pitch, self.yaw, self.roll].iter().all(|a| a.is_finite()) {
            return Err(RenderError::InvalidCamera("rotation must be finite".into()));
        }
        Ok(())
    }

    /// Generate the ray through image coordinates (x, y).
    ///
    /// `x` and `y` are in pixels and may carry a sub-pixel offset.
    pub fn get_ray(&self, x: f64, y: f64, width: f64, height: f64, aspect_ratio: f64) -> Ray {
        let nx = x / width;
        let ny = y / height;

        let look = Vec3::new((nx - 0.5) * aspect_ratio, -(ny - 0.5), self.focal_distance);
        let look = rotate_z(rotate_y(rotate_x(look, self.pitch), self.yaw), self.roll);

        Ray::new(self.position, look)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_center_ray_looks_forward() {
        let camera = Camera::new().with_position(Vec3::new(1.0, 2.0, 3.0));
        let ray = camera.get_ray(50.0, 50.0, 100.0, 100.0, 1.0);

        assert_eq!(ray.origin(), Vec3::new(1.0, 2.0, 3.0));
        assert!((ray.direction() - Vec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_image_axes() {
        let camera = Camera::new().with_focal_distance(1.0);

        // Top-left corner points left and up
        let corner = camera.get_ray(0.0, 0.0, 200.0, 100.0, 2.0).direction();
        assert!(corner.x < 0.0);
        assert!(corner.y > 0.0);

        // Aspect ratio widens the horizontal spread
        let right = camera.get_ray(200.0, 50.0, 200.0, 100.0, 2.0).direction();
        let expected = Vec3::new(1.0, 0.0, 1.0).normalize();
        assert!((right - expected).length() < 1e-12);
    }

    #[test]
    fn test_pitch_looks_down() {
        let camera = Camera::new().with_rotation(FRAC_PI_2, 0.0, 0.0);
        let ray = camera.get_ray(0.5, 0.5, 1.0, 1.0, 1.0);

        assert!((ray.direction() - Vec3::NEG_Y).length() < 1e-12);
    }

    #[test]
    fn test_validate() {
        assert!(Camera::new().validate().is_ok());
        assert!(matches!(
            Camera::new().with_focal_distance(0.0).validate(),
            Err(RenderError::InvalidCamera(_))
        ));
        assert!(Camera::new()
            .with_rotation(f64::NAN, 0.0, 0.0)
            .validate()
            .is_err());
    }
}
