//! Sphere primitive for the distance field.

use umbra_math::Vec3;

use crate::error::{SceneError, SceneResult};
use crate::material::Material;

/// A sphere owning its material.
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Material,
}

impl Sphere {
    /// Create a new sphere.
    ///
    /// Zero or negative radii are rejected: surface normals are computed by
    /// normalizing `p - center`, which needs a sphere with some extent.
    pub fn new(center: Vec3, radius: f64, material: Material) -> SceneResult<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SceneError::InvalidRadius(radius));
        }
        if !center.is_finite() {
            return Err(SceneError::NonFiniteCenter);
        }
        Ok(Self {
            center,
            radius,
            material,
        })
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Signed distance from `p` to the surface (negative inside).
    #[inline]
    pub fn signed_distance(&self, p: Vec3) -> f64 {
        p.distance(self.center) - self.radius
    }

    /// Outward unit normal for a point near the surface.
    ///
    /// Falls back to +Y at the exact center.
    #[inline]
    pub fn normal_at(&self, p: Vec3) -> Vec3 {
        (p - self.center).try_normalize().unwrap_or(Vec3::Y)
    }
}
