//! Surface materials.
//!
//! Materials form a closed set: every shading decision is an exhaustive
//! `match`, so there is no "unknown material" case to handle at render time.

use umbra_math::{Interval, Vec3};

use crate::error::{SceneError, SceneResult};

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

/// How a surface scatters and emits light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Diffuse surface scattering around the normal.
    Lambertian {
        /// Fraction of incoming light that is reflected, in [0, 1]
        reflectance: f64,
        /// Surface tint
        albedo: Color,
        /// Emitted light
        emissive: Color,
    },
    /// Mirror-like surface. `shininess` 1.0 is a perfect mirror.
    Metallic { shininess: f64, emissive: Color },
    /// Transparent surface that refracts or reflects.
    Dielectric { refractive_index: f64, emissive: Color },
}

impl Material {
    /// Create a Lambertian material.
    pub fn lambertian(reflectance: f64, albedo: Color, emissive: Color) -> SceneResult<Self> {
        if !Interval::UNIT.contains(reflectance) {
            return Err(SceneError::InvalidReflectance(reflectance));
        }
        check_color(albedo)?;
        check_color(emissive)?;
        Ok(Self::Lambertian {
            reflectance,
            albedo,
            emissive,
        })
    }

    /// Create a metallic material.
    ///
    /// - `shininess`: 1.0 = perfect mirror, 0.0 = very rough
    pub fn metallic(shininess: f64, emissive: Color) -> SceneResult<Self> {
        if !Interval::UNIT.contains(shininess) {
            return Err(SceneError::InvalidShininess(shininess));
        }
        check_color(emissive)?;
        Ok(Self::Metallic {
            shininess,
            emissive,
        })
    }

    /// Create a dielectric (glass-like) material.
    ///
    /// - `refractive_index`: 1.0 = air, 1.3 = water, 1.5 = glass
    pub fn dielectric(refractive_index: f64, emissive: Color) -> SceneResult<Self> {
        if !(refractive_index.is_finite() && refractive_index > 0.0) {
            return Err(SceneError::InvalidRefractiveIndex(refractive_index));
        }
        check_color(emissive)?;
        Ok(Self::Dielectric {
            refractive_index,
            emissive,
        })
    }

    /// A light source: emits `color` and reflects nothing.
    pub fn emitter(color: Color) -> SceneResult<Self> {
        Self::lambertian(0.0, Color::ONE, color)
    }

    /// Light emitted by this material.
    pub fn emissive(&self) -> Color {
        match *self {
            Material::Lambertian { emissive, .. }
            | Material::Metallic { emissive, .. }
            | Material::Dielectric { emissive, .. } => emissive,
        }
    }

    /// Check if this material emits light.
    pub fn is_emissive(&self) -> bool {
        self.emissive().length_squared() > 0.0
    }
}

fn check_color(color: Color) -> SceneResult<()> {
    if color.is_finite() {
        Ok(())
    } else {
        Err(SceneError::NonFiniteColor)
    }
}
