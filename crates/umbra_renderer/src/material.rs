//! Light scattering at surface hits.

use rand::RngCore;
use umbra_core::{Color, Material};
use umbra_math::{random_in_unit_sphere, reflect, refract, Ray, Vec3};

/// Scattered rays start this many epsilons off the surface so the next
/// march does not immediately re-hit it.
pub const SURFACE_BIAS: f64 = 1.2;

/// Jitter applied to dielectric directions to model slight roughness.
pub const DIELECTRIC_ROUGHNESS: f64 = 0.1;

/// A point where a marched ray converged on a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Hit position
    pub position: Vec3,
    /// Outward unit normal of the surface
    pub normal: Vec3,
}

/// Outcome of one scattering event.
#[derive(Debug, Clone, Copy)]
pub struct ScatterResult {
    /// Light emitted by the surface
    pub emissive: Color,
    /// Multiplier applied to all light gathered after this bounce
    pub attenuation: Color,
    /// Next ray to trace
    pub ray: Ray,
}

/// Materials that turn an incoming ray into a scattered one.
pub trait Scatter {
    /// Scatter a ray arriving along `incoming` (unit length) at `hit`.
    fn scatter(
        &self,
        hit: &SurfaceHit,
        incoming: Vec3,
        epsilon: f64,
        rng: &mut dyn RngCore,
    ) -> ScatterResult;
}

impl Scatter for Material {
    fn scatter(
        &self,
        hit: &SurfaceHit,
        incoming: Vec3,
        epsilon: f64,
        rng: &mut dyn RngCore,
    ) -> ScatterResult {
        let SurfaceHit { position, normal } = *hit;

        let (direction, emissive, attenuation) = match *self {
            Material::Lambertian {
                reflectance,
                albedo,
                emissive,
            } => {
                let target = position + normal + random_in_unit_sphere(rng);
                (target - position, emissive, albedo * reflectance)
            }
            Material::Metallic {
                shininess,
                emissive,
            } => {
                let fuzz = random_in_unit_sphere(rng) * (1.0 - shininess);
                (reflect(incoming, normal) + fuzz, emissive, Color::ONE)
            }
            Material::Dielectric {
                refractive_index,
                emissive,
            } => {
                let direction = dielectric_direction(incoming, normal, refractive_index)
                    + random_in_unit_sphere(rng) * DIELECTRIC_ROUGHNESS;
                (direction, emissive, Color::ONE)
            }
        };

        // Catch degenerate scatter direction
        let direction = if direction.length_squared() < 1e-12 {
            normal
        } else {
            direction
        };

        ScatterResult {
            emissive,
            attenuation,
            ray: Ray::new(position, direction).advance(epsilon * SURFACE_BIAS),
        }
    }
}

/// Reflected or refracted direction through a dielectric surface.
fn dielectric_direction(incoming: Vec3, normal: Vec3, refractive_index: f64) -> Vec3 {
    // `front` is true when the ray travels along the outward normal, i.e.
    // leaves the sphere
    let front = incoming.dot(-normal) < 0.0;
    let ratio = if front {
        refractive_index
    } else {
        1.0 / refractive_index
    };

    let cos_theta = (-incoming).dot(normal).min(1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();

    if ratio * sin_theta > 1.0 {
        reflect(incoming, normal)
    } else {
        let facing = if front { -normal } else { normal };
        refract(incoming, facing, ratio)
    }
}
