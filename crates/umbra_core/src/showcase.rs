//! Procedural showcase scene: a few balls resting on a large ground sphere
//! under an emissive sky sphere.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use umbra_math::{gen_f64, Vec3};

use crate::error::SceneResult;
use crate::material::{Color, Material};
use crate::scene::Scene;
use crate::sphere::Sphere;

/// Radius of the ground sphere; its top touches the origin.
pub const GROUND_RADIUS: f64 = 100.0;

/// Build the showcase scene with `ball_count` random balls.
///
/// The same `seed` always produces the same scene.
pub fn showcase_scene(ball_count: u32, seed: u64) -> SceneResult<Scene> {
    let mut scene = Scene::new();
    let ground_center = Vec3::new(0.0, -GROUND_RADIUS, 0.0);

    // Ground
    scene.add_sphere(Sphere::new(
        ground_center,
        GROUND_RADIUS,
        Material::lambertian(0.3, Color::new(0.7, 0.4, 0.4), Color::ZERO)?,
    )?);

    // Sky
    scene.add_sphere(Sphere::new(
        Vec3::new(0.0, 5000.0, 0.0),
        4000.0,
        Material::emitter(Color::splat(0.7))?,
    )?);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut spiral_distance = 0.0;

    for _ in 0..ball_count {
        let radius = 0.1 + gen_f64(&mut rng) * 0.5;
        let material = random_material(&mut rng)?;

        // Walk outward on a loose spiral and drop the ball onto the ground
        let angle = gen_f64(&mut rng) * std::f64::consts::TAU;
        spiral_distance += gen_f64(&mut rng) * 0.01;
        let up = Vec3::new(
            angle.sin() * spiral_distance,
            1.0,
            angle.cos() * spiral_distance,
        )
        .normalize();
        let center = up * (GROUND_RADIUS + radius) + ground_center;

        scene.add_sphere(Sphere::new(center, radius, material)?);
    }

    log::info!("Created showcase scene with {} spheres", scene.len());
    Ok(scene)
}

fn random_material(rng: &mut dyn RngCore) -> SceneResult<Material> {
    match (gen_f64(rng) * 2.999) as u32 {
        0 => {
            let albedo = Color::new(gen_f64(rng), gen_f64(rng), gen_f64(rng));
            let emissive = Color::new(gen_f64(rng), gen_f64(rng), gen_f64(rng)) * 0.2;
            Material::lambertian(gen_f64(rng), albedo, emissive)
        }
        1 => Material::metallic(0.5 + 0.5 * gen_f64(rng), Color::ZERO),
        _ => Material::dielectric(1.3, Color::ZERO),
    }
}
