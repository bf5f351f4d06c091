//! Sphere tracing through the scene's distance field.

use umbra_core::Scene;
use umbra_math::{Ray, Vec3};

/// Result of marching a single ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarchOutcome {
    /// Converged on a surface after `steps` distance evaluations.
    Hit { position: Vec3, steps: u32 },
    /// Escaped or failed to converge within the step budget.
    Miss { steps: u32 },
}

impl MarchOutcome {
    /// Hit position, if any.
    pub fn position(&self) -> Option<Vec3> {
        match *self {
            MarchOutcome::Hit { position, .. } => Some(position),
            MarchOutcome::Miss { .. } => None,
        }
    }

    /// Number of distance evaluations performed.
    pub fn steps(&self) -> u32 {
        match *self {
            MarchOutcome::Hit { steps, .. } | MarchOutcome::Miss { steps } => steps,
        }
    }
}

/// Render-wide ray marching settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marcher {
    /// Maximum distance evaluations per ray
    pub max_steps: u32,
    /// A point closer than this to a surface counts as a hit
    pub epsilon: f64,
}

impl Marcher {
    pub fn new(max_steps: u32, epsilon: f64) -> Self {
        Self { max_steps, epsilon }
    }

    /// March `ray` through `scene` and return the hit position.
    #[inline]
    pub fn march(&self, scene: &Scene, ray: Ray) -> Option<Vec3> {
        self.march_counted(scene, ray).position()
    }

    /// March `ray` through `scene`, reporting how many steps it took.
    ///
    /// The distance is always sampled at the current origin before the ray
    /// moves, so a ray that starts on a surface hits at step one.
    pub fn march_counted(&self, scene: &Scene, mut ray: Ray) -> MarchOutcome {
        if scene.is_empty() {
            return MarchOutcome::Miss { steps: 0 };
        }

        for step in 1..=self.max_steps {
            let distance = scene.distance(ray.origin());
            if distance < self.epsilon {
                return MarchOutcome::Hit {
                    position: ray.origin(),
                    steps: step,
                };
            }
            ray = ray.advance(distance);
            if !ray.origin().is_finite() {
                return MarchOutcome::Miss { steps: step };
            }
        }

        MarchOutcome::Miss {
            steps: self.max_steps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_core::{Color, Material, Sphere};

    fn scene_with(center: Vec3, radius: f64) -> Scene {
        let material = Material::lambertian(0.5, Color::ONE, Color::ZERO).unwrap();
        std::iter::once(Sphere::new(center, radius, material).unwrap()).collect()
    }

    #[test]
    fn test_converges_on_sphere_ahead() {
        let direction = Vec3::new(1.0, 2.0, -2.0).normalize();
        let (d, r, epsilon) = (10.0, 2.0, 1e-6);
        let scene = scene_with(direction * d, r);
        let marcher = Marcher::new(1000, epsilon);

        let outcome = marcher.march_counted(&scene, Ray::new(Vec3::ZERO, direction));
        let position = outcome.position().expect("ray should hit the sphere");

        assert!((position.length() - (d - r)).abs() < 1e-5);
        assert!(outcome.steps() as f64 <= d / epsilon);
    }

    #[test]
    fn test_grazing_ray_converges() {
        // A ray passing close to the silhouette takes many small steps
        let scene = scene_with(Vec3::new(0.0, 0.0, 10.0), 1.0);
        let marcher = Marcher::new(10_000, 1e-4);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.099, 0.0, 1.0));

        let hit = marcher.march(&scene, ray).expect("grazing ray should still hit");
        assert!(scene.distance(hit) < 1e-4);
    }

    #[test]
    fn test_escaping_ray_misses() {
        let scene = scene_with(Vec3::new(0.0, 0.0, 10.0), 1.0);
        let marcher = Marcher::new(64, 1e-4);

        let outcome = marcher.march_counted(&scene, Ray::new(Vec3::ZERO, Vec3::NEG_Z));
        assert_eq!(outcome.position(), None);
        assert!(outcome.steps() <= 64);
    }

    #[test]
    fn test_origin_on_surface_hits_first_step() {
        let scene = scene_with(Vec3::ZERO, 1.0);
        let marcher = Marcher::new(10, 1e-3);

        let outcome = marcher.march_counted(&scene, Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::X));
        assert_eq!(
            outcome,
            MarchOutcome::Hit {
                position: Vec3::new(1.0, 0.0, 0.0),
                steps: 1
            }
        );
    }

    #[test]
    fn test_inside_sphere_marches_to_surface() {
        let scene = scene_with(Vec3::ZERO, 1.0);
        let marcher = Marcher::new(100, 1e-6);

        let hit = marcher
            .march(&scene, Ray::new(Vec3::new(0.5, 0.0, 0.0), Vec3::X))
            .unwrap();
        assert!((hit.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_step_budget_never_hits() {
        let scene = scene_with(Vec3::ZERO, 1.0);
        let marcher = Marcher::new(0, 1e-3);
        assert!(marcher.march(&scene, Ray::new(Vec3::X, Vec3::X)).is_none());
    }

    #[test]
    fn test_empty_scene_never_hits() {
        let marcher = Marcher::new(100, 1e-4);
        let outcome = marcher.march_counted(&Scene::new(), Ray::new(Vec3::ZERO, Vec3::Z));
        assert_eq!(outcome, MarchOutcome::Miss { steps: 0 });
    }
}
