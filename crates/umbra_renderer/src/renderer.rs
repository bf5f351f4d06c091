//! Core path tracing integrator.
//!
//! Implements Monte Carlo path tracing with:
//! - Iterative bounce loop with a fixed bounce budget
//! - Anti-aliasing via jittered multi-sampling
//! - Gamma correction

use rand::RngCore;
use serde::{Deserialize, Serialize};
use umbra_core::{Color, Scene};
use umbra_math::{gen_f64, Ray};

use crate::error::{RenderError, RenderResult};
use crate::material::{Scatter, SurfaceHit};
use crate::{Camera, Marcher, TileOrder};

/// Render configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum number of surface interactions per path
    pub max_bounces: u32,
    /// Maximum distance evaluations per marched ray
    pub max_march_steps: u32,
    /// Distance below which a marched ray counts as a hit
    pub epsilon: f64,
    /// Number of worker threads
    pub threads: usize,
    /// Edge length of square render tiles in pixels
    pub tile_size: u32,
    /// Order in which tiles are queued
    pub tile_order: TileOrder,
    /// Base seed for per-worker random streams; `None` seeds from entropy
    pub seed: Option<u64>,
    /// How often progress is reported, in milliseconds
    pub progress_interval_ms: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 4,
            max_bounces: 4,
            max_march_steps: 100,
            epsilon: 1e-4,
            threads: default_thread_count(),
            tile_size: 32,
            tile_order: TileOrder::Scanline,
            seed: None,
            progress_interval_ms: 1000,
        }
    }
}

impl RenderConfig {
    /// Check the configuration before any rendering work starts.
    pub fn validate(&self) -> RenderResult<()> {
        let invalid = |msg: String| Err(RenderError::InvalidConfig(msg));

        if self.samples_per_pixel == 0 {
            return invalid("samples_per_pixel must be at least 1".into());
        }
        if self.max_march_steps == 0 {
            return invalid("max_march_steps must be at least 1".into());
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return invalid(format!("epsilon must be positive, got {}", self.epsilon));
        }
        if self.threads == 0 {
            return invalid("threads must be at least 1".into());
        }
        if self.tile_size == 0 {
            return invalid("tile_size must be at least 1".into());
        }
        if self.progress_interval_ms == 0 {
            return invalid("progress_interval_ms must be at least 1".into());
        }
        Ok(())
    }

    /// Ray marching settings derived from this configuration.
    pub fn marcher(&self) -> Marcher {
        Marcher::new(self.max_march_steps, self.epsilon)
    }
}

/// Hardware threads minus one, leaving a core for the monitoring thread.
pub fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get().saturating_sub(1))
        .unwrap_or(1)
        .max(1)
}

/// Compute the radiance carried back along `ray`.
///
/// Each bounce adds the surface emission scaled by the attenuation gathered
/// so far. The path ends when the ray escapes or the bounce budget runs out.
pub fn trace(scene: &Scene, ray: Ray, config: &RenderConfig, rng: &mut dyn RngCore) -> Color {
    let marcher = config.marcher();
    let mut color = Color::ZERO;
    let mut factor = Color::ONE;
    let mut ray = ray;

    for _ in 0..config.max_bounces {
        let Some(position) = marcher.march(scene, ray) else {
            break;
        };
        // A hit implies a non-empty scene
        let Some(surface) = scene.nearest_surface(position) else {
            break;
        };

        let hit = SurfaceHit {
            position,
            normal: surface.normal,
        };
        let result = surface
            .material
            .scatter(&hit, ray.direction(), config.epsilon, rng);

        color += factor * result.emissive;
        factor *= result.attenuation;
        ray = result.ray;
    }

    color
}

/// Apply gamma correction (gamma = 2.0).
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

/// Render a single pixel with multi-sampling.
///
/// Every sample jitters the ray inside the pixel footprint; the average is
/// gamma corrected before it is returned.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    (width, height): (u32, u32),
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let (w, h) = (width as f64, height as f64);
    let aspect_ratio = w / h;
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let u = x as f64 + gen_f64(rng);
        let v = y as f64 + gen_f64(rng);
        let ray = camera.get_ray(u, v, w, h, aspect_ratio);
        pixel_color += trace(scene, ray, config, rng);
    }

    let average = pixel_color / config.samples_per_pixel as f64;
    Color::new(
        linear_to_gamma(average.x),
        linear_to_gamma(average.y),
        linear_to_gamma(average.z),
    )
}
