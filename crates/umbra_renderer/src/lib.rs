//! Umbra Renderer - CPU path tracing through signed distance fields.
//!
//! Rays are intersected with the scene by sphere tracing its distance
//! field, then bounced off Lambertian, metallic and dielectric surfaces
//! until they escape or run out of bounces. Images are split into tiles
//! and rendered by a fixed pool of worker threads.

mod camera;
mod error;
mod marcher;
mod material;
mod progress;
mod renderer;
mod scheduler;
mod tile;

pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use marcher::{MarchOutcome, Marcher};
pub use material::{Scatter, ScatterResult, SurfaceHit, DIELECTRIC_ROUGHNESS, SURFACE_BIAS};
pub use progress::{format_duration, Progress, ProgressReport};
pub use renderer::{default_thread_count, linear_to_gamma, render_pixel, trace, RenderConfig};
pub use scheduler::{render, render_with_progress, RenderStats};
pub use tile::{generate_tiles, render_tile, split_frame, Tile, TileJob, TileOrder};

/// Re-export scene and math types used in the public API
pub use umbra_core::{Color, FrameBuffer, Material, Scene, Sphere};
pub use umbra_math::{Ray, Vec3};
