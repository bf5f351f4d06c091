//! Umbra Core - scene description for the SDF path tracer.
//!
//! This crate provides:
//!
//! - **Scene types**: `Material`, `Sphere`, `Scene` with distance field queries
//! - **Frame buffers**: `FrameBuffer` with resizing and image file output
//! - **Scene population**: the procedural `showcase_scene`
//!
//! # Example
//!
//! ```
//! use umbra_core::{Material, Scene, Sphere};
//! use umbra_math::Vec3;
//!
//! let mut scene = Scene::new();
//! let ground = Material::lambertian(0.5, Vec3::ONE, Vec3::ZERO)?;
//! scene.add_sphere(Sphere::new(Vec3::new(0.0, -100.0, 0.0), 100.0, ground)?);
//!
//! assert!((scene.distance(Vec3::new(0.0, 1.0, 0.0)) - 1.0).abs() < 1e-9);
//! # Ok::<(), umbra_core::SceneError>(())
//! ```

pub mod error;
pub mod frame;
pub mod material;
pub mod scene;
pub mod showcase;
pub mod sphere;

// Re-export commonly used types
pub use error::{SceneError, SceneResult};
pub use frame::FrameBuffer;
pub use material::{Color, Material};
pub use scene::{Scene, SurfaceQuery};
pub use showcase::showcase_scene;
pub use sphere::Sphere;
