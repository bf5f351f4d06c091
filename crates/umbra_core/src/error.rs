//! Errors raised while building scenes and writing images.

use thiserror::Error;

/// Errors that can occur while constructing a scene or saving a frame.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("Sphere center must be finite")]
    NonFiniteCenter,

    #[error("Lambertian reflectance must be in [0, 1], got {0}")]
    InvalidReflectance(f64),

    #[error("Metallic shininess must be in [0, 1], got {0}")]
    InvalidShininess(f64),

    #[error("Refractive index must be positive and finite, got {0}")]
    InvalidRefractiveIndex(f64),

    #[error("Material colors must be finite")]
    NonFiniteColor,

    #[error("Cannot write an image with zero width or height")]
    EmptyImage,

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),
}

pub type SceneResult<T> = Result<T, SceneError>;
