//! Errors reported before a render starts.

use thiserror::Error;

/// Errors that stop a render from starting.
///
/// Everything is checked up front; once workers are running the render
/// either completes or the process aborts.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid camera: {0}")]
    InvalidCamera(String),

    #[error("Frame buffer has zero width or height")]
    EmptyBuffer,

    #[error("Failed to start worker threads: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type RenderResult<T> = Result<T, RenderError>;
