//! Command-line arguments and their mapping onto render settings.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use umbra_math::Vec3;
use umbra_renderer::{Camera, RenderConfig, TileOrder};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl std::str::FromStr for Dimensions {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut split_it = s.split('x');
        let (Some(a), Some(b), None) = (split_it.next(), split_it.next(), split_it.next()) else {
            return Err(anyhow!("Incorrect format, expected `width`x`height`"));
        };
        let width: u32 = a.trim().parse()?;
        let height: u32 = b.trim().parse()?;
        if width == 0 || height == 0 {
            return Err(anyhow!("Image dimensions must be non-zero"));
        }

        Ok(Dimensions { width, height })
    }
}

impl Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[derive(Parser, Debug)]
#[command(name = "umbra", about = "Path trace a signed distance field scene")]
pub struct Args {
    #[arg(long)]
    /// JSON file with render settings; flags override its values
    pub config: Option<PathBuf>,

    #[arg(short = 'j', long)]
    /// Worker threads [default: hardware threads - 1]
    pub threads: Option<usize>,

    #[arg(short, long)]
    /// Samples per pixel [default: 10]
    pub samples: Option<u32>,

    #[arg(short, long)]
    /// Maximum bounces per path [default: 26]
    pub bounces: Option<u32>,

    #[arg(long)]
    /// Maximum ray marching steps [default: 300]
    pub steps: Option<u32>,

    #[arg(long)]
    /// Ray marching hit distance [default: 1e-6]
    pub epsilon: Option<f64>,

    #[arg(long)]
    /// Tile edge length in pixels
    pub tile_size: Option<u32>,

    #[arg(long)]
    /// Render tiles from the image center outward
    pub spiral: bool,

    #[arg(long)]
    /// Seed for reproducible sampling
    pub seed: Option<u64>,

    #[arg(long, default_value = "1024x1024")]
    /// Image dimensions in format `width`x`height`
    pub size: Dimensions,

    #[arg(long, default_value_t = 4)]
    /// Number of random balls in the scene
    pub balls: u32,

    #[arg(long, default_value_t = 5000)]
    /// Seed for scene generation
    pub scene_seed: u64,

    #[arg(long, default_value_t = 50.0)]
    /// Camera focal distance
    pub focal: f64,

    #[arg(long, default_value_t = std::f64::consts::PI / 10.0, allow_negative_numbers = true)]
    /// Camera pitch in radians
    pub pitch: f64,

    #[arg(short, long, default_value = "render/rt.ppm")]
    /// Output image; the extension selects the format (ppm, png)
    pub output: PathBuf,
}

impl Args {
    /// Settings used when no config file is given.
    fn base_config() -> RenderConfig {
        RenderConfig {
            samples_per_pixel: 10,
            max_bounces: 26,
            max_march_steps: 300,
            epsilon: 1e-6,
            ..Default::default()
        }
    }

    /// Resolve the render settings: config file (or built-in defaults),
    /// then command-line overrides.
    pub fn render_config(&self) -> Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => Self::base_config(),
        };

        if let Some(threads) = self.threads {
            config.threads = threads;
        }
        if let Some(samples) = self.samples {
            config.samples_per_pixel = samples;
        }
        if let Some(bounces) = self.bounces {
            config.max_bounces = bounces;
        }
        if let Some(steps) = self.steps {
            config.max_march_steps = steps;
        }
        if let Some(epsilon) = self.epsilon {
            config.epsilon = epsilon;
        }
        if let Some(tile_size) = self.tile_size {
            config.tile_size = tile_size;
        }
        if self.spiral {
            config.tile_order = TileOrder::Spiral;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(config)
    }

    pub fn camera(&self) -> Camera {
        Camera::new()
            .with_position(Vec3::new(0.0, 50.0, -150.0))
            .with_focal_distance(self.focal)
            .with_rotation(self.pitch, 0.0, 0.0)
    }
}

fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}
