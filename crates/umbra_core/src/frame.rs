//! Frame buffer storage and image output.

use std::path::Path;

use umbra_math::Interval;

use crate::error::{SceneError, SceneResult};
use crate::material::Color;

/// Row-major RGB pixel storage for a rendered frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl FrameBuffer {
    /// Create a new frame buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if the buffer holds no pixels.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Mutable pixel rows, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::ChunksMut<'_, Color> {
        // An empty buffer yields no rows
        self.pixels.chunks_mut(self.width.max(1) as usize)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Mean of all pixels, black for an empty buffer.
    pub fn mean(&self) -> Color {
        if self.pixels.is_empty() {
            return Color::ZERO;
        }
        self.pixels.iter().copied().sum::<Color>() / self.pixels.len() as f64
    }

    /// Convert to 8-bit RGB bytes, clamping each channel to [0, 1].
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            for channel in color.to_array() {
                bytes.push((Interval::UNIT.clamp(channel) * 255.0) as u8);
            }
        }
        bytes
    }

    /// Resample to a new resolution with a 4-tap box filter.
    pub fn resized(&self, width: u32, height: u32) -> FrameBuffer {
        let mut out = FrameBuffer::new(width, height);
        if self.is_empty() {
            return out;
        }

        let read = |x: f64, y: f64| {
            let x = x.clamp(0.0, (self.width - 1) as f64) as u32;
            let y = y.clamp(0.0, (self.height - 1) as f64) as u32;
            self.get(x, y)
        };

        for y in 0..height {
            for x in 0..width {
                let tx = x as f64 / width as f64 * self.width as f64;
                let ty = y as f64 / height as f64 * self.height as f64;
                let sum = read(tx - 0.5, ty - 0.5)
                    + read(tx + 0.5, ty - 0.5)
                    + read(tx - 0.5, ty + 0.5)
                    + read(tx + 0.5, ty + 0.5);
                out.set(x, y, sum * 0.25);
            }
        }
        out
    }

    /// Save to disk. The format is chosen from the file extension
    /// (`.ppm`, `.png`, ...).
    pub fn save(&self, path: impl AsRef<Path>) -> SceneResult<()> {
        if self.is_empty() {
            return Err(SceneError::EmptyImage);
        }
        let image = image::RgbImage::from_raw(self.width, self.height, self.to_rgb8())
            .ok_or(SceneError::EmptyImage)?;
        image.save(path.as_ref())?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.as_ref().display());
        Ok(())
    }
}
