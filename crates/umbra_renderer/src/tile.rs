//! Tile-based work splitting.
//!
//! Divides the image into square tiles that workers render independently.
//! Tiles never overlap and together cover every pixel exactly once, so each
//! one can own its region of the frame buffer while it renders.

use rand::RngCore;
use serde::{Deserialize, Serialize};
use umbra_core::{Color, FrameBuffer, Scene};

use crate::renderer::render_pixel;
use crate::{Camera, RenderConfig};

/// A rectangular region of the image to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    /// X coordinate of the tile's top-left corner
    pub x: u32,
    /// Y coordinate of the tile's top-left corner
    pub y: u32,
    /// Width of the tile in pixels
    pub width: u32,
    /// Height of the tile in pixels
    pub height: u32,
    /// Position of this tile in the render queue
    pub index: usize,
}

impl Tile {
    /// Create a new tile.
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    /// Get the total number of pixels in this tile.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Order in which tiles are handed to workers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileOrder {
    /// Row by row from the top-left corner.
    #[default]
    Scanline,
    /// Closest to the image center first.
    Spiral,
}

/// Split a `width` x `height` image into tiles of at most `tile_size` pixels
/// per side. Tiles on the right and bottom edges are clipped.
pub fn generate_tiles(width: u32, height: u32, tile_size: u32, order: TileOrder) -> Vec<Tile> {
    let mut tiles = Vec::new();
    if tile_size == 0 {
        return tiles;
    }

    let mut y = 0;
    while y < height {
        let th = tile_size.min(height - y);
        let mut x = 0;
        while x < width {
            let tw = tile_size.min(width - x);
            tiles.push(Tile::new(x, y, tw, th, tiles.len()));
            x += tw;
        }
        y += th;
    }

    if order == TileOrder::Spiral {
        sort_spiral(&mut tiles, width, height);
        // Update indices after sorting
        for (i, tile) in tiles.iter_mut().enumerate() {
            tile.index = i;
        }
    }

    tiles
}

/// Sort tiles by distance from the image center.
///
/// The sort is stable, so equidistant tiles keep scanline order.
fn sort_spiral(tiles: &mut [Tile], width: u32, height: u32) {
    let center_x = width as f64 / 2.0;
    let center_y = height as f64 / 2.0;
    let distance = |t: &Tile| {
        let tx = t.x as f64 + t.width as f64 / 2.0;
        let ty = t.y as f64 + t.height as f64 / 2.0;
        (tx - center_x).powi(2) + (ty - center_y).powi(2)
    };

    tiles.sort_by(|a, b| distance(a).total_cmp(&distance(b)));
}

/// A tile paired with exclusive access to its pixels in the frame buffer.
#[derive(Debug)]
pub struct TileJob<'a> {
    /// The tile being rendered
    pub tile: Tile,
    rows: Vec<&'a mut [Color]>,
}

impl<'a> TileJob<'a> {
    /// The tile's pixel rows, top to bottom.
    pub fn rows_mut(&mut self) -> std::slice::IterMut<'_, &'a mut [Color]> {
        self.rows.iter_mut()
    }
}

/// Split `frame` into tiles of at most `tile_size` pixels per side, each
/// owning the disjoint part of the buffer it covers.
///
/// Jobs are returned in `order`, like [`generate_tiles`].
pub fn split_frame(frame: &mut FrameBuffer, tile_size: u32, order: TileOrder) -> Vec<TileJob<'_>> {
    let tiles = generate_tiles(frame.width(), frame.height(), tile_size, order);
    if tiles.is_empty() {
        return Vec::new();
    }

    let size = tile_size as usize;
    let columns = (frame.width() as usize).div_ceil(size);
    let bands = (frame.height() as usize).div_ceil(size);
    let mut regions: Vec<Vec<&mut [Color]>> = (0..columns * bands).map(|_| Vec::new()).collect();

    for (y, row) in frame.rows_mut().enumerate() {
        let band = y / size;
        let mut rest = row;
        for column in 0..columns {
            let width = size.min(rest.len());
            let (head, tail) = std::mem::take(&mut rest).split_at_mut(width);
            regions[band * columns + column].push(head);
            rest = tail;
        }
    }

    tiles
        .into_iter()
        .map(|tile| {
            let slot = tile.y as usize / size * columns + tile.x as usize / size;
            let rows = std::mem::take(&mut regions[slot]);
            debug_assert_eq!(rows.len(), tile.height as usize);
            TileJob { tile, rows }
        })
        .collect()
}

/// Render every pixel of a tile in place.
pub fn render_tile(
    job: &mut TileJob<'_>,
    scene: &Scene,
    camera: &Camera,
    image_size: (u32, u32),
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) {
    let tile = job.tile;
    for (local_y, row) in job.rows_mut().enumerate() {
        for (local_x, pixel) in row.iter_mut().enumerate() {
            let x = tile.x + local_x as u32;
            let y = tile.y + local_y as u32;
            *pixel = render_pixel(scene, camera, x, y, image_size, config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Count how many tiles cover each pixel.
    fn coverage(width: u32, height: u32, tiles: &[Tile]) -> Vec<u32> {
        let mut hits = vec![0u32; (width * height) as usize];
        for tile in tiles {
            assert!(tile.width > 0 && tile.height > 0);
            assert!(tile.x + tile.width <= width && tile.y + tile.height <= height);
            for y in tile.y..tile.y + tile.height {
                for x in tile.x..tile.x + tile.width {
                    hits[(y * width + x) as usize] += 1;
                }
            }
        }
        hits
    }

    #[test]
    fn test_generate_tiles_exact_fit() {
        let tiles = generate_tiles(128, 128, 64, TileOrder::Scanline);
        assert_eq!(tiles.len(), 4); // 2x2 grid

        let total_pixels: usize = tiles.iter().map(|t| t.pixel_count()).sum();
        assert_eq!(total_pixels, 128 * 128);
    }

    #[test]
    fn test_generate_tiles_partial_fit() {
        let tiles = generate_tiles(100, 70, 64, TileOrder::Scanline);
        assert_eq!(tiles.len(), 4); // 2x2 grid with clipped edges
        assert_eq!(tiles[1], Tile::new(64, 0, 36, 64, 1));
        assert_eq!(tiles[3], Tile::new(64, 64, 36, 6, 3));
    }

    #[test]
    fn test_tiles_cover_every_pixel_once() {
        for (width, height, size) in [(1, 1, 32), (33, 17, 8), (64, 64, 64), (7, 130, 32), (50, 3, 1)] {
            for order in [TileOrder::Scanline, TileOrder::Spiral] {
                let tiles = generate_tiles(width, height, size, order);
                let hits = coverage(width, height, &tiles);
                assert!(hits.iter().all(|&h| h == 1), "{width}x{height} tile {size} {order:?}");
            }
        }
    }

    #[test]
    fn test_empty_image_has_no_tiles() {
        assert!(generate_tiles(0, 10, 8, TileOrder::Scanline).is_empty());
        assert!(generate_tiles(10, 0, 8, TileOrder::Spiral).is_empty());
    }

    #[test]
    fn test_spiral_order() {
        let tiles = generate_tiles(192, 192, 64, TileOrder::Spiral);
        assert_eq!(tiles.len(), 9); // 3x3 grid

        // First tile should be the center one
        assert_eq!((tiles[0].x, tiles[0].y), (64, 64));
        assert!(tiles.iter().enumerate().all(|(i, t)| t.index == i));
    }

    #[test]
    fn test_split_frame_regions() {
        let mut frame = FrameBuffer::new(19, 13);
        let mut jobs = split_frame(&mut frame, 8, TileOrder::Spiral);
        assert_eq!(jobs.len(), 6);

        for job in &mut jobs {
            let tile = job.tile;
            let mut rows = 0;
            for row in job.rows_mut() {
                assert_eq!(row.len(), tile.width as usize);
                row.fill(Color::splat(tile.index as f64 + 1.0));
                rows += 1;
            }
            assert_eq!(rows, tile.height);
        }
        drop(jobs);

        // Every pixel was written by the tile that covers it
        for tile in generate_tiles(19, 13, 8, TileOrder::Spiral) {
            for y in tile.y..tile.y + tile.height {
                for x in tile.x..tile.x + tile.width {
                    assert_eq!(frame.get(x, y), Color::splat(tile.index as f64 + 1.0));
                }
            }
        }
    }

    #[test]
    fn test_split_empty_frame() {
        let mut frame = FrameBuffer::new(0, 4);
        assert!(split_frame(&mut frame, 8, TileOrder::Scanline).is_empty());
    }
}
