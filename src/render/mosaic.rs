//! Preview mosaic tiling randomly chosen tiles across a larger image
//!
//! The choice of tile per cell is purely cosmetic, so it uses a caller-supplied
//! generator rather than the seeded stream.

use crate::io::error::{FloorError, Result, invalid_parameter};
use image::RgbaImage;
use image::imageops;
use rand::Rng;

/// Cell of the mosaic and the tile placed in it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicCell {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Index of the chosen tile
    pub tile: usize,
}

/// Pixel size of a `scale × scale` grid of tiles, if it fits in `u32`
pub fn mosaic_size(tile_width: u32, tile_height: u32, scale: u32) -> Option<(u32, u32)> {
    Some((tile_width.checked_mul(scale)?, tile_height.checked_mul(scale)?))
}

/// Choose a tile uniformly at random for each of the `scale × scale` cells
///
/// Cells are listed column by column. Nothing is planned when there are no
/// tiles or when the grid would not fit in `u32` pixel coordinates.
pub fn plan_mosaic<R: Rng + ?Sized>(
    tile_count: usize,
    tile_width: u32,
    tile_height: u32,
    scale: u32,
    rng: &mut R,
) -> Vec<MosaicCell> {
    if tile_count == 0 || mosaic_size(tile_width, tile_height, scale).is_none() {
        return Vec::new();
    }

    let side = scale as usize;
    let mut cells = Vec::with_capacity(side.saturating_mul(side));
    for column in 0..scale {
        for row in 0..scale {
            cells.push(MosaicCell {
                x: column * tile_width,
                y: row * tile_height,
                tile: rng.random_range(0..tile_count),
            });
        }
    }
    cells
}

/// Paste a random choice of `tiles` into every cell of a `scale × scale` grid
///
/// All tiles are expected to share the size of the first one.
///
/// # Errors
///
/// Returns an error if:
/// - `tiles` is empty
/// - The mosaic would be larger than `u32::MAX` pixels on a side
pub fn compose_mosaic<R: Rng + ?Sized>(
    tiles: &[RgbaImage],
    scale: u32,
    rng: &mut R,
) -> Result<RgbaImage> {
    let first = tiles.first().ok_or(FloorError::EmptyMosaic)?;
    let (tile_width, tile_height) = first.dimensions();

    let (width, height) = mosaic_size(tile_width, tile_height, scale).ok_or_else(|| {
        invalid_parameter("preview_scale", &scale, &"preview would exceed u32 pixels")
    })?;

    let mut mosaic = RgbaImage::new(width, height);
    for cell in plan_mosaic(tiles.len(), tile_width, tile_height, scale, rng) {
        if let Some(tile) = tiles.get(cell.tile) {
            imageops::replace(&mut mosaic, tile, i64::from(cell.x), i64::from(cell.y));
        }
    }

    Ok(mosaic)
}
