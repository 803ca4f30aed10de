//! # Photo Tile Data
//!
//! A photo is 16×14 tiles of 8×8 pixels stored in 2bpp planar format.
//!
//! Each tile is 16 bytes: two bytes per pixel row, the first holding bit 0 of
//! every pixel in the row and the second holding bit 1, MSB = leftmost pixel.

use crate::binary_utils::read_slice;
use crate::error::Result;
use crate::graphics::{Raster, HEIGHT, PIXEL_COUNT, WIDTH};

pub const TILE_DIM: usize = 8;
pub const BYTES_PER_TILE: usize = 16; // 8×8 pixels at 2bpp
pub const TILES_PER_ROW: usize = WIDTH / TILE_DIM;
pub const TILES_PER_COLUMN: usize = HEIGHT / TILE_DIM;
pub const PHOTO_BYTES: usize = 0x1000;

/// Decode one 2bpp tile into 8×8 palette indices (0-3), row-major.
pub fn decode_tile(tile: &[u8; BYTES_PER_TILE]) -> [u8; TILE_DIM * TILE_DIM] {
    let mut pixels = [0u8; TILE_DIM * TILE_DIM];
    for row in 0..TILE_DIM {
        let lo = tile[row * 2];
        let hi = tile[row * 2 + 1];
        for col in 0..TILE_DIM {
            let mask = 0x80 >> col;
            let bit0 = u8::from(lo & mask != 0);
            let bit1 = u8::from(hi & mask != 0);
            pixels[row * TILE_DIM + col] = (bit1 << 1) | bit0;
        }
    }
    pixels
}

/// Decodes the photo whose tile data starts at `photo_offset` in the save.
pub fn decode_photo(data: &[u8], photo_offset: usize) -> Result<Raster> {
    let block = read_slice(data, photo_offset, PHOTO_BYTES)?;
    Ok(decode_block(block))
}

/// Decodes a photo block already sliced out of the save.
///
/// `block` must hold at least `TILES_PER_ROW * TILES_PER_COLUMN * BYTES_PER_TILE`
/// bytes; `PhotoRecord` guarantees this by slicing a full 0x1000-byte block.
pub(crate) fn decode_block(block: &[u8]) -> Raster {
    let mut raster = vec![0u8; PIXEL_COUNT];

    for tile_row in 0..TILES_PER_COLUMN {
        for tile_col in 0..TILES_PER_ROW {
            let tile_id = tile_row * TILES_PER_ROW + tile_col;
            let tile_start = tile_id * BYTES_PER_TILE;
            let mut tile = [0u8; BYTES_PER_TILE];
            tile.copy_from_slice(&block[tile_start..tile_start + BYTES_PER_TILE]);
            let pixels = decode_tile(&tile);

            let origin_x = tile_col * TILE_DIM;
            let origin_y = tile_row * TILE_DIM;
            for (row, chunk) in pixels.chunks_exact(TILE_DIM).enumerate() {
                let dst = (origin_y + row) * WIDTH + origin_x;
                raster[dst..dst + TILE_DIM].copy_from_slice(chunk);
            }
        }
    }

    raster
}
