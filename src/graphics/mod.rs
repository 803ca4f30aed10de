//! Raster processing for decoded camera photos
//!
//! Every photo is a flat, row-major list of palette indices (0-3) over a fixed
//! 128×112 frame. The transforms here take and return that representation and
//! only turn into RGBA at the very end.

pub mod catalog;
pub mod effects;
pub mod montage;
pub mod palette;
pub mod palette_grid;
pub mod rgb;

pub use effects::{apply_effect, Effect, FlipAxis, MirrorDirection, ZoomMode};
pub use montage::{compose, MontageLayout};
pub use palette::{apply_palette, render_photo, Palette, ReorderKey, Rgb};

pub const WIDTH: usize = 128;
pub const HEIGHT: usize = 112;
pub const PIXEL_COUNT: usize = WIDTH * HEIGHT;

/// Row-major palette indices, `PIXEL_COUNT` long for anything produced by the decoder.
pub type Raster = Vec<u8>;

/// True when every pixel holds the same index (including an empty raster).
pub fn is_uniform(raster: &[u8]) -> bool {
    match raster.first() {
        Some(&first) => raster.iter().all(|&p| p == first),
        None => true,
    }
}
