//! # Photo Effects
//!
//! Geometric transforms over a full 128×112 index raster. All of them return
//! a new raster and leave the input untouched.

use serde::Serialize;

use super::{Raster, HEIGHT, PIXEL_COUNT, WIDTH};

const HALF_WIDTH: usize = WIDTH / 2;
const HALF_HEIGHT: usize = HEIGHT / 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorDirection {
    /// Right half copied over the left half.
    Rtl,
    /// Left half copied over the right half.
    Ltr,
    /// Bottom half copied over the top half.
    Btt,
    /// Top half copied over the bottom half.
    Ttb,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomMode {
    /// Middle 64×56, doubled on both axes.
    Center,
    /// Middle 56 rows, doubled vertically.
    Vertical,
    /// Middle 64 columns, doubled horizontally.
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipAxis {
    /// Reverse row order.
    Vertical,
    /// Reverse each row.
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", content = "mode", rename_all = "lowercase")]
pub enum Effect {
    Invert,
    Mirror(MirrorDirection),
    Zoom(ZoomMode),
    Tile,
    Flip(FlipAxis),
}

impl Effect {
    pub const NAMES: [&'static str; 11] = [
        "invert",
        "mirror-rtl",
        "mirror-ltr",
        "mirror-btt",
        "mirror-ttb",
        "zoom",
        "zoom-v",
        "zoom-h",
        "tile",
        "flip-v",
        "flip-h",
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        let effect = match name {
            "invert" => Effect::Invert,
            "mirror-rtl" => Effect::Mirror(MirrorDirection::Rtl),
            "mirror-ltr" => Effect::Mirror(MirrorDirection::Ltr),
            "mirror-btt" => Effect::Mirror(MirrorDirection::Btt),
            "mirror-ttb" => Effect::Mirror(MirrorDirection::Ttb),
            "zoom" => Effect::Zoom(ZoomMode::Center),
            "zoom-v" => Effect::Zoom(ZoomMode::Vertical),
            "zoom-h" => Effect::Zoom(ZoomMode::Horizontal),
            "tile" => Effect::Tile,
            "flip-v" => Effect::Flip(FlipAxis::Vertical),
            "flip-h" => Effect::Flip(FlipAxis::Horizontal),
            _ => return None,
        };
        Some(effect)
    }

    pub fn apply(self, pixels: &[u8]) -> Raster {
        match self {
            Effect::Invert => invert(pixels),
            Effect::Mirror(direction) => mirror(pixels, direction),
            Effect::Zoom(mode) => zoom(pixels, mode),
            Effect::Tile => tile(pixels),
            Effect::Flip(axis) => flip(pixels, axis),
        }
    }
}

/// Applies the effect called `name`. Unknown names return the pixels unchanged.
pub fn apply_effect(pixels: &[u8], name: &str) -> Raster {
    match Effect::from_name(name) {
        Some(effect) => effect.apply(pixels),
        None => pixels.to_vec(),
    }
}

/// Maps each index `p` to `3 - p`. Values above 3 wrap, so inverting twice
/// still gives back the input.
pub fn invert(pixels: &[u8]) -> Raster {
    pixels.iter().map(|&p| 3u8.wrapping_sub(p)).collect()
}

pub fn mirror(pixels: &[u8], direction: MirrorDirection) -> Raster {
    let mut out = pixels.to_vec();

    match direction {
        MirrorDirection::Rtl | MirrorDirection::Ltr => {
            for y in 0..HEIGHT {
                for x in 0..HALF_WIDTH {
                    let left = y * WIDTH + x;
                    let right = y * WIDTH + (WIDTH - 1 - x);
                    if direction == MirrorDirection::Rtl {
                        out[left] = pixels[right];
                    } else {
                        out[right] = pixels[left];
                    }
                }
            }
        }
        MirrorDirection::Btt | MirrorDirection::Ttb => {
            for y in 0..HALF_HEIGHT {
                let top = y * WIDTH;
                let bottom = (HEIGHT - 1 - y) * WIDTH;
                if direction == MirrorDirection::Btt {
                    out[top..top + WIDTH].copy_from_slice(&pixels[bottom..bottom + WIDTH]);
                } else {
                    out[bottom..bottom + WIDTH].copy_from_slice(&pixels[top..top + WIDTH]);
                }
            }
        }
    }

    out
}

pub fn zoom(pixels: &[u8], mode: ZoomMode) -> Raster {
    let (scale_x, scale_y) = match mode {
        ZoomMode::Center => (2, 2),
        ZoomMode::Vertical => (1, 2),
        ZoomMode::Horizontal => (2, 1),
    };
    // Crop window is centred: 32 px in from each side horizontally, 28 vertically
    let start_x = (WIDTH - WIDTH / scale_x) / 2;
    let start_y = (HEIGHT - HEIGHT / scale_y) / 2;

    let mut out = vec![0u8; PIXEL_COUNT];
    for y in 0..HEIGHT {
        let src_row = (start_y + y / scale_y) * WIDTH;
        for x in 0..WIDTH {
            out[y * WIDTH + x] = pixels[src_row + start_x + x / scale_x];
        }
    }
    out
}

/// Halves the photo by sampling every other pixel, then repeats it 2×2.
pub fn tile(pixels: &[u8]) -> Raster {
    let mut scaled = vec![0u8; HALF_WIDTH * HALF_HEIGHT];
    for y in 0..HALF_HEIGHT {
        for x in 0..HALF_WIDTH {
            scaled[y * HALF_WIDTH + x] = pixels[y * 2 * WIDTH + x * 2];
        }
    }

    let mut out = vec![0u8; PIXEL_COUNT];
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            out[y * WIDTH + x] = scaled[(y % HALF_HEIGHT) * HALF_WIDTH + x % HALF_WIDTH];
        }
    }
    out
}

pub fn flip(pixels: &[u8], axis: FlipAxis) -> Raster {
    let mut out = Vec::with_capacity(PIXEL_COUNT);
    match axis {
        FlipAxis::Horizontal => {
            for row in pixels.chunks_exact(WIDTH) {
                out.extend(row.iter().rev());
            }
        }
        FlipAxis::Vertical => {
            for row in pixels.chunks_exact(WIDTH).rev() {
                out.extend_from_slice(row);
            }
        }
    }
    out
}
