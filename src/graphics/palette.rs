//! # Palette Mapping
//!
//! Turns palette indices into RGBA. A palette is exactly four colours; the
//! camera's shooting-menu colour effects are modelled as fixed reorderings of
//! those four entries.

use image::RgbaImage;
use serde::Serialize;

use super::{HEIGHT, PIXEL_COUNT, WIDTH};
use crate::error::{Error, Result};

pub const COLOURS_PER_PAL: usize = 4;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub key: &'static str,
    pub name: &'static str,
    pub colors: [Rgb; COLOURS_PER_PAL],
}

/// A named reordering of the four palette entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReorderKey {
    #[default]
    None,
    Invert,
    Pa,
    Pb,
    Pc,
    Pd,
}

impl ReorderKey {
    /// Unrecognised keys fall back to `None`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "i" | "invert" => ReorderKey::Invert,
            "pa" => ReorderKey::Pa,
            "pb" => ReorderKey::Pb,
            "pc" => ReorderKey::Pc,
            "pd" => ReorderKey::Pd,
            _ => ReorderKey::None,
        }
    }

    /// Source entry for each output slot when recolouring pixels.
    pub fn recolor_order(self) -> [usize; COLOURS_PER_PAL] {
        match self {
            ReorderKey::None => [0, 1, 2, 3],
            ReorderKey::Invert => [3, 2, 1, 0],
            ReorderKey::Pa => [3, 1, 2, 0],
            ReorderKey::Pb => [0, 2, 1, 3],
            ReorderKey::Pc => [0, 3, 2, 1],
            ReorderKey::Pd => [2, 1, 0, 3],
        }
    }
}

pub fn reorder_colors(colors: &[Rgb; COLOURS_PER_PAL], key: ReorderKey) -> [Rgb; COLOURS_PER_PAL] {
    key.recolor_order().map(|i| colors[i])
}

/// Maps each index to `(r, g, b, 255)`.
///
/// Indices above 3 are a caller error; their four bytes are left zeroed.
pub fn apply_palette(raster: &[u8], palette: &Palette, key: ReorderKey) -> Vec<u8> {
    let ordered = reorder_colors(&palette.colors, key);
    let mut rgba = vec![0u8; raster.len() * 4];

    for (pixel, &idx) in rgba.chunks_exact_mut(4).zip(raster) {
        let Some(color) = ordered.get(idx as usize) else {
            continue;
        };
        pixel[0] = color.r;
        pixel[1] = color.g;
        pixel[2] = color.b;
        pixel[3] = 255;
    }

    rgba
}

/// Renders a full 128×112 raster into an image.
pub fn render_photo(raster: &[u8], palette: &Palette, key: ReorderKey) -> Result<RgbaImage> {
    if raster.len() != PIXEL_COUNT {
        return Err(Error::RasterSize(raster.len()));
    }
    let buffer = apply_palette(raster, palette, key);
    RgbaImage::from_raw(WIDTH as u32, HEIGHT as u32, buffer)
        .ok_or(Error::RasterSize(raster.len()))
}

/// A reordered palette plus the catalog key it would be listed under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaletteVariant<T> {
    pub colors: Vec<T>,
    pub key: String,
}

const VARIANT_EFFECTS: [(&str, &str, [usize; COLOURS_PER_PAL]); 6] = [
    ("i", "i", [3, 2, 1, 0]),
    ("invert", "i", [3, 2, 1, 0]),
    ("pa", "pa", [3, 1, 2, 0]),
    ("pb", "pb", [0, 2, 1, 3]),
    ("pc", "pc", [0, 3, 2, 1]),
    ("pd", "pd", [2, 1, 0, 3]),
];

/// Builds a catalog entry for `palette_key` with `effect` applied.
///
/// Used for naming palette variants, independently of [`ReorderKey`] which
/// drives pixel recolouring. Known effects append their suffix to the key even
/// when `colors` is empty; unknown or missing effects keep both order and key.
pub fn palette_variant<T: Clone>(
    colors: &[T],
    effect: Option<&str>,
    palette_key: &str,
) -> PaletteVariant<T> {
    let found = effect.and_then(|effect| {
        VARIANT_EFFECTS
            .iter()
            .find(|(name, _, _)| *name == effect)
    });

    match found {
        Some((_, suffix, order)) => PaletteVariant {
            colors: order.iter().filter_map(|&i| colors.get(i).cloned()).collect(),
            key: format!("{}{}", palette_key, suffix),
        },
        None => PaletteVariant {
            colors: colors.to_vec(),
            key: palette_key.to_string(),
        },
    }
}
