//! # Palette Swatch Grid
//!
//! Draws every catalog palette as a row of four swatches, four palettes per
//! grid row, with a JSON sidecar naming what sits where.

use image::{Rgba, RgbaImage};
use serde::Serialize;

use super::palette::{Palette, COLOURS_PER_PAL};

const PALETTES_PER_ROW: usize = 4;
const SWATCH_SIZE: u32 = 32;
const SWATCH_GAP: u32 = 4;
const PALETTE_GAP: u32 = 30;

const CELL_WIDTH: u32 = SWATCH_SIZE * COLOURS_PER_PAL as u32 + SWATCH_GAP * 3 + PALETTE_GAP;
const CELL_HEIGHT: u32 = SWATCH_SIZE + PALETTE_GAP;

#[derive(Debug, Serialize)]
pub struct GridEntry {
    pub key: &'static str,
    pub name: &'static str,
    pub x: u32,
    pub y: u32,
}

#[derive(Debug, Serialize)]
pub struct GridMetadata {
    pub width: u32,
    pub height: u32,
    pub swatch_size: u32,
    pub swatch_gap: u32,
    pub palettes: Vec<GridEntry>,
}

pub fn render_palette_grid(palettes: &[Palette]) -> (RgbaImage, GridMetadata) {
    let rows = palettes.len().div_ceil(PALETTES_PER_ROW) as u32;
    let width = PALETTES_PER_ROW as u32 * CELL_WIDTH;
    let height = rows * CELL_HEIGHT;

    let mut img = RgbaImage::new(width, height);
    let mut entries = Vec::with_capacity(palettes.len());

    for (i, palette) in palettes.iter().enumerate() {
        let x0 = (i % PALETTES_PER_ROW) as u32 * CELL_WIDTH;
        let y0 = (i / PALETTES_PER_ROW) as u32 * CELL_HEIGHT;

        for (j, color) in palette.colors.iter().enumerate() {
            let sx = x0 + j as u32 * (SWATCH_SIZE + SWATCH_GAP);
            fill_rect(
                &mut img,
                sx,
                y0,
                SWATCH_SIZE,
                Rgba([color.r, color.g, color.b, 255]),
            );
        }

        entries.push(GridEntry {
            key: palette.key,
            name: palette.name,
            x: x0,
            y: y0,
        });
    }

    let metadata = GridMetadata {
        width,
        height,
        swatch_size: SWATCH_SIZE,
        swatch_gap: SWATCH_GAP,
        palettes: entries,
    };
    (img, metadata)
}

fn fill_rect(img: &mut RgbaImage, x: u32, y: u32, size: u32, color: Rgba<u8>) {
    for py in y..(y + size).min(img.height()) {
        for px in x..(x + size).min(img.width()) {
            img.put_pixel(px, py, color);
        }
    }
}
