//! # Montages
//!
//! Combines two to four photos into one 128×112 frame along fixed split lines.

use serde::Serialize;

use super::{Raster, HEIGHT, PIXEL_COUNT, WIDTH};

const HALF_WIDTH: usize = WIDTH / 2;
const HALF_HEIGHT: usize = HEIGHT / 2;

const TWO_THIRDS_SPLIT_ROW: usize = 80;

const BAR_TOP_END: usize = 32;
const BAR_MIDDLE_END: usize = 80;

const BORDER_INNER_WIDTH: usize = 80;
const BORDER_INNER_HEIGHT: usize = 64;
const BORDER_OFFSET_X: usize = (WIDTH - BORDER_INNER_WIDTH) / 2;
const BORDER_OFFSET_Y: usize = (HEIGHT - BORDER_INNER_HEIGHT) / 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MontageLayout {
    /// Top half from photo 1, bottom half from photo 2.
    #[default]
    Horizontal,
    /// Left half from photo 1, right half from photo 2.
    Vertical,
    /// Checkerboard of photo 1 (top-left, bottom-right) and photo 2.
    Quadrant,
    /// One quadrant per photo: top-left, top-right, bottom-left, bottom-right.
    FourQuadrant,
    /// Top 80 rows from photo 1, the rest from photo 2.
    HorizontalTwoThirds,
    /// Top bar from photo 2, middle band from photo 1, bottom bar from photo 3.
    HorizontalBars,
    /// Photo 2 as a frame around the centre 80×64 of photo 1.
    Border,
}

impl MontageLayout {
    pub const NAMES: [&'static str; 7] = [
        "horizontal",
        "vertical",
        "quadrant",
        "four-quadrant",
        "horizontal-2/3",
        "horizontal-bars",
        "border",
    ];

    /// Unrecognised names fall back to `Horizontal`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "vertical" => MontageLayout::Vertical,
            "quadrant" => MontageLayout::Quadrant,
            "four-quadrant" => MontageLayout::FourQuadrant,
            "horizontal-2/3" => MontageLayout::HorizontalTwoThirds,
            "horizontal-bars" => MontageLayout::HorizontalBars,
            "border" => MontageLayout::Border,
            _ => MontageLayout::Horizontal,
        }
    }

    pub fn required_photos(self) -> usize {
        match self {
            MontageLayout::FourQuadrant => 4,
            MontageLayout::HorizontalBars => 3,
            _ => 2,
        }
    }
}

/// Builds a montage from `photos`.
///
/// Returns an empty raster when fewer photos than the layout needs are given,
/// or when any of the needed slots is `None`. Extra photos are ignored.
pub fn compose<R: AsRef<[u8]>>(photos: &[Option<R>], layout: MontageLayout) -> Raster {
    let needed = layout.required_photos();
    if photos.len() < needed {
        return Vec::new();
    }
    let Some(sources) = photos[..needed]
        .iter()
        .map(|p| p.as_ref().map(|r| r.as_ref()))
        .collect::<Option<Vec<&[u8]>>>()
    else {
        return Vec::new();
    };

    match layout {
        MontageLayout::Horizontal => split_rows(sources[0], sources[1], HALF_HEIGHT),
        MontageLayout::HorizontalTwoThirds => {
            split_rows(sources[0], sources[1], TWO_THIRDS_SPLIT_ROW)
        }
        MontageLayout::Vertical => by_region(|_, x| if x < HALF_WIDTH { 0 } else { 1 }, &sources),
        MontageLayout::Quadrant => by_region(
            |y, x| usize::from((y < HALF_HEIGHT) != (x < HALF_WIDTH)),
            &sources,
        ),
        MontageLayout::FourQuadrant => by_region(
            |y, x| usize::from(y >= HALF_HEIGHT) * 2 + usize::from(x >= HALF_WIDTH),
            &sources,
        ),
        MontageLayout::HorizontalBars => by_region(
            |y, _| {
                if y < BAR_TOP_END {
                    1
                } else if y < BAR_MIDDLE_END {
                    0
                } else {
                    2
                }
            },
            &sources,
        ),
        MontageLayout::Border => border(sources[0], sources[1]),
    }
}

fn split_rows(top: &[u8], bottom: &[u8], split_row: usize) -> Raster {
    let split = split_row * WIDTH;
    let mut out = Vec::with_capacity(PIXEL_COUNT);
    out.extend_from_slice(&top[..split]);
    out.extend_from_slice(&bottom[split..PIXEL_COUNT]);
    out
}

/// Picks each pixel from `sources[pick(y, x)]` at the same position.
fn by_region<F: Fn(usize, usize) -> usize>(pick: F, sources: &[&[u8]]) -> Raster {
    let mut out = vec![0u8; PIXEL_COUNT];
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let i = y * WIDTH + x;
            out[i] = sources[pick(y, x)][i];
        }
    }
    out
}

fn border(inner: &[u8], outer: &[u8]) -> Raster {
    let mut out = outer[..PIXEL_COUNT].to_vec();
    for y in BORDER_OFFSET_Y..BORDER_OFFSET_Y + BORDER_INNER_HEIGHT {
        let start = y * WIDTH + BORDER_OFFSET_X;
        let end = start + BORDER_INNER_WIDTH;
        out[start..end].copy_from_slice(&inner[start..end]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(value: u8) -> Raster {
        vec![value; PIXEL_COUNT]
    }

    fn at(raster: &[u8], x: usize, y: usize) -> u8 {
        raster[y * WIDTH + x]
    }

    #[test]
    fn not_enough_photos_gives_empty() {
        let a = filled(1);
        let b = filled(2);
        assert!(compose(&[Some(&a)], MontageLayout::Horizontal).is_empty());
        assert!(compose(&[Some(&a), Some(&b)], MontageLayout::FourQuadrant).is_empty());
        assert!(compose(&[Some(&a), Some(&b)], MontageLayout::HorizontalBars).is_empty());
        assert!(compose::<&Raster>(&[], MontageLayout::Border).is_empty());
    }

    #[test]
    fn missing_photo_gives_empty() {
        let a = filled(1);
        let b = filled(2);
        assert!(compose(&[Some(&a), None], MontageLayout::Vertical).is_empty());
        assert!(compose(&[Some(&a), Some(&b), None], MontageLayout::HorizontalBars).is_empty());
    }

    #[test]
    fn horizontal_splits_at_half_height() {
        let out = compose(&[Some(filled(1)), Some(filled(2))], MontageLayout::Horizontal);
        assert_eq!(out.len(), PIXEL_COUNT);
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                assert_eq!(at(&out, x, y), if y < 56 { 1 } else { 2 });
            }
        }
    }

    #[test]
    fn unknown_layout_name_is_horizontal() {
        assert_eq!(MontageLayout::from_name("diagonal"), MontageLayout::Horizontal);
        for name in MontageLayout::NAMES {
            let layout = MontageLayout::from_name(name);
            assert!(name == "horizontal" || layout != MontageLayout::Horizontal);
        }
    }

    #[test]
    fn vertical_splits_at_half_width() {
        let out = compose(&[Some(filled(1)), Some(filled(2))], MontageLayout::Vertical);
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                assert_eq!(at(&out, x, y), if x < 64 { 1 } else { 2 });
            }
        }
    }

    #[test]
    fn quadrant_is_a_checkerboard() {
        let out = compose(&[Some(filled(1)), Some(filled(2))], MontageLayout::Quadrant);
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let expected = match (y < 56, x < 64) {
                    (true, true) | (false, false) => 1,
                    _ => 2,
                };
                assert_eq!(at(&out, x, y), expected, "({}, {})", x, y);
            }
        }
    }

    #[test]
    fn four_quadrant_places_each_photo() {
        let photos = [Some(filled(1)), Some(filled(2)), Some(filled(3)), Some(filled(0))];
        let out = compose(&photos, MontageLayout::FourQuadrant);
        for y in 0..HEIGHT {
            for x in 0..WIDTH {
                let expected = match (y < 56, x < 64) {
                    (true, true) => 1,
                    (true, false) => 2,
                    (false, true) => 3,
                    (false, false) => 0,
                };
                assert_eq!(at(&out, x, y), expected);
            }
        }
    }

    #[test]
    fn two_thirds_splits_at_row_eighty() {
        let out = compose(
            &[Some(filled(1)), Some(filled(2))],
            MontageLayout::HorizontalTwoThirds,
        );
        for y in 0..HEIGHT {
            assert_eq!(at(&out, 5, y), if y < 80 { 1 } else { 2 });
        }
    }

    #[test]
    fn bars_take_top_from_second_photo() {
        let mut p1 = filled(0);
        let mut p2 = filled(0);
        let mut p3 = filled(0);
        for x in 0..WIDTH {
            p1[56 * WIDTH + x] = 1;
            p2[16 * WIDTH + x] = 2;
            p3[96 * WIDTH + x] = 3;
        }

        let out = compose(&[Some(&p1), Some(&p2), Some(&p3)], MontageLayout::HorizontalBars);
        assert_eq!(at(&out, 64, 16), 2);
        assert_eq!(at(&out, 64, 56), 1);
        assert_eq!(at(&out, 64, 96), 3);
        assert_eq!(out[0], 0);

        let out = compose(
            &[Some(filled(1)), Some(filled(2)), Some(filled(3))],
            MontageLayout::HorizontalBars,
        );
        assert_eq!(at(&out, 0, 31), 2);
        assert_eq!(at(&out, 0, 32), 1);
        assert_eq!(at(&out, 0, 79), 1);
        assert_eq!(at(&out, 0, 80), 3);
    }

    #[test]
    fn border_frames_inner_photo() {
        let inner = filled(5);
        let outer = filled(9);
        let out = compose(&[Some(&inner), Some(&outer)], MontageLayout::Border);

        assert_eq!(at(&out, 0, 0), 9);
        assert_eq!(at(&out, 64, 56), 5);
        assert_eq!(at(&out, WIDTH - 1, HEIGHT - 1), 9);

        assert_eq!(at(&out, 24, 24), 5);
        assert_eq!(at(&out, 103, 24), 5);
        assert_eq!(at(&out, 24, 87), 5);
        assert_eq!(at(&out, 103, 87), 5);
        assert_eq!(at(&out, 24, 23), 9);
        assert_eq!(at(&out, 23, 24), 9);
        assert_eq!(at(&out, 104, 87), 9);
        assert_eq!(at(&out, 103, 88), 9);
    }

    #[test]
    fn border_copies_matching_region() {
        let mut inner = filled(1);
        inner[56 * WIDTH + 64] = 3;
        let outer = filled(2);
        let out = compose(&[Some(&inner), Some(&outer)], MontageLayout::Border);
        assert_eq!(at(&out, 64, 56), 3);
        assert_eq!(at(&out, 65, 56), 1);
    }
}
