//! # Colour Composites
//!
//! The camera can only shoot greyscale, but three shots of the same scene
//! through red, green and blue filters can be merged into one colour picture.
//! Each shot supplies one channel.

/// Channel level for each palette index. Index 0 is the lightest shade.
const INTENSITY: [u8; 4] = [255, 170, 85, 0];

/// Brightness and contrast adjustments, each in `-1.0..=1.0`. Zero leaves the
/// channel levels untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Adjustments {
    pub brightness: f64,
    pub contrast: f64,
}

/// Merges three index rasters into RGBA with no adjustment.
pub fn compose_rgb(r: &[u8], g: &[u8], b: &[u8], width: usize, height: usize) -> Vec<u8> {
    compose_rgb_adjusted(r, g, b, width, height, Adjustments::default())
}

/// Merges three index rasters into RGBA. Contrast is applied before brightness.
///
/// A channel whose raster is shorter than `width * height` reads as 0 past its
/// end.
pub fn compose_rgb_adjusted(
    r: &[u8],
    g: &[u8],
    b: &[u8],
    width: usize,
    height: usize,
    adjust: Adjustments,
) -> Vec<u8> {
    let pixel_count = width * height;
    let mut rgba = vec![0u8; pixel_count * 4];

    for (i, pixel) in rgba.chunks_exact_mut(4).enumerate() {
        pixel[0] = r.get(i).map_or(0, |&p| adjust.channel(p));
        pixel[1] = g.get(i).map_or(0, |&p| adjust.channel(p));
        pixel[2] = b.get(i).map_or(0, |&p| adjust.channel(p));
        pixel[3] = 255;
    }

    rgba
}

impl Adjustments {
    fn channel(self, index: u8) -> u8 {
        let level = INTENSITY[usize::from(index & 0b11)];
        if self.brightness == 0.0 && self.contrast == 0.0 {
            return level;
        }
        let value = (f64::from(level) - 128.0) * (1.0 + self.contrast) + 128.0;
        let value = value + self.brightness * 255.0;
        value.clamp(0.0, 255.0).round_ties_even() as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merges_channels() {
        let result = compose_rgb(&[0, 3], &[1, 2], &[2, 1], 2, 1);
        assert_eq!(result, vec![255, 170, 85, 255, 0, 85, 170, 255]);
    }

    #[test]
    fn single_black_pixel() {
        assert_eq!(compose_rgb(&[3], &[3], &[3], 1, 1), vec![0, 0, 0, 255]);
    }

    #[test]
    fn empty_dimensions() {
        assert!(compose_rgb(&[], &[], &[], 0, 0).is_empty());
    }

    #[test]
    fn output_length_follows_dimensions() {
        let data = vec![0u8; 100];
        assert_eq!(compose_rgb(&data, &data, &data, 10, 10).len(), 400);
    }

    #[test]
    fn short_channels_read_as_zero() {
        let result = compose_rgb(&[0], &[0], &[0], 2, 1);
        assert_eq!(result, vec![255, 255, 255, 255, 0, 0, 0, 255]);

        let result = compose_rgb(&[], &[1, 1], &[2, 2], 2, 1);
        assert_eq!(result, vec![0, 170, 85, 255, 0, 170, 85, 255]);
    }

    #[test]
    fn empty_montage_composite_is_black() {
        let result = compose_rgb(&[], &[], &[], 128, 112);
        assert_eq!(result.len(), 128 * 112 * 4);
        assert!(result.chunks_exact(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn contrast_stretches_around_midpoint() {
        let adjust = Adjustments {
            brightness: 0.0,
            contrast: 0.5,
        };
        let result = compose_rgb_adjusted(&[1], &[2], &[1], 1, 1, adjust);
        // 63.5 rounds to even
        assert_eq!(result, vec![191, 64, 191, 255]);
    }

    #[test]
    fn contrast_then_brightness() {
        let adjust = Adjustments {
            brightness: 0.1,
            contrast: 0.5,
        };
        let result = compose_rgb_adjusted(&[1], &[1], &[1], 1, 1, adjust);
        assert_eq!(result[0], 216);
    }

    #[test]
    fn negative_adjustments_clamp() {
        let adjust = Adjustments {
            brightness: -0.5,
            contrast: -0.5,
        };
        let result = compose_rgb_adjusted(&[0], &[1], &[3], 1, 1, adjust);
        assert_eq!(result[0], 64);
        assert_eq!(result[1], 22);
        assert_eq!(result[2], 0);
    }
}
