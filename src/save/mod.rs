//! # Camera Save Decoding
//!
//! The save is a fixed 128 KiB image. Owner data sits at absolute offsets,
//! photo data and per-photo metadata repeat every 0x1000 bytes.

pub mod charset;
pub mod tiles;

use std::sync::OnceLock;

use serde::Serialize;
use tracing::debug;

use crate::binary_utils::{ensure_len, read_slice, read_u8};
use crate::error::Result;
use crate::graphics::{is_uniform, Raster, HEIGHT, WIDTH};

use charset::{decode_string, CharFallback};
use tiles::{decode_block, PHOTO_BYTES};

pub const SAVE_SIZE: usize = 0x20000;
pub const PHOTO_COUNT: usize = 30;

const PHOTO_DELETED_FLAGS: usize = 0x011D7;
const USERNAME_START: usize = 0x02F04;
const USERNAME_END: usize = 0x02F0C;
const GENDER: usize = 0x02F0D;
const COMMENT_START: usize = 0x02F15;
const COMMENT_END: usize = 0x02F2F;
const FRAME_ID: usize = 0x02F54;
const PHOTO_DATA_START: usize = 0x2000;

const DELETED_FLAG: u8 = 0xFF;
const GENDER_MALE: u8 = 0x01;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl From<u8> for Gender {
    fn from(value: u8) -> Self {
        if value == GENDER_MALE {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => write!(f, "male"),
            Gender::Female => write!(f, "female"),
        }
    }
}

/// How string fields treat bytes that have no glyph.
#[derive(Clone, Copy, Debug, Default)]
pub struct DecodeOptions {
    pub zero_byte: CharFallback,
    pub invalid_byte: CharFallback,
}

/// One photo slot. Metadata is read up front; pixels are decoded on first access.
#[derive(Serialize)]
pub struct PhotoRecord<'a> {
    pub index: usize,
    pub is_deleted: bool,
    pub frame_id: String,
    pub comment: String,
    #[serde(skip)]
    block: &'a [u8],
    #[serde(skip)]
    raster: OnceLock<Raster>,
}

impl std::fmt::Debug for PhotoRecord<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhotoRecord")
            .field("index", &self.index)
            .field("is_deleted", &self.is_deleted)
            .field("frame_id", &self.frame_id)
            .field("comment", &self.comment)
            .field("raster_decoded", &self.is_raster_decoded())
            .finish_non_exhaustive()
    }
}

impl<'a> PhotoRecord<'a> {
    /// Palette indices for this photo, decoded once and cached.
    pub fn raster(&self) -> &Raster {
        self.raster.get_or_init(|| decode_block(self.block))
    }

    pub fn is_raster_decoded(&self) -> bool {
        self.raster.get().is_some()
    }

    pub fn width(&self) -> usize {
        WIDTH
    }

    pub fn height(&self) -> usize {
        HEIGHT
    }
}

/// A decoded save. Borrows the caller's buffer; nothing is copied out of it
/// until a photo's pixels are requested.
#[derive(Debug, Serialize)]
pub struct SaveFile<'a> {
    pub username: String,
    pub gender: Gender,
    pub photos: Vec<PhotoRecord<'a>>,
}

impl<'a> SaveFile<'a> {
    pub fn from_bytes(data: &'a [u8]) -> Result<Self> {
        Self::from_bytes_with(data, DecodeOptions::default())
    }

    pub fn from_bytes_with(data: &'a [u8], options: DecodeOptions) -> Result<Self> {
        ensure_len(data, SAVE_SIZE)?;
        debug!("Decoding save: {} bytes", data.len());

        let username = read_string(data, USERNAME_START, USERNAME_END, options)?;
        let gender = Gender::from(read_u8(data, GENDER)?);

        let photos = (0..PHOTO_COUNT)
            .map(|index| read_photo(data, index, options))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "Save owner {:?} ({}), {} photos, {} deleted",
            username,
            gender,
            photos.len(),
            photos.iter().filter(|p| p.is_deleted).count()
        );

        Ok(SaveFile {
            username,
            gender,
            photos,
        })
    }

    pub fn photo(&self, index: usize) -> Option<&PhotoRecord<'a>> {
        self.photos.get(index)
    }

    /// Photos whose pixels are not all the same value. Each record keeps its
    /// slot index, so positions in the returned list no longer match slots.
    pub fn non_uniform_photos(&self) -> Vec<&PhotoRecord<'a>> {
        self.photos
            .iter()
            .filter(|photo| !is_uniform(photo.raster()))
            .collect()
    }
}

fn read_photo(data: &[u8], index: usize, options: DecodeOptions) -> Result<PhotoRecord<'_>> {
    let block_base = index * PHOTO_BYTES;

    let is_deleted = read_u8(data, PHOTO_DELETED_FLAGS + index)? == DELETED_FLAG;
    let frame_id = (u32::from(read_u8(data, FRAME_ID + block_base)?) + 1).to_string();
    let comment = read_string(
        data,
        COMMENT_START + block_base,
        COMMENT_END + block_base,
        options,
    )?;
    let block = read_slice(data, PHOTO_DATA_START + block_base, PHOTO_BYTES)?;

    Ok(PhotoRecord {
        index,
        is_deleted,
        frame_id,
        comment,
        block,
        raster: OnceLock::new(),
    })
}

/// Reads the inclusive range `start..=end` as a camera string.
fn read_string(data: &[u8], start: usize, end: usize, options: DecodeOptions) -> Result<String> {
    let bytes = read_slice(data, start, end - start + 1)?;
    Ok(decode_string(bytes, options.zero_byte, options.invalid_byte))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::graphics::PIXEL_COUNT;

    fn blank_save() -> Vec<u8> {
        vec![0u8; SAVE_SIZE]
    }

    #[test]
    fn username_reads_in_address_order() {
        let mut data = blank_save();
        // T E S T
        data[USERNAME_START] = 0x56 + 19;
        data[USERNAME_START + 1] = 0x56 + 4;
        data[USERNAME_START + 2] = 0x56 + 18;
        data[USERNAME_START + 3] = 0x56 + 19;

        let save = SaveFile::from_bytes(&data).unwrap();
        assert_eq!(save.username, "TEST");
    }

    #[test]
    fn username_uses_last_byte_of_range() {
        let mut data = blank_save();
        data[USERNAME_END] = 0x57;
        data[USERNAME_END + 1] = 0x58; // gender byte, not part of the name
        let save = SaveFile::from_bytes(&data).unwrap();
        assert_eq!(save.username, "B");
    }

    #[test]
    fn gender_is_male_only_for_sentinel() {
        let mut data = blank_save();
        data[GENDER] = 0x01;
        assert_eq!(SaveFile::from_bytes(&data).unwrap().gender, Gender::Male);

        for value in [0x00, 0x02, 0xFF] {
            data[GENDER] = value;
            assert_eq!(SaveFile::from_bytes(&data).unwrap().gender, Gender::Female);
        }
    }

    #[test]
    fn debug_output_leaves_out_pixel_data() {
        let data = blank_save();
        let save = SaveFile::from_bytes(&data).unwrap();
        save.photos[0].raster();

        let text = format!("{:?}", save);
        assert!(text.len() < 8 * 1024, "debug output is {} bytes", text.len());
        assert!(text.contains("raster_decoded: true"));
        assert!(text.contains("raster_decoded: false"));
    }

    #[test]
    fn deleted_flag_requires_ff() {
        let mut data = blank_save();
        data[PHOTO_DELETED_FLAGS + 10] = 0xFF;
        data[PHOTO_DELETED_FLAGS + 11] = 0xFE;

        let save = SaveFile::from_bytes(&data).unwrap();
        assert!(save.photos[10].is_deleted);
        assert!(!save.photos[11].is_deleted);
        assert!(!save.photos[5].is_deleted);
    }

    #[test]
    fn frame_id_is_one_based() {
        let mut data = blank_save();
        data[FRAME_ID + 7 * PHOTO_BYTES] = 4;
        data[FRAME_ID + 8 * PHOTO_BYTES] = 0xFF;

        let save = SaveFile::from_bytes(&data).unwrap();
        assert_eq!(save.photos[7].frame_id, "5");
        assert_eq!(save.photos[8].frame_id, "256");
        assert_eq!(save.photos[0].frame_id, "1");
    }

    #[test]
    fn comment_is_read_from_photo_block() {
        let mut data = blank_save();
        let offset = COMMENT_START + 3 * PHOTO_BYTES;
        data[offset] = 0x56;
        data[offset + 1] = 0x57;
        data[offset + 2] = 0x58;

        let save = SaveFile::from_bytes(&data).unwrap();
        assert_eq!(save.photos[3].comment, "ABC");
        assert_eq!(save.photos[2].comment, "");
    }

    #[test]
    fn space_fallback_from_options() {
        let mut data = blank_save();
        data[USERNAME_START] = 0x56;
        data[USERNAME_START + 1] = 0x10;
        data[USERNAME_START + 2] = 0x57;

        let options = DecodeOptions {
            zero_byte: CharFallback::Skip,
            invalid_byte: CharFallback::Space,
        };
        let save = SaveFile::from_bytes_with(&data, options).unwrap();
        assert_eq!(save.username, "A B");
    }

    #[test]
    fn always_thirty_records_and_raster_is_lazy() {
        let data = blank_save();
        let save = SaveFile::from_bytes(&data).unwrap();
        assert_eq!(save.photos.len(), PHOTO_COUNT);

        let photo = save.photo(0).unwrap();
        assert!(!photo.is_raster_decoded());
        let first = photo.raster().as_ptr();
        assert!(photo.is_raster_decoded());
        assert_eq!(photo.raster().len(), PIXEL_COUNT);
        assert_eq!(photo.raster().as_ptr(), first);
        assert_eq!((photo.width(), photo.height()), (128, 112));
    }

    #[test]
    fn photo_pixels_come_from_slot_block() {
        let mut data = blank_save();
        let photo_offset = PHOTO_DATA_START + PHOTO_BYTES;
        for b in &mut data[photo_offset..photo_offset + 16] {
            *b = 0xFF;
        }

        let save = SaveFile::from_bytes(&data).unwrap();
        let raster = save.photos[1].raster();
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(raster[y * WIDTH + x], 3);
            }
        }
        assert!(save.photos[0].raster().iter().all(|&p| p == 0));
    }

    #[test]
    fn uniform_photos_filtered_separately() {
        let mut data = blank_save();
        data[PHOTO_DATA_START + 4 * PHOTO_BYTES] = 0x80;

        let save = SaveFile::from_bytes(&data).unwrap();
        assert_eq!(save.photos.len(), PHOTO_COUNT);
        let kept = save.non_uniform_photos();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].index, 4);
    }

    #[test]
    fn short_buffer_is_rejected() {
        let data = vec![0u8; SAVE_SIZE - 1];
        match SaveFile::from_bytes(&data) {
            Err(Error::InputTooShort { needed, actual }) => {
                assert_eq!(needed, SAVE_SIZE);
                assert_eq!(actual, SAVE_SIZE - 1);
            }
            other => panic!("unexpected result: {:?}", other.map(|s| s.username)),
        }
    }
}
