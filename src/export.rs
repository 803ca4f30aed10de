//! # Save Export
//!
//! Reads a save from disk and writes its photos out as PNGs alongside a JSON
//! description of the save.

use std::{
    fs,
    path::{Path, PathBuf},
};

use image::RgbaImage;
use oxipng::{InFile, OutFile};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};
use crate::graphics::{
    catalog, is_uniform, montage::compose, palette_grid::render_palette_grid, render_photo,
    Effect, MontageLayout, Palette, Raster, ReorderKey,
};
use crate::save::{DecodeOptions, Gender, SaveFile};

pub const METADATA_FILE: &str = "save.json";

/// Options for turning photos into image files
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub palette_key: String,
    pub reorder: ReorderKey,
    pub effects: Vec<Effect>,
    pub include_deleted: bool,
    pub skip_uniform: bool,
    pub optimise_png: bool,
    pub write_metadata: bool,
    pub decode: DecodeOptions,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            palette_key: catalog::DEFAULT_PALETTE.to_string(),
            reorder: ReorderKey::None,
            effects: Vec::new(),
            include_deleted: false,
            skip_uniform: false,
            optimise_png: true,
            write_metadata: true,
            decode: DecodeOptions::default(),
        }
    }
}

impl ExportConfig {
    pub fn palette(&self) -> Result<&'static Palette> {
        catalog::find(&self.palette_key)
            .ok_or_else(|| Error::UnknownPalette(self.palette_key.clone()))
    }

    /// Runs the configured effects over `raster` in order.
    pub fn apply_effects(&self, raster: &[u8]) -> Raster {
        self.effects
            .iter()
            .fold(raster.to_vec(), |pixels, effect| effect.apply(&pixels))
    }
}

#[derive(Debug, Serialize)]
pub struct PhotoEntry {
    pub index: usize,
    pub is_deleted: bool,
    pub frame_id: String,
    pub comment: String,
    pub file: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveMetadata {
    pub username: String,
    pub gender: Gender,
    pub palette: String,
    pub reorder: ReorderKey,
    pub effects: Vec<Effect>,
    pub photos: Vec<PhotoEntry>,
}

pub struct SaveExporter {
    save_path: PathBuf,
    save_data: Vec<u8>,
}

impl SaveExporter {
    pub fn new<P: AsRef<Path>>(save_path: P) -> Result<Self> {
        let save_path = save_path.as_ref().to_path_buf();
        let save_data = fs::read(&save_path)?;
        debug!("Read {} bytes from {}", save_data.len(), save_path.display());

        Ok(SaveExporter {
            save_path,
            save_data,
        })
    }

    pub fn from_bytes(save_data: Vec<u8>) -> Self {
        SaveExporter {
            save_path: PathBuf::new(),
            save_data,
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    pub fn decode(&self, options: DecodeOptions) -> Result<SaveFile<'_>> {
        SaveFile::from_bytes_with(&self.save_data, options)
    }

    /// Writes `photo_NN.png` (NN = 1-based slot) for every selected photo and,
    /// if configured, `save.json`.
    pub fn export_photos(&self, output_dir: &Path, config: &ExportConfig) -> Result<SaveMetadata> {
        let palette = config.palette()?;
        let save = self.decode(config.decode)?;

        fs::create_dir_all(output_dir)?;

        let mut entries = Vec::with_capacity(save.photos.len());
        for photo in &save.photos {
            let selected = (config.include_deleted || !photo.is_deleted)
                && !(config.skip_uniform && is_uniform(photo.raster()));

            let file = if selected {
                let file_name = format!("photo_{:02}.png", photo.index + 1);
                let raster = config.apply_effects(photo.raster());
                let img = render_photo(&raster, palette, config.reorder)?;
                save_png(&img, &output_dir.join(&file_name), config.optimise_png)?;
                Some(file_name)
            } else {
                None
            };

            entries.push(PhotoEntry {
                index: photo.index,
                is_deleted: photo.is_deleted,
                frame_id: photo.frame_id.clone(),
                comment: photo.comment.clone(),
                file,
            });
        }

        let metadata = SaveMetadata {
            username: save.username.clone(),
            gender: save.gender,
            palette: palette.key.to_string(),
            reorder: config.reorder,
            effects: config.effects.clone(),
            photos: entries,
        };

        let written = metadata.photos.iter().filter(|p| p.file.is_some()).count();
        info!("Exported {} photos to {}", written, output_dir.display());

        if config.write_metadata {
            let json_path = output_dir.join(METADATA_FILE);
            fs::write(&json_path, serde_json::to_string_pretty(&metadata)?)?;
            info!("Wrote metadata to {}", json_path.display());
        }

        Ok(metadata)
    }

    /// Combines the photos at `indices` (0-based slots) and writes the result.
    pub fn export_montage(
        &self,
        indices: &[usize],
        layout: MontageLayout,
        output_path: &Path,
        config: &ExportConfig,
    ) -> Result<()> {
        let palette = config.palette()?;
        let save = self.decode(config.decode)?;

        let rasters = indices
            .iter()
            .map(|&i| {
                save.photo(i)
                    .map(|photo| Some(config.apply_effects(photo.raster())))
                    .ok_or(Error::InvalidPhotoIndex(i))
            })
            .collect::<Result<Vec<_>>>()?;

        let montage = compose(&rasters, layout);
        if montage.is_empty() {
            return Err(Error::EmptyMontage(format!(
                "{:?} ({} of {} photos)",
                layout,
                indices.len(),
                layout.required_photos()
            )));
        }

        let img = render_photo(&montage, palette, config.reorder)?;
        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        save_png(&img, output_path, config.optimise_png)?;
        info!("Wrote {:?} montage to {}", layout, output_path.display());
        Ok(())
    }
}

/// Writes every catalog palette as a swatch grid plus a JSON sidecar.
pub fn export_palette_grid(output_path: &Path, optimise: bool) -> Result<()> {
    let (img, metadata) = render_palette_grid(catalog::PALETTES);
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)?;
    }
    save_png(&img, output_path, optimise)?;
    fs::write(
        output_path.with_extension("json"),
        serde_json::to_string_pretty(&metadata)?,
    )?;
    info!(
        "Wrote {} palettes to {}",
        metadata.palettes.len(),
        output_path.display()
    );
    Ok(())
}

/// Saves `img` as PNG. Optimisation failures are logged and the unoptimised
/// file is kept.
pub fn save_png(img: &RgbaImage, path: &Path, optimise: bool) -> Result<()> {
    img.save(path)?;
    debug!("Saved {}", path.display());

    if optimise {
        if let Err(e) = optimise_png(path) {
            warn!("{} ({}); file saved unoptimised", e, path.display());
        }
    }
    Ok(())
}

fn optimise_png(path: &Path) -> Result<()> {
    let temp_path = path.with_extension("temp.png");
    fs::rename(path, &temp_path)?;

    let mut options = oxipng::Options::from_preset(2);
    options.bit_depth_reduction = true;

    let result = oxipng::optimize(
        &InFile::Path(temp_path.clone()),
        &OutFile::Path(Some(path.to_path_buf())),
        &options,
    );

    if let Err(e) = result {
        fs::rename(&temp_path, path)?;
        return Err(Error::Optimise(e.to_string()));
    }

    if let Err(e) = fs::remove_file(&temp_path) {
        warn!("Failed to remove temporary file {}: {}", temp_path.display(), e);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::{FlipAxis, PIXEL_COUNT};

    #[test]
    fn default_config_resolves_palette() {
        let config = ExportConfig::default();
        assert_eq!(config.palette().unwrap().key, "gb");
    }

    #[test]
    fn unknown_palette_is_an_error() {
        let config = ExportConfig {
            palette_key: "nope".into(),
            ..Default::default()
        };
        assert!(matches!(config.palette(), Err(Error::UnknownPalette(k)) if k == "nope"));
    }

    #[test]
    fn effects_apply_in_order() {
        let mut raster = vec![0u8; PIXEL_COUNT];
        raster[0] = 1;
        let config = ExportConfig {
            effects: vec![Effect::Invert, Effect::Flip(FlipAxis::Horizontal)],
            ..Default::default()
        };
        let out = config.apply_effects(&raster);
        assert_eq!(out[127], 2);
        assert_eq!(out[0], 3);
    }
}
