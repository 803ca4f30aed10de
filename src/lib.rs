//! Game Boy Camera save extraction.
//!
//! Decodes the camera's 128 KiB battery save into owner details and 30 photo
//! slots, and provides the palette, effect and montage transforms used to turn
//! those photos into images.
//!
//! ```no_run
//! use gbcam_extract::graphics::{catalog, render_photo, ReorderKey};
//! use gbcam_extract::save::SaveFile;
//!
//! let data = std::fs::read("camera.sav")?;
//! let save = SaveFile::from_bytes(&data)?;
//! println!("{} ({})", save.username, save.gender);
//!
//! let palette = catalog::find("gbc1").expect("built-in palette");
//! let img = render_photo(save.photos[0].raster(), palette, ReorderKey::None)?;
//! img.save("photo_01.png")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod binary_utils;
pub mod error;
pub mod export;
pub mod graphics;
pub mod logger;
pub mod save;

pub use error::{Error, Result};
pub use save::{Gender, PhotoRecord, SaveFile};
