use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Save data too short: need {needed} bytes, got {actual}")]
    InputTooShort { needed: usize, actual: usize },

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Photo index out of range: {0}")]
    InvalidPhotoIndex(usize),

    #[error("Raster has {0} pixels, expected 14336")]
    RasterSize(usize),

    #[error("Montage layout {0} needs more photos")]
    EmptyMontage(String),

    #[error("PNG optimisation failed: {0}")]
    Optimise(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
