use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkymapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("No decodable tiles in {}", dir.display())]
    NoTilesLoaded { dir: PathBuf },

    #[error("Invalid tile geometry: {width}x{height}")]
    InvalidTileGeometry { width: u32, height: u32 },

    #[error("Invalid fetch request: {0}")]
    InvalidFetchRequest(String),

    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SkymapError>;
