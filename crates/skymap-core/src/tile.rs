use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::RgbImage;

/// One decoded source bitmap destined for a grid cell.
#[derive(Clone, Debug)]
pub struct Tile {
    pub path: PathBuf,
    pub image: RgbImage,
}

impl Tile {
    pub fn new(path: impl Into<PathBuf>, image: RgbImage) -> Self {
        Self {
            path: path.into(),
            image,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Trim `border` pixels from every edge.
    ///
    /// Tiles too small to survive the trim (either side `<= 2 * border`) are
    /// returned unchanged, as is everything when `border == 0`.
    pub fn crop_border(self, border: u32) -> Self {
        let (w, h) = (self.width(), self.height());
        let twice = border.saturating_mul(2);
        if border == 0 || w <= twice || h <= twice {
            return self;
        }
        let image = imageops::crop_imm(&self.image, border, border, w - twice, h - twice).to_image();
        Self {
            path: self.path,
            image,
        }
    }

    /// Bilinear resample to exactly `width` x `height`. No-op if already that size.
    pub fn resized(self, width: u32, height: u32) -> Self {
        if self.width() == width && self.height() == height {
            return self;
        }
        let image = imageops::resize(&self.image, width, height, FilterType::Triangle);
        Self {
            path: self.path,
            image,
        }
    }
}
