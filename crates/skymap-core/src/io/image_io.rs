use std::path::Path;

use image::{ImageFormat, ImageReader, RgbImage};

use crate::error::Result;
use crate::mosaic::Composite;
use crate::tile::Tile;
use crate::viewport::DisplayFrame;

/// Decode any supported raster file into an 8-bit RGB tile.
///
/// The format is sniffed from the content, so a mislabelled extension still loads.
pub fn load_tile(path: &Path) -> Result<Tile> {
    let img = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    Ok(Tile::new(path, img.to_rgb8()))
}

/// Save an RGB buffer, choosing the format from the file extension (PNG by default).
pub fn save_rgb(image: &RgbImage, path: &Path) -> Result<()> {
    let format = match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => ImageFormat::Tiff,
        Some("jpg" | "jpeg") => ImageFormat::Jpeg,
        _ => ImageFormat::Png,
    };
    image.save_with_format(path, format)?;
    Ok(())
}

pub fn save_composite(composite: &Composite, path: &Path) -> Result<()> {
    save_rgb(&composite.image, path)
}

pub fn save_frame(frame: &DisplayFrame, path: &Path) -> Result<()> {
    save_rgb(&frame.image, path)
}
