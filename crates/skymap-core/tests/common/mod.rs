use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use skymap_core::mosaic::Composite;

/// Distinct, never-black colour for tile `index`.
pub fn tile_color(index: usize) -> Rgb<u8> {
    let i = index as u8;
    Rgb([10 + 20 * i, 200 - 10 * i, 1 + 7 * i])
}

/// Write a solid-colour PNG tile and return its path.
pub fn write_tile(dir: &Path, name: &str, width: u32, height: u32, color: Rgb<u8>) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, color)
        .save(&path)
        .expect("write tile");
    path
}

/// Write a file that is not a decodable image.
pub fn write_corrupt(dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, b"definitely not a png").expect("write corrupt tile");
    path
}

/// Temp directory with `count` solid tiles `img_1.png`.. coloured by list index.
pub fn tile_dir(count: usize, width: u32, height: u32) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    for i in 0..count {
        write_tile(dir.path(), &format!("img_{}.png", i + 1), width, height, tile_color(i));
    }
    dir
}

/// Colour at the centre of cell `(row, col)`.
pub fn cell_center(composite: &Composite, row: u32, col: u32) -> Rgb<u8> {
    let (x, y, w, h) = composite.cell_rect(row, col);
    *composite.image.get_pixel(x + w / 2, y + h / 2)
}

/// True when every pixel of cell `(row, col)` is black.
pub fn cell_is_black(composite: &Composite, row: u32, col: u32) -> bool {
    let (x, y, w, h) = composite.cell_rect(row, col);
    (y..y + h).all(|py| (x..x + w).all(|px| composite.image.get_pixel(px, py).0 == [0, 0, 0]))
}

/// In-memory composite with a horizontal/vertical gradient, for viewport tests.
pub fn gradient_composite(width: u32, height: u32) -> Composite {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
    });
    Composite {
        image,
        tile_width: width / 3,
        tile_height: height / 3,
        layout: Default::default(),
        cells: Default::default(),
    }
}
