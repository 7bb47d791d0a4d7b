#[allow(dead_code)]
mod common;

use image::{Rgb, RgbImage};
use skymap_core::io::image_io::{load_tile, save_composite, save_rgb};
use skymap_core::mosaic::build_composite;

#[test]
fn test_save_load_png_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roundtrip.png");
    let img = RgbImage::from_fn(5, 3, |x, y| Rgb([x as u8 * 40, y as u8 * 80, 7]));

    save_rgb(&img, &path).unwrap();
    let tile = load_tile(&path).unwrap();

    assert_eq!(tile.path(), path.as_path());
    assert_eq!(tile.image, img);
}

#[test]
fn test_load_sniffs_format_over_extension() {
    let dir = tempfile::tempdir().unwrap();
    let png = common::write_tile(dir.path(), "real.png", 6, 6, Rgb([9, 8, 7]));
    let mislabelled = dir.path().join("tile.jpg");
    std::fs::copy(&png, &mislabelled).unwrap();

    let tile = load_tile(&mislabelled).unwrap();
    assert_eq!(tile.image.get_pixel(3, 3), &Rgb([9, 8, 7]));
}

#[test]
fn test_load_corrupt_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = common::write_corrupt(dir.path(), "broken.png");
    assert!(load_tile(&path).is_err());
}

#[test]
fn test_save_composite_tiff() {
    let tiles = common::tile_dir(9, 8, 8);
    let composite = build_composite(tiles.path(), 0).unwrap();

    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("mosaic.tiff");
    save_composite(&composite, &path).unwrap();

    let reloaded = load_tile(&path).unwrap();
    assert_eq!(reloaded.image, composite.image);
}
