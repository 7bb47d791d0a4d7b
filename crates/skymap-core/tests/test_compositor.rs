#[allow(dead_code)]
mod common;

use std::sync::Mutex;

use image::Rgb;
use skymap_core::config::TileSizing;
use skymap_core::error::SkymapError;
use skymap_core::mosaic::{
    build_composite, build_composite_reported, build_composite_with, compose_tiles, GridLayout,
    MosaicOptions, MosaicStage, ProgressReporter,
};
use skymap_core::tile::Tile;

fn options(border_crop: u32, layout: GridLayout) -> MosaicOptions {
    MosaicOptions {
        border_crop,
        layout,
        sizing: TileSizing::FirstTile,
    }
}

#[test]
fn test_full_grid_row_major() {
    let dir = common::tile_dir(9, 10, 10);
    let (composite, report) =
        build_composite_with(dir.path(), &options(0, GridLayout::RowMajor)).unwrap();

    assert_eq!(composite.size(), (30, 30));
    assert_eq!(report.loaded, 9);
    assert!(!report.is_partial());
    for row in 0..3 {
        for col in 0..3 {
            let idx = (row * 3 + col) as usize;
            assert_eq!(common::cell_center(&composite, row, col), common::tile_color(idx));
        }
    }
}

#[test]
fn test_full_grid_rotated() {
    let dir = common::tile_dir(9, 10, 10);
    let (composite, _) =
        build_composite_with(dir.path(), &options(0, GridLayout::Rotated)).unwrap();

    // Tile 0 bottom-right, tile 4 centre, tile 8 top-left.
    assert_eq!(common::cell_center(&composite, 2, 2), common::tile_color(0));
    assert_eq!(common::cell_center(&composite, 1, 1), common::tile_color(4));
    assert_eq!(common::cell_center(&composite, 0, 0), common::tile_color(8));
    assert_eq!(common::cell_center(&composite, 0, 2), common::tile_color(6));
}

#[test]
fn test_fewer_than_nine_tiles_leaves_black_cells() {
    for layout in GridLayout::ALL {
        for n in 1..9usize {
            let dir = common::tile_dir(n, 6, 6);
            let (composite, report) = build_composite_with(dir.path(), &options(0, layout)).unwrap();

            assert_eq!(report.loaded, n);
            assert_eq!(composite.populated_cells(), n, "{layout} n={n}");

            let mut black = 0;
            for row in 0..3 {
                for col in 0..3 {
                    let idx = layout.tile_index(row, col);
                    if idx < n {
                        assert_eq!(common::cell_center(&composite, row, col), common::tile_color(idx));
                        assert!(composite.cell(row, col).is_some());
                    } else {
                        assert!(common::cell_is_black(&composite, row, col));
                        assert!(composite.cell(row, col).is_none());
                        black += 1;
                    }
                }
            }
            assert_eq!(black, 9 - n);
        }
    }
}

#[test]
fn test_empty_dir_no_tiles_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let err = build_composite(dir.path(), 20).unwrap_err();
    assert!(matches!(err, SkymapError::NoTilesLoaded { .. }));
}

#[test]
fn test_missing_dir_no_tiles_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let err = build_composite(&dir.path().join("nope"), 20).unwrap_err();
    assert!(matches!(err, SkymapError::NoTilesLoaded { .. }));
}

#[test]
fn test_all_corrupt_no_tiles_loaded() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..4 {
        common::write_corrupt(dir.path(), &format!("img_{i}.png"));
    }
    let err = build_composite(dir.path(), 0).unwrap_err();
    assert!(matches!(err, SkymapError::NoTilesLoaded { .. }));
}

#[test]
fn test_five_good_four_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    // Interleave corrupt files so survivors shift down the index list.
    let names = [
        "img_1.png", "img_2.png", "img_3.png", "img_4.png", "img_5.png", "img_6.png",
        "img_7.png", "img_8.png", "img_9.png",
    ];
    let mut good = 0;
    for (i, name) in names.iter().enumerate() {
        if i % 2 == 1 {
            common::write_corrupt(dir.path(), name);
        } else {
            common::write_tile(dir.path(), name, 8, 8, common::tile_color(good));
            good += 1;
        }
    }
    assert_eq!(good, 5);

    let (composite, report) =
        build_composite_with(dir.path(), &options(0, GridLayout::RowMajor)).unwrap();

    assert_eq!(report.listed, 9);
    assert_eq!(report.loaded, 5);
    assert_eq!(report.skipped.len(), 4);
    assert!(report.is_partial());
    assert_eq!(composite.populated_cells(), 5);

    // Survivors are indexed in order of survival.
    for idx in 0..5u32 {
        assert_eq!(
            common::cell_center(&composite, idx / 3, idx % 3),
            common::tile_color(idx as usize)
        );
    }
    for idx in 5..9u32 {
        assert!(common::cell_is_black(&composite, idx / 3, idx % 3));
    }
}

#[test]
fn test_border_crop_removes_edges() {
    let dir = tempfile::tempdir().unwrap();
    let mut img = image::RgbImage::from_pixel(60, 50, Rgb([0, 255, 0]));
    for y in 20..30 {
        for x in 20..40 {
            img.put_pixel(x, y, Rgb([255, 0, 0]));
        }
    }
    img.save(dir.path().join("img_1.png")).unwrap();

    let (composite, _) =
        build_composite_with(dir.path(), &options(20, GridLayout::RowMajor)).unwrap();

    assert_eq!((composite.tile_width, composite.tile_height), (20, 10));
    assert_eq!(composite.size(), (60, 30));
    let (x, y, w, h) = composite.cell_rect(0, 0);
    for py in y..y + h {
        for px in x..x + w {
            assert_eq!(composite.image.get_pixel(px, py), &Rgb([255, 0, 0]));
        }
    }
}

#[test]
fn test_border_crop_skips_small_tiles() {
    let dir = common::tile_dir(1, 30, 30);
    let (composite, _) =
        build_composite_with(dir.path(), &options(20, GridLayout::RowMajor)).unwrap();
    assert_eq!((composite.tile_width, composite.tile_height), (30, 30));
}

#[test]
fn test_zero_crop_equals_direct_placement() {
    let dir = common::tile_dir(9, 7, 5);
    let (composite, _) =
        build_composite_with(dir.path(), &options(0, GridLayout::RowMajor)).unwrap();

    let mut direct = image::RgbImage::new(21, 15);
    for idx in 0..9u32 {
        let tile = image::RgbImage::from_pixel(7, 5, common::tile_color(idx as usize));
        image::imageops::replace(
            &mut direct,
            &tile,
            i64::from((idx % 3) * 7),
            i64::from((idx / 3) * 5),
        );
    }
    assert_eq!(composite.image, direct);
}

#[test]
fn test_nonuniform_tiles_resized_to_first() {
    let dir = tempfile::tempdir().unwrap();
    common::write_tile(dir.path(), "img_1.png", 40, 30, common::tile_color(0));
    common::write_tile(dir.path(), "img_2.png", 80, 80, common::tile_color(1));
    common::write_tile(dir.path(), "img_3.png", 10, 90, common::tile_color(2));

    let (composite, _) =
        build_composite_with(dir.path(), &options(0, GridLayout::RowMajor)).unwrap();

    assert_eq!(composite.size(), (120, 90));
    assert_eq!(common::cell_center(&composite, 0, 1), common::tile_color(1));
    assert_eq!(common::cell_center(&composite, 0, 2), common::tile_color(2));
}

#[test]
fn test_largest_and_fixed_sizing() {
    let dir = tempfile::tempdir().unwrap();
    common::write_tile(dir.path(), "img_1.png", 40, 30, common::tile_color(0));
    common::write_tile(dir.path(), "img_2.png", 20, 50, common::tile_color(1));

    let largest = MosaicOptions {
        sizing: TileSizing::Largest,
        ..options(0, GridLayout::RowMajor)
    };
    let (composite, _) = build_composite_with(dir.path(), &largest).unwrap();
    assert_eq!((composite.tile_width, composite.tile_height), (40, 50));

    let fixed = MosaicOptions {
        sizing: TileSizing::Fixed { width: 16, height: 12 },
        ..options(0, GridLayout::RowMajor)
    };
    let (composite, _) = build_composite_with(dir.path(), &fixed).unwrap();
    assert_eq!(composite.size(), (48, 36));
}

#[test]
fn test_overflow_tiles_ignored() {
    let dir = tempfile::tempdir().unwrap();
    // Letters keep lexicographic order equal to creation order.
    for (i, c) in ('a'..='l').enumerate() {
        common::write_tile(dir.path(), &format!("tile_{c}.png"), 4, 4, common::tile_color(i));
    }
    let (composite, report) =
        build_composite_with(dir.path(), &options(0, GridLayout::RowMajor)).unwrap();

    assert_eq!(report.loaded, 12);
    assert_eq!(report.ignored_overflow, 3);
    assert_eq!(report.placed(), 9);
    assert_eq!(composite.populated_cells(), 9);
    assert_eq!(common::cell_center(&composite, 2, 2), common::tile_color(8));
}

#[test]
fn test_compose_tiles_in_memory() {
    let tiles: Vec<Tile> = (0..3)
        .map(|i| {
            Tile::new(
                format!("mem_{i}"),
                image::RgbImage::from_pixel(5, 5, common::tile_color(i)),
            )
        })
        .collect();
    let composite = compose_tiles(tiles, &options(0, GridLayout::Rotated)).unwrap();
    assert_eq!(composite.layout, GridLayout::Rotated);
    assert_eq!(composite.cell(2, 2).unwrap().to_str(), Some("mem_0"));
    assert_eq!(composite.cell(2, 0).unwrap().to_str(), Some("mem_2"));
    assert!(composite.cell(1, 1).is_none());
}

#[derive(Default)]
struct RecordingReporter {
    stages: Mutex<Vec<(MosaicStage, Option<usize>)>>,
    max_done: Mutex<usize>,
}

impl ProgressReporter for RecordingReporter {
    fn begin_stage(&self, stage: MosaicStage, total_items: Option<usize>) {
        self.stages.lock().unwrap().push((stage, total_items));
    }

    fn advance(&self, items_done: usize) {
        let mut max = self.max_done.lock().unwrap();
        *max = (*max).max(items_done);
    }
}

#[test]
fn test_progress_reported_per_stage() {
    let dir = common::tile_dir(4, 6, 6);
    let reporter = RecordingReporter::default();
    build_composite_reported(dir.path(), &options(0, GridLayout::Rotated), &reporter).unwrap();

    let stages = reporter.stages.lock().unwrap().clone();
    assert_eq!(
        stages,
        vec![
            (MosaicStage::Listing, None),
            (MosaicStage::Decoding, Some(4)),
            (MosaicStage::Placing, Some(4)),
        ]
    );
    assert_eq!(*reporter.max_done.lock().unwrap(), 4);
}
