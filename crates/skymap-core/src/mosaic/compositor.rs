use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use image::imageops;
use image::RgbImage;
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::config::{TileConfig, TileSizing};
use crate::consts::{GRID_CELLS, GRID_COLS, GRID_ROWS, PARALLEL_TILE_THRESHOLD};
use crate::error::{Result, SkymapError};
use crate::io::image_io::load_tile;
use crate::io::tile_store::list_tiles;
use crate::tile::Tile;

use super::layout::GridLayout;
use super::types::{Composite, CompositeReport, MosaicStage, NoOpReporter, ProgressReporter};

/// Parameters of one mosaic build.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MosaicOptions {
    pub border_crop: u32,
    pub layout: GridLayout,
    pub sizing: TileSizing,
}

impl From<&TileConfig> for MosaicOptions {
    fn from(config: &TileConfig) -> Self {
        Self {
            border_crop: config.border_crop,
            layout: config.layout,
            sizing: config.sizing,
        }
    }
}

/// Build the mosaic from `dir` with the default layout and sizing.
pub fn build_composite(dir: &Path, border_crop: u32) -> Result<Composite> {
    let options = MosaicOptions {
        border_crop,
        ..Default::default()
    };
    build_composite_with(dir, &options).map(|(composite, _)| composite)
}

pub fn build_composite_with(
    dir: &Path,
    options: &MosaicOptions,
) -> Result<(Composite, CompositeReport)> {
    build_composite_reported(dir, options, &NoOpReporter)
}

/// List, decode, trim, resize and place every tile in `dir`.
///
/// Paths that fail to decode are skipped and listed in the report. Fails with
/// `NoTilesLoaded` when nothing decodes and `InvalidTileGeometry` when the
/// first surviving tile has no area.
pub fn build_composite_reported(
    dir: &Path,
    options: &MosaicOptions,
    reporter: &dyn ProgressReporter,
) -> Result<(Composite, CompositeReport)> {
    reporter.begin_stage(MosaicStage::Listing, None);
    let paths = list_tiles(dir);
    reporter.finish_stage();

    reporter.begin_stage(MosaicStage::Decoding, Some(paths.len()));
    let decoded = decode_tiles(&paths, options.border_crop, reporter);
    reporter.finish_stage();

    let mut report = CompositeReport {
        listed: paths.len(),
        ..Default::default()
    };
    let mut tiles = Vec::with_capacity(decoded.len());
    for (path, result) in paths.iter().zip(decoded) {
        match result {
            Ok(tile) => tiles.push(tile),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Skipping undecodable tile");
                report.skipped.push(path.clone());
            }
        }
    }
    report.loaded = tiles.len();

    if tiles.is_empty() {
        warn!(dir = %dir.display(), listed = report.listed, "No tiles loaded");
        return Err(SkymapError::NoTilesLoaded {
            dir: dir.to_path_buf(),
        });
    }
    if report.is_partial() {
        warn!(
            loaded = report.loaded,
            skipped = report.skipped.len(),
            "Partial tile loss; missing cells stay black"
        );
    }

    if tiles.len() > GRID_CELLS {
        report.ignored_overflow = tiles.len() - GRID_CELLS;
        debug!(ignored = report.ignored_overflow, "More tiles than grid cells");
        tiles.truncate(GRID_CELLS);
    }

    reporter.begin_stage(MosaicStage::Placing, Some(tiles.len()));
    let composite = compose_tiles(tiles, options)?;
    reporter.finish_stage();

    info!(
        dir = %dir.display(),
        width = composite.width(),
        height = composite.height(),
        placed = composite.populated_cells(),
        "Composite built"
    );
    Ok((composite, report))
}

/// Decode and border-trim every path, preserving list order.
fn decode_tiles(
    paths: &[PathBuf],
    border_crop: u32,
    reporter: &dyn ProgressReporter,
) -> Vec<Result<Tile>> {
    let done = AtomicUsize::new(0);
    let load = |path: &PathBuf| {
        let tile = load_tile(path).map(|t| t.crop_border(border_crop));
        reporter.advance(done.fetch_add(1, Ordering::Relaxed) + 1);
        tile
    };

    if paths.len() >= PARALLEL_TILE_THRESHOLD {
        paths.par_iter().map(load).collect()
    } else {
        paths.iter().map(load).collect()
    }
}

/// Resize already-decoded (and trimmed) tiles to one cell size and place them.
///
/// `tiles` are indexed in list order; only the first `GRID_CELLS` are used.
/// Cells without a tile stay black.
pub fn compose_tiles(tiles: Vec<Tile>, options: &MosaicOptions) -> Result<Composite> {
    let first = tiles.first().ok_or_else(|| SkymapError::NoTilesLoaded {
        dir: PathBuf::new(),
    })?;
    if first.is_empty() {
        return Err(SkymapError::InvalidTileGeometry {
            width: first.width(),
            height: first.height(),
        });
    }

    let tiles: Vec<Tile> = tiles.into_iter().take(GRID_CELLS).collect();
    let (w, h) = target_size(&tiles, options.sizing);
    let invalid = || SkymapError::InvalidTileGeometry {
        width: w,
        height: h,
    };
    if w == 0 || h == 0 {
        return Err(invalid());
    }
    let canvas_w = w.checked_mul(GRID_COLS).ok_or_else(invalid)?;
    let canvas_h = h.checked_mul(GRID_ROWS).ok_or_else(invalid)?;

    let tiles: Vec<Tile> = tiles
        .into_par_iter()
        .map(|tile| {
            if tile.is_empty() {
                // Zero-area tiles cannot be resampled; treat them as solid black.
                Tile::new(tile.path, RgbImage::new(w, h))
            } else {
                tile.resized(w, h)
            }
        })
        .collect();

    let mut image = RgbImage::new(canvas_w, canvas_h);
    let mut cells: [Option<PathBuf>; GRID_CELLS] = Default::default();

    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            let idx = options.layout.tile_index(row, col);
            let Some(tile) = tiles.get(idx) else {
                continue;
            };
            imageops::replace(
                &mut image,
                &tile.image,
                i64::from(col * w),
                i64::from(row * h),
            );
            cells[(row * GRID_COLS + col) as usize] = Some(tile.path.clone());
        }
    }

    Ok(Composite {
        image,
        tile_width: w,
        tile_height: h,
        layout: options.layout,
        cells,
    })
}

fn target_size(tiles: &[Tile], sizing: TileSizing) -> (u32, u32) {
    match sizing {
        TileSizing::FirstTile => tiles
            .first()
            .map(|t| (t.width(), t.height()))
            .unwrap_or((0, 0)),
        TileSizing::Largest => tiles.iter().fold((0, 0), |(w, h), t| {
            (w.max(t.width()), h.max(t.height()))
        }),
        TileSizing::Fixed { width, height } => (width, height),
    }
}
