use std::path::PathBuf;

use image::RgbImage;

use crate::consts::{GRID_CELLS, GRID_COLS, GRID_ROWS};

use super::layout::GridLayout;

/// Mosaic assembly stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MosaicStage {
    Listing,
    Decoding,
    Placing,
}

impl std::fmt::Display for MosaicStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Listing => write!(f, "Listing tiles"),
            Self::Decoding => write!(f, "Decoding tiles"),
            Self::Placing => write!(f, "Placing tiles"),
        }
    }
}

/// Thread-safe progress reporting for mosaic assembly.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the tile count, if known.
    fn begin_stage(&self, _stage: MosaicStage, _total_items: Option<usize>) {}

    /// `items_done` work items within the current stage have completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}

/// The full 3x3 mosaic.
///
/// Built once per tile set and replaced wholesale, never patched in place.
#[derive(Clone, Debug)]
pub struct Composite {
    pub image: RgbImage,
    pub tile_width: u32,
    pub tile_height: u32,
    pub layout: GridLayout,
    /// Source path of the tile in each cell, row-major by screen position.
    pub cells: [Option<PathBuf>; GRID_CELLS],
}

impl Composite {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn populated_cells(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Path of the tile at `(row, col)`, if that cell was filled.
    pub fn cell(&self, row: u32, col: u32) -> Option<&PathBuf> {
        if row >= GRID_ROWS || col >= GRID_COLS {
            return None;
        }
        self.cells[(row * GRID_COLS + col) as usize].as_ref()
    }

    /// Pixel rectangle `(x, y, width, height)` covered by cell `(row, col)`.
    pub fn cell_rect(&self, row: u32, col: u32) -> (u32, u32, u32, u32) {
        (
            col * self.tile_width,
            row * self.tile_height,
            self.tile_width,
            self.tile_height,
        )
    }
}

/// What happened to each listed path during a build.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompositeReport {
    /// Directory entries considered.
    pub listed: usize,
    /// Tiles that decoded successfully.
    pub loaded: usize,
    /// Paths that failed to decode.
    pub skipped: Vec<PathBuf>,
    /// Decoded tiles beyond the last grid cell.
    pub ignored_overflow: usize,
}

impl CompositeReport {
    /// Some, but not all, listed paths decoded.
    pub fn is_partial(&self) -> bool {
        self.loaded > 0 && !self.skipped.is_empty()
    }

    pub fn placed(&self) -> usize {
        self.loaded - self.ignored_overflow
    }
}
