use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{GRID_CELLS, GRID_COLS, GRID_ROWS};

/// Which tile index lands in which grid cell.
///
/// Tile indices are positions in the ordered list of decoded tiles. Cells are
/// addressed by `(row, col)` with `(0, 0)` at the top-left of the composite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridLayout {
    /// `[[0,1,2],[3,4,5],[6,7,8]]`.
    RowMajor,
    /// `[[8,7,6],[5,4,3],[2,1,0]]`: row-major turned 180 degrees, tile 4 in the centre.
    #[default]
    Rotated,
}

impl GridLayout {
    pub const ALL: [GridLayout; 2] = [GridLayout::RowMajor, GridLayout::Rotated];

    /// Tile index placed at `(row, col)`.
    pub fn tile_index(self, row: u32, col: u32) -> usize {
        debug_assert!(row < GRID_ROWS && col < GRID_COLS);
        let row_major = (row * GRID_COLS + col) as usize;
        match self {
            Self::RowMajor => row_major,
            Self::Rotated => GRID_CELLS - 1 - row_major,
        }
    }

    /// Cell `(row, col)` holding tile `index`, or `None` past the last cell.
    pub fn cell_of(self, index: usize) -> Option<(u32, u32)> {
        if index >= GRID_CELLS {
            return None;
        }
        let row_major = match self {
            Self::RowMajor => index,
            Self::Rotated => GRID_CELLS - 1 - index,
        } as u32;
        Some((row_major / GRID_COLS, row_major % GRID_COLS))
    }

    /// The full index map, one row per grid row.
    pub fn index_map(self) -> [[usize; GRID_COLS as usize]; GRID_ROWS as usize] {
        let mut map = [[0; GRID_COLS as usize]; GRID_ROWS as usize];
        for (row, cells) in map.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.tile_index(row as u32, col as u32);
            }
        }
        map
    }
}

impl fmt::Display for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowMajor => write!(f, "Row-major"),
            Self::Rotated => write!(f, "Rotated"),
        }
    }
}
