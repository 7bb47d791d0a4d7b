/// Number of tile rows in the mosaic grid.
pub const GRID_ROWS: u32 = 3;

/// Number of tile columns in the mosaic grid.
pub const GRID_COLS: u32 = 3;

/// Total number of cells in the mosaic grid.
pub const GRID_CELLS: usize = (GRID_ROWS * GRID_COLS) as usize;

/// Pixels trimmed from every tile edge by default (scanner/telescope borders).
pub const DEFAULT_BORDER_CROP: u32 = 20;

/// Default viewport width in display pixels.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 800;

/// Default viewport height in display pixels.
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 600;

/// Multiplicative zoom change per wheel notch.
pub const DEFAULT_ZOOM_STEP: f64 = 1.1;

/// Wheel delta corresponding to one notch (one `DEFAULT_ZOOM_STEP`).
pub const DEFAULT_WHEEL_UNIT: f64 = 120.0;

/// Upper zoom bound. Keeps resampling cost and f64 precision sane.
pub const DEFAULT_MAX_ZOOM: f64 = 20.0;

/// Minimum tile count to decode tiles with Rayon.
pub const PARALLEL_TILE_THRESHOLD: usize = 2;

/// Minimum output pixel count (w*h) to sample the viewport row-parallel.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Number of channels in composite and display buffers (R, G, B).
pub const COLOR_CHANNEL_COUNT: usize = 3;

/// Default tile directory populated by the fetch step.
pub const DEFAULT_TILE_DIR: &str = "./img";

/// Default interpreter for the fetch script.
pub const DEFAULT_FETCH_INTERPRETER: &str = "python3";

/// Default fetch script path.
pub const DEFAULT_FETCH_SCRIPT: &str = "./srcs/get_img_text.py";
