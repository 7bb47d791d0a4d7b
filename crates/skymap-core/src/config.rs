use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_BORDER_CROP, DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH, DEFAULT_FETCH_INTERPRETER,
    DEFAULT_FETCH_SCRIPT, DEFAULT_MAX_ZOOM, DEFAULT_TILE_DIR, DEFAULT_WHEEL_UNIT,
    DEFAULT_ZOOM_STEP,
};
use crate::error::{Result, SkymapError};
use crate::fetch::FetchRequest;
use crate::mosaic::layout::GridLayout;

/// Complete application configuration, persisted as TOML by the binaries.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub tiles: TileConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub zoom: ZoomConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

impl AppConfig {
    /// Reject values that would make the viewport or compositor degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.display.width == 0 || self.display.height == 0 {
            return Err(SkymapError::InvalidConfig(format!(
                "display size must be non-zero, got {}x{}",
                self.display.width, self.display.height
            )));
        }
        if !(self.zoom.step.is_finite() && self.zoom.step > 0.0) {
            return Err(SkymapError::InvalidConfig(format!(
                "zoom step must be positive, got {}",
                self.zoom.step
            )));
        }
        if !(self.zoom.wheel_unit.is_finite() && self.zoom.wheel_unit > 0.0) {
            return Err(SkymapError::InvalidConfig(format!(
                "wheel unit must be positive, got {}",
                self.zoom.wheel_unit
            )));
        }
        if self.zoom.max_zoom.is_nan() || self.zoom.max_zoom <= 0.0 {
            return Err(SkymapError::InvalidConfig(format!(
                "max zoom must be positive, got {}",
                self.zoom.max_zoom
            )));
        }
        if let TileSizing::Fixed { width, height } = self.tiles.sizing {
            if width == 0 || height == 0 {
                return Err(SkymapError::InvalidConfig(format!(
                    "fixed tile size must be non-zero, got {width}x{height}"
                )));
            }
        }
        Ok(())
    }
}

/// Where tiles come from and how they are assembled.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileConfig {
    pub dir: PathBuf,
    /// Pixels trimmed from every edge of each tile.
    pub border_crop: u32,
    pub layout: GridLayout,
    pub sizing: TileSizing,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_TILE_DIR),
            border_crop: DEFAULT_BORDER_CROP,
            layout: GridLayout::default(),
            sizing: TileSizing::default(),
        }
    }
}

/// Canonical cell size every tile is resampled to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileSizing {
    /// Size of the first tile that survived decoding.
    #[default]
    FirstTile,
    /// Largest width and largest height across surviving tiles.
    Largest,
    Fixed { width: u32, height: u32 },
}

impl fmt::Display for TileSizing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstTile => write!(f, "First tile"),
            Self::Largest => write!(f, "Largest"),
            Self::Fixed { width, height } => write!(f, "Fixed {width}x{height}"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub width: u32,
    pub height: u32,
    pub channel_order: ChannelOrder,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_DISPLAY_WIDTH,
            height: DEFAULT_DISPLAY_HEIGHT,
            channel_order: ChannelOrder::default(),
        }
    }
}

/// Interleaved channel order expected by the presentation layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelOrder {
    #[default]
    Rgb,
    Bgr,
}

impl fmt::Display for ChannelOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb => write!(f, "RGB"),
            Self::Bgr => write!(f, "BGR"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Zoom multiplier per wheel notch.
    pub step: f64,
    /// Wheel delta that counts as one notch.
    pub wheel_unit: f64,
    pub max_zoom: f64,
    pub fit: FitPolicy,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            step: DEFAULT_ZOOM_STEP,
            wheel_unit: DEFAULT_WHEEL_UNIT,
            max_zoom: DEFAULT_MAX_ZOOM,
            fit: FitPolicy::default(),
        }
    }
}

/// How the minimum zoom (fit floor) is derived from display and composite sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitPolicy {
    /// `min(dw/cw, dh/ch)`: the whole composite fits, one axis may letterbox.
    #[default]
    Contain,
    /// `max(dw/cw, dh/ch)`: the composite always covers the display.
    Cover,
}

impl fmt::Display for FitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contain => write!(f, "Contain"),
            Self::Cover => write!(f, "Cover"),
        }
    }
}

/// External fetch script invocation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    pub interpreter: String,
    pub script: PathBuf,
    pub flags: FetchFlags,
    /// Values pre-filled in the "new map" form.
    pub defaults: FetchRequest,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            interpreter: DEFAULT_FETCH_INTERPRETER.into(),
            script: PathBuf::from(DEFAULT_FETCH_SCRIPT),
            flags: FetchFlags::default(),
            defaults: FetchRequest::default(),
        }
    }
}

/// Command-line flag names understood by the fetch script.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchFlags {
    pub ra: String,
    pub dec: String,
    pub radius: String,
    pub pixels: String,
    pub date_time: String,
    pub survey: String,
    pub output: String,
}

impl Default for FetchFlags {
    fn default() -> Self {
        Self {
            ra: "--ra".into(),
            dec: "--dec".into(),
            radius: "--raio".into(),
            pixels: "--pixels".into(),
            date_time: "--data_hora".into(),
            survey: "--survey".into(),
            output: "--output".into(),
        }
    }
}
