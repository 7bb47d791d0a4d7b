pub mod compose;
pub mod config;
pub mod fetch;
pub mod list;
pub mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use skymap_core::config::{AppConfig, TileSizing};
use skymap_core::mosaic::{GridLayout, MosaicOptions};
use tracing::debug;

/// Load a TOML config, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&contents).context("Invalid config")?
        }
        None => AppConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Tile source options shared by every command that builds a mosaic.
#[derive(Args)]
pub struct MosaicArgs {
    /// Tile directory (defaults to the configured one)
    pub dir: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Pixels trimmed from every tile edge
    #[arg(long)]
    pub crop: Option<u32>,

    /// Tile-to-cell placement
    #[arg(long, value_enum)]
    pub layout: Option<LayoutArg>,

    /// Resize tiles to the largest tile instead of the first one
    #[arg(long, conflicts_with = "tile_size")]
    pub largest: bool,

    /// Resize tiles to a fixed WIDTHxHEIGHT
    #[arg(long, value_parser = parse_size)]
    pub tile_size: Option<(u32, u32)>,
}

impl MosaicArgs {
    /// Config with command-line overrides applied.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = load_config(self.config.as_deref())?;
        if let Some(ref dir) = self.dir {
            config.tiles.dir = dir.clone();
        }
        if let Some(crop) = self.crop {
            config.tiles.border_crop = crop;
        }
        if let Some(layout) = self.layout {
            config.tiles.layout = layout.into();
        }
        if self.largest {
            config.tiles.sizing = TileSizing::Largest;
        }
        if let Some((width, height)) = self.tile_size {
            config.tiles.sizing = TileSizing::Fixed { width, height };
        }
        config.validate()?;
        debug!(
            dir = %config.tiles.dir.display(),
            crop = config.tiles.border_crop,
            layout = %config.tiles.layout,
            sizing = %config.tiles.sizing,
            "Resolved tile options"
        );
        Ok(config)
    }
}

pub fn mosaic_options(config: &AppConfig) -> MosaicOptions {
    MosaicOptions::from(&config.tiles)
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    RowMajor,
    Rotated,
}

impl From<LayoutArg> for GridLayout {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::RowMajor => GridLayout::RowMajor,
            LayoutArg::Rotated => GridLayout::Rotated,
        }
    }
}

/// Parse `WIDTHxHEIGHT`.
pub fn parse_size(s: &str) -> std::result::Result<(u32, u32), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: u32 = w.trim().parse().map_err(|e| format!("bad width '{w}': {e}"))?;
    let h: u32 = h.trim().parse().map_err(|e| format!("bad height '{h}': {e}"))?;
    if w == 0 || h == 0 {
        return Err(format!("size must be non-zero, got {w}x{h}"));
    }
    Ok((w, h))
}

#[cfg(test)]
mod tests {
    use super::parse_size;

    #[test]
    fn parses_sizes() {
        assert_eq!(parse_size("800x600"), Ok((800, 600)));
        assert_eq!(parse_size("12X3"), Ok((12, 3)));
        assert!(parse_size("800").is_err());
        assert!(parse_size("0x5").is_err());
    }
}
