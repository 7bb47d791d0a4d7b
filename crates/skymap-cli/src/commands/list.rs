use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use skymap_core::consts::GRID_CELLS;
use skymap_core::io::tile_store::list_tiles;

use super::load_config;

#[derive(Args)]
pub struct ListArgs {
    /// Tile directory (defaults to the configured one)
    pub dir: Option<PathBuf>,

    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: &ListArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let dir = args.dir.clone().unwrap_or(config.tiles.dir);
    let tiles = list_tiles(&dir);

    if tiles.is_empty() {
        println!("No tiles in {}", dir.display());
        return Ok(());
    }

    for (i, path) in tiles.iter().enumerate() {
        let marker = if i < GRID_CELLS { " " } else { "-" };
        println!("{marker} {i:>3}  {}", path.display());
    }
    if tiles.len() > GRID_CELLS {
        println!("{} entries beyond the grid are ignored", tiles.len() - GRID_CELLS);
    }
    Ok(())
}
