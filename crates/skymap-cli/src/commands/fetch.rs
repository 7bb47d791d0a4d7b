use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use skymap_core::fetch::run_fetch;
use skymap_core::io::image_io::save_composite;
use skymap_core::mosaic::build_composite_reported;

use super::{load_config, mosaic_options};
use crate::progress::BarReporter;
use crate::summary::print_composite_summary;

#[derive(Args)]
pub struct FetchArgs {
    /// Config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Right ascension in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub ra: Option<f64>,

    /// Declination in degrees
    #[arg(long, allow_hyphen_values = true)]
    pub dec: Option<f64>,

    /// Observation date-time, e.g. "2025-10-04 11:31:02"
    #[arg(long)]
    pub date_time: Option<String>,

    /// Field radius in degrees
    #[arg(long)]
    pub radius: Option<f64>,

    /// Pixel count per side of each tile
    #[arg(long)]
    pub pixels: Option<u32>,

    /// Survey name passed through to the script
    #[arg(long)]
    pub survey: Option<String>,

    /// Directory the script writes tiles into
    #[arg(long)]
    pub tile_dir: Option<PathBuf>,

    /// Rebuild the mosaic afterwards and save it here
    #[arg(long)]
    pub rebuild: Option<PathBuf>,
}

pub fn run(args: &FetchArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;

    let mut request = config.fetch.defaults.clone();
    if let Some(ra) = args.ra {
        request.ra_deg = ra;
    }
    if let Some(dec) = args.dec {
        request.dec_deg = dec;
    }
    if let Some(ref date_time) = args.date_time {
        request.date_time = date_time.clone();
    }
    if let Some(radius) = args.radius {
        request.radius_deg = radius;
    }
    if let Some(pixels) = args.pixels {
        request.pixels = pixels;
    }
    if let Some(ref survey) = args.survey {
        request.survey = Some(survey.clone());
    }
    let tile_dir = args.tile_dir.clone().unwrap_or_else(|| config.tiles.dir.clone());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg} [{elapsed}]")?);
    spinner.set_message(format!(
        "Fetching RA {:.4} Dec {:.4}",
        request.ra_deg, request.dec_deg
    ));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let result = run_fetch(&request, &config.fetch, &tile_dir);
    spinner.finish_and_clear();
    let tile_dir = result?;
    println!("Tiles written to {}", tile_dir.display());

    if let Some(ref output) = args.rebuild {
        let reporter = BarReporter::new()?;
        let result = build_composite_reported(&tile_dir, &mosaic_options(&config), &reporter);
        reporter.finish();
        let (composite, report) = result?;
        save_composite(&composite, output)?;
        print_composite_summary(&tile_dir, &composite, &report);
        println!("Saved to {}", output.display());
    }
    Ok(())
}
