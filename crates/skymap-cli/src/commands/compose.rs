use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use skymap_core::io::image_io::save_composite;
use skymap_core::mosaic::build_composite_reported;

use super::{mosaic_options, MosaicArgs};
use crate::progress::BarReporter;
use crate::summary::print_composite_summary;

#[derive(Args)]
pub struct ComposeArgs {
    #[command(flatten)]
    pub mosaic: MosaicArgs,

    /// Output image (PNG, JPEG or TIFF)
    #[arg(short, long, default_value = "mosaic.png")]
    pub output: PathBuf,
}

pub fn run(args: &ComposeArgs) -> Result<()> {
    let config = args.mosaic.resolve()?;
    let options = mosaic_options(&config);

    let reporter = BarReporter::new()?;
    let result = build_composite_reported(&config.tiles.dir, &options, &reporter);
    reporter.finish();
    let (composite, report) = result?;

    save_composite(&composite, &args.output)?;
    print_composite_summary(&config.tiles.dir, &composite, &report);
    println!("Saved to {}", args.output.display());
    Ok(())
}
