use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use skymap_core::config::FitPolicy;
use skymap_core::io::image_io::save_frame;
use skymap_core::mosaic::build_composite_with;
use skymap_core::viewport::ViewportController;

use super::{mosaic_options, parse_size, MosaicArgs};

#[derive(Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub mosaic: MosaicArgs,

    /// Zoom factor, clamped to the allowed range (defaults to 1.0)
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Zoom out until the whole mosaic fits
    #[arg(long, conflicts_with = "zoom")]
    pub fit_view: bool,

    /// Horizontal pan in display pixels, applied after zooming
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub pan_x: f64,

    /// Vertical pan in display pixels, applied after zooming
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub pan_y: f64,

    /// Display size as WIDTHxHEIGHT (defaults to the configured one)
    #[arg(long, value_parser = parse_size)]
    pub size: Option<(u32, u32)>,

    /// Fit floor policy
    #[arg(long, value_enum)]
    pub fit: Option<FitArg>,

    /// Output image (PNG, JPEG or TIFF)
    #[arg(short, long, default_value = "view.png")]
    pub output: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FitArg {
    Contain,
    Cover,
}

impl From<FitArg> for FitPolicy {
    fn from(arg: FitArg) -> Self {
        match arg {
            FitArg::Contain => FitPolicy::Contain,
            FitArg::Cover => FitPolicy::Cover,
        }
    }
}

pub fn run(args: &RenderArgs) -> Result<()> {
    let mut config = args.mosaic.resolve()?;
    if let Some((width, height)) = args.size {
        config.display.width = width;
        config.display.height = height;
    }
    if let Some(fit) = args.fit {
        config.zoom.fit = fit.into();
    }

    let (composite, report) = build_composite_with(&config.tiles.dir, &mosaic_options(&config))?;
    if report.is_partial() {
        eprintln!("Warning: {} tile(s) could not be decoded", report.skipped.len());
    }

    let display = (config.display.width, config.display.height);
    let mut viewport = ViewportController::for_composite(&composite, display, config.zoom.clone());
    if args.fit_view {
        viewport.fit();
    } else if let Some(zoom) = args.zoom {
        viewport.set_zoom(zoom);
    }
    viewport.pan(args.pan_x, args.pan_y);

    let frame = viewport.render_frame(&composite);
    save_frame(&frame, &args.output)?;

    let (x, y, w, h) = viewport.visible_rect();
    println!(
        "Zoom {:.3}, centre ({:.1}, {:.1}), showing {:.0}x{:.0} at ({:.0}, {:.0})",
        viewport.zoom(),
        viewport.center().0,
        viewport.center().1,
        w,
        h,
        x,
        y
    );
    println!("Saved {}x{} frame to {}", frame.width(), frame.height(), args.output.display());
    Ok(())
}
