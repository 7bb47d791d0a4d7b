mod commands;
mod progress;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "skymap", about = "Sky survey mosaic builder and viewer")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tiles in the order they are placed
    List(commands::list::ListArgs),
    /// Build the 3x3 mosaic and save it
    Compose(commands::compose::ComposeArgs),
    /// Render one viewport frame of the mosaic
    Render(commands::render::RenderArgs),
    /// Run the survey fetch script, optionally rebuilding the mosaic
    Fetch(commands::fetch::FetchArgs),
    /// Print or save the default configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::List(args) => commands::list::run(args),
        Commands::Compose(args) => commands::compose::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Fetch(args) => commands::fetch::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
