mod app;
mod convert;
mod messages;
mod panels;
mod progress;
mod states;
mod worker;

use std::path::Path;

use skymap_core::config::AppConfig;

/// Loaded at startup when present in the working directory.
const CONFIG_FILE: &str = "skymap.toml";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_startup_config(Path::new(CONFIG_FILE));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Universe space map"),
        ..Default::default()
    };

    eframe::run_native(
        "SkymapViewer",
        options,
        Box::new(|cc| Ok(Box::new(app::SkymapApp::new(&cc.egui_ctx, config)))),
    )
}

fn load_startup_config(path: &Path) -> AppConfig {
    if !path.exists() {
        return AppConfig::default();
    }
    let parsed = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|content| Ok(toml::from_str::<AppConfig>(&content)?))
        .and_then(|config| {
            config.validate()?;
            Ok(config)
        });
    match parsed {
        Ok(config) => {
            tracing::info!(path = %path.display(), "Loaded config");
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid config");
            AppConfig::default()
        }
    }
}
