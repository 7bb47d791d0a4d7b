use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Instant;

use skymap_core::config::AppConfig;
use skymap_core::fetch::{spawn_fetch, FetchOutcome};
use skymap_core::mosaic::{Composite, CompositeStore, MosaicOptions};
use skymap_core::viewport::{Interaction, ViewportController};

use crate::convert::frame_to_color_image;
use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{Activity, FetchFormState, UIState, ViewportState};
use crate::worker;

pub struct SkymapApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_tx: mpsc::Sender<WorkerResult>,
    pub result_rx: mpsc::Receiver<WorkerResult>,
    pub config: AppConfig,
    pub store: CompositeStore,
    /// Present whenever the store holds a composite.
    pub view: Option<ViewportController>,
    pub interaction: Interaction,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    pub form: FetchFormState,
    pub show_about: bool,
}

impl SkymapApp {
    pub fn new(ctx: &egui::Context, config: AppConfig) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx.clone(), ctx.clone());

        let mut app = Self {
            cmd_tx,
            result_tx,
            result_rx,
            ui_state: UIState::new(config.tiles.dir.clone()),
            form: FetchFormState::from_request(&config.fetch.defaults),
            config,
            store: CompositeStore::new(),
            view: None,
            interaction: Interaction::new(),
            viewport: ViewportState::default(),
            show_about: false,
        };
        app.request_rebuild();
        app
    }

    pub fn display_size(&self) -> (u32, u32) {
        (self.config.display.width, self.config.display.height)
    }

    pub fn mosaic_options(&self) -> MosaicOptions {
        MosaicOptions::from(&self.config.tiles)
    }

    /// Drain all pending results from the worker and fetch threads.
    fn poll_results(&mut self) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::CompositeReady {
                    composite,
                    report,
                    elapsed,
                } => {
                    self.ui_state.finish();
                    self.ui_state.add_log(format!(
                        "Mosaic {}x{} from {}/{} tiles in {}",
                        composite.width(),
                        composite.height(),
                        report.placed(),
                        report.listed,
                        format_duration(elapsed)
                    ));
                    if report.ignored_overflow > 0 {
                        self.ui_state.add_log(format!(
                            "{} tiles beyond the grid ignored",
                            report.ignored_overflow
                        ));
                    }
                    self.ui_state.last_report = Some(report);
                    self.install_composite(*composite);
                }
                WorkerResult::RebuildFailed { message } => {
                    self.ui_state.finish();
                    let kept = if self.store.is_empty() {
                        ""
                    } else {
                        " (keeping previous mosaic)"
                    };
                    self.ui_state
                        .add_log(format!("ERROR: rebuild failed: {message}{kept}"));
                }
                WorkerResult::FetchCompleted { tile_dir, elapsed } => {
                    self.ui_state.finish();
                    self.ui_state.add_log(format!(
                        "Fetch finished in {}",
                        format_duration(elapsed)
                    ));
                    self.ui_state.tile_dir = tile_dir;
                    self.request_rebuild();
                }
                WorkerResult::FetchFailed { reason } => {
                    self.ui_state.finish();
                    self.ui_state.add_log(format!("ERROR: fetch failed: {reason}"));
                }
                WorkerResult::Progress {
                    stage,
                    items_done,
                    items_total,
                } => {
                    self.ui_state.progress_stage = Some(stage);
                    self.ui_state.progress_items_done = items_done;
                    self.ui_state.progress_items_total = items_total;
                }
                WorkerResult::ImageSaved { path } => {
                    self.ui_state.finish();
                    self.ui_state.add_log(format!("Saved: {}", path.display()));
                }
                WorkerResult::ConfigImported { config } => {
                    self.apply_config(*config);
                }
                WorkerResult::Error { message } => {
                    self.ui_state.finish();
                    self.ui_state.add_log(format!("ERROR: {message}"));
                }
                WorkerResult::Log { message } => {
                    self.ui_state.add_log(message);
                }
            }
        }
    }

    /// Swap in a new composite with a fresh, centred viewport.
    fn install_composite(&mut self, composite: Composite) {
        let view = ViewportController::for_composite(
            &composite,
            self.display_size(),
            self.config.zoom.clone(),
        );
        let dir = self.ui_state.tile_dir.display().to_string();
        self.store.replace(composite);
        self.view = Some(view);
        self.interaction = Interaction::new();
        self.viewport.viewing_label = dir;
        self.viewport.dirty = true;
    }

    fn apply_config(&mut self, config: AppConfig) {
        if let Err(e) = config.validate() {
            self.ui_state.add_log(format!("ERROR: invalid config: {e}"));
            return;
        }
        self.form = FetchFormState::from_request(&config.fetch.defaults);
        self.ui_state.tile_dir = config.tiles.dir.clone();
        self.config = config;
        // Display size and zoom limits may have changed.
        if let Some(composite) = self.store.current() {
            self.view = Some(ViewportController::for_composite(
                composite,
                self.display_size(),
                self.config.zoom.clone(),
            ));
            self.viewport.dirty = true;
        }
        self.ui_state.add_log("Config imported".into());
    }

    pub fn request_rebuild(&mut self) {
        if self.ui_state.is_busy() {
            return;
        }
        self.ui_state.start(Activity::Building);
        self.send_command(WorkerCommand::Rebuild {
            dir: self.ui_state.tile_dir.clone(),
            options: self.mosaic_options(),
        });
    }

    /// Start a fetch for the current form values on a background thread.
    pub fn request_fetch(&mut self) {
        if self.ui_state.is_busy() {
            return;
        }
        let request = self.form.to_request(&self.config.fetch.defaults);
        let tx = self.result_tx.clone();
        let start = Instant::now();

        match spawn_fetch(
            request,
            self.config.fetch.clone(),
            self.ui_state.fetch_dir(),
            move |outcome| {
                let result = match outcome {
                    FetchOutcome::Completed { tile_dir } => WorkerResult::FetchCompleted {
                        tile_dir,
                        elapsed: start.elapsed(),
                    },
                    FetchOutcome::Failed { reason } => WorkerResult::FetchFailed { reason },
                };
                let _ = tx.send(result);
            },
        ) {
            Ok(_) => {
                self.ui_state.start(Activity::Fetching);
                self.ui_state.add_log(format!(
                    "Fetching RA {:.4} Dec {:.4} into {}",
                    self.form.ra_deg,
                    self.form.dec_deg,
                    self.ui_state.tile_dir.display()
                ));
            }
            Err(e) => self.ui_state.add_log(format!("ERROR: {e}")),
        }
    }

    pub fn save_view(&mut self, path: PathBuf) {
        let (Some(composite), Some(view)) = (self.store.current(), self.view.as_ref()) else {
            return;
        };
        let frame = view.render_frame(composite);
        self.ui_state.start(Activity::Saving);
        self.send_command(WorkerCommand::SaveView { frame, path });
    }

    pub fn save_mosaic(&mut self, path: PathBuf) {
        let Some(composite) = self.store.current() else {
            return;
        };
        let composite = Box::new(composite.clone());
        self.ui_state.start(Activity::Saving);
        self.send_command(WorkerCommand::SaveMosaic { composite, path });
    }

    /// Re-render the display frame if the viewport changed since the last upload.
    pub fn refresh_texture(&mut self, ctx: &egui::Context) {
        if !self.viewport.dirty {
            return;
        }
        let (Some(composite), Some(view)) = (self.store.current(), self.view.as_ref()) else {
            return;
        };
        let image = frame_to_color_image(&view.render_frame(composite));
        match self.viewport.texture {
            Some(ref mut texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.viewport.texture =
                    Some(ctx.load_texture("viewport", image, egui::TextureOptions::NEAREST));
            }
        }
        self.viewport.dirty = false;
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for SkymapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results();

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);

        // Fetch completion arrives from a thread without a repaint handle.
        if self.ui_state.running == Some(Activity::Fetching) {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }

        if self.show_about {
            egui::Window::new("About")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Universe space map");
                        ui.label("Sky survey mosaic viewer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs_f32();
    if secs < 1.0 {
        format!("{:.0}ms", d.as_millis())
    } else if secs < 60.0 {
        format!("{secs:.1}s")
    } else {
        let mins = secs / 60.0;
        format!("{mins:.1}min")
    }
}
