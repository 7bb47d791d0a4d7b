use skymap_core::config::AppConfig;

use crate::app::SkymapApp;
use crate::messages::WorkerResult;

pub fn show(ctx: &egui::Context, app: &mut SkymapApp) {
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
                if ui.add(egui::Button::new("Open Tile Directory...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    open_tile_dir(app);
                }

                let save_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
                if ui.add(egui::Button::new("Save View As...").shortcut_text(ctx.format_shortcut(&save_shortcut))).clicked() {
                    ui.close();
                    save_view(app);
                }

                if ui.button("Save Mosaic As...").clicked() {
                    ui.close();
                    save_mosaic(app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    import_config(app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    export_config(app);
                }

                ui.separator();

                let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("View", |ui| {
                if ui.button("Fit").clicked() {
                    ui.close();
                    if let Some(view) = app.view.as_mut() {
                        view.fit();
                        app.viewport.dirty = true;
                    }
                }
                if ui.button("Reset").clicked() {
                    ui.close();
                    if let Some(view) = app.view.as_mut() {
                        view.reset();
                        app.viewport.dirty = true;
                    }
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O))) {
            open_tile_dir(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S))) {
            save_view(app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q))) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

fn open_tile_dir(app: &mut SkymapApp) {
    if app.ui_state.is_busy() {
        return;
    }
    if let Some(dir) = rfd::FileDialog::new()
        .set_directory(&app.ui_state.tile_dir)
        .pick_folder()
    {
        app.ui_state.tile_dir = dir;
        app.request_rebuild();
    }
}

fn save_view(app: &mut SkymapApp) {
    if app.view.is_none() || app.ui_state.is_busy() {
        return;
    }
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("PNG", &["png"])
        .add_filter("JPEG", &["jpg", "jpeg"])
        .add_filter("TIFF", &["tiff", "tif"])
        .set_file_name("view.png")
        .save_file()
    {
        app.save_view(path);
    }
}

fn save_mosaic(app: &mut SkymapApp) {
    if app.store.is_empty() || app.ui_state.is_busy() {
        return;
    }
    if let Some(path) = rfd::FileDialog::new()
        .add_filter("PNG", &["png"])
        .add_filter("TIFF", &["tiff", "tif"])
        .set_file_name("mosaic.png")
        .save_file()
    {
        app.save_mosaic(path);
    }
}

fn import_config(app: &mut SkymapApp) {
    let result_tx = app.result_tx.clone();
    std::thread::spawn(move || {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .pick_file()
        else {
            return;
        };
        let result = std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str::<AppConfig>(&content).map_err(|e| e.to_string()));
        let message = match result {
            Ok(config) => WorkerResult::ConfigImported {
                config: Box::new(config),
            },
            Err(e) => WorkerResult::Error {
                message: format!("Cannot import {}: {e}", path.display()),
            },
        };
        let _ = result_tx.send(message);
    });
}

fn export_config(app: &mut SkymapApp) {
    let mut config = app.config.clone();
    config.tiles.dir = app.ui_state.tile_dir.clone();
    config.fetch.defaults = app.form.to_request(&app.config.fetch.defaults);
    let result_tx = app.result_tx.clone();

    std::thread::spawn(move || {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("skymap.toml")
            .save_file()
        {
            let written = toml::to_string_pretty(&config)
                .map_err(|e| e.to_string())
                .and_then(|content| std::fs::write(&path, content).map_err(|e| e.to_string()));
            let message = match written {
                Ok(()) => WorkerResult::Log {
                    message: format!("Config exported to {}", path.display()),
                },
                Err(e) => WorkerResult::Error {
                    message: format!("Cannot export config: {e}"),
                },
            };
            let _ = result_tx.send(message);
        }
    });
}
