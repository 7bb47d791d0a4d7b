use crate::app::SkymapApp;

pub fn show(ctx: &egui::Context, app: &mut SkymapApp) {
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Progress bar
        if let Some(activity) = app.ui_state.running {
            let fraction = match (
                app.ui_state.progress_items_done,
                app.ui_state.progress_items_total,
            ) {
                (Some(done), Some(total)) if total > 0 => done as f32 / total as f32,
                _ => 0.0, // indeterminate
            };

            let label = match app.ui_state.progress_stage {
                Some(stage) => stage.to_string(),
                None => activity.to_string(),
            };
            let detail = match (
                app.ui_state.progress_items_done,
                app.ui_state.progress_items_total,
            ) {
                (Some(done), Some(total)) => format!("{label} ({done}/{total})"),
                _ => format!("{label}..."),
            };

            ui.add(egui::ProgressBar::new(fraction).text(detail).animate(true));
        } else {
            ui.add(egui::ProgressBar::new(0.0).text(""));
        }

        // Log area, fixed height for 4 lines.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 4.0 + spacing * 3.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    for _ in 0..4 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(composite) = app.store.current() {
                ui.label(format!("{}x{}", composite.width(), composite.height()));
                ui.separator();
                ui.label(format!("{}/9 cells", composite.populated_cells()));
                ui.separator();
            }
            if let Some(ref view) = app.view {
                let (cx, cy) = view.center();
                ui.label(format!("Zoom: {:.0}%", view.zoom() * 100.0));
                ui.separator();
                ui.label(format!("Centre: {cx:.0}, {cy:.0}"));
                ui.separator();
            }
            let (dw, dh) = app.display_size();
            ui.label(format!("Display: {dw}x{dh}"));
        });

        ui.add_space(2.0);
    });
}
