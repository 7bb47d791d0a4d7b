use skymap_core::config::TileSizing;
use skymap_core::mosaic::GridLayout;

use crate::app::SkymapApp;
use crate::panels::helpers::{enum_combo, section_header};
use crate::states::Activity;

const LEFT_PANEL_WIDTH: f32 = 260.0;

pub fn show(ctx: &egui::Context, app: &mut SkymapApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                tiles_section(ui, app);
                ui.separator();
                new_map_section(ui, app);
                ui.separator();
                view_section(ui, app);
            });
        });
}

fn tiles_section(ui: &mut egui::Ui, app: &mut SkymapApp) {
    let status = app.store.current().map(|c| format!("{}/9", c.populated_cells()));
    section_header(ui, "Tiles", status.as_deref());
    ui.add_space(4.0);

    ui.label(app.ui_state.tile_dir.display().to_string());

    ui.horizontal(|ui| {
        ui.label("Border crop");
        ui.add(
            egui::DragValue::new(&mut app.config.tiles.border_crop)
                .range(0..=500)
                .suffix(" px"),
        );
    });

    enum_combo(ui, "Layout", &mut app.config.tiles.layout, &GridLayout::ALL);

    let fixed = match app.config.tiles.sizing {
        TileSizing::Fixed { .. } => app.config.tiles.sizing,
        _ => TileSizing::Fixed {
            width: 1000,
            height: 1000,
        },
    };
    enum_combo(
        ui,
        "Tile size",
        &mut app.config.tiles.sizing,
        &[TileSizing::FirstTile, TileSizing::Largest, fixed],
    );
    if let TileSizing::Fixed {
        ref mut width,
        ref mut height,
    } = app.config.tiles.sizing
    {
        ui.horizontal(|ui| {
            ui.add(egui::DragValue::new(width).range(1..=20_000));
            ui.label("x");
            ui.add(egui::DragValue::new(height).range(1..=20_000));
        });
    }

    if let Some(ref report) = app.ui_state.last_report {
        if !report.skipped.is_empty() {
            ui.small(format!("{} unreadable tile(s) skipped", report.skipped.len()));
        }
    }

    ui.add_space(4.0);
    let busy = app.ui_state.is_busy();
    if ui.add_enabled(!busy, egui::Button::new("Rebuild")).clicked() {
        app.request_rebuild();
    }
}

fn new_map_section(ui: &mut egui::Ui, app: &mut SkymapApp) {
    let fetching = app.ui_state.running == Some(Activity::Fetching);
    section_header(ui, "New map", fetching.then_some("fetching..."));
    ui.add_space(4.0);

    let form = &mut app.form;
    egui::Grid::new("fetch_form").num_columns(2).show(ui, |ui| {
        ui.label("RA (deg)");
        ui.add(egui::DragValue::new(&mut form.ra_deg).range(0.0..=360.0).speed(0.01).max_decimals(6));
        ui.end_row();

        ui.label("Dec (deg)");
        ui.add(egui::DragValue::new(&mut form.dec_deg).range(-90.0..=90.0).speed(0.01).max_decimals(6));
        ui.end_row();

        ui.label("Date-time");
        ui.text_edit_singleline(&mut form.date_time);
        ui.end_row();

        ui.label("Radius (deg)");
        ui.add(egui::DragValue::new(&mut form.radius_deg).range(0.0001..=10.0).speed(0.001).max_decimals(4));
        ui.end_row();

        ui.label("Pixels");
        ui.add(egui::DragValue::new(&mut form.pixels).range(1..=10_000));
        ui.end_row();

        ui.label("Survey");
        ui.text_edit_singleline(&mut form.survey);
        ui.end_row();
    });

    ui.add_space(4.0);
    let busy = app.ui_state.is_busy();
    if ui.add_enabled(!busy, egui::Button::new("Fetch")).clicked() {
        app.request_fetch();
    }
}

fn view_section(ui: &mut egui::Ui, app: &mut SkymapApp) {
    section_header(ui, "View", None);
    ui.add_space(4.0);

    let Some(view) = app.view.as_mut() else {
        ui.small("No mosaic loaded");
        return;
    };

    let mut zoom = view.zoom();
    let slider = egui::Slider::new(&mut zoom, view.fit_floor()..=view.zoom_ceiling())
        .logarithmic(true)
        .text("Zoom");
    let mut changed = false;
    if ui.add(slider).changed() {
        view.set_zoom(zoom);
        changed = true;
    }

    ui.horizontal(|ui| {
        if ui.button("Fit").clicked() {
            view.fit();
            changed = true;
        }
        if ui.button("1:1").clicked() {
            view.set_zoom(1.0);
            changed = true;
        }
        if ui.button("Reset").clicked() {
            view.reset();
            changed = true;
        }
    });

    let (x, y, w, h) = view.visible_rect();
    ui.small(format!("Showing {w:.0}x{h:.0} at ({x:.0}, {y:.0})"));
    ui.small("Drag to pan, scroll to zoom, double-click to fit");

    if changed {
        app.viewport.dirty = true;
    }
}
