use skymap_core::viewport::PointerEvent;

use crate::app::SkymapApp;

/// egui scroll points per wheel line.
const POINTS_PER_LINE: f32 = 50.0;
const LINES_PER_PAGE: f32 = 3.0;

pub fn show(ctx: &egui::Context, app: &mut SkymapApp) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let rect = ui.available_rect_before_wrap();
        paint_background(ui, rect);

        if app.view.is_none() {
            show_placeholder(ui, app);
            return;
        }

        // The display window has a fixed size; centre it in the panel.
        let (dw, dh) = app.display_size();
        let display_rect =
            egui::Rect::from_center_size(rect.center(), egui::vec2(dw as f32, dh as f32));
        let response = ui.allocate_rect(display_rect, egui::Sense::click_and_drag());

        let events = pointer_events(ui, &response, display_rect, app.config.zoom.wheel_unit);
        let mut changed = false;
        if let Some(view) = app.view.as_mut() {
            for event in events {
                changed |= app.interaction.handle(view, event);
            }
            if response.double_clicked() {
                view.fit();
                changed = true;
            }
        }
        if changed {
            app.viewport.dirty = true;
        }

        app.refresh_texture(ctx);
        if let Some(ref texture) = app.viewport.texture {
            draw_image(ui, texture.id(), display_rect);
        }
        draw_viewing_label(ui, display_rect, &app.viewport.viewing_label);
    });
}

/// Translate egui input on the display rect into viewport pointer events.
fn pointer_events(
    ui: &egui::Ui,
    response: &egui::Response,
    rect: egui::Rect,
    wheel_unit: f64,
) -> Vec<PointerEvent> {
    let local = |pos: egui::Pos2| (f64::from(pos.x - rect.min.x), f64::from(pos.y - rect.min.y));
    let mut events = Vec::new();

    if response.drag_started_by(egui::PointerButton::Primary) {
        if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
            let (x, y) = local(origin);
            events.push(PointerEvent::Press { x, y });
        }
    }
    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            let (x, y) = local(pos);
            events.push(PointerEvent::Move { x, y });
        }
    }
    if response.drag_stopped() {
        events.push(PointerEvent::Release);
    }

    if response.hovered() {
        ui.input(|i| {
            for event in &i.events {
                if let egui::Event::MouseWheel { unit, delta, .. } = event {
                    let lines = match unit {
                        egui::MouseWheelUnit::Point => delta.y / POINTS_PER_LINE,
                        egui::MouseWheelUnit::Line => delta.y,
                        egui::MouseWheelUnit::Page => delta.y * LINES_PER_PAGE,
                    };
                    if lines != 0.0 {
                        events.push(PointerEvent::Wheel {
                            delta: f64::from(lines) * wheel_unit,
                        });
                    }
                }
            }
        });
    }
    events
}

fn paint_background(ui: &egui::Ui, rect: egui::Rect) {
    ui.painter()
        .rect_filled(rect, 0.0, egui::Color32::from_gray(30));
}

fn draw_image(ui: &egui::Ui, texture_id: egui::TextureId, img_rect: egui::Rect) {
    ui.painter().image(
        texture_id,
        img_rect,
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );
}

fn draw_viewing_label(ui: &egui::Ui, rect: egui::Rect, label: &str) {
    if label.is_empty() {
        return;
    }
    let label_pos = rect.left_top() + egui::vec2(8.0, 8.0);
    ui.painter().text(
        label_pos,
        egui::Align2::LEFT_TOP,
        label,
        egui::FontId::proportional(14.0),
        egui::Color32::from_white_alpha(200),
    );
}

fn show_placeholder(ui: &mut egui::Ui, app: &SkymapApp) {
    let text = if app.ui_state.is_busy() {
        "Building mosaic..."
    } else {
        "Open a tile directory or fetch a new map to begin"
    };
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new(text)
                .size(18.0)
                .color(egui::Color32::from_gray(100)),
        );
    });
}
