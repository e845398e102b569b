//! Toolbar mit den Sitzungs-Buttons.

use crate::app::{AppIntent, AppState};

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let drawing = state.session.chain().is_drawing();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Start drawing").clicked() {
                events.push(AppIntent::StartDrawingRequested);
            }
            if ui
                .add_enabled(drawing, egui::Button::new("Finish"))
                .on_hover_text("Oder Doppelklick im Canvas")
                .clicked()
            {
                events.push(AppIntent::EndDrawingRequested);
            }

            ui.separator();

            let has_content = state.segment_count() > 0 || state.point_count() > 0;
            if ui
                .add_enabled(has_content, egui::Button::new("Clear"))
                .clicked()
            {
                events.push(AppIntent::ClearRequested);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Quit").clicked() {
                    events.push(AppIntent::ExitRequested);
                }
                if ui.button("Save options").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
            });
        });
    });

    events
}
