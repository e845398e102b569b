//! Status-Bar am unteren Bildschirmrand.

use crate::app::AppState;

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Status: {}", state.status_label()));

            ui.separator();

            ui.label(format!(
                "Points: {} | Segments: {}",
                state.point_count(),
                state.segment_count()
            ));

            ui.separator();

            let chain = state.session.chain();
            if let Some(id) = chain.selected() {
                let pos = chain.point(id).position();
                ui.label(format!("Selected: ({:.1}, {:.1})", pos.x, pos.y));
            } else {
                ui.label("Selected: none");
            }

            ui.separator();

            let log = &state.command_log;
            match log.last() {
                Some(command) => {
                    ui.label(format!("Commands: {} (last: {})", log.total(), command.label()))
                }
                None => ui.label("Commands: 0"),
            };

            // Statusnachricht (z.B. verworfene Eingabe)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
