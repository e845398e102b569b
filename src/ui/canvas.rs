//! Canvas-Input-Handling: Maus-Events → AppIntent.
//!
//! Liefert die vier Ereignisse, die die Kette braucht: Taste gedrückt,
//! Ziehen bei gedrückter Taste, Bewegung ohne Taste und Doppelklick.
//! Positionen werden relativ zur linken oberen Canvas-Ecke übergeben.

use crate::app::AppIntent;
use glam::Vec2;

/// Rechnet eine Bildschirmposition in Canvas-Koordinaten um.
pub(crate) fn screen_pos_to_canvas(pointer_pos: egui::Pos2, response: &egui::Response) -> Vec2 {
    let local = pointer_pos - response.rect.min;
    Vec2::new(local.x, local.y)
}

/// Verwaltet den Input-Zustand für den Canvas.
#[derive(Default)]
pub struct CanvasInput {
    /// Letzte gemeldete Hover-Position (unterdrückt doppelte Move-Events)
    last_hover: Option<egui::Pos2>,
}

impl CanvasInput {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self { last_hover: None }
    }

    /// Sammelt Canvas-Events aus egui-Input und gibt AppIntents zurück.
    pub fn collect_canvas_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();
        let (pressed, pointer_delta, press_pos) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.delta(),
                i.pointer.interact_pos(),
            )
        });

        if pressed && response.contains_pointer() {
            if let Some(pointer_pos) = press_pos {
                events.push(AppIntent::PointerPressed {
                    pos: screen_pos_to_canvas(pointer_pos, response),
                });
            }
        } else if response.is_pointer_button_down_on() && pointer_delta != egui::Vec2::ZERO {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::PointerDragged {
                    pos: screen_pos_to_canvas(pointer_pos, response),
                });
            }
        } else if let Some(pointer_pos) = response.hover_pos() {
            if self.last_hover != Some(pointer_pos) {
                events.push(AppIntent::PointerMoved {
                    pos: screen_pos_to_canvas(pointer_pos, response),
                });
            }
        }
        self.last_hover = response.hover_pos();

        if response.double_clicked_by(egui::PointerButton::Primary) {
            if let Some(pointer_pos) = response.interact_pointer_pos() {
                events.push(AppIntent::DoubleClicked {
                    pos: screen_pos_to_canvas(pointer_pos, response),
                });
            }
        }

        events
    }
}
