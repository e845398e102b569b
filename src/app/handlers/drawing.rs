//! Handler für Canvas-Eingaben: Punkt setzen, Punkt ziehen, Vorschau.

use super::report_rejected;
use crate::app::AppState;
use crate::core::Placement;
use glam::Vec2;

/// Setzt einen Punkt bzw. selektiert einen getroffenen Punkt.
pub fn place_point(state: &mut AppState, pos: Vec2) {
    match state.session.place_point(pos) {
        Ok(Placement::Added {
            segment: Some(index),
            ..
        }) => {
            log::debug!("Punkt gesetzt, Segment {} angelegt", index);
        }
        Ok(_) => {}
        Err(e) => report_rejected(state, "Punkt setzen", e),
    }
}

/// Zieht den selektierten Punkt (No-op ohne Selektion).
pub fn drag_selected(state: &mut AppState, pos: Vec2) {
    if let Err(e) = state.session.drag_selected_point(pos) {
        report_rejected(state, "Punkt ziehen", e);
    }
}

/// Aktualisiert die Vorschau-Position.
pub fn set_preview(state: &mut AppState, pos: Vec2) {
    if let Err(e) = state.session.set_preview(pos) {
        report_rejected(state, "Vorschau", e);
    }
}
