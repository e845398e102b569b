//! Handler für Sitzungs-Übergänge (Start, Ende, Reset).

use super::report_rejected;
use crate::app::AppState;

/// Startet eine neue Zeichensitzung.
pub fn start(state: &mut AppState) {
    state.session.start_session();
    state.ui.status_message = None;
}

/// Beendet die aktive Zeichensitzung (No-op wenn keine aktiv).
pub fn end(state: &mut AppState) {
    if let Err(e) = state.session.end_session() {
        report_rejected(state, "Sitzung beenden", e);
    }
}

/// Verwirft die gesamte Kette.
pub fn reset(state: &mut AppState) {
    state.session.reset();
    state.ui.status_message = None;
}
