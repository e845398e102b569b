//! Feature-Handler für AppCommand-Verarbeitung.
//!
//! Jeder Handler gruppiert die Command-Ausführung eines Feature-Bereichs.
//! Der Controller dispatcht an die passende Handler-Funktion.

pub mod dialog;
pub mod drawing;
pub mod session;

use crate::app::AppState;
use crate::core::ChainError;

/// Protokolliert eine abgelehnte Ketten-Operation.
///
/// Zustandsfehler sind normale Reihenfolge-Effekte der Eingabe und landen nur
/// im Debug-Log; ungültige Koordinaten werden zusätzlich in der Status-Bar gemeldet.
pub(crate) fn report_rejected(state: &mut AppState, operation: &str, err: ChainError) {
    if err.is_invalid_state() {
        log::debug!("{}: ignoriert ({})", operation, err);
    } else {
        log::warn!("{}: Eingabe verworfen ({})", operation, err);
        state.ui.status_message = Some(format!("{}: {}", operation, err));
    }
}
