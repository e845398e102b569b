//! Handler für Anwendungssteuerung (Beenden, Optionen speichern).

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Signalisiert dem Host das kontrollierte Beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}

/// Speichert die aktuellen Optionen neben der Binary.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    let path = EditorOptions::config_path();
    state.options.save_to_file(&path)?;
    state.ui.status_message = Some(format!("Optionen gespeichert: {}", path.display()));
    Ok(())
}
