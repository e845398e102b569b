//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::StartDrawingRequested => vec![AppCommand::StartSession],
        AppIntent::EndDrawingRequested => vec![AppCommand::EndSession],
        AppIntent::ClearRequested => vec![AppCommand::ResetChain],
        AppIntent::PointerPressed { pos } => vec![AppCommand::PlacePoint { pos }],
        AppIntent::PointerDragged { pos } => vec![AppCommand::DragSelectedPoint { pos }],
        AppIntent::PointerMoved { pos } => {
            // Vorschau nur relevant, wenn schon ein Punkt liegt
            if state.point_count() > 0 {
                vec![AppCommand::SetPreview { pos }]
            } else {
                vec![]
            }
        }
        // Doppelklick schließt die Zeichnung ab
        AppIntent::DoubleClicked { .. } => vec![AppCommand::EndSession],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

#[cfg(test)]
mod tests;
