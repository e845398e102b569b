use super::map_intent_to_commands;
use crate::app::{AppCommand, AppIntent, AppState};
use glam::Vec2;

#[test]
fn test_pointer_intents_map_to_chain_commands() {
    let state = AppState::new();
    let pos = Vec2::new(12.0, 34.0);

    assert_eq!(
        map_intent_to_commands(&state, AppIntent::PointerPressed { pos }),
        vec![AppCommand::PlacePoint { pos }]
    );
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::PointerDragged { pos }),
        vec![AppCommand::DragSelectedPoint { pos }]
    );
}

#[test]
fn test_pointer_move_without_points_yields_nothing() {
    let state = AppState::new();
    let commands = map_intent_to_commands(
        &state,
        AppIntent::PointerMoved {
            pos: Vec2::new(1.0, 1.0),
        },
    );
    assert!(commands.is_empty());
}

#[test]
fn test_pointer_move_with_points_sets_preview() {
    let mut state = AppState::new();
    state.session.start_session();
    state
        .session
        .place_point(Vec2::new(5.0, 5.0))
        .expect("Punkt sollte gesetzt werden");

    let pos = Vec2::new(50.0, 20.0);
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::PointerMoved { pos }),
        vec![AppCommand::SetPreview { pos }]
    );
}

#[test]
fn test_double_click_ends_session() {
    let state = AppState::new();
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::DoubleClicked { pos: Vec2::ZERO }),
        vec![AppCommand::EndSession]
    );
}

#[test]
fn test_toolbar_intents() {
    let state = AppState::new();
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::StartDrawingRequested),
        vec![AppCommand::StartSession]
    );
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::ClearRequested),
        vec![AppCommand::ResetChain]
    );
    assert_eq!(
        map_intent_to_commands(&state, AppIntent::ExitRequested),
        vec![AppCommand::RequestExit]
    );
}
