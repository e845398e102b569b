use bezier_chain_editor::{AppCommand, AppController, AppIntent, AppState, SessionStatus};
use glam::Vec2;

fn send(controller: &mut AppController, state: &mut AppState, intent: AppIntent) {
    controller
        .handle_intent(state, intent)
        .expect("Intent sollte ohne Fehler durchlaufen");
}

fn press(controller: &mut AppController, state: &mut AppState, x: f32, y: f32) {
    send(
        controller,
        state,
        AppIntent::PointerPressed {
            pos: Vec2::new(x, y),
        },
    );
}

#[test]
fn test_start_drawing_updates_status_via_listener() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert_eq!(state.status_label(), "not started");

    send(&mut controller, &mut state, AppIntent::StartDrawingRequested);
    assert_eq!(state.status_label(), "in progress");

    send(
        &mut controller,
        &mut state,
        AppIntent::DoubleClicked { pos: Vec2::ZERO },
    );
    assert_eq!(state.status_label(), "completed");
    assert_eq!(state.session.chain().status(), SessionStatus::Completed);
}

#[test]
fn test_click_sequence_builds_smooth_chain() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::StartDrawingRequested);
    press(&mut controller, &mut state, 10.0, 10.0);
    press(&mut controller, &mut state, 110.0, 10.0);
    press(&mut controller, &mut state, 210.0, 60.0);

    assert_eq!(state.point_count(), 3);
    assert_eq!(state.segment_count(), 2);

    let chain = state.session.chain();
    let c0 = chain.control_position(0).unwrap();
    let c1 = chain.control_position(1).unwrap();
    assert!((c0 - Vec2::new(60.0, 10.0)).length() < 1e-4);
    assert!((c1 - Vec2::new(160.0, 10.0)).length() < 1e-4);
}

#[test]
fn test_press_then_drag_moves_selected_joint() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::StartDrawingRequested);
    for x in [0.0, 100.0, 200.0] {
        press(&mut controller, &mut state, x, 0.0);
    }

    press(&mut controller, &mut state, 101.0, 1.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDragged {
            pos: Vec2::new(100.0, 50.0),
        },
    );

    let chain = state.session.chain();
    assert_eq!(state.point_count(), 3);
    let joint = chain.arena().position(chain.point_ids()[1]);
    assert_eq!(joint, Vec2::new(100.0, 50.0));
    let c0 = chain.control_position(0).unwrap();
    let c1 = chain.control_position(1).unwrap();
    assert!((c1 - (2.0 * joint - c0)).length() < 1e-4);
}

#[test]
fn test_drag_without_selection_is_silent_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::StartDrawingRequested);
    press(&mut controller, &mut state, 0.0, 0.0);
    press(&mut controller, &mut state, 50.0, 0.0);
    let before = state.session.chain().segments()[0].samples().to_vec();

    send(
        &mut controller,
        &mut state,
        AppIntent::PointerDragged {
            pos: Vec2::new(25.0, 80.0),
        },
    );

    assert_eq!(state.session.chain().segments()[0].samples(), before.as_slice());
    assert!(state.ui.status_message.is_none());
    assert_eq!(
        state.command_log.entries().last(),
        Some(&AppCommand::DragSelectedPoint {
            pos: Vec2::new(25.0, 80.0)
        })
    );
}

#[test]
fn test_non_finite_press_reports_status_message() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::StartDrawingRequested);
    press(&mut controller, &mut state, f32::NAN, 3.0);

    assert_eq!(state.point_count(), 0);
    assert!(state.ui.status_message.is_some());
}

#[test]
fn test_end_without_session_keeps_status() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::EndDrawingRequested);

    assert_eq!(state.status_label(), "not started");
    assert!(state.ui.status_message.is_none());
}

#[test]
fn test_clear_resets_chain_and_status() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::StartDrawingRequested);
    press(&mut controller, &mut state, 0.0, 0.0);
    press(&mut controller, &mut state, 40.0, 40.0);
    send(&mut controller, &mut state, AppIntent::ClearRequested);

    assert_eq!(state.point_count(), 0);
    assert_eq!(state.segment_count(), 0);
    assert_eq!(state.status_label(), "not started");
}

#[test]
fn test_exit_requested_sets_exit_flag_and_logs_command() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert!(!state.should_exit);
    send(&mut controller, &mut state, AppIntent::ExitRequested);
    assert!(state.should_exit);

    match state.command_log.entries().last() {
        Some(AppCommand::RequestExit) => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_preview_follows_pointer_until_point_selected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::StartDrawingRequested);
    press(&mut controller, &mut state, 20.0, 20.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(80.0, 40.0),
        },
    );
    assert_eq!(state.session.chain().preview(), Some(Vec2::new(80.0, 40.0)));

    press(&mut controller, &mut state, 20.0, 20.0);
    send(
        &mut controller,
        &mut state,
        AppIntent::PointerMoved {
            pos: Vec2::new(90.0, 90.0),
        },
    );
    assert_eq!(state.session.chain().preview(), Some(Vec2::new(80.0, 40.0)));
}

#[test]
fn test_render_scene_reflects_chain() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::StartDrawingRequested);
    press(&mut controller, &mut state, 0.0, 0.0);
    press(&mut controller, &mut state, 60.0, 0.0);

    let scene = controller.build_render_scene(&state);
    let polylines = scene.count(|c| matches!(c, bezier_chain_editor::DrawCommand::Polyline { .. }));
    assert_eq!(polylines, 1);
}

#[test]
fn test_command_log_tracks_total_and_last_label() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert!(state.command_log.last().is_none());

    send(&mut controller, &mut state, AppIntent::StartDrawingRequested);
    press(&mut controller, &mut state, 0.0, 0.0);
    press(&mut controller, &mut state, 30.0, 0.0);
    send(&mut controller, &mut state, AppIntent::EndDrawingRequested);

    assert_eq!(state.command_log.total(), 4);
    let last = state.command_log.last().expect("Command sollte geloggt sein");
    assert_eq!(last, &AppCommand::EndSession);
    assert_eq!(last.label(), "end session");
}

#[test]
fn test_overflowing_click_is_reported_and_chain_stays_finite() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    send(&mut controller, &mut state, AppIntent::StartDrawingRequested);
    press(&mut controller, &mut state, 3.0e38, 0.0);
    press(&mut controller, &mut state, 3.2e38, 0.0);
    press(&mut controller, &mut state, 0.0, 0.0);

    assert_eq!(state.point_count(), 2);
    assert_eq!(state.segment_count(), 1);
    assert!(state.ui.status_message.is_some());
    let chain = state.session.chain();
    assert!(chain.segments()[0]
        .samples()
        .iter()
        .all(|p| p.is_finite()));
}
