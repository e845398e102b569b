//! Bézier-Ketten-Editor Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState};
pub use crate::core::{
    BezierSegment, ChainError, ChainState, ControlPoint, PointArena, PointId, SessionStatus,
    SmoothChainBuilder,
};
pub use shared::{DrawCommand, EditorOptions, RenderScene};
