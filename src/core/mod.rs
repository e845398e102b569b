//! Core-Domänentypen: Kettenpunkte, Bézier-Segmente, Ketten-Zustand und Glättungs-Algorithmus.

pub mod bezier_segment;
pub mod chain;
pub mod control_point;
pub mod error;
pub mod point_arena;
pub mod session;
/// Zustandsautomat für den punktweisen Aufbau glatter Ketten
///
/// Enthält die Steuerpunkt-Regel (Mittelpunkt bzw. Spiegelung am Gelenk)
/// und die lokale Korrektur beim Verschieben eines Gelenks.
pub mod smooth_chain;

pub use bezier_segment::{quadratic_bezier, BezierSegment, SAMPLE_STEPS};
pub use chain::ChainState;
pub use control_point::{ControlPoint, POINT_HIT_RADIUS};
pub use error::ChainError;
pub use point_arena::{PointArena, PointId};
pub use session::{SessionStatus, StatusListener, StatusNotifier};
pub use smooth_chain::{reflect_control, Placement, SmoothChainBuilder};
