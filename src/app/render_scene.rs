//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::SessionStatus;
use crate::shared::{DrawCommand, RenderScene};
use glam::Vec2;

/// Abstand des Hinweistexts vom Canvas-Rand.
const HINT_OFFSET: Vec2 = Vec2::new(10.0, 10.0);

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// Reihenfolge: Segmente, Vorschau-Linie, Punkte, Hinweistext.
pub fn build(state: &AppState) -> RenderScene {
    let chain = state.session.chain();
    let opts = &state.options;
    let mut commands = Vec::with_capacity(chain.segments().len() + chain.point_ids().len() + 2);

    for segment in chain.segments() {
        commands.push(DrawCommand::Polyline {
            points: segment.samples().to_vec(),
            color: opts.curve_color,
            width: opts.curve_width,
        });
    }

    if let Some(points) = chain.preview_guide() {
        commands.push(DrawCommand::DashedPreview {
            points,
            color: opts.preview_color,
            dash_length: opts.preview_dash_length,
            gap_length: opts.preview_gap_length,
        });
    }

    for point in chain.points() {
        let fill = if point.selected {
            opts.point_color_selected
        } else {
            opts.point_color
        };
        commands.push(DrawCommand::PointMarker {
            center: point.position(),
            radius: point.radius(),
            fill,
            outline: opts.point_outline_color,
        });
    }

    if opts.show_hint && chain.status() == SessionStatus::NotStarted {
        commands.push(DrawCommand::TextLabel {
            position: HINT_OFFSET,
            text: "Click \"Start drawing\" to place points".to_string(),
            color: opts.preview_color,
        });
    }

    RenderScene {
        background: opts.canvas_background,
        commands,
    }
}
