//! Zeichnet eine `RenderScene` mit dem egui-Painter.

use crate::shared::{DrawCommand, RenderScene};
use glam::Vec2;

/// Schriftgröße für Text-Labels im Canvas.
const LABEL_FONT_SIZE: f32 = 14.0;
/// Linienstärke von Punkt-Umriss und Vorschau-Linie.
const THIN_STROKE: f32 = 1.0;

fn color32(c: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]).into()
}

fn to_screen(origin: egui::Pos2, p: Vec2) -> egui::Pos2 {
    origin + egui::vec2(p.x, p.y)
}

/// Malt Hintergrund und alle Befehle der Szene in `rect`.
pub fn paint_scene(painter: &egui::Painter, rect: egui::Rect, scene: &RenderScene) {
    let origin = rect.min;
    painter.rect_filled(rect, 0.0, color32(scene.background));

    for command in &scene.commands {
        match command {
            DrawCommand::Polyline {
                points,
                color,
                width,
            } => {
                if points.len() < 2 {
                    continue;
                }
                let screen: Vec<egui::Pos2> =
                    points.iter().map(|&p| to_screen(origin, p)).collect();
                painter.add(egui::Shape::line(
                    screen,
                    egui::Stroke::new(*width, color32(*color)),
                ));
            }
            DrawCommand::PointMarker {
                center,
                radius,
                fill,
                outline,
            } => {
                painter.circle(
                    to_screen(origin, *center),
                    *radius,
                    color32(*fill),
                    egui::Stroke::new(THIN_STROKE, color32(*outline)),
                );
            }
            DrawCommand::DashedPreview {
                points,
                color,
                dash_length,
                gap_length,
            } => {
                let screen = (*points).map(|p| to_screen(origin, p));
                painter.extend(egui::Shape::dashed_line(
                    &screen,
                    egui::Stroke::new(THIN_STROKE, color32(*color)),
                    *dash_length,
                    *gap_length,
                ));
            }
            DrawCommand::TextLabel {
                position,
                text,
                color,
            } => {
                painter.text(
                    to_screen(origin, *position),
                    egui::Align2::LEFT_TOP,
                    text,
                    egui::FontId::proportional(LABEL_FONT_SIZE),
                    color32(*color),
                );
            }
        }
    }
}
