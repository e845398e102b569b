//! Ketten- und Sitzungszustand: Punkt-Puffer, fertige Segmente, Selektion, Vorschau.

use super::bezier_segment::BezierSegment;
use super::control_point::ControlPoint;
use super::point_arena::{PointArena, PointId};
use super::session::SessionStatus;
use super::smooth_chain::midpoint;
use glam::Vec2;

/// Gesamter Zustand einer Kette.
///
/// Invariante während einer aktiven Sitzung: die Zahl der in dieser Sitzung
/// erzeugten Segmente ist `max(0, points.len() - 1)`, und das Gelenk zwischen
/// Segment i und i+1 ist dasselbe Handle wie der entsprechende Pufferpunkt.
#[derive(Debug, Default, Clone)]
pub struct ChainState {
    pub(crate) arena: PointArena,
    /// Punkte der laufenden Sitzung in Klick-Reihenfolge
    pub(crate) points: Vec<PointId>,
    /// Alle fertigen Segmente (auch aus früheren Sitzungen)
    pub(crate) segments: Vec<BezierSegment>,
    pub(crate) selected: Option<PointId>,
    pub(crate) preview: Option<Vec2>,
    pub(crate) drawing_active: bool,
    pub(crate) status: SessionStatus,
    /// Segmentanzahl beim Start der laufenden Sitzung
    pub(crate) session_segment_base: usize,
}

impl ChainState {
    /// Erstellt eine leere Kette (Status "not started").
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arena(&self) -> &PointArena {
        &self.arena
    }

    /// Handles der Pufferpunkte in Klick-Reihenfolge.
    pub fn point_ids(&self) -> &[PointId] {
        &self.points
    }

    /// Pufferpunkte mit Position und Selektions-Flag.
    pub fn points(&self) -> impl Iterator<Item = &ControlPoint> + '_ {
        self.points.iter().map(|&id| &self.arena[id])
    }

    pub fn point(&self, id: PointId) -> &ControlPoint {
        &self.arena[id]
    }

    pub fn segments(&self) -> &[BezierSegment] {
        &self.segments
    }

    /// Position des Steuerpunkts von Segment `index`.
    pub fn control_position(&self, index: usize) -> Option<Vec2> {
        self.segments
            .get(index)
            .map(|seg| seg.control_position(&self.arena))
    }

    pub fn selected(&self) -> Option<PointId> {
        self.selected
    }

    pub fn preview(&self) -> Option<Vec2> {
        self.preview
    }

    pub fn is_drawing(&self) -> bool {
        self.drawing_active
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Anzahl der Segmente, die in der laufenden Sitzung entstanden sind.
    pub fn session_segment_count(&self) -> usize {
        self.segments.len() - self.session_segment_base
    }

    /// Erster Pufferpunkt, dessen Hit-Radius `pos` enthält.
    pub fn hit_test(&self, pos: Vec2) -> Option<PointId> {
        self.points
            .iter()
            .copied()
            .find(|&id| self.arena[id].is_hit(pos))
    }

    /// Gestrichelte Hilfslinie: letzter Pufferpunkt → Mittelpunkt → Cursor.
    pub fn preview_guide(&self) -> Option<[Vec2; 3]> {
        let cursor = self.preview?;
        let last = self.arena.position(*self.points.last()?);
        Some([last, midpoint(last, cursor), cursor])
    }

    /// Selektiert `id` und hebt eine vorherige Selektion auf.
    pub(crate) fn select(&mut self, id: PointId) {
        self.clear_selection();
        self.arena[id].selected = true;
        self.selected = Some(id);
    }

    pub(crate) fn clear_selection(&mut self) {
        if let Some(prev) = self.selected.take() {
            self.arena[prev].selected = false;
        }
    }
}
