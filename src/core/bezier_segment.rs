//! Quadratisches Bézier-Segment mit gecachter Polylinie.

use super::point_arena::{PointArena, PointId};
use glam::Vec2;

/// Anzahl der Schritte in t; die Polylinie hat `SAMPLE_STEPS + 1` Punkte.
pub const SAMPLE_STEPS: usize = 100;

/// Punkt auf einer quadratischen Bézier-Kurve (t ∈ [0, 1]).
///
/// `P(t) = (1−t)²·p0 + 2(1−t)t·p1 + t²·p2`
pub fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
}

/// Kurvensegment aus Start-, Steuer- und Endpunkt.
///
/// Start und Ende dürfen mit dem Nachbarsegment geteilt sein, der Steuerpunkt nie.
/// Nach jeder Verschiebung eines der drei Punkte muss `recompute()` laufen,
/// bevor `samples()` gelesen wird.
#[derive(Debug, Clone)]
pub struct BezierSegment {
    start: PointId,
    control: PointId,
    end: PointId,
    samples: Vec<Vec2>,
}

impl BezierSegment {
    /// Erstellt das Segment und tastet es sofort ab.
    pub fn new(start: PointId, control: PointId, end: PointId, arena: &PointArena) -> Self {
        let mut segment = Self {
            start,
            control,
            end,
            samples: Vec::with_capacity(SAMPLE_STEPS + 1),
        };
        segment.recompute(arena);
        segment
    }

    pub fn start(&self) -> PointId {
        self.start
    }

    pub fn control(&self) -> PointId {
        self.control
    }

    pub fn end(&self) -> PointId {
        self.end
    }

    /// Aktuelle Position des Steuerpunkts.
    pub fn control_position(&self, arena: &PointArena) -> Vec2 {
        arena.position(self.control)
    }

    /// Gecachte Polylinie (t = 0.00, 0.01, …, 1.00).
    pub fn samples(&self) -> &[Vec2] {
        &self.samples
    }

    /// `true` wenn `id` Start oder Ende dieses Segments ist.
    pub fn touches(&self, id: PointId) -> bool {
        self.start == id || self.end == id
    }

    /// Tastet die Kurve anhand der aktuellen Punktpositionen neu ab.
    pub fn recompute(&mut self, arena: &PointArena) {
        let p0 = arena.position(self.start);
        let p1 = arena.position(self.control);
        let p2 = arena.position(self.end);

        self.samples.clear();
        self.samples.extend((0..=SAMPLE_STEPS).map(|i| {
            let t = i as f32 / SAMPLE_STEPS as f32;
            quadratic_bezier(p0, p1, p2, t)
        }));
    }

    /// Verschiebt den Steuerpunkt und tastet direkt neu ab.
    pub fn set_control(&mut self, arena: &mut PointArena, position: Vec2) {
        arena[self.control].move_to(position);
        self.recompute(arena);
    }
}
