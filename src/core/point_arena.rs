//! Arena für geteilte Kettenpunkte.
//!
//! Segmente halten nur `PointId`-Handles. Zwei benachbarte Segmente, die sich einen
//! Gelenkpunkt teilen, sehen dadurch immer dieselbe Position.

use super::control_point::ControlPoint;
use glam::Vec2;
use std::ops::{Index, IndexMut};

/// Handle auf einen Punkt in der `PointArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointId(usize);

impl PointId {
    /// Laufende Nummer innerhalb der Arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Besitzt alle Punkte einer Kette (Kettenpunkte und Steuerpunkte).
///
/// Punkte werden nur gesammelt per `clear()` entfernt, daher bleiben
/// ausgegebene Handles bis zum nächsten Reset gültig.
#[derive(Debug, Default, Clone)]
pub struct PointArena {
    points: Vec<ControlPoint>,
}

impl PointArena {
    /// Erstellt eine leere Arena.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Legt einen neuen Punkt an und gibt sein Handle zurück.
    pub fn insert(&mut self, position: Vec2) -> PointId {
        self.points.push(ControlPoint::new(position));
        PointId(self.points.len() - 1)
    }

    /// Position des Punkts hinter `id`.
    #[inline]
    pub fn position(&self, id: PointId) -> Vec2 {
        self[id].position()
    }

    /// Anzahl aller Punkte (inkl. Steuerpunkte).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` wenn die Arena leer ist.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Entfernt alle Punkte. Alle bisherigen Handles werden ungültig.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl Index<PointId> for PointArena {
    type Output = ControlPoint;

    fn index(&self, id: PointId) -> &ControlPoint {
        &self.points[id.0]
    }
}

impl IndexMut<PointId> for PointArena {
    fn index_mut(&mut self, id: PointId) -> &mut ControlPoint {
        &mut self.points[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_returns_distinct_handles() {
        let mut arena = PointArena::new();
        let a = arena.insert(Vec2::new(1.0, 2.0));
        let b = arena.insert(Vec2::new(1.0, 2.0));

        assert_ne!(a, b);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.position(a), arena.position(b));
    }

    #[test]
    fn test_mutation_visible_through_same_handle() {
        let mut arena = PointArena::new();
        let joint = arena.insert(Vec2::ZERO);
        let alias = joint;

        arena[joint].move_to(Vec2::new(7.0, -3.0));
        assert_eq!(arena.position(alias), Vec2::new(7.0, -3.0));
    }
}
