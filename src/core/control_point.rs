//! Einzelner verschiebbarer Kettenpunkt mit Hit-Test.

use glam::Vec2;

/// Fester Hit-Radius eines Kettenpunkts (Canvas-Einheiten).
pub const POINT_HIT_RADIUS: f32 = 5.0;

/// Verschiebbarer 2D-Punkt mit festem Hit-Radius und Selektions-Flag.
///
/// Der Radius wird bei der Erzeugung festgelegt und ändert sich danach nicht mehr.
/// Der Punkt kennt die Segmente nicht, die ihn referenzieren; wer ihn verschiebt,
/// muss die betroffenen Segmente selbst neu abtasten.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlPoint {
    position: Vec2,
    radius: f32,
    /// Ob der Punkt aktuell selektiert ist
    pub selected: bool,
}

impl ControlPoint {
    /// Erstellt einen nicht selektierten Punkt mit Standard-Hit-Radius.
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            radius: POINT_HIT_RADIUS,
            selected: false,
        }
    }

    /// Aktuelle Position.
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Hit-Radius (konstant über die Lebensdauer).
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// `true` wenn `pos` höchstens `radius` vom Punkt entfernt ist (Rand inklusive).
    pub fn is_hit(&self, pos: Vec2) -> bool {
        self.position.distance_squared(pos) <= self.radius * self.radius
    }

    /// Überschreibt die Position ohne Prüfung oder Clamping.
    pub fn move_to(&mut self, pos: Vec2) {
        self.position = pos;
    }
}
