//! Aufbau und Pflege einer glatten Kette quadratischer Bézier-Segmente.
//!
//! **Zustände:** Idle → `start_session()` → Active → `end_session()` → Idle.
//! Neue Punkte entstehen nur in Active; Selektion und Drag funktionieren in beiden.
//!
//! **Steuerpunkt-Regel:** Das erste Segment überhaupt und das erste Segment einer
//! neuen Sitzung bekommen den Mittelpunkt von Start und Ende. Jedes weitere Segment
//! spiegelt den Steuerpunkt des Vorgängers am gemeinsamen Gelenk
//! (`2·gelenk − steuerpunkt`), dadurch sind beide Tangenten am Gelenk kollinear.

use super::bezier_segment::BezierSegment;
use super::chain::ChainState;
use super::error::{ensure_finite, ChainError};
use super::point_arena::PointId;
use super::session::{SessionStatus, StatusNotifier};
use glam::Vec2;

/// Ergebnis von `place_point`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Bestehender Pufferpunkt wurde getroffen und selektiert
    Selected(PointId),
    /// Neuer Punkt angehängt, ggf. mit neuem Segment (Index in `segments()`)
    Added {
        point: PointId,
        segment: Option<usize>,
    },
    /// Keine aktive Sitzung und kein Treffer
    Ignored,
}

/// Spiegelt `control` am Gelenk `joint`.
#[inline]
pub fn reflect_control(control: Vec2, joint: Vec2) -> Vec2 {
    2.0 * joint - control
}

/// Mittelpunkt ohne Überlauf der Zwischensumme.
#[inline]
pub(crate) fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    a * 0.5 + b * 0.5
}

/// Zustandsautomat über einer `ChainState` plus Status-Listener.
#[derive(Debug, Default)]
pub struct SmoothChainBuilder {
    chain: ChainState,
    notifier: StatusNotifier,
}

impl SmoothChainBuilder {
    /// Erstellt einen Builder mit leerer Kette im Zustand Idle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read-only Sicht auf die Kette (für Rendering und Tests).
    pub fn chain(&self) -> &ChainState {
        &self.chain
    }

    /// Registriert einen Listener, der bei jedem Statuswechsel aufgerufen wird.
    pub fn subscribe(&mut self, listener: impl FnMut(SessionStatus) + 'static) {
        self.notifier.subscribe(listener);
    }

    /// Startet eine Zeichensitzung.
    ///
    /// Leert den Punkt-Puffer, fertige Segmente bleiben erhalten. Ein Aufruf während
    /// einer aktiven Sitzung beginnt eine frische Sitzung.
    pub fn start_session(&mut self) {
        self.chain.clear_selection();
        self.chain.points.clear();
        self.chain.preview = None;
        self.chain.drawing_active = true;
        self.chain.session_segment_base = self.chain.segments.len();
        log::info!(
            "Zeichensitzung gestartet ({} bestehende Segmente)",
            self.chain.segments.len()
        );
        self.set_status(SessionStatus::InProgress);
    }

    /// Beendet die aktive Sitzung und löscht Selektion und Vorschau.
    pub fn end_session(&mut self) -> Result<(), ChainError> {
        if !self.chain.drawing_active {
            return Err(ChainError::SessionNotActive);
        }
        self.chain.drawing_active = false;
        self.chain.clear_selection();
        self.chain.preview = None;
        log::info!(
            "Zeichensitzung beendet: {} Punkte, {} Segmente",
            self.chain.points.len(),
            self.chain.session_segment_count()
        );
        self.set_status(SessionStatus::Completed);
        Ok(())
    }

    /// Verwirft die komplette Kette und kehrt nach Idle zurück.
    pub fn reset(&mut self) {
        self.chain = ChainState::new();
        log::info!("Kette zurückgesetzt");
        self.notifier.notify(SessionStatus::NotStarted);
    }

    /// Klick auf `pos`: selektiert einen getroffenen Pufferpunkt oder setzt einen neuen.
    ///
    /// Läuft der neue Steuerpunkt aus dem f32-Bereich, wird der Klick ohne Änderung
    /// abgelehnt.
    pub fn place_point(&mut self, pos: Vec2) -> Result<Placement, ChainError> {
        ensure_finite(pos)?;

        if let Some(hit) = self.chain.hit_test(pos) {
            self.chain.select(hit);
            log::debug!("Punkt {} selektiert", hit.index());
            return Ok(Placement::Selected(hit));
        }

        if !self.chain.drawing_active {
            return Ok(Placement::Ignored);
        }

        let control_pos = match self.chain.points.last() {
            Some(&start) => Some(self.next_control(start, pos)?),
            None => None,
        };

        // Ein neuer Punkt beendet die Selektion, sonst würde der nächste Drag
        // den alten Punkt mitziehen.
        self.chain.clear_selection();

        let point = self.chain.arena.insert(pos);
        self.chain.points.push(point);

        let segment = control_pos.map(|control| self.append_segment(control));

        Ok(Placement::Added { point, segment })
    }

    /// Steuerpunkt für ein Segment vom letzten Pufferpunkt `start` nach `end`.
    fn next_control(&self, start: PointId, end: Vec2) -> Result<Vec2, ChainError> {
        let chain = &self.chain;
        // Nach dem Einfügen hätte der Puffer genau zwei Punkte
        let fresh_pair = chain.points.len() == 1;

        let control = match chain.segments.last() {
            Some(prev) if !fresh_pair => reflect_control(
                chain.arena.position(prev.control()),
                chain.arena.position(prev.end()),
            ),
            _ => midpoint(chain.arena.position(start), end),
        };
        ensure_finite(control)?;
        Ok(control)
    }

    /// Baut das Segment zwischen den letzten beiden Pufferpunkten.
    fn append_segment(&mut self, control_pos: Vec2) -> usize {
        let chain = &mut self.chain;
        let start = chain.points[chain.points.len() - 2];
        let end = chain.points[chain.points.len() - 1];

        let control = chain.arena.insert(control_pos);
        chain
            .segments
            .push(BezierSegment::new(start, control, end, &chain.arena));

        let index = chain.segments.len() - 1;
        log::debug!(
            "Segment {} erstellt, Steuerpunkt ({:.1}, {:.1})",
            index,
            control_pos.x,
            control_pos.y
        );
        index
    }

    /// Verschiebt den selektierten Punkt und korrigiert die angrenzenden Segmente.
    ///
    /// Gibt die Indizes der angefassten Segmente zurück. Korrekturen laufen nur
    /// über den direkten Vorgänger, nicht transitiv weiter. Alle neuen Steuerpunkte
    /// werden vor der ersten Änderung geprüft.
    pub fn drag_selected_point(&mut self, pos: Vec2) -> Result<Vec<usize>, ChainError> {
        ensure_finite(pos)?;
        let moved = self.chain.selected.ok_or(ChainError::NoSelection)?;
        let plan = self.plan_drag(moved, pos)?;

        let ChainState {
            arena, segments, ..
        } = &mut self.chain;
        arena[moved].move_to(pos);

        for &(i, control) in &plan {
            match control {
                Some(control) => segments[i].set_control(arena, control),
                None => segments[i].recompute(arena),
            }
        }

        log::debug!(
            "Punkt {} nach ({:.1}, {:.1}) gezogen, {} Segmente aktualisiert",
            moved.index(),
            pos.x,
            pos.y,
            plan.len()
        );
        Ok(plan.into_iter().map(|(i, _)| i).collect())
    }

    /// Segmente, die `moved` berühren, jeweils mit ggf. neu gespiegeltem Steuerpunkt.
    ///
    /// Rechnet mit der Zielposition `pos`, ohne die Kette anzufassen.
    fn plan_drag(
        &self,
        moved: PointId,
        pos: Vec2,
    ) -> Result<Vec<(usize, Option<Vec2>)>, ChainError> {
        let arena = &self.chain.arena;
        let segments = &self.chain.segments;
        let position_after = |id: PointId| if id == moved { pos } else { arena.position(id) };

        let mut plan: Vec<(usize, Option<Vec2>)> = Vec::new();
        for (i, segment) in segments.iter().enumerate() {
            if !segment.touches(moved) {
                continue;
            }

            let control = match i.checked_sub(1) {
                Some(p) if segments[p].end() == segment.start() => {
                    // Vorgänger kann in diesem Durchlauf selbst neu gespiegelt worden sein
                    let prev_control = match plan.last() {
                        Some(&(planned, Some(c))) if planned == p => c,
                        _ => arena.position(segments[p].control()),
                    };
                    let control =
                        reflect_control(prev_control, position_after(segments[p].end()));
                    ensure_finite(control)?;
                    Some(control)
                }
                _ => None,
            };
            plan.push((i, control));
        }
        Ok(plan)
    }

    /// Merkt sich die Cursor-Position für die Vorschau-Linie.
    ///
    /// Wirkt nur in einer aktiven Sitzung ohne Selektion; gibt zurück, ob die
    /// Vorschau übernommen wurde.
    pub fn set_preview(&mut self, pos: Vec2) -> Result<bool, ChainError> {
        ensure_finite(pos)?;
        if !self.chain.drawing_active || self.chain.selected.is_some() {
            return Ok(false);
        }
        self.chain.preview = Some(pos);
        Ok(true)
    }

    /// Hebt die Selektion auf (ohne Statuswechsel).
    pub fn clear_selection(&mut self) {
        self.chain.clear_selection();
    }

    fn set_status(&mut self, status: SessionStatus) {
        self.chain.status = status;
        self.notifier.notify(status);
    }
}
