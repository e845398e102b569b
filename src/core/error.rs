//! Fehler der Ketten-Operationen.
//!
//! Alle Varianten sind lokal: die Operation hat nichts verändert und die Sitzung
//! läuft normal weiter.

use thiserror::Error;

/// Abgelehnte Ketten-Operation.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ChainError {
    /// Drag ohne selektierten Punkt
    #[error("kein Punkt selektiert")]
    NoSelection,
    /// Sitzung beenden, obwohl keine aktiv ist
    #[error("keine aktive Zeichensitzung")]
    SessionNotActive,
    /// NaN oder ±∞ von der Eingabe-Oberfläche
    #[error("ungültige Koordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f32, y: f32 },
}

impl ChainError {
    /// `true` für Zustandsfehler (Ereignis kam in falscher Reihenfolge).
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, Self::NoSelection | Self::SessionNotActive)
    }
}

/// Lehnt nicht-endliche Koordinaten ab.
pub(crate) fn ensure_finite(pos: glam::Vec2) -> Result<(), ChainError> {
    if pos.is_finite() {
        Ok(())
    } else {
        Err(ChainError::NonFiniteCoordinate { x: pos.x, y: pos.y })
    }
}
