use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Zeichensitzung starten (Idle → Active)
    StartSession,
    /// Zeichensitzung beenden (Active → Idle)
    EndSession,
    /// Komplette Kette verwerfen
    ResetChain,
    /// Punkt setzen oder bestehenden Punkt selektieren
    PlacePoint { pos: Vec2 },
    /// Selektierten Punkt verschieben
    DragSelectedPoint { pos: Vec2 },
    /// Vorschau-Cursor setzen
    SetPreview { pos: Vec2 },
    /// Optionen speichern
    SaveOptions,
    /// Anwendung kontrolliert beenden
    RequestExit,
}

impl AppCommand {
    /// Kurzname für die Status-Bar.
    pub fn label(&self) -> &'static str {
        match self {
            Self::StartSession => "start session",
            Self::EndSession => "end session",
            Self::ResetChain => "reset",
            Self::PlacePoint { .. } => "place point",
            Self::DragSelectedPoint { .. } => "drag point",
            Self::SetPreview { .. } => "preview",
            Self::SaveOptions => "save options",
            Self::RequestExit => "exit",
        }
    }
}
