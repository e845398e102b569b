use glam::Vec2;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
/// Alle Positionen sind Canvas-Koordinaten.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// "Start drawing" in der Toolbar
    StartDrawingRequested,
    /// "Finish" in der Toolbar
    EndDrawingRequested,
    /// Ganze Kette verwerfen
    ClearRequested,
    /// Primäre Maustaste im Canvas gedrückt
    PointerPressed { pos: Vec2 },
    /// Maus bei gedrückter Taste bewegt
    PointerDragged { pos: Vec2 },
    /// Maus ohne gedrückte Taste bewegt
    PointerMoved { pos: Vec2 },
    /// Doppelklick im Canvas
    DoubleClicked { pos: Vec2 },
    /// Aktuelle Optionen in die TOML-Datei schreiben
    SaveOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
