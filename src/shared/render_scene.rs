//! Render-Szene als expliziter Übergabevertrag zwischen App und Zeichenfläche.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui` sie konsumiert.
//! Alle Koordinaten sind Canvas-Koordinaten (derselbe Raum wie die Eingabe).

use glam::Vec2;

/// Ein einzelner Zeichenbefehl.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Abgetastetes Kurvensegment
    Polyline {
        points: Vec<Vec2>,
        color: [f32; 4],
        width: f32,
    },
    /// Kettenpunkt als gefüllter Kreis mit Umriss
    PointMarker {
        center: Vec2,
        radius: f32,
        fill: [f32; 4],
        outline: [f32; 4],
    },
    /// Gestrichelte Hilfslinie letzter Punkt → Mitte → Cursor
    DashedPreview {
        points: [Vec2; 3],
        color: [f32; 4],
        dash_length: f32,
        gap_length: f32,
    },
    /// Freier Text (linksbündig oben an `position`)
    TextLabel {
        position: Vec2,
        text: String,
        color: [f32; 4],
    },
}

/// Read-only Daten für einen Frame. Wird nach jeder Mutation komplett neu gebaut.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderScene {
    /// Hintergrundfarbe des Canvas
    pub background: [f32; 4],
    /// Zeichenbefehle in Mal-Reihenfolge
    pub commands: Vec<DrawCommand>,
}

impl RenderScene {
    /// Anzahl der Befehle, auf die `pred` zutrifft.
    pub fn count(&self, pred: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}
