//! Zentrale Konfiguration für den Bézier-Ketten-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Darstellungswerte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten. Kurven selbst
//! werden nicht gespeichert.

use serde::{Deserialize, Serialize};

// ── Fenster / Canvas ────────────────────────────────────────────────

/// Standard-Canvas-Breite in Pixeln.
pub const CANVAS_WIDTH: f32 = 800.0;
/// Standard-Canvas-Höhe in Pixeln.
pub const CANVAS_HEIGHT: f32 = 600.0;
/// Hintergrundfarbe des Canvas (RGBA: Weiß).
pub const CANVAS_BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

// ── Kurven ──────────────────────────────────────────────────────────

/// Farbe fertiger Segmente (RGBA: Schwarz).
pub const CURVE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Linienstärke fertiger Segmente in Pixeln.
pub const CURVE_WIDTH: f32 = 2.0;

// ── Punkte ──────────────────────────────────────────────────────────

/// Füllfarbe nicht selektierter Punkte (RGBA: Silber).
pub const POINT_COLOR: [f32; 4] = [0.75, 0.75, 0.75, 1.0];
/// Füllfarbe des selektierten Punkts (RGBA: Rot).
pub const POINT_COLOR_SELECTED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Umrissfarbe aller Punkte (RGBA: Schwarz).
pub const POINT_OUTLINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// ── Vorschau ────────────────────────────────────────────────────────

/// Farbe der gestrichelten Vorschau-Linie (RGBA: Grau).
pub const PREVIEW_COLOR: [f32; 4] = [0.5, 0.5, 0.5, 1.0];
/// Strich-Länge der Vorschau in Pixeln.
pub const PREVIEW_DASH_LENGTH: f32 = 4.0;
/// Lücken-Länge der Vorschau in Pixeln.
pub const PREVIEW_GAP_LENGTH: f32 = 2.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_chain_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EditorOptions {
    // ── Canvas ──────────────────────────────────────────────────
    /// Anfangsbreite des Fensters
    pub canvas_width: f32,
    /// Anfangshöhe des Fensters
    pub canvas_height: f32,
    /// Hintergrundfarbe
    pub canvas_background: [f32; 4],

    // ── Kurven ──────────────────────────────────────────────────
    pub curve_color: [f32; 4],
    pub curve_width: f32,

    // ── Punkte ──────────────────────────────────────────────────
    pub point_color: [f32; 4],
    pub point_color_selected: [f32; 4],
    pub point_outline_color: [f32; 4],

    // ── Vorschau ────────────────────────────────────────────────
    pub preview_color: [f32; 4],
    pub preview_dash_length: f32,
    pub preview_gap_length: f32,

    // ── Anzeige ─────────────────────────────────────────────────
    /// Hinweistext im leeren Canvas anzeigen
    #[serde(default = "default_show_hint")]
    pub show_hint: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            canvas_background: CANVAS_BACKGROUND,

            curve_color: CURVE_COLOR,
            curve_width: CURVE_WIDTH,

            point_color: POINT_COLOR,
            point_color_selected: POINT_COLOR_SELECTED,
            point_outline_color: POINT_OUTLINE_COLOR,

            preview_color: PREVIEW_COLOR,
            preview_dash_length: PREVIEW_DASH_LENGTH,
            preview_gap_length: PREVIEW_GAP_LENGTH,

            show_hint: true,
        }
    }
}

/// Serde-Default für `show_hint` (ältere TOML-Dateien ohne das Feld).
fn default_show_hint() -> bool {
    true
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml_or_default(&content, path),
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    fn from_toml_or_default(content: &str, path: &std::path::Path) -> Self {
        match toml::from_str(content) {
            Ok(opts) => {
                log::info!("Optionen geladen aus: {}", path.display());
                opts
            }
            Err(e) => {
                log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_chain_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_chain_editor.toml")
    }
}
