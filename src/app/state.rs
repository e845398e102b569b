//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{SessionStatus, SmoothChainBuilder};
use crate::shared::EditorOptions;
use std::cell::Cell;
use std::rc::Rc;

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Sitzungsstatus für die Status-Anzeige (per Listener vom Builder gepflegt)
    pub session_status: Rc<Cell<SessionStatus>>,
    /// Temporäre Statusnachricht (z.B. verworfene Eingabe, Optionen gespeichert)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt den Standard-UI-Zustand.
    pub fn new() -> Self {
        Self {
            session_status: Rc::new(Cell::new(SessionStatus::NotStarted)),
            status_message: None,
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Kette inkl. Zeichensitzung
    pub session: SmoothChainBuilder,
    /// UI-State
    pub ui: UiState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Breiten)
    pub options: EditorOptions,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen.
    ///
    /// Registriert die Status-Anzeige als Listener am Builder.
    pub fn with_options(options: EditorOptions) -> Self {
        let ui = UiState::new();
        let mut session = SmoothChainBuilder::new();

        let status = Rc::clone(&ui.session_status);
        session.subscribe(move |s| status.set(s));

        Self {
            session,
            ui,
            command_log: CommandLog::new(),
            options,
            should_exit: false,
        }
    }

    /// Anzahl der Punkte im Puffer (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.session.chain().point_ids().len()
    }

    /// Anzahl aller fertigen Segmente (für UI-Anzeige)
    pub fn segment_count(&self) -> usize {
        self.session.chain().segments().len()
    }

    /// Status-Text, wie ihn der Listener zuletzt gemeldet hat.
    pub fn status_label(&self) -> &'static str {
        self.ui.session_status.get().label()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
