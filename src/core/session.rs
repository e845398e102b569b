//! Sitzungsstatus und Status-Listener.

use std::fmt;

/// Status der Zeichensitzung, wie ihn die Status-Anzeige darstellt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionStatus {
    /// Noch nie gestartet (oder nach Reset)
    #[default]
    NotStarted,
    /// Punkte werden platziert
    InProgress,
    /// Sitzung beendet, Punkte bleiben per Drag editierbar
    Completed,
}

impl SessionStatus {
    /// Kurzer Text für die Status-Anzeige.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "not started",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Callback für Statuswechsel. Beliebig viele Listener können sich registrieren.
pub type StatusListener = Box<dyn FnMut(SessionStatus)>;

/// Verteilt Statuswechsel an alle registrierten Listener.
#[derive(Default)]
pub struct StatusNotifier {
    listeners: Vec<StatusListener>,
}

impl StatusNotifier {
    /// Erstellt einen Notifier ohne Listener.
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
        }
    }

    /// Registriert einen weiteren Listener.
    pub fn subscribe(&mut self, listener: impl FnMut(SessionStatus) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Anzahl registrierter Listener.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(crate) fn notify(&mut self, status: SessionStatus) {
        for listener in &mut self.listeners {
            listener(status);
        }
    }
}

impl fmt::Debug for StatusNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusNotifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
