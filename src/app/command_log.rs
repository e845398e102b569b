//! Verlauf der ausgeführten Commands für Status-Bar und Diagnose.

use super::AppCommand;

/// Obergrenze gespeicherter Einträge; beim Überlauf fällt die ältere Hälfte weg.
const MAX_ENTRIES: usize = 1000;

/// Ausgeführte Commands in Reihenfolge plus Gesamtzähler.
#[derive(Debug, Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
    /// Alle jemals aufgezeichneten Commands (auch bereits verworfene)
    total: usize,
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Zeichnet einen Command auf, bevor er ausgeführt wird.
    pub fn record(&mut self, command: &AppCommand) {
        if self.entries.len() >= MAX_ENTRIES {
            self.entries.drain(..MAX_ENTRIES / 2);
        }
        self.total += 1;
        log::debug!("Command #{}: {:?}", self.total, command);
        self.entries.push(command.clone());
    }

    /// Zuletzt aufgezeichneter Command.
    pub fn last(&self) -> Option<&AppCommand> {
        self.entries.last()
    }

    /// Anzahl aller aufgezeichneten Commands seit Programmstart.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gespeicherte Einträge, ältester zuerst.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_log_drops_older_half_when_full() {
        let mut log = CommandLog::new();
        for i in 0..MAX_ENTRIES {
            log.record(&AppCommand::SetPreview {
                pos: Vec2::new(i as f32, 0.0),
            });
        }
        assert_eq!(log.len(), MAX_ENTRIES);

        log.record(&AppCommand::EndSession);

        assert_eq!(log.len(), MAX_ENTRIES / 2 + 1);
        assert_eq!(log.total(), MAX_ENTRIES + 1);
        assert_eq!(log.last(), Some(&AppCommand::EndSession));
        assert_eq!(
            log.entries().first(),
            Some(&AppCommand::SetPreview {
                pos: Vec2::new((MAX_ENTRIES / 2) as f32, 0.0),
            })
        );
    }

    #[test]
    fn test_empty_log_has_no_last_command() {
        let log = CommandLog::new();
        assert!(log.is_empty());
        assert_eq!(log.total(), 0);
        assert!(log.last().is_none());
    }
}
