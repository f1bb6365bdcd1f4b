use std::sync::Mutex;

use notifykit::primitives::dialog::{DialogError, DialogProvider};
use notifykit::primitives::logger::{LogLevel, Logger};
use notifykit::primitives::Severity;

/// Marker that makes [`ScriptedDialogs`] accept a confirmation.
pub const ACCEPT: &str = "[accept]";

/// A dialog a simulated user has seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seen {
    Alert(String, Severity),
    Confirm(String),
}

/// Dialog provider whose simulated user accepts confirmations containing [`ACCEPT`].
#[derive(Default)]
pub struct ScriptedDialogs {
    seen: Mutex<Vec<Seen>>,
}

impl ScriptedDialogs {
    /// Dialogs whose message contains `needle`. Tests run in parallel against one
    /// global provider, so each test filters on its own messages.
    pub fn seen_containing(&self, needle: &str) -> Vec<Seen> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .filter(|seen| match seen {
                Seen::Alert(message, _) | Seen::Confirm(message) => message.contains(needle),
            })
            .cloned()
            .collect()
    }
}

impl DialogProvider for ScriptedDialogs {
    fn alert(&self, message: String, severity: Severity) -> Result<(), DialogError> {
        self.seen.lock().unwrap().push(Seen::Alert(message, severity));
        Ok(())
    }

    fn confirm(&self, message: String) -> Result<bool, DialogError> {
        let accepted = message.contains(ACCEPT);
        self.seen.lock().unwrap().push(Seen::Confirm(message));
        Ok(accepted)
    }
}

/// Logger keeping every record in memory.
#[derive(Default)]
pub struct CapturingLogger {
    records: Mutex<Vec<(LogLevel, String)>>,
}

impl CapturingLogger {
    pub fn records_containing(&self, needle: &str) -> Vec<(LogLevel, String)> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, message)| message.contains(needle))
            .cloned()
            .collect()
    }
}

impl Logger for CapturingLogger {
    fn log(&self, level: LogLevel, message: String) {
        self.records.lock().unwrap().push((level, message));
    }
}
