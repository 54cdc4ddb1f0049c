//! Shared test utilities.

#![allow(dead_code)]

use mcpconf::config::ConfigStore;
use mcpconf::notify::Notifier;
use mcpconf::storage::MemoryStorage;
use mcpconf::ui::ConfigPanel;

/// Notifier that records every message for later assertions.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub successes: Vec<String>,
    pub errors: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn success(&mut self, message: &str) {
        self.successes.push(message.to_string());
    }

    fn error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Panel over empty in-memory storage with a recording notifier.
pub fn empty_panel() -> ConfigPanel<MemoryStorage, RecordingNotifier> {
    ConfigPanel::new(
        ConfigStore::new(MemoryStorage::new()),
        RecordingNotifier::default(),
    )
}

/// A valid single-server record in serialized form.
pub fn single_server_json() -> &'static str {
    r#"{"a":{"transport":"sse","url":"u"}}"#
}
