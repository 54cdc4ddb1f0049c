//! Notification capability injected into the panel handlers.
//!
//! Stands in for a toast sink: the panel reports the outcome of save
//! and reset through whatever implementation it was handed.

/// Sink for transient success/error messages.
pub trait Notifier {
    fn success(&mut self, message: &str);
    fn error(&mut self, message: &str);
}

/// Notifier that routes messages to the tracing log.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&mut self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&mut self, message: &str) {
        tracing::warn!("{message}");
    }
}
