//! User-visible notices

/// Shows a short message to the person driving the export
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Prints notices to stderr
#[derive(Debug, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}

/// Keeps notices in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub messages: Vec<String>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
