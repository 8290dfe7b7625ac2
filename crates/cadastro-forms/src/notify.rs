//! User notifications.

/// Presents a message to the user and returns once it has been shown.
pub trait Notifier {
    /// Shows `message` to the user.
    fn notify(&mut self, message: &str);
}

/// Prints each message on its own line to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, message: &str) {
        println!("{message}");
    }
}

/// Keeps every message in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryNotifier {
    messages: Vec<String>,
}

impl MemoryNotifier {
    /// Creates an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all messages, oldest first.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns the latest message.
    pub fn last(&self) -> Option<&str> {
        self.messages.last().map(String::as_str)
    }
}

impl Notifier for MemoryNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
