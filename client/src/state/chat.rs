#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use assistant::session::ChatLog;

/// State for the assistant chat panel: the session log plus the
/// in-flight request flag.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub log: ChatLog,
    pub loading: bool,
}

impl ChatState {
    /// A fresh session seeded with the welcome message.
    #[must_use]
    pub fn new(timestamp: f64) -> Self {
        Self { log: ChatLog::welcome(timestamp), loading: false }
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(0.0)
    }
}
