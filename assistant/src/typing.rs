//! Character-by-character reveal state machine for bot replies.
//!
//! The client drives one tick per fixed interval; each tick reveals one
//! more character (on a char boundary) until the full text is visible.
//! Only one animation may be live per session — starting a new one, or
//! clearing the conversation, replaces and thereby cancels the old one.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use crate::session::MessageId;

/// Result of advancing the animation by one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypingTick {
    /// The visible prefix grew; replace the message text with this.
    Reveal(String),
    /// The full text is visible; clear the typing flag and stop ticking.
    Done,
}

/// In-flight reveal of one message's full text.
#[derive(Debug, Clone)]
pub struct TypingAnimation {
    message: MessageId,
    full: String,
    revealed: usize,
}

impl TypingAnimation {
    #[must_use]
    pub fn new(message: MessageId, full: impl Into<String>) -> Self {
        Self { message, full: full.into(), revealed: 0 }
    }

    /// The message this animation is revealing.
    #[must_use]
    pub fn message(&self) -> MessageId {
        self.message
    }

    /// Reveal one more character, or report completion.
    pub fn tick(&mut self) -> TypingTick {
        if self.revealed >= self.full.chars().count() {
            return TypingTick::Done;
        }
        self.revealed += 1;
        TypingTick::Reveal(self.prefix().to_owned())
    }

    fn prefix(&self) -> &str {
        match self.full.char_indices().nth(self.revealed) {
            Some((byte, _)) => &self.full[..byte],
            None => &self.full,
        }
    }
}
