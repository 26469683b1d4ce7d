//! Chat session state: the message log and conversation history.
//!
//! DESIGN
//! ======
//! Messages are strictly insertion-ordered, identified by monotonically
//! allocated ids, mutated in place by id lookup, and never removed
//! individually — `reset_to_welcome` is the only wholesale reset. The
//! conversation-turn history runs parallel to the resolved messages
//! (pending and error messages are excluded until they resolve) and is
//! what gets handed to the responder as context.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::consts::{SYSTEM_PROMPT, WELCOME_TEXT};

/// Opaque message identifier, unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageId(u64);

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat entry, including response metadata once resolved.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: MessageId,
    pub text: String,
    pub sender: Sender,
    /// Milliseconds since the Unix epoch, supplied by the caller.
    pub timestamp: f64,
    pub pending: bool,
    pub error: bool,
    pub is_typing: bool,
    pub full_text: Option<String>,
    pub tokens: Option<u32>,
    pub processing_time_ms: Option<u32>,
}

/// Conversation role for the history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of conversation context.
#[derive(Debug, Clone)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
}

/// Partial update merged into a message by id.
#[derive(Debug, Clone, Default)]
pub struct MessagePatch {
    pub text: Option<String>,
    pub pending: Option<bool>,
    pub error: Option<bool>,
    pub is_typing: Option<bool>,
    pub full_text: Option<String>,
    pub tokens: Option<u32>,
    pub processing_time_ms: Option<u32>,
}

/// The owned message log plus parallel conversation history.
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    history: Vec<ConversationTurn>,
    next_id: u64,
}

impl ChatLog {
    /// A fresh session: one welcome bot message, system + assistant
    /// history seed.
    #[must_use]
    pub fn welcome(timestamp: f64) -> Self {
        let mut log = Self { messages: Vec::new(), history: Vec::new(), next_id: 0 };
        log.seed_welcome(timestamp);
        log
    }

    /// Append a resolved message and return its id.
    pub fn append(&mut self, text: impl Into<String>, sender: Sender, timestamp: f64) -> MessageId {
        self.push(text.into(), sender, timestamp, false)
    }

    /// Append a pending placeholder (shown while a response is
    /// outstanding) and return its id for the later update.
    pub fn append_pending(
        &mut self,
        text: impl Into<String>,
        sender: Sender,
        timestamp: f64,
    ) -> MessageId {
        self.push(text.into(), sender, timestamp, true)
    }

    /// Merge a partial update into the message with `id`.
    ///
    /// Unknown ids are a silent no-op.
    pub fn apply(&mut self, id: MessageId, patch: MessagePatch) {
        let Some(msg) = self.messages.iter_mut().find(|m| m.id == id) else {
            return;
        };
        if let Some(text) = patch.text {
            msg.text = text;
        }
        if let Some(pending) = patch.pending {
            msg.pending = pending;
        }
        if let Some(error) = patch.error {
            msg.error = error;
        }
        if let Some(is_typing) = patch.is_typing {
            msg.is_typing = is_typing;
        }
        if let Some(full_text) = patch.full_text {
            msg.full_text = Some(full_text);
        }
        if let Some(tokens) = patch.tokens {
            msg.tokens = Some(tokens);
        }
        if let Some(ms) = patch.processing_time_ms {
            msg.processing_time_ms = Some(ms);
        }
    }

    /// Record a resolved conversation turn.
    pub fn push_turn(&mut self, role: Role, content: impl Into<String>) {
        self.history.push(ConversationTurn { role, content: content.into() });
    }

    /// Replace the whole session with the canonical welcome state.
    ///
    /// Used by "clear conversation"; any in-flight typing animation must
    /// be cancelled by the caller as well.
    pub fn reset_to_welcome(&mut self, timestamp: f64) {
        self.messages.clear();
        self.history.clear();
        self.seed_welcome(timestamp);
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn history(&self) -> &[ConversationTurn] {
        &self.history
    }

    #[must_use]
    pub fn get(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages.iter().find(|m| m.id == id)
    }

    fn seed_welcome(&mut self, timestamp: f64) {
        self.push(WELCOME_TEXT.to_owned(), Sender::Bot, timestamp, false);
        self.push_turn(Role::System, SYSTEM_PROMPT);
        self.push_turn(Role::Assistant, WELCOME_TEXT);
    }

    fn push(&mut self, text: String, sender: Sender, timestamp: f64, pending: bool) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            text,
            sender,
            timestamp,
            pending,
            error: false,
            is_typing: false,
            full_text: None,
            tokens: None,
            processing_time_ms: None,
        });
        id
    }
}
