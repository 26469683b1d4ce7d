//! Shared timing constants and canned assistant text.

/// System prompt seeded into every conversation history.
pub const SYSTEM_PROMPT: &str =
    "You are an AI assistant specialized in 3D modeling and project management.";

/// Greeting shown as the first bot message of a fresh session.
pub const WELCOME_TEXT: &str =
    "What can I help you build today? 3D asset, scene, or something else?";

/// Generic reply when neither a rule nor a context category matches.
pub const FALLBACK_REPLY: &str = "I'll help with your 3D project. Could you provide \
     more specific details about what you're trying to accomplish?";

/// Replaces a pending message when response resolution fails.
pub const ERROR_REPLY: &str =
    "Sorry, I encountered an error processing your request. Please try again.";

/// Simulated model latency bounds (uniform draw, milliseconds).
pub const THINK_DELAY_MIN_MS: u64 = 300;
pub const THINK_DELAY_MAX_MS: u64 = 800;

/// Typing animation reveals one character per tick at this interval.
pub const TYPING_TICK_MS: u32 = 15;

/// Rough 4-chars-per-token estimate used for the reply metadata.
pub const CHARS_PER_TOKEN: usize = 4;

/// Number of sub-steps a progressive asset load is split into.
pub const LOAD_STEPS: u32 = 10;
