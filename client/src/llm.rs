//! Simulated LLM service front door.
//!
//! `process_message` is the single entry point the chat panel calls: it
//! suspends for the responder's randomized think delay (the app's only
//! intentional artificial suspension point), resolves the canned reply,
//! and reports elapsed wall time. In a production build this is where a
//! real model API call would go, which is why the signature is
//! fallible even though the canned responder cannot fail.

#![allow(clippy::unused_async)]

use assistant::responder::Responder;
use assistant::session::ConversationTurn;
use assistant::visibility::UiAction;

use crate::util::time::now_ms;

/// A resolved response with timing metadata.
#[derive(Debug, Clone)]
pub struct ProcessedResponse {
    pub text: String,
    pub ui: Option<UiAction>,
    pub tokens: u32,
    pub processing_time_ms: u32,
}

/// Failure surfaced to the chat panel as an error-flagged message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceUnavailable;

/// Process one user message against the conversation history.
///
/// The pending-message id must be captured by the caller before this
/// suspends, so a late resolution can never bleed into a newer turn.
///
/// # Errors
///
/// Reserved for a real service integration; the canned responder
/// always succeeds.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub async fn process_message(
    input: &str,
    history: &[ConversationTurn],
) -> Result<ProcessedResponse, ServiceUnavailable> {
    let started = now_ms();
    let mut responder = Responder::seeded(started.to_bits());

    let delay_ms = responder.think_delay_ms();
    #[cfg(feature = "hydrate")]
    gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
    #[cfg(not(feature = "hydrate"))]
    let _ = delay_ms;

    let reply = responder.respond(input, history);
    let elapsed = (now_ms() - started).max(0.0) as u32;

    Ok(ProcessedResponse {
        text: reply.text,
        ui: reply.ui,
        tokens: reply.tokens,
        processing_time_ms: elapsed,
    })
}
