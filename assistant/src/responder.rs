//! Simulated response generation.
//!
//! DESIGN
//! ======
//! Classification is deterministic: the rule table first, then the
//! context classifier, then the generic fallback. The only randomized
//! parts are the reply choice within a matched category and the
//! artificial think delay, both drawn from an injected seedable RNG so
//! tests can pin exact outputs. The actual suspension (and elapsed-time
//! measurement) happens in the client driver.

#[cfg(test)]
#[path = "responder_test.rs"]
mod responder_test;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::classify::{VIEW_REPLY, classify, wants_view};
use crate::consts::{CHARS_PER_TOKEN, FALLBACK_REPLY, THINK_DELAY_MAX_MS, THINK_DELAY_MIN_MS};
use crate::rules::match_rules;
use crate::session::ConversationTurn;
use crate::visibility::UiAction;

/// A resolved simulated response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub ui: Option<UiAction>,
    pub tokens: u32,
}

/// Generates canned replies with injected randomness.
pub struct Responder {
    rng: StdRng,
}

impl Responder {
    /// Seed the RNG explicitly; identical seeds reproduce identical
    /// reply choices and delays.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Draw the artificial latency for one turn, uniform in the
    /// configured range.
    pub fn think_delay_ms(&mut self) -> u64 {
        self.rng.random_range(THINK_DELAY_MIN_MS..THINK_DELAY_MAX_MS)
    }

    /// Resolve a response for `input`.
    ///
    /// The conversation history is accepted as context per the service
    /// contract, but the demo matcher is history-free.
    pub fn respond(&mut self, input: &str, _history: &[ConversationTurn]) -> Reply {
        if let Some(rule) = match_rules(input) {
            return Reply {
                text: rule.reply.to_owned(),
                ui: rule.ui,
                tokens: estimate_tokens(rule.reply),
            };
        }

        let mut text = FALLBACK_REPLY.to_owned();
        let mut ui = None;
        if let Some(category) = classify(input) {
            let pick = self.rng.random_range(0..category.replies.len());
            text = category.replies[pick].to_owned();
            ui = category.ui;
        }

        // Asking to see the model overrides whatever the category chose.
        if wants_view(input) {
            text = VIEW_REPLY.to_owned();
            ui = Some(UiAction::View3d);
        }

        Reply { tokens: estimate_tokens(&text), text, ui }
    }
}

/// Rough token estimate: `ceil(len / 4)`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn estimate_tokens(text: &str) -> u32 {
    text.len().div_ceil(CHARS_PER_TOKEN) as u32
}
