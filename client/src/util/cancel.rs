//! Generation-token cancellation for timer-driven tasks.
//!
//! DESIGN
//! ======
//! Each timer loop (typing animation, log player) captures a `Run` at
//! start and checks it before every asynchronous continuation. Issuing
//! a new run, or calling `cancel`, bumps the generation and silently
//! invalidates every older run — so starting a replay implicitly
//! cancels the previous one, and `on_cleanup` can cancel on unmount
//! without tracking individual timers.

#[cfg(test)]
#[path = "cancel_test.rs"]
mod cancel_test;

use leptos::prelude::*;

/// Shared cancellation state for one family of runs.
#[derive(Debug, Clone, Copy)]
pub struct CancelToken(RwSignal<u64>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self(RwSignal::new(0))
    }

    /// Start a new run, invalidating any prior one.
    #[must_use]
    pub fn issue(&self) -> Run {
        self.0.update(|generation| *generation += 1);
        Run { token: *self, generation: self.0.get_untracked() }
    }

    /// Invalidate all outstanding runs.
    pub fn cancel(&self) {
        self.0.update(|generation| *generation += 1);
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle held by one timer loop.
#[derive(Debug, Clone, Copy)]
pub struct Run {
    token: CancelToken,
    generation: u64,
}

impl Run {
    /// True once a newer run was issued or the token was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.token.0.get_untracked() != self.generation
    }
}
