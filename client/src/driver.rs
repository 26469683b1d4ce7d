//! Timer loops driving the typing animation and the scripted log
//! players.
//!
//! CONCURRENCY
//! ===========
//! Everything here runs on the single UI thread via `spawn_local`; the
//! only suspension is `gloo_timers` sleep. Each loop checks its
//! [`Run`] guard after every sleep, so unmount (or a newer run) stops
//! it before it can touch disposed state, and a cancelled player never
//! fires its completion callback.

use leptos::prelude::*;

use assistant::consts::TYPING_TICK_MS;
use assistant::player::PlayerState;
use assistant::script::ScriptStep;
use assistant::session::{MessageId, MessagePatch};

use crate::state::chat::ChatState;
use crate::util::cancel::CancelToken;

/// Begin revealing `full` into the message with `id`, one character per
/// tick. Replaces (and thereby cancels) any animation already running
/// on the same token.
pub fn start_typing(
    chat: RwSignal<ChatState>,
    token: CancelToken,
    id: MessageId,
    full: String,
) {
    let run = token.issue();
    chat.update(|c| {
        c.log.apply(
            id,
            MessagePatch {
                text: Some(String::new()),
                is_typing: Some(true),
                full_text: Some(full.clone()),
                ..Default::default()
            },
        );
    });

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use assistant::typing::{TypingAnimation, TypingTick};

        let mut animation = TypingAnimation::new(id, full);
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                TYPING_TICK_MS,
            )))
            .await;
            if run.is_cancelled() {
                return;
            }
            match animation.tick() {
                TypingTick::Reveal(prefix) => chat.update(|c| {
                    c.log.apply(id, MessagePatch { text: Some(prefix), ..Default::default() });
                }),
                TypingTick::Done => {
                    chat.update(|c| {
                        c.log.apply(
                            id,
                            MessagePatch { is_typing: Some(false), ..Default::default() },
                        );
                    });
                    return;
                }
            }
        }
    });

    // Server-side there are no timers: show the full text at once.
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = run;
        chat.update(|c| {
            c.log.apply(
                id,
                MessagePatch {
                    text: Some(full),
                    is_typing: Some(false),
                    ..Default::default()
                },
            );
        });
    }
}

/// Replay `script` into `state`, resetting it first. A newer run or a
/// token cancellation stops the replay between emissions; `on_complete`
/// fires exactly once, only if the whole script played out.
pub fn play_script(
    state: RwSignal<PlayerState>,
    token: CancelToken,
    script: &'static [ScriptStep],
    on_complete: Option<Callback<()>>,
) {
    let run = token.issue();
    state.update(PlayerState::clear);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        for emission in assistant::script::expand(script) {
            gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                emission.delay_ms,
            )))
            .await;
            if run.is_cancelled() {
                return;
            }
            state.update(|s| s.record(crate::util::time::clock_stamp(), emission));
        }
        if run.is_cancelled() {
            return;
        }
        state.update(PlayerState::finish);
        if let Some(callback) = on_complete {
            callback.run(());
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (run, script, on_complete);
    }
}
