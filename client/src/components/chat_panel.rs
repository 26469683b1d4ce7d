//! Chat panel: message history, suggested prompts, and the send flow.

use leptos::prelude::*;

use assistant::consts::ERROR_REPLY;
use assistant::session::{MessagePatch, Role, Sender};
use assistant::visibility::VisibilityState;

use crate::state::chat::ChatState;
use crate::util::cancel::CancelToken;
use crate::util::time::{now_ms, short_time};

/// Prompts surfaced as one-click chips under the message list.
const SUGGESTED_PROMPTS: [&str; 5] = [
    "I want to create a sci-fi robot for a game.",
    "Show me the 3D model viewer.",
    "Help me set up a project timeline.",
    "Compare Blender vs. Maya for this project.",
    "How should I organize my team?",
];

/// Chat panel driving the whole assistant loop: append the user
/// message, show a pending bot placeholder, resolve the response, then
/// hand the text to the typing animation and the UI action to the
/// dashboard visibility state.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let visibility = expect_context::<RwSignal<VisibilityState>>();

    // One token scoping each chat turn: the send task and the typing
    // animation it hands off to. A new send, a conversation reset, or
    // unmount invalidates whatever is still in flight.
    let typing = CancelToken::new();
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    on_cleanup(move || typing.cancel());

    // Keep the newest message in view.
    Effect::new(move || {
        let _ = chat.get().log.messages().len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move |raw: String| {
        let text = raw.trim().to_owned();
        if text.is_empty() || chat.get_untracked().loading {
            return;
        }
        input.set(String::new());

        let now = now_ms();
        // The pending id is captured synchronously, before the think
        // delay suspends, so the resolution always lands on this turn's
        // placeholder.
        let mut placeholder = None;
        chat.update(|c| {
            c.log.append(text.clone(), Sender::User, now);
            c.log.push_turn(Role::User, text.clone());
            placeholder = Some(c.log.append_pending("...", Sender::Bot, now));
            c.loading = true;
        });
        let Some(pending_id) = placeholder else {
            return;
        };
        // Scope the in-flight send: if the conversation is cleared
        // before the response resolves, the resolution must not touch
        // the reset history or reveal a panel.
        let run = typing.issue();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let history = chat.get_untracked().log.history().to_vec();
            match crate::llm::process_message(&text, &history).await {
                _ if run.is_cancelled() => {}
                Ok(resp) => {
                    chat.update(|c| {
                        c.log.apply(
                            pending_id,
                            MessagePatch {
                                pending: Some(false),
                                tokens: Some(resp.tokens),
                                processing_time_ms: Some(resp.processing_time_ms),
                                ..Default::default()
                            },
                        );
                        c.log.push_turn(Role::Assistant, resp.text.clone());
                        c.loading = false;
                    });
                    crate::driver::start_typing(chat, typing, pending_id, resp.text);
                    visibility.update(|v| v.apply(resp.ui));
                }
                Err(_) => {
                    chat.update(|c| {
                        c.log.apply(
                            pending_id,
                            MessagePatch {
                                text: Some(ERROR_REPLY.to_owned()),
                                pending: Some(false),
                                error: Some(true),
                                ..Default::default()
                            },
                        );
                        c.loading = false;
                    });
                }
            }
        });

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (text, pending_id, run);
        }
    };

    let on_send_click = move |_| do_send(input.get_untracked());

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send(input.get_untracked());
        }
    };

    let clear_conversation = move |_| {
        typing.cancel();
        chat.update(|c| {
            c.log.reset_to_welcome(now_ms());
            c.loading = false;
        });
    };

    let can_send = move || !chat.get().loading && !input.get().trim().is_empty();

    let status_line = move || {
        if chat.get().loading {
            "AI is thinking..."
        } else {
            "Ask me anything about 3D project management"
        }
    };

    view! {
        <div class="chat-panel">
            <header class="chat-panel__header">
                <h2 class="chat-panel__title">"3D Project Assistant"</h2>
                <button
                    class="btn btn--ghost chat-panel__clear"
                    title="Clear conversation"
                    on:click=clear_conversation
                >
                    "Clear"
                </button>
            </header>

            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    chat.get()
                        .log
                        .messages()
                        .iter()
                        .map(|msg| {
                            let mut class = String::from("chat-panel__bubble");
                            if msg.sender == Sender::User {
                                class.push_str(" chat-panel__bubble--user");
                            }
                            if msg.pending {
                                class.push_str(" chat-panel__bubble--pending");
                            }
                            if msg.error {
                                class.push_str(" chat-panel__bubble--error");
                            }
                            let row = if msg.sender == Sender::User {
                                "chat-panel__row chat-panel__row--user"
                            } else {
                                "chat-panel__row"
                            };
                            let text = msg.text.clone();
                            let is_typing = msg.is_typing;
                            let stamp = short_time(msg.timestamp);
                            view! {
                                <div class=row>
                                    <div class=class>
                                        <span class="chat-panel__text">
                                            {text}
                                            <Show when=move || is_typing>
                                                <span class="chat-panel__caret">"|"</span>
                                            </Show>
                                        </span>
                                        <span class="chat-panel__stamp">{stamp}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="chat-panel__prompts">
                {SUGGESTED_PROMPTS
                    .into_iter()
                    .map(|prompt| {
                        view! {
                            <button
                                class="chat-panel__prompt"
                                on:click=move |_| input.set(prompt.to_owned())
                            >
                                {prompt}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <div class="chat-panel__input-row">
                <textarea
                    class="chat-panel__input"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                    disabled=move || chat.get().loading
                ></textarea>
                <button
                    class="btn btn--primary chat-panel__send"
                    on:click=on_send_click
                    disabled=move || !can_send()
                >
                    "Send"
                </button>
            </div>
            <div class="chat-panel__status">{status_line}</div>
        </div>
    }
}
