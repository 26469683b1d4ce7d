//! Scripted renderer-console panel.

use leptos::prelude::*;

use assistant::player::PlayerState;
use assistant::script::{CONSOLE_SCRIPT, LogKind};

use crate::util::cancel::CancelToken;

pub(crate) fn kind_class(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Info => "console__line console__line--info",
        LogKind::Success => "console__line console__line--success",
        LogKind::Warning => "console__line console__line--warning",
        LogKind::Error => "console__line console__line--error",
        LogKind::Debug => "console__line console__line--debug",
        LogKind::Command => "console__line console__line--command",
        LogKind::Loading => "console__line console__line--loading",
    }
}

pub(crate) fn kind_glyph(kind: LogKind) -> &'static str {
    match kind {
        LogKind::Success => "\u{2713} ",
        LogKind::Error => "\u{2717} ",
        LogKind::Warning => "\u{26a0} ",
        LogKind::Info => "\u{25cf} ",
        LogKind::Command => "> ",
        LogKind::Debug | LogKind::Loading => "",
    }
}

/// Console panel that replays the renderer-initialization script on
/// mount. Clearing drops the accumulated lines without stopping the
/// replay; "Replay" restarts the script from the top.
#[component]
pub fn ConsolePanel(#[prop(into, optional)] on_close: Option<Callback<()>>) -> impl IntoView {
    let state = RwSignal::new(PlayerState::default());
    let token = CancelToken::new();
    let lines_ref = NodeRef::<leptos::html::Div>::new();

    on_cleanup(move || token.cancel());

    // Effects only run in the browser, so the replay starts exactly
    // once per mount and never on the server.
    Effect::new(move || {
        crate::driver::play_script(state, token, CONSOLE_SCRIPT, None);
    });

    Effect::new(move || {
        let _ = state.get().lines().len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = lines_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let on_clear = move |_| state.update(PlayerState::clear);
    let on_replay = move |_| crate::driver::play_script(state, token, CONSOLE_SCRIPT, None);

    view! {
        <div class="console">
            <header class="console__header">
                <span class="console__title">"Console"</span>
                <div class="console__actions">
                    <button class="btn btn--ghost" title="Replay" on:click=on_replay>
                        "Replay"
                    </button>
                    <button class="btn btn--ghost" title="Clear console" on:click=on_clear>
                        "Clear"
                    </button>
                    {on_close.map(|cb| {
                        view! {
                            <button
                                class="btn btn--ghost"
                                title="Close console"
                                on:click=move |_| cb.run(())
                            >
                                "Close"
                            </button>
                        }
                    })}
                </div>
            </header>

            <div class="console__lines" node_ref=lines_ref>
                {move || {
                    state
                        .get()
                        .lines()
                        .iter()
                        .map(|entry| {
                            let class = kind_class(entry.line.kind);
                            let glyph = kind_glyph(entry.line.kind);
                            let text = entry.line.text.clone();
                            view! {
                                <div class=class>
                                    <span class="console__glyph">{glyph}</span>
                                    <span class="console__text">{text}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
        </div>
    }
}
