//! Model-loading console with per-asset progress bars.

use leptos::prelude::*;

use assistant::player::PlayerState;
use assistant::script::{LOADING_ASSETS, MODEL_LOADING_SCRIPT};

use crate::components::console_panel::{kind_class, kind_glyph};
use crate::util::cancel::CancelToken;

/// Timestamped console that replays the model-loading sequence on
/// mount: three progressive asset loads feeding the progress bars, then
/// scene finalization. Fires `on_loading_complete` once, only if the
/// replay runs to the end without being restarted or unmounted.
#[component]
pub fn LoadingConsole(
    #[prop(into, optional)] on_loading_complete: Option<Callback<()>>,
) -> impl IntoView {
    let state = RwSignal::new(PlayerState::with_assets(LOADING_ASSETS));
    let token = CancelToken::new();
    let lines_ref = NodeRef::<leptos::html::Div>::new();

    on_cleanup(move || token.cancel());

    Effect::new(move || {
        crate::driver::play_script(state, token, MODEL_LOADING_SCRIPT, on_loading_complete);
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

    let on_restart = move |_| {
        crate::driver::play_script(state, token, MODEL_LOADING_SCRIPT, on_loading_complete);
    };

    view! {
        <div class="loading-console">
            <header class="loading-console__header">
                <span class="loading-console__title">"Model Loading"</span>
                <button class="btn btn--ghost" title="Restart loading" on:click=on_restart>
                    "Restart"
                </button>
            </header>

            <div class="loading-console__bars">
                {move || {
                    state
                        .get()
                        .progress()
                        .map(|(asset, percent)| {
                            let width = format!("{percent}%");
                            view! {
                                <div class="loading-console__bar-row">
                                    <span class="loading-console__asset">{asset}</span>
                                    <div class="loading-console__bar">
                                        <div
                                            class="loading-console__bar-fill"
                                            style:width=width
                                        ></div>
                                    </div>
                                    <span class="loading-console__percent">
                                        {format!("{percent}%")}
                                    </span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="loading-console__lines" node_ref=lines_ref>
                {move || {
                    state
                        .get()
                        .lines()
                        .iter()
                        .map(|entry| {
                            let class = kind_class(entry.line.kind);
                            let glyph = kind_glyph(entry.line.kind);
                            let stamp = entry.timestamp.clone();
                            let text = entry.line.text.clone();
                            view! {
                                <div class=class>
                                    <span class="loading-console__stamp">{stamp}</span>
                                    <span class="console__glyph">{glyph}</span>
                                    <span class="console__text">{text}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <Show when=move || state.get().is_complete()>
                <div class="loading-console__done">"\u{2713} All assets loaded"</div>
            </Show>
        </div>
    }
}
