//! Main assistant page: sidebar, dashboard or viewer, console, chat.

use leptos::prelude::*;

use assistant::visibility::{Tab, VisibilityState};

use crate::components::chat_panel::ChatPanel;
use crate::components::console_panel::ConsolePanel;
use crate::components::dashboard::{Dashboard, TabNav};
use crate::components::demo_nav::DemoNav;
use crate::components::viewer_panel::ViewerPanel;

/// The three-column assistant workspace. The middle column swaps to the
/// 3D viewer when that tab is active and shows the mini console along
/// the bottom; the chat panel on the right drives both via the shared
/// visibility context.
#[component]
pub fn AssistantPage() -> impl IntoView {
    let visibility = expect_context::<RwSignal<VisibilityState>>();
    let show_console = RwSignal::new(true);

    let on_console_close = Callback::new(move |()| show_console.set(false));

    view! {
        <div class="assistant-page">
            <DemoNav current="/"/>

            <header class="assistant-page__header">
                <h1>"3D Project Assistant"</h1>
            </header>

            <main class="assistant-page__body">
                <aside class="assistant-page__sidebar">
                    <TabNav/>
                </aside>

                <section class="assistant-page__content">
                    <div class="assistant-page__main">
                        {move || {
                            if visibility.get().active_tab == Tab::View3d {
                                view! { <ViewerPanel/> }.into_any()
                            } else {
                                view! { <Dashboard/> }.into_any()
                            }
                        }}
                    </div>

                    <Show when=move || show_console.get()>
                        <div class="assistant-page__console">
                            <ConsolePanel on_close=on_console_close/>
                        </div>
                    </Show>
                </section>

                <aside class="assistant-page__chat">
                    <ChatPanel/>
                </aside>
            </main>
        </div>
    }
}
