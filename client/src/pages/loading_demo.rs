//! Standalone model-loading demo page.

use leptos::prelude::*;

use crate::components::demo_nav::DemoNav;
use crate::components::loading_console::LoadingConsole;

#[component]
pub fn LoadingDemoPage() -> impl IntoView {
    let completed = RwSignal::new(false);
    let on_complete = Callback::new(move |()| completed.set(true));

    view! {
        <div class="demo-page">
            <DemoNav current="/loading"/>
            <header class="demo-page__header">
                <h1>"Model Loading Demo"</h1>
                <p>"Progressive asset loading with per-asset progress bars."</p>
            </header>
            <div class="demo-page__stage">
                <LoadingConsole on_loading_complete=on_complete/>
            </div>
            <Show when=move || completed.get()>
                <div class="demo-page__banner">"Scene ready for interaction"</div>
            </Show>
        </div>
    }
}
