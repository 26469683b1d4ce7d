//! Standalone console demo page.

use leptos::prelude::*;

use crate::components::console_panel::ConsolePanel;
use crate::components::demo_nav::DemoNav;

#[component]
pub fn ConsoleDemoPage() -> impl IntoView {
    view! {
        <div class="demo-page">
            <DemoNav current="/console"/>
            <header class="demo-page__header">
                <h1>"Console Demo"</h1>
                <p>"Scripted renderer-initialization log, replayed with its original pacing."</p>
            </header>
            <div class="demo-page__stage">
                <ConsolePanel/>
            </div>
        </div>
    }
}
