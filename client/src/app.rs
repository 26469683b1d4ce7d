//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use assistant::visibility::VisibilityState;

use crate::pages::{
    assistant::AssistantPage, console_demo::ConsoleDemoPage, loading_demo::LoadingDemoPage,
};
use crate::state::chat::ChatState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the chat session and dashboard visibility contexts — one
/// of each per browser session — and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::new(crate::util::time::now_ms()));
    let visibility = RwSignal::new(VisibilityState::default());

    provide_context(chat);
    provide_context(visibility);

    view! {
        <Stylesheet id="leptos" href="/pkg/assistant-ui.css"/>
        <Title text="3D Project Assistant"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AssistantPage/>
                <Route path=StaticSegment("console") view=ConsoleDemoPage/>
                <Route path=StaticSegment("loading") view=LoadingDemoPage/>
            </Routes>
        </Router>
    }
}
