//! Fixed top navigation between the demo pages.

use leptos::prelude::*;
use leptos_router::components::A;

const LINKS: [(&str, &str); 3] =
    [("/", "Home"), ("/console", "Console Demo"), ("/loading", "Model Loading Demo")];

#[component]
pub fn DemoNav(current: &'static str) -> impl IntoView {
    view! {
        <div class="demo-nav">
            <span class="demo-nav__brand">"3D Project Assistant"</span>
            <nav class="demo-nav__links">
                {LINKS
                    .into_iter()
                    .map(|(path, label)| {
                        let class = if path == current {
                            "demo-nav__link demo-nav__link--active"
                        } else {
                            "demo-nav__link"
                        };
                        view! {
                            <A href=path attr:class=class>
                                {label}
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </div>
    }
}
