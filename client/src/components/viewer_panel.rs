//! 3D viewport panel: loading console first, placeholder viewer after.

use leptos::prelude::*;

use crate::components::loading_console::LoadingConsole;

struct DemoModel {
    name: &'static str,
    url: &'static str,
}

const DEMO_MODELS: [DemoModel; 3] = [
    DemoModel { name: "Robot_Base_v2.blend", url: "/models/robot_base.json" },
    DemoModel { name: "Robot_Head.glb", url: "/models/robot_head.json" },
    DemoModel { name: "Robot_Arm.fbx", url: "/models/robot_arm.json" },
];

/// Viewport for the demo models. Until the loading console finishes its
/// replay the panel shows the console; afterwards it switches to the
/// placeholder viewer with a model selector.
#[component]
pub fn ViewerPanel() -> impl IntoView {
    let loaded = RwSignal::new(false);
    let selected = RwSignal::new(0_usize);

    let on_complete = Callback::new(move |()| loaded.set(true));

    let selected_name = move || DEMO_MODELS[selected.get().min(DEMO_MODELS.len() - 1)].name;
    let selected_url = move || DEMO_MODELS[selected.get().min(DEMO_MODELS.len() - 1)].url;

    view! {
        <div class="viewer">
            <header class="viewer__header">
                <h2 class="viewer__title">{move || format!("3D Viewport - {}", selected_name())}</h2>
                <select
                    class="viewer__select"
                    on:change=move |ev| {
                        if let Ok(index) = event_target_value(&ev).parse::<usize>() {
                            selected.set(index.min(DEMO_MODELS.len() - 1));
                        }
                    }
                >
                    {DEMO_MODELS
                        .iter()
                        .enumerate()
                        .map(|(index, model)| {
                            view! {
                                <option value=index.to_string()>{model.name}</option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </header>

            <Show
                when=move || loaded.get()
                fallback=move || view! { <LoadingConsole on_loading_complete=on_complete/> }
            >
                <div class="viewer__stage">
                    <div class="viewer__model"></div>
                    <div class="viewer__caption">{selected_url}</div>
                    <div class="viewer__controls">
                        <button class="btn btn--ghost" title="Zoom in">"+"</button>
                        <button class="btn btn--ghost" title="Zoom out">"-"</button>
                        <button class="btn btn--ghost" title="Reset view">"Reset"</button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
