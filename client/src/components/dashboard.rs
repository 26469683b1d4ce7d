//! Project dashboard: sidebar tab navigation and the per-tab panels.

use leptos::prelude::*;

use assistant::visibility::{Tab, VisibilityState};

/// The seeded demo project every panel reads from.
const DEMO_PROJECT_ID: i64 = 1;

/// The seeded base-model file whose history the versions panel shows.
const DEMO_FILE_ID: i64 = 1;

const TABS: [(Tab, &str); 8] = [
    (Tab::Project, "Project"),
    (Tab::Team, "Team"),
    (Tab::Tools, "Tools"),
    (Tab::Files, "Files"),
    (Tab::Versions, "Versions"),
    (Tab::Graphs, "Graphs"),
    (Tab::ImportExport, "Import/Export"),
    (Tab::View3d, "3D View"),
];

/// Sidebar navigation. Selecting a tab both activates it and reveals
/// its panel flag for the rest of the session.
#[component]
pub fn TabNav() -> impl IntoView {
    let visibility = expect_context::<RwSignal<VisibilityState>>();

    view! {
        <nav class="tab-nav">
            {TABS
                .into_iter()
                .map(|(tab, label)| {
                    let class = move || {
                        if visibility.get().active_tab == tab {
                            "tab-nav__item tab-nav__item--active"
                        } else {
                            "tab-nav__item"
                        }
                    };
                    view! {
                        <button class=class on:click=move |_| visibility.update(|v| v.open_tab(tab))>
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}

/// Content area for the currently active dashboard tab.
///
/// The 3D view is not handled here; the page swaps in the viewer panel
/// for that tab.
#[component]
pub fn Dashboard() -> impl IntoView {
    let visibility = expect_context::<RwSignal<VisibilityState>>();

    view! {
        <div class="dashboard">
            {move || match visibility.get().active_tab {
                Tab::Project | Tab::View3d => view! { <ProjectPanel/> }.into_any(),
                Tab::Team => view! { <TeamPanel/> }.into_any(),
                Tab::Tools => view! { <ToolsPanel/> }.into_any(),
                Tab::Files => view! { <FilesPanel/> }.into_any(),
                Tab::Versions => view! { <VersionsPanel/> }.into_any(),
                Tab::Graphs => view! { <GraphsPanel/> }.into_any(),
                Tab::ImportExport => view! { <ImportExportPanel/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProjectPanel() -> impl IntoView {
    let projects = LocalResource::new(|| crate::net::api::fetch_projects());
    let milestones = LocalResource::new(|| crate::net::api::fetch_milestones(DEMO_PROJECT_ID));

    view! {
        <section class="panel panel--project">
            <h3 class="panel__title">"Project Setup"</h3>
            <Suspense fallback=move || view! { <p class="panel__hint">"Loading project..."</p> }>
                {move || {
                    projects
                        .get()
                        .map(|list| match list {
                            Some(list) if !list.is_empty() => {
                                list.into_iter()
                                    .map(|p| {
                                        let description =
                                            p.description.unwrap_or_default();
                                        view! {
                                            <div class="panel__card">
                                                <strong>{p.name}</strong>
                                                <p>{description}</p>
                                                <span class="panel__meta">
                                                    {format!("{} — {}", p.start_date, p.status)}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                            _ => view! { <p class="panel__hint">"No projects yet"</p> }.into_any(),
                        })
                }}
            </Suspense>

            <h4 class="panel__subtitle">"Milestones"</h4>
            <Suspense fallback=move || view! { <p class="panel__hint">"Loading milestones..."</p> }>
                {move || {
                    milestones
                        .get()
                        .map(|list| match list {
                            Some(list) if !list.is_empty() => {
                                list.into_iter()
                                    .map(|m| {
                                        let mark = if m.completed { "\u{2713}" } else { "\u{25cb}" };
                                        let due = m.due_date.unwrap_or_else(|| "unscheduled".to_owned());
                                        view! {
                                            <div class="panel__row">
                                                <span class="panel__mark">{mark}</span>
                                                <span>{m.name}</span>
                                                <span class="panel__meta">{due}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                            _ => view! { <p class="panel__hint">"No milestones yet"</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn TeamPanel() -> impl IntoView {
    let members = LocalResource::new(|| crate::net::api::fetch_members(DEMO_PROJECT_ID));

    view! {
        <section class="panel panel--team">
            <h3 class="panel__title">"Team"</h3>
            <Suspense fallback=move || view! { <p class="panel__hint">"Loading team..."</p> }>
                {move || {
                    members
                        .get()
                        .map(|list| match list {
                            Some(list) if !list.is_empty() => {
                                list.into_iter()
                                    .map(|m| {
                                        view! {
                                            <div class="panel__row">
                                                <strong>{m.full_name}</strong>
                                                <span class="panel__meta">{m.role}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                            _ => view! { <p class="panel__hint">"No members yet"</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn ToolsPanel() -> impl IntoView {
    let rows = [
        ("Modeling", "Excellent, free", "Industry standard, licensed"),
        ("Animation", "Good rigging tools", "Best-in-class rigging"),
        ("Rendering", "Cycles / Eevee built in", "Arnold integration"),
        ("Game export", "glTF and FBX", "FBX pipeline"),
        ("Cost", "Free and open source", "Subscription"),
    ];

    view! {
        <section class="panel panel--tools">
            <h3 class="panel__title">"Tools Comparison"</h3>
            <table class="panel__table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Blender"</th>
                        <th>"Maya"</th>
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|(aspect, blender, maya)| {
                            view! {
                                <tr>
                                    <td>{aspect}</td>
                                    <td>{blender}</td>
                                    <td>{maya}</td>
                                </tr>
                            }
                        })
                        .collect::<Vec<_>>()}
                </tbody>
            </table>
        </section>
    }
}

#[component]
fn FilesPanel() -> impl IntoView {
    let files = LocalResource::new(|| crate::net::api::fetch_files(DEMO_PROJECT_ID));

    view! {
        <section class="panel panel--files">
            <h3 class="panel__title">"Files"</h3>
            <Suspense fallback=move || view! { <p class="panel__hint">"Loading files..."</p> }>
                {move || {
                    files
                        .get()
                        .map(|list| match list {
                            Some(list) if !list.is_empty() => {
                                list.into_iter()
                                    .map(|f| {
                                        let size_kb = f.size / 1024;
                                        view! {
                                            <div class="panel__row">
                                                <strong>{f.name}</strong>
                                                <span class="panel__meta">
                                                    {format!("{} · {size_kb}kb", f.file_extension)}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                            _ => view! { <p class="panel__hint">"No files yet"</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn VersionsPanel() -> impl IntoView {
    let versions = LocalResource::new(|| crate::net::api::fetch_versions(DEMO_FILE_ID));

    view! {
        <section class="panel panel--versions">
            <h3 class="panel__title">"Version History"</h3>
            <Suspense fallback=move || view! { <p class="panel__hint">"Loading versions..."</p> }>
                {move || {
                    versions
                        .get()
                        .map(|list| match list {
                            Some(list) if !list.is_empty() => {
                                list.into_iter()
                                    .map(|v| {
                                        let change = v
                                            .change_description
                                            .unwrap_or_else(|| "No description".to_owned());
                                        view! {
                                            <div class="panel__row">
                                                <strong>{format!("v{}", v.version_number)}</strong>
                                                <span>{change}</span>
                                                <span class="panel__meta">{v.created_at}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                            _ => view! { <p class="panel__hint">"No versions yet"</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn GraphsPanel() -> impl IntoView {
    let bars = [("Modeling", 65_u8), ("Texturing", 40), ("Rigging", 25), ("Animation", 10)];

    view! {
        <section class="panel panel--graphs">
            <h3 class="panel__title">"Progress"</h3>
            {bars
                .into_iter()
                .map(|(label, percent)| {
                    let width = format!("{percent}%");
                    view! {
                        <div class="panel__bar-row">
                            <span>{label}</span>
                            <div class="panel__bar">
                                <div class="panel__bar-fill" style:width=width></div>
                            </div>
                            <span class="panel__meta">{format!("{percent}%")}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}

#[component]
fn ImportExportPanel() -> impl IntoView {
    view! {
        <section class="panel panel--import-export">
            <h3 class="panel__title">"Import / Export"</h3>
            <div class="panel__row">
                <span>"Supported formats: .blend, .fbx, .glb, .obj"</span>
            </div>
            <div class="panel__actions">
                <button class="btn">"Import Model"</button>
                <button class="btn">"Export Scene"</button>
            </div>
        </section>
    }
}
