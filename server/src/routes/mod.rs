//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the JSON API routes with Leptos SSR rendering
//! under a single Axum router. The demo UI is served at `/` with its
//! static assets (WASM, CSS, JS) under `/pkg`.

pub mod files;
pub mod projects;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes consumed by the hydrated client.
fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/projects", get(projects::list_projects).post(projects::create_project))
        .route("/api/projects/{id}", get(projects::get_project))
        .route(
            "/api/projects/{id}/members",
            get(projects::list_members).post(projects::add_member),
        )
        .route(
            "/api/projects/{id}/milestones",
            get(projects::list_milestones).post(projects::create_milestone),
        )
        .route(
            "/api/projects/{id}/files",
            get(files::list_files).post(files::create_file),
        )
        .route(
            "/api/files/{id}/versions",
            get(files::list_versions).post(files::create_version),
        )
        .route("/healthz", get(healthz))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Full application: API routes plus the Leptos SSR front end.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded
/// (missing or malformed `Cargo.toml` `[package.metadata.leptos]`
/// section).
pub fn app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
