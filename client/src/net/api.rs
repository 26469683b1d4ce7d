//! REST API helpers for the project CRUD endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so fetch failures
//! degrade to empty panels (with a status line) without crashing
//! hydration.

#![allow(clippy::unused_async)]

use super::types::{
    FileVersion, Milestone, NewMember, NewMilestone, NewProject, Project, ProjectFile,
    ProjectMember,
};

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(url).send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    url: &str,
    body: &B,
) -> Option<T> {
    let resp = gloo_net::http::Request::post(url).json(body).ok()?.send().await.ok()?;
    if !resp.ok() {
        return None;
    }
    resp.json::<T>().await.ok()
}

/// `GET /api/projects`
pub async fn fetch_projects() -> Option<Vec<Project>> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/projects").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// `POST /api/projects`
pub async fn create_project(body: &NewProject) -> Option<Project> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/projects", body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        None
    }
}

/// `GET /api/projects/{id}/members`
pub async fn fetch_members(project_id: i64) -> Option<Vec<ProjectMember>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/projects/{project_id}/members")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        None
    }
}

/// `POST /api/projects/{id}/members`
pub async fn add_member(project_id: i64, body: &NewMember) -> Option<ProjectMember> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&format!("/api/projects/{project_id}/members"), body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, body);
        None
    }
}

/// `GET /api/projects/{id}/milestones`
pub async fn fetch_milestones(project_id: i64) -> Option<Vec<Milestone>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/projects/{project_id}/milestones")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        None
    }
}

/// `POST /api/projects/{id}/milestones`
pub async fn create_milestone(project_id: i64, body: &NewMilestone) -> Option<Milestone> {
    #[cfg(feature = "hydrate")]
    {
        post_json(&format!("/api/projects/{project_id}/milestones"), body).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (project_id, body);
        None
    }
}

/// `GET /api/projects/{id}/files`
pub async fn fetch_files(project_id: i64) -> Option<Vec<ProjectFile>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/projects/{project_id}/files")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = project_id;
        None
    }
}

/// `GET /api/files/{id}/versions`
pub async fn fetch_versions(file_id: i64) -> Option<Vec<FileVersion>> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&format!("/api/files/{file_id}/versions")).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = file_id;
        None
    }
}
