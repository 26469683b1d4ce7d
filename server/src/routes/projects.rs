//! Project, member, and milestone routes.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::services::project::{self, MemberRow, MilestoneRow, ProjectError, ProjectRow};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProjectResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct MemberResponse {
    pub user_id: i64,
    pub username: String,
    pub full_name: String,
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct MilestoneResponse {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectBody {
    pub name: String,
    pub description: Option<String>,
    pub start_date: String,
}

#[derive(Debug, Deserialize)]
pub struct AddMemberBody {
    pub user_id: i64,
    #[serde(default = "default_role")]
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateMilestoneBody {
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
}

fn default_role() -> String {
    "member".to_owned()
}

pub(crate) fn to_project_response(row: ProjectRow) -> ProjectResponse {
    ProjectResponse {
        id: row.id,
        name: row.name,
        description: row.description,
        start_date: row.start_date,
        end_date: row.end_date,
        status: row.status,
    }
}

fn to_member_response(row: MemberRow) -> MemberResponse {
    MemberResponse {
        user_id: row.user_id,
        username: row.username,
        full_name: row.full_name,
        role: row.role,
    }
}

fn to_milestone_response(row: MilestoneRow) -> MilestoneResponse {
    MilestoneResponse {
        id: row.id,
        project_id: row.project_id,
        name: row.name,
        description: row.description,
        due_date: row.due_date,
        completed: row.completed,
    }
}

/// `GET /api/projects` — list all projects.
pub async fn list_projects(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProjectResponse>>, StatusCode> {
    let rows = project::list_projects(&state.pool)
        .await
        .map_err(project_error_to_status)?;
    Ok(Json(rows.into_iter().map(to_project_response).collect()))
}

/// `GET /api/projects/:id` — fetch one project.
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ProjectResponse>, StatusCode> {
    let row = project::get_project(&state.pool, id)
        .await
        .map_err(project_error_to_status)?;
    Ok(Json(to_project_response(row)))
}

/// `POST /api/projects` — create a project.
pub async fn create_project(
    State(state): State<AppState>,
    Json(body): Json<CreateProjectBody>,
) -> Result<(StatusCode, Json<ProjectResponse>), StatusCode> {
    if body.name.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let row = project::create_project(
        &state.pool,
        body.name.trim(),
        body.description.as_deref(),
        &body.start_date,
    )
    .await
    .map_err(project_error_to_status)?;

    Ok((StatusCode::CREATED, Json(to_project_response(row))))
}

/// `GET /api/projects/:id/members` — list project members.
pub async fn list_members(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<Vec<MemberResponse>>, StatusCode> {
    let rows = project::list_members(&state.pool, project_id)
        .await
        .map_err(project_error_to_status)?;
    Ok(Json(rows.into_iter().map(to_member_response).collect()))
}

/// `POST /api/projects/:id/members` — add a project member.
pub async fn add_member(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
    Json(body): Json<AddMemberBody>,
) -> Result<(StatusCode, Json<MemberResponse>), StatusCode> {
    let row = project::add_member(&state.pool, project_id, body.user_id, &body.role)
        .await
        .map_err(project_error_to_status)?;
    Ok((StatusCode::CREATED, Json(to_member_response(row))))
}

/// `GET /api/projects/:id/milestones` — list project milestones.
pub async fn list_milestones(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<Vec<MilestoneResponse>>, StatusCode> {
    let rows = project::list_milestones(&state.pool, project_id)
        .await
        .map_err(project_error_to_status)?;
    Ok(Json(rows.into_iter().map(to_milestone_response).collect()))
}

/// `POST /api/projects/:id/milestones` — create a milestone.
pub async fn create_milestone(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
    Json(body): Json<CreateMilestoneBody>,
) -> Result<(StatusCode, Json<MilestoneResponse>), StatusCode> {
    if body.name.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let row = project::create_milestone(
        &state.pool,
        project_id,
        body.name.trim(),
        body.description.as_deref(),
        body.due_date.as_deref(),
    )
    .await
    .map_err(project_error_to_status)?;

    Ok((StatusCode::CREATED, Json(to_milestone_response(row))))
}

pub(crate) fn project_error_to_status(err: ProjectError) -> StatusCode {
    match err {
        ProjectError::ProjectNotFound(_) | ProjectError::UserNotFound(_) => StatusCode::NOT_FOUND,
        ProjectError::Database(e) => {
            tracing::error!(error = %e, "project query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
