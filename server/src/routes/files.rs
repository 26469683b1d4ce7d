//! File and version-history routes.

#[cfg(test)]
#[path = "files_test.rs"]
mod files_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::routes::projects::project_error_to_status;
use crate::services::file::{self, FileError, FileRow, VersionRow};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FileResponse {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub file_type: String,
    pub file_extension: String,
    pub path: String,
    pub size: i64,
}

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub id: i64,
    pub file_id: i64,
    pub version_number: i64,
    pub path: String,
    pub size: i64,
    pub change_description: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateFileBody {
    pub name: String,
    #[serde(default = "default_file_type")]
    pub file_type: String,
    pub file_extension: String,
    pub path: String,
    pub size: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateVersionBody {
    pub path: String,
    pub size: i64,
    pub change_description: Option<String>,
}

fn default_file_type() -> String {
    "other".to_owned()
}

fn to_file_response(row: FileRow) -> FileResponse {
    FileResponse {
        id: row.id,
        project_id: row.project_id,
        name: row.name,
        file_type: row.file_type,
        file_extension: row.file_extension,
        path: row.path,
        size: row.size,
    }
}

fn to_version_response(row: VersionRow) -> VersionResponse {
    VersionResponse {
        id: row.id,
        file_id: row.file_id,
        version_number: row.version_number,
        path: row.path,
        size: row.size,
        change_description: row.change_description,
        created_at: row.created_at,
    }
}

/// `GET /api/projects/:id/files` — list project files.
pub async fn list_files(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
) -> Result<Json<Vec<FileResponse>>, StatusCode> {
    let rows = file::list_files(&state.pool, project_id)
        .await
        .map_err(file_error_to_status)?;
    Ok(Json(rows.into_iter().map(to_file_response).collect()))
}

/// `POST /api/projects/:id/files` — register a file.
pub async fn create_file(
    State(state): State<AppState>,
    Path(project_id): Path<i64>,
    Json(body): Json<CreateFileBody>,
) -> Result<(StatusCode, Json<FileResponse>), StatusCode> {
    if body.name.trim().is_empty() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let row = file::create_file(
        &state.pool,
        project_id,
        body.name.trim(),
        &body.file_type,
        &body.file_extension,
        &body.path,
        body.size,
    )
    .await
    .map_err(file_error_to_status)?;

    Ok((StatusCode::CREATED, Json(to_file_response(row))))
}

/// `GET /api/files/:id/versions` — list a file's version history.
pub async fn list_versions(
    State(state): State<AppState>,
    Path(file_id): Path<i64>,
) -> Result<Json<Vec<VersionResponse>>, StatusCode> {
    let rows = file::list_versions(&state.pool, file_id)
        .await
        .map_err(file_error_to_status)?;
    Ok(Json(rows.into_iter().map(to_version_response).collect()))
}

/// `POST /api/files/:id/versions` — record a new file version.
pub async fn create_version(
    State(state): State<AppState>,
    Path(file_id): Path<i64>,
    Json(body): Json<CreateVersionBody>,
) -> Result<(StatusCode, Json<VersionResponse>), StatusCode> {
    let row = file::create_version(
        &state.pool,
        file_id,
        &body.path,
        body.size,
        body.change_description.as_deref(),
    )
    .await
    .map_err(file_error_to_status)?;

    Ok((StatusCode::CREATED, Json(to_version_response(row))))
}

pub(crate) fn file_error_to_status(err: FileError) -> StatusCode {
    match err {
        FileError::FileNotFound(_) => StatusCode::NOT_FOUND,
        FileError::Project(e) => project_error_to_status(e),
        FileError::Timestamp => StatusCode::INTERNAL_SERVER_ERROR,
        FileError::Database(e) => {
            tracing::error!(error = %e, "file query failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
