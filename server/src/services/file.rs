//! File service — project files and their version history.

#[cfg(test)]
#[path = "file_test.rs"]
mod file_test;

use sqlx::AnyPool;

use crate::services::project::{self, ProjectError};

#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("file not found: {0}")]
    FileNotFound(i64),
    #[error(transparent)]
    Project(#[from] ProjectError),
    #[error("timestamp formatting failed")]
    Timestamp,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct FileRow {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub file_type: String,
    pub file_extension: String,
    pub path: String,
    pub size: i64,
}

#[derive(Debug, Clone)]
pub struct VersionRow {
    pub id: i64,
    pub file_id: i64,
    pub version_number: i64,
    pub path: String,
    pub size: i64,
    pub change_description: Option<String>,
    pub created_at: String,
}

/// List files belonging to a project.
///
/// # Errors
///
/// Returns a project error for an unknown project, or a database error.
pub async fn list_files(pool: &AnyPool, project_id: i64) -> Result<Vec<FileRow>, FileError> {
    project::get_project(pool, project_id).await?;

    let rows = sqlx::query_as::<_, (i64, i64, String, String, String, String, i64)>(
        "SELECT id, project_id, name, type, file_extension, path, size
         FROM files
         WHERE project_id = $1
         ORDER BY id ASC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, project_id, name, file_type, file_extension, path, size)| FileRow {
            id,
            project_id,
            name,
            file_type,
            file_extension,
            path,
            size,
        })
        .collect())
}

/// Register a new file under a project.
///
/// # Errors
///
/// Returns a project error for an unknown project, or a database error.
pub async fn create_file(
    pool: &AnyPool,
    project_id: i64,
    name: &str,
    file_type: &str,
    file_extension: &str,
    path: &str,
    size: i64,
) -> Result<FileRow, FileError> {
    project::get_project(pool, project_id).await?;

    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO files (project_id, name, type, file_extension, path, size)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id",
    )
    .bind(project_id)
    .bind(name)
    .bind(file_type)
    .bind(file_extension)
    .bind(path)
    .bind(size)
    .fetch_one(pool)
    .await?;

    Ok(FileRow {
        id,
        project_id,
        name: name.to_owned(),
        file_type: file_type.to_owned(),
        file_extension: file_extension.to_owned(),
        path: path.to_owned(),
        size,
    })
}

/// List version history of a file, newest first.
///
/// # Errors
///
/// Returns `FileNotFound` for an unknown file, or a database error.
pub async fn list_versions(pool: &AnyPool, file_id: i64) -> Result<Vec<VersionRow>, FileError> {
    let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM files WHERE id = $1")
        .bind(file_id)
        .fetch_optional(pool)
        .await?;
    if exists.is_none() {
        return Err(FileError::FileNotFound(file_id));
    }

    let rows = sqlx::query_as::<_, (i64, i64, i64, String, i64, Option<String>, String)>(
        "SELECT id, file_id, version_number, path, size, change_description, created_at
         FROM file_versions
         WHERE file_id = $1
         ORDER BY version_number DESC",
    )
    .bind(file_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(
            |(id, file_id, version_number, path, size, change_description, created_at)| {
                VersionRow {
                    id,
                    file_id,
                    version_number,
                    path,
                    size,
                    change_description,
                    created_at,
                }
            },
        )
        .collect())
}

/// Record a new version of a file, allocating the next version number.
///
/// # Errors
///
/// Returns `FileNotFound` for an unknown file, or a database error.
pub async fn create_version(
    pool: &AnyPool,
    file_id: i64,
    path: &str,
    size: i64,
    change_description: Option<&str>,
) -> Result<VersionRow, FileError> {
    let exists: Option<(i64,)> = sqlx::query_as("SELECT id FROM files WHERE id = $1")
        .bind(file_id)
        .fetch_optional(pool)
        .await?;
    if exists.is_none() {
        return Err(FileError::FileNotFound(file_id));
    }

    let (version_number,): (i64,) = sqlx::query_as(
        "SELECT COALESCE(MAX(version_number), 0) + 1 FROM file_versions WHERE file_id = $1",
    )
    .bind(file_id)
    .fetch_one(pool)
    .await?;

    let created_at = time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .map_err(|_| FileError::Timestamp)?;

    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO file_versions (file_id, version_number, path, size, change_description, created_at)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING id",
    )
    .bind(file_id)
    .bind(version_number)
    .bind(path)
    .bind(size)
    .bind(change_description)
    .bind(&created_at)
    .fetch_one(pool)
    .await?;

    Ok(VersionRow {
        id,
        file_id,
        version_number,
        path: path.to_owned(),
        size,
        change_description: change_description.map(ToOwned::to_owned),
        created_at,
    })
}
