//! Project service — projects, members, and milestones.
//!
//! All queries use `$N` placeholders and scalar column types that
//! decode identically on SQLite and Postgres through the `Any` driver;
//! milestone completion is stored as an integer for that reason.

#[cfg(test)]
#[path = "project_test.rs"]
mod project_test;

use sqlx::AnyPool;

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("project not found: {0}")]
    ProjectNotFound(i64),
    #[error("user not found: {0}")]
    UserNotFound(i64),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Row returned from project queries.
#[derive(Debug, Clone)]
pub struct ProjectRow {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: String,
}

/// Project member joined with its user record.
#[derive(Debug, Clone)]
pub struct MemberRow {
    pub user_id: i64,
    pub username: String,
    pub full_name: String,
    pub role: String,
}

#[derive(Debug, Clone)]
pub struct MilestoneRow {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub completed: bool,
}

/// List all projects, oldest first.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_projects(pool: &AnyPool) -> Result<Vec<ProjectRow>, ProjectError> {
    let rows = sqlx::query_as::<_, (i64, String, Option<String>, String, Option<String>, Option<String>)>(
        "SELECT id, name, description, start_date, end_date, status
         FROM projects
         ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(to_project).collect())
}

/// Fetch one project by id.
///
/// # Errors
///
/// Returns `ProjectNotFound` if no row matches, or a database error.
pub async fn get_project(pool: &AnyPool, id: i64) -> Result<ProjectRow, ProjectError> {
    let row = sqlx::query_as::<_, (i64, String, Option<String>, String, Option<String>, Option<String>)>(
        "SELECT id, name, description, start_date, end_date, status
         FROM projects
         WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(to_project).ok_or(ProjectError::ProjectNotFound(id))
}

/// Create a new project.
///
/// # Errors
///
/// Returns a database error if the insert fails.
pub async fn create_project(
    pool: &AnyPool,
    name: &str,
    description: Option<&str>,
    start_date: &str,
) -> Result<ProjectRow, ProjectError> {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO projects (name, description, start_date, status)
         VALUES ($1, $2, $3, 'active')
         RETURNING id",
    )
    .bind(name)
    .bind(description)
    .bind(start_date)
    .fetch_one(pool)
    .await?;

    Ok(ProjectRow {
        id,
        name: name.to_owned(),
        description: description.map(ToOwned::to_owned),
        start_date: start_date.to_owned(),
        end_date: None,
        status: "active".to_owned(),
    })
}

/// List members of a project, joined with their user records.
///
/// # Errors
///
/// Returns `ProjectNotFound` for an unknown project, or a database
/// error.
pub async fn list_members(pool: &AnyPool, project_id: i64) -> Result<Vec<MemberRow>, ProjectError> {
    get_project(pool, project_id).await?;

    let rows = sqlx::query_as::<_, (i64, String, String, Option<String>)>(
        "SELECT u.id, u.username, u.full_name, pm.role
         FROM project_members pm
         JOIN users u ON u.id = pm.user_id
         WHERE pm.project_id = $1
         ORDER BY pm.id ASC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(user_id, username, full_name, role)| MemberRow {
            user_id,
            username,
            full_name,
            role: role.unwrap_or_else(default_role),
        })
        .collect())
}

/// Add a user to a project.
///
/// # Errors
///
/// Returns `ProjectNotFound` or `UserNotFound` when either side of the
/// membership is missing, or a database error.
pub async fn add_member(
    pool: &AnyPool,
    project_id: i64,
    user_id: i64,
    role: &str,
) -> Result<MemberRow, ProjectError> {
    get_project(pool, project_id).await?;

    let user = sqlx::query_as::<_, (i64, String, String)>(
        "SELECT id, username, full_name FROM users WHERE id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?
    .ok_or(ProjectError::UserNotFound(user_id))?;

    sqlx::query("INSERT INTO project_members (project_id, user_id, role) VALUES ($1, $2, $3)")
        .bind(project_id)
        .bind(user_id)
        .bind(role)
        .execute(pool)
        .await?;

    Ok(MemberRow { user_id: user.0, username: user.1, full_name: user.2, role: role.to_owned() })
}

/// List milestones of a project, earliest first.
///
/// # Errors
///
/// Returns `ProjectNotFound` for an unknown project, or a database
/// error.
pub async fn list_milestones(
    pool: &AnyPool,
    project_id: i64,
) -> Result<Vec<MilestoneRow>, ProjectError> {
    get_project(pool, project_id).await?;

    let rows = sqlx::query_as::<_, (i64, i64, String, Option<String>, Option<String>, i64)>(
        "SELECT id, project_id, name, description, due_date, completed
         FROM milestones
         WHERE project_id = $1
         ORDER BY id ASC",
    )
    .bind(project_id)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, project_id, name, description, due_date, completed)| MilestoneRow {
            id,
            project_id,
            name,
            description,
            due_date,
            completed: completed != 0,
        })
        .collect())
}

/// Create a milestone under a project.
///
/// # Errors
///
/// Returns `ProjectNotFound` for an unknown project, or a database
/// error.
pub async fn create_milestone(
    pool: &AnyPool,
    project_id: i64,
    name: &str,
    description: Option<&str>,
    due_date: Option<&str>,
) -> Result<MilestoneRow, ProjectError> {
    get_project(pool, project_id).await?;

    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO milestones (project_id, name, description, due_date, completed)
         VALUES ($1, $2, $3, $4, 0)
         RETURNING id",
    )
    .bind(project_id)
    .bind(name)
    .bind(description)
    .bind(due_date)
    .fetch_one(pool)
    .await?;

    Ok(MilestoneRow {
        id,
        project_id,
        name: name.to_owned(),
        description: description.map(ToOwned::to_owned),
        due_date: due_date.map(ToOwned::to_owned),
        completed: false,
    })
}

fn default_role() -> String {
    "member".to_owned()
}

#[allow(clippy::type_complexity)]
fn to_project(
    (id, name, description, start_date, end_date, status): (
        i64,
        String,
        Option<String>,
        String,
        Option<String>,
        Option<String>,
    ),
) -> ProjectRow {
    ProjectRow {
        id,
        name,
        description,
        start_date,
        end_date,
        status: status.unwrap_or_else(|| "active".to_owned()),
    }
}
