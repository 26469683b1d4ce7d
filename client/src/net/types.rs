//! Wire types shared with the server's JSON API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMember {
    pub user_id: i64,
    pub username: String,
    pub full_name: String,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectFile {
    pub id: i64,
    pub project_id: i64,
    pub name: String,
    pub file_type: String,
    pub file_extension: String,
    pub path: String,
    pub size: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileVersion {
    pub id: i64,
    pub file_id: i64,
    pub version_number: i64,
    pub path: String,
    pub size: i64,
    pub change_description: Option<String>,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub start_date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewMember {
    pub user_id: i64,
    pub role: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewMilestone {
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<String>,
}
