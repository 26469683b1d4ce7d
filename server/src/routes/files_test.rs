use super::*;
use crate::services::project::ProjectError;

#[test]
fn file_not_found_maps_to_404() {
    assert_eq!(file_error_to_status(FileError::FileNotFound(9)), StatusCode::NOT_FOUND);
}

#[test]
fn nested_project_error_reuses_project_mapping() {
    assert_eq!(
        file_error_to_status(FileError::Project(ProjectError::ProjectNotFound(1))),
        StatusCode::NOT_FOUND
    );
}

#[test]
fn database_error_maps_to_500() {
    assert_eq!(
        file_error_to_status(FileError::Database(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn version_response_wire_shape() {
    let row = VersionRow {
        id: 4,
        file_id: 1,
        version_number: 2,
        path: "/models/robot_base.json".to_owned(),
        size: 331_776,
        change_description: Some("Refined silhouette".to_owned()),
        created_at: "2025-01-20T10:00:00Z".to_owned(),
    };
    let json = serde_json::to_value(to_version_response(row)).unwrap();
    assert_eq!(json["file_id"], 1);
    assert_eq!(json["version_number"], 2);
    assert_eq!(json["change_description"], "Refined silhouette");
}
