use super::*;

#[test]
fn project_not_found_maps_to_404() {
    assert_eq!(
        project_error_to_status(ProjectError::ProjectNotFound(1)),
        StatusCode::NOT_FOUND
    );
    assert_eq!(project_error_to_status(ProjectError::UserNotFound(2)), StatusCode::NOT_FOUND);
}

#[test]
fn database_error_maps_to_500() {
    assert_eq!(
        project_error_to_status(ProjectError::Database(sqlx::Error::RowNotFound)),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn project_response_wire_shape() {
    let row = ProjectRow {
        id: 1,
        name: "Sci-Fi Robot".to_owned(),
        description: None,
        start_date: "2025-01-06".to_owned(),
        end_date: None,
        status: "active".to_owned(),
    };
    let json = serde_json::to_value(to_project_response(row)).unwrap();
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "Sci-Fi Robot");
    assert_eq!(json["start_date"], "2025-01-06");
    assert_eq!(json["status"], "active");
    assert!(json["description"].is_null());
}

#[test]
fn add_member_body_defaults_role() {
    let body: AddMemberBody = serde_json::from_str(r#"{"user_id": 3}"#).unwrap();
    assert_eq!(body.user_id, 3);
    assert_eq!(body.role, "member");
}

#[test]
fn milestone_body_accepts_optional_fields() {
    let body: CreateMilestoneBody = serde_json::from_str(r#"{"name": "Polish"}"#).unwrap();
    assert_eq!(body.name, "Polish");
    assert!(body.description.is_none());
    assert!(body.due_date.is_none());
}
