use super::*;
use crate::db;

#[tokio::test]
async fn list_projects_returns_seeded_project() {
    let pool = db::test_pool().await;

    let projects = list_projects(&pool).await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, 1);
    assert_eq!(projects[0].name, "Sci-Fi Robot");
    assert_eq!(projects[0].status, "active");
}

#[tokio::test]
async fn get_project_unknown_id_is_not_found() {
    let pool = db::test_pool().await;

    let err = get_project(&pool, 999).await.unwrap_err();
    assert!(matches!(err, ProjectError::ProjectNotFound(999)));
}

#[tokio::test]
async fn create_project_allocates_next_id() {
    let pool = db::test_pool().await;

    let row = create_project(&pool, "Space Station", Some("Scene project"), "2025-04-01")
        .await
        .unwrap();
    assert_eq!(row.id, 2);
    assert_eq!(row.status, "active");
    assert_eq!(row.end_date, None);

    let listed = list_projects(&pool).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[1].name, "Space Station");
}

#[tokio::test]
async fn list_members_joins_user_records() {
    let pool = db::test_pool().await;

    let members = list_members(&pool, 1).await.unwrap();
    assert_eq!(members.len(), 4);
    assert_eq!(members[0].username, "alex");
    assert_eq!(members[0].full_name, "Alex Rivera");
    assert_eq!(members[0].role, "lead");
}

#[tokio::test]
async fn list_members_unknown_project_is_not_found() {
    let pool = db::test_pool().await;

    let err = list_members(&pool, 42).await.unwrap_err();
    assert!(matches!(err, ProjectError::ProjectNotFound(42)));
}

#[tokio::test]
async fn add_member_requires_existing_user() {
    let pool = db::test_pool().await;

    let err = add_member(&pool, 1, 99, "modeler").await.unwrap_err();
    assert!(matches!(err, ProjectError::UserNotFound(99)));
}

#[tokio::test]
async fn add_member_returns_joined_row() {
    let pool = db::test_pool().await;

    let project = create_project(&pool, "Second", None, "2025-05-01").await.unwrap();
    let member = add_member(&pool, project.id, 2, "lead").await.unwrap();
    assert_eq!(member.username, "sam");
    assert_eq!(member.role, "lead");

    let members = list_members(&pool, project.id).await.unwrap();
    assert_eq!(members.len(), 1);
}

#[tokio::test]
async fn list_milestones_preserves_completion_flags() {
    let pool = db::test_pool().await;

    let milestones = list_milestones(&pool, 1).await.unwrap();
    assert_eq!(milestones.len(), 4);
    assert!(milestones[0].completed);
    assert!(!milestones[1].completed);
}

#[tokio::test]
async fn create_milestone_starts_incomplete() {
    let pool = db::test_pool().await;

    let row = create_milestone(&pool, 1, "Polish pass", None, Some("2025-03-10"))
        .await
        .unwrap();
    assert!(!row.completed);
    assert_eq!(row.project_id, 1);

    let milestones = list_milestones(&pool, 1).await.unwrap();
    assert_eq!(milestones.len(), 5);
    assert_eq!(milestones[4].name, "Polish pass");
}
