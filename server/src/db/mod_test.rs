use super::*;

#[test]
fn backend_detects_sqlite_urls() {
    assert_eq!(backend("sqlite://assistant.db?mode=rwc"), Backend::Sqlite);
    assert_eq!(backend("sqlite::memory:"), Backend::Sqlite);
}

#[test]
fn backend_defaults_to_postgres() {
    assert_eq!(backend("postgres://user:pw@localhost/db"), Backend::Postgres);
    assert_eq!(backend("postgresql://localhost/db"), Backend::Postgres);
}

#[test]
fn backend_name_matches_backend() {
    assert_eq!(backend_name("sqlite::memory:"), "sqlite");
    assert_eq!(backend_name("postgres://localhost/db"), "postgres");
}

#[tokio::test]
async fn schema_and_seed_produce_demo_project() {
    let pool = test_pool().await;

    let (projects,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(projects, 1);

    let (members,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM project_members")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(members, 4);

    let (files,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM files")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(files, 3);
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let pool = test_pool().await;

    seed_demo_data(&pool).await.unwrap();

    let (projects,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(projects, 1);
}

#[tokio::test]
async fn schema_creation_is_idempotent() {
    let pool = test_pool().await;
    create_schema(&pool, Backend::Sqlite).await.unwrap();
}
