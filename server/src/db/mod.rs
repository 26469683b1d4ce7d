//! Database initialization: pool, schema, and demo seed data.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same binary runs against SQLite in development and Postgres in
//! production, so the pool is `Any`-flavored and the schema ships as
//! two DDL scripts. All queries elsewhere use `$N` placeholders, which
//! both backends accept.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use sqlx::AnyPool;
use sqlx::any::AnyPoolOptions;

const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

/// Database backend selected by the connection URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Sqlite,
    Postgres,
}

/// Detect the backend from a connection URL. Anything that is not
/// SQLite is treated as Postgres.
#[must_use]
pub fn backend(database_url: &str) -> Backend {
    if database_url.starts_with("sqlite") { Backend::Sqlite } else { Backend::Postgres }
}

#[must_use]
pub fn backend_name(database_url: &str) -> &'static str {
    match backend(database_url) {
        Backend::Sqlite => "sqlite",
        Backend::Postgres => "postgres",
    }
}

fn db_max_connections() -> u32 {
    std::env::var("DB_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
}

/// Initialize the connection pool, create the schema, and seed demo
/// data on first run.
///
/// # Errors
///
/// Returns an error if the connection, schema creation, or seeding
/// fails.
pub async fn init_pool(database_url: &str) -> Result<AnyPool, sqlx::Error> {
    sqlx::any::install_default_drivers();

    let pool = AnyPoolOptions::new()
        .max_connections(db_max_connections())
        .connect(database_url)
        .await?;

    create_schema(&pool, backend(database_url)).await?;
    seed_demo_data(&pool).await?;

    Ok(pool)
}

async fn create_schema(pool: &AnyPool, backend: Backend) -> Result<(), sqlx::Error> {
    let ddl = match backend {
        Backend::Sqlite => SCHEMA_SQLITE,
        Backend::Postgres => SCHEMA_POSTGRES,
    };
    for statement in ddl.split(';') {
        let statement = statement.trim();
        if statement.is_empty() {
            continue;
        }
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Seed the demo project on an empty database. Idempotent: a non-empty
/// `projects` table skips seeding entirely.
async fn seed_demo_data(pool: &AnyPool) -> Result<(), sqlx::Error> {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    tracing::info!("seeding demo project data");

    for (username, full_name, email, role) in SEED_USERS {
        sqlx::query(
            "INSERT INTO users (username, password, full_name, email, role)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(username)
        .bind("demo")
        .bind(full_name)
        .bind(email)
        .bind(role)
        .execute(pool)
        .await?;
    }

    sqlx::query(
        "INSERT INTO projects (name, description, start_date, end_date, status)
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind("Sci-Fi Robot")
    .bind("Game-ready sci-fi robot character: modeling, texturing, rigging, and animation.")
    .bind("2025-01-06")
    .bind("2025-03-06")
    .bind("active")
    .execute(pool)
    .await?;

    for (user_id, role) in SEED_MEMBERS {
        sqlx::query(
            "INSERT INTO project_members (project_id, user_id, role) VALUES ($1, $2, $3)",
        )
        .bind(1_i64)
        .bind(user_id)
        .bind(role)
        .execute(pool)
        .await?;
    }

    for (name, description, due_date, completed) in SEED_MILESTONES {
        sqlx::query(
            "INSERT INTO milestones (project_id, name, description, due_date, completed)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(1_i64)
        .bind(name)
        .bind(description)
        .bind(due_date)
        .bind(completed)
        .execute(pool)
        .await?;
    }

    for (name, file_type, extension, path, size) in SEED_FILES {
        sqlx::query(
            "INSERT INTO files (project_id, name, type, file_extension, path, size)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(1_i64)
        .bind(name)
        .bind(file_type)
        .bind(extension)
        .bind(path)
        .bind(size)
        .execute(pool)
        .await?;
    }

    for (file_id, version, path, size, change) in SEED_VERSIONS {
        sqlx::query(
            "INSERT INTO file_versions (file_id, version_number, path, size, change_description, created_at)
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(file_id)
        .bind(version)
        .bind(path)
        .bind(size)
        .bind(change)
        .bind("2025-01-20T10:00:00Z")
        .execute(pool)
        .await?;
    }

    Ok(())
}

/// In-memory SQLite pool with schema and seed data, for tests.
///
/// Single connection: each `sqlite::memory:` connection is its own
/// database.
#[cfg(test)]
pub(crate) async fn test_pool() -> AnyPool {
    sqlx::any::install_default_drivers();
    let pool = AnyPoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");
    create_schema(&pool, Backend::Sqlite).await.expect("schema");
    seed_demo_data(&pool).await.expect("seed");
    pool
}

// Booleans are stored as integers and timestamps as RFC 3339 text so
// the same queries decode identically on both backends.
const SCHEMA_SQLITE: &str = "
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    full_name TEXT NOT NULL,
    email TEXT NOT NULL,
    role TEXT DEFAULT 'member'
);
CREATE TABLE IF NOT EXISTS projects (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT,
    start_date TEXT NOT NULL,
    end_date TEXT,
    status TEXT DEFAULT 'active'
);
CREATE TABLE IF NOT EXISTS project_members (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    role TEXT DEFAULT 'member'
);
CREATE TABLE IF NOT EXISTS milestones (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    description TEXT,
    due_date TEXT,
    completed INTEGER NOT NULL DEFAULT 0
);
CREATE TABLE IF NOT EXISTS files (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    project_id INTEGER NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    type TEXT NOT NULL,
    file_extension TEXT NOT NULL,
    path TEXT NOT NULL,
    size INTEGER NOT NULL
);
CREATE TABLE IF NOT EXISTS file_versions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    file_id INTEGER NOT NULL REFERENCES files(id) ON DELETE CASCADE,
    version_number INTEGER NOT NULL,
    path TEXT NOT NULL,
    size INTEGER NOT NULL,
    change_description TEXT,
    created_at TEXT NOT NULL
)";

const SCHEMA_POSTGRES: &str = "
CREATE TABLE IF NOT EXISTS users (
    id BIGSERIAL PRIMARY KEY,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    full_name TEXT NOT NULL,
    email TEXT NOT NULL,
    role TEXT DEFAULT 'member'
);
CREATE TABLE IF NOT EXISTS projects (
    id BIGSERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT,
    start_date TEXT NOT NULL,
    end_date TEXT,
    status TEXT DEFAULT 'active'
);
CREATE TABLE IF NOT EXISTS project_members (
    id BIGSERIAL PRIMARY KEY,
    project_id BIGINT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    user_id BIGINT NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    role TEXT DEFAULT 'member'
);
CREATE TABLE IF NOT EXISTS milestones (
    id BIGSERIAL PRIMARY KEY,
    project_id BIGINT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    description TEXT,
    due_date TEXT,
    completed BIGINT NOT NULL DEFAULT 0
);
CREATE TABLE IF NOT EXISTS files (
    id BIGSERIAL PRIMARY KEY,
    project_id BIGINT NOT NULL REFERENCES projects(id) ON DELETE CASCADE,
    name TEXT NOT NULL,
    type TEXT NOT NULL,
    file_extension TEXT NOT NULL,
    path TEXT NOT NULL,
    size BIGINT NOT NULL
);
CREATE TABLE IF NOT EXISTS file_versions (
    id BIGSERIAL PRIMARY KEY,
    file_id BIGINT NOT NULL REFERENCES files(id) ON DELETE CASCADE,
    version_number BIGINT NOT NULL,
    path TEXT NOT NULL,
    size BIGINT NOT NULL,
    change_description TEXT,
    created_at TEXT NOT NULL
)";

const SEED_USERS: [(&str, &str, &str, &str); 4] = [
    ("alex", "Alex Rivera", "alex@example.com", "lead"),
    ("sam", "Sam Chen", "sam@example.com", "modeler"),
    ("jordan", "Jordan Blake", "jordan@example.com", "texture-artist"),
    ("casey", "Casey Morgan", "casey@example.com", "animator"),
];

const SEED_MEMBERS: [(i64, &str); 4] =
    [(1, "lead"), (2, "modeler"), (3, "texture-artist"), (4, "animator")];

const SEED_MILESTONES: [(&str, &str, &str, i64); 4] = [
    ("Concept and blockout", "Reference gathering and base mesh blockout", "2025-01-20", 1),
    ("High-poly modeling", "Detailed sculpt of base, arms, and head", "2025-02-03", 0),
    ("Texturing and materials", "PBR texture set at 2048px", "2025-02-17", 0),
    ("Rigging and animation", "Joint rig plus idle and walk cycles", "2025-03-03", 0),
];

const SEED_FILES: [(&str, &str, &str, &str, i64); 3] = [
    ("Robot_Base_v2.blend", "model", ".blend", "/models/robot_base.json", 331_776),
    ("Robot_Head.glb", "model", ".glb", "/models/robot_head.json", 540_672),
    ("Robot_Arm.fbx", "model", ".fbx", "/models/robot_arm.json", 667_648),
];

const SEED_VERSIONS: [(i64, i64, &str, i64, &str); 3] = [
    (1, 1, "/models/robot_base_v1.json", 296_960, "Initial blockout"),
    (1, 2, "/models/robot_base.json", 331_776, "Refined silhouette and added panel lines"),
    (2, 1, "/models/robot_head.json", 540_672, "Initial head sculpt"),
];
