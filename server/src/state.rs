//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! The demo backend is a thin CRUD layer, so the state is just the
//! database pool; the pool is `Any`-flavored so the same binary runs
//! against SQLite in development and Postgres in production.

use sqlx::AnyPool;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub pool: AnyPool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: AnyPool) -> Self {
        Self { pool }
    }
}
