//! Service layer: database-facing operations behind the route handlers.

pub mod file;
pub mod project;
