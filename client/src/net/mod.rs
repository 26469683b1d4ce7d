//! REST types and helpers for the project CRUD API.

pub mod api;
pub mod types;
