//! Top-level routed pages.

pub mod assistant;
pub mod console_demo;
pub mod loading_demo;
