//! UI components for the assistant demo.

pub mod chat_panel;
pub mod console_panel;
pub mod dashboard;
pub mod demo_nav;
pub mod loading_console;
pub mod viewer_panel;
