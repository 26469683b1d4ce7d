//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The chat session and the dashboard visibility state are each owned
//! by one `RwSignal` provided via context from the app root; all
//! mutation happens on the single UI thread through those signals.

pub mod chat;
