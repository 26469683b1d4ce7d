//! Small client-side utilities: cancellation tokens and clock access.

pub mod cancel;
pub mod time;
