//! UI-state orchestration engine for the 3D project assistant demo.
//!
//! This crate holds every piece of the demo that behaves like a state
//! machine: the intent rule table, the keyword context classifier, the
//! simulated response generator, the chat session log, the typing
//! animation, the dashboard visibility reducer, and the scripted log
//! player used by the console and model-loading simulations. Nothing in
//! here touches the browser or schedules a timer; the `client` crate
//! drives the async parts (artificial latency, typing ticks, scripted
//! delays) and feeds results back in.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`rules`] | Ordered intent rule table, first-match-wins |
//! | [`classify`] | Secondary keyword context classifier |
//! | [`responder`] | Simulated response generation with seedable RNG |
//! | [`session`] | Chat message log and conversation history |
//! | [`typing`] | Character-by-character reveal state machine |
//! | [`visibility`] | Dashboard panel/tab visibility reducer |
//! | [`script`] | Scripted log sequences and progressive-load expansion |
//! | [`player`] | Append-only log/progress state for a playing script |
//! | [`consts`] | Shared timing constants and canned text |

pub mod classify;
pub mod consts;
pub mod player;
pub mod responder;
pub mod rules;
pub mod script;
pub mod session;
pub mod typing;
pub mod visibility;
