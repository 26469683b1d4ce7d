//! # client
//!
//! Leptos + WASM front end for the 3D project assistant demo. The chat
//! panel feeds user text through the `assistant` crate's orchestration
//! engine; matched responses reveal dashboard panels and drive the
//! mocked viewer/console simulations. This crate owns everything
//! timer-shaped: the artificial response latency, the typing animation
//! ticks, and the scripted log players.

pub mod app;
pub mod components;
pub mod driver;
pub mod llm;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
