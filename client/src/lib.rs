//! Leptos client for the cookie-session auth stack.
//!
//! ARCHITECTURE
//! ============
//! `app` owns the session store and provides it via context; `pages` render
//! route-level screens; `net` talks to the server's auth API; `util` holds
//! the route-guard logic shared by protected pages.

pub mod app;
pub mod components;
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
