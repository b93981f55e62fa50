//! # client
//!
//! Browser bindings for the HomeHub listing core: `localStorage` as the
//! storage port, the page URL as the search seed, and the REST record store
//! as the property client.
//!
//! Everything browser-specific sits behind the `hydrate` feature. Without it
//! the adapters compile to inert fallbacks so the crate still builds and
//! tests natively.

pub mod net;
pub mod state;
pub mod util;

/// WASM entry point: panic hook plus console logging.
///
/// `listings` logs through `tracing`; with no subscriber installed, its
/// `log` bridge forwards those events to the console logger set up here.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(error) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&error.to_string().into());
    }
}
