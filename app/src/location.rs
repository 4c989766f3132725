//! The window's URL hash and history.

use staba_core::HashLocation;
use wasm_bindgen::{JsCast, prelude::*};

/// `window.location.hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowLocation;

impl HashLocation for WindowLocation {
    fn hash(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().hash().ok())
            .unwrap_or_default()
    }

    fn set_hash(&self, hash: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.location().set_hash(hash) {
            log::warn!("failed to set location hash {hash}: {err:?}");
        }
    }
}

/// Go one step back in the session history.
pub fn history_back() {
    let result = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))
        .and_then(|window| window.history())
        .and_then(|history| history.back());
    if let Err(err) = result {
        log::warn!("history.back failed: {err:?}");
    }
}

/// Register `handler` for `hashchange` on the window.
///
/// The listener lives for the rest of the page; there is no way to remove it.
pub fn on_hash_change(handler: impl Fn() + 'static) {
    let Some(window) = web_sys::window() else {
        log::warn!("no window, hashchange listener not installed");
        return;
    };

    let closure = Closure::<dyn Fn()>::new(handler);
    if let Err(err) =
        window.add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref())
    {
        log::warn!("failed to add hashchange listener: {err:?}");
    }

    // Leak the closure to keep it alive
    closure.forget();
}
