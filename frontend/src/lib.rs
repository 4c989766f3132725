//! Staba Blog WASM entry point.
//!
//! Build with `trunk build --release` from this directory.

use leptos::prelude::*;
use staba_app::App;
use staba_core::Config;
use wasm_bindgen::prelude::*;

/// Configuration compiled into the bundle.
const BLOG_TOML: &str = include_str!("../blog.toml");

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match Config::from_toml_str(BLOG_TOML) {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    let level = config
        .site
        .log_level
        .parse::<log::Level>()
        .unwrap_or(log::Level::Info);
    // A second init only happens when the module is started twice
    let _ = console_log::init_with_level(level);

    if let Some(err) = config_error {
        log::error!("invalid blog.toml, using defaults: {err}");
    }
    log::info!("starting {}", config.site.title);

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
