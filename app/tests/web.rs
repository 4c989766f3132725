//! Browser tests for the DOM bindings.
//!
//! Run with `wasm-pack test --headless --firefox app`.

#![cfg(target_arch = "wasm32")]

use staba_app::{BrowserReader, WindowLocation, reader::read_inline};
use staba_core::{DataSource, HashLocation, Navigation, Route, Router, SourceReader};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn insert_inline(id: &str, text: &str) {
    let document = web_sys::window().unwrap().document().unwrap();
    let element = document.create_element("script").unwrap();
    element.set_id(id);
    element.set_attribute("type", "application/json").unwrap();
    element.set_text_content(Some(text));
    document.body().unwrap().append_child(&element).unwrap();
}

#[wasm_bindgen_test]
fn test_read_inline_present() {
    insert_inline("posts-test-present", r#"[{"slug": "a"}]"#);
    let text = read_inline("posts-test-present").unwrap();
    assert_eq!(text.as_deref(), Some(r#"[{"slug": "a"}]"#));
}

#[wasm_bindgen_test]
fn test_read_inline_missing() {
    assert_eq!(read_inline("posts-test-missing").unwrap(), None);
}

#[wasm_bindgen_test]
async fn test_browser_reader_inline() {
    insert_inline("posts-test-reader", "[]");
    let text = BrowserReader
        .read(&DataSource::inline("posts-test-reader"))
        .await
        .unwrap();
    assert_eq!(text.as_deref(), Some("[]"));
}

#[wasm_bindgen_test]
fn test_window_location_round_trip() {
    let location = WindowLocation;
    location.set_hash("#/post/abc-123");
    assert_eq!(location.hash(), "#/post/abc-123");
    assert_eq!(Router::new(location).current(), Route::post("abc-123"));
}

#[wasm_bindgen_test]
fn test_navigate_to_current_hash_rerenders() {
    let location = WindowLocation;
    location.set_hash("#/");
    let router = Router::new(location);
    assert_eq!(
        router.navigate(&Route::List),
        Navigation::Rerender(Route::List)
    );
    assert_eq!(router.navigate(&Route::post("a")), Navigation::Pending);
    assert_eq!(location.hash(), "#/post/a");
}
