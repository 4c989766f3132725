//! Reads post data from the host page or over HTTP.

use gloo_net::http::Request;
use staba_core::{DataSource, LoadError, SourceReader};
use web_sys::RequestCache;

/// Source reader backed by the browser document and `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserReader;

impl SourceReader for BrowserReader {
    async fn read(&self, source: &DataSource) -> Result<Option<String>, LoadError> {
        match source {
            DataSource::Inline { element_id } => read_inline(element_id),
            DataSource::Fetch { url } => fetch_text(url).await.map(Some),
        }
    }
}

/// Text content of an element, or `None` when there is no such element.
pub fn read_inline(element_id: &str) -> Result<Option<String>, LoadError> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| LoadError::document("no document available"))?;

    Ok(document
        .get_element_by_id(element_id)
        .and_then(|element| element.text_content()))
}

/// GET a URL with the HTTP cache bypassed.
pub async fn fetch_text(url: &str) -> Result<String, LoadError> {
    let response = Request::get(url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| LoadError::network(url, e.to_string()))?;

    if !response.ok() {
        return Err(LoadError::network(
            url,
            format!("HTTP {}", response.status()),
        ));
    }

    response
        .text()
        .await
        .map_err(|e| LoadError::network(url, format!("Failed to read response: {e}")))
}
