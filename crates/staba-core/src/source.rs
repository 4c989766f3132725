//! Post data sources and the loading chain.
//!
//! Sources are tried in order. Absent or blank sources are skipped; the
//! first source with content is parsed, and a failure there is final.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    error::LoadError,
    post::{Post, duplicate_slugs, sort_posts},
};

/// Element id of the inline JSON block in the host page.
pub const DEFAULT_INLINE_ELEMENT: &str = "posts-data";

/// Relative URL of the posts document.
pub const DEFAULT_FETCH_URL: &str = "posts/posts.json";

/// Where post data can come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum DataSource {
    /// Text content of an element embedded in the host document.
    Inline { element_id: String },
    /// A JSON document fetched over HTTP with caching disabled.
    Fetch { url: String },
}

impl DataSource {
    /// Inline source for an element id.
    pub fn inline(element_id: impl Into<String>) -> Self {
        Self::Inline {
            element_id: element_id.into(),
        }
    }

    /// Fetch source for a URL.
    pub fn fetch(url: impl Into<String>) -> Self {
        Self::Fetch { url: url.into() }
    }

    /// Default chain: the inline block, then the JSON file.
    pub fn default_chain() -> Vec<Self> {
        vec![
            Self::inline(DEFAULT_INLINE_ELEMENT),
            Self::fetch(DEFAULT_FETCH_URL),
        ]
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inline { element_id } => write!(f, "#{element_id}"),
            Self::Fetch { url } => f.write_str(url),
        }
    }
}

/// Reads raw text from a data source.
///
/// `Ok(None)` means the source is absent and the next one should be tried.
#[allow(async_fn_in_trait)]
pub trait SourceReader {
    /// Read the raw JSON text of a source.
    async fn read(&self, source: &DataSource) -> Result<Option<String>, LoadError>;
}

/// Posts obtained from the first successful source.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedPosts {
    /// Posts sorted newest first.
    pub posts: Vec<Post>,

    /// The source that produced them.
    pub source: DataSource,
}

/// Parse a JSON array of posts.
pub fn parse_posts(json: &str, source_name: &str) -> Result<Vec<Post>, LoadError> {
    serde_json::from_str(json).map_err(|e| LoadError::parse(source_name, e.to_string()))
}

/// Walk the sources in order and parse the first one that has content.
///
/// Absent or blank sources are skipped. The first source with content
/// decides the outcome: its read or parse error ends the chain. When every
/// source is absent the error is [`LoadError::NoSource`].
pub async fn load_posts<R: SourceReader>(
    reader: &R,
    sources: &[DataSource],
) -> Result<LoadedPosts, LoadError> {
    for source in sources {
        let text = match reader.read(source).await {
            Ok(Some(text)) if !text.trim().is_empty() => text,
            Ok(_) => {
                debug!(source = %source, "source absent or empty, trying next");
                continue;
            }
            Err(err) => {
                warn!(source = %source, error = %err, "failed to read post source");
                return Err(err);
            }
        };

        let mut posts = parse_posts(&text, &source.to_string()).inspect_err(|err| {
            warn!(source = %source, error = %err, "failed to parse post source");
        })?;

        sort_posts(&mut posts);
        for slug in duplicate_slugs(&posts) {
            warn!(slug, "duplicate post slug, only the first is reachable");
        }
        info!(source = %source, count = posts.len(), "loaded posts");
        return Ok(LoadedPosts {
            posts,
            source: source.clone(),
        });
    }

    Err(LoadError::NoSource)
}
