//! Error types for the Staba core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Staba Blog.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration parsing or validation error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Failure while reading or decoding post data from a source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// Request failed or returned a non-success status.
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// Source content is not a JSON array of posts.
    #[error("Parse error in {source_name}: {message}")]
    Parse {
        source_name: String,
        message: String,
    },

    /// The host document could not be accessed.
    #[error("Document error: {0}")]
    Document(String),

    /// Every configured source was absent or empty.
    #[error("No post data source produced any content")]
    NoSource,
}

impl LoadError {
    /// Create a new network error.
    pub fn network(url: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Network {
            url: url.into(),
            message: message.into(),
        }
    }

    /// Create a new parse error.
    pub fn parse(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Parse {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Create a new document error.
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document(message.into())
    }
}
