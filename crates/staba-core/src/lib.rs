//! Staba Core Library
//!
//! Post model, data loading, search filtering, hash routing and page
//! resolution for the Staba Blog client. Nothing here touches the DOM; the
//! browser crates supply a [`SourceReader`] and a [`HashLocation`].

pub mod config;
pub mod date;
pub mod error;
pub mod filter;
pub mod html;
pub mod placeholder;
pub mod post;
pub mod render;
pub mod router;
pub mod source;
pub mod state;

pub use config::Config;
pub use date::{DateFormatter, parse_date};
pub use error::{CoreError, LoadError, Result};
pub use filter::{filter_posts, normalize_query};
pub use html::TrustedHtml;
pub use post::{Post, sort_posts};
pub use render::{ArticleView, ListPage, Page, PostCard, PostPage, Renderer};
pub use router::{HashLocation, Navigation, Route, Router};
pub use source::{DataSource, LoadedPosts, SourceReader, load_posts};
pub use state::BlogState;
