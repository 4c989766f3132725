//! Staba UI Components
//!
//! Leptos components for the Staba Blog frontend. They lay out the view
//! models produced by [`staba_core::Renderer`] and report user actions
//! through callbacks; they hold no application state of their own.
//!
//! # Components
//!
//! ## Search
//! - [`SearchBar`] - Search input with clear button
//!
//! ## List
//! - [`PostList`] - Card grid or empty-state message
//! - [`Card`] - Post card with thumbnail, date and tags
//! - [`TagBadges`] - `#tag` badges
//!
//! ## Article
//! - [`Article`] - Full post with back control
//! - [`NotFound`] - Unknown slug message with a link back to the list
//!
//! ## Page
//! - [`SiteHeader`] - Title link plus header children
//! - [`PageView`] - Dispatches a resolved [`staba_core::Page`]

pub mod article;
pub mod list;
pub mod page;
pub mod search;

pub use article::{Article, NotFound, meta_line};
pub use list::{Card, PostList, TagBadges, tag_badge};
pub use page::{PageView, SiteHeader};
pub use search::SearchBar;
