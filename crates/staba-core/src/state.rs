//! Application state: the loaded posts and the active search.

use std::sync::Arc;

use tracing::error;

use crate::{error::LoadError, filter::filter_posts, post::Post, source::LoadedPosts};

/// In-memory blog state.
///
/// Populated once at startup and afterwards changed only by the search
/// accessors. `filtered` shares its allocation with `posts` while the query
/// is blank.
#[derive(Debug, Clone)]
pub struct BlogState {
    posts: Arc<[Post]>,
    filtered: Arc<[Post]>,
    query: String,
    loaded: bool,
}

impl BlogState {
    /// Empty, not yet loaded state.
    pub fn new() -> Self {
        let posts: Arc<[Post]> = Arc::from(Vec::new());
        Self {
            filtered: Arc::clone(&posts),
            posts,
            query: String::new(),
            loaded: false,
        }
    }

    /// All posts, newest first.
    pub fn posts(&self) -> &Arc<[Post]> {
        &self.posts
    }

    /// Posts matching the active query.
    pub fn filtered(&self) -> &Arc<[Post]> {
        &self.filtered
    }

    /// The raw query last applied.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Whether posts were loaded successfully.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Find a post by slug in the full, unfiltered set.
    pub fn find_post(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.slug == slug)
    }

    /// Install a sorted post list and mark the state loaded.
    pub fn install_posts(&mut self, posts: Vec<Post>) {
        self.posts = Arc::from(posts);
        self.filtered = filter_posts(&self.posts, &self.query);
        self.loaded = true;
    }

    /// Clear all posts after a failed load.
    ///
    /// The loaded flag stays unset so a later attempt may retry.
    pub fn fail_load(&mut self) {
        self.posts = Arc::from(Vec::new());
        self.filtered = Arc::clone(&self.posts);
    }

    /// Apply the outcome of a load attempt. Failures are logged, not returned.
    pub fn finish_load(&mut self, outcome: Result<LoadedPosts, LoadError>) {
        match outcome {
            Ok(loaded) => self.install_posts(loaded.posts),
            Err(err) => {
                error!(error = %err, "failed to load posts, showing empty list");
                self.fail_load();
            }
        }
    }

    /// Re-filter with a new query.
    pub fn apply_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.filtered = filter_posts(&self.posts, query);
    }

    /// Reset the query and show every post.
    pub fn clear_query(&mut self) {
        self.query.clear();
        self.filtered = Arc::clone(&self.posts);
    }
}

impl Default for BlogState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::DataSource;

    fn sorted_posts() -> Vec<Post> {
        vec![
            Post::new("b", "Spring Mix")
                .with_date("2024-03-01")
                .with_tags(["seasonal", "new"]),
            Post::new("a", "Winter Blend")
                .with_date("2024-01-01")
                .with_tags(["seasonal"]),
        ]
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = BlogState::new();
        assert!(state.posts().is_empty());
        assert!(state.filtered().is_empty());
        assert!(!state.is_loaded());
    }

    #[test]
    fn test_install_posts_shares_allocation() {
        let mut state = BlogState::new();
        state.install_posts(sorted_posts());
        assert!(state.is_loaded());
        assert!(Arc::ptr_eq(state.posts(), state.filtered()));
    }

    #[test]
    fn test_apply_and_clear_query() {
        let mut state = BlogState::new();
        state.install_posts(sorted_posts());

        state.apply_query("NEW");
        assert_eq!(state.query(), "NEW");
        assert_eq!(state.filtered().len(), 1);
        assert_eq!(state.filtered()[0].slug, "b");

        state.clear_query();
        assert_eq!(state.query(), "");
        assert!(Arc::ptr_eq(state.posts(), state.filtered()));
    }

    #[test]
    fn test_find_post_ignores_filter() {
        let mut state = BlogState::new();
        state.install_posts(sorted_posts());
        state.apply_query("new");

        let post = state.find_post("a").unwrap();
        assert_eq!(post.title, "Winter Blend");
        assert!(state.find_post("zzz").is_none());
    }

    #[test]
    fn test_finish_load_success() {
        let mut state = BlogState::new();
        state.apply_query("new");
        state.finish_load(Ok(LoadedPosts {
            posts: sorted_posts(),
            source: DataSource::inline("posts-data"),
        }));
        assert!(state.is_loaded());
        assert_eq!(state.posts().len(), 2);
        assert_eq!(state.filtered().len(), 1);
    }

    #[test]
    fn test_finish_load_failure_empties_state() {
        let mut state = BlogState::new();
        state.install_posts(sorted_posts());
        state.finish_load(Err(LoadError::NoSource));
        assert!(state.posts().is_empty());
        assert!(state.filtered().is_empty());
    }
}
