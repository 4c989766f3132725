//! Free-text filtering over post metadata.
//!
//! Matching is a case-insensitive substring test against the title, excerpt
//! and tags of each post. Body content is not searched.

use std::sync::Arc;

use crate::post::Post;

/// Trim and lowercase a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Check a post against an already normalized query.
pub fn matches(post: &Post, normalized: &str) -> bool {
    post.haystack().contains(normalized)
}

/// Filter posts by a raw query.
///
/// A blank query returns `posts` itself (the same allocation), otherwise a
/// new list with the matching posts in their original order.
pub fn filter_posts(posts: &Arc<[Post]>, query: &str) -> Arc<[Post]> {
    let normalized = normalize_query(query);
    if normalized.is_empty() {
        return Arc::clone(posts);
    }

    posts
        .iter()
        .filter(|post| matches(post, &normalized))
        .cloned()
        .collect()
}
