//! Blog post records as they arrive in the JSON payload.

use std::{cmp::Reverse, collections::HashSet};

use serde::{Deserialize, Deserializer};

use crate::date::parse_date;

/// A single blog entry.
///
/// Every field is optional in the payload. Missing or `null` values fall back
/// to empty strings or an empty tag list so that a sparse record still renders.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// URL-safe identifier, unique across the loaded set.
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,

    /// Post title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    /// Publication date as an ISO-8601 string.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,

    /// Short summary shown under the title.
    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,

    /// Tags in display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Primary image URL.
    #[serde(default)]
    pub hero_image: Option<String>,

    /// Pre-rendered HTML body.
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

/// Deserialize `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Post {
    /// Create a post with a slug and title; other fields stay empty.
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Set the publication date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    /// Set the excerpt.
    pub fn with_excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    /// Set the tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the hero image URL.
    pub fn with_hero_image(mut self, url: impl Into<String>) -> Self {
        self.hero_image = Some(url.into());
        self
    }

    /// Set the HTML body.
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Lowercased search text: title, excerpt and tags joined by spaces.
    pub fn haystack(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(2 + self.tags.len());
        parts.push(&self.title);
        parts.push(&self.excerpt);
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ").to_lowercase()
    }

    /// Hash fragment that routes to this post.
    pub fn href(&self) -> String {
        format!("#/post/{}", self.slug)
    }
}

/// Sort posts newest first.
///
/// The sort is stable. Posts whose date cannot be parsed go after every
/// dated post and keep their relative order.
pub fn sort_posts(posts: &mut [Post]) {
    // `None` is the smallest key, so undated posts land last.
    posts.sort_by_cached_key(|post| Reverse(parse_date(&post.date)));
}

/// Slugs that appear more than once, in first-seen order.
pub fn duplicate_slugs(posts: &[Post]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for post in posts {
        if !seen.insert(post.slug.as_str()) && !duplicates.contains(&post.slug.as_str()) {
            duplicates.push(post.slug.as_str());
        }
    }
    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_deserialize_full() {
        let json = r#"{
            "slug": "spring-mix",
            "title": "Spring Mix",
            "date": "2024-03-01",
            "excerpt": "Fresh for spring",
            "tags": ["seasonal", "new"],
            "heroImage": "img/spring.jpg",
            "content": "<p>Hello</p>"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.slug, "spring-mix");
        assert_eq!(post.tags, vec!["seasonal", "new"]);
        assert_eq!(post.hero_image.as_deref(), Some("img/spring.jpg"));
        assert_eq!(post.content, "<p>Hello</p>");
    }

    #[test]
    fn test_post_deserialize_sparse() {
        let post: Post = serde_json::from_str(r#"{"slug": "a", "extra": 1}"#).unwrap();
        assert_eq!(post.slug, "a");
        assert!(post.title.is_empty());
        assert!(post.tags.is_empty());
        assert!(post.hero_image.is_none());
    }

    #[test]
    fn test_post_deserialize_nulls() {
        let json = r#"{
            "slug": "a",
            "title": null,
            "date": null,
            "excerpt": null,
            "tags": null,
            "heroImage": null,
            "content": null
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post, Post::new("a", ""));
    }

    #[test]
    fn test_haystack_joins_fields() {
        let post = Post::new("b", "Spring Mix")
            .with_excerpt("Bright Citrus")
            .with_tags(["Seasonal", "new"]);
        assert_eq!(post.haystack(), "spring mix bright citrus seasonal new");
    }

    #[test]
    fn test_haystack_keeps_separator_for_empty_excerpt() {
        let post = Post::new("b", "Spring Mix").with_tags(["seasonal"]);
        assert_eq!(post.haystack(), "spring mix  seasonal");
    }

    #[test]
    fn test_href() {
        assert_eq!(Post::new("abc-123", "x").href(), "#/post/abc-123");
    }

    #[test]
    fn test_sort_posts_newest_first() {
        let mut posts = vec![
            Post::new("a", "A").with_date("2024-01-01"),
            Post::new("b", "B").with_date("2024-03-01"),
            Post::new("c", "C").with_date("2023-12-31T23:00:00Z"),
        ];
        sort_posts(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_sort_posts_is_stable_on_ties() {
        let mut posts = vec![
            Post::new("first", "1").with_date("2024-01-01"),
            Post::new("second", "2").with_date("2024-01-01"),
            Post::new("third", "3").with_date("2024-01-01T00:00:00Z"),
        ];
        sort_posts(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_sort_posts_undated_last() {
        let mut posts = vec![
            Post::new("x", "X").with_date("someday"),
            Post::new("a", "A").with_date("2024-01-01"),
            Post::new("y", "Y"),
            Post::new("b", "B").with_date("2024-02-01"),
        ];
        sort_posts(&mut posts);
        let slugs: Vec<_> = posts.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a", "x", "y"]);
    }

    #[test]
    fn test_duplicate_slugs() {
        let posts = vec![
            Post::new("a", "1"),
            Post::new("b", "2"),
            Post::new("a", "3"),
            Post::new("a", "4"),
        ];
        assert_eq!(duplicate_slugs(&posts), vec!["a"]);
    }
}
