//! Hash-fragment routing.
//!
//! Two routes exist: `#/` for the post list and `#/post/<slug>` for a single
//! post, where the slug is `[a-z0-9-]+`. Anything else falls back to the list.

use std::{fmt, sync::LazyLock};

use regex::Regex;
use tracing::debug;

static ROUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#/(?:post/([a-z0-9-]+))?$").expect("route pattern is a valid regex")
});

/// A render mode selected by the URL hash.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// The post list.
    #[default]
    List,
    /// A single post, by slug.
    Post(String),
}

impl Route {
    /// Parse a hash fragment such as `#/post/spring-mix`.
    ///
    /// An empty hash is treated as `#/`.
    pub fn from_hash(hash: &str) -> Self {
        let hash = if hash.is_empty() { "#/" } else { hash };
        ROUTE_PATTERN
            .captures(hash)
            .and_then(|caps| caps.get(1))
            .map(|slug| Self::Post(slug.as_str().to_string()))
            .unwrap_or(Self::List)
    }

    /// Route to a single post.
    pub fn post(slug: impl Into<String>) -> Self {
        Self::Post(slug.into())
    }

    /// The canonical hash fragment for this route.
    pub fn to_hash(&self) -> String {
        match self {
            Self::List => "#/".to_string(),
            Self::Post(slug) => format!("#/post/{slug}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hash())
    }
}

/// Read/write access to the current URL hash.
pub trait HashLocation {
    /// Current hash including the leading `#`, or empty.
    fn hash(&self) -> String;

    /// Replace the hash. Browsers fire `hashchange` when the value changes.
    fn set_hash(&self, hash: &str);
}

/// What the caller must do after a navigation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The hash changed; the change notification will re-route.
    Pending,
    /// The hash was already the target; no notification will fire, so the
    /// caller must render this route itself.
    Rerender(Route),
}

/// Maps the location hash to routes and performs navigation.
#[derive(Debug, Clone, Copy)]
pub struct Router<L> {
    location: L,
}

impl<L: HashLocation> Router<L> {
    /// Create a router over a hash location.
    pub fn new(location: L) -> Self {
        Self { location }
    }

    /// The route for the current hash.
    pub fn current(&self) -> Route {
        let hash = self.location.hash();
        let route = Route::from_hash(&hash);
        debug!(hash = %hash, route = %route, "resolved route");
        route
    }

    /// Navigate to a route.
    pub fn navigate(&self, target: &Route) -> Navigation {
        let hash = target.to_hash();
        if self.location.hash() == hash {
            debug!(route = %target, "already at route, forcing render");
            Navigation::Rerender(target.clone())
        } else {
            self.location.set_hash(&hash);
            Navigation::Pending
        }
    }

    /// The underlying location.
    pub fn location(&self) -> &L {
        &self.location
    }
}
