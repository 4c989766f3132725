//! Application store shared through Leptos context.

use leptos::prelude::*;
use staba_core::{
    BlogState, DataSource, LoadError, LoadedPosts, Page, Renderer, Route, SourceReader, load_posts,
};

/// Reactive handle on the blog state and the displayed route.
///
/// `route` is `None` until the initial load has settled, which keeps the
/// content area blank while posts are loading.
#[derive(Clone, Copy)]
pub struct BlogStore {
    state: RwSignal<BlogState>,
    route: RwSignal<Option<Route>>,
    renderer: StoredValue<Renderer>,
}

impl BlogStore {
    /// Create a store with empty state.
    pub fn new(renderer: Renderer) -> Self {
        Self {
            state: RwSignal::new(BlogState::new()),
            route: RwSignal::new(None),
            renderer: StoredValue::new(renderer),
        }
    }

    /// Whether posts were loaded (untracked).
    pub fn is_loaded(&self) -> bool {
        self.state.with_untracked(BlogState::is_loaded)
    }

    /// Load posts through the source chain unless already loaded.
    ///
    /// Never fails: a load error leaves the state empty and is logged.
    pub async fn ensure_loaded<R: SourceReader>(&self, reader: &R, sources: &[DataSource]) {
        if self.is_loaded() {
            return;
        }
        let outcome = load_posts(reader, sources).await;
        self.finish_load(outcome);
    }

    /// Apply the outcome of the initial load.
    pub fn finish_load(&self, outcome: Result<LoadedPosts, LoadError>) {
        self.state.update(|state| state.finish_load(outcome));
    }

    /// Re-filter and show the list.
    pub fn search(&self, query: &str) {
        self.state.update(|state| state.apply_query(query));
        self.route.set(Some(Route::List));
    }

    /// Reset the search and show the list.
    pub fn clear_search(&self) {
        self.state.update(BlogState::clear_query);
        self.route.set(Some(Route::List));
    }

    /// Display a route.
    pub fn show(&self, route: Route) {
        self.route.set(Some(route));
    }

    /// The active query (tracked).
    pub fn query(&self) -> String {
        self.state.with(|state| state.query().to_string())
    }

    /// The displayed route (tracked).
    pub fn route(&self) -> Option<Route> {
        self.route.get()
    }

    /// The page for the displayed route (tracked).
    pub fn page(&self) -> Option<Page> {
        let route = self.route.get()?;
        let page = self
            .state
            .with(|state| self.renderer.with_value(|renderer| renderer.page(&route, state)));
        Some(page)
    }
}

/// Make the store available to descendants.
pub fn provide_store(store: BlogStore) {
    provide_context(store);
}

/// The store provided by [`App`](crate::App).
///
/// # Panics
///
/// Panics when called outside the `App` component tree.
pub fn use_store() -> BlogStore {
    expect_context::<BlogStore>()
}
