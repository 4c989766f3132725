//! Staba Blog browser application.
//!
//! Wires the core logic to the browser: posts are read from the page or
//! fetched, the URL hash drives routing, and the search bar filters the list.

pub mod location;
pub mod reader;
pub mod store;

use leptos::{prelude::*, task::spawn_local};
use staba_core::{Config, Navigation, Renderer, Route, Router};
use staba_ui::{PageView, SearchBar, SiteHeader};

pub use location::{WindowLocation, history_back, on_hash_change};
pub use reader::BrowserReader;
pub use store::{BlogStore, provide_store, use_store};

/// Root component.
///
/// Binds the `hashchange` listener, starts the one-off post load and routes
/// from the current hash once it settles.
#[component]
pub fn App(
    /// Parsed blog configuration.
    config: Config,
) -> impl IntoView {
    let store = BlogStore::new(Renderer::new(&config));
    provide_store(store);

    let router = Router::new(WindowLocation);

    on_hash_change(move || store.show(router.current()));

    let sources = config.data.sources.clone();
    spawn_local(async move {
        store.ensure_loaded(&BrowserReader, &sources).await;
        store.show(router.current());
    });

    let go_home = Callback::new(move |()| {
        if let Navigation::Rerender(route) = router.navigate(&Route::List) {
            store.show(route);
        }
    });
    let go_back = Callback::new(move |()| history_back());

    view! {
      <SiteHeader title=config.site.title.clone() on_home=go_home>
        <Search
          placeholder=config.display.search_placeholder.clone()
          clear_label=config.display.clear_label.clone()
        />
      </SiteHeader>
      <PageView page=Signal::derive(move || store.page()) on_back=go_back on_home=go_home />
    }
}

/// Search bar bound to the store.
#[component]
fn Search(placeholder: String, clear_label: String) -> impl IntoView {
    let store = use_store();

    view! {
      <SearchBar
        query=Signal::derive(move || store.query())
        on_input=move |query: String| store.search(&query)
        on_clear=move |()| store.clear_search()
        placeholder=placeholder
        clear_label=clear_label
      />
    }
}
