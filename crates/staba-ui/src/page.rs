//! Page-level layout: header and the routed content area.

use leptos::prelude::*;
use staba_core::{Page, PostPage};
use web_sys::MouseEvent;

use crate::{
    article::{Article, NotFound},
    list::PostList,
};

/// Site header with the title link and the search bar as children.
#[component]
pub fn SiteHeader(
    /// Site title.
    title: String,
    /// Called when the title link is clicked.
    #[prop(into)]
    on_home: Callback<()>,
    /// Header contents after the title.
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        on_home.run(());
    };

    view! {
      <header class="site-header">
        <a class="brand" href="#/" on:click=on_click>
          {title}
        </a>
        {children()}
      </header>
    }
}

/// Renders whichever page the current route resolved to.
#[component]
pub fn PageView(
    /// The resolved page; `None` while posts are loading.
    #[prop(into)]
    page: Signal<Option<Page>>,
    /// Back control of the article view.
    #[prop(into)]
    on_back: Callback<()>,
    /// Back link of the not-found view.
    #[prop(into)]
    on_home: Callback<()>,
) -> impl IntoView {
    view! {
      <main id="app">
        {move || match page.get() {
          None => ().into_any(),
          Some(Page::List(list)) => view! { <PostList page=list /> }.into_any(),
          Some(Page::Post(PostPage::Article(article))) => {
            view! { <Article article=article on_back=on_back /> }.into_any()
          }
          Some(Page::Post(PostPage::NotFound { message, back_href, back_label })) => {
            view! {
              <NotFound
                message=message
                back_href=back_href
                back_label=back_label
                on_back=on_home
              />
            }
              .into_any()
          }
        }}
      </main>
    }
}
