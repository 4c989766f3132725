//! Single post view.
//!
//! The body of an [`ArticleView`] is a [`staba_core::TrustedHtml`] and is
//! the only markup this crate injects without escaping.

use leptos::prelude::*;
use staba_core::ArticleView;
use web_sys::MouseEvent;

/// Meta line under the hero image: date and tag line.
pub fn meta_line(article: &ArticleView) -> String {
    format!("{} · {}", article.date, article.tag_line())
}

/// Full article with a back control.
#[component]
pub fn Article(
    /// The article to render.
    article: ArticleView,
    /// Called when the back control is clicked.
    #[prop(into)]
    on_back: Callback<()>,
) -> impl IntoView {
    let meta = meta_line(&article);
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        on_back.run(());
    };

    view! {
      <a class="back" href=article.back_href on:click=on_click>
        {article.back_label}
      </a>
      <article class="article">
        <img class="hero" src=article.hero alt=article.title.clone() />
        <div class="article-body">
          <div class="meta">{meta}</div>
          <h1>{article.title}</h1>
          <p class="meta">{article.excerpt}</p>
          <hr class="divider" />
          <div class="content" inner_html=article.content.into_inner()></div>
        </div>
      </article>
    }
}

/// Shown when no post matches the requested slug.
#[component]
pub fn NotFound(
    /// Message to show.
    message: String,
    /// Href of the list view.
    back_href: String,
    /// Label of the back link.
    back_label: String,
    /// Called when the back link is clicked.
    #[prop(into)]
    on_back: Callback<()>,
) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        ev.prevent_default();
        on_back.run(());
    };

    view! {
      <div class="empty">
        {message}
        <br />
        <a class="back" href=back_href on:click=on_click>
          {back_label}
        </a>
      </div>
    }
}
