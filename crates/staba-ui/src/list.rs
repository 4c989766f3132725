//! Post list and cards.

use leptos::prelude::*;
use staba_core::{ListPage, PostCard};

/// Badge text for a tag.
pub fn tag_badge(tag: &str) -> String {
    format!("#{tag}")
}

/// The list view: a grid of cards, or the empty-state message.
#[component]
pub fn PostList(
    /// Resolved list page.
    page: ListPage,
) -> impl IntoView {
    match page {
        ListPage::Empty { message } => view! { <div class="empty">{message}</div> }.into_any(),
        ListPage::Cards { label, cards } => view! {
          <section class="grid" aria-label=label>
            {cards.into_iter().map(|card| view! { <Card card=card /> }).collect_view()}
          </section>
        }
        .into_any(),
    }
}

/// A single post card linking to the post view.
#[component]
pub fn Card(
    /// The card to display.
    card: PostCard,
) -> impl IntoView {
    view! {
      <article class="card" role="article">
        <a class="block" href=card.href.clone() aria-label=card.link_label>
          <img class="thumb" src=card.thumbnail alt=card.title.clone() loading="lazy" />
        </a>
        <div class="card-body">
          <a class="title" href=card.href>
            <h3>{card.title}</h3>
          </a>
          <div class="meta">{card.date}</div>
          <TagBadges tags=card.tags />
        </div>
      </article>
    }
}

/// Tag badges.
#[component]
pub fn TagBadges(
    /// Tags in display order.
    tags: Vec<String>,
) -> impl IntoView {
    view! {
      <div class="tags">
        {tags
          .into_iter()
          .map(|tag| view! { <span class="tag">{tag_badge(&tag)}</span> })
          .collect_view()}
      </div>
    }
}
