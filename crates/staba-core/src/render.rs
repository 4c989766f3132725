//! Page resolution: turns a route and the blog state into view models.
//!
//! The models carry display-ready strings (formatted dates, resolved image
//! URLs, hrefs) so that the UI layer only lays them out.

use crate::{
    config::Config,
    date::DateFormatter,
    html::TrustedHtml,
    placeholder::hero_or_placeholder,
    post::Post,
    router::Route,
    state::BlogState,
};

/// A resolved page.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    /// The post list.
    List(ListPage),
    /// A single post.
    Post(PostPage),
}

/// The list view.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPage {
    /// No post to show.
    Empty { message: String },
    /// One card per post.
    Cards { label: String, cards: Vec<PostCard> },
}

/// A post summary in the list view.
#[derive(Debug, Clone, PartialEq)]
pub struct PostCard {
    pub slug: String,
    pub href: String,
    pub title: String,
    /// Accessible label for the thumbnail link.
    pub link_label: String,
    /// Hero image or placeholder.
    pub thumbnail: String,
    /// Formatted date.
    pub date: String,
    pub tags: Vec<String>,
}

/// The single-post view.
#[derive(Debug, Clone, PartialEq)]
pub enum PostPage {
    /// No post with the requested slug.
    NotFound {
        message: String,
        back_href: String,
        back_label: String,
    },
    /// The full article.
    Article(ArticleView),
}

/// A full post ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleView {
    pub slug: String,
    pub title: String,
    /// Hero image or placeholder.
    pub hero: String,
    /// Formatted date.
    pub date: String,
    pub tags: Vec<String>,
    pub excerpt: String,
    /// Post body, inserted without escaping.
    pub content: TrustedHtml,
    pub back_href: String,
    pub back_label: String,
}

impl ArticleView {
    /// Tag line as shown under the date, e.g. `#seasonal #new`.
    pub fn tag_line(&self) -> String {
        self.tags
            .iter()
            .map(|tag| format!("#{tag}"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Builds view models from state.
#[derive(Debug, Clone)]
pub struct Renderer {
    formatter: DateFormatter,
    placeholder: String,
    empty_message: String,
    not_found_message: String,
    back_label: String,
    list_label: String,
    read_label: String,
}

impl Renderer {
    /// Create a renderer from configuration.
    pub fn new(config: &Config) -> Self {
        let display = &config.display;
        Self {
            formatter: config.date_formatter(),
            placeholder: config.placeholder_image(),
            empty_message: display.empty_message.clone(),
            not_found_message: display.not_found_message.clone(),
            back_label: display.back_label.clone(),
            list_label: display.list_label.clone(),
            read_label: display.read_label.clone(),
        }
    }

    /// Resolve the page for a route.
    ///
    /// List mode shows the filtered posts; post mode looks the slug up in the
    /// full set so direct links work whatever the active search is.
    pub fn page(&self, route: &Route, state: &BlogState) -> Page {
        match route {
            Route::List => Page::List(self.list(state.filtered())),
            Route::Post(slug) => Page::Post(self.post(state.find_post(slug))),
        }
    }

    /// The list view for a set of posts.
    pub fn list(&self, posts: &[Post]) -> ListPage {
        if posts.is_empty() {
            return ListPage::Empty {
                message: self.empty_message.clone(),
            };
        }

        ListPage::Cards {
            label: self.list_label.clone(),
            cards: posts.iter().map(|post| self.card(post)).collect(),
        }
    }

    /// A single card.
    pub fn card(&self, post: &Post) -> PostCard {
        PostCard {
            slug: post.slug.clone(),
            href: post.href(),
            title: post.title.clone(),
            link_label: self.read_label.replace("{title}", &post.title),
            thumbnail: self.image_for(post),
            date: self.formatter.format(&post.date),
            tags: post.tags.clone(),
        }
    }

    /// The post view, or not-found when `post` is `None`.
    pub fn post(&self, post: Option<&Post>) -> PostPage {
        let back_href = Route::List.to_hash();
        let Some(post) = post else {
            return PostPage::NotFound {
                message: self.not_found_message.clone(),
                back_href,
                back_label: self.back_label.clone(),
            };
        };

        PostPage::Article(ArticleView {
            slug: post.slug.clone(),
            title: post.title.clone(),
            hero: self.image_for(post),
            date: self.formatter.format(&post.date),
            tags: post.tags.clone(),
            excerpt: post.excerpt.clone(),
            // Post bodies come from the site's own data file.
            content: TrustedHtml::assume_trusted(post.content.clone()),
            back_href,
            back_label: self.back_label.clone(),
        })
    }

    fn image_for(&self, post: &Post) -> String {
        hero_or_placeholder(post.hero_image.as_deref(), &self.placeholder)
    }
}
