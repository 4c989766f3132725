//! Generated banner used when a post has no hero image.

use crate::html::escape_text;

/// Build the placeholder banner as a `data:` URL.
///
/// The SVG is a green gradient with decorative circles, the site title and a
/// tagline. Text is escaped before being placed into the markup.
pub fn placeholder_image(title: &str, tagline: &str) -> String {
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 1200 675">"#,
            r#"<defs><linearGradient id="g" x1="0" x2="1">"#,
            r##"<stop offset="0%" stop-color="#00704A"/>"##,
            r##"<stop offset="100%" stop-color="#0a8f69"/>"##,
            r#"</linearGradient></defs>"#,
            r#"<rect width="1200" height="675" fill="url(#g)"/>"#,
            r##"<g fill="#ffffff" fill-opacity="0.12">"##,
            r#"<circle cx="150" cy="150" r="110"/>"#,
            r#"<circle cx="1080" cy="560" r="160"/>"#,
            r#"<circle cx="980" cy="120" r="80"/>"#,
            r#"</g>"#,
            r##"<g fill="#ffffff">"##,
            r#"<text x="60" y="120" font-family="Segoe UI, Roboto, sans-serif" font-size="64" font-weight="800">{title}</text>"#,
            r#"<text x="60" y="190" font-family="Segoe UI, Roboto, sans-serif" font-size="34" font-weight="600">{tagline}</text>"#,
            r#"</g></svg>"#,
        ),
        title = escape_text(title),
        tagline = escape_text(tagline),
    );

    format!("data:image/svg+xml;utf8,{}", urlencoding::encode(&svg))
}

/// Pick the first usable image: the hero image if set and non-empty,
/// otherwise the placeholder.
pub fn hero_or_placeholder(hero: Option<&str>, placeholder: &str) -> String {
    [hero, Some(placeholder)]
        .into_iter()
        .flatten()
        .find(|url| !url.trim().is_empty())
        .unwrap_or(placeholder)
        .to_string()
}
