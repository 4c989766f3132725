//! Markup that is inserted into the page without escaping.

/// HTML that will be injected verbatim.
///
/// No sanitization happens anywhere in this crate. The only way to build one
/// is [`TrustedHtml::assume_trusted`], so every raw insertion is visible at
/// the call site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrustedHtml(String);

impl TrustedHtml {
    /// Wrap markup from a source the caller vouches for.
    pub fn assume_trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// The raw markup.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the raw markup.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether there is no markup at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Escape text for use inside XML/HTML text and attribute values.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trusted_html_is_verbatim() {
        let html = TrustedHtml::assume_trusted("<p onclick=\"x\">Hi</p>");
        assert_eq!(html.as_str(), "<p onclick=\"x\">Hi</p>");
        assert!(!html.is_empty());
        assert!(TrustedHtml::default().is_empty());
    }

    #[test]
    fn test_escape_text() {
        assert_eq!(
            escape_text(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_text("季節の新作"), "季節の新作");
    }
}
