/// Inline formatting applied to a run of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanStyle {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

/// An inline run of text with a single style.
///
/// Link and image spans carry the target URL; every other style has none.
/// The constructors uphold that pairing, so a `TextSpan` built through them
/// always has `url.is_some()` exactly when the style is `Link` or `Image`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSpan {
    text: String,
    style: SpanStyle,
    url: Option<String>,
}

impl TextSpan {
    /// Create a span for one of the URL-less styles.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `style` is `Link` or `Image`.
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        debug_assert!(
            !matches!(style, SpanStyle::Link | SpanStyle::Image),
            "link and image spans need a url"
        );
        Self {
            text: text.into(),
            style,
            url: None,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Plain)
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: SpanStyle::Link,
            url: Some(url.into()),
        }
    }

    /// Image span; `text` is the alt text.
    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: alt.into(),
            style: SpanStyle::Image,
            url: Some(url.into()),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> SpanStyle {
        self.style
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.style == SpanStyle::Plain
    }
}

/// Structural kind of a markdown block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading,
    Code,
    Quote,
    UnorderedList,
    OrderedList,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_structural() {
        assert_eq!(TextSpan::plain("a"), TextSpan::new("a", SpanStyle::Plain));
        assert_ne!(TextSpan::plain("a"), TextSpan::new("a", SpanStyle::Bold));
        assert_ne!(TextSpan::link("a", "u"), TextSpan::link("a", "v"));
        assert_ne!(TextSpan::link("a", "u"), TextSpan::image("a", "u"));
    }

    #[test]
    fn url_only_on_link_and_image() {
        assert_eq!(TextSpan::new("x", SpanStyle::Code).url(), None);
        assert_eq!(TextSpan::link("x", "https://a").url(), Some("https://a"));
        assert_eq!(TextSpan::image("x", "/img.png").url(), Some("/img.png"));
    }
}
