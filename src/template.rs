//! Page template substitution.

pub const TITLE_PLACEHOLDER: &str = "{{ Title }}";
pub const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

/// Fill a page template and point root-relative links at `base_path`.
///
/// Rewriting happens after substitution, so links inside the rendered
/// content are rewritten along with the template's own.
pub fn render_page(template: &str, title: &str, content: &str, base_path: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
        .replace(r#"href="/"#, &format!(r#"href="{base_path}"#))
        .replace(r#"src="/"#, &format!(r#"src="{base_path}"#))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const TEMPLATE: &str = r#"<html><head><title>{{ Title }}</title><link href="/index.css" rel="stylesheet"></head><body>{{ Content }}</body></html>"#;

    #[test]
    fn substitutes_placeholders() {
        assert_eq!(
            render_page(TEMPLATE, "Home", "<div></div>", "/"),
            r#"<html><head><title>Home</title><link href="/index.css" rel="stylesheet"></head><body><div></div></body></html>"#
        );
    }

    #[test]
    fn rewrites_root_relative_urls() {
        let page = render_page(
            TEMPLATE,
            "Home",
            r#"<a href="/blog/">x</a><img src="/a.png" alt="a"></img><a href="https://x.dev">y</a>"#,
            "/site/",
        );
        assert!(page.contains(r#"<link href="/site/index.css""#));
        assert!(page.contains(r#"<a href="/site/blog/">x</a>"#));
        assert!(page.contains(r#"<img src="/site/a.png""#));
        assert!(page.contains(r#"<a href="https://x.dev">y</a>"#));
    }

    #[test]
    fn every_placeholder_is_replaced() {
        assert_eq!(
            render_page("{{ Title }} | {{ Title }}", "T", "", "/"),
            "T | T"
        );
    }
}
