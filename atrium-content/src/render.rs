//! Markup rendering.

use once_cell::sync::Lazy;
use pulldown_cmark::{Options, Parser, html};
use regex::Regex;

static AUTOLINK_REGEX: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"<(https?://[^>\s]+)>"));

/// Renders raw post markup to serialized HTML.
///
/// Must be pure: same input, same output, no side effects. Rendered output
/// is cached alongside the post and only invalidated through tags.
pub trait MarkupRenderer: Send + Sync {
    /// Render markup to HTML.
    fn render(&self, markup: &str) -> String;
}

/// Markdown renderer.
///
/// Rewrites `<https://example.com>` autolink syntax to an explicit
/// `[url](url)` link before parsing, then renders with tables,
/// strikethrough, and task lists enabled.
pub struct MarkdownRenderer {
    options: Options,
}

impl MarkdownRenderer {
    /// Create a renderer with the default option set.
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }

    fn rewrite_autolinks(markup: &str) -> String {
        match AUTOLINK_REGEX.as_ref() {
            Ok(regex) => regex.replace_all(markup, "[$1]($1)").into_owned(),
            // An uncompilable pattern leaves the markup untouched.
            Err(_) => markup.to_string(),
        }
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupRenderer for MarkdownRenderer {
    fn render(&self, markup: &str) -> String {
        let rewritten = Self::rewrite_autolinks(markup);
        let parser = Parser::new_ext(&rewritten, self.options);
        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);
        html_output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("# Hello\n\nThis is **bold**.");
        assert!(html.contains("<h1>Hello</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_autolink_rewrite() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("See <https://example.com> for details.");
        assert!(html.contains(r#"<a href="https://example.com">https://example.com</a>"#));
        assert!(!html.contains("&lt;https://example.com&gt;"));
    }

    #[test]
    fn test_tables_enabled() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
        assert!(html.contains("<th>A</th>"));
    }

    #[test]
    fn test_render_is_pure() {
        let renderer = MarkdownRenderer::new();
        let markup = "Some *markup* with a [link](https://example.com).";
        assert_eq!(renderer.render(markup), renderer.render(markup));
    }
}
