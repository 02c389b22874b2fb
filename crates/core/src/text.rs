//! Plain text extraction from HTML.
//!
//! Two code paths with different fidelity:
//!
//! - [`html_to_text`] parses the markup into a DOM and walks its text
//!   nodes, decoding entities and skipping `script`/`style` subtrees.
//! - [`strip_tags`] is a regex tag stripper for callers that cannot afford
//!   a full parse. It leaves script/style text in place and mishandles
//!   malformed markup; the divergence is intentional and documented rather
//!   than unified.

use regex::Regex;
use scraper::Html;
use std::sync::LazyLock;

static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag pattern"));

/// Tags whose text content is invisible and must not leak into output.
const NON_CONTENT_TAGS: [&str; 2] = ["script", "style"];

/// Extracts the text content of an HTML fragment via a DOM parse.
///
/// Entities are decoded, nested tags are flattened, and the contents of
/// `<script>` and `<style>` elements are excluded.
///
/// # Example
///
/// ```rust
/// use mdconv_core::html_to_text;
///
/// let text = html_to_text("<p>a &amp; <em>b</em></p><script>ignored()</script>");
/// assert_eq!(text, "a & b");
/// ```
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut output = String::new();

    for node in document.root_element().descendants() {
        if let Some(text) = node.value().as_text() {
            let in_non_content = node
                .ancestors()
                .filter_map(scraper::ElementRef::wrap)
                .any(|el| NON_CONTENT_TAGS.contains(&el.value().name()));
            if !in_non_content {
                output.push_str(text);
            }
        }
    }

    output.trim().to_string()
}

/// Strips markup with a regex, without parsing.
///
/// Lower fidelity than [`html_to_text`]: entities are left encoded,
/// script/style text survives, and malformed markup (an unclosed `<`) can
/// swallow following text. Useful only where a DOM parse is too heavy.
pub fn strip_tags(html: &str) -> String {
    TAG_PATTERN.replace_all(html, "").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_text_basic() {
        let text = html_to_text("<h1>Title</h1><p>This is a paragraph.</p>");
        assert!(text.contains("Title"));
        assert!(text.contains("This is a paragraph."));
    }

    #[test]
    fn test_html_to_text_strips_nested_tags() {
        let text = html_to_text("<p>Text with <strong>bold</strong> and <em>italic</em>.</p>");
        assert!(!text.contains('<'));
        assert!(text.contains("bold"));
        assert!(text.contains("italic"));
    }

    #[test]
    fn test_html_to_text_decodes_entities() {
        let text = html_to_text("<p>fish &amp; chips &lt;3</p>");
        assert_eq!(text, "fish & chips <3");
    }

    #[test]
    fn test_html_to_text_excludes_script_and_style() {
        let html = "<style>.x { color: red; }</style><p>kept</p><script>var dropped = 1;</script>";
        let text = html_to_text(html);
        assert!(text.contains("kept"));
        assert!(!text.contains("dropped"));
        assert!(!text.contains("color"));
    }

    #[test]
    fn test_strip_tags_basic() {
        assert_eq!(strip_tags("<p>hello <b>world</b></p>"), "hello world");
    }

    #[test]
    fn test_strip_tags_keeps_script_text() {
        // Known fidelity gap of the regex path.
        let text = strip_tags("<script>var visible = 1;</script>");
        assert!(text.contains("var visible = 1;"));
    }

    #[test]
    fn test_strip_tags_leaves_entities_encoded() {
        assert_eq!(strip_tags("a &amp; b"), "a &amp; b");
    }

    #[test]
    fn test_strip_tags_plain_text_untouched() {
        assert_eq!(strip_tags("no markup here"), "no markup here");
    }
}
