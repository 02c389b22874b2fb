//! The conversion facade: HTML to Markdown and Markdown to HTML.
//!
//! Both directions are thin configuration layers over mature conversion
//! crates: [`htmd`] serializes HTML into Markdown and [`comrak`] renders
//! Markdown into HTML. This module owns the mapping from
//! [`ConversionOptions`] onto each crate's own option surface.
//!
//! # Example
//!
//! ```rust
//! use mdconv_core::{ConversionOptions, html_to_markdown, markdown_to_html};
//!
//! let options = ConversionOptions::default();
//! let md = html_to_markdown("<h1>Title</h1>", &options).unwrap();
//! assert_eq!(md.trim(), "# Title");
//!
//! let html = markdown_to_html("# Title", &options).unwrap();
//! assert!(html.contains("<h1>"));
//! ```

use comrak::Options as ComrakOptions;
use htmd::element_handler::{HandlerResult, Handlers};
use htmd::options::{BulletListMarker, CodeBlockStyle, HeadingStyle as HtmdHeadingStyle, Options as HtmdOptions};
use htmd::{Element, HtmlToMarkdown};
use serde::{Deserialize, Serialize};

use crate::options::{ConversionOptions, HeadingStyle};
use crate::{MdconvError, Result};

/// Display string shown in place of output when a conversion fails.
///
/// The library itself always reports failures through [`MdconvError`];
/// interactive callers substitute this placeholder at the display boundary
/// so a bad paste never interrupts further input.
pub const CONVERSION_ERROR_PLACEHOLDER: &str = "Error: Failed to convert. Please check your input.";

/// Active conversion direction.
///
/// Determines which facade function runs and which file extension and MIME
/// type apply when the output is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    HtmlToMarkdown,
    MarkdownToHtml,
}

impl Direction {
    /// Runs the conversion this direction stands for.
    pub fn convert(&self, input: &str, options: &ConversionOptions) -> Result<String> {
        match self {
            Direction::HtmlToMarkdown => html_to_markdown(input, options),
            Direction::MarkdownToHtml => markdown_to_html(input, options),
        }
    }

    /// The opposite direction (the "swap" action).
    pub fn swapped(&self) -> Direction {
        match self {
            Direction::HtmlToMarkdown => Direction::MarkdownToHtml,
            Direction::MarkdownToHtml => Direction::HtmlToMarkdown,
        }
    }

    /// File extension for saved output in this direction.
    pub fn extension(&self) -> &'static str {
        match self {
            Direction::HtmlToMarkdown => "md",
            Direction::MarkdownToHtml => "html",
        }
    }

    /// MIME type for saved output in this direction.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Direction::HtmlToMarkdown => "text/markdown",
            Direction::MarkdownToHtml => "text/html",
        }
    }
}

/// Converts HTML to Markdown.
///
/// The serializer is configured with the requested heading style, fenced
/// code blocks, and `-` bullet markers. GFM constructs follow the option
/// flags: with GFM on, `del`/`s`/`strike` become `~~...~~` and checkbox
/// inputs become `[x] `/`[ ] ` task-list markers; pipe tables come from the
/// serializer itself. With the master switch or a sub-flag off, the
/// construct degrades to its plain content instead.
pub fn html_to_markdown(html: &str, options: &ConversionOptions) -> Result<String> {
    let htmd_options = HtmdOptions {
        heading_style: match options.heading_style {
            HeadingStyle::Atx => HtmdHeadingStyle::Atx,
            HeadingStyle::Setext => HtmdHeadingStyle::Setex,
        },
        code_block_style: CodeBlockStyle::Fenced,
        bullet_list_marker: BulletListMarker::Dash,
        // One space after the bullet, the usual `- item` form.
        ul_bullet_spacing: 1,
        ..Default::default()
    };

    let mut builder = HtmlToMarkdown::builder()
        .options(htmd_options)
        .skip_tags(vec!["script", "style"]);

    if !(options.gfm_support && options.tables) {
        // The serializer emits pipe tables on its own; override the table
        // elements so only the cell text survives.
        builder = builder
            .add_handler(
                vec!["table", "thead", "tbody", "tfoot", "tr"],
                |handlers: &dyn Handlers, element: Element| Some(handlers.walk_children(element.node)),
            )
            .add_handler(vec!["th", "td"], |handlers: &dyn Handlers, element: Element| {
                let content = handlers.walk_children(element.node).content;
                let cell = content.trim();
                if cell.is_empty() { None } else { Some(HandlerResult::from(format!("{} ", cell))) }
            });
    }

    if options.gfm_support && options.strikethrough {
        builder = builder.add_handler(vec!["del", "s", "strike"], |handlers: &dyn Handlers, element: Element| {
            let content = handlers.walk_children(element.node).content;
            let inner = content.trim();
            if inner.is_empty() { None } else { Some(HandlerResult::from(format!("~~{}~~", inner))) }
        });
    } else {
        builder = builder.add_handler(
            vec!["del", "s", "strike"],
            |handlers: &dyn Handlers, element: Element| Some(handlers.walk_children(element.node)),
        );
    }

    if options.gfm_support && options.task_lists {
        builder = builder.add_handler(vec!["input"], |_: &dyn Handlers, element: Element| {
            let mut is_checkbox = false;
            let mut checked = false;
            for attr in element.attrs.iter() {
                let name = &attr.name.local;
                if name == "type" && attr.value.eq_ignore_ascii_case("checkbox") {
                    is_checkbox = true;
                } else if name == "checked" {
                    checked = true;
                }
            }
            if is_checkbox {
                Some(HandlerResult::from(if checked { "[x] " } else { "[ ] " }))
            } else {
                None
            }
        });
    }

    builder
        .build()
        .convert(html)
        .map_err(|e| MdconvError::Conversion(e.to_string()))
}

/// Converts Markdown to HTML.
///
/// GFM extensions (tables, strikethrough, task lists, autolinks) are enabled
/// when `gfm_support` is set, with the individual flags refining each
/// extension. Hard line breaks (`\n` becomes `<br />`) are always on.
pub fn markdown_to_html(markdown: &str, options: &ConversionOptions) -> Result<String> {
    let mut comrak_options = ComrakOptions::default();
    comrak_options.extension.table = options.gfm_support && options.tables;
    comrak_options.extension.strikethrough = options.gfm_support && options.strikethrough;
    comrak_options.extension.tasklist = options.gfm_support && options.task_lists;
    comrak_options.extension.autolink = options.gfm_support;
    comrak_options.render.hardbreaks = true;

    Ok(comrak::markdown_to_html(markdown, &comrak_options))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_to_markdown_basic() {
        let options = ConversionOptions::default();
        let md = html_to_markdown("<h1>Title</h1><p>This is a paragraph.</p>", &options).unwrap();
        assert!(md.contains("# Title"));
        assert!(md.contains("This is a paragraph."));
    }

    #[test]
    fn test_html_to_markdown_setext_headings() {
        let options = ConversionOptions { heading_style: HeadingStyle::Setext, ..Default::default() };
        let md = html_to_markdown("<h1>Title</h1>", &options).unwrap();
        assert!(md.contains("====="));
        assert!(!md.contains("# Title"));
    }

    #[test]
    fn test_html_to_markdown_fenced_code() {
        let options = ConversionOptions::default();
        let md = html_to_markdown("<pre><code>let x = 1;</code></pre>", &options).unwrap();
        assert!(md.contains("```"));
    }

    #[test]
    fn test_html_to_markdown_dash_bullets() {
        let options = ConversionOptions::default();
        let md = html_to_markdown("<ul><li>one</li><li>two</li></ul>", &options).unwrap();
        assert!(md.contains("- one"));
        assert!(md.contains("- two"));
    }

    #[test]
    fn test_html_to_markdown_skips_scripts() {
        let options = ConversionOptions::default();
        let md = html_to_markdown("<p>visible</p><script>var hidden = 1;</script>", &options).unwrap();
        assert!(md.contains("visible"));
        assert!(!md.contains("hidden"));
    }

    #[test]
    fn test_html_to_markdown_no_residual_tags() {
        let options = ConversionOptions::default();
        let html = "<h2>Head</h2><p>Text with <strong>bold</strong> and <a href=\"https://example.com\">a link</a>.</p>";
        let md = html_to_markdown(html, &options).unwrap();
        assert!(!md.contains("<h2>"));
        assert!(!md.contains("<strong>"));
        assert!(!md.contains("</a>"));
    }

    #[test]
    fn test_html_to_markdown_strikethrough() {
        let options = ConversionOptions::default();
        let md = html_to_markdown("<p>keep <del>gone</del></p>", &options).unwrap();
        assert!(md.contains("~~gone~~"));
    }

    #[test]
    fn test_html_to_markdown_strikethrough_variant_tags() {
        let options = ConversionOptions::default();
        let md = html_to_markdown("<p><s>a</s> and <strike>b</strike></p>", &options).unwrap();
        assert!(md.contains("~~a~~"));
        assert!(md.contains("~~b~~"));
    }

    #[test]
    fn test_html_to_markdown_task_list() {
        let options = ConversionOptions::default();
        let html = "<ul>\
                    <li><input type=\"checkbox\" checked> done</li>\
                    <li><input type=\"checkbox\"> todo</li>\
                    </ul>";
        let md = html_to_markdown(html, &options).unwrap();
        assert!(md.contains("[x] done"));
        assert!(md.contains("[ ] todo"));
    }

    #[test]
    fn test_html_to_markdown_non_checkbox_input_dropped() {
        let options = ConversionOptions::default();
        let md = html_to_markdown("<p>before <input type=\"text\" value=\"x\"> after</p>", &options).unwrap();
        assert!(md.contains("before"));
        assert!(md.contains("after"));
        assert!(!md.contains("[ ]"));
    }

    #[test]
    fn test_html_to_markdown_strikethrough_subflag_off() {
        let options = ConversionOptions { strikethrough: false, ..Default::default() };
        let md = html_to_markdown("<p>keep <del>gone</del></p>", &options).unwrap();
        assert!(md.contains("gone"));
        assert!(!md.contains("~~"));
    }

    #[test]
    fn test_html_to_markdown_tables_subflag_off() {
        let options = ConversionOptions { tables: false, ..Default::default() };
        let html = "<table><tr><th>H</th></tr><tr><td>cell</td></tr></table>";
        let md = html_to_markdown(html, &options).unwrap();
        assert!(md.contains("cell"));
        assert!(!md.contains('|'));
    }

    #[test]
    fn test_html_to_markdown_gfm_table() {
        let options = ConversionOptions::default();
        let html = "<table><tr><th>H</th></tr><tr><td>cell</td></tr></table>";
        let md = html_to_markdown(html, &options).unwrap();
        assert!(md.contains('|'));
        assert!(md.contains("cell"));
    }

    #[test]
    fn test_html_to_markdown_gfm_disabled_strikethrough() {
        let options = ConversionOptions { gfm_support: false, ..Default::default() };
        let md = html_to_markdown("<p>keep <del>gone</del></p>", &options).unwrap();
        assert!(md.contains("gone"));
        assert!(!md.contains("~~"));
    }

    #[test]
    fn test_html_to_markdown_gfm_disabled_tables() {
        let options = ConversionOptions { gfm_support: false, ..Default::default() };
        let html = "<table><tr><th>H</th></tr><tr><td>cell</td></tr></table>";
        let md = html_to_markdown(html, &options).unwrap();
        assert!(md.contains("cell"));
        assert!(!md.contains('|'));
    }

    #[test]
    fn test_html_to_markdown_gfm_disabled_task_list() {
        let options = ConversionOptions { gfm_support: false, ..Default::default() };
        let html = "<ul><li><input type=\"checkbox\" checked> done</li></ul>";
        let md = html_to_markdown(html, &options).unwrap();
        assert!(md.contains("done"));
        assert!(!md.contains("[x]"));
    }

    #[test]
    fn test_markdown_to_html_basic() {
        let options = ConversionOptions::default();
        let html = markdown_to_html("# Title\n\nSome *emphasis*.", &options).unwrap();
        assert!(html.contains("<h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_markdown_to_html_hard_breaks() {
        let options = ConversionOptions::default();
        let html = markdown_to_html("line one\nline two", &options).unwrap();
        assert!(html.contains("<br"));
    }

    #[test]
    fn test_markdown_to_html_gfm_table() {
        let options = ConversionOptions::default();
        let html = markdown_to_html("| A | B |\n| --- | --- |\n| 1 | 2 |", &options).unwrap();
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_markdown_to_html_gfm_disabled_table() {
        let options = ConversionOptions { gfm_support: false, ..Default::default() };
        let html = markdown_to_html("| A | B |\n| --- | --- |\n| 1 | 2 |", &options).unwrap();
        assert!(!html.contains("<table>"));
    }

    #[test]
    fn test_markdown_to_html_strikethrough() {
        let options = ConversionOptions::default();
        let html = markdown_to_html("~~gone~~", &options).unwrap();
        assert!(html.contains("<del>"));
    }

    #[test]
    fn test_markdown_to_html_tasklist() {
        let options = ConversionOptions::default();
        let html = markdown_to_html("- [x] done\n- [ ] todo", &options).unwrap();
        assert!(html.contains("checkbox"));
    }

    #[test]
    fn test_direction_swap() {
        assert_eq!(Direction::HtmlToMarkdown.swapped(), Direction::MarkdownToHtml);
        assert_eq!(Direction::MarkdownToHtml.swapped(), Direction::HtmlToMarkdown);
    }

    #[test]
    fn test_direction_file_metadata() {
        assert_eq!(Direction::HtmlToMarkdown.extension(), "md");
        assert_eq!(Direction::HtmlToMarkdown.mime_type(), "text/markdown");
        assert_eq!(Direction::MarkdownToHtml.extension(), "html");
        assert_eq!(Direction::MarkdownToHtml.mime_type(), "text/html");
    }

    #[test]
    fn test_direction_convert_dispatch() {
        let options = ConversionOptions::default();
        let md = Direction::HtmlToMarkdown.convert("<h1>T</h1>", &options).unwrap();
        assert!(md.contains("# T"));
        let html = Direction::MarkdownToHtml.convert("# T", &options).unwrap();
        assert!(html.contains("<h1>"));
    }

    #[test]
    fn test_facade_never_panics_on_garbage() {
        let options = ConversionOptions::default();
        let garbage = "<div><p>unclosed <b>nested <table><tr><td>x";
        // Malformed input must produce either output or a typed error, never a panic.
        let _ = html_to_markdown(garbage, &options);
        let _ = markdown_to_html("][~~**", &options).unwrap();
    }
}
