//! Conversion option types shared by both conversion directions.

use serde::{Deserialize, Serialize};

/// Markdown heading notation.
///
/// ATX headings use leading `#` characters; Setext headings underline the
/// heading text with `=` or `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingStyle {
    Atx,
    Setext,
}

/// Options controlling both conversion directions.
///
/// This is a plain value type: toggling a single option replaces the whole
/// struct rather than mutating it in place, so every conversion call sees a
/// consistent snapshot.
///
/// # Example
///
/// ```rust
/// use mdconv_core::{ConversionOptions, HeadingStyle};
///
/// let options = ConversionOptions { heading_style: HeadingStyle::Setext, ..Default::default() };
/// assert!(options.gfm_support);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOptions {
    /// Heading notation used when serializing Markdown.
    pub heading_style: HeadingStyle,

    /// Master switch for GitHub Flavored Markdown constructs.
    ///
    /// When disabled, tables, strikethrough, and task lists degrade to their
    /// plain-text content in both directions.
    pub gfm_support: bool,

    /// Render `- [ ]` / `- [x]` task list items (GFM).
    pub task_lists: bool,

    /// Render pipe tables (GFM).
    pub tables: bool,

    /// Render `~~strikethrough~~` (GFM).
    pub strikethrough: bool,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            heading_style: HeadingStyle::Atx,
            gfm_support: true,
            task_lists: true,
            tables: true,
            strikethrough: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ConversionOptions::default();
        assert_eq!(options.heading_style, HeadingStyle::Atx);
        assert!(options.gfm_support);
        assert!(options.task_lists);
        assert!(options.tables);
        assert!(options.strikethrough);
    }

    #[test]
    fn test_serde_round_trip() {
        let options = ConversionOptions { gfm_support: false, ..Default::default() };
        let json = serde_json::to_string(&options).unwrap();
        assert!(json.contains(r#""heading_style":"atx""#));
        let back: ConversionOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, options);
    }
}
