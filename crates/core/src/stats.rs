//! Text statistics: character, word, and line counts.

use serde::Serialize;

/// Character, word, and line counts for a piece of text.
///
/// Derived on demand and never stored; recompute whenever the text changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextStats {
    /// UTF-16 code units, matching JavaScript `String.length` semantics.
    pub characters: usize,
    /// Whitespace-delimited tokens; 0 for blank input.
    pub words: usize,
    /// `\n`-separated segments; an empty string still has one line.
    pub lines: usize,
}

/// Computes [`TextStats`] for the given text.
///
/// # Example
///
/// ```rust
/// use mdconv_core::calculate_stats;
///
/// let stats = calculate_stats("a b  c\nd");
/// assert_eq!(stats.characters, 8);
/// assert_eq!(stats.words, 4);
/// assert_eq!(stats.lines, 2);
/// ```
pub fn calculate_stats(text: &str) -> TextStats {
    let characters = text.encode_utf16().count();
    let lines = text.split('\n').count();
    let words = if text.trim().is_empty() { 0 } else { text.split_whitespace().count() };

    TextStats { characters, words, lines }
}
