//! Display width of text in terminal cells.
//!
//! Uses Unicode East Asian Width: CJK ideographs and fullwidth forms take
//! two cells, combining marks and control characters take none.

use unicode_width::UnicodeWidthChar;

/// Display width of a single codepoint in terminal cells.
///
/// - `0` for control characters, combining marks, zero-width characters
/// - `1` for normal-width characters (ASCII, Latin, Cyrillic, etc.)
/// - `2` for wide characters (CJK ideographs, fullwidth forms)
#[inline]
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0).min(2)
}

/// Display width of a string in terminal cells.
pub fn str_width(s: &str) -> usize {
    s.chars().map(char_width).sum()
}

// =============================================================================
// Tests
// =============================================================================
