//! Text wrapping.
//!
//! Greedy word wrap measured in terminal cells:
//! - Explicit newlines (`\n`) are hard paragraph breaks
//! - Empty paragraphs produce one empty line
//! - A line breaks at the last space at or before the width limit
//! - Tokens wider than the limit are cut at the last character that fits
//! - One leading space is dropped after a wrap break

use super::width::{char_width, str_width};

/// Wrap `text` to lines at most `max_width` cells wide.
///
/// `max_width` is floored at 1. A single character wider than the limit
/// still gets a line of its own.
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let max_width = max_width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }
        wrap_paragraph(paragraph, max_width, &mut lines);
    }

    lines
}

fn wrap_paragraph(paragraph: &str, max_width: usize, lines: &mut Vec<String>) {
    if str_width(paragraph) <= max_width {
        lines.push(paragraph.to_string());
        return;
    }

    let chars: Vec<char> = paragraph.chars().collect();
    let mut rest: &[char] = &chars;

    while !rest.is_empty() {
        let fit = fitting_prefix(rest, max_width);
        if fit == rest.len() {
            lines.push(rest.iter().collect());
            break;
        }

        // A space right after the fitting prefix is a valid break too.
        let break_at = (1..=fit)
            .rev()
            .find(|&i| rest.get(i) == Some(&' '))
            .unwrap_or(fit);

        lines.push(rest[..break_at].iter().collect());
        rest = &rest[break_at..];

        if rest.first() == Some(&' ') {
            rest = &rest[1..];
        }
    }
}

/// Number of leading chars that fit in `max_width` cells (at least 1).
fn fitting_prefix(chars: &[char], max_width: usize) -> usize {
    let mut used = 0;
    let mut count = 0;
    for &ch in chars {
        let w = char_width(ch);
        if count > 0 && used + w > max_width {
            break;
        }
        used += w;
        count += 1;
    }
    count
}

// =============================================================================
// Tests
// =============================================================================
