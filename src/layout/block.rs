//! Fixed-size widget blocks.
//!
//! A block is the rectangular rendering of a single widget: a run of
//! [`RenderLine`]s that all share one width. Vertical stacking appends the
//! lines directly; horizontal groups hand blocks to the packer.

use super::width::str_width;
use super::wrap::wrap_text;
use crate::types::{text_cells, Cell, CellFlags, FocusId, RenderLine};

// Button border characters.
const TOP_LEFT: char = '┌';
const TOP_RIGHT: char = '┐';
const BOTTOM_LEFT: char = '└';
const BOTTOM_RIGHT: char = '┘';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Border + padding columns around a button label.
pub const BUTTON_CHROME: usize = 4;

/// A rectangular block of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub lines: Vec<RenderLine>,
    pub width: usize,
}

impl Block {
    #[inline]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Focus id of the widget that produced the block.
    pub fn focus_id(&self) -> Option<FocusId> {
        self.lines.iter().find_map(|l| l.focus_id)
    }
}

/// Width in cells of the button block for `label`, capped at `max_width`.
#[inline]
pub fn button_width(label: &str, max_width: usize) -> usize {
    (str_width(label) + BUTTON_CHROME).min(max_width)
}

/// Build the three-line bordered block for a button.
///
/// ```text
/// ┌────┐
/// │ OK │   interior cells carry FOCUS_INVERT
/// └────┘
/// ```
///
/// The label is truncated or space-padded to fit. The width never drops
/// below the chrome itself.
pub fn button_block(label: &str, max_width: usize, focus_id: FocusId) -> Block {
    let width = button_width(label, max_width).max(BUTTON_CHROME);
    let label_width = width - BUTTON_CHROME;

    let rule = |left: char, right: char| {
        let mut cells = Vec::with_capacity(width);
        cells.push(Cell::new(left));
        cells.extend(std::iter::repeat(Cell::new(HORIZONTAL)).take(width - 2));
        cells.push(Cell::new(right));
        cells
    };

    let mut middle = Vec::with_capacity(width);
    middle.push(Cell::new(VERTICAL));
    middle.push(Cell::focus_invert(' '));
    middle.extend(text_cells(label, label_width, CellFlags::FOCUS_INVERT));
    middle.push(Cell::focus_invert(' '));
    middle.push(Cell::new(VERTICAL));

    Block {
        lines: vec![
            RenderLine::new(rule(TOP_LEFT, TOP_RIGHT), Some(focus_id), 0),
            RenderLine::new(middle, Some(focus_id), 1),
            RenderLine::new(rule(BOTTOM_LEFT, BOTTOM_RIGHT), Some(focus_id), 2),
        ],
        width,
    }
}

/// Build the block for a text widget at its natural width.
///
/// The text is wrapped to `max_width`; the block is as wide as its
/// widest wrapped line.
pub fn text_block(label: &str, max_width: usize) -> Block {
    let wrapped = wrap_text(label, max_width);
    let width = wrapped
        .iter()
        .map(|l| str_width(l).min(max_width))
        .max()
        .unwrap_or(0);
    let lines = wrapped
        .iter()
        .enumerate()
        .map(|(i, line)| RenderLine::from_text(line, width, i))
        .collect();
    Block { lines, width }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ok_button() {
        let block = button_block("OK", 76, 0);
        assert_eq!(block.width, 6);
        assert_eq!(block.height(), 3);

        let texts: Vec<String> = block.lines.iter().map(|l| l.text()).collect();
        assert_eq!(texts, vec!["┌────┐", "│ OK │", "└────┘"]);

        let middle = &block.lines[1].cells;
        assert!(!middle[0].inverts_on_focus());
        assert!(middle[1..5].iter().all(|c| c.inverts_on_focus()));
        assert!(!middle[5].inverts_on_focus());
        assert!(block.lines[0].cells.iter().all(|c| !c.inverts_on_focus()));
    }

    #[test]
    fn test_button_lines_tagged() {
        let block = button_block("Go", 20, 7);
        for (i, line) in block.lines.iter().enumerate() {
            assert_eq!(line.focus_id, Some(7));
            assert_eq!(line.line_in_widget, i);
        }
        assert_eq!(block.focus_id(), Some(7));
    }

    #[test]
    fn test_button_truncates_long_label() {
        let block = button_block("Increment", 8, 0);
        assert_eq!(block.width, 8);
        assert_eq!(block.lines[1].text(), "│ Incr │");
        assert!(block.lines.iter().all(|l| l.width() == 8));
    }

    #[test]
    fn test_wide_label_button() {
        let block = button_block("中文", 76, 0);
        assert_eq!(block.width, 8);
        assert!(block.lines.iter().all(|l| l.width() == 8));
        assert_eq!(block.lines[0].text(), "┌──────┐");
        assert_eq!(block.lines[1].text(), "│ 中文 │");

        let middle = &block.lines[1].cells;
        assert!(middle[3].is_wide_tail());
        assert!(middle[1..7].iter().all(|c| c.inverts_on_focus()));
    }

    #[test]
    fn test_wide_label_truncated_on_cell_boundary() {
        // 7 wide leaves 3 label cells: one ideograph and a pad.
        let block = button_block("中文", 7, 0);
        assert_eq!(block.width, 7);
        assert_eq!(block.lines[1].text(), "│ 中  │");
    }

    #[test]
    fn test_empty_label_button() {
        let block = button_block("", 10, 0);
        assert_eq!(block.lines[1].text(), "│  │");
    }

    #[test]
    fn test_text_block_natural_width() {
        let block = text_block("hello world", 5);
        assert_eq!(block.width, 5);
        assert_eq!(block.height(), 2);
        assert_eq!(block.focus_id(), None);

        let block = text_block("hi\nthere", 20);
        assert_eq!(block.width, 5);
        assert_eq!(block.lines[0].text(), "hi   ");
    }

    #[test]
    fn test_text_block_measures_cells() {
        let block = text_block("中文\nab", 20);
        assert_eq!(block.width, 4);
        assert_eq!(block.lines[0].text(), "中文");
        assert_eq!(block.lines[1].text(), "ab  ");
        assert!(block.lines.iter().all(|l| l.width() == 4));
    }
}
