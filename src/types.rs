//! Core types shared by the layout engine and the compositor.
//!
//! - [`Cell`] - one character on screen plus its rendering hints
//! - [`CellFlags`] - bitflags for inverse video, the focus-invert hint and
//!   wide-character continuations
//! - [`RenderLine`] - one row produced by layout, tagged with its owner widget
//!
//! Everything here is measured in terminal cells. A wide character occupies
//! its own cell plus a blank continuation cell flagged `WIDE_TAIL`.

use crate::layout::char_width;

/// Sequential index of a focusable widget within one frame.
pub type FocusId = usize;

// =============================================================================
// Cell Flags (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Rendering hints carried by a cell.
    ///
    /// `INVERSE` is decided at render time. `FOCUS_INVERT` is baked in by
    /// layout and only turns into `INVERSE` when the owning line is focused.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct CellFlags: u8 {
        const NONE = 0;
        const INVERSE = 1 << 0;
        const FOCUS_INVERT = 1 << 1;
        /// Right half of a wide character. Never written to the terminal.
        const WIDE_TAIL = 1 << 2;
    }
}

// =============================================================================
// Cell
// =============================================================================

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Character shown in the cell.
    pub ch: char,
    /// Rendering hints.
    pub flags: CellFlags,
}

impl Cell {
    /// Plain cell with no hints.
    #[inline]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            flags: CellFlags::NONE,
        }
    }

    /// Cell that inverts when its widget holds focus.
    #[inline]
    pub const fn focus_invert(ch: char) -> Self {
        Self {
            ch,
            flags: CellFlags::FOCUS_INVERT,
        }
    }

    /// Continuation cell following a wide character.
    #[inline]
    pub const fn wide_tail(flags: CellFlags) -> Self {
        Self {
            ch: ' ',
            flags: flags.union(CellFlags::WIDE_TAIL),
        }
    }

    #[inline]
    pub fn is_inverse(&self) -> bool {
        self.flags.contains(CellFlags::INVERSE)
    }

    #[inline]
    pub fn inverts_on_focus(&self) -> bool {
        self.flags.contains(CellFlags::FOCUS_INVERT)
    }

    #[inline]
    pub fn is_wide_tail(&self) -> bool {
        self.flags.contains(CellFlags::WIDE_TAIL)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ')
    }
}

/// Lay `text` out as exactly `width` cells, all carrying `flags`.
///
/// Wide characters take two cells. Zero-width characters are dropped.
/// Text past `width` is cut, including a wide character that would straddle
/// the edge; the remainder is padded with spaces.
pub fn text_cells(text: &str, width: usize, flags: CellFlags) -> Vec<Cell> {
    let mut cells = Vec::with_capacity(width);
    for ch in text.chars() {
        let w = char_width(ch);
        if w == 0 {
            continue;
        }
        if cells.len() + w > width {
            break;
        }
        cells.push(Cell { ch, flags });
        if w == 2 {
            cells.push(Cell::wide_tail(flags));
        }
    }
    cells.resize(width, Cell { ch: ' ', flags });
    cells
}

// =============================================================================
// RenderLine
// =============================================================================

/// One laid-out row of cells.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderLine {
    pub cells: Vec<Cell>,
    /// Focus id of the widget that produced this line.
    pub focus_id: Option<FocusId>,
    /// Offset of this line inside its widget's block.
    pub line_in_widget: usize,
}

impl RenderLine {
    pub fn new(cells: Vec<Cell>, focus_id: Option<FocusId>, line_in_widget: usize) -> Self {
        Self {
            cells,
            focus_id,
            line_in_widget,
        }
    }

    /// Build an unfocusable line from text, `width` cells wide.
    pub fn from_text(text: &str, width: usize, line_in_widget: usize) -> Self {
        Self::new(text_cells(text, width, CellFlags::NONE), None, line_in_widget)
    }

    /// Number of cells in the line.
    #[inline]
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// The line as displayed (hints and continuation cells dropped).
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .filter(|c| !c.is_wide_tail())
            .map(|c| c.ch)
            .collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default_is_space() {
        let cell = Cell::default();
        assert_eq!(cell.ch, ' ');
        assert!(cell.flags.is_empty());
    }

    #[test]
    fn test_focus_invert_cell() {
        let cell = Cell::focus_invert('x');
        assert!(cell.inverts_on_focus());
        assert!(!cell.is_inverse());
    }

    #[test]
    fn test_render_line_from_text_pads() {
        let line = RenderLine::from_text("ab", 5, 0);
        assert_eq!(line.width(), 5);
        assert_eq!(line.text(), "ab   ");
        assert_eq!(line.focus_id, None);
    }

    #[test]
    fn test_wide_chars_take_two_cells() {
        let line = RenderLine::from_text("中a", 4, 0);
        assert_eq!(line.width(), 4);
        assert_eq!(line.cells[0].ch, '中');
        assert!(line.cells[1].is_wide_tail());
        assert_eq!(line.cells[2].ch, 'a');
        assert_eq!(line.text(), "中a ");
    }

    #[test]
    fn test_wide_char_straddling_edge_is_cut() {
        let line = RenderLine::from_text("中中", 3, 0);
        assert_eq!(line.width(), 3);
        assert_eq!(line.text(), "中 ");
        assert!(!line.cells[2].is_wide_tail());
    }

    #[test]
    fn test_text_cells_carry_flags() {
        let cells = text_cells("文", 3, CellFlags::FOCUS_INVERT);
        assert!(cells.iter().all(Cell::inverts_on_focus));
        assert!(cells[1].is_wide_tail());
        assert!(!cells[2].is_wide_tail());
    }

    #[test]
    fn test_render_line_from_text_truncates() {
        let line = RenderLine::from_text("abcdef", 3, 2);
        assert_eq!(line.text(), "abc");
        assert_eq!(line.line_in_widget, 2);
    }
}
