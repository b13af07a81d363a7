//! ScreenBuffer and border drawing.
//!
//! The ScreenBuffer is a full-screen 2D grid of [`Cell`]s. Layout lines are
//! painted into it by the compositor and the whole grid is serialized in one
//! pass.
//!
//! Uses flat storage with row-major indexing: `index = y * width + x`.

use crate::layout::char_width;
use crate::types::Cell;

// Outer window border.
const TOP_LEFT: char = '╭';
const TOP_RIGHT: char = '╮';
const BOTTOM_LEFT: char = '╰';
const BOTTOM_RIGHT: char = '╯';
const HORIZONTAL: char = '─';
const VERTICAL: char = '│';

/// Smallest buffer that gets a border.
pub const MIN_BORDER_WIDTH: u16 = 4;
pub const MIN_BORDER_HEIGHT: u16 = 3;

// =============================================================================
// ScreenBuffer
// =============================================================================

/// A 2D buffer of terminal cells.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl ScreenBuffer {
    /// Create a buffer filled with spaces.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::default(); size],
        }
    }

    #[inline]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline]
    pub fn in_bounds(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Get a cell reference (returns None if out of bounds).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        if self.in_bounds(x, y) {
            Some(&self.cells[self.index(x, y)])
        } else {
            None
        }
    }

    /// Replace a cell. Out-of-bounds writes are ignored.
    ///
    /// Returns true if the cell was set.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx] = cell;
        true
    }

    /// Replace only the character of a cell, keeping its flags.
    #[inline]
    pub fn set_char(&mut self, x: u16, y: u16, ch: char) -> bool {
        if !self.in_bounds(x, y) {
            return false;
        }
        let idx = self.index(x, y);
        self.cells[idx].ch = ch;
        true
    }

    /// Cells of row `y`.
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let start = self.index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// Row `y` as displayed, continuation cells skipped.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .iter()
            .filter(|c| !c.is_wide_tail())
            .map(|c| c.ch)
            .collect()
    }

    // =========================================================================
    // Border
    // =========================================================================

    /// Draw the rounded window border with the title spliced into the top.
    ///
    /// ```text
    /// ╭─── Title ──────╮
    /// │                │
    /// ╰────────────────╯
    /// ```
    ///
    /// The title segment starts at column 1 and is cut off before the top
    /// right corner; a wide character that would overlap the corner is left
    /// out. Buffers smaller than 4x3 get no border.
    pub fn draw_border(&mut self, title: &str) {
        let (w, h) = (self.width, self.height);
        if w < MIN_BORDER_WIDTH || h < MIN_BORDER_HEIGHT {
            return;
        }

        self.set_char(0, 0, TOP_LEFT);
        self.set_char(w - 1, 0, TOP_RIGHT);
        self.set_char(0, h - 1, BOTTOM_LEFT);
        self.set_char(w - 1, h - 1, BOTTOM_RIGHT);

        for x in 1..w - 1 {
            self.set_char(x, 0, HORIZONTAL);
            self.set_char(x, h - 1, HORIZONTAL);
        }
        for y in 1..h - 1 {
            self.set_char(0, y, VERTICAL);
            self.set_char(w - 1, y, VERTICAL);
        }

        if !title.is_empty() {
            let segment = format!("{HORIZONTAL}{HORIZONTAL}{HORIZONTAL} {title} ");
            let mut x = 1;
            for ch in segment.chars() {
                let cw = char_width(ch) as u16;
                if cw == 0 {
                    continue;
                }
                if x + cw > w - 1 {
                    break;
                }
                self.set_char(x, 0, ch);
                if cw == 2 {
                    let flags = self.cells[self.index(x, 0)].flags;
                    self.set(x + 1, 0, Cell::wide_tail(flags));
                }
                x += cw;
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
