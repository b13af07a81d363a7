//! Output buffering and frame serialization.
//!
//! These components keep terminal output cheap by:
//! - Accumulating a whole frame before a single write
//! - Tracking the inverse-video state so escapes are emitted only at
//!   transitions, never per cell

use super::ansi;
use super::buffer::ScreenBuffer;
use crate::types::Cell;

// =============================================================================
// OutputBuffer
// =============================================================================

/// A buffer that accumulates one frame for a single write.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Clear the buffer without deallocating.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut buf = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
    }

    /// Move the cursor to the start of row `y` (0-indexed).
    pub fn move_to_row(&mut self, y: u16) {
        self.write_str(ansi::CSI);

        // u16::MAX + 1 has five digits.
        let mut digits = [0u8; 5];
        let mut start = digits.len();
        let mut n = u32::from(y) + 1;
        loop {
            start -= 1;
            digits[start] = b'0' + (n % 10) as u8;
            n /= 10;
            if n == 0 {
                break;
            }
        }
        self.data.extend_from_slice(&digits[start..]);
        self.write_str(";1H");
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

// =============================================================================
// InverseTracker
// =============================================================================

/// Emits cells while tracking whether inverse video is currently on.
#[derive(Debug, Default)]
pub struct InverseTracker {
    inverse: bool,
}

impl InverseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one cell, toggling inverse video only when its state changes.
    #[inline]
    pub fn write_cell(&mut self, out: &mut OutputBuffer, cell: &Cell) {
        let wanted = cell.is_inverse();
        if wanted != self.inverse {
            if wanted {
                out.write_str(ansi::INVERSE_ON);
            } else {
                out.write_str(ansi::RESET);
            }
            self.inverse = wanted;
        }
        out.write_char(cell.ch);
    }

    /// Close an open inverse run.
    pub fn finish(&mut self, out: &mut OutputBuffer) {
        if self.inverse {
            out.write_str(ansi::RESET);
            self.inverse = false;
        }
    }
}

// =============================================================================
// Serialization
// =============================================================================

/// Serialize the whole screen into `out`.
///
/// Cursor home, then each row prefixed with its own cursor positioning.
/// Continuation cells of wide characters are skipped since the terminal
/// advances past them on its own. Inverse state carries across rows; an
/// inverse run still open at the end is closed.
pub fn serialize(buf: &ScreenBuffer, out: &mut OutputBuffer) {
    out.reserve(buf.width() as usize * buf.height() as usize * 4);
    out.write_str(ansi::CURSOR_HOME);

    let mut tracker = InverseTracker::new();
    for y in 0..buf.height() {
        out.move_to_row(y);
        for cell in buf.row(y).iter().filter(|c| !c.is_wide_tail()) {
            tracker.write_cell(out, cell);
        }
    }
    tracker.finish(out);
}

// =============================================================================
// Tests
// =============================================================================
