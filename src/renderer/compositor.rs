//! Frame compositing.
//!
//! Paints layout lines into a full-screen [`ScreenBuffer`]:
//!
//! 1. Draw the outer border and title
//! 2. Scroll so the focused widget's lines are inside the window
//! 3. Copy the visible lines at column 2 / row 1, clipped to the usable width
//!    (a wide character cut by the clip becomes a blank)
//! 4. Turn focus-invert hints into inverse video on the focused widget

use super::buffer::ScreenBuffer;
use crate::types::{Cell, CellFlags, FocusId, RenderLine};

/// Column where content starts (border + padding).
pub const CONTENT_LEFT: u16 = 2;

/// Row where content starts (below the top border).
pub const CONTENT_TOP: u16 = 1;

/// Visible content rows for a terminal `height` rows tall (at least 1).
#[inline]
pub fn inner_height(height: u16) -> usize {
    (height as usize).saturating_sub(2).max(1)
}

/// Visible content columns for a terminal `width` columns wide (at least 1).
#[inline]
pub fn inner_width(width: u16) -> usize {
    (width as usize).saturating_sub(4).max(1)
}

/// First and last line index carrying `focus_id`.
pub fn focus_range(lines: &[RenderLine], focus_id: FocusId) -> Option<(usize, usize)> {
    let first = lines.iter().position(|l| l.focus_id == Some(focus_id))?;
    let last = lines.iter().rposition(|l| l.focus_id == Some(focus_id))?;
    Some((first, last))
}

/// Scroll offset keeping the focused widget inside a `window`-line view.
///
/// Returns `scroll_y` unchanged when no line carries `focus_index`.
pub fn adjust_scroll(
    scroll_y: usize,
    lines: &[RenderLine],
    focus_index: usize,
    window: usize,
) -> usize {
    let Some((first, last)) = focus_range(lines, focus_index) else {
        return scroll_y;
    };

    let window = window.max(1);
    let mut scroll = scroll_y;
    if first < scroll {
        scroll = first;
    }
    if last >= scroll + window {
        scroll = (last + 1).saturating_sub(window);
    }
    scroll
}

/// Compose one frame.
///
/// `scroll_y` is updated in place so the adjustment persists into the next
/// frame.
pub fn compose(
    lines: &[RenderLine],
    title: &str,
    focus_index: usize,
    scroll_y: &mut usize,
    width: u16,
    height: u16,
) -> ScreenBuffer {
    let mut buf = ScreenBuffer::new(width, height);
    buf.draw_border(title);

    let visible_rows = inner_height(height);
    let visible_cols = inner_width(width);

    *scroll_y = adjust_scroll(*scroll_y, lines, focus_index, visible_rows);

    let end = (*scroll_y + visible_rows).min(lines.len());
    let start = (*scroll_y).min(end);

    for (row, line) in lines[start..end].iter().enumerate() {
        let Ok(y) = u16::try_from(row + CONTENT_TOP as usize) else {
            break;
        };
        let focused = line.focus_id == Some(focus_index);

        let cells = &line.cells[..line.cells.len().min(visible_cols)];
        for (col, cell) in cells.iter().enumerate() {
            let mut cell = *cell;
            let clipped_tail = line.cells.get(col + 1).is_some_and(Cell::is_wide_tail);
            if col + 1 == visible_cols && clipped_tail {
                cell.ch = ' ';
            }
            if focused && cell.inverts_on_focus() {
                cell.flags |= CellFlags::INVERSE;
            }
            let x = CONTENT_LEFT.saturating_add(col as u16);
            buf.set(x, y, cell);
        }
    }

    buf
}

// =============================================================================
// Tests
// =============================================================================
