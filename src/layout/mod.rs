//! Layout Module
//!
//! Converts the frame's widget list into a flat sequence of fixed-width
//! [`RenderLine`]s. All widths are display cells, see [`char_width`].
//!
//! # Modes
//!
//! Layout walks widgets in declaration order (the same order focus ids were
//! assigned in) and switches between two modes:
//!
//! - **Vertical**: each widget's block is stacked below the previous one,
//!   lines padded to the content width.
//! - **Group**: between `GroupStart` and `GroupEnd`, blocks are collected and
//!   handed to [`pack_blocks`] for horizontal packing. A group left open at
//!   the end of the list is flushed as if it were closed.
//!
//! Nested `GroupStart` markers and stray `GroupEnd` markers are ignored.

mod block;
mod pack;
mod width;
mod wrap;

pub use block::{button_block, button_width, text_block, Block, BUTTON_CHROME};
pub use pack::{pack_blocks, BLOCK_SPACING};
pub use width::{char_width, str_width};
pub use wrap::wrap_text;

use crate::types::{Cell, RenderLine};
use crate::widget::Widget;

/// Columns taken by the outer border and padding.
pub const CONTENT_INSET: usize = 4;

/// Smallest usable content width.
pub const MIN_CONTENT_WIDTH: usize = 4;

/// Usable content width for a terminal of `term_width` columns.
#[inline]
pub fn content_width(term_width: u16) -> usize {
    (term_width as usize)
        .saturating_sub(CONTENT_INSET)
        .max(MIN_CONTENT_WIDTH)
}

/// Build the block for a single widget. Group markers have none.
pub fn widget_block(widget: &Widget, max_width: usize) -> Option<Block> {
    match widget {
        Widget::Text(label) => Some(text_block(label, max_width)),
        Widget::Button { label, focus_id } => Some(button_block(label, max_width, *focus_id)),
        Widget::GroupStart | Widget::GroupEnd => None,
    }
}

enum Mode {
    Vertical,
    Group(Vec<Block>),
}

/// Lay out `widgets` for a terminal `term_width` columns wide.
pub fn layout_widgets<'a, I>(widgets: I, term_width: u16) -> Vec<RenderLine>
where
    I: IntoIterator<Item = &'a Widget>,
{
    let width = content_width(term_width);
    let mut lines = Vec::new();
    let mut mode = Mode::Vertical;

    for widget in widgets {
        match widget {
            Widget::GroupStart => {
                if matches!(mode, Mode::Vertical) {
                    mode = Mode::Group(Vec::new());
                }
            }
            Widget::GroupEnd => {
                if let Mode::Group(blocks) = std::mem::replace(&mut mode, Mode::Vertical) {
                    lines.extend(pack_blocks(blocks, width));
                }
            }
            Widget::Text(_) | Widget::Button { .. } => {
                let Some(block) = widget_block(widget, width) else {
                    continue;
                };
                match &mut mode {
                    Mode::Vertical => stack_block(block, width, &mut lines),
                    Mode::Group(blocks) => blocks.push(block),
                }
            }
        }
    }

    if let Mode::Group(blocks) = mode {
        lines.extend(pack_blocks(blocks, width));
    }

    lines
}

/// Append a block's lines, padded to the content width.
fn stack_block(block: Block, width: usize, out: &mut Vec<RenderLine>) {
    for mut line in block.lines {
        if line.cells.len() < width {
            line.cells.resize(width, Cell::default());
        }
        out.push(line);
    }
}

// =============================================================================
// Tests
// =============================================================================
