//! Horizontal block packing.
//!
//! Blocks are placed left to right with one column of spacing. When the
//! next block would overflow the width the current row is closed and a new
//! one started. Each row is then merged line by line into full-width
//! render lines.

use super::block::Block;
use crate::types::{Cell, RenderLine};

/// Columns between neighbouring blocks in a row.
pub const BLOCK_SPACING: usize = 1;

/// Pack `blocks` into rows no wider than `max_width`.
///
/// A block wider than `max_width` still gets a row of its own. Merged lines
/// are padded to `max_width`.
///
/// Each merged line carries the focus id of the first block in the row that
/// has one. With two buttons in one row only the first can ever be
/// highlighted; the second still takes focus and activates, but its
/// lines are tagged with the first button's id.
pub fn pack_blocks(blocks: Vec<Block>, max_width: usize) -> Vec<RenderLine> {
    let mut lines = Vec::new();
    let mut row: Vec<Block> = Vec::new();
    let mut row_width = 0;

    for block in blocks {
        let needed = if row.is_empty() {
            block.width
        } else {
            row_width + BLOCK_SPACING + block.width
        };

        if !row.is_empty() && needed > max_width {
            merge_row(&row, max_width, &mut lines);
            row.clear();
            row_width = block.width;
        } else {
            row_width = needed;
        }
        row.push(block);
    }

    if !row.is_empty() {
        merge_row(&row, max_width, &mut lines);
    }

    lines
}

/// Merge one row of blocks into lines, up to the tallest block.
fn merge_row(row: &[Block], max_width: usize, out: &mut Vec<RenderLine>) {
    let height = row.iter().map(Block::height).max().unwrap_or(0);

    for r in 0..height {
        let mut cells = Vec::with_capacity(max_width);
        let mut focus_id = None;
        let mut line_in_widget = r;

        for (i, block) in row.iter().enumerate() {
            if i > 0 {
                cells.extend(std::iter::repeat(Cell::default()).take(BLOCK_SPACING));
            }

            match block.lines.get(r) {
                Some(line) => {
                    let start = cells.len();
                    cells.extend(line.cells.iter().take(block.width).copied());
                    cells.resize(start + block.width, Cell::default());

                    if focus_id.is_none() && line.focus_id.is_some() {
                        focus_id = line.focus_id;
                        line_in_widget = line.line_in_widget;
                    }
                }
                None => cells.extend(std::iter::repeat(Cell::default()).take(block.width)),
            }
        }

        if cells.len() < max_width {
            cells.resize(max_width, Cell::default());
        }
        out.push(RenderLine::new(cells, focus_id, line_in_widget));
    }
}

// =============================================================================
// Tests
// =============================================================================
