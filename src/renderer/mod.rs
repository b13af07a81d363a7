//! Terminal renderer.
//!
//! Takes the layout engine's lines and turns them into one terminal write:
//!
//! ```text
//! RenderLines → compose (border, scroll, focus highlight) → ScreenBuffer
//!             → serialize (cursor moves, inverse toggles) → OutputBuffer
//! ```
//!
//! The renderer knows nothing about widgets; focus is just an id compared
//! against each line's tag.

pub mod ansi;
pub mod buffer;
pub mod compositor;
pub mod output;

pub use buffer::ScreenBuffer;
pub use compositor::{adjust_scroll, compose, focus_range, inner_height, inner_width};
pub use output::{serialize, InverseTracker, OutputBuffer};

use crate::types::RenderLine;

/// Compose and serialize a frame into `out`. Returns the composed screen.
pub fn render_frame(
    lines: &[RenderLine],
    title: &str,
    focus_index: usize,
    scroll_y: &mut usize,
    size: (u16, u16),
    out: &mut OutputBuffer,
) -> ScreenBuffer {
    let screen = compose(lines, title, focus_index, scroll_y, size.0, size.1);
    out.clear();
    serialize(&screen, out);
    screen
}
