//! ANSI escape sequences emitted by the core.
//!
//! Only the handful of sequences the compositor and the terminal backend
//! need: cursor positioning and visibility, screen clearing, the alternate
//! screen and inverse video.

use std::io::Write;

// =============================================================================
// Constants
// =============================================================================

/// Control Sequence Introducer. Row positioning is `CSI <row> ;1H`.
pub const CSI: &str = "\x1b[";

/// Move the cursor to the top-left corner.
pub const CURSOR_HOME: &str = "\x1b[H";

/// Inverse video on.
pub const INVERSE_ON: &str = "\x1b[7m";

/// Reset all attributes (closes inverse video).
pub const RESET: &str = "\x1b[0m";

pub const ALT_SCREEN_ENTER: &str = "\x1b[?1049h";
pub const ALT_SCREEN_EXIT: &str = "\x1b[?1049l";
pub const CURSOR_HIDE: &str = "\x1b[?25l";
pub const CURSOR_SHOW: &str = "\x1b[?25h";

/// Erase the whole screen and home the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

// =============================================================================
// Cursor Visibility
// =============================================================================

/// Hide cursor.
#[inline]
pub fn cursor_hide<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(CURSOR_HIDE.as_bytes())
}

/// Show cursor.
#[inline]
pub fn cursor_show<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(CURSOR_SHOW.as_bytes())
}

// =============================================================================
// Screen Control
// =============================================================================

/// Clear the screen and home the cursor.
#[inline]
pub fn clear_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(CLEAR_SCREEN.as_bytes())
}

/// Switch to the alternate screen buffer.
#[inline]
pub fn enter_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(ALT_SCREEN_ENTER.as_bytes())
}

/// Return to the main screen buffer.
#[inline]
pub fn exit_alt_screen<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(ALT_SCREEN_EXIT.as_bytes())
}

// =============================================================================
// Attributes
// =============================================================================

#[inline]
pub fn reset<W: Write>(w: &mut W) -> std::io::Result<()> {
    w.write_all(RESET.as_bytes())
}

// =============================================================================
// Tests
// =============================================================================
