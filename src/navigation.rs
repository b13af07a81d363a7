//! Keyboard navigation.
//!
//! A pure state transition: one [`InputEvent`] moves focus or activates the
//! focused widget. Bounds come from the previous frame's focus count because
//! the current frame's widgets have not been declared yet when this runs.

use crate::input::{InputEvent, Key};
use crate::types::FocusId;

/// The slice of frame state navigation reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub focus_index: usize,
    /// Focusable widgets counted by the previous frame.
    pub focus_count: usize,
    /// Focus id activated this frame.
    pub pressed: Option<FocusId>,
    pub quit: bool,
}

/// Apply one event to the navigation state.
pub fn navigate(state: &mut NavState, event: &InputEvent) {
    match event.key {
        Key::CtrlC => state.quit = true,
        Key::Up => state.focus_index = state.focus_index.saturating_sub(1),
        Key::Down => {
            if state.focus_index + 1 < state.focus_count {
                state.focus_index += 1;
            }
        }
        Key::Tab => {
            state.focus_index = if state.focus_index + 1 < state.focus_count {
                state.focus_index + 1
            } else {
                0
            };
        }
        Key::Enter | Key::Space => state.pressed = Some(state.focus_index),
        // Runes are left for future text-input widgets.
        Key::None | Key::Left | Key::Right | Key::Esc | Key::Backspace | Key::Rune => {}
    }
}

// =============================================================================
// Tests
// =============================================================================
