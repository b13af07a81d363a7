//! Widget declarations collected during one frame.
//!
//! Widgets are plain values appended in declaration order. Buttons receive
//! sequential focus ids (0, 1, 2, ...) as they are appended; layout walks the
//! same list in the same order, so both agree on the numbering.

use crate::types::FocusId;

/// A declared widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    /// Wrapped, non-focusable text.
    Text(String),
    /// Focusable bordered button.
    Button { label: String, focus_id: FocusId },
    /// Start of a horizontally packed region.
    GroupStart,
    /// End of a horizontally packed region.
    GroupEnd,
}

impl Widget {
    /// Focus id for focusable widgets.
    #[inline]
    pub fn focus_id(&self) -> Option<FocusId> {
        match self {
            Widget::Button { focus_id, .. } => Some(*focus_id),
            Widget::Text(_) | Widget::GroupStart | Widget::GroupEnd => None,
        }
    }
}

/// Ordered widget list for the current frame.
#[derive(Debug, Clone, Default)]
pub struct WidgetList {
    widgets: Vec<Widget>,
    focusable: usize,
}

impl WidgetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all widgets, keeping the allocation.
    pub fn clear(&mut self) {
        self.widgets.clear();
        self.focusable = 0;
    }

    pub fn push_text(&mut self, label: impl Into<String>) {
        self.widgets.push(Widget::Text(label.into()));
    }

    /// Append a button and return its focus id.
    pub fn push_button(&mut self, label: impl Into<String>) -> FocusId {
        let focus_id = self.focusable;
        self.widgets.push(Widget::Button {
            label: label.into(),
            focus_id,
        });
        self.focusable += 1;
        focus_id
    }

    pub fn push_group_start(&mut self) {
        self.widgets.push(Widget::GroupStart);
    }

    pub fn push_group_end(&mut self) {
        self.widgets.push(Widget::GroupEnd);
    }

    /// Number of focusable widgets declared so far.
    #[inline]
    pub fn focus_count(&self) -> usize {
        self.focusable
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Widget> {
        self.widgets.iter()
    }
}

impl<'a> IntoIterator for &'a WidgetList {
    type Item = &'a Widget;
    type IntoIter = std::slice::Iter<'a, Widget>;

    fn into_iter(self) -> Self::IntoIter {
        self.widgets.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
