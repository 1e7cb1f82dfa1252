//! Key handling and rendering contract shared by every widget.

use weft::{Element, Key};

use crate::theme::Theme;

/// Result of handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Key was not used, offer it to someone else.
    Ignored,
    /// Key was used, stop propagation.
    Consumed,
}

impl EventResult {
    pub fn is_handled(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }
}

impl From<bool> for EventResult {
    fn from(handled: bool) -> Self {
        if handled {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

/// A stateful widget.
///
/// The host feeds keys one at a time and re-renders with `element()` when a
/// key was consumed or a timer woke it up.
pub trait Widget {
    /// Handle one key press.
    fn handle_key(&mut self, key: Key) -> EventResult;

    /// Build the element tree for the current state.
    fn element(&self, theme: &Theme) -> Element;
}
