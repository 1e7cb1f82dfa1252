//! Keyboard navigation over lists of selectable items.
//!
//! Items are addressed by key, never by index, so the item list can change
//! between keystrokes without invalidating the selection. Navigation only
//! ever lands on enabled items and wraps at both ends.

/// An item that keyboard navigation can land on.
pub trait Selectable {
    fn key(&self) -> &str;

    fn is_disabled(&self) -> bool {
        false
    }
}

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Forward,
    Backward,
}

/// The enabled items, in order.
pub fn enabled_subsequence<T: Selectable>(items: &[T]) -> Vec<&T> {
    items.iter().filter(|item| !item.is_disabled()).collect()
}

/// Position of `key` within the enabled subsequence.
///
/// Disabled and unknown keys are not found.
pub fn index_of<T: Selectable>(items: &[T], key: &str) -> Option<usize> {
    enabled_subsequence(items)
        .iter()
        .position(|item| item.key() == key)
}

/// Position of `key` in the full item list, disabled items included.
pub fn position_of<T: Selectable>(items: &[T], key: &str) -> Option<usize> {
    items.iter().position(|item| item.key() == key)
}

/// First enabled item.
pub fn first_enabled<T: Selectable>(items: &[T]) -> Option<&T> {
    items.iter().find(|item| !item.is_disabled())
}

/// Step from `current` to the next enabled item in `direction`.
///
/// - No enabled items: `current` is returned unchanged.
/// - `current` is absent or not among the enabled items: the first enabled
///   item, whatever the direction.
/// - Otherwise the neighbour in the enabled subsequence, wrapping around.
pub fn advance<T: Selectable>(
    items: &[T],
    current: Option<&str>,
    direction: NavDirection,
) -> Option<String> {
    let enabled = enabled_subsequence(items);
    if enabled.is_empty() {
        return current.map(str::to_string);
    }

    let position = current.and_then(|key| enabled.iter().position(|item| item.key() == key));
    let next = match position {
        None => 0,
        Some(i) => match direction {
            NavDirection::Forward => (i + 1) % enabled.len(),
            NavDirection::Backward => (i + enabled.len() - 1) % enabled.len(),
        },
    };

    Some(enabled[next].key().to_string())
}
