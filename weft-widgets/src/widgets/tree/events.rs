use weft::Key;

use crate::expansion;
use crate::navigation::NavDirection;
use crate::widgets::events::EventResult;

use super::Tree;

impl Tree {
    pub(super) fn on_key(&mut self, key: Key) -> EventResult {
        match key {
            Key::Up => self.move_selection(NavDirection::Backward),
            Key::Down => self.move_selection(NavDirection::Forward),
            Key::Right => self.expand_selected(true),
            Key::Left => self.expand_selected(false),
            key if key.is_activate() => self.activate_selected(),
            _ => EventResult::Ignored,
        }
    }

    fn move_selection(&mut self, direction: NavDirection) -> EventResult {
        let current = self.selected().map(str::to_string);
        let next = {
            let rows = self.visible();
            expansion::select_adjacent(&rows, current.as_deref(), direction)
        };
        match next {
            Some(key) if Some(&key) != current.as_ref() => self.select(&key).into(),
            _ => EventResult::Ignored,
        }
    }

    /// Branch state of the selected row: `(key, has_children, is_expanded)`.
    fn selected_row(&self) -> Option<(String, bool, bool)> {
        let selected = self.selected()?;
        self.visible()
            .into_iter()
            .find(|row| row.node.key == selected)
            .map(|row| (row.node.key.clone(), row.has_children, row.is_expanded))
    }

    /// Right expands a collapsed branch, left collapses an open one.
    /// Anything else is a no-op.
    fn expand_selected(&mut self, expand: bool) -> EventResult {
        match self.selected_row() {
            Some((key, true, is_expanded)) if is_expanded != expand => {
                self.toggle(&key).is_some().into()
            }
            _ => EventResult::Ignored,
        }
    }

    /// Enter/Space toggles a branch or selects a leaf, never both.
    fn activate_selected(&mut self) -> EventResult {
        match self.selected_row() {
            Some((key, true, _)) => self.toggle(&key).is_some().into(),
            Some((key, false, _)) => self.select(&key).into(),
            None => EventResult::Ignored,
        }
    }
}
