use weft::Key;

use crate::navigation::{self, NavDirection};
use crate::widgets::events::EventResult;

use super::Accordion;

impl Accordion {
    pub(super) fn on_key(&mut self, key: Key) -> EventResult {
        match key {
            Key::Up => self.move_focus(NavDirection::Backward),
            Key::Down => self.move_focus(NavDirection::Forward),
            key if key.is_activate() => match self.focused.clone() {
                Some(focused) => self.toggle(&focused).into(),
                None => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }

    fn move_focus(&mut self, direction: NavDirection) -> EventResult {
        let next = navigation::advance(&self.items, self.focused.as_deref(), direction);
        if next == self.focused {
            return EventResult::Ignored;
        }
        self.focused = next;
        EventResult::Consumed
    }
}
