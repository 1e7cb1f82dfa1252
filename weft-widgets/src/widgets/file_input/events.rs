use weft::Key;

use crate::navigation::NavDirection;
use crate::widgets::events::EventResult;

use super::FileInput;

impl FileInput {
    pub(super) fn on_key(&mut self, key: Key) -> EventResult {
        if self.is_disabled {
            return EventResult::Ignored;
        }

        if !self.is_browsing {
            return if key.is_activate() {
                self.open_browser().into()
            } else {
                EventResult::Ignored
            };
        }

        match key {
            Key::Up => {
                self.browser.move_cursor(NavDirection::Backward);
                EventResult::Consumed
            }
            Key::Down => {
                self.browser.move_cursor(NavDirection::Forward);
                EventResult::Consumed
            }
            key if key.is_activate() => {
                self.activate();
                EventResult::Consumed
            }
            Key::Escape => {
                self.close_browser();
                EventResult::Consumed
            }
            Key::Char('x') if self.has_multiple => {
                self.remove_highlighted();
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }
}
