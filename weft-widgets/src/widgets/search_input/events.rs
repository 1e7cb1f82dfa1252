use weft::Key;

use crate::navigation::NavDirection;
use crate::widgets::events::EventResult;

use super::SearchInput;

impl SearchInput {
    pub(super) fn on_key(&mut self, key: Key) -> EventResult {
        if self.is_disabled {
            return EventResult::Ignored;
        }

        if self.search.is_open() {
            match key {
                Key::Up => {
                    self.search.move_cursor(NavDirection::Backward);
                    return EventResult::Consumed;
                }
                Key::Down => {
                    self.search.move_cursor(NavDirection::Forward);
                    return EventResult::Consumed;
                }
                key if key.is_activate() => {
                    self.select_current();
                    return EventResult::Consumed;
                }
                Key::Escape => {
                    self.search.hide_results();
                    return EventResult::Consumed;
                }
                _ => {}
            }
        } else {
            match key {
                Key::Enter if self.search.meets_min_length() => {
                    self.search.show_results();
                    return EventResult::Consumed;
                }
                Key::Escape => {
                    if self.query().is_empty() {
                        return EventResult::Ignored;
                    }
                    self.clear();
                    return EventResult::Consumed;
                }
                _ => {}
            }
        }

        match key {
            Key::Backspace | Key::Delete => {
                let mut query = self.query().to_string();
                if query.pop().is_none() {
                    return EventResult::Ignored;
                }
                self.set_query(query);
                EventResult::Consumed
            }
            key => match key.printable() {
                Some(c) => {
                    let query = format!("{}{c}", self.query());
                    self.set_query(query);
                    EventResult::Consumed
                }
                None => EventResult::Ignored,
            },
        }
    }

    /// Pick the highlighted result: it becomes the query and the list closes.
    pub fn select_current(&mut self) -> bool {
        let Some(result) = self.search.selected().cloned() else {
            return false;
        };
        log::debug!("search input: selected {}", result.id);
        if let Some(handler) = self.on_select.as_mut() {
            handler(&result);
        }
        self.set_query(result.label);
        self.search.hide_results();
        true
    }

    /// Empty the query and close the list.
    pub fn clear(&mut self) {
        if !self.query().is_empty() {
            self.set_query(String::new());
        }
        self.search.hide_results();
    }
}
