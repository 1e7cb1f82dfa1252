use weft::Key;

use crate::calendar::{CalendarAction, FocusMove, MonthStep};
use crate::widgets::events::EventResult;

use super::DatePicker;

impl DatePicker {
    pub(super) fn on_key(&mut self, key: Key) -> EventResult {
        if self.is_disabled {
            return EventResult::Ignored;
        }

        let action = match key {
            Key::Left => CalendarAction::FocusDay(FocusMove::Left),
            Key::Right => CalendarAction::FocusDay(FocusMove::Right),
            Key::Up => CalendarAction::FocusDay(FocusMove::Up),
            Key::Down => CalendarAction::FocusDay(FocusMove::Down),
            Key::Enter => {
                let focused = self.state.focused_date;
                if !self.bounds.contains(focused) {
                    log::trace!("date picker: {focused} outside bounds, not submitted");
                    return EventResult::Consumed;
                }
                self.dispatch(CalendarAction::SelectDate(self.bounds));
                if let Some(handler) = self.on_submit.as_mut() {
                    handler(focused);
                }
                return EventResult::Consumed;
            }
            Key::Char(' ') => CalendarAction::SelectDate(self.bounds),
            Key::Char('n' | 'N') => CalendarAction::NavigateMonth(MonthStep::Next),
            Key::Char('p' | 'P') => CalendarAction::NavigateMonth(MonthStep::Previous),
            Key::Char('t' | 'T') => CalendarAction::SetDate(self.today),
            _ => return EventResult::Ignored,
        };

        self.dispatch(action);
        EventResult::Consumed
    }
}
