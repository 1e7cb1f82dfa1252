//! Date picker: a month calendar navigated by keyboard.

mod events;
mod render;
pub(crate) mod theme;

use chrono::{Local, NaiveDate};
use weft::{Element, Key};

use crate::calendar::{CalendarAction, CalendarState, DateBounds};
use crate::theme::Theme;
use crate::widgets::events::{EventResult, Widget};

type DateHandler = Box<dyn FnMut(NaiveDate) + Send>;

pub struct DatePicker {
    state: CalendarState,
    bounds: DateBounds,
    today: NaiveDate,
    is_disabled: bool,
    has_instructions: bool,
    on_select: Option<DateHandler>,
    on_submit: Option<DateHandler>,
}

impl Default for DatePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl DatePicker {
    pub const THEME: &'static str = "DatePicker";

    /// Focused on today, nothing selected.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        Self {
            state: CalendarState::new(today, None),
            bounds: DateBounds::default(),
            today,
            is_disabled: false,
            has_instructions: true,
            on_select: None,
            on_submit: None,
        }
    }

    /// Start with `date` selected and focused.
    pub fn default_value(mut self, date: NaiveDate) -> Self {
        self.state = CalendarState::new(date, Some(date));
        self
    }

    /// Start focused on `date` without selecting it.
    pub fn initial_focus(mut self, date: NaiveDate) -> Self {
        self.state = CalendarState::new(date, self.state.selected_date);
        self
    }

    pub fn min_date(mut self, date: NaiveDate) -> Self {
        self.bounds.min = Some(date);
        self
    }

    pub fn max_date(mut self, date: NaiveDate) -> Self {
        self.bounds.max = Some(date);
        self
    }

    /// Override "today" (highlighting and the `t` key).
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    pub fn instructions(mut self, has_instructions: bool) -> Self {
        self.has_instructions = has_instructions;
        self
    }

    /// Called whenever the selected date changes.
    pub fn on_select(mut self, handler: impl FnMut(NaiveDate) + Send + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    /// Called on Enter with the selected date, if any.
    pub fn on_submit(mut self, handler: impl FnMut(NaiveDate) + Send + 'static) -> Self {
        self.on_submit = Some(Box::new(handler));
        self
    }

    pub fn state(&self) -> &CalendarState {
        &self.state
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.state.selected_date
    }

    pub fn focused(&self) -> NaiveDate {
        self.state.focused_date
    }

    pub fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    /// Run `action` through the calendar, firing `on_select` when the
    /// selection changed.
    pub fn dispatch(&mut self, action: CalendarAction) -> bool {
        let before = self.state;
        self.state = before.reduce(action);
        if self.state.selected_date != before.selected_date {
            if let (Some(date), Some(handler)) = (self.state.selected_date, self.on_select.as_mut()) {
                handler(date);
            }
        }
        self.state != before
    }
}

impl Widget for DatePicker {
    fn handle_key(&mut self, key: Key) -> EventResult {
        self.on_key(key)
    }

    fn element(&self, theme: &Theme) -> Element {
        self.render(theme)
    }
}
