//! Month-view calendar state machine.
//!
//! [`CalendarState`] is advanced by [`CalendarState::reduce`], a pure
//! transition over [`CalendarAction`]s. Weeks start on Sunday.

use chrono::{Datelike, Days, Months, NaiveDate};

/// Month paging direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthStep {
    Next,
    Previous,
}

/// Focus movement inside the grid. Up/down move by a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Up,
    Down,
    Left,
    Right,
}

/// Inclusive selection bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateBounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateBounds {
    pub fn new(min: Option<NaiveDate>, max: Option<NaiveDate>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.min.is_none_or(|min| date >= min) && self.max.is_none_or(|max| date <= max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarAction {
    NavigateMonth(MonthStep),
    FocusDay(FocusMove),
    /// Select the focused date; ignored when it falls outside the bounds.
    SelectDate(DateBounds),
    /// Select `date` and bring it into view.
    SetDate(NaiveDate),
}

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_selected: bool,
    pub is_focused: bool,
    pub is_current_month: bool,
    pub is_disabled: bool,
}

/// Calendar view state. `view_date` is always the first of a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    pub view_date: NaiveDate,
    pub focused_date: NaiveDate,
    pub selected_date: Option<NaiveDate>,
}

impl CalendarState {
    /// Focus `initial` with its month in view.
    pub fn new(initial: NaiveDate, selected: Option<NaiveDate>) -> Self {
        Self {
            view_date: first_of_month(initial),
            focused_date: initial,
            selected_date: selected,
        }
    }

    /// Apply `action`. Moves that would leave chrono's date range leave the
    /// state unchanged.
    pub fn reduce(self, action: CalendarAction) -> Self {
        match action {
            CalendarAction::NavigateMonth(step) => {
                let paged = match step {
                    MonthStep::Next => self.view_date.checked_add_months(Months::new(1)),
                    MonthStep::Previous => self.view_date.checked_sub_months(Months::new(1)),
                };
                match paged {
                    Some(view_date) => Self {
                        view_date,
                        focused_date: view_date,
                        ..self
                    },
                    None => self,
                }
            }
            CalendarAction::FocusDay(movement) => {
                let moved = match movement {
                    FocusMove::Left => self.focused_date.checked_sub_days(Days::new(1)),
                    FocusMove::Right => self.focused_date.checked_add_days(Days::new(1)),
                    FocusMove::Up => self.focused_date.checked_sub_days(Days::new(7)),
                    FocusMove::Down => self.focused_date.checked_add_days(Days::new(7)),
                };
                match moved {
                    Some(focused_date) => Self {
                        view_date: if same_month(focused_date, self.view_date) {
                            self.view_date
                        } else {
                            first_of_month(focused_date)
                        },
                        focused_date,
                        ..self
                    },
                    None => self,
                }
            }
            CalendarAction::SelectDate(bounds) => {
                if !bounds.contains(self.focused_date) {
                    log::trace!("calendar: {} outside bounds, not selected", self.focused_date);
                    return self;
                }
                Self {
                    selected_date: Some(self.focused_date),
                    ..self
                }
            }
            CalendarAction::SetDate(date) => Self {
                view_date: first_of_month(date),
                focused_date: date,
                selected_date: Some(date),
            },
        }
    }

    /// Sunday-first weeks covering the whole view month.
    pub fn weeks(&self, today: NaiveDate, bounds: &DateBounds) -> Vec<Vec<CalendarDay>> {
        let first = self.view_date;
        let last = last_of_month(first);
        let start = first
            .checked_sub_days(Days::new(u64::from(first.weekday().num_days_from_sunday())))
            .unwrap_or(first);
        let end = last
            .checked_add_days(Days::new(u64::from(6 - last.weekday().num_days_from_sunday())))
            .unwrap_or(last);

        let days: Vec<CalendarDay> = start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| CalendarDay {
                date,
                is_today: date == today,
                is_selected: self.selected_date == Some(date),
                is_focused: date == self.focused_date,
                is_current_month: same_month(date, self.view_date),
                is_disabled: !bounds.contains(date),
            })
            .collect();

        days.chunks(7).map(<[CalendarDay]>::to_vec).collect()
    }

    /// Header label, e.g. "January 2024".
    pub fn month_year_label(&self) -> String {
        self.view_date.format("%B %Y").to_string()
    }
}

/// First day of `date`'s month.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of `date`'s month.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}
