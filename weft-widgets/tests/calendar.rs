use std::sync::{Arc, Mutex};

use chrono::{Datelike, NaiveDate};
use weft::Key;
use weft_widgets::calendar::{
    self, CalendarAction, CalendarState, DateBounds, FocusMove, MonthStep,
};
use weft_widgets::widgets::DatePicker;
use weft_widgets::{EventResult, Widget};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ============================================================================
// Grid
// ============================================================================

#[test]
fn test_weeks_cover_month_in_whole_weeks() {
    let today = date(2024, 6, 15);
    let months = (1..=12)
        .map(|m| date(2024, m, 1))
        .chain([date(2023, 2, 1), date(2026, 2, 1), date(1999, 12, 1)]);

    for first in months {
        let state = CalendarState::new(first, None);
        let weeks = state.weeks(today, &DateBounds::default());
        let days: Vec<_> = weeks.iter().flatten().collect();

        assert_eq!(days.len() % 7, 0, "{first}");
        assert!(weeks.iter().all(|week| week.len() == 7));
        assert_eq!(days[0].date.weekday().num_days_from_sunday(), 0);

        let last = calendar::last_of_month(first);
        for day in first.iter_days().take_while(|d| *d <= last) {
            assert!(days.iter().any(|cell| cell.date == day), "{day} missing");
        }
        for cell in &days {
            let same = cell.date.month() == first.month() && cell.date.year() == first.year();
            assert_eq!(cell.is_current_month, same, "{}", cell.date);
        }
    }
}

#[test]
fn test_weeks_annotations() {
    let state = CalendarState::new(date(2024, 1, 12), Some(date(2024, 1, 20)));
    let bounds = DateBounds::new(Some(date(2024, 1, 10)), Some(date(2024, 1, 25)));
    let weeks = state.weeks(date(2024, 1, 15), &bounds);
    let find = |d: NaiveDate| *weeks.iter().flatten().find(|cell| cell.date == d).unwrap();

    assert!(find(date(2024, 1, 15)).is_today);
    assert!(find(date(2024, 1, 20)).is_selected);
    assert!(find(date(2024, 1, 12)).is_focused);
    assert!(find(date(2024, 1, 9)).is_disabled);
    assert!(!find(date(2024, 1, 10)).is_disabled);
    assert!(!find(date(2024, 1, 25)).is_disabled);
    assert!(find(date(2024, 1, 26)).is_disabled);
    // January 2024 starts on a Monday: the grid opens on Dec 31.
    assert_eq!(weeks[0][0].date, date(2023, 12, 31));
    assert!(!weeks[0][0].is_current_month);
}

// ============================================================================
// Reducer
// ============================================================================

#[test]
fn test_select_before_min_is_rejected() {
    let state = CalendarState::new(date(2024, 1, 5), None);
    let bounds = DateBounds::new(Some(date(2024, 1, 10)), None);

    let next = state.reduce(CalendarAction::SelectDate(bounds));
    assert_eq!(next.selected_date, None);
    assert_eq!(next, state);

    let selected = CalendarState::new(date(2024, 1, 5), Some(date(2024, 1, 20)));
    let next = selected.reduce(CalendarAction::SelectDate(bounds));
    assert_eq!(next.selected_date, Some(date(2024, 1, 20)));
}

#[test]
fn test_month_paging_focuses_first_day() {
    let state = CalendarState::new(date(2024, 1, 31), None);

    let next = state.reduce(CalendarAction::NavigateMonth(MonthStep::Next));
    assert_eq!(next.view_date, date(2024, 2, 1));
    assert_eq!(next.focused_date, date(2024, 2, 1));

    let prev = state.reduce(CalendarAction::NavigateMonth(MonthStep::Previous));
    assert_eq!(prev.view_date, date(2023, 12, 1));
    assert_eq!(prev.focused_date, date(2023, 12, 1));
}

#[test]
fn test_focus_movement_pages_view() {
    let state = CalendarState::new(date(2024, 1, 30), None);

    let down = state.reduce(CalendarAction::FocusDay(FocusMove::Down));
    assert_eq!(down.focused_date, date(2024, 2, 6));
    assert_eq!(down.view_date, date(2024, 2, 1));

    let state = CalendarState::new(date(2024, 3, 1), None);
    let left = state.reduce(CalendarAction::FocusDay(FocusMove::Left));
    assert_eq!(left.focused_date, date(2024, 2, 29));
    assert_eq!(left.view_date, date(2024, 2, 1));

    let up = state.reduce(CalendarAction::FocusDay(FocusMove::Up));
    assert_eq!(up.focused_date, date(2024, 2, 23));

    let right = state.reduce(CalendarAction::FocusDay(FocusMove::Right));
    assert_eq!(right.focused_date, date(2024, 3, 2));
    assert_eq!(right.view_date, date(2024, 3, 1));
}

#[test]
fn test_set_date_selects_and_shows() {
    let state = CalendarState::new(date(2024, 1, 1), None);
    let next = state.reduce(CalendarAction::SetDate(date(2025, 7, 4)));
    assert_eq!(next.selected_date, Some(date(2025, 7, 4)));
    assert_eq!(next.focused_date, date(2025, 7, 4));
    assert_eq!(next.view_date, date(2025, 7, 1));
    assert_eq!(next.month_year_label(), "July 2025");
}

// ============================================================================
// DatePicker
// ============================================================================

#[test]
fn test_date_picker_rejects_then_accepts() {
    let selections = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&selections);
    let mut picker = DatePicker::new()
        .today(date(2024, 1, 1))
        .initial_focus(date(2024, 1, 1))
        .min_date(date(2024, 1, 10))
        .on_select(move |d| log.lock().unwrap().push(d));

    for _ in 0..4 {
        picker.handle_key(Key::Right);
    }
    assert_eq!(picker.focused(), date(2024, 1, 5));
    assert_eq!(picker.handle_key(Key::Enter), EventResult::Consumed);
    assert_eq!(picker.selected(), None);

    picker.handle_key(Key::Down);
    for _ in 0..3 {
        picker.handle_key(Key::Right);
    }
    assert_eq!(picker.focused(), date(2024, 1, 15));
    picker.handle_key(Key::Enter);
    assert_eq!(picker.selected(), Some(date(2024, 1, 15)));
    assert_eq!(*selections.lock().unwrap(), vec![date(2024, 1, 15)]);
}

#[test]
fn test_date_picker_letter_keys() {
    let submitted = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&submitted);
    let mut picker = DatePicker::new()
        .today(date(2024, 5, 20))
        .default_value(date(2024, 1, 15))
        .on_submit(move |d| log.lock().unwrap().push(d));

    picker.handle_key(Key::Char('n'));
    assert_eq!(picker.state().view_date, date(2024, 2, 1));
    picker.handle_key(Key::Char('P'));
    picker.handle_key(Key::Char('p'));
    assert_eq!(picker.state().view_date, date(2023, 12, 1));
    // Paging never touches the selection.
    assert_eq!(picker.selected(), Some(date(2024, 1, 15)));

    picker.handle_key(Key::Char('t'));
    assert_eq!(picker.selected(), Some(date(2024, 5, 20)));
    assert_eq!(picker.state().view_date, date(2024, 5, 1));

    picker.handle_key(Key::Right);
    picker.handle_key(Key::Char(' '));
    assert_eq!(picker.selected(), Some(date(2024, 5, 21)));
    assert!(submitted.lock().unwrap().is_empty());

    picker.handle_key(Key::Enter);
    assert_eq!(*submitted.lock().unwrap(), vec![date(2024, 5, 21)]);
    assert_eq!(picker.handle_key(Key::Char('x')), EventResult::Ignored);
}

#[test]
fn test_date_picker_rejected_enter_does_not_submit() {
    let submitted = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&submitted);
    let mut picker = DatePicker::new()
        .today(date(2024, 3, 1))
        .default_value(date(2024, 3, 20))
        .initial_focus(date(2024, 3, 5))
        .min_date(date(2024, 3, 10))
        .on_submit(move |d| log.lock().unwrap().push(d));

    assert_eq!(picker.focused(), date(2024, 3, 5));
    assert_eq!(picker.handle_key(Key::Enter), EventResult::Consumed);
    assert_eq!(picker.selected(), Some(date(2024, 3, 20)));
    assert!(submitted.lock().unwrap().is_empty());

    for _ in 0..5 {
        picker.handle_key(Key::Right);
    }
    picker.handle_key(Key::Enter);
    assert_eq!(*submitted.lock().unwrap(), vec![date(2024, 3, 10)]);
}

#[test]
fn test_disabled_date_picker_ignores_keys() {
    let mut picker = DatePicker::new().today(date(2024, 1, 1)).initial_focus(date(2024, 1, 1)).disabled(true);
    assert_eq!(picker.handle_key(Key::Right), EventResult::Ignored);
    assert_eq!(picker.focused(), date(2024, 1, 1));
}

#[test]
fn test_date_picker_renders_month() {
    let picker = DatePicker::new()
        .today(date(2024, 1, 1))
        .default_value(date(2024, 1, 15));
    let element = picker.element(&weft_widgets::default_theme());
    let text = element.plain_text();

    assert!(text.contains("January 2024"), "{text}");
    assert!(element.find("day-2024-01-15").is_some());
    assert!(element.find("day-2023-12-31").is_some());
}
