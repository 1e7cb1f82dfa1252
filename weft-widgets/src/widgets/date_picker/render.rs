use chrono::Datelike;
use weft::{Element, text};

use crate::calendar::CalendarDay;
use crate::props;
use crate::theme::{Styler, Theme};

use super::DatePicker;

const DEFAULT_WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

impl DatePicker {
    pub(super) fn render(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let config = styles.config();
        let mut weekdays = config.str_list("weekdays");
        if weekdays.len() != 7 {
            weekdays = DEFAULT_WEEKDAYS.iter().map(|d| d.to_string()).collect();
        }

        let nav = props! { is_disabled: self.is_disabled };
        let header = styles.apply(
            "header",
            &props! {},
            Element::row()
                .child(styles.apply("navigation_button", &nav, Element::text("◀")))
                .child(styles.apply(
                    "month_year",
                    &props! {},
                    Element::text(self.state.month_year_label()),
                ))
                .child(styles.apply("navigation_button", &nav, Element::text("▶"))),
        );

        let weekday_header = styles.apply(
            "weekdays_header",
            &props! {},
            Element::row().children(weekdays.iter().map(|day| {
                styles.apply("weekday", &props! {}, Element::text(text::pad_center(day, 3)))
            })),
        );

        let weeks = self.state.weeks(self.today, &self.bounds);
        let calendar = styles.apply(
            "calendar",
            &props! {},
            Element::col().children(weeks.iter().map(|week| {
                styles.apply(
                    "week",
                    &props! {},
                    Element::row().children(week.iter().map(|day| render_day(styles, day))),
                )
            })),
        );

        let instructions = self.has_instructions.then(|| {
            styles.apply(
                "footer",
                &props! {},
                Element::row().child(styles.apply(
                    "instructions",
                    &props! {},
                    Element::text("←→↑↓ navigate • Space/Enter select • P/N month • T today"),
                )),
            )
        });
        let selected = self.state.selected_date.map(|date| {
            styles.apply(
                "footer",
                &props! {},
                Element::text(format!("Selected: {}", date.format("%A, %B %-d, %Y"))),
            )
        });

        styles.apply(
            "container",
            &props! {},
            Element::col()
                .child(header)
                .child(weekday_header)
                .child(calendar)
                .maybe_child(instructions)
                .maybe_child(selected),
        )
    }
}

fn render_day(styles: Styler<'_>, day: &CalendarDay) -> Element {
    styles.apply(
        "day",
        &props! {
            is_today: day.is_today,
            is_selected: day.is_selected,
            is_focused: day.is_focused,
            is_disabled: day.is_disabled,
            is_other_month: !day.is_current_month,
        },
        Element::text(text::pad_center(&day.date.day().to_string(), 3))
            .id(format!("day-{}", day.date)),
    )
}
