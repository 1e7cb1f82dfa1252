use weft::{Border, Color, Edges, Justify, Size};

use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes};

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |_| {
            StyleAttributes::new()
                .border(Border::Rounded)
                .padding(Edges::horizontal(1))
        })
        .style("header", |_| {
            StyleAttributes::new()
                .justify(Justify::SpaceBetween)
                .margin(Edges::bottom(1))
        })
        .style("month_year", |_| StyleAttributes::new().bold(true).color(Color::BLUE))
        .style("navigation_button", |p| {
            StyleAttributes::new()
                .color(if p.flag("is_disabled") { Color::GRAY } else { Color::CYAN })
                .bold(true)
        })
        .style("weekdays_header", |_| StyleAttributes::new().margin(Edges::bottom(1)))
        .style("weekday", |_| StyleAttributes::new().color(Color::GRAY).bold(true))
        .style("calendar", |_| StyleAttributes::new())
        .style("week", |_| StyleAttributes::new())
        .style("day", |p| {
            let (color, background) = if p.flag("is_disabled") || p.flag("is_other_month") {
                (Some(Color::GRAY), None)
            } else if p.flag("is_selected") {
                (Some(Color::WHITE), Some(Color::BLUE))
            } else if p.flag("is_focused") {
                (Some(Color::BLACK), Some(Color::CYAN))
            } else if p.flag("is_today") {
                (Some(Color::YELLOW), None)
            } else {
                (None, None)
            };
            StyleAttributes::new()
                .maybe_color(color)
                .maybe_background(background)
                .width(Size::Fixed(3))
        })
        .style("footer", |_| {
            StyleAttributes::new()
                .margin(Edges::top(1))
                .justify(Justify::Center)
        })
        .style("instructions", |_| StyleAttributes::new().color(Color::GRAY).dim(true))
        .config(|| {
            ConfigValue::map([(
                "weekdays",
                ConfigValue::from(vec!["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]),
            )])
        })
}
