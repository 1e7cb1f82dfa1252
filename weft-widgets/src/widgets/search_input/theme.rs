use weft::{Border, Color, Edges};

use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes};

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |_| StyleAttributes::new())
        .style("label", |_| {
            StyleAttributes::new()
                .bold(true)
                .color(Color::WHITE)
                .margin(Edges::bottom(1))
        })
        .style("input_container", |p| {
            let border_color = if p.flag("is_disabled") {
                Color::GRAY
            } else if p.flag("is_active") {
                Color::BLUE
            } else {
                Color::WHITE
            };
            StyleAttributes::new()
                .border(Border::Single)
                .border_color(border_color)
                .padding(Edges::horizontal(1))
        })
        .style("search_icon", |p| {
            StyleAttributes::new().color(if p.flag("is_disabled") { Color::GRAY } else { Color::BLUE })
        })
        .style("input", |p| {
            let color = if p.flag("is_disabled") || !p.flag("has_value") {
                Color::GRAY
            } else {
                Color::WHITE
            };
            StyleAttributes::new().color(color).dim(!p.flag("has_value"))
        })
        .style("clear_button", |_| StyleAttributes::new().color(Color::GRAY))
        .style("results_container", |_| {
            StyleAttributes::new()
                .border(Border::Single)
                .border_color(Color::GRAY)
                .margin(Edges::top(1))
        })
        .style("category_header", |_| {
            StyleAttributes::new()
                .bold(true)
                .color(Color::YELLOW)
                .margin(Edges::top(1))
        })
        .style("result_item", |p| {
            StyleAttributes::new()
                .color(Color::WHITE)
                .maybe_background(p.flag("is_selected").then_some(Color::BLUE))
                .bold(p.flag("is_selected"))
        })
        .style("result_description", |_| {
            StyleAttributes::new()
                .color(Color::GRAY)
                .dim(true)
                .padding(Edges::left(2))
        })
        .style("results_footer", |_| {
            StyleAttributes::new()
                .color(Color::GRAY)
                .dim(true)
                .margin(Edges::top(1))
        })
        .config(|| {
            ConfigValue::map([(
                "icons",
                ConfigValue::map([
                    ("search", "🔍"),
                    ("clear", "✕"),
                    ("result", "•"),
                    ("category", "▶"),
                ]),
            )])
        })
}
