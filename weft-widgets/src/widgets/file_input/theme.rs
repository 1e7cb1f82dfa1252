use weft::{Border, Color, Edges};

use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes};

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |_| StyleAttributes::new().padding(Edges::all(1)))
        .style("label", |_| {
            StyleAttributes::new()
                .color(Color::WHITE)
                .bold(true)
                .margin(Edges::bottom(1))
        })
        .style("input_area", |p| {
            let border_color = if p.flag("is_browsing") {
                Color::BLUE
            } else if p.flag("has_files") {
                Color::GREEN
            } else {
                Color::GRAY
            };
            StyleAttributes::new()
                .border(Border::Single)
                .border_color(border_color)
                .padding(Edges::horizontal(1))
                .dim(p.flag("is_disabled"))
        })
        .style("input_text", |p| {
            let color = if p.flag("is_disabled") {
                Color::GRAY
            } else if p.flag("has_files") {
                Color::GREEN
            } else {
                Color::WHITE
            };
            StyleAttributes::new().color(color).flex_grow(1)
        })
        .style("browse_button", |p| {
            StyleAttributes::new()
                .color(if p.flag("is_disabled") { Color::GRAY } else { Color::BLUE })
                .margin(Edges::left(2))
        })
        .style("selected_files", |_| {
            StyleAttributes::new()
                .border(Border::Rounded)
                .border_color(Color::GREEN)
                .padding(Edges::horizontal(1))
                .margin(Edges::top(1))
        })
        .style("selected_files_header", |_| StyleAttributes::new().color(Color::GREEN).bold(true))
        .style("selected_file", |_| StyleAttributes::new().color(Color::GREEN))
        .style("remove_button", |_| StyleAttributes::new().color(Color::RED))
        .style("browser", |_| {
            StyleAttributes::new()
                .border(Border::Single)
                .border_color(Color::BLUE)
                .padding(Edges::all(1))
        })
        .style("browser_header", |_| StyleAttributes::new().color(Color::BLUE).bold(true))
        .style("browser_item", |p| {
            let color = if p.flag("is_selected") {
                Color::BLACK
            } else if p.flag("is_file_selected") {
                Color::GREEN
            } else if p.flag("is_directory") {
                Color::CYAN
            } else {
                Color::WHITE
            };
            StyleAttributes::new()
                .color(color)
                .maybe_background(p.flag("is_selected").then_some(Color::BLUE))
        })
        .style("browser_footer", |_| StyleAttributes::new().color(Color::GRAY).dim(true))
        .config(|| {
            ConfigValue::map([(
                "icons",
                ConfigValue::map([
                    ("folder", "📁"),
                    ("file", "•"),
                    ("selected_file", "✓"),
                    ("back", "←"),
                ]),
            )])
        })
}
