use weft::{Color, Edges};

use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes};

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |_| StyleAttributes::new().padding(Edges::all(1)))
        .style("node", |p| {
            StyleAttributes::new()
                .maybe_background(p.flag("is_selected").then_some(Color::BLUE))
                .dim(p.flag("is_disabled"))
        })
        .style("lines", |_| StyleAttributes::new().color(Color::GRAY))
        .style("expand_icon", |_| StyleAttributes::new().color(Color::YELLOW))
        .style("node_icon", |p| {
            let color = if p.flag("is_selected") {
                Color::WHITE
            } else if p.flag("is_disabled") {
                Color::GRAY
            } else {
                Color::BLUE
            };
            StyleAttributes::new().color(color)
        })
        .style("node_label", |p| {
            let color = if p.flag("is_disabled") && !p.flag("is_selected") {
                Color::GRAY
            } else {
                Color::WHITE
            };
            StyleAttributes::new().color(color)
        })
        .config(|| {
            ConfigValue::map([(
                "icons",
                ConfigValue::map([
                    ("expanded", "▼"),
                    ("collapsed", "▶"),
                    ("folder", "📁"),
                    ("file", "•"),
                    ("line", "│"),
                    ("child", "├─"),
                    ("last_child", "└─"),
                ]),
            )])
        })
}
