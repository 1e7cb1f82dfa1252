use weft::{Border, Color, Edges};

use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes};

fn spacing(size: Option<&str>) -> u16 {
    match size {
        Some("large") => 2,
        _ => 1,
    }
}

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |p| {
            StyleAttributes::new().padding(Edges::all(u16::from(p.flag("has_borders"))))
        })
        .style("item", |p| {
            let margin = match p.str("size") {
                Some("small") => 0,
                Some("large") => 2,
                _ => 1,
            };
            let attrs = StyleAttributes::new()
                .border_color(if p.flag("is_expanded") { Color::BLUE } else { Color::GRAY })
                .margin(Edges::bottom(margin))
                .dim(p.flag("is_disabled"));
            if p.flag("has_borders") {
                attrs.border(Border::Single)
            } else {
                attrs
            }
        })
        .style("header", |p| {
            let background = if p.flag("is_selected") {
                Some(Color::BLUE)
            } else if p.flag("is_expanded") {
                Some(Color::GRAY)
            } else {
                None
            };
            StyleAttributes::new()
                .padding(Edges::horizontal(spacing(p.str("size"))))
                .maybe_background(background)
        })
        .style("expand_icon", |p| {
            let color = if p.flag("is_disabled") {
                Color::GRAY
            } else if p.flag("is_expanded") {
                Color::BLUE
            } else {
                Color::WHITE
            };
            StyleAttributes::new().color(color)
        })
        .style("item_icon", |p| {
            StyleAttributes::new().color(if p.flag("is_disabled") { Color::GRAY } else { Color::CYAN })
        })
        .style("title", |p| {
            let color = if p.flag("is_disabled") && !p.flag("is_selected") {
                Color::GRAY
            } else {
                Color::WHITE
            };
            StyleAttributes::new()
                .color(color)
                .bold(p.flag("is_expanded") || p.flag("is_selected"))
                .flex_grow(1)
        })
        .style("content", |p| {
            StyleAttributes::new().padding(Edges::horizontal(spacing(p.str("size"))))
        })
        .style("content_text", |_| StyleAttributes::new().color(Color::WHITE))
        .config(|| {
            ConfigValue::map([(
                "icons",
                ConfigValue::map([("expanded", "▼"), ("collapsed", "▶")]),
            )])
        })
}
