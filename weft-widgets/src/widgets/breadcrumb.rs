//! Breadcrumb trail with ellipsis collapsing.

use weft::{Align, Color, Edges, Element, Key};

use crate::props;
use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes, Theme};
use crate::widgets::events::{EventResult, Widget};
use crate::widgets::options::Size;

pub const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub icon: Option<String>,
    pub is_clickable: bool,
}

impl BreadcrumbItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            icon: None,
            is_clickable: true,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn clickable(mut self, is_clickable: bool) -> Self {
        self.is_clickable = is_clickable;
        self
    }

    fn is_ellipsis(&self) -> bool {
        self.label == ELLIPSIS && !self.is_clickable
    }
}

/// Collapse `items` to at most `max_items` entries: the first item, an
/// ellipsis, then the trailing `max_items - 2` items. At least one trailing
/// item is always kept.
pub fn collapse_items(items: &[BreadcrumbItem], max_items: Option<usize>) -> Vec<BreadcrumbItem> {
    let Some(max_items) = max_items.filter(|max| *max > 0) else {
        return items.to_vec();
    };
    if items.len() <= max_items {
        return items.to_vec();
    }
    let keep = max_items.saturating_sub(2).max(1);
    let mut collapsed = Vec::with_capacity(keep + 2);
    collapsed.extend(items.first().cloned());
    collapsed.push(BreadcrumbItem::new(ELLIPSIS).clickable(false));
    collapsed.extend_from_slice(&items[items.len() - keep..]);
    collapsed
}

pub struct Breadcrumb {
    items: Vec<BreadcrumbItem>,
    separator: Option<String>,
    max_items: Option<usize>,
    has_icons: bool,
    size: Size,
    has_current_highlight: bool,
}

impl Breadcrumb {
    pub const THEME: &'static str = "Breadcrumb";

    pub fn new(items: Vec<BreadcrumbItem>) -> Self {
        Self {
            items,
            separator: None,
            max_items: None,
            has_icons: true,
            size: Size::Medium,
            has_current_highlight: true,
        }
    }

    /// Override the themed separator.
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = Some(separator.into());
        self
    }

    pub fn max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    pub fn icons(mut self, has_icons: bool) -> Self {
        self.has_icons = has_icons;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn current_highlight(mut self, has_current_highlight: bool) -> Self {
        self.has_current_highlight = has_current_highlight;
        self
    }

    pub fn set_items(&mut self, items: Vec<BreadcrumbItem>) {
        self.items = items;
    }

    /// Items as displayed, after collapsing.
    pub fn visible_items(&self) -> Vec<BreadcrumbItem> {
        collapse_items(&self.items, self.max_items)
    }
}

impl Widget for Breadcrumb {
    fn handle_key(&mut self, _key: Key) -> EventResult {
        EventResult::Ignored
    }

    fn element(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let separator = self
            .separator
            .clone()
            .unwrap_or_else(|| styles.config().str_or("separator", "→"));
        let size = self.size.as_str();
        let items = self.visible_items();
        let last = items.len().saturating_sub(1);

        let crumbs = items.iter().enumerate().map(|(index, item)| {
            let is_ellipsis = item.is_ellipsis();
            let state = props! {
                is_last: index == last,
                is_clickable: item.is_clickable && !is_ellipsis,
                is_ellipsis: is_ellipsis,
                size: size,
                has_current_highlight: self.has_current_highlight,
            };
            let icon = item
                .icon
                .as_ref()
                .filter(|_| self.has_icons)
                .map(|icon| styles.apply("item_icon", &props! { size: size }, Element::text(icon.clone())));
            let divider = (index != last).then(|| {
                styles.apply("separator", &props! { size: size }, Element::text(separator.clone()))
            });

            Element::row()
                .align(Align::Center)
                .child(styles.apply(
                    "item",
                    &state,
                    Element::row()
                        .align(Align::Center)
                        .maybe_child(icon)
                        .child(styles.apply("item_text", &state, Element::text(item.label.clone()))),
                ))
                .maybe_child(divider)
        });

        styles.apply(
            "container",
            &props! { size: size },
            Element::row().align(Align::Center).children(crumbs),
        )
    }
}

fn size_padding(size: Option<&str>) -> u16 {
    u16::from(size == Some("large"))
}

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |p| StyleAttributes::new().padding(Edges::all(size_padding(p.str("size")))))
        .style("item", |p| {
            let is_current =
                p.flag("is_last") && p.flag("has_current_highlight") && !p.flag("is_ellipsis");
            StyleAttributes::new()
                .padding(Edges::all(size_padding(p.str("size"))))
                .maybe_background(is_current.then_some(Color::BLUE))
        })
        .style("item_icon", |p| {
            StyleAttributes::new()
                .color(Color::CYAN)
                .margin(Edges::right(u16::from(p.str("size") != Some("small"))))
        })
        .style("item_text", |p| {
            let is_current = p.flag("is_last") && p.flag("has_current_highlight");
            let color = if p.flag("is_ellipsis") {
                Color::GRAY
            } else if is_current {
                Color::WHITE
            } else if p.flag("is_clickable") {
                Color::BLUE
            } else {
                Color::WHITE
            };
            StyleAttributes::new()
                .color(color)
                .bold(is_current)
                .underline(p.flag("is_clickable") && !p.flag("is_last"))
        })
        .style("separator", |p| {
            let margin = if p.str("size") == Some("large") { 2 } else { 1 };
            StyleAttributes::new().color(Color::GRAY).margin(Edges::horizontal(margin))
        })
        .config(|| ConfigValue::map([("separator", "→")]))
}
