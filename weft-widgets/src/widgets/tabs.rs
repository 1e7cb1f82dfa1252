//! Tabs: a header strip of labels and the content of the active tab.

use weft::{Border, Color, Edges, Element, Key};

use crate::controlled::ControlledValue;
use crate::navigation::{self, NavDirection, Selectable};
use crate::props;
use crate::theme::{ComponentTheme, StyleAttributes, Theme};
use crate::widgets::events::{EventResult, Widget};

#[derive(Debug, Clone, PartialEq)]
pub struct TabItem {
    pub key: String,
    pub label: String,
    pub content: Element,
    pub is_disabled: bool,
}

impl TabItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>, content: Element) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            content,
            is_disabled: false,
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }
}

impl Selectable for TabItem {
    fn key(&self) -> &str {
        &self.key
    }

    fn is_disabled(&self) -> bool {
        self.is_disabled
    }
}

pub struct Tabs {
    items: Vec<TabItem>,
    active: ControlledValue<Option<String>>,
    is_full_width: bool,
}

impl Tabs {
    pub const THEME: &'static str = "Tabs";

    /// The first enabled tab starts active.
    pub fn new(items: Vec<TabItem>) -> Self {
        let first = navigation::first_enabled(&items).map(|item| item.key.clone());
        Self {
            items,
            active: ControlledValue::uncontrolled(first),
            is_full_width: false,
        }
    }

    pub fn default_active_key(mut self, key: impl Into<String>) -> Self {
        self.active.set_internal(Some(key.into()));
        self
    }

    /// Caller-owned active key.
    pub fn active_key(mut self, key: impl Into<String>) -> Self {
        self.active.set_controlled(Some(Some(key.into())));
        self
    }

    pub fn set_active_key(&mut self, key: Option<String>) {
        self.active.set_controlled(key.map(Some));
    }

    pub fn full_width(mut self, is_full_width: bool) -> Self {
        self.is_full_width = is_full_width;
        self
    }

    /// Called with the key of the newly active tab.
    pub fn on_change(mut self, mut handler: impl FnMut(&str) + Send + 'static) -> Self {
        self.active.set_on_change(move |key: &Option<String>| {
            if let Some(key) = key {
                handler(key.as_str());
            }
        });
        self
    }

    pub fn active(&self) -> Option<&str> {
        self.active.value().as_deref()
    }

    /// Activate `key`. Disabled tabs are refused.
    pub fn activate(&mut self, key: &str) -> bool {
        match navigation::position_of(&self.items, key) {
            Some(index) if !self.items[index].is_disabled => {
                self.active.update(Some(key.to_string()));
                true
            }
            _ => false,
        }
    }
}

impl Widget for Tabs {
    fn handle_key(&mut self, key: Key) -> EventResult {
        let direction = match key {
            Key::Left | Key::BackTab => NavDirection::Backward,
            Key::Right | Key::Tab => NavDirection::Forward,
            _ => return EventResult::Ignored,
        };
        let current = self.active().map(str::to_string);
        match navigation::advance(&self.items, current.as_deref(), direction) {
            Some(next) if Some(&next) != current.as_ref() => self.activate(&next).into(),
            _ => EventResult::Ignored,
        }
    }

    fn element(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);

        let headers = self.items.iter().map(|item| {
            let state = props! {
                is_active: self.active() == Some(item.key.as_str()),
                is_disabled: item.is_disabled,
                is_full_width: self.is_full_width,
            };
            styles.apply(
                "tab",
                &state,
                Element::box_()
                    .id(format!("tab-{}", item.key))
                    .child(styles.apply("tab_label", &state, Element::text(item.label.clone()))),
            )
        });

        let content = self
            .active()
            .and_then(|key| self.items.iter().find(|item| item.key == key))
            .map(|item| styles.apply("tab_content", &props! {}, item.content.clone()));

        styles.apply(
            "container",
            &props! {},
            Element::col()
                .child(styles.apply("tab_list", &props! {}, Element::row().children(headers)))
                .maybe_child(content),
        )
    }
}

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |_| StyleAttributes::new())
        .style("tab_list", |_| {
            StyleAttributes::new()
                .border(Border::Single)
                .border_color(Color::GRAY)
                .gap(1)
        })
        .style("tab", |p| {
            let attrs = StyleAttributes::new().padding(Edges::horizontal(1));
            let attrs = if p.flag("is_full_width") { attrs.flex_grow(1) } else { attrs };
            attrs.maybe_background(p.flag("is_active").then_some(Color::BLUE))
        })
        .style("tab_label", |p| {
            let color = if p.flag("is_disabled") {
                Color::GRAY
            } else if p.flag("is_active") {
                Color::WHITE
            } else {
                Color::GRAY
            };
            StyleAttributes::new()
                .color(color)
                .bold(p.flag("is_active"))
                .dim(p.flag("is_disabled"))
        })
        .style("tab_content", |_| StyleAttributes::new().padding(Edges::all(1)))
}
