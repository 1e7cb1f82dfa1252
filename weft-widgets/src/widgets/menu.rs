//! Menu: vertical list of commands with separators.

use weft::{Border, Color, Edges, Element, Key};

use crate::controlled::ControlledValue;
use crate::navigation::{self, NavDirection, Selectable};
use crate::props;
use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes, Theme};
use crate::widgets::events::{EventResult, Widget};

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub key: String,
    pub label: String,
    pub is_disabled: bool,
    pub is_separator: bool,
    pub icon: Option<String>,
    pub has_submenu: bool,
}

impl MenuItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            is_disabled: false,
            is_separator: false,
            icon: None,
            has_submenu: false,
        }
    }

    /// A non-selectable divider. An empty label draws a plain rule.
    pub fn separator(key: impl Into<String>) -> Self {
        Self {
            is_separator: true,
            ..Self::new(key, "")
        }
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Show the submenu indicator.
    pub fn submenu(mut self, has_submenu: bool) -> Self {
        self.has_submenu = has_submenu;
        self
    }
}

impl Selectable for MenuItem {
    fn key(&self) -> &str {
        &self.key
    }

    fn is_disabled(&self) -> bool {
        self.is_disabled || self.is_separator
    }
}

type SelectHandler = Box<dyn FnMut(&MenuItem) + Send>;

pub struct Menu {
    items: Vec<MenuItem>,
    highlighted: Option<String>,
    selected: ControlledValue<Option<String>>,
    has_borders: bool,
    has_icons: bool,
    on_select: Option<SelectHandler>,
}

impl Menu {
    pub const THEME: &'static str = "Menu";

    pub fn new(items: Vec<MenuItem>) -> Self {
        let highlighted = navigation::first_enabled(&items).map(|item| item.key.clone());
        Self {
            items,
            highlighted,
            selected: ControlledValue::uncontrolled(None),
            has_borders: true,
            has_icons: true,
            on_select: None,
        }
    }

    pub fn default_selected_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.highlighted = Some(key.clone());
        self.selected.set_internal(Some(key));
        self
    }

    /// Caller-owned selected key. The highlight starts on it.
    pub fn selected_key(mut self, key: impl Into<String>) -> Self {
        let key = key.into();
        self.highlighted = Some(key.clone());
        self.selected.set_controlled(Some(Some(key)));
        self
    }

    pub fn set_selected_key(&mut self, key: Option<String>) {
        self.selected.set_controlled(key.map(Some));
    }

    pub fn borders(mut self, has_borders: bool) -> Self {
        self.has_borders = has_borders;
        self
    }

    pub fn icons(mut self, has_icons: bool) -> Self {
        self.has_icons = has_icons;
        self
    }

    pub fn on_select(mut self, handler: impl FnMut(&MenuItem) + Send + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.value().as_deref()
    }

    /// Select `key`. Separators and disabled items are refused.
    pub fn select(&mut self, key: &str) -> bool {
        let Some(index) = navigation::position_of(&self.items, key) else {
            return false;
        };
        if self.items[index].is_disabled() {
            return false;
        }
        if let Some(handler) = self.on_select.as_mut() {
            handler(&self.items[index]);
        }
        self.selected.update(Some(key.to_string()));
        true
    }
}

impl Widget for Menu {
    fn handle_key(&mut self, key: Key) -> EventResult {
        let direction = match key {
            Key::Up => NavDirection::Backward,
            Key::Down => NavDirection::Forward,
            key if key.is_activate() => {
                return match self.highlighted.clone() {
                    Some(highlighted) => self.select(&highlighted).into(),
                    None => EventResult::Ignored,
                };
            }
            _ => return EventResult::Ignored,
        };

        let next = navigation::advance(&self.items, self.highlighted.as_deref(), direction);
        if next == self.highlighted {
            return EventResult::Ignored;
        }
        self.highlighted = next;
        EventResult::Consumed
    }

    fn element(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let config = styles.config();
        let selected_icon = config.str_or("icons.selected", "◉");
        let unselected_icon = config.str_or("icons.unselected", "◯");
        let submenu_icon = config.str_or("icons.submenu", "▶");

        let rows = self.items.iter().map(|item| {
            if item.is_separator {
                let rule = if item.label.is_empty() {
                    "─".repeat(20)
                } else {
                    item.label.clone()
                };
                return styles.apply(
                    "separator",
                    &props! {},
                    Element::row().child(styles.apply(
                        "separator_text",
                        &props! {},
                        Element::text(rule),
                    )),
                );
            }

            let is_selected = self.highlighted.as_deref() == Some(item.key.as_str());
            let is_active = self.selected() == Some(item.key.as_str());
            let is_disabled = item.is_disabled;
            let state = props! { is_selected: is_selected, is_disabled: is_disabled };

            let icon = self.has_icons.then(|| {
                let icon = item.icon.clone().unwrap_or_else(|| {
                    if is_selected {
                        selected_icon.clone()
                    } else {
                        unselected_icon.clone()
                    }
                });
                styles.apply("icon", &state, Element::text(format!("{icon} ")))
            });
            let submenu = item.has_submenu.then(|| {
                styles.apply(
                    "submenu_indicator",
                    &props! {},
                    Element::text(format!(" {submenu_icon}")),
                )
            });

            styles.apply(
                "item",
                &state.clone().with("is_active", is_active),
                Element::row()
                    .id(format!("menu-{}", item.key))
                    .maybe_child(icon)
                    .child(styles.apply("label", &state, Element::text(item.label.clone())))
                    .maybe_child(submenu),
            )
        });

        styles.apply(
            "container",
            &props! { has_borders: self.has_borders },
            Element::col().children(rows),
        )
    }
}

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |p| {
            let attrs = StyleAttributes::new().padding(Edges::horizontal(1));
            if p.flag("has_borders") {
                attrs.border(Border::Single).border_color(Color::GRAY)
            } else {
                attrs
            }
        })
        .style("item", |p| {
            StyleAttributes::new()
                .maybe_background(p.flag("is_selected").then_some(Color::BLUE))
                .dim(p.flag("is_disabled"))
        })
        .style("icon", |p| {
            StyleAttributes::new().color(if p.flag("is_selected") { Color::WHITE } else { Color::GRAY })
        })
        .style("label", |p| {
            let color = if p.flag("is_disabled") { Color::GRAY } else { Color::WHITE };
            StyleAttributes::new().color(color).bold(p.flag("is_selected"))
        })
        .style("submenu_indicator", |_| StyleAttributes::new().color(Color::GRAY))
        .style("separator", |_| StyleAttributes::new())
        .style("separator_text", |_| StyleAttributes::new().color(Color::GRAY).dim(true))
        .config(|| {
            ConfigValue::map([(
                "icons",
                ConfigValue::map([("selected", "◉"), ("unselected", "◯"), ("submenu", "▶")]),
            )])
        })
}
