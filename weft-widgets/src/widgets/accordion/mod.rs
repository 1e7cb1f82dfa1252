//! Accordion: stacked collapsible sections with animated open/close.

mod events;
mod render;
pub(crate) mod theme;

use weft::{Element, Key};

use crate::animation::Animations;
use crate::controlled::ControlledValue;
use crate::expansion::ExpansionSet;
use crate::navigation::{self, Selectable};
use crate::theme::Theme;
use crate::wakeup::WakeupHandle;
use crate::widgets::events::{EventResult, Widget};
use crate::widgets::options::Size;

/// One section of an accordion.
#[derive(Debug, Clone, PartialEq)]
pub struct AccordionItem {
    pub key: String,
    pub title: String,
    pub content: Element,
    pub is_disabled: bool,
    pub is_default_expanded: bool,
    pub icon: Option<String>,
}

impl AccordionItem {
    pub fn new(key: impl Into<String>, title: impl Into<String>, content: Element) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            content,
            is_disabled: false,
            is_default_expanded: false,
            icon: None,
        }
    }

    /// Section whose content is a single text element.
    pub fn text(key: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(key, title, Element::text(text))
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    pub fn default_expanded(mut self, expanded: bool) -> Self {
        self.is_default_expanded = expanded;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

impl Selectable for AccordionItem {
    fn key(&self) -> &str {
        &self.key
    }

    fn is_disabled(&self) -> bool {
        self.is_disabled
    }
}

type ToggleHandler = Box<dyn FnMut(&AccordionItem, bool) + Send>;

pub struct Accordion {
    items: Vec<AccordionItem>,
    expanded: ControlledValue<ExpansionSet>,
    focused: Option<String>,
    has_multiple: bool,
    has_borders: bool,
    has_icons: bool,
    size: Size,
    animations: Animations,
    on_toggle: Option<ToggleHandler>,
}

impl Accordion {
    pub const THEME: &'static str = "Accordion";

    pub fn new(items: Vec<AccordionItem>) -> Self {
        let defaults = ExpansionSet::from_keys(
            items
                .iter()
                .filter(|item| item.is_default_expanded)
                .map(|item| item.key.clone()),
        );
        let focused = navigation::first_enabled(&items).map(|item| item.key.clone());
        Self {
            items,
            expanded: ControlledValue::uncontrolled(defaults),
            focused,
            has_multiple: false,
            has_borders: true,
            has_icons: true,
            size: Size::default(),
            animations: Animations::new(),
            on_toggle: None,
        }
    }

    /// Additional keys to expand initially, on top of per-item defaults.
    pub fn default_expanded_items<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = self.expanded.value().clone();
        for key in keys {
            set = set.with(&key.into());
        }
        self.expanded.set_internal(set);
        self
    }

    /// Caller-owned expanded keys.
    pub fn expanded_items<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded.set_controlled(Some(ExpansionSet::from_keys(keys)));
        self
    }

    /// Update or release the caller-owned expanded keys.
    pub fn set_expanded_items(&mut self, keys: Option<Vec<String>>) {
        self.expanded.set_controlled(keys.map(ExpansionSet::from_keys));
    }

    /// Allow more than one section open at a time.
    pub fn multiple(mut self, has_multiple: bool) -> Self {
        self.has_multiple = has_multiple;
        self
    }

    pub fn borders(mut self, has_borders: bool) -> Self {
        self.has_borders = has_borders;
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

    /// Called with the section and its new expanded state.
    pub fn on_toggle(mut self, handler: impl FnMut(&AccordionItem, bool) + Send + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }

    /// Called with the full expanded set after each toggle.
    pub fn on_expanded_change(
        mut self,
        handler: impl FnMut(&ExpansionSet) + Send + 'static,
    ) -> Self {
        self.expanded.set_on_change(handler);
        self
    }

    /// Signal `wakeup` after every animation step.
    pub fn wakeup(mut self, wakeup: WakeupHandle) -> Self {
        self.animations.set_wakeup(wakeup);
        self
    }

    pub fn items(&self) -> &[AccordionItem] {
        &self.items
    }

    pub fn expanded(&self) -> &ExpansionSet {
        self.expanded.value()
    }

    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.value().contains(key)
    }

    pub fn focused_key(&self) -> Option<&str> {
        self.focused.as_deref()
    }

    pub fn animations(&self) -> &Animations {
        &self.animations
    }

    pub fn animations_mut(&mut self) -> &mut Animations {
        &mut self.animations
    }

    /// Toggle the section `key`. Disabled or unknown sections are ignored.
    ///
    /// Opening a section in single mode closes (and animates shut) every
    /// other open section; `on_toggle` reports each of those as collapsed
    /// before reporting the opened one.
    pub fn toggle(&mut self, key: &str) -> bool {
        let Some(index) = navigation::position_of(&self.items, key) else {
            return false;
        };
        if self.items[index].is_disabled {
            return false;
        }

        let current = self.expanded.value().clone();
        let was_expanded = current.contains(key);
        let mut closed = Vec::new();
        let next = if was_expanded {
            self.animations.start(key, false);
            current.without(key)
        } else {
            let base = if self.has_multiple {
                current
            } else {
                closed = current
                    .keys()
                    .filter(|k| *k != key)
                    .filter_map(|k| navigation::position_of(&self.items, k))
                    .collect();
                for &other in &closed {
                    self.animations.start(&self.items[other].key, false);
                }
                ExpansionSet::new()
            };
            self.animations.start(key, true);
            base.with(key)
        };

        log::debug!("accordion: {key} -> expanded {}", !was_expanded);
        self.expanded.update(next);
        if let Some(handler) = self.on_toggle.as_mut() {
            for other in closed {
                handler(&self.items[other], false);
            }
            handler(&self.items[index], !was_expanded);
        }
        true
    }
}

impl Widget for Accordion {
    fn handle_key(&mut self, key: Key) -> EventResult {
        self.on_key(key)
    }

    fn element(&self, theme: &Theme) -> Element {
        self.render(theme)
    }
}
