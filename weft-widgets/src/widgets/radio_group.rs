//! Radio group: exactly one option chosen, selection follows focus.

use weft::{Color, Direction, Element, Key};

use crate::controlled::ControlledValue;
use crate::navigation::{self, NavDirection, Selectable};
use crate::props;
use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes, Theme};
use crate::widgets::events::{EventResult, Widget};
use crate::widgets::options::Orientation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    pub description: Option<String>,
    pub is_disabled: bool,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            description: None,
            is_disabled: false,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }
}

impl Selectable for RadioOption {
    fn key(&self) -> &str {
        &self.value
    }

    fn is_disabled(&self) -> bool {
        self.is_disabled
    }
}

pub struct RadioGroup {
    options: Vec<RadioOption>,
    value: ControlledValue<Option<String>>,
    label: Option<String>,
    is_disabled: bool,
    orientation: Orientation,
    has_indicators: bool,
}

impl RadioGroup {
    pub const THEME: &'static str = "RadioGroup";

    pub fn new(options: Vec<RadioOption>) -> Self {
        Self {
            options,
            value: ControlledValue::uncontrolled(None),
            label: None,
            is_disabled: false,
            orientation: Orientation::Vertical,
            has_indicators: true,
        }
    }

    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.value.set_internal(Some(value.into()));
        self
    }

    /// Caller-owned value.
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value.set_controlled(Some(Some(value.into())));
        self
    }

    pub fn set_value(&mut self, value: Option<String>) {
        self.value.set_controlled(value.map(Some));
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn indicators(mut self, has_indicators: bool) -> Self {
        self.has_indicators = has_indicators;
        self
    }

    /// Called with the newly chosen value.
    pub fn on_change(mut self, mut handler: impl FnMut(&String) + Send + 'static) -> Self {
        self.value.set_on_change(move |value: &Option<String>| {
            if let Some(value) = value {
                handler(value);
            }
        });
        self
    }

    pub fn selected(&self) -> Option<&str> {
        self.value.value().as_deref()
    }

    /// Choose `value`. Refused when the group or the option is disabled.
    pub fn select(&mut self, value: &str) -> bool {
        if self.is_disabled {
            return false;
        }
        match navigation::position_of(&self.options, value) {
            Some(index) if !self.options[index].is_disabled => {
                self.value.update(Some(value.to_string()));
                true
            }
            _ => false,
        }
    }
}

impl Widget for RadioGroup {
    fn handle_key(&mut self, key: Key) -> EventResult {
        if self.is_disabled {
            return EventResult::Ignored;
        }
        let direction = match key {
            Key::Up | Key::Left => NavDirection::Backward,
            Key::Down | Key::Right => NavDirection::Forward,
            key if key.is_activate() => {
                return match self.selected().map(str::to_string) {
                    Some(value) => self.select(&value).into(),
                    None => EventResult::Ignored,
                };
            }
            _ => return EventResult::Ignored,
        };

        let current = self.selected().map(str::to_string);
        match navigation::advance(&self.options, current.as_deref(), direction) {
            Some(next) if Some(&next) != current.as_ref() => self.select(&next).into(),
            _ => EventResult::Ignored,
        }
    }

    fn element(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let config = styles.config();
        let selected_icon = config.str_or("icons.selected", "◉");
        let unselected_icon = config.str_or("icons.unselected", "◯");
        let is_vertical = self.orientation == Orientation::Vertical;

        let options = self.options.iter().map(|option| {
            let is_selected = self.selected() == Some(option.value.as_str());
            let state = props! {
                is_selected: is_selected,
                is_disabled: self.is_disabled || option.is_disabled,
            };

            let indicator = self.has_indicators.then(|| {
                let icon = if is_selected { &selected_icon } else { &unselected_icon };
                styles.apply("indicator", &state, Element::text(format!("{icon} ")))
            });
            let description = option.description.as_ref().map(|description| {
                styles.apply("description", &state, Element::text(description.clone()))
            });

            styles.apply(
                "option",
                &state,
                Element::row()
                    .id(format!("radio-{}", option.value))
                    .maybe_child(indicator)
                    .child(
                        Element::col()
                            .child(styles.apply("label", &state, Element::text(option.label.clone())))
                            .maybe_child(description),
                    ),
            )
        });

        let group_label = self
            .label
            .as_ref()
            .map(|label| styles.apply("group_label", &props! {}, Element::text(label.clone())));

        styles.apply(
            "container",
            &props! {},
            Element::col()
                .gap(u16::from(is_vertical))
                .maybe_child(group_label)
                .child(styles.apply(
                    "options",
                    &props! { orientation: self.orientation.as_str() },
                    Element::box_()
                        .direction(if is_vertical { Direction::Column } else { Direction::Row })
                        .gap(if is_vertical { 0 } else { 3 })
                        .children(options),
                )),
        )
    }
}

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |_| StyleAttributes::new())
        .style("group_label", |_| StyleAttributes::new().bold(true).color(Color::WHITE))
        .style("options", |_| StyleAttributes::new())
        .style("option", |p| StyleAttributes::new().dim(p.flag("is_disabled")))
        .style("indicator", |p| {
            let color = if p.flag("is_disabled") {
                Color::GRAY
            } else if p.flag("is_selected") {
                Color::BLUE
            } else {
                Color::WHITE
            };
            StyleAttributes::new().color(color)
        })
        .style("label", |p| {
            let color = if p.flag("is_disabled") { Color::GRAY } else { Color::WHITE };
            StyleAttributes::new().color(color).bold(p.flag("is_selected"))
        })
        .style("description", |_| StyleAttributes::new().color(Color::GRAY).dim(true))
        .config(|| {
            ConfigValue::map([(
                "icons",
                ConfigValue::map([("selected", "◉"), ("unselected", "◯")]),
            )])
        })
}
