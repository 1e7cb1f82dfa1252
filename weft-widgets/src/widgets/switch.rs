//! Switch: an on/off toggle.

use weft::{Align, Border, Color, Edges, Element, Key, Size as Extent};

use crate::controlled::ControlledValue;
use crate::props;
use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes, Theme};
use crate::widgets::events::{EventResult, Widget};
use crate::widgets::options::{Size, Variant, variant_color};

pub struct Switch {
    checked: ControlledValue<bool>,
    is_disabled: bool,
    label: Option<String>,
    description: Option<String>,
    size: Size,
    variant: Variant,
    has_state_text: bool,
    checked_text: String,
    unchecked_text: String,
}

impl Default for Switch {
    fn default() -> Self {
        Self::new()
    }
}

impl Switch {
    pub const THEME: &'static str = "Switch";

    pub fn new() -> Self {
        Self {
            checked: ControlledValue::uncontrolled(false),
            is_disabled: false,
            label: None,
            description: None,
            size: Size::Medium,
            variant: Variant::Primary,
            has_state_text: false,
            checked_text: "ON".to_string(),
            unchecked_text: "OFF".to_string(),
        }
    }

    pub fn default_checked(mut self, checked: bool) -> Self {
        self.checked.set_internal(checked);
        self
    }

    /// Caller-owned state.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked.set_controlled(Some(checked));
        self
    }

    pub fn set_checked(&mut self, checked: Option<bool>) {
        self.checked.set_controlled(checked);
    }

    pub fn on_change(mut self, mut handler: impl FnMut(bool) + Send + 'static) -> Self {
        self.checked.set_on_change(move |checked: &bool| handler(*checked));
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Show ON/OFF text next to the track.
    pub fn state_text(mut self, has_state_text: bool) -> Self {
        self.has_state_text = has_state_text;
        self
    }

    pub fn checked_text(mut self, text: impl Into<String>) -> Self {
        self.checked_text = text.into();
        self
    }

    pub fn unchecked_text(mut self, text: impl Into<String>) -> Self {
        self.unchecked_text = text.into();
        self
    }

    pub fn is_checked(&self) -> bool {
        *self.checked.value()
    }

    /// Flip the state. Refused when disabled.
    pub fn toggle(&mut self) -> bool {
        if self.is_disabled {
            return false;
        }
        let next = !self.is_checked();
        log::trace!("switch toggled to {next}");
        self.checked.update(next);
        true
    }

    fn indicator(&self, config: &ConfigValue) -> String {
        let checked = self.is_checked();
        match self.size {
            Size::Small => {
                let path = if checked { "icons.small_on" } else { "icons.small_off" };
                config.str_or(path, if checked { "●" } else { "○" })
            }
            Size::Medium => {
                let path = if checked { "icons.track_filled" } else { "icons.track" };
                config.str_or(path, if checked { "███" } else { "───" })
            }
            Size::Large => {
                let path = if checked {
                    "icons.large_track_filled"
                } else {
                    "icons.large_track"
                };
                config.str_or(path, if checked { "█████" } else { "─────" })
            }
        }
    }
}

impl Widget for Switch {
    fn handle_key(&mut self, key: Key) -> EventResult {
        if self.is_disabled || !key.is_activate() {
            return EventResult::Ignored;
        }
        self.toggle().into()
    }

    fn element(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let config = styles.config();
        let state = props! {
            is_checked: self.is_checked(),
            is_disabled: self.is_disabled,
            size: self.size.as_str(),
            variant: self.variant.as_str(),
        };

        let state_text = self.has_state_text.then(|| {
            let text = if self.is_checked() {
                &self.checked_text
            } else {
                &self.unchecked_text
            };
            styles.apply("state_text", &state, Element::text(text.clone()))
        });

        let track = styles.apply(
            "track",
            &state,
            Element::row()
                .align(Align::Center)
                .child(styles.apply("indicator", &state, Element::text(self.indicator(&config))))
                .maybe_child(state_text),
        );

        let text_state = props! { is_disabled: self.is_disabled };
        let details = (self.label.is_some() || self.description.is_some()).then(|| {
            Element::col()
                .maybe_child(
                    self.label
                        .as_ref()
                        .map(|label| styles.apply("label", &text_state, Element::text(label.clone()))),
                )
                .maybe_child(self.description.as_ref().map(|description| {
                    styles.apply("description", &text_state, Element::text(description.clone()))
                }))
        });

        styles.apply(
            "container",
            &text_state,
            Element::row().gap(1).child(track).maybe_child(details),
        )
    }
}

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |p| StyleAttributes::new().dim(p.flag("is_disabled")))
        .style("track", |p| {
            let accent = if p.flag("is_checked") {
                variant_color(p.str("variant"))
            } else {
                Color::GRAY
            };
            let min_width = match p.str("size") {
                Some("small") => 3,
                Some("large") => 7,
                _ => 5,
            };
            StyleAttributes::new()
                .border(Border::Rounded)
                .border_color(accent)
                .padding(Edges::all(u16::from(p.str("size") == Some("large"))))
                .width(Extent::Fixed(min_width))
        })
        .style("indicator", |p| {
            let color = if p.flag("is_checked") {
                Color::WHITE
            } else if p.flag("is_disabled") {
                Color::GRAY
            } else {
                variant_color(p.str("variant"))
            };
            StyleAttributes::new().color(color).bold(p.flag("is_checked"))
        })
        .style("state_text", |p| {
            let color = if p.flag("is_disabled") && !p.flag("is_checked") {
                Color::GRAY
            } else {
                Color::WHITE
            };
            StyleAttributes::new().color(color).margin(Edges::left(1))
        })
        .style("label", |p| {
            StyleAttributes::new()
                .color(if p.flag("is_disabled") { Color::GRAY } else { Color::WHITE })
                .margin(Edges::left(1))
        })
        .style("description", |_| {
            StyleAttributes::new()
                .color(Color::GRAY)
                .dim(true)
                .margin(Edges::left(1))
        })
        .config(|| {
            ConfigValue::map([(
                "icons",
                ConfigValue::map([
                    ("track", "───"),
                    ("track_filled", "███"),
                    ("large_track", "─────"),
                    ("large_track_filled", "█████"),
                    ("small_on", "●"),
                    ("small_off", "○"),
                ]),
            )])
        })
}
