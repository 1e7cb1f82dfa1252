//! Checkbox: a fully caller-owned boolean.
//!
//! The checkbox never stores a change itself; activation only reports the
//! requested state through `on_change` and the caller feeds it back.

use weft::{Color, Element, Key};

use crate::props;
use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes, Theme};
use crate::widgets::events::{EventResult, Widget};

type CheckHandler = Box<dyn FnMut(bool) + Send>;

#[derive(Default)]
pub struct Checkbox {
    is_checked: bool,
    is_indeterminate: bool,
    is_disabled: bool,
    label: Option<String>,
    on_change: Option<CheckHandler>,
}

impl Checkbox {
    pub const THEME: &'static str = "Checkbox";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.is_checked = checked;
        self
    }

    pub fn set_checked(&mut self, checked: bool) {
        self.is_checked = checked;
    }

    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.is_indeterminate = indeterminate;
        self
    }

    pub fn set_indeterminate(&mut self, indeterminate: bool) {
        self.is_indeterminate = indeterminate;
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn on_change(mut self, handler: impl FnMut(bool) + Send + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    pub fn is_checked(&self) -> bool {
        self.is_checked
    }

    pub fn is_indeterminate(&self) -> bool {
        self.is_indeterminate
    }
}

impl Widget for Checkbox {
    fn handle_key(&mut self, key: Key) -> EventResult {
        if self.is_disabled || !key.is_activate() {
            return EventResult::Ignored;
        }
        if let Some(handler) = self.on_change.as_mut() {
            handler(!self.is_checked);
        }
        EventResult::Consumed
    }

    fn element(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let config = styles.config();
        let icon = if self.is_indeterminate {
            config.str_or("indeterminate_icon", "─")
        } else if self.is_checked {
            config.str_or("checked_icon", "◉")
        } else {
            config.str_or("unchecked_icon", "◯")
        };
        let state = props! {
            is_checked: self.is_checked,
            is_indeterminate: self.is_indeterminate,
            is_disabled: self.is_disabled,
        };

        styles.apply(
            "container",
            &state,
            Element::row()
                .child(styles.apply("icon", &state, Element::text(icon)))
                .maybe_child(
                    self.label
                        .as_ref()
                        .map(|label| styles.apply("label", &state, Element::text(label.clone()))),
                ),
        )
    }
}

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |p| StyleAttributes::new().gap(1).dim(p.flag("is_disabled")))
        .style("icon", |p| {
            let marked = p.flag("is_checked") || p.flag("is_indeterminate");
            StyleAttributes::new().color(if marked { Color::GREEN } else { Color::GRAY })
        })
        .style("label", |_| StyleAttributes::new())
        .config(|| {
            ConfigValue::map([
                ("checked_icon", "◉"),
                ("unchecked_icon", "◯"),
                ("indeterminate_icon", "─"),
            ])
        })
}
