//! Slider: a numeric value on a horizontal track.

use std::fmt;
use std::sync::Arc;

use weft::{Align, Color, Element, Key};

use crate::controlled::ControlledValue;
use crate::props;
use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes, Theme};
use crate::widgets::events::{EventResult, Widget};
use crate::widgets::options::{Variant, variant_color};

pub const DEFAULT_MIN: f64 = 0.0;
pub const DEFAULT_MAX: f64 = 100.0;
pub const DEFAULT_STEP: f64 = 1.0;
pub const DEFAULT_WIDTH: usize = 20;

/// Formats values for the value display and min/max labels.
pub type ValueFormatter = Arc<dyn Fn(f64) -> String + Send + Sync>;

pub struct Slider {
    value: ControlledValue<f64>,
    min: f64,
    max: f64,
    step: f64,
    width: usize,
    is_disabled: bool,
    label: Option<String>,
    has_value_display: bool,
    has_ticks: bool,
    tick_positions: Vec<f64>,
    has_min_max_labels: bool,
    format_value: ValueFormatter,
    variant: Variant,
}

impl Default for Slider {
    fn default() -> Self {
        Self::new()
    }
}

impl Slider {
    pub const THEME: &'static str = "Slider";

    /// A 0..=100 slider starting at the midpoint.
    pub fn new() -> Self {
        Self {
            value: ControlledValue::uncontrolled(midpoint(DEFAULT_MIN, DEFAULT_MAX)),
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            step: DEFAULT_STEP,
            width: DEFAULT_WIDTH,
            is_disabled: false,
            label: None,
            has_value_display: true,
            has_ticks: false,
            tick_positions: Vec::new(),
            has_min_max_labels: false,
            format_value: Arc::new(|value| value.to_string()),
            variant: Variant::Primary,
        }
    }

    /// Set the range. An uncontrolled value that was never set explicitly
    /// moves to the new midpoint.
    pub fn range(mut self, min: f64, max: f64) -> Self {
        let reset = !self.value.is_controlled()
            && *self.value.value() == midpoint(self.min, self.max);
        self.min = min;
        self.max = max;
        if reset {
            self.value.set_internal(midpoint(min, max));
        }
        self
    }

    pub fn step(mut self, step: f64) -> Self {
        self.step = step;
        self
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn default_value(mut self, value: f64) -> Self {
        self.value.set_internal(value);
        self
    }

    /// Caller-owned value.
    pub fn value(mut self, value: f64) -> Self {
        self.value.set_controlled(Some(value));
        self
    }

    pub fn set_value(&mut self, value: Option<f64>) {
        self.value.set_controlled(value);
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn value_display(mut self, has_value_display: bool) -> Self {
        self.has_value_display = has_value_display;
        self
    }

    /// Show tick marks. With no explicit positions, ticks go at 25%, 50%
    /// and 75% of the range.
    pub fn ticks(mut self, has_ticks: bool) -> Self {
        self.has_ticks = has_ticks;
        self
    }

    pub fn tick_positions(mut self, positions: Vec<f64>) -> Self {
        self.tick_positions = positions;
        self
    }

    pub fn min_max_labels(mut self, has_min_max_labels: bool) -> Self {
        self.has_min_max_labels = has_min_max_labels;
        self
    }

    pub fn format_value(mut self, format: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        self.format_value = Arc::new(format);
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn on_change(mut self, mut handler: impl FnMut(f64) + Send + 'static) -> Self {
        self.value.set_on_change(move |value: &f64| handler(*value));
        self
    }

    pub fn current(&self) -> f64 {
        *self.value.value()
    }

    /// Clamp to the range, then round to the nearest step. The rounded
    /// value is clamped again so it never leaves the range.
    pub fn normalize(&self, value: f64) -> f64 {
        let (low, high) = (self.min.min(self.max), self.max.max(self.min));
        let clamped = value.clamp(low, high);
        if self.step > 0.0 {
            ((clamped / self.step).round() * self.step).clamp(low, high)
        } else {
            clamped
        }
    }

    /// Request `value`, normalized. Ignored while disabled.
    pub fn set(&mut self, value: f64) -> bool {
        if self.is_disabled {
            return false;
        }
        let value = self.normalize(value);
        log::trace!("slider: -> {value}");
        self.value.update(value);
        true
    }

    fn fraction(&self) -> f64 {
        let span = self.max - self.min;
        if span == 0.0 {
            0.0
        } else {
            ((self.current() - self.min) / span).clamp(0.0, 1.0)
        }
    }

    /// The track as text: filled cells, the thumb, then empty track.
    pub fn track(&self, thumb: &str, filled: &str, empty: &str) -> String {
        if self.width == 0 {
            return String::new();
        }
        let position = ((self.fraction() * self.width as f64).round() as usize).min(self.width - 1);
        (0..self.width)
            .map(|i| {
                if i == position {
                    thumb
                } else if i < position {
                    filled
                } else {
                    empty
                }
            })
            .collect()
    }

    /// Tick row aligned under the track.
    pub fn tick_row(&self, tick: &str) -> String {
        let span = self.max - self.min;
        let positions: Vec<f64> = if self.tick_positions.is_empty() {
            [0.25, 0.5, 0.75].iter().map(|p| self.min + span * p).collect()
        } else {
            self.tick_positions.clone()
        };
        let tolerance = span.abs() / self.width.max(1) as f64;

        (0..self.width)
            .map(|i| {
                let value = self.min + (i as f64 / self.width as f64) * span;
                if positions.iter().any(|pos| (value - pos).abs() < tolerance) {
                    tick
                } else {
                    " "
                }
            })
            .collect()
    }
}

impl Widget for Slider {
    fn handle_key(&mut self, key: Key) -> EventResult {
        if self.is_disabled {
            return EventResult::Ignored;
        }
        let current = self.current();
        match key {
            Key::Left | Key::Char('h') => self.set(current - self.step).into(),
            Key::Right | Key::Char('l') => self.set(current + self.step).into(),
            Key::Char(c) if c.is_ascii_digit() => {
                let digit = f64::from(c.to_digit(10).unwrap_or(0));
                self.set(self.min + digit / 9.0 * (self.max - self.min)).into()
            }
            _ => EventResult::Ignored,
        }
    }

    fn element(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let config = styles.config();
        let variant = self.variant.as_str();

        let track = self.track(
            &config.str_or("icons.thumb", "●"),
            &config.str_or("icons.filled", "█"),
            &config.str_or("icons.track", "─"),
        );
        let ticks = self.has_ticks.then(|| {
            styles.apply(
                "ticks",
                &props! {},
                Element::text(self.tick_row(&config.str_or("icons.tick", "|"))),
            )
        });
        let min_label = self.has_min_max_labels.then(|| {
            styles.apply("min_max_label", &props! {}, Element::text((self.format_value)(self.min)))
        });
        let max_label = self.has_min_max_labels.then(|| {
            styles.apply("min_max_label", &props! {}, Element::text((self.format_value)(self.max)))
        });
        let value = self.has_value_display.then(|| {
            styles.apply(
                "value_display",
                &props! { variant: variant },
                Element::text((self.format_value)(self.current())),
            )
        });
        let label = self
            .label
            .as_ref()
            .map(|label| styles.apply("label", &props! {}, Element::text(label.clone())));

        styles.apply(
            "container",
            &props! { is_disabled: self.is_disabled },
            Element::col().maybe_child(label).child(styles.apply(
                "slider",
                &props! {},
                Element::row()
                    .gap(1)
                    .align(Align::Center)
                    .maybe_child(min_label)
                    .child(
                        Element::col()
                            .child(styles.apply(
                                "track",
                                &props! { is_disabled: self.is_disabled, variant: variant },
                                Element::text(track),
                            ))
                            .maybe_child(ticks),
                    )
                    .maybe_child(max_label)
                    .maybe_child(value),
            )),
        )
    }
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("value", &self.current())
            .field("min", &self.min)
            .field("max", &self.max)
            .field("step", &self.step)
            .field("is_disabled", &self.is_disabled)
            .finish_non_exhaustive()
    }
}

fn midpoint(min: f64, max: f64) -> f64 {
    min + (max - min) / 2.0
}

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("container", |p| StyleAttributes::new().dim(p.flag("is_disabled")))
        .style("label", |_| StyleAttributes::new().bold(true).color(Color::WHITE))
        .style("slider", |_| StyleAttributes::new())
        .style("track", |p| {
            let color = if p.flag("is_disabled") {
                Color::GRAY
            } else {
                variant_color(p.str("variant"))
            };
            StyleAttributes::new().color(color)
        })
        .style("ticks", |_| StyleAttributes::new().color(Color::GRAY))
        .style("min_max_label", |_| StyleAttributes::new().color(Color::GRAY))
        .style("value_display", |p| {
            StyleAttributes::new().color(variant_color(p.str("variant"))).bold(true)
        })
        .config(|| {
            ConfigValue::map([(
                "icons",
                ConfigValue::map([("track", "─"), ("thumb", "●"), ("filled", "█"), ("tick", "|")]),
            )])
        })
}
