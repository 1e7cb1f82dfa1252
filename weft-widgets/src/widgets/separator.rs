//! Separator lines, optionally with inline text.

use weft::text::{display_width, take_width};
use weft::{Color, Edges, Element, Key};

use crate::props;
use crate::theme::{ComponentTheme, ConfigValue, StyleAttributes, Theme};
use crate::widgets::events::{EventResult, Widget};
use crate::widgets::options::Orientation;

pub const DEFAULT_LENGTH: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineVariant {
    #[default]
    Solid,
    Dashed,
    Dotted,
    Double,
}

impl LineVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineVariant::Solid => "solid",
            LineVariant::Dashed => "dashed",
            LineVariant::Dotted => "dotted",
            LineVariant::Double => "double",
        }
    }

    fn fallback(&self, orientation: Orientation) -> &'static str {
        match (orientation, self) {
            (Orientation::Horizontal, LineVariant::Solid) => "─",
            (Orientation::Horizontal, LineVariant::Dashed) => "-",
            (Orientation::Horizontal, LineVariant::Dotted) => "·",
            (Orientation::Horizontal, LineVariant::Double) => "═",
            (Orientation::Vertical, LineVariant::Solid) => "│",
            (Orientation::Vertical, LineVariant::Dashed) => "¦",
            (Orientation::Vertical, LineVariant::Dotted) => "⋮",
            (Orientation::Vertical, LineVariant::Double) => "‖",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextPosition {
    Left,
    #[default]
    Center,
    Right,
}

/// Lay `text` into a line of `length` cells filled with `fill`. Text wider
/// than the line is cut to fit.
pub fn line_with_text(fill: &str, length: usize, text: &str, position: TextPosition) -> String {
    let text_width = display_width(text);
    if text_width >= length {
        return take_width(text, length);
    }
    let padding = length - text_width;
    let (left, right) = match position {
        TextPosition::Left => (0, padding),
        TextPosition::Right => (padding, 0),
        TextPosition::Center => (padding / 2, padding - padding / 2),
    };
    format!("{}{text}{}", fill.repeat(left), fill.repeat(right))
}

#[derive(Debug, Clone)]
pub struct Separator {
    variant: LineVariant,
    orientation: Orientation,
    length: usize,
    color: Option<Color>,
    character: Option<String>,
    text: Option<String>,
    text_position: TextPosition,
    margin_x: u16,
    margin_y: u16,
}

impl Default for Separator {
    fn default() -> Self {
        Self::new()
    }
}

impl Separator {
    pub const THEME: &'static str = "Separator";

    /// A horizontal solid line.
    pub fn new() -> Self {
        Self {
            variant: LineVariant::Solid,
            orientation: Orientation::Horizontal,
            length: DEFAULT_LENGTH,
            color: None,
            character: None,
            text: None,
            text_position: TextPosition::Center,
            margin_x: 0,
            margin_y: 0,
        }
    }

    pub fn variant(mut self, variant: LineVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Override the themed line character.
    pub fn character(mut self, character: impl Into<String>) -> Self {
        self.character = Some(character.into());
        self
    }

    /// Inline text (horizontal lines only).
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into()).filter(|text| !text.is_empty());
        self
    }

    pub fn text_position(mut self, position: TextPosition) -> Self {
        self.text_position = position;
        self
    }

    pub fn margin(mut self, margin: u16) -> Self {
        self.margin_x = margin;
        self.margin_y = margin;
        self
    }

    pub fn margin_x(mut self, margin: u16) -> Self {
        self.margin_x = margin;
        self
    }

    pub fn margin_y(mut self, margin: u16) -> Self {
        self.margin_y = margin;
        self
    }

    fn line_char(&self, config: &ConfigValue) -> String {
        if let Some(character) = &self.character {
            return character.clone();
        }
        let axis = match self.orientation {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        };
        config.str_or(
            &format!("{axis}.{}", self.variant.as_str()),
            self.variant.fallback(self.orientation),
        )
    }

    /// The horizontal line as text, or one vertical cell.
    pub fn line(&self, config: &ConfigValue) -> String {
        let fill = self.line_char(config);
        match (&self.text, self.orientation) {
            (Some(text), Orientation::Horizontal) => {
                line_with_text(&fill, self.length, text, self.text_position)
            }
            (_, Orientation::Horizontal) => fill.repeat(self.length),
            (_, Orientation::Vertical) => fill,
        }
    }
}

impl Widget for Separator {
    fn handle_key(&mut self, _key: Key) -> EventResult {
        EventResult::Ignored
    }

    fn element(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let line = self.line(&styles.config());
        let state = props! { variant: self.variant.as_str() };
        let margin = Edges::symmetric(self.margin_y, self.margin_x);

        let (container, line_style) = match self.orientation {
            Orientation::Horizontal => ("horizontal_container", "horizontal_line"),
            Orientation::Vertical => ("vertical_container", "vertical_line"),
        };
        let mut attrs = styles.get(line_style, &state);
        if let Some(color) = &self.color {
            attrs = attrs.color(color.clone());
        }

        let body = match self.orientation {
            Orientation::Horizontal => Element::row().child(attrs.apply(Element::text(line))),
            Orientation::Vertical => Element::col()
                .children((0..self.length).map(|_| attrs.apply(Element::text(line.clone())))),
        };
        styles.apply(container, &props! {}, body).margin(margin)
    }
}

fn line_color(variant: Option<&str>) -> Color {
    match variant {
        Some("dotted") => Color::GRAY,
        Some("dashed") => Color::CYAN,
        _ => Color::WHITE,
    }
}

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("horizontal_container", |_| StyleAttributes::new())
        .style("vertical_container", |_| StyleAttributes::new())
        .style("horizontal_line", |p| StyleAttributes::new().color(line_color(p.str("variant"))))
        .style("vertical_line", |p| StyleAttributes::new().color(line_color(p.str("variant"))))
        .config(|| {
            ConfigValue::map([
                (
                    "horizontal",
                    ConfigValue::map([
                        ("solid", "─"),
                        ("dashed", "-"),
                        ("dotted", "·"),
                        ("double", "═"),
                    ]),
                ),
                (
                    "vertical",
                    ConfigValue::map([
                        ("solid", "│"),
                        ("dashed", "¦"),
                        ("dotted", "⋮"),
                        ("double", "‖"),
                    ]),
                ),
            ])
        })
}
