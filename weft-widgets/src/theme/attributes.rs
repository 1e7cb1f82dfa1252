//! Resolved style attributes.

use weft::{Align, Border, Color, Direction, Edges, Element, Justify, Size, Style, TextStyle};

/// Attributes produced by a style function.
///
/// Every field is optional: `None` means "not set by this function", which
/// is what lets an override replace some attributes and keep the rest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleAttributes {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub bold: Option<bool>,
    pub dim: Option<bool>,
    pub italic: Option<bool>,
    pub underline: Option<bool>,
    pub border: Option<Border>,
    pub border_color: Option<Color>,
    pub padding: Option<Edges>,
    pub margin: Option<Edges>,
    pub gap: Option<u16>,
    pub width: Option<Size>,
    pub height: Option<Size>,
    pub flex_grow: Option<u16>,
    pub direction: Option<Direction>,
    pub justify: Option<Justify>,
    pub align: Option<Align>,
}

impl StyleAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn maybe_color(mut self, color: Option<Color>) -> Self {
        self.color = color;
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn maybe_background(mut self, color: Option<Color>) -> Self {
        self.background = color;
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    /// Dimmed text. Terminals have no opacity; disabled states use this.
    pub fn dim(mut self, dim: bool) -> Self {
        self.dim = Some(dim);
        self
    }

    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = Some(gap);
        self
    }

    pub fn width(mut self, width: Size) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = Some(height);
        self
    }

    pub fn flex_grow(mut self, flex_grow: u16) -> Self {
        self.flex_grow = Some(flex_grow);
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = Some(justify);
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = Some(align);
        self
    }

    /// Layer `over` on top of `self`: each attribute `over` sets wins.
    pub fn merge(&self, over: &StyleAttributes) -> StyleAttributes {
        StyleAttributes {
            color: over.color.clone().or_else(|| self.color.clone()),
            background: over.background.clone().or_else(|| self.background.clone()),
            bold: over.bold.or(self.bold),
            dim: over.dim.or(self.dim),
            italic: over.italic.or(self.italic),
            underline: over.underline.or(self.underline),
            border: over.border.or(self.border),
            border_color: over.border_color.clone().or_else(|| self.border_color.clone()),
            padding: over.padding.or(self.padding),
            margin: over.margin.or(self.margin),
            gap: over.gap.or(self.gap),
            width: over.width.or(self.width),
            height: over.height.or(self.height),
            flex_grow: over.flex_grow.or(self.flex_grow),
            direction: over.direction.or(self.direction),
            justify: over.justify.or(self.justify),
            align: over.align.or(self.align),
        }
    }

    /// The visual part as a [`Style`].
    pub fn to_style(&self) -> Style {
        Style {
            background: self.background.clone(),
            foreground: self.color.clone(),
            border: self.border.unwrap_or_default(),
            border_color: self.border_color.clone(),
            text_style: TextStyle {
                bold: self.bold.unwrap_or(false),
                italic: self.italic.unwrap_or(false),
                underline: self.underline.unwrap_or(false),
                dim: self.dim.unwrap_or(false),
                strikethrough: false,
            },
        }
    }

    /// Apply to an element. Layout attributes are only touched when set.
    pub fn apply(&self, element: Element) -> Element {
        let mut element = element.style(self.to_style());
        if let Some(padding) = self.padding {
            element = element.padding(padding);
        }
        if let Some(margin) = self.margin {
            element = element.margin(margin);
        }
        if let Some(gap) = self.gap {
            element = element.gap(gap);
        }
        if let Some(width) = self.width {
            element = element.width(width);
        }
        if let Some(height) = self.height {
            element = element.height(height);
        }
        if let Some(flex_grow) = self.flex_grow {
            element = element.flex_grow(flex_grow);
        }
        if let Some(direction) = self.direction {
            element = element.direction(direction);
        }
        if let Some(justify) = self.justify {
            element = element.justify(justify);
        }
        if let Some(align) = self.align {
            element = element.align(align);
        }
        element
    }
}
