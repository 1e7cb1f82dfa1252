//! Option enums shared across widgets.

use weft::Color;

/// Widget size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "small",
            Size::Medium => "medium",
            Size::Large => "large",
        }
    }
}

/// Color variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    #[default]
    Primary,
    Success,
    Warning,
    Danger,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Danger => "danger",
        }
    }
}

/// Accent color for a variant name as passed through style props.
pub(crate) fn variant_color(variant: Option<&str>) -> Color {
    match variant {
        Some("success") => Color::GREEN,
        Some("warning") => Color::YELLOW,
        Some("danger") => Color::RED,
        _ => Color::BLUE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }
}
