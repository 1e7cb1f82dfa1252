/// The sixteen-ish colors every terminal understands, by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Named(NamedColor),
    Rgb { r: u8, g: u8, b: u8 },
    Oklch { l: f32, c: f32, h: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const BLACK: Color = Color::Named(NamedColor::Black);
    pub const RED: Color = Color::Named(NamedColor::Red);
    pub const GREEN: Color = Color::Named(NamedColor::Green);
    pub const YELLOW: Color = Color::Named(NamedColor::Yellow);
    pub const BLUE: Color = Color::Named(NamedColor::Blue);
    pub const MAGENTA: Color = Color::Named(NamedColor::Magenta);
    pub const CYAN: Color = Color::Named(NamedColor::Cyan);
    pub const WHITE: Color = Color::Named(NamedColor::White);
    pub const GRAY: Color = Color::Named(NamedColor::Gray);

    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Parse a color name as used in theme configuration (`"blue"`, `"grey"`).
    pub fn from_name(name: &str) -> Option<Self> {
        let named = match name.to_ascii_lowercase().as_str() {
            "black" => NamedColor::Black,
            "red" => NamedColor::Red,
            "green" => NamedColor::Green,
            "yellow" => NamedColor::Yellow,
            "blue" => NamedColor::Blue,
            "magenta" => NamedColor::Magenta,
            "cyan" => NamedColor::Cyan,
            "white" => NamedColor::White,
            "gray" | "grey" => NamedColor::Gray,
            _ => return None,
        };
        Some(Self::Named(named))
    }

    pub fn to_rgb(&self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(*r, *g, *b),
            Self::Oklch { l, c, h } => oklch_to_rgb(*l, *c, *h),
            Self::Named(named) => match named {
                NamedColor::Black => Rgb::new(0, 0, 0),
                NamedColor::Red => Rgb::new(205, 49, 49),
                NamedColor::Green => Rgb::new(13, 188, 121),
                NamedColor::Yellow => Rgb::new(229, 229, 16),
                NamedColor::Blue => Rgb::new(36, 114, 200),
                NamedColor::Magenta => Rgb::new(188, 63, 188),
                NamedColor::Cyan => Rgb::new(17, 168, 205),
                NamedColor::White => Rgb::new(229, 229, 229),
                NamedColor::Gray => Rgb::new(118, 118, 118),
            },
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

impl From<&Color> for crossterm::style::Color {
    fn from(color: &Color) -> Self {
        use crossterm::style::Color as Ct;
        match color {
            Color::Named(named) => match named {
                NamedColor::Black => Ct::Black,
                NamedColor::Red => Ct::DarkRed,
                NamedColor::Green => Ct::DarkGreen,
                NamedColor::Yellow => Ct::DarkYellow,
                NamedColor::Blue => Ct::DarkBlue,
                NamedColor::Magenta => Ct::DarkMagenta,
                NamedColor::Cyan => Ct::DarkCyan,
                NamedColor::White => Ct::White,
                NamedColor::Gray => Ct::Grey,
            },
            other => {
                let Rgb { r, g, b } = other.to_rgb();
                Ct::Rgb { r, g, b }
            }
        }
    }
}
