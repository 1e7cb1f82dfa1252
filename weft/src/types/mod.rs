mod color;
mod edges;
mod enums;
mod style;

pub use color::{Color, NamedColor, Rgb};
pub use edges::Edges;
pub use enums::{Align, Border, Direction, Justify, Overflow, Position, Size, TextStyle};
pub use style::Style;
