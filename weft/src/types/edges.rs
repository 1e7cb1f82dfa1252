/// Per-side spacing in cells (padding or margin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn all(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left and right only (`paddingX`).
    pub const fn horizontal(value: u16) -> Self {
        Self::new(0, value, 0, value)
    }

    /// Top and bottom only (`paddingY`).
    pub const fn vertical(value: u16) -> Self {
        Self::new(value, 0, value, 0)
    }

    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub const fn top(value: u16) -> Self {
        Self::new(value, 0, 0, 0)
    }

    pub const fn bottom(value: u16) -> Self {
        Self::new(0, 0, value, 0)
    }

    pub const fn left(value: u16) -> Self {
        Self::new(0, 0, 0, value)
    }

    pub const fn right(value: u16) -> Self {
        Self::new(0, value, 0, 0)
    }

    /// Replace the top edge, keeping the others.
    pub const fn with_top(mut self, value: u16) -> Self {
        self.top = value;
        self
    }

    pub const fn horizontal_total(&self) -> u16 {
        self.left + self.right
    }

    pub const fn vertical_total(&self) -> u16 {
        self.top + self.bottom
    }
}
