use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{
    Align, Direction, Edges, Justify, Overflow, Position, Size, Style,
};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the abstract layout tree handed to a box-model renderer.
///
/// Containers carry flex-like arrangement attributes; text leaves carry a
/// string. Both carry a [`Style`]. Nothing here knows about cells or the
/// terminal: positioning and painting are the renderer's job.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,

    // Layout (box model)
    pub width: Size,
    pub height: Size,
    pub padding: Edges,
    pub margin: Edges,

    // Positioning
    pub position: Position,
    pub top: Option<i16>,
    pub left: Option<i16>,
    pub right: Option<i16>,
    pub bottom: Option<i16>,

    // Flex container
    pub direction: Direction,
    pub gap: u16,
    pub justify: Justify,
    pub align: Align,

    // Flex item
    pub flex_grow: u16,

    pub overflow: Overflow,

    // Visual
    pub style: Style,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            width: Size::Auto,
            height: Size::Auto,
            padding: Edges::default(),
            margin: Edges::default(),
            position: Position::Static,
            top: None,
            left: None,
            right: None,
            bottom: None,
            direction: Direction::Column,
            gap: 0,
            justify: Justify::Start,
            align: Align::Start,
            flex_grow: 0,
            overflow: Overflow::Visible,
            style: Style::default(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Layout
    pub fn width(mut self, width: Size) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: Size) -> Self {
        self.height = height;
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    // Positioning
    pub fn position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    pub fn top(mut self, top: i16) -> Self {
        self.top = Some(top);
        self
    }

    pub fn left(mut self, left: i16) -> Self {
        self.left = Some(left);
        self
    }

    pub fn right(mut self, right: i16) -> Self {
        self.right = Some(right);
        self
    }

    pub fn bottom(mut self, bottom: i16) -> Self {
        self.bottom = Some(bottom);
        self
    }

    // Flex container
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    pub fn justify(mut self, justify: Justify) -> Self {
        self.justify = justify;
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    // Flex item
    pub fn flex_grow(mut self, flex_grow: u16) -> Self {
        self.flex_grow = flex_grow;
        self
    }

    pub fn overflow(mut self, overflow: Overflow) -> Self {
        self.overflow = overflow;
        self
    }

    // Visual
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Append a child only when `child` is `Some`.
    pub fn maybe_child(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    // Inspection

    pub fn get_children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    pub fn get_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Depth-first search for an element by id.
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id == id {
            return Some(self);
        }
        self.get_children().iter().find_map(|child| child.find(id))
    }

    /// All text leaves in pre-order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        match &self.content {
            Content::Text(text) => out.push(text),
            Content::Children(children) => {
                for child in children {
                    child.collect_texts(out);
                }
            }
            Content::None => {}
        }
    }

    /// Flatten the tree into plain lines: row children are concatenated,
    /// column children are stacked. Ignores padding, borders and sizing.
    pub fn plain_text(&self) -> String {
        self.plain_lines().join("\n")
    }

    fn plain_lines(&self) -> Vec<String> {
        match &self.content {
            Content::None => Vec::new(),
            Content::Text(text) => text.split('\n').map(str::to_string).collect(),
            Content::Children(children) => match self.direction {
                Direction::Column => children.iter().flat_map(Self::plain_lines).collect(),
                Direction::Row => {
                    let line: String = children
                        .iter()
                        .map(|child| child.plain_lines().join(" "))
                        .collect();
                    vec![line]
                }
            },
        }
    }
}
