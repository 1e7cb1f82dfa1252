//! Modal overlay and the confirm dialog built on it.
//!
//! Input is only handled while the overlay is open; closing flips the open
//! flag immediately so later keys fall through.

use weft::{
    Align, Border, Color, Edges, Element, Justify, Key, Position, Size as Extent,
};

use crate::props;
use crate::theme::{ComponentTheme, StyleAttributes, Theme};
use crate::widgets::events::{EventResult, Widget};

type Callback = Box<dyn FnMut() + Send>;

pub const DEFAULT_MODAL_WIDTH: u16 = 60;
pub const DEFAULT_DIALOG_WIDTH: u16 = 50;

// =============================================================================
// Modal
// =============================================================================

pub struct Modal {
    is_open: bool,
    title: Option<String>,
    content: Element,
    has_escape_close: bool,
    width: u16,
    height: Option<u16>,
    on_close: Option<Callback>,
}

impl Modal {
    pub const THEME: &'static str = "Modal";

    pub fn new(content: Element) -> Self {
        Self {
            is_open: false,
            title: None,
            content,
            has_escape_close: true,
            width: DEFAULT_MODAL_WIDTH,
            height: None,
            on_close: None,
        }
    }

    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn set_open(&mut self, is_open: bool) {
        self.is_open = is_open;
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_content(&mut self, content: Element) {
        self.content = content;
    }

    /// Whether Escape closes the modal (default on).
    pub fn escape_close(mut self, has_escape_close: bool) -> Self {
        self.has_escape_close = has_escape_close;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: u16) -> Self {
        self.height = Some(height);
        self
    }

    pub fn on_close(mut self, handler: impl FnMut() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(handler));
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn close(&mut self) {
        if !self.is_open {
            return;
        }
        log::debug!("modal closed");
        self.is_open = false;
        if let Some(handler) = self.on_close.as_mut() {
            handler();
        }
    }

    /// The overlay tree, or `None` while closed.
    pub fn overlay(&self, theme: &Theme) -> Option<Element> {
        if !self.is_open {
            return None;
        }
        let styles = theme.styler(Self::THEME);
        let header = self.title.as_ref().map(|title| {
            styles.apply(
                "header",
                &props! {},
                Element::box_().child(styles.apply("title", &props! {}, Element::text(title.clone()))),
            )
        });

        let mut container = styles.apply(
            "container",
            &props! {},
            Element::col()
                .maybe_child(header)
                .child(styles.apply("content", &props! {}, Element::box_().child(self.content.clone()))),
        );
        container = container.width(Extent::Fixed(self.width));
        if let Some(height) = self.height {
            container = container.height(Extent::Fixed(height));
        }

        Some(styles.apply(
            "overlay",
            &props! {},
            Element::box_()
                .id("modal-overlay")
                .position(Position::Absolute)
                .top(0)
                .left(0)
                .right(0)
                .bottom(0)
                .child(container),
        ))
    }
}

impl Widget for Modal {
    fn handle_key(&mut self, key: Key) -> EventResult {
        if !self.is_open {
            return EventResult::Ignored;
        }
        if key == Key::Escape && self.has_escape_close {
            self.close();
            return EventResult::Consumed;
        }
        EventResult::Ignored
    }

    fn element(&self, theme: &Theme) -> Element {
        self.overlay(theme).unwrap_or_else(Element::box_)
    }
}

// =============================================================================
// ConfirmDialog
// =============================================================================

/// Confirm button emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogVariant {
    #[default]
    Default,
    Destructive,
}

impl DialogVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            DialogVariant::Default => "default",
            DialogVariant::Destructive => "destructive",
        }
    }
}

/// Yes/no question. Enter confirms, Escape cancels; either closes it.
pub struct ConfirmDialog {
    is_open: bool,
    title: String,
    message: String,
    confirm_text: String,
    cancel_text: String,
    variant: DialogVariant,
    on_confirm: Option<Callback>,
    on_cancel: Option<Callback>,
}

impl ConfirmDialog {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            is_open: false,
            title: "Confirm".to_string(),
            message: message.into(),
            confirm_text: "Confirm".to_string(),
            cancel_text: "Cancel".to_string(),
            variant: DialogVariant::Default,
            on_confirm: None,
            on_cancel: None,
        }
    }

    pub fn open(mut self, is_open: bool) -> Self {
        self.is_open = is_open;
        self
    }

    pub fn set_open(&mut self, is_open: bool) {
        self.is_open = is_open;
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn confirm_text(mut self, text: impl Into<String>) -> Self {
        self.confirm_text = text.into();
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = text.into();
        self
    }

    pub fn variant(mut self, variant: DialogVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn on_confirm(mut self, handler: impl FnMut() + Send + 'static) -> Self {
        self.on_confirm = Some(Box::new(handler));
        self
    }

    pub fn on_cancel(mut self, handler: impl FnMut() + Send + 'static) -> Self {
        self.on_cancel = Some(Box::new(handler));
        self
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn confirm(&mut self) {
        if !self.is_open {
            return;
        }
        log::debug!("dialog confirmed");
        self.is_open = false;
        if let Some(handler) = self.on_confirm.as_mut() {
            handler();
        }
    }

    pub fn cancel(&mut self) {
        if !self.is_open {
            return;
        }
        log::debug!("dialog cancelled");
        self.is_open = false;
        if let Some(handler) = self.on_cancel.as_mut() {
            handler();
        }
    }
}

impl Widget for ConfirmDialog {
    fn handle_key(&mut self, key: Key) -> EventResult {
        if !self.is_open {
            return EventResult::Ignored;
        }
        match key {
            Key::Escape => self.cancel(),
            Key::Enter => self.confirm(),
            _ => return EventResult::Ignored,
        }
        EventResult::Consumed
    }

    fn element(&self, theme: &Theme) -> Element {
        if !self.is_open {
            return Element::box_();
        }
        let styles = theme.styler(Modal::THEME);
        let actions = styles.apply(
            "dialog_actions",
            &props! {},
            Element::row()
                .child(styles.apply(
                    "dialog_button",
                    &props! { variant: "cancel" },
                    Element::text(format!("{} (Esc)", self.cancel_text)),
                ))
                .child(styles.apply(
                    "dialog_button",
                    &props! { variant: self.variant.as_str() },
                    Element::text(format!("{} (Enter)", self.confirm_text)),
                )),
        );
        let body = Element::col()
            .gap(2)
            .child(Element::text(self.message.clone()))
            .child(actions);

        Modal::new(body)
            .open(true)
            .title(self.title.clone())
            .width(DEFAULT_DIALOG_WIDTH)
            .element(theme)
    }
}

pub(crate) fn theme() -> ComponentTheme {
    ComponentTheme::new()
        .style("overlay", |_| {
            StyleAttributes::new()
                .background(Color::BLACK)
                .justify(Justify::Center)
                .align(Align::Center)
        })
        .style("container", |_| {
            StyleAttributes::new()
                .background(Color::BLACK)
                .border(Border::Single)
                .border_color(Color::WHITE)
        })
        .style("header", |_| {
            StyleAttributes::new().padding(Edges::symmetric(1, 2))
        })
        .style("title", |_| StyleAttributes::new().bold(true).color(Color::WHITE))
        .style("content", |_| StyleAttributes::new().padding(Edges::all(2)).flex_grow(1))
        .style("dialog_actions", |_| StyleAttributes::new().gap(2).justify(Justify::End))
        .style("dialog_button", |p| {
            let variant = p.str("variant");
            let color = match variant {
                Some("destructive") => Color::RED,
                Some("cancel") => Color::GRAY,
                _ => Color::BLUE,
            };
            StyleAttributes::new().color(color).bold(variant != Some("cancel"))
        })
}
