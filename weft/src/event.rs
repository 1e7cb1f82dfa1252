//! Discrete key events delivered to widgets.
//!
//! One keystroke is one [`Key`]. The mapping from the abstract input feed is:
//! printable characters arrive as [`Key::Char`], `Enter` confirms, `Escape`
//! cancels, arrows navigate.

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

impl Key {
    /// `Enter` or the space bar, which most widgets treat as "activate".
    pub fn is_activate(&self) -> bool {
        matches!(self, Key::Enter | Key::Char(' '))
    }

    /// The printable character carried by this key, if any.
    pub fn printable(&self) -> Option<char> {
        match self {
            Key::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }

    /// Convert a crossterm key event. Releases and repeats are dropped so each
    /// physical keystroke is seen once; keys with no counterpart map to `None`.
    pub fn from_key_event(event: crossterm::event::KeyEvent) -> Option<Self> {
        use crossterm::event::{KeyCode, KeyEventKind};

        if event.kind != KeyEventKind::Press {
            return None;
        }

        let key = match event.code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            other => {
                log::trace!("Ignoring unsupported key code {:?}", other);
                return None;
            }
        };
        Some(key)
    }
}
