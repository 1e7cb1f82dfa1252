use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use weft::{Color, Key};

#[test]
fn test_from_key_event_press() {
    let event = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
    assert_eq!(Key::from_key_event(event), Some(Key::Up));

    let event = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
    assert_eq!(Key::from_key_event(event), Some(Key::Escape));

    let event = KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE);
    assert_eq!(Key::from_key_event(event), Some(Key::Char('n')));
}

#[test]
fn test_from_key_event_ignores_release() {
    let event = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
    assert_eq!(Key::from_key_event(event), None);
}

#[test]
fn test_from_key_event_unsupported() {
    let event = KeyEvent::new(KeyCode::F(5), KeyModifiers::NONE);
    assert_eq!(Key::from_key_event(event), None);
}

#[test]
fn test_activate_and_printable() {
    assert!(Key::Enter.is_activate());
    assert!(Key::Char(' ').is_activate());
    assert!(!Key::Char('x').is_activate());
    assert_eq!(Key::Char('x').printable(), Some('x'));
    assert_eq!(Key::Up.printable(), None);
}

#[test]
fn test_color_names() {
    assert_eq!(Color::from_name("Blue"), Some(Color::BLUE));
    assert_eq!(Color::from_name("grey"), Some(Color::GRAY));
    assert_eq!(Color::from_name("chartreuse"), None);
}

#[test]
fn test_oklch_black_and_white() {
    let black = Color::oklch(0.0, 0.0, 0.0).to_rgb();
    assert_eq!((black.r, black.g, black.b), (0, 0, 0));

    let white = Color::oklch(1.0, 0.0, 0.0).to_rgb();
    assert!(white.r >= 250 && white.g >= 250 && white.b >= 250);
}
