//! Async key feed on top of crossterm's event stream.

use crossterm::event::{Event as CtEvent, EventStream};
use futures::{Stream, StreamExt};

use crate::event::Key;

/// Stream of key presses from the terminal.
///
/// Non-key events (mouse, resize, focus) are skipped. Read errors are passed
/// through so the caller decides whether to stop.
pub fn key_stream() -> impl Stream<Item = std::io::Result<Key>> {
    EventStream::new().filter_map(|event| async move {
        match event {
            Ok(CtEvent::Key(key_event)) => Key::from_key_event(key_event).map(Ok),
            Ok(_) => None,
            Err(e) => {
                log::error!("Event stream error: {}", e);
                Some(Err(e))
            }
        }
    })
}
