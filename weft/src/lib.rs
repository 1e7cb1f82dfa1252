pub mod element;
pub mod event;
pub mod input;
pub mod text;
pub mod types;

pub use element::{Content, Element};
pub use event::Key;
pub use input::key_stream;
pub use types::*;
