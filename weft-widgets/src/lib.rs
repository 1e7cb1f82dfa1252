//! Stateful, themeable terminal widgets on top of `weft` elements.
//!
//! The crate splits into a behaviour layer (value resolution, navigation,
//! tree flattening, calendar math, search, timers) and the widgets built
//! from it. Widgets never draw; they render to a [`weft::Element`] tree and
//! react to [`weft::Key`] input.

pub mod animation;
pub mod calendar;
pub mod controlled;
pub mod error;
pub mod expansion;
pub mod file_browser;
pub mod logging;
pub mod navigation;
pub mod search;
pub mod theme;
pub mod timer;
pub mod wakeup;
pub mod widgets;

pub use error::{ListingError, ThemeError};
pub use theme::{Theme, default_theme, extend_theme};
pub use widgets::{EventResult, Widget};

pub mod prelude {
    pub use crate::calendar::{CalendarState, DateBounds};
    pub use crate::controlled::ControlledValue;
    pub use crate::error::{ListingError, ThemeError};
    pub use crate::expansion::{ExpansionSet, TreeNode};
    pub use crate::file_browser::{DirectoryProvider, ProviderEntry, StaticDirectoryProvider};
    pub use crate::navigation::{NavDirection, Selectable};
    pub use crate::props;
    pub use crate::search::{FilterFn, SearchResult, fuzzy_filter};
    pub use crate::theme::{
        ComponentTheme, ConfigValue, StyleAttributes, StyleProps, Theme, default_theme,
        extend_theme,
    };
    pub use crate::wakeup::{WakeupHandle, WakeupReceiver, WakeupSender};
    pub use crate::widgets::*;

    pub use weft::{Element, Key};
}
