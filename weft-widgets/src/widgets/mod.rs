//! Widgets built on the behaviour layer.
//!
//! Every widget implements [`Widget`]: it consumes one [`weft::Key`] at a
//! time and renders itself into a [`weft::Element`] tree against a
//! [`Theme`](crate::theme::Theme). Each registers its default styles under
//! its `THEME` name.

pub mod accordion;
pub mod breadcrumb;
pub mod checkbox;
pub mod code_block;
pub mod date_picker;
pub mod events;
pub mod file_input;
pub mod menu;
pub mod modal;
pub mod options;
pub mod radio_group;
pub mod search_input;
pub mod separator;
pub mod slider;
pub mod switch;
pub mod table;
pub mod tabs;
pub mod toast;
pub mod tree;

pub use accordion::{Accordion, AccordionItem};
pub use breadcrumb::{Breadcrumb, BreadcrumbItem};
pub use checkbox::Checkbox;
pub use code_block::CodeBlock;
pub use date_picker::DatePicker;
pub use events::{EventResult, Widget};
pub use file_input::FileInput;
pub use menu::{Menu, MenuItem};
pub use modal::{ConfirmDialog, DialogVariant, Modal};
pub use options::{Orientation, Size, Variant};
pub use radio_group::{RadioGroup, RadioOption};
pub use search_input::SearchInput;
pub use separator::{LineVariant, Separator, TextPosition};
pub use slider::Slider;
pub use switch::Switch;
pub use table::{ColumnAlign, ColumnWidth, Table, TableColumn, TableRecord};
pub use tabs::{TabItem, Tabs};
pub use toast::{Toast, ToastManager, ToastPosition, ToastVariant};
pub use tree::Tree;
