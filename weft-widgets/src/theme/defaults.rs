use std::collections::HashMap;
use std::sync::OnceLock;

use super::Theme;
use crate::widgets::{
    Accordion, Breadcrumb, Checkbox, CodeBlock, DatePicker, FileInput, Menu, Modal, RadioGroup,
    SearchInput, Separator, Slider, Switch, Table, Tabs, Toast, Tree, accordion, breadcrumb,
    checkbox, code_block, date_picker, file_input, menu, modal, radio_group, search_input,
    separator, slider, switch, table, tabs, toast, tree,
};

static DEFAULT: OnceLock<Theme> = OnceLock::new();

/// The built-in theme with every widget registered. Built on first use and
/// shared afterwards; cloning it is cheap.
pub fn default_theme() -> Theme {
    DEFAULT.get_or_init(build).clone()
}

fn build() -> Theme {
    log::debug!("building default theme");
    Theme::empty()
        .with_component(Accordion::THEME, accordion::theme::theme())
        .with_component(Breadcrumb::THEME, breadcrumb::theme())
        .with_component(Checkbox::THEME, checkbox::theme())
        .with_component(CodeBlock::THEME, code_block::theme())
        .with_component(DatePicker::THEME, date_picker::theme::theme())
        .with_component(FileInput::THEME, file_input::theme::theme())
        .with_component(Menu::THEME, menu::theme())
        .with_component(Modal::THEME, modal::theme())
        .with_component(RadioGroup::THEME, radio_group::theme())
        .with_component(SearchInput::THEME, search_input::theme::theme())
        .with_component(Separator::THEME, separator::theme())
        .with_component(Slider::THEME, slider::theme())
        .with_component(Switch::THEME, switch::theme())
        .with_component(Table::<HashMap<String, String>>::THEME, table::theme())
        .with_component(Tabs::THEME, tabs::theme())
        .with_component(Toast::THEME, toast::theme())
        .with_component(Tree::THEME, tree::theme::theme())
}
