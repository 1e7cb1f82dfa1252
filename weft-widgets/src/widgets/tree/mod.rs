//! Tree: hierarchical list with expandable branches and guide lines.

mod events;
mod render;
pub(crate) mod theme;

use weft::{Element, Key};

use crate::controlled::ControlledValue;
use crate::expansion::{self, ExpansionSet, FlatTreeNode, TreeNode};
use crate::theme::Theme;
use crate::widgets::events::{EventResult, Widget};

type SelectHandler = Box<dyn FnMut(&TreeNode) + Send>;
type ToggleHandler = Box<dyn FnMut(&TreeNode, bool) + Send>;

pub struct Tree {
    nodes: Vec<TreeNode>,
    selected: ControlledValue<Option<String>>,
    expanded: ControlledValue<ExpansionSet>,
    has_lines: bool,
    has_icons: bool,
    on_select: Option<SelectHandler>,
    on_toggle: Option<ToggleHandler>,
}

impl Tree {
    pub const THEME: &'static str = "Tree";

    pub fn new(nodes: Vec<TreeNode>) -> Self {
        let expanded = ExpansionSet::from_defaults(&nodes);
        Self {
            nodes,
            selected: ControlledValue::uncontrolled(None),
            expanded: ControlledValue::uncontrolled(expanded),
            has_lines: true,
            has_icons: true,
            on_select: None,
            on_toggle: None,
        }
    }

    pub fn default_selected_key(mut self, key: impl Into<String>) -> Self {
        self.selected.set_internal(Some(key.into()));
        self
    }

    /// Caller-owned selected key.
    pub fn selected_key(mut self, key: impl Into<String>) -> Self {
        self.selected.set_controlled(Some(Some(key.into())));
        self
    }

    pub fn set_selected_key(&mut self, key: Option<String>) {
        self.selected.set_controlled(key.map(Some));
    }

    /// Caller-owned expanded keys.
    pub fn expanded_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expanded.set_controlled(Some(ExpansionSet::from_keys(keys)));
        self
    }

    pub fn set_expanded_keys(&mut self, keys: Option<ExpansionSet>) {
        self.expanded.set_controlled(keys);
    }

    pub fn lines(mut self, has_lines: bool) -> Self {
        self.has_lines = has_lines;
        self
    }

    pub fn icons(mut self, has_icons: bool) -> Self {
        self.has_icons = has_icons;
        self
    }

    pub fn on_select(mut self, handler: impl FnMut(&TreeNode) + Send + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    pub fn on_toggle(mut self, handler: impl FnMut(&TreeNode, bool) + Send + 'static) -> Self {
        self.on_toggle = Some(Box::new(handler));
        self
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.value().as_deref()
    }

    pub fn expanded(&self) -> &ExpansionSet {
        self.expanded.value()
    }

    /// Visible rows for the current expansion state.
    pub fn visible(&self) -> Vec<FlatTreeNode<'_>> {
        expansion::flatten(&self.nodes, self.expanded.value())
    }

    /// Flip the expansion of `key`. Returns the new state.
    pub fn toggle(&mut self, key: &str) -> Option<bool> {
        let node = expansion::find_node(&self.nodes, key)?;
        let (next, is_expanded) = self.expanded.value().toggled(key);
        log::debug!("tree: {key} -> expanded {is_expanded}");
        if let Some(handler) = self.on_toggle.as_mut() {
            handler(node, is_expanded);
        }
        self.expanded.update(next);
        Some(is_expanded)
    }

    /// Select `key`. Disabled and unselectable nodes are refused.
    pub fn select(&mut self, key: &str) -> bool {
        let Some(node) = expansion::find_node(&self.nodes, key) else {
            return false;
        };
        if node.is_disabled || !node.is_selectable {
            return false;
        }
        if let Some(handler) = self.on_select.as_mut() {
            handler(node);
        }
        self.selected.update(Some(key.to_string()));
        true
    }
}

impl Widget for Tree {
    fn handle_key(&mut self, key: Key) -> EventResult {
        self.on_key(key)
    }

    fn element(&self, theme: &Theme) -> Element {
        self.render(theme)
    }
}
