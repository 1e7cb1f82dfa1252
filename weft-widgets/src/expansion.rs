//! Tree flattening and expansion state.
//!
//! A [`TreeNode`] hierarchy plus an [`ExpansionSet`] produce the visible
//! rows of a tree in pre-order. The set is the only source of truth for
//! which subtrees are open; flattening is a pure function of both.

use std::collections::BTreeSet;

use crate::navigation::{self, NavDirection, Selectable};

// =============================================================================
// Tree Node
// =============================================================================

/// A node in a tree. Children are owned, so a hierarchy is always acyclic.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode {
    pub key: String,
    pub label: String,
    pub children: Vec<TreeNode>,
    pub is_disabled: bool,
    pub is_selectable: bool,
    pub is_default_expanded: bool,
    pub icon: Option<String>,
}

impl TreeNode {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            children: Vec::new(),
            is_disabled: false,
            is_selectable: true,
            is_default_expanded: false,
            icon: None,
        }
    }

    pub fn child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = TreeNode>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.is_selectable = selectable;
        self
    }

    pub fn default_expanded(mut self, expanded: bool) -> Self {
        self.is_default_expanded = expanded;
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Depth-first search by key.
    pub fn find(&self, key: &str) -> Option<&TreeNode> {
        if self.key == key {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(key))
    }
}

/// Depth-first search by key across a forest.
pub fn find_node<'a>(nodes: &'a [TreeNode], key: &str) -> Option<&'a TreeNode> {
    nodes.iter().find_map(|node| node.find(key))
}

// =============================================================================
// Expansion Set
// =============================================================================

/// Keys of the expanded nodes.
///
/// Updates return a new set so the previous value can be handed to a
/// controlled owner unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionSet {
    keys: BTreeSet<String>,
}

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Every node flagged `is_default_expanded`, at any depth.
    pub fn from_defaults(nodes: &[TreeNode]) -> Self {
        fn collect(nodes: &[TreeNode], keys: &mut BTreeSet<String>) {
            for node in nodes {
                if node.is_default_expanded {
                    keys.insert(node.key.clone());
                }
                collect(&node.children, keys);
            }
        }

        let mut keys = BTreeSet::new();
        collect(nodes, &mut keys);
        Self { keys }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// A copy with `key` flipped, plus whether `key` is now expanded.
    pub fn toggled(&self, key: &str) -> (Self, bool) {
        if self.contains(key) {
            (self.without(key), false)
        } else {
            (self.with(key), true)
        }
    }

    pub fn with(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.keys.insert(key.to_string());
        next
    }

    pub fn without(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.keys.remove(key);
        next
    }
}

// =============================================================================
// Flattening
// =============================================================================

/// A visible row of a flattened tree.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatTreeNode<'a> {
    pub node: &'a TreeNode,
    /// Depth in the tree (0 = root level).
    pub depth: usize,
    pub is_expanded: bool,
    pub has_children: bool,
    pub is_last_child: bool,
    /// One entry per ancestor: whether that ancestor has later siblings,
    /// i.e. whether a vertical guide line continues past this row.
    pub parent_path: Vec<bool>,
}

impl Selectable for FlatTreeNode<'_> {
    fn key(&self) -> &str {
        &self.node.key
    }

    fn is_disabled(&self) -> bool {
        self.node.is_disabled || !self.node.is_selectable
    }
}

/// Pre-order list of every node whose ancestors are all expanded.
pub fn flatten<'a>(nodes: &'a [TreeNode], expanded: &ExpansionSet) -> Vec<FlatTreeNode<'a>> {
    let mut rows = Vec::new();
    flatten_into(nodes, expanded, 0, &[], &mut rows);
    rows
}

fn flatten_into<'a>(
    nodes: &'a [TreeNode],
    expanded: &ExpansionSet,
    depth: usize,
    parent_path: &[bool],
    rows: &mut Vec<FlatTreeNode<'a>>,
) {
    for (i, node) in nodes.iter().enumerate() {
        let is_last_child = i + 1 == nodes.len();
        let is_expanded = expanded.contains(&node.key);

        rows.push(FlatTreeNode {
            node,
            depth,
            is_expanded,
            has_children: node.has_children(),
            is_last_child,
            parent_path: parent_path.to_vec(),
        });

        if is_expanded && node.has_children() {
            let mut child_path = parent_path.to_vec();
            child_path.push(!is_last_child);
            flatten_into(&node.children, expanded, depth + 1, &child_path, rows);
        }
    }
}

/// Move the selection to the neighbouring enabled, selectable row.
pub fn select_adjacent(
    rows: &[FlatTreeNode<'_>],
    selected: Option<&str>,
    direction: NavDirection,
) -> Option<String> {
    navigation::advance(rows, selected, direction)
}

// =============================================================================
// Guide Lines
// =============================================================================

/// Glyphs used to draw tree guide lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineGlyphs {
    pub line: String,
    pub blank: String,
    pub child: String,
    pub last_child: String,
}

impl Default for LineGlyphs {
    fn default() -> Self {
        Self {
            line: "│".into(),
            blank: " ".into(),
            child: "├─".into(),
            last_child: "└─".into(),
        }
    }
}

/// Guide-line prefix for one row: a line or a blank per ancestor, then a
/// branch glyph for the row itself when it is not at the root level.
pub fn tree_lines(row: &FlatTreeNode<'_>, glyphs: &LineGlyphs) -> String {
    let mut out: String = row
        .parent_path
        .iter()
        .map(|&continues| {
            if continues {
                glyphs.line.as_str()
            } else {
                glyphs.blank.as_str()
            }
        })
        .collect();

    if row.depth > 0 {
        out.push_str(if row.is_last_child {
            &glyphs.last_child
        } else {
            &glyphs.child
        });
    }
    out
}
