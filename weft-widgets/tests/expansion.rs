use std::sync::{Arc, Mutex};

use weft::Key;
use weft_widgets::expansion::{self, ExpansionSet, LineGlyphs, TreeNode};
use weft_widgets::navigation::NavDirection;
use weft_widgets::{EventResult, Widget};
use weft_widgets::widgets::Tree;

fn scenario_tree() -> Vec<TreeNode> {
    vec![
        TreeNode::new("root", "Root")
            .default_expanded(true)
            .child(TreeNode::new("child1", "Child 1"))
            .child(TreeNode::new("child2", "Child 2").child(TreeNode::new("grandchild", "Grandchild"))),
    ]
}

fn deep_tree() -> Vec<TreeNode> {
    vec![
        TreeNode::new("root", "Root")
            .child(
                TreeNode::new("a", "A")
                    .child(TreeNode::new("a1", "A1").child(TreeNode::new("a1x", "A1x")))
                    .child(TreeNode::new("a2", "A2")),
            )
            .child(TreeNode::new("b", "B").child(TreeNode::new("b1", "B1"))),
        TreeNode::new("other", "Other"),
    ]
}

fn keys(rows: &[expansion::FlatTreeNode<'_>]) -> Vec<String> {
    rows.iter().map(|row| row.node.key.clone()).collect()
}

/// Pre-order `(key, ancestors)` for every node.
fn with_ancestors(nodes: &[TreeNode], ancestors: &[String], out: &mut Vec<(String, Vec<String>)>) {
    for node in nodes {
        out.push((node.key.clone(), ancestors.to_vec()));
        let mut path = ancestors.to_vec();
        path.push(node.key.clone());
        with_ancestors(&node.children, &path, out);
    }
}

// ============================================================================
// Flattening
// ============================================================================

#[test]
fn test_flatten_scenario() {
    let nodes = scenario_tree();
    let expanded = ExpansionSet::from_defaults(&nodes);

    let rows = expansion::flatten(&nodes, &expanded);
    assert_eq!(keys(&rows), vec!["root", "child1", "child2"]);
    assert_eq!(rows.iter().map(|r| r.depth).collect::<Vec<_>>(), vec![0, 1, 1]);

    let expanded = expanded.with("child2");
    let rows = expansion::flatten(&nodes, &expanded);
    assert_eq!(keys(&rows), vec!["root", "child1", "child2", "grandchild"]);
    let grandchild = &rows[3];
    assert_eq!(grandchild.depth, 2);
    assert!(grandchild.is_last_child);
    assert!(!grandchild.has_children);
}

#[test]
fn test_flatten_visibility_is_and_over_ancestors() {
    let nodes = deep_tree();
    let mut all = Vec::new();
    with_ancestors(&nodes, &[], &mut all);
    let branches = ["root", "a", "a1", "b"];

    for mask in 0..(1u32 << branches.len()) {
        let expanded = ExpansionSet::from_keys(
            branches
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, key)| *key),
        );
        let expected: Vec<String> = all
            .iter()
            .filter(|(_, ancestors)| ancestors.iter().all(|a| expanded.contains(a)))
            .map(|(key, _)| key.clone())
            .collect();

        assert_eq!(keys(&expansion::flatten(&nodes, &expanded)), expected, "mask {mask:b}");
    }
}

#[test]
fn test_flatten_ignores_expanded_leaves_and_unknown_keys() {
    let nodes = deep_tree();
    let expanded = ExpansionSet::from_keys(["other", "nope"]);
    let rows = expansion::flatten(&nodes, &expanded);
    assert_eq!(keys(&rows), vec!["root", "other"]);
    assert!(rows[1].is_expanded);
    assert!(!rows[1].has_children);
}

#[test]
fn test_toggle_twice_restores_membership() {
    let base = ExpansionSet::from_keys(["a", "b"]);

    for key in ["a", "c"] {
        let (once, state) = base.toggled(key);
        assert_eq!(state, !base.contains(key));
        let (twice, state_again) = once.toggled(key);
        assert_eq!(state_again, base.contains(key));
        assert_eq!(twice, base);
    }
}

#[test]
fn test_default_expansion_is_recursive() {
    let nodes = vec![
        TreeNode::new("a", "A")
            .child(TreeNode::new("a1", "A1").default_expanded(true).child(TreeNode::new("x", "X"))),
    ];
    let set = ExpansionSet::from_defaults(&nodes);
    assert!(set.contains("a1"));
    assert!(!set.contains("a"));
    assert_eq!(set.len(), 1);
}

#[test]
fn test_tree_lines_prefix() {
    let nodes = scenario_tree();
    let expanded = ExpansionSet::from_keys(["root", "child2"]);
    let rows = expansion::flatten(&nodes, &expanded);
    let glyphs = LineGlyphs::default();

    let lines: Vec<String> = rows.iter().map(|row| expansion::tree_lines(row, &glyphs)).collect();
    assert_eq!(lines, vec!["", " ├─", " └─", "  └─"]);

    let nodes = deep_tree();
    let expanded = ExpansionSet::from_keys(["root", "a", "a1"]);
    let rows = expansion::flatten(&nodes, &expanded);
    let a1x = rows.iter().find(|row| row.node.key == "a1x").unwrap();
    // root has a later sibling, a has a later sibling, a1 does too.
    assert_eq!(a1x.parent_path, vec![true, true, true]);
    assert_eq!(expansion::tree_lines(a1x, &glyphs), "│││└─");
}

#[test]
fn test_select_adjacent_skips_unselectable() {
    let nodes = vec![
        TreeNode::new("a", "A"),
        TreeNode::new("b", "B").selectable(false),
        TreeNode::new("c", "C").disabled(true),
        TreeNode::new("d", "D"),
    ];
    let rows = expansion::flatten(&nodes, &ExpansionSet::new());
    assert_eq!(
        expansion::select_adjacent(&rows, Some("a"), NavDirection::Forward).as_deref(),
        Some("d")
    );
    assert_eq!(
        expansion::select_adjacent(&rows, Some("a"), NavDirection::Backward).as_deref(),
        Some("d")
    );
}

// ============================================================================
// Tree widget
// ============================================================================

#[test]
fn test_tree_keyboard_navigation() {
    let mut tree = Tree::new(scenario_tree()).default_selected_key("root");

    assert_eq!(tree.handle_key(Key::Down), EventResult::Consumed);
    assert_eq!(tree.selected(), Some("child1"));
    assert_eq!(tree.handle_key(Key::Down), EventResult::Consumed);
    assert_eq!(tree.selected(), Some("child2"));

    // Right expands a collapsed branch only.
    assert_eq!(tree.handle_key(Key::Right), EventResult::Consumed);
    assert!(tree.expanded().contains("child2"));
    assert_eq!(tree.handle_key(Key::Right), EventResult::Ignored);

    assert_eq!(tree.handle_key(Key::Down), EventResult::Consumed);
    assert_eq!(tree.selected(), Some("grandchild"));
    // Left on a leaf does nothing.
    assert_eq!(tree.handle_key(Key::Left), EventResult::Ignored);

    assert_eq!(tree.handle_key(Key::Up), EventResult::Consumed);
    assert_eq!(tree.handle_key(Key::Left), EventResult::Consumed);
    assert!(!tree.expanded().contains("child2"));
    assert_eq!(tree.handle_key(Key::Left), EventResult::Ignored);
}

#[test]
fn test_tree_activate_toggles_branch_or_selects_leaf() {
    let selected = Arc::new(Mutex::new(Vec::new()));
    let toggled = Arc::new(Mutex::new(Vec::new()));
    let selected_log = Arc::clone(&selected);
    let toggled_log = Arc::clone(&toggled);

    let mut tree = Tree::new(scenario_tree())
        .default_selected_key("root")
        .on_select(move |node| selected_log.lock().unwrap().push(node.key.clone()))
        .on_toggle(move |node, open| toggled_log.lock().unwrap().push((node.key.clone(), open)));

    // Branch: toggles, selection untouched.
    assert_eq!(tree.handle_key(Key::Enter), EventResult::Consumed);
    assert!(!tree.expanded().contains("root"));
    assert_eq!(tree.selected(), Some("root"));
    assert_eq!(*toggled.lock().unwrap(), vec![("root".to_string(), false)]);
    assert!(selected.lock().unwrap().is_empty());

    tree.handle_key(Key::Char(' '));
    tree.handle_key(Key::Down);
    selected.lock().unwrap().clear();

    // Leaf: selects, no toggle.
    assert_eq!(tree.handle_key(Key::Enter), EventResult::Consumed);
    assert_eq!(*selected.lock().unwrap(), vec!["child1".to_string()]);
    assert_eq!(toggled.lock().unwrap().len(), 2);
}

#[test]
fn test_tree_controlled_selection_does_not_move() {
    let requested = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&requested);
    let mut tree = Tree::new(scenario_tree())
        .selected_key("root")
        .on_select(move |node| log.lock().unwrap().push(node.key.clone()));

    tree.handle_key(Key::Down);
    assert_eq!(tree.selected(), Some("root"));
    assert_eq!(*requested.lock().unwrap(), vec!["child1".to_string()]);

    tree.set_selected_key(Some("child2".to_string()));
    assert_eq!(tree.selected(), Some("child2"));
}

#[test]
fn test_tree_renders_visible_rows() {
    let tree = Tree::new(scenario_tree()).default_selected_key("child1");
    let element = tree.element(&weft_widgets::default_theme());

    assert!(element.find("tree-root").is_some());
    assert!(element.find("tree-child2").is_some());
    assert!(element.find("tree-grandchild").is_none());
    let text = element.plain_text();
    assert!(text.contains("Child 1"), "{text}");
}
