use weft::Element;

use crate::expansion::{self, FlatTreeNode, LineGlyphs};
use crate::props;
use crate::theme::Theme;

use super::Tree;

struct Icons {
    expanded: String,
    collapsed: String,
    folder: String,
    file: String,
    lines: LineGlyphs,
}

impl Tree {
    pub(super) fn render(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let config = styles.config();
        let defaults = LineGlyphs::default();
        let icons = Icons {
            expanded: config.str_or("icons.expanded", "▼"),
            collapsed: config.str_or("icons.collapsed", "▶"),
            folder: config.str_or("icons.folder", "📁"),
            file: config.str_or("icons.file", "•"),
            lines: LineGlyphs {
                line: config.str_or("icons.line", &defaults.line),
                blank: defaults.blank.clone(),
                child: config.str_or("icons.child", &defaults.child),
                last_child: config.str_or("icons.last_child", &defaults.last_child),
            },
        };

        let rows = self.visible();
        styles.apply(
            "container",
            &props! {},
            Element::col().children(rows.iter().map(|row| self.render_row(theme, row, &icons))),
        )
    }

    fn render_row(&self, theme: &Theme, row: &FlatTreeNode<'_>, icons: &Icons) -> Element {
        let styles = theme.styler(Self::THEME);
        let node = row.node;
        let is_selected = self.selected() == Some(node.key.as_str());
        let is_disabled = node.is_disabled;

        let lines = self.has_lines.then(|| {
            styles.apply(
                "lines",
                &props! {},
                Element::text(expansion::tree_lines(row, &icons.lines)),
            )
        });
        let expand_icon = row.has_children.then(|| {
            let icon = if row.is_expanded { &icons.expanded } else { &icons.collapsed };
            styles.apply("expand_icon", &props! {}, Element::text(format!("{icon} ")))
        });
        let node_icon = self.has_icons.then(|| {
            let icon = node.icon.clone().unwrap_or_else(|| {
                if row.has_children {
                    icons.folder.clone()
                } else {
                    icons.file.clone()
                }
            });
            styles.apply(
                "node_icon",
                &props! { is_selected: is_selected, is_disabled: is_disabled },
                Element::text(format!("{icon} ")),
            )
        });
        let label = styles.apply(
            "node_label",
            &props! { is_selected: is_selected, is_disabled: is_disabled },
            Element::text(node.label.clone()),
        );

        styles.apply(
            "node",
            &props! { is_selected: is_selected, is_disabled: is_disabled, depth: row.depth },
            Element::row()
                .id(format!("tree-{}", node.key))
                .maybe_child(lines)
                .maybe_child(expand_icon)
                .maybe_child(node_icon)
                .child(label),
        )
    }
}
