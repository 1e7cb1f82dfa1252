use weft::{Align, Element};

use crate::file_browser::BrowserEntry;
use crate::props;
use crate::theme::{Styler, Theme};

use super::FileInput;

impl FileInput {
    pub(super) fn render(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let config = styles.config();
        let files = self.selected_files();
        let has_files = !files.is_empty();

        let summary = if !has_files {
            self.placeholder.clone()
        } else if self.has_multiple {
            format!("{} file(s) selected", files.len())
        } else {
            files[0].clone()
        };

        let input = styles.apply(
            "input_area",
            &props! {
                is_disabled: self.is_disabled,
                is_browsing: self.is_browsing,
                has_files: has_files,
            },
            Element::row()
                .align(Align::Center)
                .child(styles.apply(
                    "input_text",
                    &props! { is_disabled: self.is_disabled, has_files: has_files },
                    Element::text(summary),
                ))
                .child(styles.apply(
                    "browse_button",
                    &props! { is_disabled: self.is_disabled },
                    Element::text(if self.is_browsing { "Browsing..." } else { "Browse" }),
                )),
        );

        let selected_icon = config.str_or("icons.selected_file", "✓");
        let selected = has_files.then(|| {
            let rows = files.iter().map(|file| {
                let remove = (self.has_multiple && !self.is_disabled)
                    .then(|| styles.apply("remove_button", &props! {}, Element::text(" ✕")));
                Element::row()
                    .child(styles.apply(
                        "selected_file",
                        &props! {},
                        Element::text(format!("{selected_icon} {file}")),
                    ))
                    .maybe_child(remove)
            });
            styles.apply(
                "selected_files",
                &props! {},
                Element::col()
                    .child(styles.apply(
                        "selected_files_header",
                        &props! {},
                        Element::text("Selected Files:"),
                    ))
                    .children(rows),
            )
        });

        let label = self
            .label
            .as_ref()
            .map(|label| styles.apply("label", &props! {}, Element::text(label.clone())));

        styles.apply(
            "container",
            &props! {},
            Element::col()
                .maybe_child(label)
                .child(input)
                .maybe_child(selected)
                .maybe_child(self.is_browsing.then(|| self.render_browser(styles))),
        )
    }

    fn render_browser(&self, styles: Styler<'_>) -> Element {
        let config = styles.config();
        let folder = config.str_or("icons.folder", "📁");
        let file_icon = config.str_or("icons.file", "•");
        let selected_icon = config.str_or("icons.selected_file", "✓");
        let back = config.str_or("icons.back", "←");

        let rows = self.browser.entries().iter().enumerate().map(|(index, entry)| {
            let is_file_selected = match entry {
                BrowserEntry::File(name) => self
                    .selected_files()
                    .contains(&self.browser.path_of(name)),
                _ => false,
            };
            let icon = match entry {
                BrowserEntry::Parent => &back,
                BrowserEntry::Directory(_) => &folder,
                BrowserEntry::File(_) if is_file_selected => &selected_icon,
                BrowserEntry::File(_) => &file_icon,
            };
            styles.apply(
                "browser_item",
                &props! {
                    is_selected: index == self.browser.cursor(),
                    is_directory: !matches!(entry, BrowserEntry::File(_)),
                    is_file_selected: is_file_selected,
                },
                Element::text(format!("{icon} {}", entry.display_name())),
            )
        });

        let footer = if self.has_multiple {
            "↑↓ navigate, Enter/Space to select, Esc to close, x to remove"
        } else {
            "↑↓ navigate, Enter/Space to select, Esc to close"
        };

        styles.apply(
            "browser",
            &props! {},
            Element::col()
                .child(styles.apply(
                    "browser_header",
                    &props! {},
                    Element::text(format!("Browse Files: {}", self.browser.directory())),
                ))
                .child(Element::col().children(rows))
                .child(styles.apply("browser_footer", &props! {}, Element::text(footer))),
        )
    }
}
