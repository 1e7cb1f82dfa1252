use weft::{Align, Element};

use crate::props;
use crate::search::{self, SearchResult};
use crate::theme::{Styler, Theme};

use super::SearchInput;

impl SearchInput {
    pub(super) fn render(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let config = styles.config();
        let query = self.query();
        let has_value = !query.is_empty();

        let label = self
            .label
            .as_ref()
            .map(|label| styles.apply("label", &props! {}, Element::text(label.clone())));

        let icon = self.has_search_icon.then(|| {
            styles.apply(
                "search_icon",
                &props! { is_disabled: self.is_disabled },
                Element::text(format!("{} ", config.str_or("icons.search", "🔍"))),
            )
        });
        let clear = (self.has_clear_button && has_value && !self.is_disabled).then(|| {
            styles.apply(
                "clear_button",
                &props! {},
                Element::text(format!(" {}", config.str_or("icons.clear", "✕"))),
            )
        });
        let input = styles.apply(
            "input_container",
            &props! { is_disabled: self.is_disabled, is_active: self.search.is_showing_results() },
            Element::row()
                .align(Align::Center)
                .maybe_child(icon)
                .child(styles.apply(
                    "input",
                    &props! { is_disabled: self.is_disabled, has_value: has_value },
                    Element::text(if has_value { query } else { self.placeholder.as_str() }),
                ))
                .maybe_child(clear),
        );

        styles.apply(
            "container",
            &props! {},
            Element::col()
                .maybe_child(label)
                .child(input)
                .maybe_child(self.render_results(styles)),
        )
    }

    fn render_results(&self, styles: Styler<'_>) -> Option<Element> {
        if !self.search.is_open() {
            return None;
        }
        let config = styles.config();
        let result_icon = config.str_or("icons.result", "•");
        let category_icon = config.str_or("icons.category", "▶");

        let mut index = 0;
        let mut body = Element::col();
        for group in self.search.groups() {
            if self.search.has_grouping() {
                body = body.child(styles.apply(
                    "category_header",
                    &props! {},
                    Element::text(format!("{category_icon} {}", group.category)),
                ));
            }
            for result in &group.results {
                let is_selected = index == self.search.result_index();
                body = body.child(self.render_result(styles, result, is_selected, &result_icon));
                index += 1;
            }
        }

        Some(styles.apply(
            "results_container",
            &props! {},
            body.child(styles.apply(
                "results_footer",
                &props! {},
                Element::text("↑↓ navigate, Enter to select, Esc to close"),
            )),
        ))
    }

    fn render_result(
        &self,
        styles: Styler<'_>,
        result: &SearchResult,
        is_selected: bool,
        icon: &str,
    ) -> Element {
        let highlight = |text: &str| {
            if self.has_highlight {
                search::highlight_matches(text, self.query())
            } else {
                text.to_string()
            }
        };

        let description = result.description.as_ref().map(|description| {
            styles.apply("result_description", &props! {}, Element::text(highlight(description)))
        });

        Element::col()
            .id(format!("result-{}", result.id))
            .child(styles.apply(
                "result_item",
                &props! { is_selected: is_selected },
                Element::text(format!("{icon} {}", highlight(&result.label))),
            ))
            .maybe_child(description)
    }
}
