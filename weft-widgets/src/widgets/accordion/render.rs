use weft::{Element, Overflow};

use crate::props;
use crate::theme::Theme;

use super::{Accordion, AccordionItem};

impl Accordion {
    pub(super) fn render(&self, theme: &Theme) -> Element {
        let styles = theme.styler(Self::THEME);
        let config = styles.config();
        let expanded_icon = config.str_or("icons.expanded", "▼");
        let collapsed_icon = config.str_or("icons.collapsed", "▶");

        let sections = self.items.iter().map(|item| {
            self.render_item(theme, item, &expanded_icon, &collapsed_icon)
        });

        styles.apply(
            "container",
            &props! { has_borders: self.has_borders },
            Element::col().children(sections),
        )
    }

    fn render_item(
        &self,
        theme: &Theme,
        item: &AccordionItem,
        expanded_icon: &str,
        collapsed_icon: &str,
    ) -> Element {
        let styles = theme.styler(Self::THEME);
        let is_expanded = self.is_expanded(&item.key);
        let is_selected = self.focused.as_deref() == Some(item.key.as_str());
        let is_disabled = item.is_disabled;
        let size = self.size.as_str();

        let expand_icon = self.has_icons.then(|| {
            styles.apply(
                "expand_icon",
                &props! { is_expanded: is_expanded, is_disabled: is_disabled },
                Element::text(if is_expanded { expanded_icon } else { collapsed_icon }),
            )
        });
        let item_icon = item.icon.as_ref().map(|icon| {
            styles.apply(
                "item_icon",
                &props! { is_disabled: is_disabled },
                Element::text(icon.clone()),
            )
        });
        let title = styles.apply(
            "title",
            &props! { is_expanded: is_expanded, is_disabled: is_disabled, is_selected: is_selected },
            Element::text(item.title.clone()),
        );

        let header = styles.apply(
            "header",
            &props! {
                is_expanded: is_expanded,
                is_disabled: is_disabled,
                is_selected: is_selected,
                size: size,
            },
            Element::row()
                .gap(1)
                .maybe_child(expand_icon)
                .maybe_child(item_icon)
                .child(title),
        );

        let animation = self.animations.get(&item.key);
        let content = (is_expanded || animation.is_some()).then(|| {
            let body = styles.apply(
                "content",
                &props! { size: size },
                Element::col().overflow(Overflow::Hidden).child(self.content_of(theme, item)),
            );
            match animation {
                Some(entry) => body.height(weft::Size::Fixed(entry.current_height)),
                None => body,
            }
        });

        styles.apply(
            "item",
            &props! {
                is_expanded: is_expanded,
                is_disabled: is_disabled,
                has_borders: self.has_borders,
                size: size,
            },
            Element::col().id(format!("accordion-{}", item.key)).child(header).maybe_child(content),
        )
    }

    fn content_of(&self, theme: &Theme, item: &AccordionItem) -> Element {
        if item.content.get_text().is_some() {
            theme
                .styler(Self::THEME)
                .apply("content_text", &props! {}, item.content.clone())
        } else {
            item.content.clone()
        }
    }
}
