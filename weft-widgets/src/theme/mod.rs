//! Component theme registry.
//!
//! A [`Theme`] maps component names (`"Tree"`, `"Slider"`, ...) to a
//! [`ComponentTheme`]: a set of named style functions plus a configuration
//! tree. Widgets look their styles up by name at render time, so swapping
//! the theme passed to `element()` restyles a whole subtree.
//!
//! Themes are immutable once built. [`extend_theme`] produces a new theme
//! in which the override's style functions are layered over the base ones
//! attribute by attribute and configs are deep-merged.
//!
//! # Example
//!
//! ```ignore
//! let theme = extend_theme(
//!     &default_theme(),
//!     &Theme::empty().with_component(
//!         "Tree",
//!         ComponentTheme::new().style("node_label", |p| {
//!             StyleAttributes::new().bold(p.flag("is_selected"))
//!         }),
//!     ),
//! );
//! ```

mod attributes;
mod config;
mod defaults;
mod props;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

pub use attributes::StyleAttributes;
pub use config::ConfigValue;
pub use defaults::default_theme;
pub use props::{PropValue, StyleProps};

use crate::error::ThemeError;

/// A style function.
pub type StyleFn = Arc<dyn Fn(&StyleProps) -> StyleAttributes + Send + Sync>;

/// A config function.
pub type ConfigFn = Arc<dyn Fn() -> ConfigValue + Send + Sync>;

// =============================================================================
// ComponentTheme
// =============================================================================

/// Styles and configuration for one component.
#[derive(Clone, Default)]
pub struct ComponentTheme {
    styles: HashMap<String, StyleFn>,
    config: Option<ConfigFn>,
}

impl ComponentTheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the style function `name`.
    pub fn style<F>(mut self, name: impl Into<String>, style: F) -> Self
    where
        F: Fn(&StyleProps) -> StyleAttributes + Send + Sync + 'static,
    {
        self.styles.insert(name.into(), Arc::new(style));
        self
    }

    /// Register the config function.
    pub fn config<F>(mut self, config: F) -> Self
    where
        F: Fn() -> ConfigValue + Send + Sync + 'static,
    {
        self.config = Some(Arc::new(config));
        self
    }

    pub fn has_style(&self, name: &str) -> bool {
        self.styles.contains_key(name)
    }

    pub fn style_names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Evaluate the style function `name`.
    pub fn resolve(&self, name: &str, props: &StyleProps) -> Option<StyleAttributes> {
        self.styles.get(name).map(|style| style(props))
    }

    /// Evaluate the config function. Empty map when none is registered.
    pub fn config_value(&self) -> ConfigValue {
        self.config.as_ref().map(|config| config()).unwrap_or_default()
    }

    /// Layer `over` on top of `self`.
    ///
    /// Styles present in both are composed so that the override wins for
    /// each attribute it sets. Configs deep-merge.
    pub fn merge(&self, over: &ComponentTheme) -> ComponentTheme {
        let mut styles = self.styles.clone();
        for (name, over_style) in &over.styles {
            let merged: StyleFn = match styles.remove(name) {
                Some(base_style) => {
                    let over_style = Arc::clone(over_style);
                    let composed: StyleFn = Arc::new(move |props: &StyleProps| {
                        base_style(props).merge(&over_style(props))
                    });
                    composed
                }
                None => Arc::clone(over_style),
            };
            styles.insert(name.clone(), merged);
        }

        let config = match (&self.config, &over.config) {
            (Some(base), Some(over)) => {
                let base = Arc::clone(base);
                let over = Arc::clone(over);
                let merged: ConfigFn = Arc::new(move || base().merge(over()));
                Some(merged)
            }
            (base, over) => over.clone().or_else(|| base.clone()),
        };

        ComponentTheme { styles, config }
    }
}

impl fmt::Debug for ComponentTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.style_names().collect();
        names.sort_unstable();
        f.debug_struct("ComponentTheme")
            .field("styles", &names)
            .field("has_config", &self.config.is_some())
            .finish()
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Registry of component themes, cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct Theme {
    components: Arc<HashMap<String, ComponentTheme>>,
}

impl Theme {
    /// A theme with no components registered.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Register (or replace) the theme for `name`.
    pub fn with_component(mut self, name: impl Into<String>, component: ComponentTheme) -> Self {
        Arc::make_mut(&mut self.components).insert(name.into(), component);
        self
    }

    pub fn component(&self, name: &str) -> Result<&ComponentTheme, ThemeError> {
        self.components
            .get(name)
            .ok_or_else(|| ThemeError::UnknownComponent(name.to_string()))
    }

    pub fn component_names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    /// Evaluate `component.style`, failing on unknown names.
    pub fn try_style(
        &self,
        component: &str,
        style: &str,
        props: &StyleProps,
    ) -> Result<StyleAttributes, ThemeError> {
        self.component(component)?
            .resolve(style, props)
            .ok_or_else(|| ThemeError::UnknownStyle {
                component: component.to_string(),
                style: style.to_string(),
            })
    }

    /// Evaluate `component.style`, falling back to empty attributes.
    pub fn style(&self, component: &str, style: &str, props: &StyleProps) -> StyleAttributes {
        match self.try_style(component, style, props) {
            Ok(attributes) => attributes,
            Err(err) => {
                log::warn!("theme: {err}");
                StyleAttributes::default()
            }
        }
    }

    /// Config of `component`. Empty map for unknown components.
    pub fn config(&self, component: &str) -> ConfigValue {
        match self.component(component) {
            Ok(theme) => theme.config_value(),
            Err(err) => {
                log::warn!("theme: {err}");
                ConfigValue::default()
            }
        }
    }

    /// Lookups scoped to one component.
    pub fn styler<'a>(&'a self, component: &'a str) -> Styler<'a> {
        Styler {
            theme: self,
            component,
        }
    }

    /// New theme with `overrides` layered on top. Neither input changes.
    pub fn extend(&self, overrides: &Theme) -> Theme {
        let mut components = (*self.components).clone();
        for (name, over) in overrides.components.iter() {
            let merged = match components.get(name) {
                Some(base) => base.merge(over),
                None => over.clone(),
            };
            components.insert(name.clone(), merged);
        }
        Theme {
            components: Arc::new(components),
        }
    }
}

/// New theme with `overrides` layered on top of `base`.
pub fn extend_theme(base: &Theme, overrides: &Theme) -> Theme {
    base.extend(overrides)
}

/// A [`Theme`] bound to one component name.
#[derive(Debug, Clone, Copy)]
pub struct Styler<'a> {
    theme: &'a Theme,
    component: &'a str,
}

impl Styler<'_> {
    pub fn get(&self, style: &str, props: &StyleProps) -> StyleAttributes {
        self.theme.style(self.component, style, props)
    }

    /// Evaluate `style` and apply it to `element`.
    pub fn apply(&self, style: &str, props: &StyleProps, element: weft::Element) -> weft::Element {
        self.get(style, props).apply(element)
    }

    pub fn config(&self) -> ConfigValue {
        self.theme.config(self.component)
    }
}
