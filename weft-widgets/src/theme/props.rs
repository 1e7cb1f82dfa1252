//! Inputs to style functions.

use std::collections::BTreeMap;

/// A single style input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    Bool(bool),
    Int(i64),
    Str(String),
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<i64> for PropValue {
    fn from(value: i64) -> Self {
        PropValue::Int(value)
    }
}

impl From<usize> for PropValue {
    fn from(value: usize) -> Self {
        PropValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

/// Named state passed to a style function, e.g. `is_selected`, `size`.
///
/// Missing props read as `false` / `0` / `None`, so style functions can be
/// called with fewer props than they inspect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleProps {
    values: BTreeMap<&'static str, PropValue>,
}

impl StyleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<PropValue>) -> Self {
        self.values.insert(name, value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropValue> {
        self.values.get(name)
    }

    pub fn flag(&self, name: &str) -> bool {
        matches!(self.get(name), Some(PropValue::Bool(true)))
    }

    pub fn int(&self, name: &str) -> i64 {
        match self.get(name) {
            Some(PropValue::Int(value)) => *value,
            _ => 0,
        }
    }

    pub fn str(&self, name: &str) -> Option<&str> {
        match self.get(name) {
            Some(PropValue::Str(value)) => Some(value),
            _ => None,
        }
    }
}

/// Build [`StyleProps`] from `name: value` pairs.
///
/// ```ignore
/// let props = props! { is_selected: true, size: "medium" };
/// ```
#[macro_export]
macro_rules! props {
    () => {
        $crate::theme::StyleProps::new()
    };
    ($($name:ident : $value:expr),+ $(,)?) => {
        $crate::theme::StyleProps::new()$(.with(stringify!($name), $value))+
    };
}
