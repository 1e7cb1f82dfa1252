//! Non-style theme configuration (icons, labels, sizes).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;

/// A configuration tree.
///
/// Deserializes untagged, so overrides can be written in any serde format:
///
/// ```ignore
/// let over: ConfigValue = serde_json::from_str(r#"{"icons": {"expanded": "-"}}"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<ConfigValue>),
    Map(BTreeMap<String, ConfigValue>),
}

impl Default for ConfigValue {
    fn default() -> Self {
        ConfigValue::Map(BTreeMap::new())
    }
}

impl ConfigValue {
    /// A map from `(key, value)` pairs.
    pub fn map<K, V, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<ConfigValue>,
    {
        ConfigValue::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Deep merge: maps merge key by key (recursively), anything else in
    /// `over` replaces `self`.
    pub fn merge(self, over: ConfigValue) -> ConfigValue {
        match (self, over) {
            (ConfigValue::Map(mut base), ConfigValue::Map(over)) => {
                for (key, value) in over {
                    let merged = match base.remove(&key) {
                        Some(existing) => existing.merge(value),
                        None => value,
                    };
                    base.insert(key, merged);
                }
                ConfigValue::Map(base)
            }
            (_, over) => over,
        }
    }

    /// Look up a dot-separated path, e.g. `"icons.expanded"`.
    pub fn get(&self, path: &str) -> Option<&ConfigValue> {
        path.split('.').try_fold(self, |value, segment| match value {
            ConfigValue::Map(map) => map.get(segment),
            _ => None,
        })
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// String at `path`, or an error naming the path.
    pub fn str_at(&self, path: &str) -> Result<&str, ThemeError> {
        self.get(path)
            .and_then(ConfigValue::as_str)
            .ok_or_else(|| ThemeError::ConfigType {
                path: path.to_string(),
                expected: "a string",
            })
    }

    /// Integer at `path`, or an error naming the path.
    pub fn int_at(&self, path: &str) -> Result<i64, ThemeError> {
        self.get(path)
            .and_then(ConfigValue::as_int)
            .ok_or_else(|| ThemeError::ConfigType {
                path: path.to_string(),
                expected: "an integer",
            })
    }

    /// String at `path`, falling back to `default` (with a warning) when it
    /// is missing or not a string.
    pub fn str_or(&self, path: &str, default: &str) -> String {
        match self.str_at(path) {
            Ok(s) => s.to_string(),
            Err(err) => {
                log::warn!("theme config: {err}, using {default:?}");
                default.to_string()
            }
        }
    }

    /// Strings of the list at `path`. Non-string items are skipped.
    pub fn str_list(&self, path: &str) -> Vec<String> {
        match self.get(path) {
            Some(ConfigValue::List(items)) => items
                .iter()
                .filter_map(ConfigValue::as_str)
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::Str(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::Str(value)
    }
}

impl<T: Into<ConfigValue>> From<Vec<T>> for ConfigValue {
    fn from(values: Vec<T>) -> Self {
        ConfigValue::List(values.into_iter().map(Into::into).collect())
    }
}
